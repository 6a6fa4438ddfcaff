use serde::{Deserialize, Serialize};

use super::ScoreField;
use crate::evaluation::domain::SiteType;

/// Declares a scorecard field enum together with its keys and titles.
macro_rules! score_fields {
    (
        $(#[$meta:meta])*
        $name:ident for $site_type:expr => {
            $($variant:ident => ($key:literal, $title:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl ScoreField for $name {
            const SITE_TYPE: SiteType = $site_type;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            fn title(self) -> &'static str {
                match self {
                    $(Self::$variant => $title),+
                }
            }
        }
    };
}

score_fields! {
    /// Office building placement checks.
    OfficeField for SiteType::Office => {
        EmployeeCount => ("office_employee_count", "Employee Count"),
        BreakRoom => ("office_break_room", "Break Room"),
        CommonAreas => ("office_common_areas", "Common Areas"),
        HoursAccess => ("office_hours_access", "After-hours Access"),
        TenantAmenities => ("office_tenant_amenities", "Tenant Amenities"),
        SecurityDesk => ("office_security_desk", "Security Desk"),
    }
}

score_fields! {
    /// Hospital and clinic placement checks.
    HospitalField for SiteType::Hospital => {
        PatientVolume => ("hospital_patient_volume", "Patient Volume"),
        StaffCount => ("hospital_staff_count", "Staff Count"),
        VisitorTraffic => ("hospital_visitor_traffic", "Visitor Traffic"),
        WaitingAreas => ("hospital_waiting_areas", "Waiting Areas"),
        CafeteriaHours => ("hospital_cafeteria_hours", "Cafeteria Hours"),
        HealthyOptions => ("hospital_healthy_options", "Healthy Options Demand"),
    }
}

score_fields! {
    /// School campus placement checks.
    SchoolField for SiteType::School => {
        StudentCount => ("school_student_count", "Student Count"),
        StaffCount => ("school_staff_count", "Staff Count"),
        NutritionCompliance => ("school_nutrition_compliance", "Nutrition Compliance"),
        BreakSchedule => ("school_break_schedule", "Break Schedule"),
        AfterSchoolActivities => ("school_after_school_activities", "After-school Activities"),
        Supervision => ("school_supervision", "Supervision"),
    }
}

score_fields! {
    /// Apartment and condominium placement checks.
    ResidentialField for SiteType::Residential => {
        UnitCount => ("residential_unit_count", "Unit Count"),
        Occupancy => ("residential_occupancy", "Occupancy"),
        LobbyTraffic => ("residential_lobby_traffic", "Lobby Traffic"),
        LaundryRoom => ("residential_laundry_room", "Laundry Room"),
        ResidentDemographics => ("residential_resident_demographics", "Resident Demographics"),
        NearbyRetail => ("residential_nearby_retail", "Nearby Retail"),
        ManagementSupport => ("residential_management_support", "Management Support"),
    }
}
