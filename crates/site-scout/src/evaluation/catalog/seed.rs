use super::{MetricDefinition, RatingRange};
use crate::evaluation::domain::{MetricCategory, SiteType};

struct SeedMetric {
    key: &'static str,
    title: &'static str,
    description: &'static str,
    category: MetricCategory,
    weight: f64,
    required: bool,
    labels: [&'static str; 5],
}

impl SeedMetric {
    fn into_definition(self, applicable: &[SiteType]) -> MetricDefinition {
        MetricDefinition {
            key: self.key.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            weight: self.weight,
            is_required: self.required,
            applicable_types: applicable.iter().copied().collect(),
            rating_range: RatingRange::default(),
            rating_labels: (1u8..)
                .zip(self.labels)
                .map(|(rating, label)| (rating, label.to_string()))
                .collect(),
        }
    }
}

/// General weights sum to 0.75 and every specialised set to 0.25, so each site type's
/// applicable catalog totals 1.0.
pub(crate) fn standard_definitions() -> Vec<MetricDefinition> {
    let all_types = SiteType::ordered();
    let mut definitions: Vec<MetricDefinition> = general_metrics()
        .into_iter()
        .map(|metric| metric.into_definition(&all_types))
        .collect();

    for site_type in all_types {
        definitions.extend(
            specialised_metrics(site_type)
                .into_iter()
                .map(|metric| metric.into_definition(&[site_type])),
        );
    }

    definitions
}

fn general_metrics() -> Vec<SeedMetric> {
    vec![
        SeedMetric {
            key: "foot_traffic",
            title: "Foot Traffic",
            description: "Volume of people passing the proposed placement during operating hours.",
            category: MetricCategory::FootTraffic,
            weight: 0.15,
            required: true,
            labels: [
                "Very low traffic",
                "Low traffic",
                "Moderate traffic",
                "High traffic",
                "Very high traffic",
            ],
        },
        SeedMetric {
            key: "demographics",
            title: "Demographics",
            description: "How well the people on site match vending customer profiles.",
            category: MetricCategory::Demographics,
            weight: 0.10,
            required: true,
            labels: [
                "Poor fit",
                "Weak fit",
                "Mixed fit",
                "Good fit",
                "Ideal fit",
            ],
        },
        SeedMetric {
            key: "competition",
            title: "Competition",
            description: "Nearby food and beverage alternatives competing for the same purchases.",
            category: MetricCategory::Competition,
            weight: 0.10,
            required: true,
            labels: [
                "High competition",
                "Significant competition",
                "Some competition",
                "Little competition",
                "No competition",
            ],
        },
        SeedMetric {
            key: "accessibility",
            title: "Accessibility",
            description: "Ease of reaching the machine for customers and for restocking.",
            category: MetricCategory::Accessibility,
            weight: 0.10,
            required: true,
            labels: [
                "Hard to reach",
                "Restricted access",
                "Reachable with effort",
                "Easy access",
                "Unobstructed access",
            ],
        },
        SeedMetric {
            key: "security",
            title: "Security",
            description: "Risk of vandalism or theft at the placement.",
            category: MetricCategory::Security,
            weight: 0.08,
            required: false,
            labels: [
                "Unsecured area",
                "Occasional oversight",
                "Staffed during the day",
                "Monitored premises",
                "Guarded around the clock",
            ],
        },
        SeedMetric {
            key: "visibility",
            title: "Visibility",
            description: "How easily passers-by notice the machine.",
            category: MetricCategory::Layout,
            weight: 0.08,
            required: false,
            labels: [
                "Hidden",
                "Partially hidden",
                "Visible on approach",
                "Prominent",
                "Focal point",
            ],
        },
        SeedMetric {
            key: "amenities",
            title: "Amenities",
            description: "Seating, break areas, and other features that encourage purchases.",
            category: MetricCategory::Amenities,
            weight: 0.06,
            required: false,
            labels: [
                "No amenities",
                "Minimal amenities",
                "Basic amenities",
                "Good amenities",
                "Excellent amenities",
            ],
        },
        SeedMetric {
            key: "commission",
            title: "Commission Terms",
            description: "Revenue share or placement fee demanded by the location owner.",
            category: MetricCategory::Financial,
            weight: 0.08,
            required: true,
            labels: [
                "Prohibitive commission",
                "High commission",
                "Market-rate commission",
                "Low commission",
                "No commission",
            ],
        },
    ]
}

fn specialised_metrics(site_type: SiteType) -> Vec<SeedMetric> {
    match site_type {
        SiteType::Office => office_metrics(),
        SiteType::Hospital => hospital_metrics(),
        SiteType::School => school_metrics(),
        SiteType::Residential => residential_metrics(),
    }
}

fn office_metrics() -> Vec<SeedMetric> {
    vec![
        SeedMetric {
            key: "office_headcount",
            title: "Employee Headcount",
            description: "Number of employees working in the building on a typical day.",
            category: MetricCategory::FootTraffic,
            weight: 0.07,
            required: true,
            labels: [
                "Under 50 employees",
                "50-150 employees",
                "150-300 employees",
                "300-600 employees",
                "Over 600 employees",
            ],
        },
        SeedMetric {
            key: "office_break_facilities",
            title: "Break Facilities",
            description: "Quality of the break room or kitchen where the machine would sit.",
            category: MetricCategory::Amenities,
            weight: 0.05,
            required: false,
            labels: [
                "No break area",
                "Shared corridor space",
                "Small break room",
                "Dedicated break room",
                "Full staff lounge",
            ],
        },
        SeedMetric {
            key: "office_building_hours",
            title: "Building Hours",
            description: "How long the building is occupied each day.",
            category: MetricCategory::Operations,
            weight: 0.05,
            required: false,
            labels: [
                "Part-time occupancy",
                "Standard business hours",
                "Extended hours",
                "Shift-based occupancy",
                "Occupied around the clock",
            ],
        },
        SeedMetric {
            key: "office_food_competition",
            title: "On-site Food Options",
            description: "Cafeterias, pantries, or catered offerings inside the building.",
            category: MetricCategory::Competition,
            weight: 0.04,
            required: false,
            labels: [
                "Free catered food",
                "Full cafeteria",
                "Limited cafeteria hours",
                "Coffee station only",
                "No food on site",
            ],
        },
        SeedMetric {
            key: "office_access_control",
            title: "Access Control",
            description: "Badge or escort requirements for the service technician.",
            category: MetricCategory::Restrictions,
            weight: 0.04,
            required: false,
            labels: [
                "Escort required every visit",
                "Scheduled escort windows",
                "Badge after background check",
                "Temporary badge on arrival",
                "Open access",
            ],
        },
    ]
}

fn hospital_metrics() -> Vec<SeedMetric> {
    vec![
        SeedMetric {
            key: "hospital_daily_visitors",
            title: "Daily Visitors",
            description: "Patients, visitors, and staff passing the placement each day.",
            category: MetricCategory::FootTraffic,
            weight: 0.07,
            required: true,
            labels: [
                "Under 200 people",
                "200-500 people",
                "500-1,000 people",
                "1,000-2,500 people",
                "Over 2,500 people",
            ],
        },
        SeedMetric {
            key: "hospital_shift_coverage",
            title: "Shift Coverage",
            description: "Overnight and weekend staffing that sustains off-hours sales.",
            category: MetricCategory::Operations,
            weight: 0.05,
            required: false,
            labels: [
                "Day shift only",
                "Two shifts",
                "Three shifts on weekdays",
                "Three shifts most days",
                "Continuous coverage",
            ],
        },
        SeedMetric {
            key: "hospital_waiting_capacity",
            title: "Waiting Area Capacity",
            description: "Seating in nearby waiting areas where visitors linger.",
            category: MetricCategory::Layout,
            weight: 0.05,
            required: false,
            labels: [
                "No seating",
                "A few chairs",
                "Small waiting room",
                "Large waiting room",
                "Multiple large waiting rooms",
            ],
        },
        SeedMetric {
            key: "hospital_cafeteria_competition",
            title: "Cafeteria Competition",
            description: "Cafeteria opening hours relative to the machine's location.",
            category: MetricCategory::Competition,
            weight: 0.04,
            required: false,
            labels: [
                "24-hour cafeteria next door",
                "24-hour cafeteria in building",
                "Cafeteria closes evenings",
                "Cafeteria far away",
                "No cafeteria",
            ],
        },
        SeedMetric {
            key: "hospital_wellness_policy",
            title: "Wellness Policy",
            description: "Restrictions the hospital places on sugary or unhealthy products.",
            category: MetricCategory::Restrictions,
            weight: 0.04,
            required: false,
            labels: [
                "Healthy products only",
                "Strict nutrition quotas",
                "Moderate nutrition quotas",
                "Labelling requirements only",
                "No product restrictions",
            ],
        },
    ]
}

fn school_metrics() -> Vec<SeedMetric> {
    vec![
        SeedMetric {
            key: "school_enrollment",
            title: "Enrollment",
            description: "Students and staff on campus during the school day.",
            category: MetricCategory::FootTraffic,
            weight: 0.07,
            required: true,
            labels: [
                "Under 200 people",
                "200-500 people",
                "500-1,000 people",
                "1,000-2,000 people",
                "Over 2,000 people",
            ],
        },
        SeedMetric {
            key: "school_nutrition_policy",
            title: "Nutrition Policy",
            description: "District rules on which products may be sold to students.",
            category: MetricCategory::Restrictions,
            weight: 0.06,
            required: true,
            labels: [
                "Vending prohibited",
                "Water and fruit only",
                "Approved snack list",
                "Limits during school hours",
                "No additional limits",
            ],
        },
        SeedMetric {
            key: "school_supervised_placement",
            title: "Supervised Placement",
            description: "Staff oversight of the area where the machine would stand.",
            category: MetricCategory::Security,
            weight: 0.04,
            required: false,
            labels: [
                "Unsupervised",
                "Rarely supervised",
                "Supervised at breaks",
                "Near staff offices",
                "Camera and staff coverage",
            ],
        },
        SeedMetric {
            key: "school_access_hours",
            title: "Access Hours",
            description: "Windows when the building is open for restocking and sales.",
            category: MetricCategory::Operations,
            weight: 0.04,
            required: false,
            labels: [
                "Class hours only",
                "Class hours plus lunch",
                "Extended day",
                "Evenings during term",
                "Year-round access",
            ],
        },
        SeedMetric {
            key: "school_event_traffic",
            title: "Event Traffic",
            description: "Sports, performances, and community events held on site.",
            category: MetricCategory::FootTraffic,
            weight: 0.04,
            required: false,
            labels: [
                "No events",
                "A few events a year",
                "Monthly events",
                "Weekly events",
                "Several events a week",
            ],
        },
    ]
}

fn residential_metrics() -> Vec<SeedMetric> {
    vec![
        SeedMetric {
            key: "residential_household_count",
            title: "Household Count",
            description: "Occupied units sharing the placement area.",
            category: MetricCategory::FootTraffic,
            weight: 0.07,
            required: true,
            labels: [
                "Under 50 units",
                "50-100 units",
                "100-200 units",
                "200-400 units",
                "Over 400 units",
            ],
        },
        SeedMetric {
            key: "residential_occupancy_rate",
            title: "Occupancy Rate",
            description: "Share of units currently leased.",
            category: MetricCategory::Demographics,
            weight: 0.05,
            required: false,
            labels: [
                "Under 60% occupied",
                "60-75% occupied",
                "75-85% occupied",
                "85-95% occupied",
                "Over 95% occupied",
            ],
        },
        SeedMetric {
            key: "residential_shared_spaces",
            title: "Shared Spaces",
            description: "Lobbies, laundry rooms, and gyms where the machine can be placed.",
            category: MetricCategory::Layout,
            weight: 0.05,
            required: false,
            labels: [
                "No shared space",
                "Hallway only",
                "Single shared room",
                "Several shared rooms",
                "Clubhouse or amenity center",
            ],
        },
        SeedMetric {
            key: "residential_retail_competition",
            title: "Nearby Retail",
            description: "Convenience stores within walking distance of the property.",
            category: MetricCategory::Competition,
            weight: 0.04,
            required: false,
            labels: [
                "Store on the ground floor",
                "Store next door",
                "Store within a block",
                "Store a short drive away",
                "No store nearby",
            ],
        },
        SeedMetric {
            key: "residential_property_management",
            title: "Property Management",
            description: "Responsiveness of on-site management to service requests.",
            category: MetricCategory::Operations,
            weight: 0.04,
            required: false,
            labels: [
                "Unresponsive",
                "Slow to respond",
                "Responds within days",
                "Responds same day",
                "On-site and proactive",
            ],
        },
    ]
}
