use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier wrapper for evaluated sites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteId(pub String);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Location kinds that decide which specialised metrics and scorecard apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteType {
    Office,
    Hospital,
    School,
    Residential,
}

impl SiteType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Office, Self::Hospital, Self::School, Self::Residential]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Hospital => "hospital",
            Self::School => "school",
            Self::Residential => "residential",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Hospital => "Hospital",
            Self::School => "School",
            Self::Residential => "Residential",
        }
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SiteType {
    type Err = DomainParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|site_type| site_type.key() == normalized)
            .ok_or_else(|| DomainParseError::UnknownSiteType(value.to_string()))
    }
}

/// Display grouping for catalog metrics. Carries no scoring logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    FootTraffic,
    Demographics,
    Competition,
    Accessibility,
    Security,
    Amenities,
    Operations,
    Financial,
    Layout,
    Restrictions,
}

impl MetricCategory {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::FootTraffic,
            Self::Demographics,
            Self::Competition,
            Self::Accessibility,
            Self::Security,
            Self::Amenities,
            Self::Operations,
            Self::Financial,
            Self::Layout,
            Self::Restrictions,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::FootTraffic => "foot_traffic",
            Self::Demographics => "demographics",
            Self::Competition => "competition",
            Self::Accessibility => "accessibility",
            Self::Security => "security",
            Self::Amenities => "amenities",
            Self::Operations => "operations",
            Self::Financial => "financial",
            Self::Layout => "layout",
            Self::Restrictions => "restrictions",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FootTraffic => "Foot Traffic",
            Self::Demographics => "Demographics",
            Self::Competition => "Competition",
            Self::Accessibility => "Accessibility",
            Self::Security => "Security",
            Self::Amenities => "Amenities",
            Self::Operations => "Operations",
            Self::Financial => "Financial",
            Self::Layout => "Layout",
            Self::Restrictions => "Restrictions",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MetricCategory {
    type Err = DomainParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ordered()
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| DomainParseError::UnknownCategory(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainParseError {
    #[error("unknown site type '{0}' (expected office, hospital, school, or residential)")]
    UnknownSiteType(String),
    #[error("unknown metric category '{0}'")]
    UnknownCategory(String),
}
