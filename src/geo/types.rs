use std::fmt;

use serde::Deserialize;

/// Fields a geolocation provider may return. All are optional and any
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeoPayload {
    pub city: Option<String>,
    pub region: Option<String>,
    pub region_code: Option<String>,
    pub country: Option<String>,
    pub country_name: Option<String>,
}

impl GeoPayload {
    fn field(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|s| !s.is_empty())
    }

    fn city(&self) -> Option<&str> {
        Self::field(self.city.as_deref())
    }

    fn country(&self) -> Option<&str> {
        Self::field(self.country.as_deref())
            .or_else(|| Self::field(self.country_name.as_deref()))
    }

    fn region(&self) -> Option<&str> {
        Self::field(self.region.as_deref())
            .or_else(|| Self::field(self.region_code.as_deref()))
    }

    /// True when the payload carries nothing that could be displayed.
    pub fn is_empty(&self) -> bool {
        self.city().is_none() && self.country().is_none()
    }

    pub fn to_location(&self) -> LocationResult {
        match (self.city(), self.region().or_else(|| self.country())) {
            (Some(city), Some(area)) => LocationResult::Place {
                city: city.to_string(),
                area: area.to_string(),
            },
            (Some(city), None) => LocationResult::City(city.to_string()),
            (None, _) => self
                .country()
                .map_or(LocationResult::Unknown, |c| LocationResult::Country(c.to_string())),
        }
    }
}

/// Best-effort approximate location of the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationResult {
    /// A city with its region, or its country when no region is known.
    Place { city: String, area: String },
    City(String),
    Country(String),
    #[default]
    Unknown,
}

impl LocationResult {
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for LocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { city, area } => write!(f, "{city}, {area}"),
            Self::City(city) => f.write_str(city),
            Self::Country(country) => f.write_str(country),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}
