use serde::{Deserialize, Serialize};

pub fn locations_route() -> &'static str {
    "/locations"
}

pub fn name_availability_route() -> &'static str {
    "/names/availability"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAvailabilityQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAvailabilityResponse {
    pub name: String,
    pub available: bool,
}
