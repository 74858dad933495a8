use std::{collections::HashSet, sync::Arc, time::Duration};

use shared::{
    domain::normalized_name,
    error::ApiError,
    protocol::{LocationsResponse, NameAvailabilityResponse},
};

use crate::config::Settings;

#[derive(Clone)]
pub struct DirectoryContext {
    locations: Arc<Vec<String>>,
    taken_names: Arc<HashSet<String>>,
    response_delay: Duration,
}

impl DirectoryContext {
    pub fn new<L, N>(locations: L, taken_names: N, response_delay: Duration) -> Self
    where
        L: IntoIterator<Item = String>,
        N: IntoIterator<Item = String>,
    {
        Self {
            locations: Arc::new(locations.into_iter().collect()),
            taken_names: Arc::new(
                taken_names
                    .into_iter()
                    .map(|name| normalized_name(&name))
                    .collect(),
            ),
            response_delay,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.locations.clone(),
            settings.taken_names.clone(),
            settings.response_delay(),
        )
    }

    pub fn response_delay(&self) -> Duration {
        self.response_delay
    }
}

pub fn list_locations(ctx: &DirectoryContext) -> LocationsResponse {
    LocationsResponse {
        locations: ctx.locations.as_ref().clone(),
    }
}

pub fn check_name(
    ctx: &DirectoryContext,
    name: Option<&str>,
) -> Result<NameAvailabilityResponse, ApiError> {
    let Some(name) = name else {
        return Err(ApiError::validation("missing 'name' query parameter"));
    };
    let available = !ctx.taken_names.contains(&normalized_name(name));
    Ok(NameAvailabilityResponse {
        name: name.to_string(),
        available,
    })
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
