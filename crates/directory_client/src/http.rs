use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{
    locations_route, name_availability_route, LocationsResponse, NameAvailabilityQuery,
    NameAvailabilityResponse,
};
use tracing::debug;
use url::Url;

use crate::{DirectoryError, LocationProvider, NameValidator, Result};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Talks to a directory service over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    http: Client,
    base_url: Url,
}

impl HttpDirectoryClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| DirectoryError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("failed to build http client: {err}"),
            })?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, route: &str) -> Url {
        // base_url always ends in '/', so joining a relative path appends to it.
        self.base_url
            .join(route.trim_start_matches('/'))
            .unwrap_or_else(|_| self.base_url.clone())
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|err| DirectoryError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DirectoryError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

#[async_trait]
impl LocationProvider for HttpDirectoryClient {
    async fn fetch_locations(&self) -> Result<Vec<String>> {
        let url = self.endpoint(locations_route());
        debug!(%url, "fetching locations");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| {
                DirectoryError::LocationFetchFailed(format!("failed to reach directory: {err}"))
            })?
            .error_for_status()
            .map_err(|err| {
                DirectoryError::LocationFetchFailed(format!("directory returned error: {err}"))
            })?;

        let body: LocationsResponse = response.json().await.map_err(|err| {
            DirectoryError::LocationFetchFailed(format!("invalid locations payload: {err}"))
        })?;
        Ok(body.locations)
    }
}

#[async_trait]
impl NameValidator for HttpDirectoryClient {
    async fn check_name_available(&self, name: &str) -> Result<bool> {
        let url = self.endpoint(name_availability_route());
        debug!(%url, name, "checking name availability");
        let response = self
            .http
            .get(url)
            .query(&NameAvailabilityQuery {
                name: Some(name.to_string()),
            })
            .send()
            .await
            .map_err(|err| {
                DirectoryError::NameCheckFailed(format!("failed to reach directory: {err}"))
            })?
            .error_for_status()
            .map_err(|err| {
                DirectoryError::NameCheckFailed(format!("directory returned error: {err}"))
            })?;

        let body: NameAvailabilityResponse = response.json().await.map_err(|err| {
            DirectoryError::NameCheckFailed(format!("invalid availability payload: {err}"))
        })?;
        Ok(body.available)
    }
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod tests;
