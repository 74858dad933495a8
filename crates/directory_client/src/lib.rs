//! Collaborator contracts for the roster form: where selectable locations come
//! from and who decides whether a name is still available.

use std::sync::Arc;

use async_trait::async_trait;

pub mod error;
mod http;
mod mock;

pub use error::DirectoryError;
pub use http::HttpDirectoryClient;
pub use mock::{MockDirectory, DEFAULT_MOCK_LATENCY};

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Ordered list of selectable locations.
    async fn fetch_locations(&self) -> Result<Vec<String>>;
}

#[async_trait]
pub trait NameValidator: Send + Sync {
    /// `true` when nobody has claimed `name` yet.
    async fn check_name_available(&self, name: &str) -> Result<bool>;
}

pub struct MissingLocationProvider;

#[async_trait]
impl LocationProvider for MissingLocationProvider {
    async fn fetch_locations(&self) -> Result<Vec<String>> {
        Err(DirectoryError::LocationFetchFailed(
            "location directory is unavailable".to_string(),
        ))
    }
}

pub struct MissingNameValidator;

#[async_trait]
impl NameValidator for MissingNameValidator {
    async fn check_name_available(&self, _name: &str) -> Result<bool> {
        Err(DirectoryError::NameCheckFailed(
            "name directory is unavailable".to_string(),
        ))
    }
}

/// Both collaborators behind shared handles, as handed to the backend worker.
#[derive(Clone)]
pub struct Directory {
    pub locations: Arc<dyn LocationProvider>,
    pub names: Arc<dyn NameValidator>,
}

impl Directory {
    pub fn new(locations: Arc<dyn LocationProvider>, names: Arc<dyn NameValidator>) -> Self {
        Self { locations, names }
    }

    /// Uses one value for both roles.
    pub fn from_shared<T>(directory: Arc<T>) -> Self
    where
        T: LocationProvider + NameValidator + 'static,
    {
        Self {
            locations: directory.clone(),
            names: directory,
        }
    }

    pub fn missing() -> Self {
        Self {
            locations: Arc::new(MissingLocationProvider),
            names: Arc::new(MissingNameValidator),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
