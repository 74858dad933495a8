use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use shared::domain::normalized_name;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{DirectoryError, LocationProvider, NameValidator, Result};

pub const DEFAULT_MOCK_LATENCY: Duration = Duration::from_millis(200);

const DEFAULT_LOCATIONS: [&str; 4] = ["Canada", "China", "USA", "Brazil"];
const DEFAULT_TAKEN_NAMES: [&str; 1] = ["invalid name"];

/// In-process stand-in for the remote directory. Every call sleeps for the
/// configured latency so the form's busy states are visible.
pub struct MockDirectory {
    locations: Vec<String>,
    taken_names: Vec<String>,
    latency: Duration,
    fail_locations: Option<String>,
    fail_name_checks: Option<String>,
    location_calls: AtomicUsize,
    checked_names: Mutex<Vec<String>>,
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self {
            locations: DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            taken_names: DEFAULT_TAKEN_NAMES.iter().map(|s| normalized_name(s)).collect(),
            latency: DEFAULT_MOCK_LATENCY,
            fail_locations: None,
            fail_name_checks: None,
            location_calls: AtomicUsize::new(0),
            checked_names: Mutex::new(Vec::new()),
        }
    }
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_taken_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.taken_names = names
            .into_iter()
            .map(|name| normalized_name(name.as_ref()))
            .collect();
        self
    }

    pub fn failing_locations(mut self, reason: impl Into<String>) -> Self {
        self.fail_locations = Some(reason.into());
        self
    }

    pub fn failing_name_checks(mut self, reason: impl Into<String>) -> Self {
        self.fail_name_checks = Some(reason.into());
        self
    }

    pub fn location_calls(&self) -> usize {
        self.location_calls.load(Ordering::SeqCst)
    }

    /// Names passed to `check_name_available`, in call order.
    pub async fn checked_names(&self) -> Vec<String> {
        self.checked_names.lock().await.clone()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl LocationProvider for MockDirectory {
    async fn fetch_locations(&self) -> Result<Vec<String>> {
        self.location_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if let Some(reason) = &self.fail_locations {
            return Err(DirectoryError::LocationFetchFailed(reason.clone()));
        }
        Ok(self.locations.clone())
    }
}

#[async_trait]
impl NameValidator for MockDirectory {
    async fn check_name_available(&self, name: &str) -> Result<bool> {
        self.checked_names.lock().await.push(name.to_string());
        self.simulate_latency().await;
        if let Some(reason) = &self.fail_name_checks {
            return Err(DirectoryError::NameCheckFailed(reason.clone()));
        }
        let key = normalized_name(name);
        let available = !self.taken_names.iter().any(|taken| *taken == key);
        debug!(name, available, "mock name check");
        Ok(available)
    }
}

#[cfg(test)]
#[path = "tests/mock_tests.rs"]
mod tests;
