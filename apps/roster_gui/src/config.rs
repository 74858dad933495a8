use std::{sync::Arc, time::Duration};

use clap::Parser;
use directory_client::{Directory, DirectoryError, HttpDirectoryClient, MockDirectory};

use crate::backend_bridge::debounce::DEFAULT_DEBOUNCE;

#[derive(Parser, Debug, Clone)]
#[command(name = "roster_gui", about = "Name and location entry form")]
pub struct StartupArgs {
    /// Base URL of the directory service. Uses the built-in mock when omitted.
    #[arg(long, env = "ROSTER_DIRECTORY_URL")]
    pub directory_url: Option<String>,
    #[arg(long, env = "ROSTER_DEBOUNCE_MS", default_value_t = 500)]
    pub debounce_ms: u64,
    /// Simulated latency of the built-in mock directory.
    #[arg(long, env = "ROSTER_MOCK_LATENCY_MS", default_value_t = 200)]
    pub mock_latency_ms: u64,
    #[arg(long, env = "ROSTER_REQUEST_TIMEOUT_MS", default_value_t = 5000)]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorySource {
    Mock { latency: Duration },
    Http { base_url: String, timeout: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub directory: DirectorySource,
    pub debounce: Duration,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            directory: DirectorySource::Mock {
                latency: directory_client::DEFAULT_MOCK_LATENCY,
            },
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl From<StartupArgs> for StartupConfig {
    fn from(args: StartupArgs) -> Self {
        let directory = match args
            .directory_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
        {
            Some(base_url) => DirectorySource::Http {
                base_url,
                timeout: Duration::from_millis(args.request_timeout_ms),
            },
            None => DirectorySource::Mock {
                latency: Duration::from_millis(args.mock_latency_ms),
            },
        };
        Self {
            directory,
            debounce: Duration::from_millis(args.debounce_ms),
        }
    }
}

impl StartupConfig {
    pub fn from_env_and_args() -> Self {
        StartupArgs::parse().into()
    }

    pub fn build_directory(&self) -> Result<Directory, DirectoryError> {
        match &self.directory {
            DirectorySource::Mock { latency } => Ok(Directory::from_shared(Arc::new(
                MockDirectory::new().with_latency(*latency),
            ))),
            DirectorySource::Http { base_url, timeout } => Ok(Directory::from_shared(Arc::new(
                HttpDirectoryClient::with_timeout(base_url, *timeout)?,
            ))),
        }
    }

    pub fn directory_label(&self) -> String {
        match &self.directory {
            DirectorySource::Mock { .. } => "built-in mock directory".to_string(),
            DirectorySource::Http { base_url, .. } => base_url.clone(),
        }
    }
}
