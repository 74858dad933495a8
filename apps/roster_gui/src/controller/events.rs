//! Backend-to-UI events and error modeling for the roster controller.

use directory_client::DirectoryError;

use crate::controller::form::NameCheckTicket;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    LocationsLoaded(Result<Vec<String>, DirectoryError>),
    NameChecked {
        ticket: NameCheckTicket,
        outcome: Result<bool, DirectoryError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadLocations,
    NameCheck,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
            || message_lower.contains("400")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("failed to reach")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_directory(context: UiErrorContext, err: &DirectoryError) -> Self {
        Self::from_message(context, err.to_string())
    }

    /// Startup failures leave the form without a worker; everything else degrades quietly.
    pub fn is_blocking(&self) -> bool {
        self.context == UiErrorContext::BackendStartup
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

/// One-line status text for a failure, phrased for the form's footer.
pub fn describe_failure(err: &UiError) -> String {
    match err.context() {
        UiErrorContext::BackendStartup => format!(
            "Background worker failed to start; lookups are unavailable: {}",
            err.message()
        ),
        UiErrorContext::LoadLocations => format!(
            "{} error loading locations; the list is empty: {}",
            err_label(err.category()),
            err.message()
        ),
        UiErrorContext::NameCheck => format!(
            "{} error checking the name; you can still add it: {}",
            err_label(err.category()),
            err.message()
        ),
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
