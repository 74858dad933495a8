//! Form state and the operations that mutate it.
//!
//! The controller never talks to egui, channels, or timers. Operations that
//! need the outside world return a [`BackendCommand`] for the caller to
//! dispatch, and completions come back through `on_*` handlers.

use directory_client::DirectoryError;
use shared::domain::Entry;

use crate::backend_bridge::commands::BackendCommand;

pub const CHECKING_NAME_HELPER: &str = "Checking if name available";
pub const NAME_TAKEN_HELPER: &str = "This name has already been taken. Try again.";

/// Generation stamped on each scheduled name check. Only the latest one is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameCheckTicket(pub u64);

impl NameCheckTicket {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub name_error: bool,
    /// True while a check for the current `name` is pending debounce or in flight.
    pub is_checking_name: bool,
    /// Empty means no selection.
    pub location: String,
    pub locations_loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    Editing,
    CheckingName,
    NameRejected,
    Ready,
}

pub struct FormController {
    state: FormState,
    locations: Vec<String>,
    entries: Vec<Entry>,
    ticket: NameCheckTicket,
    mounted: bool,
    alive: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            state: FormState::default(),
            locations: Vec::new(),
            entries: Vec::new(),
            ticket: NameCheckTicket(0),
            mounted: false,
            alive: true,
        }
    }

    /// Starts the one location fetch of this controller's lifetime.
    pub fn mount(&mut self) -> Option<BackendCommand> {
        if self.mounted || !self.alive {
            return None;
        }
        self.mounted = true;
        self.state.locations_loading = true;
        tracing::info!("form mounted; loading locations");
        Some(BackendCommand::LoadLocations)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Option<BackendCommand> {
        if !self.alive {
            return None;
        }
        self.state.name = value.into();
        self.state.name_error = false;
        self.state.is_checking_name = true;
        self.ticket = self.ticket.next();
        Some(BackendCommand::ScheduleNameCheck {
            ticket: self.ticket,
            name: self.state.name.clone(),
        })
    }

    /// Applies the validator's answer for a settled name. Returns whether it was applied.
    pub fn on_name_checked(
        &mut self,
        ticket: NameCheckTicket,
        outcome: Result<bool, DirectoryError>,
    ) -> bool {
        if !self.alive {
            tracing::debug!(ticket = ticket.0, "dropping name check after shutdown");
            return false;
        }
        if ticket != self.ticket {
            tracing::debug!(
                ticket = ticket.0,
                current = self.ticket.0,
                "dropping superseded name check"
            );
            return false;
        }

        match outcome {
            Ok(available) => {
                self.state.name_error = !available;
            }
            Err(err) => {
                // fail open: name_error keeps its prior value
                tracing::warn!(name = %self.state.name, "name availability check failed: {err}");
            }
        }
        self.state.is_checking_name = false;
        true
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.state.location = value.into();
    }

    pub fn on_locations_loaded(&mut self, outcome: Result<Vec<String>, DirectoryError>) {
        if !self.alive {
            return;
        }
        match outcome {
            Ok(locations) => {
                tracing::info!(count = locations.len(), "locations loaded");
                self.locations = locations;
            }
            Err(err) => {
                tracing::warn!("failed to load locations: {err}");
            }
        }
        self.state.locations_loading = false;
    }

    pub fn clear(&mut self) {
        self.state.name.clear();
        self.state.location.clear();
        self.entries.clear();
    }

    /// Appends the current pair when the form is submittable; otherwise does nothing.
    pub fn add(&mut self) -> Option<Entry> {
        if !self.can_add() {
            return None;
        }
        let entry = Entry::new(
            std::mem::take(&mut self.state.name),
            std::mem::take(&mut self.state.location),
        );
        self.entries.push(entry.clone());
        tracing::info!(
            name = %entry.name,
            location = %entry.location,
            total = self.entries.len(),
            "entry added"
        );
        Some(entry)
    }

    /// Tears the controller down; later completions become no-ops.
    pub fn shutdown(&mut self) -> Option<BackendCommand> {
        if !self.alive {
            return None;
        }
        self.alive = false;
        Some(BackendCommand::Shutdown)
    }

    pub fn submit_gate(&self) -> SubmitGate {
        if self.state.is_checking_name {
            SubmitGate::CheckingName
        } else if self.state.name_error {
            SubmitGate::NameRejected
        } else if self.state.name.is_empty() {
            SubmitGate::Editing
        } else {
            SubmitGate::Ready
        }
    }

    pub fn can_add(&self) -> bool {
        self.submit_gate() == SubmitGate::Ready && !self.state.location.is_empty()
    }

    /// Whether the Add button is enabled. `add` still checks its own guard.
    pub fn add_enabled(&self) -> bool {
        self.can_add() && !self.state.locations_loading
    }

    pub fn can_clear(&self) -> bool {
        !self.state.is_checking_name && !self.state.locations_loading
    }

    pub fn name_helper_text(&self) -> Option<&'static str> {
        match self.submit_gate() {
            SubmitGate::CheckingName => Some(CHECKING_NAME_HELPER),
            SubmitGate::NameRejected => Some(NAME_TAKEN_HELPER),
            SubmitGate::Editing | SubmitGate::Ready => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
