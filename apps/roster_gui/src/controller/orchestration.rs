//! Command orchestration helpers from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use directory_client::DirectoryError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::form::{FormController, NameCheckTicket};

const WORKER_UNAVAILABLE: &str = "background worker unavailable";

/// Returns whether the command was queued.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue full");
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue disconnected");
            *status = "Background worker stopped; lookups are unavailable".to_string();
            false
        }
    }
}

/// Completion the form is still waiting on for a command.
enum Awaiting {
    Locations,
    NameCheck(NameCheckTicket),
    Nothing,
}

/// Dispatches a command produced by a form operation. A command that never
/// reaches the worker is settled as a failure so the form is not left busy.
pub fn dispatch_form_command(
    cmd_tx: &Sender<BackendCommand>,
    form: &mut FormController,
    cmd: Option<BackendCommand>,
    status: &mut String,
) {
    let Some(cmd) = cmd else {
        return;
    };
    let awaiting = match &cmd {
        BackendCommand::LoadLocations => Awaiting::Locations,
        BackendCommand::ScheduleNameCheck { ticket, .. } => Awaiting::NameCheck(*ticket),
        BackendCommand::Shutdown => Awaiting::Nothing,
    };
    if dispatch_backend_command(cmd_tx, cmd, status) {
        return;
    }

    match awaiting {
        Awaiting::Locations => form.on_locations_loaded(Err(
            DirectoryError::LocationFetchFailed(WORKER_UNAVAILABLE.to_string()),
        )),
        Awaiting::NameCheck(ticket) => {
            form.on_name_checked(
                ticket,
                Err(DirectoryError::NameCheckFailed(WORKER_UNAVAILABLE.to_string())),
            );
        }
        Awaiting::Nothing => {}
    }
}
