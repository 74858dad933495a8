//! Runtime bridge between the UI command queue and backend event intake.

use std::{
    io,
    ops::ControlFlow,
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::{Receiver, Sender};
use directory_client::Directory;

use crate::backend_bridge::{commands::BackendCommand, debounce::Debouncer};
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. It exits on `Shutdown` or when the UI drops its sender.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    directory: Directory,
    debounce: Duration,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("roster-backend".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("failed to build backend runtime: {err}"),
                    )));
                    tracing::error!("failed to build backend runtime: {err}");
                    return;
                }
            };

            runtime.block_on(async move {
                let mut worker = Worker::new(directory, ui_tx, debounce);
                let _ = worker
                    .ui_tx
                    .try_send(UiEvent::Info("Background worker ready".to_string()));
                while let Ok(cmd) = cmd_rx.recv() {
                    if worker.handle(cmd).is_break() {
                        break;
                    }
                }
                worker.stop();
                tracing::info!("backend worker stopped");
            });
        })
}

pub(crate) struct Worker {
    directory: Directory,
    ui_tx: Sender<UiEvent>,
    name_checks: Debouncer,
}

impl Worker {
    pub(crate) fn new(directory: Directory, ui_tx: Sender<UiEvent>, debounce: Duration) -> Self {
        Self {
            directory,
            ui_tx,
            name_checks: Debouncer::new(debounce),
        }
    }

    /// Must be called from inside a tokio runtime.
    pub(crate) fn handle(&mut self, cmd: BackendCommand) -> ControlFlow<()> {
        match cmd {
            BackendCommand::LoadLocations => {
                tracing::info!("backend: load_locations");
                let provider = self.directory.locations.clone();
                let ui_tx = self.ui_tx.clone();
                tokio::spawn(async move {
                    let outcome = provider.fetch_locations().await;
                    if let Err(err) = &outcome {
                        tracing::error!("backend: load_locations failed: {err}");
                    }
                    if ui_tx.try_send(UiEvent::LocationsLoaded(outcome)).is_err() {
                        tracing::debug!("ui gone; dropping location result");
                    }
                });
                ControlFlow::Continue(())
            }
            BackendCommand::ScheduleNameCheck { ticket, name } => {
                tracing::debug!(ticket = ticket.0, "backend: schedule_name_check");
                let validator = self.directory.names.clone();
                let ui_tx = self.ui_tx.clone();
                self.name_checks.schedule(async move {
                    tracing::info!(ticket = ticket.0, name = %name, "backend: check_name");
                    let outcome = validator.check_name_available(&name).await;
                    if let Err(err) = &outcome {
                        tracing::error!(ticket = ticket.0, "backend: check_name failed: {err}");
                    }
                    if ui_tx
                        .try_send(UiEvent::NameChecked { ticket, outcome })
                        .is_err()
                    {
                        tracing::debug!(ticket = ticket.0, "ui gone; dropping name check result");
                    }
                });
                ControlFlow::Continue(())
            }
            BackendCommand::Shutdown => {
                tracing::info!("backend: shutdown");
                ControlFlow::Break(())
            }
        }
    }

    pub(crate) fn stop(&mut self) {
        if self.name_checks.cancel() {
            tracing::debug!("backend: cancelled pending name check");
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
