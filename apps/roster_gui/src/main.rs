mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context as _;
use crossbeam_channel::bounded;
use directory_client::Directory;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::config::StartupConfig;
use crate::controller::events::UiEvent;
use crate::ui::RosterApp;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let startup = StartupConfig::from_env_and_args();
    let directory = match startup.build_directory() {
        Ok(directory) => directory,
        Err(err) => {
            tracing::warn!("directory unavailable, continuing without one: {err}");
            Directory::missing()
        }
    };
    let directory_label = startup.directory_label();
    tracing::info!(directory = %directory_label, debounce_ms = startup.debounce.as_millis() as u64, "starting roster");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let backend = runtime::launch(cmd_rx, ui_tx, directory, startup.debounce)
        .context("failed to spawn backend thread")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Roster")
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Roster",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(RosterApp::bootstrap(
                cmd_tx,
                ui_rx,
                &directory_label,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("ui exited with error: {err}"))?;

    if backend.join().is_err() {
        tracing::error!("backend thread panicked");
    }
    Ok(())
}
