use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{describe_failure, UiErrorContext, UiEvent, UiError};
use crate::controller::form::{FormController, SubmitGate};
use crate::controller::orchestration::dispatch_form_command;
use crate::controller::rows::{display_rows, is_shaded_row};

const FORM_LABEL_WIDTH: f32 = 90.0;
const FORM_FIELD_WIDTH: f32 = 360.0;
const LOCATION_PLACEHOLDER: &str = "Select a location";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

pub struct RosterApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: FormController,
    status: String,
    status_banner: Option<StatusBanner>,
}

impl RosterApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        directory_label: &str,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            form: FormController::new(),
            status: format!("Using {directory_label}"),
            status_banner: None,
        };
        let mount = app.form.mount();
        app.dispatch(mount);
        app
    }

    fn dispatch(&mut self, cmd: Option<BackendCommand>) {
        dispatch_form_command(&self.cmd_tx, &mut self.form, cmd, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => self.show_error(&err),
                UiEvent::LocationsLoaded(outcome) => {
                    if let Err(err) = &outcome {
                        self.show_error(&UiError::from_directory(UiErrorContext::LoadLocations, err));
                    }
                    self.form.on_locations_loaded(outcome);
                }
                UiEvent::NameChecked { ticket, outcome } => {
                    let failure = outcome
                        .as_ref()
                        .err()
                        .map(|err| UiError::from_directory(UiErrorContext::NameCheck, err));
                    if self.form.on_name_checked(ticket, outcome) {
                        if let Some(err) = failure {
                            self.show_error(&err);
                        }
                    }
                }
            }
        }
    }

    fn show_error(&mut self, err: &UiError) {
        self.status = describe_failure(err);
        self.status_banner = Some(StatusBanner {
            severity: if err.is_blocking() {
                StatusBannerSeverity::Error
            } else {
                StatusBannerSeverity::Warning
            },
            message: self.status.clone(),
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        let (fill, text) = match banner.severity {
            StatusBannerSeverity::Error => (
                egui::Color32::from_rgb(92, 28, 34),
                egui::Color32::from_rgb(255, 214, 214),
            ),
            StatusBannerSeverity::Warning => (
                egui::Color32::from_rgb(84, 66, 20),
                egui::Color32::from_rgb(255, 236, 179),
            ),
        };
        egui::Frame::new()
            .fill(fill)
            .corner_radius(6)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(text, &banner.message);
                    if ui.small_button("Dismiss").clicked() {
                        self.status_banner = None;
                    }
                });
            });
        ui.add_space(8.0);
    }

    fn show_name_field(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_sized([FORM_LABEL_WIDTH, 20.0], egui::Label::new("Name"));
            ui.vertical(|ui| {
                let mut name = self.form.state().name.clone();
                let rejected = self.form.submit_gate() == SubmitGate::NameRejected;
                let mut edit = egui::TextEdit::singleline(&mut name)
                    .hint_text("Name")
                    .desired_width(FORM_FIELD_WIDTH);
                if rejected {
                    edit = edit.text_color(ui.visuals().error_fg_color);
                }
                if ui.add(edit).changed() {
                    let cmd = self.form.set_name(name);
                    self.dispatch(cmd);
                }

                match self.form.name_helper_text() {
                    Some(helper) if rejected => {
                        ui.colored_label(ui.visuals().error_fg_color, helper);
                    }
                    Some(helper) => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.weak(helper);
                        });
                    }
                    None => {
                        // keep the layout from jumping when helper text appears
                        ui.label(" ");
                    }
                }
            });
        });
    }

    fn show_location_field(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_sized([FORM_LABEL_WIDTH, 20.0], egui::Label::new("Location"));
            let current = self.form.state().location.clone();
            let selected_text = if current.is_empty() {
                LOCATION_PLACEHOLDER.to_string()
            } else {
                current.clone()
            };
            let mut picked: Option<String> = None;
            egui::ComboBox::from_id_salt("location")
                .selected_text(selected_text)
                .width(FORM_FIELD_WIDTH)
                .show_ui(ui, |ui| {
                    if self.form.state().locations_loading {
                        ui.add_enabled(false, egui::Label::new(egui::RichText::new("Loading...").italics()));
                        return;
                    }
                    if self.form.locations().is_empty() {
                        ui.add_enabled(false, egui::Label::new("No locations available"));
                    }
                    for location in self.form.locations() {
                        if ui
                            .selectable_label(*location == current, location.as_str())
                            .clicked()
                        {
                            picked = Some(location.clone());
                        }
                    }
                });
            if let Some(location) = picked {
                self.form.set_location(location);
            }
        });
    }

    fn show_actions(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(self.form.add_enabled(), egui::Button::new("Add"))
                .clicked()
            {
                if let Some(entry) = self.form.add() {
                    self.status = format!("Added {} ({})", entry.name, entry.location);
                }
            }
            ui.add_space(24.0);
            if ui
                .add_enabled(self.form.can_clear(), egui::Button::new("Clear"))
                .clicked()
            {
                self.form.clear();
                self.status = "Cleared".to_string();
            }
        });
        ui.add_space(12.0);
    }

    fn show_entries_table(&self, ui: &mut egui::Ui) {
        let header_fill = ui.visuals().widgets.inactive.bg_fill;
        let stripe_fill = ui.visuals().faint_bg_color;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("entries_table")
                .num_columns(2)
                .min_col_width(FORM_FIELD_WIDTH / 2.0)
                .spacing([16.0, 6.0])
                .with_row_color(move |row, _style| {
                    if row == 0 {
                        Some(header_fill)
                    } else if is_shaded_row(row - 1) {
                        Some(stripe_fill)
                    } else {
                        None
                    }
                })
                .show(ui, |ui| {
                    ui.strong("Name");
                    ui.strong("Location");
                    ui.end_row();
                    for row in display_rows(self.form.entries()) {
                        ui.label(row.name());
                        ui.label(row.location());
                        ui.end_row();
                    }
                });
        });
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.weak(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(FORM_LABEL_WIDTH + FORM_FIELD_WIDTH + 40.0);
                ui.add_space(24.0);
                self.show_status_banner(ui);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    self.show_name_field(ui);
                    self.show_location_field(ui);
                    self.show_actions(ui);
                    self.show_entries_table(ui);
                });
            });
        });

        let busy = self.form.state().is_checking_name || self.form.state().locations_loading;
        ctx.request_repaint_after(if busy {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        });
    }
}

impl Drop for RosterApp {
    fn drop(&mut self) {
        let cmd = self.form.shutdown();
        self.dispatch(cmd);
    }
}
