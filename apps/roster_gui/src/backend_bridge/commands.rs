//! Backend commands queued from UI to backend worker.

use crate::controller::form::NameCheckTicket;

#[derive(Debug)]
pub enum BackendCommand {
    LoadLocations,
    ScheduleNameCheck {
        ticket: NameCheckTicket,
        name: String,
    },
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadLocations => "load_locations",
            BackendCommand::ScheduleNameCheck { .. } => "schedule_name_check",
            BackendCommand::Shutdown => "shutdown",
        }
    }
}
