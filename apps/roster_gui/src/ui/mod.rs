//! UI layer: the eframe app shell rendering the form and the entries table.

pub mod app;

pub use app::RosterApp;
