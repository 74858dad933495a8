//! Backend worker: owns the tokio runtime, the debounce timer, and the directory calls.

pub mod commands;
pub mod debounce;
pub mod runtime;
