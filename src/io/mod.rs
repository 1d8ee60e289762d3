//! CLI input/output support.

pub mod exit_code;

pub use exit_code::ExitCode;
