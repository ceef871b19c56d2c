use std::io::Error;
use std::path::PathBuf;

use derive_setters::Setters;

pub const DEFAULT_LOG_FILE: &str = "dojo-report.log";

#[derive(Debug, Clone, Setters)]
#[setters(prefix = "with_")]
pub struct ReportConfig {
    /// Milliseconds to wait for a terminal event before redrawing.
    pub event_poll_time: u64,
    /// Overrides the platform print command. Run as a line printer.
    #[setters(strip_option, into)]
    pub printer_command: Option<String>,
    #[setters(into)]
    pub log_file: PathBuf,
    #[setters(into)]
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            event_poll_time: 100,
            printer_command: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Quit,
    MoveUp,
    MoveDown,
    MovePageUp,
    MovePageDown,
    MoveBeginning,
    MoveEnd,
    Print,
    Enter,
    Exit,
    Resize(usize, usize),
}

#[derive(Debug)]
pub enum AppError {
    IoError(Error),
    LoggingFailed(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::IoError(e) => write!(f, "{e}"),
            AppError::LoggingFailed(msg) => write!(f, "could not set up logging: {msg}"),
        }
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_setters() {
        let cfg = ReportConfig::default()
            .with_printer_command("lp -d front-desk")
            .with_log_file("/tmp/report.log")
            .with_event_poll_time(50);
        assert_eq!(cfg.printer_command.as_deref(), Some("lp -d front-desk"));
        assert_eq!(cfg.log_file, PathBuf::from("/tmp/report.log"));
        assert_eq!(cfg.event_poll_time, 50);
        assert_eq!(cfg.log_level, "info");
    }
}
