//! Logger setup for the `cloner` binary.
//!
//! Stdout carries the rendered frames, so the default sink is `./cloner.log`.
//! Destination and level both come from `cloner.ron`.

use std::fs::File;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./cloner.log";

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// `./cloner.log`, truncated on start-up.
    #[default]
    File,
    /// Stderr/stdout, interleaved with the frames.
    Terminal,
    Both,
    /// No logger is installed.
    Off,
}

impl LogDestination {
    fn wants_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }

    fn wants_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }
}

/// Installs the global logger. A log file that cannot be created is reported
/// on stderr and skipped; the remaining sinks still apply.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = record_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if destination.wants_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.wants_file() {
        match File::create(LOG_FILE) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: cannot create {LOG_FILE}: {err}"),
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}

fn record_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

#[cfg(test)]
mod tests {
    use super::LogDestination;

    #[test]
    fn destinations_select_sinks() {
        assert!(LogDestination::File.wants_file());
        assert!(!LogDestination::File.wants_terminal());
        assert!(LogDestination::Both.wants_file() && LogDestination::Both.wants_terminal());
        assert!(!LogDestination::Off.wants_file());
        assert!(!LogDestination::Off.wants_terminal());
    }
}
