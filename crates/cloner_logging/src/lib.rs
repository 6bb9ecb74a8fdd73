#![deny(missing_docs)]
//! Shared logging utilities for the cloner workspace.
//!
//! This crate provides the `cloner_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Messages logged on a
//! thread with an active request are prefixed with `[req N]`.

use std::cell::Cell;

thread_local! {
    /// Request id the current thread is working on, 0 when idle.
    static ACTIVE_REQUEST: Cell<u64> = const { Cell::new(0) };
}

/// Sets the request id the current thread is working on.
/// Pass `None` once the request is no longer pending.
pub fn set_active_request(request_id: Option<u64>) {
    ACTIVE_REQUEST.with(|v| v.set(request_id.unwrap_or(0)));
}

/// Retrieves the request id the current thread is working on, if any.
pub fn active_request() -> Option<u64> {
    match ACTIVE_REQUEST.with(|v| v.get()) {
        0 => None,
        id => Some(id),
    }
}

/// Returns the log prefix for the active request, or an empty string.
#[doc(hidden)]
pub fn request_prefix() -> String {
    match active_request() {
        Some(id) => format!("[req {id}] "),
        None => String::new(),
    }
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! cloner_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! cloner_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! cloner_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! cloner_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! cloner_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have won the race to install the logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
