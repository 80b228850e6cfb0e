#![deny(missing_docs)]
//! Shared logging utilities for the newsletter workspace.
//!
//! This crate provides the `nl_*` logging macros used across the workspace,
//! a helper for keeping credentials out of log lines, and a minimal test
//! initializer for the global logger.

#[doc(hidden)]
pub use log;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! nl_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! nl_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! nl_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! nl_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! nl_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Describes an optional secret for log output without revealing it.
///
/// Returns `"<unset>"` for `None` and `"<set, N chars>"` otherwise.
pub fn redact(secret: Option<&str>) -> String {
    match secret {
        None => "<unset>".to_string(),
        Some(value) => format!("<set, {} chars>", value.chars().count()),
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::redact;

    #[test]
    fn redact_hides_value_but_reports_presence() {
        assert_eq!(redact(None), "<unset>");
        assert_eq!(redact(Some("hunter2")), "<set, 7 chars>");
        assert!(!redact(Some("hunter2")).contains("hunter2"));
    }
}
