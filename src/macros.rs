//! Small crate-wide convenience macros.

/// Diagnostic console output, enabled by `ClientConfig::debug_logging`.
///
/// ```rust,ignore
/// debug_log!("GET {}", url);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logging::debug(&format!($($arg)*))
    };
}

/// Console warning, always emitted.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::warn(&format!($($arg)*))
    };
}
