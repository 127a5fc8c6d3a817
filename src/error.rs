use thiserror::Error;
use tracing::{error, warn};

/// Error severity for reporting
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // informational
    Warning,  // recoverable
    Error,    // operation failed
    Critical, // requires user action
}

/// Domain-specific errors for Stickypad
#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum StickypadError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Theme loading failed for '{path}': {source}")]
    ThemeLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Window operation failed: {0}")]
    Window(String),
}

#[allow(dead_code)]
impl StickypadError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(_) => ErrorSeverity::Warning,
            Self::ThemeLoad { .. } => ErrorSeverity::Warning,
            Self::Parse(_) => ErrorSeverity::Warning,
            Self::Window(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::ThemeLoad { path, .. } => format!("Could not load theme from {}", path),
            Self::Parse(e) => format!("Invalid settings format: {}", e),
            Self::Window(msg) => msg.clone(),
        }
    }
}

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, StickypadError>;

/// Extension trait for silent error logging with caller location
/// tracking. Use when the operation is recoverable and the user
/// doesn't need to know.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

/// Panic in debug mode, log error in release mode.
///
/// Use for "impossible" states that should crash during development
/// but gracefully degrade in production.
#[macro_export]
macro_rules! debug_panic {
    ( $($fmt_arg:tt)* ) => {
        if cfg!(debug_assertions) {
            panic!( $($fmt_arg)* );
        } else {
            tracing::error!("IMPOSSIBLE STATE: {}", format_args!($($fmt_arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert_eq!(
            StickypadError::Config("x".into()).severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            StickypadError::Window("x".into()).severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn user_message_names_theme_path() {
        let err = StickypadError::ThemeLoad {
            path: "/home/u/.stickypad/theme.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.user_message().contains(".stickypad/theme.json"));
    }

    #[test]
    fn result_ext_maps_ok_and_err() {
        let ok: std::result::Result<u32, &str> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));
        let err: std::result::Result<u32, &str> = Err("nope");
        assert_eq!(err.warn_on_err(), None);
    }
}
