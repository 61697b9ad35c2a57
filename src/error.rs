//! Error types for the rain effect.
//!
//! Only initialization can fail fatally. Configuration problems are reported
//! and the compiled defaults stay in place; everything else (zero-size
//! containers, missing textures) is absorbed silently.

use std::fmt;

/// Top-level error enum.
#[derive(Debug, Clone, PartialEq)]
pub enum RainError {
    /// The container (primary window or page canvas) does not exist at startup.
    MissingContainer {
        /// Where the lookup happened.
        context: &'static str,
    },

    /// The config file exists but is not valid TOML for [`crate::config::RainConfig`].
    ConfigParse {
        path: String,
        message: String,
    },

    /// A loaded config value is outside its usable range.
    InvalidConfig {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },

    /// A browser API call failed while wiring the page bridge.
    WebBridge {
        context: &'static str,
    },
}

impl fmt::Display for RainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RainError::MissingContainer { context } => {
                write!(f, "container not found during '{}'", context)
            }
            RainError::ConfigParse { path, message } => {
                write!(f, "failed to parse {}: {}", path, message)
            }
            RainError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is invalid (expected {})",
                name, value, expected
            ),
            RainError::WebBridge { context } => {
                write!(f, "page bridge setup failed during '{}'", context)
            }
        }
    }
}

impl std::error::Error for RainError {}

/// Convenience alias: a `Result` using `RainError` as the error type.
pub type RainResult<T> = Result<T, RainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_config_key() {
        let err = RainError::InvalidConfig {
            name: "drag_stiffness",
            value: 2.0,
            expected: "(0.0, 1.0]",
        };
        let msg = err.to_string();
        assert!(msg.contains("drag_stiffness"));
        assert!(msg.contains("(0.0, 1.0]"));
    }

    #[test]
    fn missing_container_mentions_context() {
        let err = RainError::MissingContainer {
            context: "init_page_layout",
        };
        assert_eq!(
            err.to_string(),
            "container not found during 'init_page_layout'"
        );
    }
}
