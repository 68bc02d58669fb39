//! Error types.
//!
//! None of these cross the public JavaScript boundary; they are logged and
//! swallowed at the point where a public operation would otherwise fail.

use thiserror::Error;

/// A content-bounds source could not produce a usable size.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    #[error("bounding box unavailable: {0}")]
    Unavailable(String),

    #[error("bounding box is degenerate ({width}x{height})")]
    Degenerate { width: f64, height: f64 },
}

/// The options object could not be turned into a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("options could not be read: {0}")]
    Unreadable(String),
}

/// A bus listener reported failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("listener failed: {0}")]
pub struct ListenerError(pub String);

/// An event name that is not one of `reset`, `zoom`, `pan`, `arrow`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event name: {0:?}")]
pub struct EventNameError(pub String);

/// A feature could not attach to its platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("failed to attach {event} listener: {reason}")]
    Listener { event: String, reason: String },

    #[error("failed to create element: {0}")]
    Element(String),

    #[error("platform capability unavailable: {0}")]
    Unsupported(&'static str),
}
