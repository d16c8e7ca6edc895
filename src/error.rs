// ABOUTME: Error types for tour construction and configuration

use thiserror::Error;

/// Failures raised while building a tour.
///
/// Everything past construction is total: advancing, progress computation,
/// and rendering cannot fail once a tour has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// A tour with no screens has nothing to render and nothing to index.
    #[error("a tour needs at least one screen")]
    EmptyScreens,

    /// A color string in a tour file was not a known name or `#rrggbb` hex.
    #[error("unrecognized color `{0}`")]
    InvalidColor(String),
}
