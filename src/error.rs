//! Error types for the classification core.

/// Top-level error type for the classification core.
///
/// The core recovers from most problems internally (a broken overlay file is
/// skipped, empty input has defined fallbacks); the variants here cover the
/// few conditions that are genuinely the caller's to fix.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// Selection range is reversed or out of bounds for the input text.
    #[error("invalid selection range: {0}")]
    Selection(String),

    /// An emotion hint named a value outside the fixed 8-class set.
    #[error("unknown emotion: {0}")]
    UnknownEmotion(String),

    /// A domain hint named a value outside the fixed 18-entry taxonomy.
    #[error("unknown domain: {0}")]
    UnknownDomain(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ClassifyError>;
