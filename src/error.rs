/// Errors from the binary encoder.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A value's shape has no encoding rule.
    #[error("unsupported type '{0}'")]
    UnsupportedType(&'static str),

    /// A `sizeof` producer held a negative value.
    #[error("negative value {0} cannot supply an element count")]
    NegativeLength(i64),

    /// The underlying byte sink rejected a write. Propagated verbatim,
    /// never retried.
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A hand-written `BinEncode` implementation reported a failure.
    #[error("{0}")]
    Custom(String),
}

impl EncodeError {
    /// Build a `Custom` error from any displayable message.
    pub fn custom(msg: impl std::fmt::Display) -> Self {
        EncodeError::Custom(msg.to_string())
    }
}

/// Result type alias for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
