use thiserror::Error;

/// CRL set errors
///
/// Every variant is recoverable: callers keep serving the last good snapshot.
#[derive(Error, Debug)]
pub enum CrlSetError {
    #[error("input truncated: needed {needed} bytes, {available} available")]
    TruncatedInput { needed: usize, available: usize },

    #[error("header parsing failed: {0}")]
    HeaderParseError(String),

    #[error("header encoding failed: {0}")]
    HeaderEncodeError(#[source] serde_json::Error),

    #[error("unsupported format version {found} (highest supported is {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("wrong content type: expected {expected:?}, found {found:?}")]
    WrongContentType {
        expected: &'static str,
        found: String,
    },

    #[error("update is based on sequence {base}, current sequence is {current}")]
    StaleOrWrongBase { base: u32, current: u32 },

    #[error("delta script does not match its base: {0}")]
    DeltaScriptMismatch(String),

    #[error("malformed CRL set: {0}")]
    Malformed(&'static str),

    #[error("change block decompression failed: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CrlSetError {
    pub(crate) fn mismatch(reason: impl Into<String>) -> Self {
        Self::DeltaScriptMismatch(reason.into())
    }
}

/// Convenient Result type alias
pub type CrlSetResult<T> = Result<T, CrlSetError>;
