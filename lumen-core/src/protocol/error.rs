pub type ProtocolResult<T> = core::result::Result<T, ProtocolError>;

/// Classification of a rejected payload.
///
/// Every variant is local to the request that produced it; none is fatal
/// to the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// A point payload must be exactly one encoded measurement.
    #[error("wrong body size: expected {expected} bytes, have {actual}")]
    WrongBodySize { expected: usize, actual: usize },
    /// A burst payload must split into whole 16-bit samples.
    #[error("odd body size: {len} bytes")]
    OddBodySize { len: usize },
    /// The decode stopped before the end of the payload.
    #[error("decoded wrong number of bytes: expected {expected}, have {actual}")]
    DecodeShortRead { expected: usize, actual: usize },
    /// A config record is exactly `CONFIG_WIRE_SIZE` bytes.
    #[error("malformed config length: expected {expected} bytes, have {actual}")]
    MalformedLength { expected: usize, actual: usize },
}
