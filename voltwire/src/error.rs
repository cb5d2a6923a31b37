//! Error types and helpers.
use thiserror::Error;

/// Decoding failure raised by generated `merge_scope` implementations and
/// the wire primitives they call.
///
/// A failure aborts decoding immediately and leaves the target instance
/// partially populated; callers must discard (or reset) it rather than
/// retry in place.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    Truncated,
    #[error("length-delimited span exceeds remaining input")]
    InvalidLength,
    #[error("malformed varint: exceeds 10 bytes or overflows u64")]
    IntOverflow,
    #[error("illegal tag: field number must be >= 1")]
    InvalidTag,
    #[error("invalid wire type: {0}")]
    InvalidWireType(u32),
    #[error("group end tag without matching group start")]
    UnexpectedEndGroup,
    #[error("message nesting exceeds the recursion limit")]
    RecursionLimit,
    #[error("string field contains invalid UTF-8")]
    InvalidUtf8,
}

/// Coarse classification of a [`DecodeError`].
///
/// Ill-formed text is distinguishable from a structurally broken stream so
/// callers can, for example, surface encoding violations differently from
/// truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The byte stream itself is structurally invalid.
    MalformedInput,
    /// The stream framing is intact but a text payload is ill-formed.
    InvalidEncoding,
}

impl DecodeError {
    pub const fn kind(self) -> ErrorKind {
        match self {
            DecodeError::InvalidUtf8 => ErrorKind::InvalidEncoding,
            DecodeError::Truncated
            | DecodeError::InvalidLength
            | DecodeError::IntOverflow
            | DecodeError::InvalidTag
            | DecodeError::InvalidWireType(_)
            | DecodeError::UnexpectedEndGroup
            | DecodeError::RecursionLimit => ErrorKind::MalformedInput,
        }
    }
}

/// Encoding failure.
///
/// Encoding is total over well-formed instances; the only failure mode is a
/// caller-supplied buffer smaller than [`encoded_len`](crate::WireSize::encoded_len).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("output buffer holds {available} bytes but the message needs {needed}")]
    BufferTooSmall { needed: usize, available: usize },
}

pub type DecodeResult<T> = core::result::Result<T, DecodeError>;

#[cold]
pub const fn truncated() -> DecodeError {
    DecodeError::Truncated
}

#[cold]
pub const fn invalid_length() -> DecodeError {
    DecodeError::InvalidLength
}

#[cold]
pub const fn int_overflow() -> DecodeError {
    DecodeError::IntOverflow
}

#[cold]
pub const fn invalid_utf8() -> DecodeError {
    DecodeError::InvalidUtf8
}
