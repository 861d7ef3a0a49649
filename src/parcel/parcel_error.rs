use std::fmt;

/// Errors raised while writing to or reading from a [`Parcel`](crate::Parcel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParcelError {
    /// The cursor ran out of bytes before a value was complete.
    NotEnoughData { needed: usize, available: usize },

    /// An envelope declared a length below the length field itself, or one
    /// that overflows (or runs past) the parcel when added to its start.
    MalformedEnvelope {
        start: usize,
        declared_length: i32,
        reason: &'static str,
    },

    /// Bytes remained after all declared arguments of a transaction were
    /// decoded. The writer knows about arguments this reader does not.
    UnexpectedTrailingData { remaining: usize },

    /// A null value arrived where the reader requires one.
    UnexpectedNull,

    /// A value was present but could not be interpreted (bad UTF-8, negative
    /// length, unknown discriminant, ...).
    BadValue(String),

    /// The interface token at the head of a request named another interface.
    InterfaceMismatch {
        expected: String,
        actual: Option<String>,
    },

    /// An attempt to move the cursor past the end of the data.
    PositionOutOfBounds { position: usize, size: usize },
}

impl ParcelError {
    /// True for errors that mean writer and reader disagree on the contract
    /// itself. These abort a transaction instead of being answered with an
    /// exception envelope.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            ParcelError::MalformedEnvelope { .. } | ParcelError::UnexpectedTrailingData { .. }
        )
    }
}

impl fmt::Display for ParcelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParcelError::NotEnoughData { needed, available } => write!(
                f,
                "not enough data: needed {} bytes, {} available",
                needed, available
            ),
            ParcelError::MalformedEnvelope {
                start,
                declared_length,
                reason,
            } => write!(
                f,
                "malformed envelope at {} (declared length {}): {}",
                start, declared_length, reason
            ),
            ParcelError::UnexpectedTrailingData { remaining } => {
                write!(f, "{} unexpected bytes after the last argument", remaining)
            }
            ParcelError::UnexpectedNull => write!(f, "unexpected null value"),
            ParcelError::BadValue(msg) => write!(f, "bad value: {}", msg),
            ParcelError::InterfaceMismatch { expected, actual } => write!(
                f,
                "interface token mismatch: expected {:?}, got {:?}",
                expected, actual
            ),
            ParcelError::PositionOutOfBounds { position, size } => write!(
                f,
                "position {} is past the end of the parcel ({} bytes)",
                position, size
            ),
        }
    }
}

impl std::error::Error for ParcelError {}
