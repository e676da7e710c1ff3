//!
//! The metadata decoder error.
//!

///
/// The metadata decoder error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// There are no bytes to decode.
    #[error("Metadata payload is empty")]
    Empty,
    /// The payload is truncated or is not valid CBOR.
    #[error("Malformed CBOR: {0}")]
    Malformed(String),
    /// The first value does not span the whole payload.
    #[error("{remaining} unexpected bytes after the first {consumed} bytes of CBOR")]
    TrailingBytes {
        /// The number of bytes taken by the first value.
        consumed: usize,
        /// The number of bytes left after the first value.
        remaining: usize,
    },
}

impl<T> From<ciborium::de::Error<T>> for Error
where
    T: std::fmt::Debug,
{
    fn from(error: ciborium::de::Error<T>) -> Self {
        let message = match error {
            ciborium::de::Error::Io(error) => format!("I/O error: {error:?}"),
            ciborium::de::Error::Syntax(offset) => format!("syntax error at offset {offset}"),
            ciborium::de::Error::Semantic(Some(offset), message) => {
                format!("{message} at offset {offset}")
            }
            ciborium::de::Error::Semantic(None, message) => message,
            ciborium::de::Error::RecursionLimitExceeded => "recursion limit exceeded".to_owned(),
        };
        Self::Malformed(message)
    }
}
