//!
//! The metadata trailer error.
//!

///
/// The metadata trailer error.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bytecode cannot even hold the length field.
    #[error("Bytecode of {length} bytes is shorter than the metadata length field")]
    BytecodeTooShort {
        /// The bytecode length.
        length: usize,
    },
    /// The length field points before the start of the bytecode.
    #[error("Metadata length {declared} exceeds the {available} bytes preceding the length field")]
    LengthOutOfBounds {
        /// The length read from the trailer.
        declared: u16,
        /// The number of bytes preceding the length field.
        available: usize,
    },
}
