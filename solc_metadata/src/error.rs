//!
//! The metadata extraction error.
//!

///
/// The metadata extraction error.
///
/// Lower-level trailer and decoding failures are collapsed into [`Error::MetadataAbsent`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bytecode does not carry a decodable metadata trailer.
    #[error("Could not decode metadata.")]
    MetadataAbsent,
    /// The metadata was decoded, but has no usable `solc` version bytes.
    #[error("Could not find solc version in metadata.")]
    VersionNotFound,
}
