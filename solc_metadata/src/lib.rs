//!
//! The Solidity compiler bytecode metadata library.
//!

pub mod bytecode;
pub mod decoder;
pub mod error;
pub mod trailer;
pub mod version;


pub use self::bytecode::Bytecode;
pub use self::error::Error;
pub use self::version::parse_error::ParseError as SolcVersionParseError;
pub use self::version::SolcVersion;

/// The size of the big-endian metadata length field at the end of the bytecode.
pub const METADATA_LENGTH_SIZE: usize = 2;

/// The maximum number of trailing payload bytes dumped into the debug log.
pub const METADATA_DIAGNOSTIC_TAIL_SIZE: usize = 100;

/// The metadata key holding the compiler version bytes.
pub const METADATA_KEY_SOLC: &str = "solc";

///
/// Reads the `solc` version from the metadata trailer of `bytecode`.
///
/// Any failure before the version lookup is reported as [`Error::MetadataAbsent`].
///
pub fn read_solc_version(bytecode: &[u8]) -> Result<SolcVersion, Error> {
    let metadata = decode_solc_metadata(bytecode)?;
    tracing::debug!(?metadata, "Metadata decoded");
    SolcVersion::try_from(&metadata)
}

///
/// Locates and decodes the CBOR metadata trailer of `bytecode`.
///
pub fn decode_solc_metadata(bytecode: &[u8]) -> Result<ciborium::Value, Error> {
    let payload = trailer::metadata_payload(bytecode).map_err(|error| {
        tracing::debug!(%error, "Metadata trailer is invalid");
        Error::MetadataAbsent
    })?;

    let tail = &payload[payload.len().saturating_sub(METADATA_DIAGNOSTIC_TAIL_SIZE)..];
    tracing::debug!(
        "Last {} bytes of metadata: {}",
        tail.len(),
        hex::encode(tail)
    );

    decoder::decode_one(payload).map_err(|error| {
        tracing::debug!(%error, "Metadata decoding failed");
        Error::MetadataAbsent
    })
}
