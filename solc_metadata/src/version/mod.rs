//!
//! The `solc` version stored in the metadata.
//!

pub mod parse_error;

use std::str::FromStr;

use crate::error::Error;
use crate::METADATA_KEY_SOLC;

use self::parse_error::ParseError;

///
/// The `solc` version stored in the metadata.
///
/// Each component is a single byte of the `solc` metadata entry.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolcVersion {
    /// The major version.
    pub major: u8,
    /// The minor version.
    pub minor: u8,
    /// The patch version.
    pub patch: u8,
}

impl SolcVersion {
    /// The number of version bytes read from the metadata entry.
    pub const BYTE_LENGTH: usize = 3;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl TryFrom<&ciborium::Value> for SolcVersion {
    type Error = Error;

    ///
    /// Looks up the `solc` entry of the top-level metadata map.
    ///
    /// Nested maps are not searched. Bytes after the patch component are ignored.
    ///
    fn try_from(metadata: &ciborium::Value) -> Result<Self, Self::Error> {
        let entries = match metadata {
            ciborium::Value::Map(entries) => entries,
            _ => return Err(Error::VersionNotFound),
        };

        // A duplicate key overrides the earlier entries.
        let value = entries
            .iter()
            .rev()
            .find_map(|(key, value)| match key {
                ciborium::Value::Text(key) if key == METADATA_KEY_SOLC => Some(value),
                _ => None,
            })
            .ok_or(Error::VersionNotFound)?;

        match value {
            ciborium::Value::Bytes(bytes) if bytes.len() >= Self::BYTE_LENGTH => {
                Ok(Self::new(bytes[0], bytes[1], bytes[2]))
            }
            _ => Err(Error::VersionNotFound),
        }
    }
}

impl FromStr for SolcVersion {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let version = semver::Version::parse(string.trim()).map_err(|error| ParseError::Invalid {
            input: string.to_owned(),
            message: error.to_string(),
        })?;
        if !version.pre.is_empty() || !version.build.is_empty() {
            return Err(ParseError::Suffixed(string.to_owned()));
        }

        let component = |value: u64| {
            u8::try_from(value).map_err(|_| ParseError::ComponentOverflow(string.to_owned()))
        };
        Ok(Self::new(
            component(version.major)?,
            component(version.minor)?,
            component(version.patch)?,
        ))
    }
}

impl From<SolcVersion> for semver::Version {
    fn from(version: SolcVersion) -> Self {
        Self::new(
            version.major as u64,
            version.minor as u64,
            version.patch as u64,
        )
    }
}

impl std::fmt::Display for SolcVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
