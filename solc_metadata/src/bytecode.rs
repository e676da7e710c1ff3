//!
//! The compiled contract bytecode.
//!

use std::str::FromStr;

use crate::error::Error;
use crate::version::SolcVersion;

///
/// The compiled contract bytecode.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bytecode(Vec<u8>);

impl Bytecode {
    ///
    /// Reads the `solc` version from the metadata trailer.
    ///
    pub fn solc_version(&self) -> Result<SolcVersion, Error> {
        crate::read_solc_version(self.0.as_slice())
    }

    ///
    /// Returns the raw bytes.
    ///
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Bytecode {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Bytecode {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

///
/// Parses the hexadecimal `solc` output object, with or without the `0x` prefix.
///
impl FromStr for Bytecode {
    type Err = hex::FromHexError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim();
        let string = string.strip_prefix("0x").unwrap_or(string);
        hex::decode(string).map(Self)
    }
}
