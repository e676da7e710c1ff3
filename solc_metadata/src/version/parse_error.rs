//!
//! The `solc` version parsing error.
//!

///
/// The `solc` version parsing error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string is not a valid semantic version.
    #[error("Invalid version `{input}`: {message}")]
    Invalid {
        /// The parsed string.
        input: String,
        /// The semver parser message.
        message: String,
    },
    /// The version has a pre-release or build suffix.
    #[error("Version `{0}` must be a plain `major.minor.patch` triple")]
    Suffixed(String),
    /// A component does not fit into one metadata byte.
    #[error("Version `{0}` has a component greater than 255")]
    ComponentOverflow(String),
}
