// SPDX-License-Identifier: MPL-2.0
use crate::catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Media Error: {0}")]
    Media(#[from] MediaError),
}

/// Reasons a media item could not be turned into a displayable image or
/// model.
///
/// None of these reach the user as an error: the viewer swaps in the
/// placeholder and the variant is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// The remote server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The request itself failed (DNS, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// A local file could not be read.
    #[error("read failed: {0}")]
    Read(String),

    /// The bytes are not a decodable image or model.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
