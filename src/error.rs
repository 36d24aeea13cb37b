// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Only a handful of operations can genuinely fail (reading configuration,
//! loading a catalog file, talking to the store backend). Everything the
//! shopper sees degrades to a visual fallback instead of surfacing one of
//! these errors.

use crate::application::port::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error(transparent)]
    Store(#[from] StoreError),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_message() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing")));
    }

    #[test]
    fn store_errors_display_transparently() {
        let err: Error = StoreError::NotFound { order_id: 7 }.into();
        assert_eq!(err.to_string(), StoreError::NotFound { order_id: 7 }.to_string());
    }
}
