//! Error taxonomy shared by all language backends.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while handling a generation request.
///
/// Both variants are all-or-nothing: when a request fails, no output file
/// has been written and any previously generated file at the destination is
/// left untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// A type-name string matched no step of the resolution chain.
    #[error("cannot resolve type name '{type_name}'")]
    Resolution {
        /// The offending type-name string, verbatim as supplied.
        type_name: String,
    },

    /// The generated file could not be written.
    #[error("failed to write '{path}'")]
    Io {
        /// Destination the write was headed for.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Creates a resolution error carrying the offending type-name string.
    pub fn resolution(type_name: impl Into<String>) -> Self {
        Self::Resolution {
            type_name: type_name.into(),
        }
    }

    /// Creates an I/O error for the given destination path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
