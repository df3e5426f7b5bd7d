use std::path::PathBuf;

use crate::package::PackageError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("listing error: {0}")]
    Listing(#[from] doggybag_serde::Error),

    #[error("clock error: {0}")]
    Clock(#[from] doggybag_sys::Error),

    #[error("archive error: {0}")]
    Zip(#[from] doggybag_zip::Error),

    #[error("package error: {0}")]
    Package(#[from] PackageError),

    #[error("logging setup failed: {message}")]
    Logging { message: String },
}
