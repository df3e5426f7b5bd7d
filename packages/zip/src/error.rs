use thiserror::Error;

/// Errors building a zip archive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// File names are stored with a 16-bit length.
    #[error("file name is {len} bytes, longer than a zip header can hold: '{name}'")]
    FileNameTooLong { name: String, len: usize },

    /// Sizes and offsets are 32-bit without zip64.
    #[error("'{name}' is {size} bytes, too large for a zip archive without zip64")]
    FileTooLarge { name: String, size: usize },

    #[error("{count} files do not fit in a zip archive without zip64")]
    TooManyEntries { count: usize },

    #[error("archive would be {size} bytes, too large without zip64")]
    ArchiveTooLarge { size: u64 },

    #[error("clock error: {0}")]
    Clock(#[from] doggybag_sys::Error),
}
