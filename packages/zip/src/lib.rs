//! # doggybag-zip
//!
//! Writes a flat directory mapping as a zip archive. Entries are stored
//! without compression and stamped with one DOS modification time.
//!
//! Layout of a built archive:
//!
//! ```text
//! [local file header][body]   one per file, in mapping order
//! [central directory header]  one per file, same order
//! [end of central directory record]
//! ```
//!
//! # Example
//!
//! ```rust
//! use doggybag_sys::{DosDateTime, FixedClock, TimeSnapshot};
//! use doggybag_tree::{branch, create_directory_mapping};
//! use doggybag_zip::ZipArchiveBuilder;
//!
//! let listing = branch! { "docs" => branch! { "a.txt" => "hello" } };
//! let mapping = create_directory_mapping(&listing, None);
//!
//! let clock = FixedClock(TimeSnapshot::from_array([12, 30, 0, 1, 5, 2024]));
//! let archive = ZipArchiveBuilder::from_clock(&clock).unwrap().build(&mapping).unwrap();
//!
//! assert_eq!(&archive[..4], b"PK\x03\x04");
//! ```

mod archive;
mod crc;
mod entry;
mod error;

pub use archive::{
    end_of_central_directory_record, ZipArchiveBuilder, END_OF_CENTRAL_DIRECTORY_SIGNATURE,
    END_OF_CENTRAL_DIRECTORY_SIZE,
};
pub use crc::{Crc32, CrcCalculator};
pub use entry::{
    ZipFileEntry, CENTRAL_DIRECTORY_HEADER_BASE_SIZE, CENTRAL_DIRECTORY_HEADER_SIGNATURE,
    LOCAL_FILE_HEADER_BASE_SIZE, LOCAL_FILE_HEADER_SIGNATURE,
};
pub use error::Error;
