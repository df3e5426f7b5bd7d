//! doggybag: flatten in-memory directory trees into `/`-joined path -> bytes
//! mappings, ready to be written into a virtual filesystem or archive.
//!
//! ```rust
//! use doggybag::{branch, create_directory_mapping};
//!
//! let listing = branch! { "docs" => branch! { "a.txt" => "x" } };
//! let mapping = create_directory_mapping(&listing, Some("site"));
//! assert!(mapping.contains_key("site/docs/a.txt"));
//! ```

pub use doggybag_serde as json;
pub use doggybag_sys as sys;
pub use doggybag_tree::*;
pub use doggybag_zip as zip;
