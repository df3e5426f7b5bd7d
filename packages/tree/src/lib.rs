//! Directory trees and flat directory mappings.
//!
//! This crate holds the only real logic in doggybag:
//! - `Node` / `Branch`: a tagged tree of folders and files
//! - `Content`: a file's raw contents (text, bytes, or an unsupported scalar)
//! - `FlatMapping`: `/`-joined path -> bytes, in traversal order
//! - `DirectoryMappingBuilder`: walks a tree into a `FlatMapping`
//!
//! # Example
//!
//! ```rust
//! use doggybag_tree::{branch, create_directory_mapping};
//!
//! let listing = branch! {
//!     "bugcat.txt" => "Capoo The BugCat",
//!     "myFolder" => branch! {
//!         "tutu.json" => "{\"rabbit\":true}",
//!     },
//! };
//!
//! let mapping = create_directory_mapping(&listing, None);
//! assert_eq!(mapping.len(), 2);
//! assert_eq!(mapping.get("myFolder/tutu.json").unwrap().as_ref(), b"{\"rabbit\":true}");
//! ```

pub use bytes::Bytes;

mod builder;
mod content;
mod error;
mod mapping;
mod node;
pub mod path;

pub use builder::{
    create_directory_mapping, BuildOptions, DirectoryMappingBuilder, Traversal, UnsupportedPolicy,
};
pub use content::{Content, Scalar, UNSUPPORTED_CONTENTS_MESSAGE};
pub use error::Error;
pub use mapping::FlatMapping;
pub use node::{Branch, Leaves, Node};
