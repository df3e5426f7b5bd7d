//! JSON integration for doggybag.
//!
//! This layer turns JSON documents into directory trees and flat mappings
//! back into JSON:
//! - `json_to_node` / `node_to_json`: listing <-> tree conversion
//! - `mapping_to_json`: export a flattened mapping
//! - `JsonListingCodec`: bytes in, tree or mapping out
//!
//! Listings follow the loose typing of script objects: objects and arrays
//! are folders, strings are text files, and any other value is an
//! unsupported leaf. Binary files are written as `{"$bytes": "<base64>"}`.
//!
//! # Example
//!
//! ```rust
//! use doggybag_serde::JsonListingCodec;
//!
//! let codec = JsonListingCodec::new();
//! let mapping = codec
//!     .decode_mapping(br#"{"docs": {"readme.md": "hello"}}"#, None)
//!     .unwrap();
//!
//! assert_eq!(mapping.get("docs/readme.md").unwrap().as_ref(), b"hello");
//! ```

mod codec;
mod convert;
mod error;

pub use codec::JsonListingCodec;
pub use convert::{json_to_branch, json_to_node, mapping_to_json, node_to_json, BYTES_KEY};
pub use error::Error;

// Re-export tree types for convenience
pub use doggybag_tree::{Branch, BuildOptions, Content, FlatMapping, Node};
