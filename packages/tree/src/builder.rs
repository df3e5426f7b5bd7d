//! Flattening a directory tree into a [`FlatMapping`].

use bytes::Bytes;

use crate::{path, Branch, Content, Error, FlatMapping, Node};

/// What to do with a leaf whose contents are neither text nor bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnsupportedPolicy {
    /// Write [`crate::UNSUPPORTED_CONTENTS_MESSAGE`] as the file body.
    #[default]
    Substitute,
    /// Abort with [`Error::UnsupportedContent`].
    Reject,
}

/// How the tree is walked. Both produce the same mapping in the same order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Recurse into each folder and merge its mapping into the parent's.
    #[default]
    Recursive,
    /// Walk with an explicit stack. Call-stack usage does not grow with depth.
    Iterative,
}

/// Options for a [`DirectoryMappingBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub unsupported: UnsupportedPolicy,
    pub traversal: Traversal,
}

impl BuildOptions {
    /// Options that reject unsupported contents.
    pub fn strict() -> Self {
        Self {
            unsupported: UnsupportedPolicy::Reject,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_unsupported(mut self, unsupported: UnsupportedPolicy) -> Self {
        self.unsupported = unsupported;
        self
    }

    #[must_use]
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }
}

/// Builds flat directory mappings from directory trees.
///
/// Each call to [`build`](Self::build) is independent: the builder holds
/// only its options, and the mapping is created fresh every time.
///
/// # Example
///
/// ```rust
/// use doggybag_tree::{branch, BuildOptions, DirectoryMappingBuilder};
///
/// let listing = branch! { "a.txt" => "x", "count" => 3i64 };
///
/// let lenient = DirectoryMappingBuilder::new().build(&listing, Some("root")).unwrap();
/// assert!(lenient.contains_key("root/count"));
///
/// let strict = DirectoryMappingBuilder::with_options(BuildOptions::strict());
/// assert!(strict.build(&listing, None).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DirectoryMappingBuilder {
    options: BuildOptions,
}

impl DirectoryMappingBuilder {
    /// Create a builder with default (lenient, recursive) options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Flatten `root` into a mapping of full path -> file bytes.
    ///
    /// `prefix` is prepended to every key; `None` and `Some("")` are the
    /// same. With the default options this never returns an error.
    pub fn build(&self, root: &Branch, prefix: Option<&str>) -> Result<FlatMapping, Error> {
        let prefix = prefix.unwrap_or_default();
        tracing::debug!(
            prefix,
            entries = root.len(),
            traversal = ?self.options.traversal,
            "building directory mapping"
        );

        let mapping = match self.options.traversal {
            Traversal::Recursive => self.build_recursive(root, prefix)?,
            Traversal::Iterative => self.build_iterative(root, prefix)?,
        };

        tracing::debug!(files = mapping.len(), "built directory mapping");
        Ok(mapping)
    }

    /// Flatten any node. A file at the top level has nothing to enumerate
    /// and is rejected.
    pub fn build_node(&self, node: &Node, prefix: Option<&str>) -> Result<FlatMapping, Error> {
        match node {
            Node::Branch(branch) => self.build(branch, prefix),
            Node::Leaf(content) => Err(Error::NotABranch {
                kind: content.kind(),
            }),
        }
    }

    fn build_recursive(&self, branch: &Branch, prefix: &str) -> Result<FlatMapping, Error> {
        let mut mapping = FlatMapping::new();

        for (name, node) in branch.entries() {
            let full_path = path::join(prefix, name);

            match node {
                Node::Branch(child) => {
                    let child_mapping = self.build_recursive(child, &full_path)?;
                    mapping.merge(child_mapping);
                }
                Node::Leaf(content) => {
                    let bytes = self.normalize(&full_path, content)?;
                    mapping.insert(full_path, bytes);
                }
            }
        }

        Ok(mapping)
    }

    fn build_iterative(&self, root: &Branch, prefix: &str) -> Result<FlatMapping, Error> {
        root.leaves(prefix)
            .map(|(full_path, content)| {
                let bytes = self.normalize(&full_path, content)?;
                Ok((full_path, bytes))
            })
            .collect()
    }

    fn normalize(&self, full_path: &str, content: &Content) -> Result<Bytes, Error> {
        match self.options.unsupported {
            UnsupportedPolicy::Substitute => Ok(substitute(full_path, content)),
            UnsupportedPolicy::Reject => content.try_to_bytes(full_path),
        }
    }
}

/// Flatten `root` with the lenient defaults.
///
/// Unsupported contents are replaced by the diagnostic message, so this
/// cannot fail.
pub fn create_directory_mapping(root: &Branch, prefix: Option<&str>) -> FlatMapping {
    root.leaves(prefix.unwrap_or_default())
        .map(|(full_path, content)| {
            let bytes = substitute(&full_path, content);
            (full_path, bytes)
        })
        .collect()
}

fn substitute(full_path: &str, content: &Content) -> Bytes {
    if !content.is_supported() {
        tracing::warn!(
            path = full_path,
            kind = content.kind(),
            "unsupported file contents, writing diagnostic message instead"
        );
    }
    content.to_bytes()
}
