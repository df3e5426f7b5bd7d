//! The directory tree - folders (`Branch`) and files (`Content` leaves).

use crate::{path, Content};

/// A node in a directory listing.
///
/// Whether a node is a folder or a file is carried by the tag, never
/// guessed from the shape of the value.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A folder with named children.
    Branch(Branch),
    /// A single file's contents.
    Leaf(Content),
}

impl Node {
    /// Check if this node is a folder.
    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// Check if this node is a file.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Node::Branch(branch) => Some(branch),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_content(&self) -> Option<&Content> {
        match self {
            Node::Leaf(content) => Some(content),
            Node::Branch(_) => None,
        }
    }
}

/// A folder: named children in enumeration order.
///
/// Entries keep the order they were inserted in. Inserting a name that is
/// already present does not replace the earlier entry; both are kept and
/// collide when the tree is flattened (the later one wins there).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Branch {
    entries: Vec<(String, Node)>,
}

impl Branch {
    /// Create an empty folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<Node>) {
        self.entries.push((name.into(), node.into()));
    }

    /// Builder-style variant of [`Branch::insert`] for a file.
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<Content>) -> Self {
        self.insert(name, Node::Leaf(content.into()));
        self
    }

    /// Builder-style variant of [`Branch::insert`] for a sub-folder.
    #[must_use]
    pub fn with_folder(mut self, name: impl Into<String>, folder: Branch) -> Self {
        self.insert(name, Node::Branch(folder));
        self
    }

    /// Look up a direct child by name. With duplicate names the last one wins.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries
            .iter()
            .rev()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, node)| node)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over direct children in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Iterate over every file below this folder, depth first.
    ///
    /// Yields `(full_path, contents)` where `full_path` is `prefix` and every
    /// segment name down to the file joined with `/`. The walk uses an
    /// explicit stack, so arbitrarily deep trees are fine.
    pub fn leaves(&self, prefix: &str) -> Leaves<'_> {
        Leaves {
            stack: vec![(prefix.to_string(), self.entries.iter())],
        }
    }

    /// Total number of files below this folder.
    pub fn leaf_count(&self) -> usize {
        self.leaves("").count()
    }

    /// Number of folder levels, counting this one.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];

        while let Some((branch, depth)) = stack.pop() {
            max = max.max(depth);
            for (_, node) in &branch.entries {
                if let Node::Branch(child) = node {
                    stack.push((child, depth + 1));
                }
            }
        }

        max
    }
}

// Tear down iteratively so dropping a deep tree cannot overflow the stack.
impl Drop for Branch {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.entries);
        while let Some((_, node)) = pending.pop() {
            if let Node::Branch(mut child) = node {
                pending.append(&mut child.entries);
            }
        }
    }
}

impl<K, N> FromIterator<(K, N)> for Branch
where
    K: Into<String>,
    N: Into<Node>,
{
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        Branch {
            entries: iter
                .into_iter()
                .map(|(name, node)| (name.into(), node.into()))
                .collect(),
        }
    }
}

/// Depth-first iterator over the files of a [`Branch`].
pub struct Leaves<'a> {
    stack: Vec<(String, std::slice::Iter<'a, (String, Node)>)>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (String, &'a Content);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, entries) = self.stack.last_mut()?;

            let Some((name, node)) = entries.next() else {
                self.stack.pop();
                continue;
            };

            let full_path = path::join(prefix, name);
            match node {
                Node::Leaf(content) => return Some((full_path, content)),
                Node::Branch(child) => self.stack.push((full_path, child.entries.iter())),
            }
        }
    }
}

// Conversions into nodes

impl From<Branch> for Node {
    fn from(v: Branch) -> Self {
        Node::Branch(v)
    }
}

impl From<Content> for Node {
    fn from(v: Content) -> Self {
        Node::Leaf(v)
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::Leaf(v.into())
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::Leaf(v.into())
    }
}

impl From<Vec<u8>> for Node {
    fn from(v: Vec<u8>) -> Self {
        Node::Leaf(v.into())
    }
}

impl From<bytes::Bytes> for Node {
    fn from(v: bytes::Bytes) -> Self {
        Node::Leaf(v.into())
    }
}

impl From<&[u8]> for Node {
    fn from(v: &[u8]) -> Self {
        Node::Leaf(v.into())
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Leaf(v.into())
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::Leaf(v.into())
    }
}

impl From<i32> for Node {
    fn from(v: i32) -> Self {
        Node::Leaf(v.into())
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Leaf(v.into())
    }
}

/// Macro for writing directory listings inline.
///
/// # Example
///
/// ```rust
/// use doggybag_tree::branch;
///
/// let listing = branch! {
///     "readme.md" => "hi",
///     "assets" => branch! { "logo.png" => vec![0x89u8, 0x50] },
/// };
/// assert_eq!(listing.leaf_count(), 2);
/// ```
#[macro_export]
macro_rules! branch {
    () => {
        $crate::Branch::new()
    };
    ($($name:expr => $node:expr),+ $(,)?) => {{
        let mut branch = $crate::Branch::new();
        $( branch.insert($name, $node); )+
        branch
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_walk_depth_first_in_insertion_order() {
        let tree = branch! {
            "z.txt" => "1",
            "dir" => branch! {
                "b.txt" => "2",
                "inner" => branch! { "c.txt" => "3" },
                "a.txt" => "4",
            },
            "y.txt" => "5",
        };

        let paths: Vec<String> = tree.leaves("").map(|(path, _)| path).collect();
        assert_eq!(
            paths,
            vec!["z.txt", "dir/b.txt", "dir/inner/c.txt", "dir/a.txt", "y.txt"]
        );
    }

    #[test]
    fn leaves_apply_prefix() {
        let tree = branch! { "a.txt" => "x" };
        let paths: Vec<String> = tree.leaves("root").map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["root/a.txt"]);
    }

    #[test]
    fn empty_folders_have_no_leaves() {
        let tree = branch! { "empty" => branch!(), "also" => branch! { "x" => branch!() } };
        assert_eq!(tree.leaf_count(), 0);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn get_prefers_last_duplicate() {
        let tree = branch! { "a" => "first", "a" => "second" };
        assert_eq!(tree.len(), 2);
        assert_eq!(
            tree.get("a").and_then(Node::as_content),
            Some(&Content::from("second"))
        );
        assert!(tree.get("missing").is_none());
    }

    #[test]
    fn builder_methods() {
        let tree = Branch::new()
            .with_file("a.txt", "x")
            .with_folder("sub", Branch::new().with_file("b.bin", vec![1u8, 2, 3]));

        assert!(tree.get("a.txt").unwrap().is_leaf());
        assert!(tree.get("sub").unwrap().is_branch());
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn from_iterator() {
        let tree: Branch = vec![("a", "1"), ("b", "2")].into_iter().collect();
        let names: Vec<&str> = tree.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn deep_tree_leaves_do_not_recurse() {
        let mut tree = branch! { "leaf.txt" => "bottom" };
        for _ in 0..2_000 {
            tree = branch! { "d" => tree };
        }

        let leaves: Vec<(String, &Content)> = tree.leaves("").collect();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].0.matches('/').count(), 2_000);
        assert_eq!(tree.depth(), 2_001);
    }
}
