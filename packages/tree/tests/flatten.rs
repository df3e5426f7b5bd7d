//! End-to-end flattening behavior.

use std::collections::BTreeMap;

use doggybag_tree::{
    branch, create_directory_mapping, Branch, BuildOptions, Content, DirectoryMappingBuilder,
    FlatMapping, Node, Traversal, UNSUPPORTED_CONTENTS_MESSAGE,
};
use proptest::prelude::*;

fn jpeg_bytes() -> Vec<u8> {
    vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, 0x4a, 0x46, 0x49, 0x46, 0x00]
}

#[test]
fn bugcat_listing() {
    let listing = branch! {
        "bugcat.txt" => "Capoo The BugCat",
        "myFolder" => branch! {
            "tutu.json" => "{\"rabbit\":true}",
            "subFolder" => branch! {
                "yow.jpg" => jpeg_bytes(),
            },
        },
    };

    let mapping = create_directory_mapping(&listing, None);

    assert_eq!(
        mapping.keys().collect::<Vec<_>>(),
        vec!["bugcat.txt", "myFolder/tutu.json", "myFolder/subFolder/yow.jpg"]
    );
    assert_eq!(
        std::str::from_utf8(mapping.get("bugcat.txt").unwrap()).unwrap(),
        "Capoo The BugCat"
    );
    assert_eq!(
        std::str::from_utf8(mapping.get("myFolder/tutu.json").unwrap()).unwrap(),
        "{\"rabbit\":true}"
    );
    assert_eq!(
        mapping.get("myFolder/subFolder/yow.jpg").unwrap().as_ref(),
        jpeg_bytes().as_slice()
    );
}

#[test]
fn root_prefix() {
    let listing = branch! { "a.txt" => "x" };
    let mapping = create_directory_mapping(&listing, Some("root"));

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.get("root/a.txt").unwrap().as_ref(), b"x");
}

#[test]
fn unsupported_leaf_gets_marker_payload() {
    let listing = branch! { "answer" => 42i64, "flag" => true };
    let mapping = create_directory_mapping(&listing, None);

    assert_eq!(
        mapping.get("answer").unwrap().as_ref(),
        b"Unsupported file contents. Only string or Uint8Array is accepted."
    );
    assert_eq!(
        mapping.get("flag").unwrap().as_ref(),
        UNSUPPORTED_CONTENTS_MESSAGE.as_bytes()
    );
}

#[test]
fn into_hash_map_for_bulk_population() {
    let listing = branch! { "dir" => branch! { "f.bin" => vec![1u8, 2, 3] } };
    let files = create_directory_mapping(&listing, Some("sandbox")).into_hash_map();

    assert_eq!(files.len(), 1);
    assert_eq!(files["sandbox/dir/f.bin"], vec![1u8, 2, 3]);
}

#[test]
fn very_deep_tree_with_iterative_traversal() {
    let mut listing = branch! { "bottom.txt" => "deep" };
    for _ in 0..5_000 {
        listing = branch! { "d" => listing };
    }

    let builder =
        DirectoryMappingBuilder::with_options(BuildOptions::default().with_traversal(Traversal::Iterative));
    let mapping = builder.build(&listing, None).unwrap();

    assert_eq!(mapping.len(), 1);
    let (path, contents) = mapping.iter().next().unwrap();
    assert!(path.ends_with("d/bottom.txt"));
    assert_eq!(path.matches('/').count(), 5_000);
    assert_eq!(contents.as_ref(), b"deep");
}

fn arb_content() -> impl Strategy<Value = Content> {
    prop_oneof![
        any::<String>().prop_map(Content::from),
        any::<Vec<u8>>().prop_map(Content::from),
        any::<i64>().prop_map(Content::from),
        any::<bool>().prop_map(Content::from),
    ]
}

/// Test-side model of a listing, kept apart from `Branch` so the expected
/// paths never go through the code being checked.
#[derive(Default)]
struct Folder {
    children: BTreeMap<String, Entry>,
}

enum Entry {
    Folder(Folder),
    File(Content),
}

impl Folder {
    /// Place a file at `segments`. Returns false if the path runs through a
    /// file or lands on an existing name.
    fn add(&mut self, segments: &[String], content: Content) -> bool {
        let Some((first, rest)) = segments.split_first() else {
            return false;
        };
        if rest.is_empty() {
            if self.children.contains_key(first) {
                return false;
            }
            self.children.insert(first.clone(), Entry::File(content));
            return true;
        }
        match self
            .children
            .entry(first.clone())
            .or_insert_with(|| Entry::Folder(Folder::default()))
        {
            Entry::Folder(folder) => folder.add(rest, content),
            Entry::File(_) => false,
        }
    }

    fn to_branch(&self) -> Branch {
        self.children
            .iter()
            .map(|(name, entry)| {
                let node = match entry {
                    Entry::Folder(folder) => Node::Branch(folder.to_branch()),
                    Entry::File(content) => Node::Leaf(content.clone()),
                };
                (name.clone(), node)
            })
            .collect()
    }
}

/// A tree plus the `relative path -> contents` it was built from.
fn arb_listing() -> impl Strategy<Value = (Branch, BTreeMap<String, Content>)> {
    prop::collection::vec(
        (prop::collection::vec("[a-z]{1,3}", 1..5), arb_content()),
        0..24,
    )
    .prop_map(|files| {
        let mut root = Folder::default();
        let mut expected = BTreeMap::new();
        for (segments, content) in files {
            if root.add(&segments, content.clone()) {
                expected.insert(segments.join("/"), content);
            }
        }
        (root.to_branch(), expected)
    })
}

fn expected_bytes(content: &Content) -> Vec<u8> {
    match content {
        Content::Text(text) => text.as_bytes().to_vec(),
        Content::Bytes(bytes) => bytes.to_vec(),
        Content::Unsupported(_) => UNSUPPORTED_CONTENTS_MESSAGE.as_bytes().to_vec(),
    }
}

fn all_mappings(listing: &Branch, prefix: &str) -> Vec<FlatMapping> {
    vec![
        create_directory_mapping(listing, Some(prefix)),
        DirectoryMappingBuilder::new()
            .build(listing, Some(prefix))
            .unwrap(),
        DirectoryMappingBuilder::with_options(
            BuildOptions::default().with_traversal(Traversal::Iterative),
        )
        .build(listing, Some(prefix))
        .unwrap(),
    ]
}

proptest! {
    #[test]
    fn one_entry_per_file((listing, expected) in arb_listing()) {
        prop_assert_eq!(listing.leaf_count(), expected.len());
        for mapping in all_mappings(&listing, "") {
            prop_assert_eq!(mapping.len(), expected.len());
        }
    }

    #[test]
    fn keys_are_prefixed_relative_paths((listing, expected) in arb_listing(), prefix in "[a-z]{0,4}") {
        for mapping in all_mappings(&listing, &prefix) {
            for (relative, content) in &expected {
                let key = if prefix.is_empty() {
                    relative.clone()
                } else {
                    format!("{}/{}", prefix, relative)
                };
                let want = expected_bytes(content);
                prop_assert_eq!(
                    mapping.get(&key).map(|bytes| bytes.as_ref()),
                    Some(want.as_slice()),
                    "missing or wrong contents at {}",
                    key
                );
            }
        }
    }

    #[test]
    fn traversals_agree((listing, _) in arb_listing()) {
        let recursive = DirectoryMappingBuilder::new().build(&listing, Some("p")).unwrap();
        let iterative = DirectoryMappingBuilder::with_options(
            BuildOptions::default().with_traversal(Traversal::Iterative),
        )
        .build(&listing, Some("p"))
        .unwrap();

        let recursive: Vec<_> = recursive.into_iter().collect();
        let iterative: Vec<_> = iterative.into_iter().collect();
        prop_assert_eq!(recursive, iterative);
    }

    #[test]
    fn text_round_trips(text in any::<String>()) {
        let listing = branch! { "t.txt" => text.clone() };
        let mapping = create_directory_mapping(&listing, None);
        let decoded = std::str::from_utf8(mapping.get("t.txt").unwrap()).unwrap();
        prop_assert_eq!(decoded, text.as_str());
    }
}
