//! Drives the `flatten` command the way the binary does.

use std::fs;

use doggybag_cli::commands::{FlattenArgs, OutputFormat};
use doggybag_cli::{run, Command};

#[test]
fn binary_contents_survive_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let listing = dir.path().join("listing.json");
    fs::write(
        &listing,
        r#"{
            "bugcat.txt": "Capoo The BugCat",
            "myFolder": {
                "tutu.json": "{\"rabbit\":true}",
                "subFolder": { "yow.jpg": { "$bytes": "/9j/4A==" } }
            }
        }"#,
    )
    .unwrap();

    let out = run(Command::Flatten(FlattenArgs {
        listing,
        prefix: None,
        strict: true,
        iterative: true,
        format: OutputFormat::Json,
        pretty: true,
    }))
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["bugcat.txt", "myFolder/tutu.json", "myFolder/subFolder/yow.jpg"]
    );
    assert_eq!(json["myFolder/tutu.json"], "{\"rabbit\":true}");
    assert_eq!(json["myFolder/subFolder/yow.jpg"]["$bytes"], "/9j/4A==");
}
