use chanmerge_core::index::{build_index, DEFAULT_DELIMITER};

#[test]
fn test_key_strips_token_fragment() {
    let index = build_index(["pos1_488.tif"], "488", DEFAULT_DELIMITER);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("pos1").map(String::as_str), Some("pos1_488.tif"));
}

#[test]
fn test_key_never_contains_token() {
    let names = ["a_488_b.tif", "well3_488.tif", "x_488y_z.tif"];
    let index = build_index(names, "488", DEFAULT_DELIMITER);
    for key in index.keys() {
        assert!(!key.contains("488"), "key {key:?} still contains the token");
    }
}

#[test]
fn test_files_without_token_are_ignored() {
    let names = ["pos1_488.tif", "pos1_594.tif", "notes.tif"];
    let index = build_index(names, "488", DEFAULT_DELIMITER);
    assert_eq!(index.len(), 1);
    assert!(index.contains_key("pos1"));
}

#[test]
fn test_embedded_token_drops_whole_fragment() {
    // The token shares a fragment with other identifying text; the whole
    // fragment goes, including that text.
    let index = build_index(["well2_488nm_z3.tif"], "488", DEFAULT_DELIMITER);
    assert_eq!(
        index.get("well2_z3.tif").map(String::as_str),
        Some("well2_488nm_z3.tif")
    );
}

#[test]
fn test_interior_token_fragment_keeps_extension_fragment() {
    let index = build_index(["488_pos1.tif"], "488", DEFAULT_DELIMITER);
    assert_eq!(
        index.get("pos1.tif").map(String::as_str),
        Some("488_pos1.tif")
    );
}

#[test]
fn test_key_collision_last_file_wins() {
    // Both names derive the key "pos1"; the later one replaces the earlier.
    let names = ["pos1_488.tif", "pos1_488b.tif"];
    let index = build_index(names, "488", DEFAULT_DELIMITER);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("pos1").map(String::as_str), Some("pos1_488b.tif"));
}

#[test]
fn test_custom_delimiter() {
    let index = build_index(["pos1-488.tif"], "488", '-');
    assert_eq!(index.get("pos1").map(String::as_str), Some("pos1-488.tif"));
}

#[test]
fn test_keys_iterate_lexicographically() {
    let names = ["pos10_488.tif", "pos2_488.tif", "pos1_488.tif"];
    let index = build_index(names, "488", DEFAULT_DELIMITER);
    let keys: Vec<&String> = index.keys().collect();
    assert_eq!(keys, vec!["pos1", "pos10", "pos2"]);
}

#[test]
fn test_empty_input_yields_empty_index() {
    let index = build_index(Vec::<String>::new(), "488", DEFAULT_DELIMITER);
    assert!(index.is_empty());
}
