//! Integration tests for the pup-core file lifecycle.
//!
//! These tests drive the public API against real files in a scratch
//! directory, exercising the parser, both writers and the typed accessors
//! together.

use std::collections::BTreeSet;
use std::path::PathBuf;

use pup_core::{create, load, save, try_load, view, Config, StoreError, DEFAULT_SECTION};
use uuid::Uuid;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A scratch directory under the system temp dir, removed on drop so a
/// failing assertion does not leak it.
struct Scratch(PathBuf);

impl Scratch {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("pup_it_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("scratch dir must be creatable");
        Self(dir)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

/// Collects every `(section, key, value)` triple so comparisons ignore order.
fn triples(cfg: &Config) -> BTreeSet<(String, String, String)> {
    cfg.entries()
        .map(|(s, k, v)| (s.to_string(), k.to_string(), v.to_string()))
        .collect()
}

fn sample() -> Config {
    let mut cfg = Config::new();
    cfg.edit(DEFAULT_SECTION, "version", "0400");
    cfg.edit("dog", "name", "Vasilij");
    cfg.edit("dog", "hp", "10");
    cfg.edit("dog", "evil", "true");
    cfg.edit("cat", "lives", "9");
    cfg.edit("cat", "weight", "4.5");
    cfg
}

// ── Round trips ───────────────────────────────────────────────────────────────

#[test]
fn test_save_then_load_reproduces_all_triples() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("pets.cfg");
    let cfg = sample();

    // Act
    assert!(save(&path, &cfg), "save must succeed");
    let loaded = load(&path);

    // Assert
    assert_eq!(triples(&loaded), triples(&cfg));
}

#[test]
fn test_saving_twice_reloads_identically() {
    let scratch = Scratch::new();
    let path = scratch.path("pets.cfg");
    let cfg = sample();

    assert!(save(&path, &cfg));
    let first = load(&path);
    assert!(save(&path, &cfg));
    let second = load(&path);

    assert_eq!(first, second);
}

#[test]
fn test_load_edit_save_cycle_drops_comments() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("dog.cfg");
    std::fs::write(&path, "; owner notes\n[dog]\n# fluffy\nname = Rex\n").unwrap();

    // Act
    let mut cfg = load(&path);
    cfg.edit("dog", "hp", "12");
    assert!(save(&path, &cfg));
    let text = std::fs::read_to_string(&path).unwrap();

    // Assert
    assert!(!text.contains('#'));
    assert!(!text.contains(';'));
    let reloaded = load(&path);
    assert_eq!(reloaded.get_str("dog", "name"), Some("Rex"));
    assert_eq!(reloaded.get("dog", "hp", 0_u32), 12);
}

// ── Parsing properties ────────────────────────────────────────────────────────

#[test]
fn test_file_of_comments_and_blanks_loads_empty() {
    let scratch = Scratch::new();
    let path = scratch.path("empty.cfg");
    std::fs::write(&path, "\n# a\n\n   ; b\n\t\n").unwrap();

    assert!(load(&path).is_empty());
}

#[test]
fn test_entries_before_first_header_belong_to_default_section() {
    let scratch = Scratch::new();
    let path = scratch.path("mixed.cfg");
    std::fs::write(&path, "debug=1\n[net]\nport=8080\n").unwrap();

    let cfg = load(&path);

    assert!(cfg.get(DEFAULT_SECTION, "debug", false));
    assert_eq!(cfg.get("net", "port", 0_u16), 8080);
}

#[test]
fn test_dog_scenario_from_file() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("dog.cfg");
    std::fs::write(&path, "[dog]\nname=Rex\nhp=10\nevil=false\n").unwrap();

    // Act
    let cfg = load(&path);

    // Assert
    let expected: Config = [("dog", "name", "Rex"), ("dog", "hp", "10"), ("dog", "evil", "false")]
        .into_iter()
        .collect();
    assert_eq!(cfg, expected);
    assert_eq!(cfg.get("dog", "hp", 0_i32), 10);
    assert!(!cfg.get("dog", "evil", true));
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[test]
fn test_create_edit_save_view_get_lifecycle() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("dog.cfg");
    std::fs::write(&path, "[stale]\nx=1\n").unwrap();

    // Act
    assert!(create(&path));
    let mut cfg = load(&path);
    assert!(cfg.is_empty(), "create must truncate");
    cfg.edit("dog", "name", "Vasilij");
    cfg.edit("dog", "hp", "10");
    cfg.edit("dog", "evil", "true");
    assert!(save(&path, &cfg));

    // Assert
    let shown = view(&cfg);
    assert!(shown.starts_with("[dog]\n"));
    assert!(shown.contains("name = Vasilij\n"));
    assert!(shown.contains("hp = 10\n"));

    let reloaded = load(&path);
    assert_eq!(reloaded.get("dog", "name", String::from("Unknown")), "Vasilij");
    assert_eq!(reloaded.get("dog", "hp", 1_i32), 10);
    assert!(reloaded.get("dog", "evil", false));
}

#[test]
fn test_remove_then_save_drops_key_from_file() {
    let scratch = Scratch::new();
    let path = scratch.path("dog.cfg");
    let mut cfg = sample();

    cfg.remove("dog", "hp");
    cfg.remove("nosuch", "hp");
    assert!(save(&path, &cfg));
    let reloaded = load(&path);

    assert_eq!(reloaded.get("dog", "hp", -1_i32), -1);
    assert!(!reloaded.contains_section("nosuch"));
}

#[test]
fn test_try_load_distinguishes_missing_file() {
    let scratch = Scratch::new();
    let path = scratch.path("never-written.cfg");

    assert!(matches!(try_load(&path), Err(StoreError::NotFound { .. })));
    assert!(load(&path).is_empty());
}

#[test]
fn test_try_load_refuses_non_utf8_file_so_bytes_survive() {
    // Arrange
    let scratch = Scratch::new();
    let path = scratch.path("latin1.cfg");
    let original: &[u8] = b"[s]\nname=Jos\xe9\nk=v\n";
    std::fs::write(&path, original).unwrap();

    // Act
    let result = try_load(&path);

    // Assert
    match result {
        Err(StoreError::Io { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected InvalidData, got {other:?}"),
    }
    assert_eq!(std::fs::read(&path).unwrap(), original);
}

// ── Serde interop ─────────────────────────────────────────────────────────────

#[test]
fn test_config_serializes_as_nested_json_object() {
    let mut cfg = Config::new();
    cfg.edit("dog", "name", "Rex");

    let json = serde_json::to_value(&cfg).expect("serialize");

    assert_eq!(json, serde_json::json!({ "dog": { "name": "Rex" } }));
}

#[test]
fn test_config_deserializes_from_json() {
    let json = r#"{ "": { "version": "4" }, "dog": { "hp": "10" } }"#;

    let cfg: Config = serde_json::from_str(json).expect("deserialize");

    assert_eq!(cfg.get(DEFAULT_SECTION, "version", 0_i32), 4);
    assert_eq!(cfg.get("dog", "hp", 0_i32), 10);
}
