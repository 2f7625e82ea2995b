//! Test fixture loader for golden graph cases.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// `(endpoint_a, symbol, endpoint_b)` as written in fixture files.
pub type EdgeTriple = (String, String, String);

/// Directory holding the Markov-equivalence golden cases.
pub const EQUIVALENCE_DIR: &str = "golden/equivalence";

/// One golden graph case. Either `dag` or `pdag` is the input; every
/// `expected` field that is present is checked.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphCase {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub nodes: Vec<String>,
    #[serde(default)]
    pub dag: Option<Vec<EdgeTriple>>,
    #[serde(default)]
    pub pdag: Option<Vec<EdgeTriple>>,
    #[serde(default)]
    pub expected: Expected,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expected {
    /// Pattern of the input DAG.
    pub pattern: Option<Vec<EdgeTriple>>,
    /// Completion of the pattern (DAG input) or of the PDAG input.
    pub cpdag: Option<Vec<EdgeTriple>>,
    /// Compact `[A][B|A]` rendering of the input DAG.
    pub compact: Option<String>,
    /// Extension of the pattern (DAG input) or of the PDAG input.
    pub extension: Option<Vec<EdgeTriple>>,
    /// Whether completion succeeds.
    pub completes: Option<bool>,
    /// Whether extension succeeds.
    pub extendable: Option<bool>,
    /// Whether the expected CPDAG is its own canonical form.
    pub cpdag_is_canonical: Option<bool>,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Load `golden/equivalence/<name>.json`.
pub fn load_graph_case(name: &str) -> GraphCase {
    load_fixture(&format!("{EQUIVALENCE_DIR}/{name}.json"))
}

/// Every golden equivalence case, sorted by file name.
pub fn all_graph_cases() -> Vec<GraphCase> {
    list_fixtures(EQUIVALENCE_DIR)
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}
