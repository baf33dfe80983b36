//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested.
    pub function: String,
    /// C standard or POSIX clause the case exercises.
    #[serde(default)]
    pub standard_ref: String,
    /// Input parameters, interpreted per function by [`crate::execute`].
    pub inputs: serde_json::Value,
    /// Expected rendered output.
    pub expected_output: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|source| HarnessError::Fixture {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Sorted paths of the `*.json` files directly inside `dir`.
pub fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load every fixture set in `dir`, failing on the first malformed file.
pub fn load_dir(dir: &Path) -> Result<Vec<FixtureSet>, HarnessError> {
    let paths = fixture_paths(dir)?;
    if paths.is_empty() {
        return Err(HarnessError::NoFixtures(dir.to_path_buf()));
    }
    paths.iter().map(|path| FixtureSet::from_file(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_without_standard_ref() {
        let set = FixtureSet::from_json(
            r#"{"version":"v1","family":"string","cases":[
                {"name":"len","function":"strlen","inputs":{"s":"abc"},"expected_output":"3"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(set.cases.len(), 1);
        assert!(set.cases[0].standard_ref.is_empty());
    }

    #[test]
    fn json_round_trip_keeps_cases() {
        let set = FixtureSet::from_json(
            r#"{"version":"v1","family":"stdio","cases":[
                {"name":"pct","function":"snprintf","standard_ref":"C11 7.21.6.5","inputs":{"format":"%%","capacity":4},"expected_output":"1:%"}
            ]}"#,
        )
        .unwrap();
        let again = FixtureSet::from_json(&set.to_json().unwrap()).unwrap();
        assert_eq!(again.family, "stdio");
        assert_eq!(again.cases[0].expected_output, "1:%");
    }

    #[test]
    fn malformed_file_names_path() {
        let dir = std::env::temp_dir().join(format!("kernlibc-fixtures-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_dir(&dir).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
