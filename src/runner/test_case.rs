//! Test case fixtures.
//!
//! A fixture is a JSON file in the puzzle SDK layout:
//!
//! ```json
//! {
//!   "title": { "2": "Simple level", "1": "Niveau simple" },
//!   "testIn": "GREEN\nRED\n30\n0-GREY-3;1-GREEN-2",
//!   "isTest": "true",
//!   "isValidator": "false"
//! }
//! ```
//!
//! Only `testIn` is required. Its lines are handed to the referee as-is.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::TestCaseError;

/// A parsed test case fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Titles keyed by language id ("1" French, "2" English).
    #[serde(default)]
    pub title: BTreeMap<String, String>,

    /// Raw referee input, newline separated.
    pub test_in: String,

    /// Shown to players as a test.
    #[serde(default, with = "string_bool")]
    pub is_test: bool,

    /// Used only for validation.
    #[serde(default, with = "string_bool")]
    pub is_validator: bool,
}

impl TestCase {
    /// Parse a fixture from JSON text. `path` is only used in errors.
    pub fn from_json(json: &str, path: &Path) -> Result<Self, TestCaseError> {
        let case: TestCase = serde_json::from_str(json).map_err(|source| TestCaseError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if case.input_lines().is_empty() {
            return Err(TestCaseError::Empty(path.to_path_buf()));
        }
        Ok(case)
    }

    /// Load the fixture `name` from `dir`.
    pub fn load(dir: &Path, name: &str) -> Result<Self, TestCaseError> {
        let path = resolve(dir, name);
        debug!(path = %path.display(), "loading test case");

        let json = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                TestCaseError::NotFound(path.clone())
            } else {
                TestCaseError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        Self::from_json(&json, &path)
    }

    /// Input lines, with trailing carriage returns and a final empty line dropped.
    #[must_use]
    pub fn input_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .test_in
            .split('\n')
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines
    }

    /// English title, falling back to any title.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .get("2")
            .or_else(|| self.title.values().next())
            .map(String::as_str)
    }
}

/// Absolute names are used as-is; relative names live in `dir`.
fn resolve(dir: &Path, name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}

/// The fixture format stores booleans as `"true"` / `"false"` strings.
mod string_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Bool(bool),
            Text(String),
        }

        Ok(match Flag::deserialize(deserializer)? {
            Flag::Bool(b) => b,
            Flag::Text(s) => s.eq_ignore_ascii_case("true"),
        })
    }
}
