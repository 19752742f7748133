//! File records shown by every explorer view.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::FileListError;

/// A single entry in the explorer.
///
/// Records are immutable input; the views never modify them. The `name` keys
/// rendered rows, so it must be unique within one list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    #[serde(default)]
    pub is_dir: bool,
}

impl File {
    /// Create a regular file record.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            is_dir: false,
        }
    }

    /// Create a directory record.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            is_dir: true,
        }
    }
}

/// Parse a JSON array of file records.
///
/// Rejects lists where two records share a name.
pub fn parse_file_list(json: &str) -> Result<Vec<File>, FileListError> {
    let files: Vec<File> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(files.len());
    if let Some(dup) = files.iter().find(|f| !seen.insert(f.name.as_str())) {
        return Err(FileListError::DuplicateName(dup.name.clone()));
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_list() {
        let json = r#"[
            { "name": "dummy file 1", "size": 500, "isDir": false },
            { "name": "assets", "size": 0, "isDir": true },
            { "name": "notes.txt", "size": 12 }
        ]"#;
        let files = parse_file_list(json).unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(files[0], File::new("dummy file 1", 500));
        assert_eq!(files[1], File::dir("assets"));
        assert!(!files[2].is_dir);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_file_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let json = r#"[
            { "name": "a", "size": 1 },
            { "name": "b", "size": 2 },
            { "name": "a", "size": 3 }
        ]"#;
        match parse_file_list(json) {
            Err(FileListError::DuplicateName(name)) => assert_eq!(name, "a"),
            other => panic!("Expected DuplicateName, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_list_rejected() {
        assert!(matches!(
            parse_file_list(r#"{ "name": "a" }"#),
            Err(FileListError::Parse(_))
        ));
        assert!(matches!(
            parse_file_list(r#"[{ "name": "a", "size": -1 }]"#),
            Err(FileListError::Parse(_))
        ));
    }
}
