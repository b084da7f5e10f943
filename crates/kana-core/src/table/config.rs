use std::collections::BTreeMap;

use serde::Deserialize;

use super::is_nasal_kana;

#[derive(Deserialize)]
struct TableConfig {
    patterns: BTreeMap<String, Vec<String>>,
}

/// Spellings the nasal unit must always carry: doubled, escaped, bare.
pub(super) const NASAL_REQUIRED: [&str; 3] = ["nn", "xn", "n"];

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[patterns] table is empty")]
    Empty,
    #[error("empty kana key")]
    EmptyKana,
    #[error("empty pattern list for kana: {0}")]
    EmptyPatterns(String),
    #[error("empty spelling for kana: {0}")]
    EmptySpelling(String),
    #[error("non-ASCII spelling {spelling:?} for kana: {kana}")]
    NonAsciiSpelling { kana: String, spelling: String },
    #[error("nasal unit {kana} is missing required spelling {spelling:?}")]
    NasalMissing { kana: String, spelling: &'static str },
    #[error("no spellings for kana: {0}")]
    UnknownKana(String),
    #[error("pattern table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, spellings>`.
///
/// Spellings are lowercased; everything else about a bad entry is a
/// construction-time error, never a silent mismatch during play.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<String, Vec<String>>, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.patterns.is_empty() {
        return Err(TableError::Empty);
    }

    let mut out = BTreeMap::new();
    for (kana, spellings) in config.patterns {
        let spellings = validate_spellings(&kana, spellings)?;
        out.insert(kana, spellings);
    }
    Ok(out)
}

/// Validate one entry's spelling list. Spellings are lowercased; key input
/// is case-insensitive, so the stored patterns must be too.
pub(super) fn validate_spellings(
    kana: &str,
    spellings: Vec<String>,
) -> Result<Vec<String>, TableError> {
    if kana.is_empty() {
        return Err(TableError::EmptyKana);
    }
    if spellings.is_empty() {
        return Err(TableError::EmptyPatterns(kana.to_string()));
    }

    let mut out = Vec::with_capacity(spellings.len());
    for spelling in spellings {
        if spelling.is_empty() {
            return Err(TableError::EmptySpelling(kana.to_string()));
        }
        if !spelling.is_ascii() {
            return Err(TableError::NonAsciiSpelling {
                kana: kana.to_string(),
                spelling,
            });
        }
        out.push(spelling.to_ascii_lowercase());
    }

    if is_nasal_kana(kana) {
        for required in NASAL_REQUIRED {
            if !out.iter().any(|s| s == required) {
                return Err(TableError::NasalMissing {
                    kana: kana.to_string(),
                    spelling: required,
                });
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[patterns]
"か" = ["ka", "ca"]
"し" = ["si", "shi", "ci"]
"#;
        let map = parse_table_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["か"], vec!["ka", "ca"]);
        assert_eq!(map["し"], vec!["si", "shi", "ci"]);
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_table_toml(super::super::data::DEFAULT_TOML).unwrap();
        assert!(map.len() > 150, "expected 150+ entries, got {}", map.len());
    }

    #[test]
    fn spellings_are_lowercased() {
        let toml = r#"
[patterns]
"か" = ["KA"]
"#;
        let map = parse_table_toml(toml).unwrap();
        assert_eq!(map["か"], vec!["ka"]);
    }

    #[test]
    fn error_empty_patterns_table() {
        let err = parse_table_toml("[patterns]\n").unwrap_err();
        assert!(matches!(err, TableError::Empty));
    }

    #[test]
    fn error_empty_pattern_list() {
        let toml = r#"
[patterns]
"か" = []
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::EmptyPatterns(_)));
    }

    #[test]
    fn error_empty_spelling() {
        let toml = r#"
[patterns]
"か" = ["ka", ""]
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::EmptySpelling(_)));
    }

    #[test]
    fn error_non_ascii_spelling() {
        let toml = r#"
[patterns]
"か" = ["か"]
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::NonAsciiSpelling { .. }));
    }

    #[test]
    fn error_nasal_missing_escape() {
        let toml = r#"
[patterns]
"ん" = ["nn", "n"]
"#;
        let err = parse_table_toml(toml).unwrap_err();
        match err {
            TableError::NasalMissing { spelling, .. } => assert_eq!(spelling, "xn"),
            other => panic!("expected NasalMissing, got {other:?}"),
        }
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_table_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
