//! Static kana → romaji pattern table.
//!
//! Maps each syllable unit (kana or kana digraph, e.g. "きゃ") to its
//! ordered list of accepted romanized spellings. Loaded once from embedded
//! TOML, optionally replaced by a custom table before first use.

mod config;
mod data;

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub use config::{parse_table_toml, TableError};
pub use data::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// The moraic nasal, the one unit whose acceptance depends on lookahead.
pub fn is_nasal_kana(kana: &str) -> bool {
    kana == "ん" || kana == "ン"
}

/// One kana (or digraph) with its accepted spellings. The first spelling is
/// the canonical one shown before any input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableUnit {
    kana: String,
    patterns: Vec<String>,
    nasal: bool,
}

impl SyllableUnit {
    /// Build a unit from raw data, validating the invariants: a non-empty,
    /// ASCII spelling list, and the doubled/escaped/bare spellings for the
    /// nasal.
    pub fn new(
        kana: impl Into<String>,
        patterns: Vec<String>,
    ) -> Result<Self, TableError> {
        let kana = kana.into();
        let patterns = config::validate_spellings(&kana, patterns)?;
        let nasal = is_nasal_kana(&kana);
        Ok(Self {
            kana,
            patterns,
            nasal,
        })
    }

    pub fn kana(&self) -> &str {
        &self.kana
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Canonical display spelling (first pattern).
    pub fn canonical(&self) -> &str {
        &self.patterns[0]
    }

    pub fn is_nasal(&self) -> bool {
        self.nasal
    }
}

pub struct PatternTable {
    units: BTreeMap<String, SyllableUnit>,
}

impl PatternTable {
    /// Set a custom table TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PatternTable {
        static INSTANCE: OnceLock<PatternTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Self::from_toml(toml_str).expect("pattern TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        let map = parse_table_toml(toml_str)?;
        let mut units = BTreeMap::new();
        for (kana, patterns) in map {
            // validate_spellings already ran inside parse_table_toml;
            // SyllableUnit::new re-checks, which is cheap at load time.
            let unit = SyllableUnit::new(kana.clone(), patterns)?;
            units.insert(kana, unit);
        }
        Ok(Self { units })
    }

    pub fn lookup(&self, kana: &str) -> Option<&SyllableUnit> {
        self.units.get(kana)
    }

    /// Owned copy of the unit for `kana`, erroring on unknown kana so a bad
    /// word list fails at load rather than mid-game.
    pub fn unit(&self, kana: &str) -> Result<SyllableUnit, TableError> {
        self.lookup(kana)
            .cloned()
            .ok_or_else(|| TableError::UnknownKana(kana.to_string()))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> impl Iterator<Item = &SyllableUnit> {
        self.units.values()
    }
}
