//! Moraic-nasal ("ん") disambiguation.
//!
//! Whether the bare single-letter "n" may close the nasal depends only on
//! the syllable that follows: a vowel-, y- or w-initial canonical spelling
//! would make "na"/"nya"/... ambiguous, so doubling is required there. The
//! decision is a pure function over a small finite domain, memoized in
//! `NasalPatternCache`.

use std::collections::HashMap;

use tracing::debug;

use crate::table::{PatternTable, SyllableUnit};

/// Allow-list when the bare "n" is blocked by the following syllable.
pub const DOUBLED_ONLY: &[&str] = &["nn", "xn"];
/// Allow-list when the bare "n" may close the nasal.
pub const WITH_SINGLE: &[&str] = &["nn", "xn", "n"];

/// Resolve the nasal allow-list for a following syllable, or for end of
/// word when `next` is `None`.
///
/// End of word requires doubling: with no following keystroke to cascade
/// into, a trailing bare "n" never resolves, so "ほん" is typed "honn" (or
/// "hoxn").
pub fn allow_list(next: Option<&SyllableUnit>) -> &'static [&'static str] {
    let unit = match next {
        Some(unit) => unit,
        None => return DOUBLED_ONLY,
    };
    match unit.canonical().bytes().next() {
        Some(b'a' | b'i' | b'u' | b'e' | b'o' | b'y' | b'w') => DOUBLED_ONLY,
        _ => WITH_SINGLE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Memoization over `allow_list`, keyed by the following kana (empty-string
/// sentinel for end of word). The table is static, so entries never need
/// invalidation.
#[derive(Debug, Default)]
pub struct NasalPatternCache {
    entries: HashMap<String, &'static [&'static str]>,
    hits: u64,
    misses: u64,
}

impl NasalPatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, next: Option<&SyllableUnit>) -> &'static [&'static str] {
        let key = next.map_or("", |u| u.kana());
        if let Some(&list) = self.entries.get(key) {
            self.hits += 1;
            return list;
        }
        let list = allow_list(next);
        debug!(next = key, ?list, "nasal allow-list resolved");
        self.entries.insert(key.to_string(), list);
        self.misses += 1;
        list
    }

    /// Whether the bare "n" spelling is permitted before `next`.
    pub fn single_allowed(&mut self, next: Option<&SyllableUnit>) -> bool {
        self.resolve(next).contains(&"n")
    }

    /// Resolve every context reachable from `table` up front, plus the
    /// end-of-word sentinel.
    pub fn prewarm(&mut self, table: &PatternTable) {
        self.resolve(None);
        for unit in table.units() {
            self.resolve(Some(unit));
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
