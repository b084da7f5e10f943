//! Stateful word session routing keystrokes to syllable matchers.
//!
//! `WordSession` owns an ordered arena of `SyllableMatcher`s plus a cursor.
//! Each keystroke goes to the matcher under the cursor, except in the nasal
//! branching state, where the session peeks at the following matcher and
//! may resolve one keystroke across two syllables.

mod types;

#[cfg(test)]
mod tests;

use kana_core::matcher::{DisplayInfo, SyllableMatcher};
use kana_core::nasal::NasalPatternCache;
use kana_core::table::{PatternTable, SyllableUnit};
use tracing::debug;

pub use types::{KeyOutcome, KeyResponse, WordError, WordProgress};

#[derive(Debug)]
pub struct WordSession {
    matchers: Vec<SyllableMatcher>,
    /// All matchers before this index are completed; the one at it is not.
    current: usize,
    nasal_cache: NasalPatternCache,
}

impl WordSession {
    /// Build a session from pre-resolved syllable units. Defective units
    /// were already rejected by `SyllableUnit::new`; the only thing left to
    /// fail fast on is an empty word.
    pub fn new(units: Vec<SyllableUnit>) -> Result<Self, WordError> {
        if units.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self {
            matchers: units.into_iter().map(SyllableMatcher::new).collect(),
            current: 0,
            nasal_cache: NasalPatternCache::new(),
        })
    }

    /// Build a session by looking each kana up in `table`. An unknown kana
    /// is a word-list defect and fails here, not mid-game.
    pub fn from_kana(kana: &[&str], table: &PatternTable) -> Result<Self, WordError> {
        let units = kana
            .iter()
            .map(|k| table.unit(k))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(units)
    }

    /// Feed one keystroke. Keystrokes after completion are ignored (reported
    /// as `Rejected` with `completed` set, with no state change).
    pub fn handle_key(&mut self, ch: char) -> KeyResponse {
        if self.is_completed() {
            return self.response(KeyOutcome::Rejected);
        }
        let ch = ch.to_ascii_lowercase();

        let outcome = if self.matchers[self.current].in_branch() {
            self.resolve_branch(ch)
        } else if self.matchers[self.current].accept(ch) {
            if self.matchers[self.current].is_completed() {
                self.current += 1;
            }
            KeyOutcome::Accepted
        } else {
            KeyOutcome::Rejected
        };

        debug!(key = %ch, index = self.current, ?outcome, "keystroke");
        self.response(outcome)
    }

    /// Resolve the nasal branching state: a second "n" closes the doubled
    /// spelling; a consonant the next syllable accepts closes the bare "n"
    /// and cascades into that syllable; anything else is a miss for both.
    fn resolve_branch(&mut self, ch: char) -> KeyOutcome {
        if ch == 'n' {
            // "nn" is always reachable in the branching state.
            let accepted = self.matchers[self.current].accept('n');
            debug_assert!(accepted && self.matchers[self.current].is_completed());
            self.current += 1;
            return KeyOutcome::Accepted;
        }

        if !types::is_consonant(ch) {
            return KeyOutcome::Rejected;
        }

        let next_index = self.current + 1;
        let next_unit = self.matchers.get(next_index).map(|m| m.unit());
        let single_ok = self.nasal_cache.single_allowed(next_unit);
        let next_takes_key = self
            .matchers
            .get(next_index)
            .map_or(false, |m| m.can_accept(ch));

        if single_ok && next_takes_key {
            self.matchers[self.current].resolve_single_n();
            self.current = next_index;
            let forwarded = self.matchers[self.current].accept(ch);
            debug_assert!(forwarded);
            if self.matchers[self.current].is_completed() {
                self.current += 1;
            }
            debug!(key = %ch, "nasal closed as bare n, keystroke cascaded");
            KeyOutcome::AcceptedAndCascaded { forwarded: ch }
        } else {
            KeyOutcome::Rejected
        }
    }

    fn response(&self, outcome: KeyOutcome) -> KeyResponse {
        KeyResponse {
            outcome,
            display: self.current_display(),
            completed: self.is_completed(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.current >= self.matchers.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn syllable_count(&self) -> usize {
        self.matchers.len()
    }

    /// Snapshot of the syllable under the cursor; `None` once the word is
    /// done.
    pub fn current_display(&self) -> Option<DisplayInfo> {
        self.matchers.get(self.current).map(|m| m.display_info())
    }

    pub fn progress(&self) -> WordProgress {
        WordProgress {
            typed: self.current.min(self.matchers.len()),
            total: self.matchers.len(),
        }
    }

    /// Romaji accepted so far across the whole word.
    pub fn accepted_text(&self) -> String {
        self.matchers.iter().map(|m| m.accepted()).collect()
    }

    /// Shortest romaji still needed across the whole word.
    pub fn remaining_text(&self) -> String {
        self.matchers.iter().map(|m| m.remaining()).collect()
    }

    /// Pre-resolve the nasal allow-list for every context this word can
    /// reach, so no keystroke pays for a cache miss.
    pub fn prewarm_nasal(&mut self) {
        for i in 0..self.matchers.len() {
            if self.matchers[i].unit().is_nasal() {
                let next = self.matchers.get(i + 1).map(|m| m.unit());
                self.nasal_cache.resolve(next);
            }
        }
    }

    pub fn nasal_cache(&self) -> &NasalPatternCache {
        &self.nasal_cache
    }

    /// Discard all matcher state and put the cursor back at the first
    /// syllable. The nasal cache is kept; it never invalidates.
    pub fn reset(&mut self) {
        for matcher in &mut self.matchers {
            matcher.reset();
        }
        self.current = 0;
    }
}
