//! Per-syllable acceptance automaton.
//!
//! One `SyllableMatcher` tracks a single syllable occurrence in the current
//! word: the input typed so far, which spellings are still reachable, and
//! the shortest suffix left to show. The nasal unit is the one exception to
//! plain prefix matching: a bare "n" exact match parks the matcher in a
//! branching state instead of completing, and the session owning the word
//! resolves it with lookahead (see the `nasal` module).

use crate::table::SyllableUnit;

/// Read-only snapshot for rendering one syllable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    /// The kana being typed.
    pub kana: String,
    /// Input accepted so far for this syllable.
    pub accepted_text: String,
    /// Shortest suffix among active spellings still needed.
    pub remaining_text: String,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct SyllableMatcher {
    unit: SyllableUnit,
    accepted: String,
    /// Indices into `unit.patterns()` still prefixed by `accepted`.
    active: Vec<usize>,
    remaining: String,
    completed: bool,
}

impl SyllableMatcher {
    pub fn new(unit: SyllableUnit) -> Self {
        let active: Vec<usize> = (0..unit.patterns().len()).collect();
        let mut matcher = Self {
            unit,
            accepted: String::new(),
            active,
            remaining: String::new(),
            completed: false,
        };
        matcher.recompute_remaining();
        matcher
    }

    pub fn unit(&self) -> &SyllableUnit {
        &self.unit
    }

    pub fn kana(&self) -> &str {
        self.unit.kana()
    }

    pub fn accepted(&self) -> &str {
        &self.accepted
    }

    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Number of spellings still reachable; non-increasing under `accept`.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Nasal with a bare "n" typed and not yet resolved: completion is
    /// deferred until the following syllable decides it.
    pub fn in_branch(&self) -> bool {
        self.unit.is_nasal() && !self.completed && self.accepted == "n"
    }

    /// Whether `accepted + ch` is a prefix of at least one active spelling.
    /// Pure predicate, no mutation.
    pub fn can_accept(&self, ch: char) -> bool {
        if self.completed || !ch.is_ascii() {
            return false;
        }
        let ch = ch.to_ascii_lowercase();
        self.active.iter().any(|&i| {
            self.unit.patterns()[i][self.accepted.len()..]
                .chars()
                .next()
                == Some(ch)
        })
    }

    /// Feed one keystroke. Returns false (a miss) with no state change when
    /// no active spelling continues with `ch`.
    pub fn accept(&mut self, ch: char) -> bool {
        if !self.can_accept(ch) {
            return false;
        }
        let ch = ch.to_ascii_lowercase();
        self.accepted.push(ch);

        let unit = &self.unit;
        let accepted = &self.accepted;
        self.active
            .retain(|&i| unit.patterns()[i].starts_with(accepted.as_str()));

        let exact = self
            .active
            .iter()
            .any(|&i| self.unit.patterns()[i] == self.accepted);
        // Bare "n" on the nasal is an exact match but not yet a completion;
        // the word session resolves the branch with lookahead.
        if exact && !(self.unit.is_nasal() && self.accepted == "n") {
            self.completed = true;
        }
        self.recompute_remaining();
        true
    }

    /// Close the branching state by taking the bare "n" spelling. Called by
    /// the word session when the following syllable permits it.
    pub fn resolve_single_n(&mut self) -> bool {
        if !self.in_branch() {
            return false;
        }
        self.completed = true;
        self.remaining.clear();
        true
    }

    pub fn display_info(&self) -> DisplayInfo {
        DisplayInfo {
            kana: self.unit.kana().to_string(),
            accepted_text: self.accepted.clone(),
            remaining_text: self.remaining.clone(),
            completed: self.completed,
        }
    }

    /// Back to the freshly-constructed state.
    pub fn reset(&mut self) {
        self.accepted.clear();
        self.active = (0..self.unit.patterns().len()).collect();
        self.completed = false;
        self.recompute_remaining();
    }

    /// Shortest suffix among active spellings. Empty suffixes are skipped:
    /// outside the nasal branch an empty suffix implies `completed`, and in
    /// the branch the unresolved bare "n" must not read as done.
    fn recompute_remaining(&mut self) {
        if self.completed {
            self.remaining.clear();
            return;
        }
        let mut best: Option<&str> = None;
        for &i in &self.active {
            let suffix = &self.unit.patterns()[i][self.accepted.len()..];
            if suffix.is_empty() {
                continue;
            }
            if best.map_or(true, |b| suffix.len() < b.len()) {
                best = Some(suffix);
            }
        }
        self.remaining = best.unwrap_or_default().to_string();
    }
}
