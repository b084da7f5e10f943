use kana_core::matcher::DisplayInfo;

/// How a keystroke landed. The cascade path (one keystroke closing the
/// nasal as bare "n" and starting the next syllable) is its own variant so
/// callers and tests never have to reconstruct it from flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The current syllable's matcher took the keystroke.
    Accepted,
    /// The nasal branch resolved as bare "n" and the keystroke was
    /// forwarded into the following syllable in the same step.
    AcceptedAndCascaded { forwarded: char },
    /// A miss: no matcher state changed. Tallied by the caller for scoring.
    Rejected,
}

impl KeyOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Response from `WordSession::handle_key`, returned to the host driving
/// keystrokes (UI / score collaborator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub outcome: KeyOutcome,
    /// Snapshot of the syllable now under the cursor; `None` once the word
    /// is done.
    pub display: Option<DisplayInfo>,
    /// Whole-word completion signal.
    pub completed: bool,
}

/// Cursor position over the word's syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordProgress {
    /// Syllables fully typed.
    pub typed: usize,
    pub total: usize,
}

impl WordProgress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.typed as f64 / self.total as f64 * 100.0
    }
}

/// Consonant letters are the only keystrokes that may close the nasal as
/// bare "n" and cascade; vowels are ambiguous there and symbols (e.g. the
/// "-" of "ー") never spell a consonant sound.
pub(crate) fn is_consonant(ch: char) -> bool {
    ch.is_ascii_lowercase() && !matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

#[derive(Debug, thiserror::Error)]
pub enum WordError {
    #[error("word has no syllables")]
    Empty,
    #[error(transparent)]
    Table(#[from] kana_core::table::TableError),
}
