mod basic;

use kana_core::table::PatternTable;

use super::{KeyOutcome, WordSession};

pub(super) fn word(kana: &[&str]) -> WordSession {
    WordSession::from_kana(kana, PatternTable::global()).unwrap()
}

pub(super) fn type_str(session: &mut WordSession, keys: &str) -> Vec<KeyOutcome> {
    keys.chars()
        .map(|ch| session.handle_key(ch).outcome)
        .collect()
}

pub(super) fn assert_all_accepted(outcomes: &[KeyOutcome]) {
    for (i, outcome) in outcomes.iter().enumerate() {
        assert!(outcome.is_accepted(), "keystroke {i} rejected: {outcome:?}");
    }
}
