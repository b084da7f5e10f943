use super::*;
use crate::{KeyOutcome, WordError, WordSession};
use kana_core::table::PatternTable;

// --- Construction ---

#[test]
fn test_empty_word_rejected() {
    let err = WordSession::new(vec![]).unwrap_err();
    assert!(matches!(err, WordError::Empty));
}

#[test]
fn test_unknown_kana_rejected_at_load() {
    let err = WordSession::from_kana(&["か", "漢"], PatternTable::global()).unwrap_err();
    assert!(matches!(err, WordError::Table(_)));
}

// --- Plain words ---

#[test]
fn test_simple_word_katana() {
    let mut session = word(&["か", "た", "な"]);
    let outcomes = type_str(&mut session, "katana");
    assert_all_accepted(&outcomes);
    assert!(session.is_completed());
    assert_eq!(session.accepted_text(), "katana");
}

#[test]
fn test_completion_signal_on_last_keystroke() {
    let mut session = word(&["か", "た"]);
    assert!(!session.handle_key('k').completed);
    assert!(!session.handle_key('a').completed);
    assert!(!session.handle_key('t').completed);
    let resp = session.handle_key('a');
    assert!(resp.completed);
    assert!(resp.display.is_none());
}

#[test]
fn test_alternate_spelling_shi() {
    let mut session = word(&["し", "か"]);
    let outcomes = type_str(&mut session, "shika");
    assert_all_accepted(&outcomes);
    assert!(session.is_completed());
    assert_eq!(session.accepted_text(), "shika");
}

#[test]
fn test_digraph_syllable() {
    let mut session = word(&["きゃ", "く"]);
    let outcomes = type_str(&mut session, "kyaku");
    assert_all_accepted(&outcomes);
    assert!(session.is_completed());
}

#[test]
fn test_uppercase_keys_lowercased() {
    let mut session = word(&["か", "た"]);
    let outcomes = type_str(&mut session, "KATA");
    assert_all_accepted(&outcomes);
    assert!(session.is_completed());
    assert_eq!(session.accepted_text(), "kata");
}

// --- Misses ---

#[test]
fn test_miss_does_not_mutate() {
    let mut session = word(&["か", "た"]);
    session.handle_key('k');
    let before = session.current_display();

    let resp = session.handle_key('z');
    assert_eq!(resp.outcome, KeyOutcome::Rejected);
    assert_eq!(session.current_display(), before);
    assert_eq!(session.current_index(), 0);

    // Recovery: the right key still lands.
    assert!(session.handle_key('a').outcome.is_accepted());
}

#[test]
fn test_keys_after_completion_ignored() {
    let mut session = word(&["あ"]);
    assert!(session.handle_key('a').completed);

    let resp = session.handle_key('a');
    assert_eq!(resp.outcome, KeyOutcome::Rejected);
    assert!(resp.completed);
    assert_eq!(session.accepted_text(), "a");
}

// --- Cursor invariant ---

#[test]
fn test_cursor_advances_per_completed_syllable() {
    let mut session = word(&["か", "し", "つ"]);
    assert_eq!(session.current_index(), 0);
    type_str(&mut session, "ka");
    assert_eq!(session.current_index(), 1);
    type_str(&mut session, "si");
    assert_eq!(session.current_index(), 2);
    type_str(&mut session, "tsu");
    assert_eq!(session.current_index(), 3);
    assert!(session.is_completed());
}
