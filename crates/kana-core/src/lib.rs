//! Romaji input-matching core for kana typing.
//!
//! Leaf components of the typing engine: the static kana → romaji pattern
//! table, the per-syllable acceptance automaton, and the moraic-nasal
//! disambiguation rule with its memoization cache. Word-level orchestration
//! lives in the `kana_session` crate.

pub mod matcher;
pub mod nasal;
pub mod table;
