use crate::error::{Result, TrieError};

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Slot 0 of every node is reserved for the end-of-word marker.
pub const TERMINATOR_SLOT: usize = 0;
pub const SLOTS: usize = ALPHABET.len() + 1;

pub fn get_idx(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize + 1)
    } else {
        None
    }
}

pub fn letter_at(slot: usize) -> Option<char> {
    if slot == TERMINATOR_SLOT {
        return None;
    }
    ALPHABET.get(slot - 1).map(|&b| b as char)
}

/// Maps a word to the child slots along its path, rejecting it before
/// anything is mutated if it is empty or leaves 'a'..='z'.
pub fn encode(word: &str) -> Result<Vec<usize>> {
    if word.is_empty() {
        return Err(TrieError::EmptyWord);
    }
    word.chars()
        .enumerate()
        .map(|(position, symbol)| get_idx(symbol)
            .ok_or(TrieError::InvalidSymbol { symbol, position }))
        .collect()
}
