pub mod alphabet;
pub mod driver;
pub mod error;
pub mod trie;

pub use error::{Result, TrieError};
pub use trie::{SharedTrie, Trie, TrieStats};
