pub mod trie;
pub mod node;
pub mod shared;
pub mod haschildren;

pub use haschildren::TrieStats;
pub use node::{Node, Slot};
pub use shared::SharedTrie;
pub use trie::Trie;
