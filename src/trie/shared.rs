#[cfg(loom)]
use loom::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
#[cfg(not(loom))]
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rayon::prelude::*;

use crate::error::{Result, TrieError};
use crate::trie::haschildren::TrieStats;
use crate::trie::trie::Trie;

/// A `Trie` behind one reader/writer lock. Searches may run alongside each
/// other; insert and delete get the whole structure to themselves. Clones
/// share the same trie.
#[derive(Clone)]
pub struct SharedTrie {
    inner: Arc<RwLock<Trie>>,
}

impl SharedTrie {
    pub fn new() -> SharedTrie {
        SharedTrie { inner: Arc::new(RwLock::new(Trie::new())) }
    }

    fn read(&self) -> Result<RwLockReadGuard<Trie>> {
        self.inner.read().map_err(|_| TrieError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<Trie>> {
        self.inner.write().map_err(|_| TrieError::Poisoned)
    }

    pub fn insert(&self, word: &str) -> Result<()> {
        self.write()?.insert(word)
    }

    pub fn delete(&self, word: &str) -> Result<()> {
        self.write()?.delete(word)
    }

    pub fn search(&self, word: &str) -> Result<bool> {
        self.read()?.search(word)
    }

    /// Looks every word up under a single read lock, in parallel.
    pub fn search_many(&self, words: &[&str]) -> Result<Vec<bool>> {
        let guard = self.read()?;
        let trie: &Trie = &guard;
        words.par_iter().map(|word| trie.search(word)).collect()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    pub fn stats(&self) -> Result<TrieStats> {
        Ok(self.read()?.stats())
    }
}

impl Default for SharedTrie {
    fn default() -> Self {
        SharedTrie::new()
    }
}

impl From<Trie> for SharedTrie {
    fn from(trie: Trie) -> Self {
        SharedTrie { inner: Arc::new(RwLock::new(trie)) }
    }
}
