use std::fmt::{Debug, Formatter};

use delegate::delegate;
use metrics::counter;
use tracing::trace;

use crate::alphabet::{encode, letter_at};
use crate::error::Result;
use crate::trie::haschildren::TrieStats;
use crate::trie::node::Node;

/// A prefix trie over the lowercase letters 'a'..='z'.
///
/// Every operation validates its word before touching the structure, so a
/// rejected word never leaves partial paths behind.
#[derive(PartialEq, Eq, Default)]
pub struct Trie {
    root: Node,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: Node::default(),
        }
    }

    delegate! {
        to self.root {
            pub fn is_empty(&self) -> bool;
            pub fn stats(&self) -> TrieStats;
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn insert(&mut self, word: &str) -> Result<()> {
        let path = encode(word)?;
        let mut current = &mut self.root;
        for slot in path {
            current = current.get_or_create_child(slot);
        }
        current.set_end(true);
        Ok(())
    }

    pub fn insert_all<'f, I>(&mut self, items: I) -> Result<()>
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().try_for_each(|x| self.insert(x))
    }

    /// True iff exactly `word` was inserted and not deleted since. Prefixes
    /// of stored words do not count.
    pub fn search(&self, word: &str) -> Result<bool> {
        let path = encode(word)?;
        Ok(self.get_node(&path).map(Node::is_end).unwrap_or(false))
    }

    fn get_node(&self, path: &[usize]) -> Option<&Node> {
        path.iter().try_fold(&self.root, |node, &slot| node.get_child(slot))
    }

    /// Removes `word` if present and prunes every node left without
    /// information, never the root. Deleting an absent word is a no-op.
    pub fn delete(&mut self, word: &str) -> Result<()> {
        let path = encode(word)?;

        // Walking down, remember the deepest node that must survive once the
        // word is gone: the root, or any node holding something besides the
        // next step of this path. Everything below it on the path is dead.
        let mut keep = 0;
        let mut node = &self.root;
        for (depth, &slot) in path.iter().enumerate() {
            if depth > 0 && node.occupied() > 1 {
                keep = depth;
            }
            node = match node.get_child(slot) {
                Some(child) => child,
                None => return Ok(()),
            };
        }
        if !node.is_end() {
            return Ok(());
        }

        if node.occupied() > 1 {
            trace!(word, "unmarking word end, node still has children");
            if let Some(end) = self.get_node_mut(&path) {
                end.set_end(false);
            }
            return Ok(());
        }

        let pruned = match self.get_node_mut(&path[..keep]) {
            Some(survivor) => survivor.release_child(path[keep]),
            None => 0,
        };
        trace!(word, pruned, keep, letter = ?letter_at(path[keep]), "pruned dead branch");
        counter!("trie_nodes_pruned", pruned as u64);
        Ok(())
    }

    fn get_node_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for &slot in path {
            current = current.get_child_mut(slot)?;
        }
        Some(current)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.root.traverse_prefix(&mut |x, _| { l.entry(x); });
        l.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use maplit::hashset;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::error::TrieError;
    use crate::trie::haschildren::TrieStats;
    use crate::trie::trie::Trie;

    const WORDS: [&str; 8] = ["hello", "word", "hey", "wonder", "wordle", "open", "opportunity", "opportunities"];

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        trie.insert_all(words.iter().copied()).unwrap();
        trie
    }

    fn assert_no_dead_nodes(trie: &Trie) {
        trie.root().traverse_prefix(&mut |node, depth| {
            assert!(depth == 0 || !node.is_empty(), "dead node at depth {}", depth);
        });
    }

    #[test]
    fn finds_words_in_trie() {
        let trie = trie_of(&WORDS);
        WORDS.iter().for_each(|word| assert!(trie.search(word).unwrap(), "{}", word));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let trie = trie_of(&WORDS);
        let bad_words = vec!["words", "ope", "h", "he", "wor", "opportunit", "banana", "hellos"];
        bad_words.iter().for_each(|word| assert!(!trie.search(word).unwrap(), "{}", word));
    }

    #[test]
    fn stored_words_among_candidates() {
        let mut trie = trie_of(&WORDS);
        trie.delete("opportunity").unwrap();
        trie.delete("hey").unwrap();
        let candidates = ["hello", "he", "hey", "word", "words", "wordle", "ope", "open", "opportunity", "opportunities"];
        let stored: HashSet<&str> = candidates.iter().copied()
            .filter(|word| trie.search(word).unwrap())
            .collect();
        assert_eq!(stored, hashset! {"hello", "word", "wordle", "open", "opportunities"});
    }

    #[test]
    fn delete_keeps_longer_word() {
        let mut trie = trie_of(&WORDS);
        assert!(trie.search("opportunity").unwrap());
        trie.delete("opportunity").unwrap();
        assert!(!trie.search("opportunity").unwrap());
        assert!(trie.search("opportunities").unwrap());
    }

    #[test]
    fn delete_prefix_word_keeps_extension() {
        let mut trie = trie_of(&["present", "presentation"]);
        assert!(trie.search("present").unwrap());
        assert!(trie.search("presentation").unwrap());
        trie.delete("present").unwrap();
        assert!(!trie.search("present").unwrap());
        assert!(trie.search("presentation").unwrap());
    }

    #[test]
    fn delete_extension_keeps_prefix_word() {
        let mut trie = trie_of(&["he", "hello"]);
        trie.delete("hello").unwrap();
        assert!(trie.search("he").unwrap());
        assert!(!trie.search("hello").unwrap());
        assert_eq!(trie, trie_of(&["he"]));
    }

    #[test]
    fn delete_prunes_to_branch_point() {
        let mut trie = trie_of(&["wonder", "word"]);
        trie.delete("wonder").unwrap();
        assert_eq!(trie, trie_of(&["word"]));
        assert_eq!(trie.stats(), TrieStats::new(5, 1, 4));
    }

    #[test]
    fn delete_absent_word_is_noop() {
        let mut trie = trie_of(&WORDS);
        for word in ["words", "ope", "opportunit", "zebra", "hel"] {
            trie.delete(word).unwrap();
        }
        assert_eq!(trie, trie_of(&WORDS));
    }

    #[test]
    fn delete_twice_is_noop() {
        let mut trie = trie_of(&WORDS);
        trie.delete("wordle").unwrap();
        let once = trie_of(&["hello", "word", "hey", "wonder", "open", "opportunity", "opportunities"]);
        assert_eq!(trie, once);
        trie.delete("wordle").unwrap();
        assert_eq!(trie, once);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = trie_of(&WORDS);
        trie.insert("hello").unwrap();
        trie.insert("word").unwrap();
        assert_eq!(trie, trie_of(&WORDS));
    }

    #[test]
    fn deleting_everything_leaves_fresh_trie() {
        let mut trie = trie_of(&WORDS);
        WORDS.iter().for_each(|word| trie.delete(word).unwrap());
        assert!(trie.is_empty());
        assert_eq!(trie, Trie::new());
        assert_eq!(trie.stats(), TrieStats::new(1, 0, 0));
    }

    #[test]
    fn rejects_invalid_words_without_mutation() {
        let mut trie = trie_of(&["abc"]);
        assert_eq!(trie.insert(""), Err(TrieError::EmptyWord));
        assert_eq!(trie.insert("abd1"), Err(TrieError::InvalidSymbol { symbol: '1', position: 3 }));
        assert_eq!(trie.search("ABC"), Err(TrieError::InvalidSymbol { symbol: 'A', position: 0 }));
        assert_eq!(trie.delete("ab c"), Err(TrieError::InvalidSymbol { symbol: ' ', position: 2 }));
        assert_eq!(trie, trie_of(&["abc"]));
    }

    #[test]
    fn compares_tries_with_very_long_words() {
        let word = "a".repeat(200_000);
        let mut left = Trie::new();
        let mut right = Trie::new();
        left.insert(&word).unwrap();
        right.insert(&word).unwrap();
        assert!(left == right);
        right.insert("ab").unwrap();
        assert!(left != right);
        right.delete("ab").unwrap();
        assert!(left == right);
    }

    #[test]
    fn handles_very_long_words() {
        let mut trie = Trie::new();
        let long = "a".repeat(100_000);
        let longer = "a".repeat(100_001);
        trie.insert(&long).unwrap();
        trie.insert(&longer).unwrap();
        assert!(trie.search(&long).unwrap());
        trie.delete(&longer).unwrap();
        assert!(trie.search(&long).unwrap());
        assert!(!trie.search(&longer).unwrap());
        trie.delete(&long).unwrap();
        assert!(trie.is_empty());
    }

    #[test]
    fn matches_set_model() {
        let mut rng = StdRng::seed_from_u64(0x7e1e);
        let mut trie = Trie::new();
        let mut model: HashSet<String> = HashSet::new();
        let random_word = |rng: &mut StdRng| -> String {
            let len = rng.gen_range(1..6);
            (0..len).map(|_| rng.gen_range(b'a'..=b'd') as char).collect()
        };

        for _ in 0..5_000 {
            let word = random_word(&mut rng);
            if rng.gen_bool(0.6) {
                trie.insert(&word).unwrap();
                model.insert(word);
            } else {
                trie.delete(&word).unwrap();
                model.remove(&word);
            }
            let lookup = random_word(&mut rng);
            assert_eq!(trie.search(&lookup).unwrap(), model.contains(&lookup), "{}", lookup);
            assert_no_dead_nodes(&trie);
        }

        assert_eq!(trie.stats().words, model.len());
        for word in model.iter() {
            assert!(trie.search(word).unwrap());
        }
        let words: Vec<String> = model.drain().collect();
        words.iter().for_each(|word| trie.delete(word).unwrap());
        assert_eq!(trie, Trie::new());
    }
}
