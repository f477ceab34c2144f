use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::error::{Result, TrieError};
use crate::trie::Trie;

/// Deepest trie `dump` renders. Serializing nests one level per symbol, so
/// deeper tries are refused rather than risking the stack.
pub const MAX_DUMP_DEPTH: usize = 256;

pub const DEMO_WORDS: [&str; 8] = ["hello", "word", "hey", "wonder", "wordle", "open", "opportunity", "opportunities"];

/// Loads `DEMO_WORDS`, runs the reference queries and returns each query
/// with its answer, in order. "opportunity" is deleted between its two
/// lookups.
pub fn demo() -> Result<Vec<(String, bool)>> {
    let mut trie = Trie::new();
    trie.insert_all(DEMO_WORDS)?;
    debug!(words = DEMO_WORDS.len(), "loaded demo words");

    let mut answers = vec![];
    let mut ask = |trie: &Trie, word: &str| -> Result<()> {
        let found = trie.search(word)?;
        info!(word, found, "search");
        answers.push((word.to_string(), found));
        Ok(())
    };

    for word in ["hello", "words", "ope", "opportunity"] {
        ask(&trie, word)?;
    }
    trie.delete("opportunity")?;
    info!(word = "opportunity", "deleted");
    ask(&trie, "opportunity")?;
    ask(&trie, "opportunities")?;
    Ok(answers)
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct ScalingConfig {
    #[builder(default = 10)]
    pub steps: usize,
    #[builder(default = 1000)]
    pub step_len: usize,
    #[builder(default = 'a')]
    pub letter: char,
}

impl ScalingConfig {
    /// Words of one repeated letter, `step_len` longer at every step. Fails
    /// before allocating anything if the longest length overflows.
    pub fn words(&self) -> Result<Vec<String>> {
        self.step_len.checked_mul(self.steps)
            .ok_or(TrieError::LengthOverflow { steps: self.steps, step_len: self.step_len })?;
        Ok((1..=self.steps)
            .map(|n| self.letter.to_string().repeat(self.step_len * n))
            .collect())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScalingSample {
    pub len: usize,
    pub insert: Duration,
    pub search: Duration,
    pub delete: Duration,
    pub found: bool,
}

/// Times insert, search and delete of each word of `config`. The trie is
/// empty again after every step.
pub fn scaling(config: &ScalingConfig) -> Result<Vec<ScalingSample>> {
    let mut trie = Trie::new();
    config.words()?.iter().map(|word| -> Result<ScalingSample> {
        let start = Instant::now();
        trie.insert(word)?;
        let insert = start.elapsed();

        let start = Instant::now();
        let found = trie.search(word)?;
        let search = start.elapsed();

        let start = Instant::now();
        trie.delete(word)?;
        let delete = start.elapsed();

        debug!(len = word.len(), ?insert, ?search, ?delete, "timed word");
        Ok(ScalingSample { len: word.len(), insert, search, delete, found })
    }).collect()
}

/// Inserts `words`, deletes `deletions` and renders the raw node structure
/// as pretty JSON: `null` for an empty slot, `true` for a word end.
pub fn dump<'a>(words: impl IntoIterator<Item=&'a str>,
                deletions: impl IntoIterator<Item=&'a str>) -> Result<String> {
    let mut trie = Trie::new();
    trie.insert_all(words)?;
    deletions.into_iter().try_for_each(|x| trie.delete(x))?;
    let stats = trie.stats();
    debug!(?stats, "dumping trie");
    if stats.max_depth > MAX_DUMP_DEPTH {
        return Err(TrieError::Render(format!(
            "trie is {} levels deep, dump renders at most {}", stats.max_depth, MAX_DUMP_DEPTH)));
    }
    serde_json::to_string_pretty(trie.root()).map_err(|e| TrieError::Render(e.to_string()))
}
