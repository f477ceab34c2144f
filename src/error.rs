use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("invalid input: word is empty")]
    EmptyWord,
    #[error("invalid input: `{symbol}` at position {position} is not in a-z")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("trie lock poisoned")]
    Poisoned,
    #[error("word length {step_len} * {steps} overflows")]
    LengthOverflow { steps: usize, step_len: usize },
    #[error("cannot render trie: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, TrieError>;
