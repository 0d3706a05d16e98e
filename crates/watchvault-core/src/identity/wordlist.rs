use super::ValidationError;
use std::collections::HashSet;
use std::path::Path;

/// Ordered, duplicate-free list of words that phrases are drawn from.
///
/// The list itself is deployment data (typically the BIP-39 English list)
/// and is loaded at startup rather than compiled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Build a wordlist, rejecting empty lists, blank or multi-token
    /// entries, and duplicates. Words are stored lowercased.
    pub fn new<I, S>(words: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut list = Vec::new();

        for (index, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(ValidationError::InvalidWordlist {
                    message: format!("entry {index} is not a single word: {word:?}"),
                });
            }
            let word = word.to_lowercase();
            if !seen.insert(word.clone()) {
                return Err(ValidationError::InvalidWordlist {
                    message: format!("duplicate word {word:?} at entry {index}"),
                });
            }
            list.push(word);
        }

        if list.is_empty() {
            return Err(ValidationError::InvalidWordlist {
                message: "wordlist is empty".to_string(),
            });
        }

        Ok(Self { words: list })
    }

    /// Parse one word per line, skipping blank lines.
    pub fn from_text(text: &str) -> Result<Self, ValidationError> {
        Self::new(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Read a one-word-per-line file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let wordlist = Self::from_text(&text)?;
        tracing::debug!(
            path = %path.display(),
            words = wordlist.len(),
            "Loaded wordlist"
        );
        Ok(wordlist)
    }

    /// Words in list order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty wordlist cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` (case-insensitive) is in the list.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|w| *w == word)
    }
}
