use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

pub mod filters;

/// Read-only membership test consulted by the solver.
///
/// Any set-like word store can act as the oracle. Lookups are exact: no trimming or
/// case-folding happens here, so normalize the word list before building the oracle.
pub trait Oracle {
    fn contains(&self, candidate: &str) -> bool;
}

impl Oracle for HashSet<String> {
    fn contains(&self, candidate: &str) -> bool {
        HashSet::contains(self, candidate)
    }
}

impl Oracle for BTreeSet<String> {
    fn contains(&self, candidate: &str) -> bool {
        BTreeSet::contains(self, candidate)
    }
}

impl<T: Oracle + ?Sized> Oracle for &T {
    fn contains(&self, candidate: &str) -> bool {
        (**self).contains(candidate)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file, one word per whitespace-separated token.
    ///
    /// A missing or unreadable file is an error rather than an empty dictionary.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let dictionary = Self::from_text(&content);

        tracing::info!(
            "Loaded {} words into dictionary from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Build from raw text, splitting on whitespace
    pub fn from_text(content: &str) -> Self {
        Self::from_words(content.split_whitespace())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Oracle for Dictionary {
    fn contains(&self, candidate: &str) -> bool {
        Dictionary::contains(self, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.contains("test"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let dict = Dictionary::from_words(["lime", "Mile"]);
        assert!(dict.contains("lime"));
        assert!(!dict.contains("LIME"));
        assert!(!dict.contains("mile"));
        assert!(dict.contains("Mile"));
        assert!(!dict.contains("lime "));
    }

    #[test]
    fn test_from_text_splits_on_any_whitespace() {
        let dict = Dictionary::from_text("coui lime\nplie\r\n\n  yelp\t");
        assert_eq!(dict.len(), 4);
        assert!(dict.contains("yelp"));
        assert!(dict.contains("plie"));
    }

    #[test]
    fn test_std_sets_act_as_oracles() {
        let hashed: HashSet<String> = ["quim".to_string()].into_iter().collect();
        let sorted: BTreeSet<String> = ["quim".to_string()].into_iter().collect();
        assert!(Oracle::contains(&hashed, "quim"));
        assert!(Oracle::contains(&sorted, "quim"));
        assert!(!Oracle::contains(&sorted, "qui"));
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "coui\nlime\nlime").unwrap();

        let dict = Dictionary::load(file.path()).await.unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("coui"));
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Dictionary::load(dir.path().join("missing.txt")).await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to read dictionary"));
    }
}
