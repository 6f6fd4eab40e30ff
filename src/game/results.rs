use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::models::LengthGroup;

/// A confirmed word, ordered by length first and then lexicographically
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct FoundWord {
    length: usize,
    text: String,
}

/// Duplicate-free set of confirmed words in (length, lexicographic) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    words: BTreeSet<FoundWord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the word was already present
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(FoundWord {
            length: word.chars().count(),
            text: word.to_string(),
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&FoundWord {
            length: word.chars().count(),
            text: word.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(|w| w.text.as_str())
    }

    /// Words grouped by length, shortest group first
    pub fn groups(&self) -> Vec<LengthGroup> {
        let mut groups: Vec<LengthGroup> = Vec::new();
        for word in &self.words {
            match groups.last_mut() {
                Some(group) if group.length == word.length => group.words.push(word.text.clone()),
                _ => groups.push(LengthGroup {
                    length: word.length,
                    words: vec![word.text.clone()],
                }),
            }
        }
        groups
    }
}

impl<'a> FromIterator<&'a str> for ResultSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

/// Line announcing a new length group
pub fn separator(length: usize) -> String {
    format!(
        "-----------------------------{}---------------------------------",
        length
    )
}

/// One separator per length group followed by that group's words, one per line
pub fn render_grouped(results: &ResultSet) -> String {
    let mut out = String::new();
    for group in results.groups() {
        out.push_str(&separator(group.length));
        out.push('\n');
        for word in &group.words {
            out.push_str(word);
            out.push('\n');
        }
    }
    out
}

/// All words in result order separated by single spaces
pub fn render_inline(results: &ResultSet) -> String {
    results.iter().collect::<Vec<_>>().join(" ")
}

pub async fn write_grouped<P: AsRef<Path>>(path: P, results: &ResultSet) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_grouped(results))
        .await
        .with_context(|| format!("failed to write results to {}", path.display()))?;

    tracing::info!("Wrote {} words to {}", results.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_length_then_lexicographic() {
        let results: ResultSet = ["yelp", "coui", "plies", "lime", "abcdef", "limey"]
            .into_iter()
            .collect();
        let words: Vec<&str> = results.iter().collect();
        assert_eq!(words, vec!["coui", "lime", "yelp", "limey", "plies", "abcdef"]);
    }

    #[test]
    fn test_insert_collapses_duplicates() {
        let mut results = ResultSet::new();
        assert!(results.insert("lime"));
        assert!(!results.insert("lime"));
        assert_eq!(results.len(), 1);
        assert!(results.contains("lime"));
        assert!(!results.contains("mile"));
    }

    #[test]
    fn test_groups() {
        let results: ResultSet = ["yelp", "coui", "limey"].into_iter().collect();
        assert_eq!(
            results.groups(),
            vec![
                LengthGroup {
                    length: 4,
                    words: vec!["coui".to_string(), "yelp".to_string()],
                },
                LengthGroup {
                    length: 5,
                    words: vec!["limey".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_render_grouped_emits_separator_per_length() {
        let results: ResultSet = ["yelp", "coui", "limey"].into_iter().collect();
        let expected = format!(
            "{}\ncoui\nyelp\n{}\nlimey\n",
            separator(4),
            separator(5)
        );
        assert_eq!(render_grouped(&results), expected);
        assert!(separator(12).contains("-12-"));
    }

    #[test]
    fn test_render_empty_results() {
        let results = ResultSet::new();
        assert_eq!(render_grouped(&results), "");
        assert_eq!(render_inline(&results), "");
        assert!(results.groups().is_empty());
    }

    #[test]
    fn test_render_inline() {
        let results: ResultSet = ["limey", "yelp", "coui"].into_iter().collect();
        assert_eq!(render_inline(&results), "coui yelp limey");
    }

    #[tokio::test]
    async fn test_write_grouped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let results: ResultSet = ["plie", "quim"].into_iter().collect();

        write_grouped(&path, &results).await.unwrap();
        let written = fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, format!("{}\nplie\nquim\n", separator(4)));
    }
}
