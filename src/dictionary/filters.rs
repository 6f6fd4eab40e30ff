//! Single-pass clean-up filters over a word list file.
//!
//! Each filter reads the list line by line, applies one transform or predicate, writes
//! the survivors to a sibling `.tmp` file and renames it over the original.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

/// Suffix marking a result line as a word to drop from the list
pub const FLAG_SUFFIX: &str = "--";

/// Default longest word kept by `cap_length`; nothing longer fits a 4x4 grid
pub const DEFAULT_MAX_WORD_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    pub kept: usize,
    pub removed: usize,
}

/// Remove everything up to and including `delimiter` (plus one following space) on
/// every line that contains it. Lines without the delimiter pass through unchanged.
pub async fn strip_prefixes(path: &Path, delimiter: &str) -> Result<FilterReport> {
    let mut changed = 0;
    let report = rewrite(path, |line| {
        let Some(pos) = line.find(delimiter) else {
            return Some(line.to_string());
        };
        changed += 1;
        let rest = &line[pos + delimiter.len()..];
        Some(rest.strip_prefix(' ').unwrap_or(rest).to_string())
    })
    .await?;

    tracing::info!("Stripped prefixes from {} lines of {}", changed, path.display());
    Ok(report)
}

/// Drop every word that `results_path` flags with a trailing `--`
pub async fn remove_flagged(path: &Path, results_path: &Path) -> Result<FilterReport> {
    let results = fs::read_to_string(results_path)
        .await
        .with_context(|| format!("failed to read results file {}", results_path.display()))?;

    let flagged: HashSet<&str> = results
        .lines()
        .filter_map(|line| line.strip_suffix(FLAG_SUFFIX))
        .collect();
    tracing::debug!("{} words flagged in {}", flagged.len(), results_path.display());

    let report = rewrite(path, |line| {
        (!flagged.contains(line)).then(|| line.to_string())
    })
    .await?;

    tracing::info!("Removed {} flagged words from {}", report.removed, path.display());
    Ok(report)
}

/// Keep only non-empty lines made entirely of ASCII letters
pub async fn remove_non_alphabetic(path: &Path) -> Result<FilterReport> {
    let report = rewrite(path, |line| {
        (!line.is_empty() && line.chars().all(|c| c.is_ascii_alphabetic())).then(|| line.to_string())
    })
    .await?;

    tracing::info!("Removed {} non-alphabetic lines from {}", report.removed, path.display());
    Ok(report)
}

/// Lowercase every line, then write the distinct lines back in sorted order
pub async fn make_unique(path: &Path) -> Result<FilterReport> {
    let content = read_list(path).await?;
    let total = content.lines().count();
    let unique: BTreeSet<String> = content.lines().map(str::to_lowercase).collect();

    let kept: Vec<&str> = unique.iter().map(String::as_str).collect();
    replace(path, &kept).await?;

    let report = FilterReport {
        kept: kept.len(),
        removed: total - kept.len(),
    };
    tracing::info!("Removed {} duplicate lines from {}", report.removed, path.display());
    Ok(report)
}

/// Keep lines of at most `max_length` characters
pub async fn cap_length(path: &Path, max_length: usize) -> Result<FilterReport> {
    let report = rewrite(path, |line| {
        (line.chars().count() <= max_length).then(|| line.to_string())
    })
    .await?;

    tracing::info!(
        "Removed {} lines longer than {} from {}",
        report.removed,
        max_length,
        path.display()
    );
    Ok(report)
}

/// Map every line through `f`; `None` drops the line.
async fn rewrite<F>(path: &Path, mut f: F) -> Result<FilterReport>
where
    F: FnMut(&str) -> Option<String>,
{
    let content = read_list(path).await?;
    let mut kept = Vec::new();
    let mut removed = 0;

    for line in content.lines() {
        match f(line) {
            Some(out) => kept.push(out),
            None => removed += 1,
        }
    }

    let lines: Vec<&str> = kept.iter().map(String::as_str).collect();
    replace(path, &lines).await?;

    Ok(FilterReport {
        kept: kept.len(),
        removed,
    })
}

async fn read_list(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read word list {}", path.display()))
}

/// Write `lines` to a temporary sibling file, then rename it over `path`
async fn replace(path: &Path, lines: &[&str]) -> Result<()> {
    let temp = temp_path(path);
    let mut body = lines.join("\n");
    if !lines.is_empty() {
        body.push('\n');
    }

    fs::write(&temp, body)
        .await
        .with_context(|| format!("failed to write {}", temp.display()))?;
    fs::rename(&temp, path)
        .await
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
