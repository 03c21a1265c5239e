use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// The maximum character count for an example word.
pub const MAX_EXAMPLE_WORD_WIDTH: usize = 3;

/// A word and its corpus frequency rank. Lower rank means more common.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub rank: u32,
}

/// Word frequency list indexed by character.
///
/// Each bucket holds the words containing that character, in corpus order.
/// The corpus is rank-sorted, so buckets are sorted most to least common
/// without any explicit sort here. Words shorter than two characters or
/// wider than [`MAX_EXAMPLE_WORD_WIDTH`] are excluded.
pub struct WordFrequency {
    buckets: HashMap<char, Vec<FrequencyEntry>>,
}

impl WordFrequency {
    /// Builds the index from corpus text.
    ///
    /// Lines are `rank<TAB>...<TAB>word|reading`. Comment lines and lines
    /// missing a tab or a numeric rank are skipped.
    pub fn parse(corpus: &str) -> Self {
        let mut buckets: HashMap<char, Vec<FrequencyEntry>> = HashMap::new();

        for line in corpus.lines() {
            if line.starts_with('#') {
                continue;
            }
            let Some((rank_field, rest)) = line.split_once('\t') else {
                continue;
            };
            let Ok(rank) = rank_field.trim().parse::<u32>() else {
                continue;
            };
            let Some(compound) = rest.split('\t').next_back() else {
                continue;
            };
            let word = compound.split('|').next().unwrap_or("").trim();

            let width = word.chars().count();
            if width < 2 || width > MAX_EXAMPLE_WORD_WIDTH {
                continue;
            }

            let mut seen: Vec<char> = Vec::with_capacity(width);
            for c in word.chars() {
                if seen.contains(&c) {
                    continue;
                }
                seen.push(c);
                buckets.entry(c).or_default().push(FrequencyEntry {
                    word: word.to_string(),
                    rank,
                });
            }
        }

        Self { buckets }
    }

    /// Loads the frequency corpus from a file.
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("loading word frequency list from {}", path.display());
        let corpus = fs::read_to_string(path)?;
        let index = Self::parse(&corpus);
        tracing::info!("indexed words for {} characters", index.len());
        Ok(index)
    }

    /// Words containing the character, most common first. Empty if the
    /// character appears in no indexed word.
    pub fn lookup(&self, literal: char) -> &[FrequencyEntry] {
        self.buckets.get(&literal).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if at least one indexed word contains the character.
    pub fn contains(&self, literal: char) -> bool {
        self.buckets.contains_key(&literal)
    }

    /// Number of characters with at least one indexed word.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
