use crate::edict::Edict;
use crate::wordfreq::WordFrequency;

/// The maximum number of examples to keep per kanji.
pub const MAX_EXAMPLE_COUNT: usize = 3;
/// The maximum combined character width of an example's word, reading, and
/// gloss.
pub const MAX_EXAMPLE_SIZE: usize = 50;

/// An example word containing a target kanji, with its reading, English
/// gloss, and corpus frequency rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub word: String,
    pub reading: String,
    pub gloss: String,
    pub rank: u32,
}

/// Picks example words for a kanji from the frequency index, keeping only
/// words the dictionary can define.
///
/// Candidates are taken in frequency order in a single pass: undefined words
/// and words whose rendered width exceeds the size bound are skipped without
/// consuming a slot, and selection stops at the count bound.
pub struct ExampleResolver<'a> {
    wordfreq: &'a WordFrequency,
    edict: &'a Edict,
    max_count: usize,
    max_size: usize,
}

impl<'a> ExampleResolver<'a> {
    pub fn new(wordfreq: &'a WordFrequency, edict: &'a Edict) -> Self {
        Self {
            wordfreq,
            edict,
            max_count: MAX_EXAMPLE_COUNT,
            max_size: MAX_EXAMPLE_SIZE,
        }
    }

    /// Overrides the default count and size bounds.
    pub fn with_limits(mut self, max_count: usize, max_size: usize) -> Self {
        self.max_count = max_count;
        self.max_size = max_size;
        self
    }

    /// Resolves up to `max_count` examples for the kanji, most common first.
    pub fn resolve(&self, literal: char) -> Vec<Example> {
        let mut examples = Vec::new();

        if !self.wordfreq.contains(literal) {
            tracing::debug!("no example words for {literal}");
            return examples;
        }

        for entry in self.wordfreq.lookup(literal) {
            let Some(definition) = self.edict.define(&entry.word) else {
                continue;
            };

            let width = entry.word.chars().count()
                + definition.reading.chars().count()
                + definition.gloss.chars().count();
            if width > self.max_size {
                continue;
            }

            examples.push(Example {
                word: entry.word.clone(),
                reading: definition.reading,
                gloss: definition.gloss,
                rank: entry.rank,
            });

            if examples.len() == self.max_count {
                break;
            }
        }

        examples
    }
}
