use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::styler::Styler;

/// A word's reading and first English gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub reading: String,
    pub gloss: String,
}

/// EDICT word dictionary.
///
/// Each line is the word, a space, then the definition blob. When a word
/// appears on more than one line, the earliest line is canonical.
pub struct Edict {
    entries: HashMap<String, String>,
    styler: Styler,
}

impl Edict {
    /// Builds the dictionary from corpus text. Lines without a space are
    /// skipped.
    pub fn parse(corpus: &str, styler: Styler) -> Self {
        let mut entries: HashMap<String, String> = HashMap::new();

        for line in corpus.lines() {
            let Some((word, definition)) = line.split_once(' ') else {
                continue;
            };
            entries
                .entry(word.to_string())
                .or_insert_with(|| definition.to_string());
        }

        Self { entries, styler }
    }

    /// Loads the dictionary corpus from a file.
    pub fn load_from_file(path: &Path, styler: Styler) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("loading dictionary from {}", path.display());
        let corpus = fs::read_to_string(path)?;
        let edict = Self::parse(&corpus, styler);
        tracing::info!("loaded {} dictionary entries", edict.len());
        Ok(edict)
    }

    /// Looks up a word, returning its reading and first gloss. Returns
    /// `None` iff the word is not in the dictionary.
    ///
    /// The blob holds the reading in square brackets, then one or more
    /// slash-delimited glosses with leading parenthesized grammar notes.
    /// Only the first gloss is used; its grammar notes are stripped and the
    /// result is passed through the styler.
    pub fn define(&self, word: &str) -> Option<Definition> {
        let blob = self.entries.get(word)?;

        let reading = blob
            .split_once('[')
            .and_then(|(_, rest)| rest.split_once(']'))
            .map(|(reading, _)| reading.to_string())
            .unwrap_or_default();

        let mut gloss = blob.splitn(3, '/').nth(1).unwrap_or("").trim_start();
        while let Some(inner) = gloss.strip_prefix('(') {
            match inner.split_once(')') {
                Some((_, after)) => gloss = after.trim_start(),
                None => {
                    gloss = "";
                    break;
                }
            }
        }

        Some(Definition {
            reading,
            gloss: self.styler.fix(gloss),
        })
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edict(corpus: &str) -> Edict {
        Edict::parse(corpus, Styler::new())
    }

    #[test]
    fn defines_word_without_reading() {
        let dict = edict("学生 (n) /student/pupil/");
        let definition = dict.define("学生").unwrap();
        assert_eq!(definition.reading, "");
        assert_eq!(definition.gloss, "student");
    }

    #[test]
    fn extracts_bracketed_reading() {
        let dict = edict("学生 [がくせい] /(n) student/pupil/");
        let definition = dict.define("学生").unwrap();
        assert_eq!(definition.reading, "がくせい");
        assert_eq!(definition.gloss, "student");
    }

    #[test]
    fn strips_stacked_grammar_notes() {
        let dict = edict("行く [いく] /(v5k-s) (vi) to go/to move/");
        assert_eq!(dict.define("行く").unwrap().gloss, "to go");
    }

    #[test]
    fn unknown_word_is_none() {
        let dict = edict("学生 (n) /student/");
        assert!(dict.define("先生").is_none());
    }

    #[test]
    fn first_occurrence_wins() {
        let dict = edict("学生 (n) /student/\n学生 (n) /scholar/");
        assert_eq!(dict.define("学生").unwrap().gloss, "student");
    }

    #[test]
    fn glosses_are_styled() {
        let dict = edict("色 [いろ] /(n) colour/");
        assert_eq!(dict.define("色").unwrap().gloss, "color");
    }

    #[test]
    fn lines_without_space_are_skipped() {
        let dict = edict("noseparator\n学生 (n) /student/");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn unterminated_note_discards_gloss() {
        let dict = edict("変 [へん] /(n unterminated/strange/");
        assert_eq!(dict.define("変").unwrap().gloss, "");
    }
}
