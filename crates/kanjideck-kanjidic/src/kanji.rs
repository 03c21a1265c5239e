use kanjideck_core::examples::Example;
use kanjideck_core::styler::Styler;

/// School grade at which a kanji is taught. Kanji outside the graded sets
/// carry an explicit `Ungraded` marker rather than a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Level(u8),
    Ungraded,
}

impl Grade {
    /// Parses the kanjidic grade text. Blank or non-numeric means ungraded.
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<u8>() {
            Ok(level) if level > 0 => Grade::Level(level),
            _ => Grade::Ungraded,
        }
    }
}

/// A kanji character and all details relevant to its study card.
#[derive(Debug, Clone)]
pub struct Kanji {
    pub literal: char,
    pub grade: Grade,
    pub stroke_count: u32,
    /// Meanings in source order; the first is the primary gloss.
    pub meanings: Vec<String>,
    pub onyomi: Vec<String>,
    pub kunyomi: Vec<String>,
    /// Example words, attached after resolution.
    pub examples: Vec<Example>,
}

/// Raw fields of one kanjidic `character` element, before filtering.
#[derive(Debug, Default)]
pub(crate) struct CharacterEntry {
    pub literal: String,
    pub grade: String,
    pub stroke_count: Option<u32>,
    /// Meaning text with its optional `m_lang` attribute.
    pub meanings: Vec<(Option<String>, String)>,
    /// Reading text with its `r_type` attribute.
    pub readings: Vec<(String, String)>,
}

impl Kanji {
    /// A placeholder record with no character data.
    pub fn blank() -> Self {
        Self {
            literal: ' ',
            grade: Grade::Ungraded,
            stroke_count: 0,
            meanings: Vec::new(),
            onyomi: Vec::new(),
            kunyomi: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Builds a record from a parsed `character` element.
    ///
    /// Meanings tagged with a non-default language are dropped and the rest
    /// are styled. Readings keep their source order within the on and kun
    /// buckets. Returns `None` for entries missing a literal or stroke
    /// count.
    pub(crate) fn from_character(entry: CharacterEntry, styler: &Styler) -> Option<Self> {
        let literal = entry.literal.chars().next()?;
        let stroke_count = entry.stroke_count?;

        let meanings = entry
            .meanings
            .iter()
            .filter(|(lang, _)| lang.is_none())
            .map(|(_, meaning)| styler.fix(meaning))
            .collect();

        let mut onyomi = Vec::new();
        let mut kunyomi = Vec::new();
        for (r_type, reading) in entry.readings {
            match r_type.as_str() {
                "ja_on" => onyomi.push(reading),
                "ja_kun" => kunyomi.push(reading),
                _ => {}
            }
        }

        Some(Self {
            literal,
            grade: Grade::parse(&entry.grade),
            stroke_count,
            meanings,
            onyomi,
            kunyomi,
            examples: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_parses_blank_as_ungraded() {
        assert_eq!(Grade::parse(""), Grade::Ungraded);
        assert_eq!(Grade::parse("  "), Grade::Ungraded);
        assert_eq!(Grade::parse("8"), Grade::Level(8));
    }

    #[test]
    fn blank_kanji_is_empty() {
        let kanji = Kanji::blank();
        assert_eq!(kanji.literal, ' ');
        assert_eq!(kanji.grade, Grade::Ungraded);
        assert!(kanji.meanings.is_empty());
        assert!(kanji.examples.is_empty());
    }

    #[test]
    fn foreign_language_meanings_are_dropped() {
        let entry = CharacterEntry {
            literal: "学".to_string(),
            grade: "1".to_string(),
            stroke_count: Some(8),
            meanings: vec![
                (None, "study".to_string()),
                (Some("fr".to_string()), "étude".to_string()),
                (None, "learning".to_string()),
            ],
            readings: vec![
                ("ja_on".to_string(), "ガク".to_string()),
                ("ja_kun".to_string(), "まな.ぶ".to_string()),
                ("pinyin".to_string(), "xue2".to_string()),
            ],
        };

        let kanji = Kanji::from_character(entry, &Styler::new()).unwrap();
        assert_eq!(kanji.meanings, vec!["study", "learning"]);
        assert_eq!(kanji.onyomi, vec!["ガク"]);
        assert_eq!(kanji.kunyomi, vec!["まな.ぶ"]);
    }

    #[test]
    fn entry_without_stroke_count_is_rejected() {
        let entry = CharacterEntry {
            literal: "学".to_string(),
            ..CharacterEntry::default()
        };
        assert!(Kanji::from_character(entry, &Styler::new()).is_none());
    }
}
