use serde::{Deserialize, Serialize};

use kanjideck_kanjidic::{Grade, Kanji};

/// Max character width for the onyomi and kunyomi lines.
pub const MAX_READING_SIZE: usize = 55;
/// Max character width for the secondary meanings line.
pub const MAX_MEANING_SIZE: usize = 50;

const ELLIPSIS: char = '…';
/// Full-width space separating readings on a line.
const READING_SEPARATOR: &str = "\u{3000}";
const LINE_BREAK: &str = "<br>";

/// One rendered flashcard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

/// Formats kanji records into card text.
///
/// The front carries the literal, stroke count, and grade label. The back
/// carries the primary meaning upper-cased, the remaining meanings, the
/// readings, and one line per example word.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    max_meaning_size: usize,
    max_reading_size: usize,
}

/// The sequence minus its lead element, or empty if not possible.
fn rest<T>(items: &[T]) -> &[T] {
    items.get(1..).unwrap_or(&[])
}

/// Joins items with the separator until adding the next item would push the
/// character count past the bound, then appends an ellipsis and stops. A
/// partially written item never appears.
fn join_bounded(items: &[String], separator: &str, max_size: usize) -> String {
    let mut joined = String::new();
    let mut width = 0;

    for item in items {
        let item_width = item.chars().count();
        if width + item_width > max_size {
            joined.push(ELLIPSIS);
            return joined;
        }
        joined.push_str(item);
        joined.push_str(separator);
        width += item_width + separator.chars().count();
    }

    if joined.ends_with(separator) {
        joined.truncate(joined.len() - separator.len());
    }
    joined
}

fn grade_label(grade: Grade) -> Option<String> {
    match grade {
        Grade::Level(level) if level <= 6 => Some(format!("小{level}")),
        Grade::Level(level) => Some(format!("G{level}")),
        Grade::Ungraded => None,
    }
}

impl CardRenderer {
    pub fn new() -> Self {
        Self {
            max_meaning_size: MAX_MEANING_SIZE,
            max_reading_size: MAX_READING_SIZE,
        }
    }

    /// Overrides the default meaning and reading width bounds.
    pub fn with_limits(mut self, max_meaning_size: usize, max_reading_size: usize) -> Self {
        self.max_meaning_size = max_meaning_size;
        self.max_reading_size = max_reading_size;
        self
    }

    pub fn render(&self, kanji: &Kanji) -> Card {
        let mut front = vec![
            kanji.literal.to_string(),
            format!("{} strokes", kanji.stroke_count),
        ];
        if let Some(label) = grade_label(kanji.grade) {
            front.push(label);
        }

        let mut back = vec![
            kanji
                .meanings
                .first()
                .map(|meaning| meaning.to_uppercase())
                .unwrap_or_default(),
            join_bounded(rest(&kanji.meanings), " - ", self.max_meaning_size),
            join_bounded(&kanji.onyomi, READING_SEPARATOR, self.max_reading_size),
            join_bounded(&kanji.kunyomi, READING_SEPARATOR, self.max_reading_size),
        ];
        for example in &kanji.examples {
            back.push(format!(
                "{} ({}) - {}",
                example.word, example.reading, example.gloss
            ));
        }

        Card {
            front: front.join(LINE_BREAK),
            back: back.join(LINE_BREAK),
        }
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanjideck_core::examples::Example;

    fn study_kanji() -> Kanji {
        let mut kanji = Kanji::blank();
        kanji.literal = '学';
        kanji.grade = Grade::Level(1);
        kanji.stroke_count = 8;
        kanji.meanings = vec![
            "study".to_string(),
            "learning".to_string(),
            "science".to_string(),
        ];
        kanji.onyomi = vec!["ガク".to_string()];
        kanji.kunyomi = vec!["まな.ぶ".to_string()];
        kanji.examples = vec![Example {
            word: "学生".to_string(),
            reading: "がくせい".to_string(),
            gloss: "student".to_string(),
            rank: 5,
        }];
        kanji
    }

    #[test]
    fn renders_front_fields() {
        let card = CardRenderer::new().render(&study_kanji());
        assert_eq!(card.front, "学<br>8 strokes<br>小1");
    }

    #[test]
    fn renders_back_fields() {
        let card = CardRenderer::new().render(&study_kanji());
        assert_eq!(
            card.back,
            "STUDY<br>learning - science<br>ガク<br>まな.ぶ<br>学生 (がくせい) - student"
        );
    }

    #[test]
    fn secondary_grade_gets_g_label() {
        let mut kanji = study_kanji();
        kanji.grade = Grade::Level(8);
        let card = CardRenderer::new().render(&kanji);
        assert!(card.front.ends_with("G8"));
    }

    #[test]
    fn ungraded_kanji_has_no_grade_label() {
        let mut kanji = study_kanji();
        kanji.grade = Grade::Ungraded;
        let card = CardRenderer::new().render(&kanji);
        assert_eq!(card.front, "学<br>8 strokes");
    }

    #[test]
    fn truncation_never_splits_a_word() {
        let meanings = vec!["alpha".to_string(), "beta".to_string()];
        let joined = join_bounded(&meanings, ", ", 10);
        assert_eq!(joined, "alpha, …");
        assert!(!joined.contains("bet"));
    }

    #[test]
    fn join_without_overflow_trims_separator() {
        let readings = vec!["ガク".to_string(), "リン".to_string()];
        assert_eq!(
            join_bounded(&readings, READING_SEPARATOR, MAX_READING_SIZE),
            "ガク\u{3000}リン"
        );
    }

    #[test]
    fn rest_drops_the_lead_element() {
        let items = vec![1, 2, 3];
        assert_eq!(rest(&items), &[2, 3]);
        assert_eq!(rest(&items[..1]), &[] as &[i32]);
        assert_eq!(rest::<i32>(&[]), &[] as &[i32]);
    }
}
