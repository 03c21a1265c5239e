use unicode_normalization::UnicodeNormalization;

use kanjideck_core::examples::ExampleResolver;
use kanjideck_kanjidic::{Kanji, KanjiCatalog};

/// Strips encoding noise from raw target input: NFKC-normalize, then drop
/// ASCII, whitespace, and control characters.
///
/// This is a best-effort filter, not a CJK range check; non-ASCII
/// non-kanji survives and is caught later by the catalog lookup.
pub fn sanitize(raw: &str) -> String {
    raw.nfkc()
        .filter(|c| !c.is_ascii() && !c.is_whitespace() && !c.is_control())
        .collect()
}

/// Resolves raw target input into kanji records with examples attached.
pub struct TargetSetBuilder<'a> {
    catalog: &'a KanjiCatalog,
    resolver: &'a ExampleResolver<'a>,
}

impl<'a> TargetSetBuilder<'a> {
    pub fn new(catalog: &'a KanjiCatalog, resolver: &'a ExampleResolver<'a>) -> Self {
        Self { catalog, resolver }
    }

    /// Sanitizes the input and resolves each surviving character in order.
    /// Duplicate characters are resolved independently, and characters the
    /// catalog does not know are skipped.
    pub fn build(&self, raw: &str) -> Vec<Kanji> {
        let targets = sanitize(raw);
        tracing::debug!("resolving {} target characters", targets.chars().count());

        let mut records = self.catalog.get(targets.chars());
        for kanji in &mut records {
            kanji.examples = self.resolver.resolve(kanji.literal);
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanjideck_core::edict::Edict;
    use kanjideck_core::styler::Styler;
    use kanjideck_core::wordfreq::WordFrequency;

    #[test]
    fn sanitize_strips_ascii_noise() {
        assert_eq!(sanitize("漢字<script>abc 123!"), "漢字");
    }

    #[test]
    fn sanitize_keeps_duplicates_and_order() {
        assert_eq!(sanitize("字漢 字"), "字漢字");
    }

    #[test]
    fn sanitize_strips_control_characters() {
        assert_eq!(sanitize("漢\u{0}\u{200b}字\r\n"), "漢\u{200b}字");
    }

    const KANJIDIC_SNIPPET: &str = r#"<kanjidic2>
<character>
<literal>学</literal>
<misc><grade>1</grade><stroke_count>8</stroke_count></misc>
<reading_meaning><rmgroup>
<reading r_type="ja_on">ガク</reading>
<meaning>study</meaning>
</rmgroup></reading_meaning>
</character>
</kanjidic2>"#;

    #[test]
    fn build_attaches_examples() {
        let styler = Styler::new();
        let catalog = KanjiCatalog::parse(KANJIDIC_SNIPPET, &styler).unwrap();
        let wordfreq = WordFrequency::parse("5\t学生|がくせい");
        let edict = Edict::parse("学生 [がくせい] /(n) student/", styler.clone());
        let resolver = ExampleResolver::new(&wordfreq, &edict);

        let builder = TargetSetBuilder::new(&catalog, &resolver);
        let records = builder.build("学x学\n");

        assert_eq!(records.len(), 2);
        for kanji in &records {
            assert_eq!(kanji.examples.len(), 1);
            assert_eq!(kanji.examples[0].word, "学生");
            assert_eq!(kanji.examples[0].rank, 5);
        }
    }
}
