use std::collections::HashMap;
use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};

use kanjideck_core::styler::Styler;

use crate::kanji::{CharacterEntry, Kanji};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed kanjidic xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed kanjidic attribute: {0}")]
    Attr(#[from] AttrError),
}

/// Kanji metadata index built from a kanjidic2 XML file, keyed by literal.
pub struct KanjiCatalog {
    index: HashMap<char, Kanji>,
}

fn attribute(e: &BytesStart, name: &str) -> Result<Option<String>, CatalogError> {
    let value = e
        .try_get_attribute(name)?
        .map(|a| a.unescape_value().map(|v| v.into_owned()))
        .transpose()?;
    Ok(value)
}

impl KanjiCatalog {
    /// Builds the catalog from kanjidic2 XML text.
    ///
    /// Per character: the literal, grade, and first reported stroke count
    /// are taken verbatim; meanings and readings are filtered and
    /// partitioned by [`Kanji::from_character`]. Characters with no literal
    /// or stroke count are skipped.
    pub fn parse(xml: &str, styler: &Styler) -> Result<Self, CatalogError> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        reader.config_mut().trim_text(true);

        let mut index: HashMap<char, Kanji> = HashMap::new();
        let mut buf = Vec::new();

        let mut current: Option<CharacterEntry> = None;
        let mut current_element = String::new();
        let mut meaning_lang: Option<String> = None;
        let mut reading_type = String::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    current_element = String::from_utf8_lossy(e.name().as_ref()).to_string();

                    match current_element.as_str() {
                        "character" => current = Some(CharacterEntry::default()),
                        "meaning" => meaning_lang = attribute(e, "m_lang")?,
                        "reading" => {
                            reading_type = attribute(e, "r_type")?.unwrap_or_default();
                        }
                        _ => {}
                    }
                }
                Event::Text(e) => {
                    if let Some(entry) = current.as_mut() {
                        let text = e.unescape().unwrap_or_default().to_string();

                        match current_element.as_str() {
                            "literal" => entry.literal = text,
                            "grade" => entry.grade = text,
                            "stroke_count" => {
                                // Only the first reported count is kept.
                                if entry.stroke_count.is_none() {
                                    entry.stroke_count = text.trim().parse().ok();
                                }
                            }
                            "meaning" => entry.meanings.push((meaning_lang.take(), text)),
                            "reading" => entry.readings.push((reading_type.clone(), text)),
                            _ => {}
                        }
                    }
                }
                Event::End(ref e) => {
                    if e.name().as_ref() == b"character" {
                        if let Some(entry) = current.take() {
                            if let Some(kanji) = Kanji::from_character(entry, styler) {
                                index.entry(kanji.literal).or_insert(kanji);
                            }
                        }
                    }
                    current_element.clear();
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { index })
    }

    /// Loads the catalog from a kanjidic2 file.
    pub fn load_from_file(path: &Path, styler: &Styler) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("loading kanji catalog from {}", path.display());
        let xml = fs::read_to_string(path)?;
        let catalog = Self::parse(&xml, styler)?;
        tracing::info!("loaded {} kanji", catalog.len());
        Ok(catalog)
    }

    /// Returns records for the given characters in input order, cloning
    /// each from the catalog. Characters absent from the catalog are
    /// skipped with a warning.
    pub fn get(&self, literals: impl IntoIterator<Item = char>) -> Vec<Kanji> {
        let mut records = Vec::new();

        for literal in literals {
            match self.index.get(&literal) {
                Some(kanji) => records.push(kanji.clone()),
                None => tracing::warn!("kanji {literal} is not in the catalog, skipping"),
            }
        }

        records
    }

    pub fn contains(&self, literal: char) -> bool {
        self.index.contains_key(&literal)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
