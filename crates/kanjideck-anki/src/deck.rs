use std::fs;
use std::io;
use std::path::Path;

use crate::card::Card;

/// Separates the front and back fields on an import line.
pub const FIELD_SEPARATOR: char = '\t';

/// Writes a deck file Anki can import: one card per line, front and back
/// separated by [`FIELD_SEPARATOR`]. The file is written fresh each run.
///
/// Card text must not carry the separator into the output, so any interior
/// tab is rewritten to a space.
pub fn write_deck(path: &Path, cards: &[Card]) -> io::Result<()> {
    let mut deck = String::new();

    for card in cards {
        deck.push_str(&card.front.replace(FIELD_SEPARATOR, " "));
        deck.push(FIELD_SEPARATOR);
        deck.push_str(&card.back.replace(FIELD_SEPARATOR, " "));
        deck.push('\n');
    }

    fs::write(path, deck)
}
