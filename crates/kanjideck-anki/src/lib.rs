mod card;
mod deck;

pub use card::{Card, CardRenderer, MAX_MEANING_SIZE, MAX_READING_SIZE};
pub use deck::{FIELD_SEPARATOR, write_deck};
