mod catalog;
mod kanji;

pub use catalog::{CatalogError, KanjiCatalog};
pub use kanji::{Grade, Kanji};
