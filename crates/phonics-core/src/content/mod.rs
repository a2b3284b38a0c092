pub mod catalog;
pub mod hints;
pub mod language;

pub use catalog::{canonical, Catalog, CatalogError, Dataset, RhymeGroup, DEFAULT_LANGUAGE};
pub use language::{ItemLength, Language, UnknownLanguage};
