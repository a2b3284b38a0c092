use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Deserialize;

use super::language::{ItemLength, Language};

/// Per-language catalog data shipped with the app.
const BUILTIN_SOURCES: [(Language, &str); 5] = [
    (Language::English, include_str!("../../data/en.json")),
    (Language::Arabic, include_str!("../../data/ar.json")),
    (Language::Farsi, include_str!("../../data/fa.json")),
    (Language::Japanese, include_str!("../../data/ja.json")),
    (Language::Korean, include_str!("../../data/ko.json")),
];

/// Language whose data backs any pair that has none of its own.
pub const DEFAULT_LANGUAGE: Language = Language::English;

/// Normalise an entry to the casing the catalog stores.
pub fn canonical(entry: &str) -> String {
    entry.to_uppercase()
}

// -- Raw JSON shapes --

#[derive(Debug, Deserialize)]
struct RawLanguage {
    letters: RawLetters,
    #[serde(default)]
    words: HashMap<String, Vec<String>>,
    #[serde(default)]
    rhymes: HashMap<String, Vec<RawRhymeGroup>>,
    #[serde(default)]
    transliteration: Option<HashMap<String, String>>,
}

/// Letters may be given as a list or as one string split per character.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLetters {
    List(Vec<String>),
    Text(String),
}

impl RawLetters {
    fn into_entries(self) -> Vec<String> {
        match self {
            RawLetters::List(list) => list,
            RawLetters::Text(text) => text
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRhymeGroup {
    key: String,
    words: Vec<String>,
}

// -- Public model --

/// A named set of entries sharing a phonetic ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeGroup {
    pub key: String,
    pub words: Vec<String>,
}

impl RhymeGroup {
    pub fn new(key: impl Into<String>, words: &[&str]) -> Self {
        Self {
            key: key.into(),
            words: words.iter().map(|w| canonical(w)).collect(),
        }
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.words.iter().position(|w| w == entry)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.position(entry).is_some()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The ordered entries and rhyme groups for one `(language, item length)` pair.
#[derive(Debug, Clone)]
pub struct Dataset {
    entries: Vec<String>,
    groups: Vec<RhymeGroup>,
}

impl Dataset {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn groups(&self) -> &[RhymeGroup] {
        &self.groups
    }

    /// Index of an entry by exact value.
    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Data problems found while loading a catalog.
#[derive(Debug)]
pub enum CatalogError {
    Json {
        language: Language,
        source: serde_json::Error,
    },
    NoLetters(Language),
    NoDefaultLanguage,
    BadLengthKey {
        language: Language,
        key: String,
    },
    EmptySequence {
        language: Language,
        length: ItemLength,
    },
    DuplicateEntry {
        language: Language,
        length: ItemLength,
        entry: String,
    },
    EmptyGroup {
        language: Language,
        length: ItemLength,
        key: String,
    },
    DanglingMember {
        language: Language,
        length: ItemLength,
        key: String,
        entry: String,
    },
    OverlappingGroups {
        language: Language,
        length: ItemLength,
        entry: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Json { language, source } => {
                write!(f, "{language}: malformed catalog json: {source}")
            }
            CatalogError::NoLetters(language) => write!(f, "{language}: no letters"),
            CatalogError::NoDefaultLanguage => {
                write!(f, "catalog has no data for default language {DEFAULT_LANGUAGE}")
            }
            CatalogError::BadLengthKey { language, key } => {
                write!(f, "{language}: unsupported item length key {key:?}")
            }
            CatalogError::EmptySequence { language, length } => {
                write!(f, "{language}/{length}: empty sequence")
            }
            CatalogError::DuplicateEntry { language, length, entry } => {
                write!(f, "{language}/{length}: duplicate entry {entry:?}")
            }
            CatalogError::EmptyGroup { language, length, key } => {
                write!(f, "{language}/{length}: rhyme group {key:?} is empty")
            }
            CatalogError::DanglingMember { language, length, key, entry } => write!(
                f,
                "{language}/{length}: rhyme group {key:?} member {entry:?} is not in the sequence"
            ),
            CatalogError::OverlappingGroups { language, length, entry, first, second } => write!(
                f,
                "{language}/{length}: {entry:?} is in rhyme groups {first:?} and {second:?}"
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Language- and length-keyed table of displayable entries.
/// Loaded once at startup; every lookup afterwards is a pure read.
#[derive(Debug, Clone)]
pub struct Catalog {
    datasets: HashMap<(Language, ItemLength), Dataset>,
    transliterations: HashMap<Language, HashMap<String, String>>,
    /// Default-language letters, returned when nothing else resolves.
    fallback: Dataset,
}

impl Catalog {
    /// Load the data embedded in the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_sources(&BUILTIN_SOURCES)
    }

    /// Load the builtin data, or the hardcoded A-Z deck if it fails validation.
    pub fn builtin_or_fallback() -> Self {
        match Self::builtin() {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("builtin catalog rejected: {e}");
                debug_assert!(false, "builtin catalog rejected: {e}");
                Self::fallback()
            }
        }
    }

    /// A guaranteed non-empty English letters catalog.
    pub fn fallback() -> Self {
        let letters = Dataset {
            entries: ('A'..='Z').map(|c| c.to_string()).collect(),
            groups: Vec::new(),
        };
        let mut datasets = HashMap::new();
        datasets.insert((DEFAULT_LANGUAGE, ItemLength::LETTERS), letters.clone());
        Self {
            datasets,
            transliterations: HashMap::new(),
            fallback: letters,
        }
    }

    /// Parse and validate catalog JSON, one document per language.
    ///
    /// A broken default-language deck is an error. Any other broken deck
    /// is logged and left out, so that language resolves to the default.
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, CatalogError> {
        let mut datasets = HashMap::new();
        let mut transliterations = HashMap::new();

        for &(language, json) in sources {
            let mut deck = HashMap::new();
            let mut deck_translit = HashMap::new();
            let loaded = serde_json::from_str::<RawLanguage>(json)
                .map_err(|source| CatalogError::Json { language, source })
                .and_then(|raw| load_language(language, raw, &mut deck, &mut deck_translit));
            match loaded {
                Ok(()) => {
                    datasets.extend(deck);
                    transliterations.extend(deck_translit);
                }
                Err(e) if language == DEFAULT_LANGUAGE => return Err(e),
                Err(e) => log::error!("skipping {language} deck: {e}"),
            }
        }

        let fallback = datasets
            .get(&(DEFAULT_LANGUAGE, ItemLength::LETTERS))
            .cloned()
            .ok_or(CatalogError::NoDefaultLanguage)?;

        log::debug!("catalog loaded: {} datasets", datasets.len());
        Ok(Self {
            datasets,
            transliterations,
            fallback,
        })
    }

    /// The pair that actually backs a request.
    /// Missing lengths fall back to the language's letters; languages
    /// without data fall back to the default language.
    pub fn resolve(&self, language: Language, length: ItemLength) -> (Language, ItemLength) {
        let language = if self.has_language(language) {
            language
        } else {
            DEFAULT_LANGUAGE
        };
        if self.datasets.contains_key(&(language, length)) {
            (language, length)
        } else {
            (language, ItemLength::LETTERS)
        }
    }

    pub fn dataset(&self, language: Language, length: ItemLength) -> &Dataset {
        let key = self.resolve(language, length);
        self.datasets.get(&key).unwrap_or(&self.fallback)
    }

    /// Ordered entries for the pair (after fallback). Never empty.
    pub fn sequence(&self, language: Language, length: ItemLength) -> &[String] {
        self.dataset(language, length).entries()
    }

    /// Rhyme groups for the pair. Often empty.
    pub fn rhyme_groups(&self, language: Language, length: ItemLength) -> &[RhymeGroup] {
        self.dataset(language, length).groups()
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.datasets.contains_key(&(language, ItemLength::LETTERS))
    }

    /// Whether the pair has its own word data rather than the letters fallback.
    pub fn has_words(&self, language: Language, length: ItemLength) -> bool {
        !length.is_letters() && self.datasets.contains_key(&(language, length))
    }

    /// Romanised reading of an entry. `None` when the language has no map.
    pub fn transliteration(&self, language: Language, entry: &str) -> Option<String> {
        let map = self.transliterations.get(&language)?;
        if entry.is_empty() {
            return None;
        }
        let lookup = |s: String| map.get(&s).cloned().unwrap_or(s);
        if entry.chars().count() == 1 {
            Some(lookup(entry.to_string()))
        } else {
            let parts: Vec<String> = entry.chars().map(|c| lookup(c.to_string())).collect();
            Some(parts.join("-"))
        }
    }
}

fn load_language(
    language: Language,
    raw: RawLanguage,
    datasets: &mut HashMap<(Language, ItemLength), Dataset>,
    transliterations: &mut HashMap<Language, HashMap<String, String>>,
) -> Result<(), CatalogError> {
    let letters: Vec<String> = raw.letters.into_entries().iter().map(|e| canonical(e)).collect();
    if letters.is_empty() {
        return Err(CatalogError::NoLetters(language));
    }
    let letters = build_dataset(language, ItemLength::LETTERS, letters, Vec::new())?;
    datasets.insert((language, ItemLength::LETTERS), letters);

    let mut words: HashMap<ItemLength, Vec<String>> = HashMap::new();
    for (key, list) in raw.words {
        let length = parse_length_key(language, &key)?;
        words.insert(length, list.iter().map(|w| canonical(w)).collect());
    }

    let mut rhymes: HashMap<ItemLength, Vec<RhymeGroup>> = HashMap::new();
    for (key, groups) in raw.rhymes {
        let length = parse_length_key(language, &key)?;
        let groups = groups
            .into_iter()
            .map(|g| RhymeGroup {
                key: g.key,
                words: g.words.iter().map(|w| canonical(w)).collect(),
            })
            .collect();
        rhymes.insert(length, groups);
    }

    let mut mixed_entries = Vec::new();
    let mut mixed_groups = Vec::new();
    for length in ItemLength::word_lengths() {
        let groups = rhymes.remove(&length).unwrap_or_default();
        // Rhymes without a word list define the sequence themselves.
        let entries = match words.remove(&length) {
            Some(entries) => entries,
            None if !groups.is_empty() => groups.iter().flat_map(|g| g.words.clone()).collect(),
            None => continue,
        };
        let dataset = build_dataset(language, length, entries, groups)?;
        mixed_entries.extend(dataset.entries.iter().cloned());
        mixed_groups.extend(dataset.groups.iter().cloned());
        datasets.insert((language, length), dataset);
    }

    if !mixed_entries.is_empty() {
        let mixed = build_dataset(language, ItemLength::MIXED, mixed_entries, mixed_groups)?;
        datasets.insert((language, ItemLength::MIXED), mixed);
    }

    if let Some(map) = raw.transliteration {
        transliterations.insert(language, map);
    }
    Ok(())
}

fn parse_length_key(language: Language, key: &str) -> Result<ItemLength, CatalogError> {
    key.trim()
        .parse::<u32>()
        .ok()
        .and_then(ItemLength::try_new)
        .filter(|l| !l.is_letters() && !l.is_mixed())
        .ok_or_else(|| CatalogError::BadLengthKey {
            language,
            key: key.to_string(),
        })
}

/// Check a sequence and its groups: non-empty, unique entries, every
/// group member present, and no entry in two groups.
fn build_dataset(
    language: Language,
    length: ItemLength,
    entries: Vec<String>,
    groups: Vec<RhymeGroup>,
) -> Result<Dataset, CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::EmptySequence { language, length });
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in &entries {
        if !seen.insert(entry.as_str()) {
            return Err(CatalogError::DuplicateEntry {
                language,
                length,
                entry: entry.clone(),
            });
        }
    }

    let mut owner: HashMap<&str, &str> = HashMap::new();
    for group in &groups {
        if group.is_empty() {
            return Err(CatalogError::EmptyGroup {
                language,
                length,
                key: group.key.clone(),
            });
        }
        for word in &group.words {
            if !seen.contains(word.as_str()) {
                return Err(CatalogError::DanglingMember {
                    language,
                    length,
                    key: group.key.clone(),
                    entry: word.clone(),
                });
            }
            if let Some(first) = owner.insert(word.as_str(), group.key.as_str()) {
                return Err(CatalogError::OverlappingGroups {
                    language,
                    length,
                    entry: word.clone(),
                    first: first.to_string(),
                    second: group.key.clone(),
                });
            }
        }
    }

    Ok(Dataset { entries, groups })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "letters": "abc",
        "words": { "3": ["cat", "bat", "dog"] },
        "rhymes": { "3": [ { "key": "at", "words": ["cat", "bat"] } ] }
    }"#;

    fn small() -> Catalog {
        Catalog::from_sources(&[(Language::English, SMALL)]).unwrap()
    }

    #[test]
    fn builtin_data_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        for lang in Language::ALL {
            assert!(catalog.has_language(lang), "{lang} missing letters");
        }
        assert_eq!(catalog.sequence(Language::English, ItemLength::LETTERS).len(), 26);
        assert!(!catalog.rhyme_groups(Language::English, ItemLength::new(3)).is_empty());
    }

    #[test]
    fn letters_string_is_split_and_uppercased() {
        let catalog = small();
        assert_eq!(catalog.sequence(Language::English, ItemLength::LETTERS), ["A", "B", "C"]);
        assert_eq!(
            catalog.sequence(Language::English, ItemLength::new(3)),
            ["CAT", "BAT", "DOG"]
        );
    }

    #[test]
    fn missing_length_falls_back_to_letters() {
        let catalog = small();
        assert_eq!(
            catalog.resolve(Language::English, ItemLength::new(4)),
            (Language::English, ItemLength::LETTERS)
        );
        assert_eq!(catalog.sequence(Language::English, ItemLength::new(4)).len(), 3);
        assert!(!catalog.has_words(Language::English, ItemLength::new(4)));
        assert!(catalog.has_words(Language::English, ItemLength::new(3)));
    }

    #[test]
    fn missing_language_falls_back_to_default() {
        let catalog = small();
        assert_eq!(
            catalog.resolve(Language::Korean, ItemLength::new(3)),
            (Language::English, ItemLength::new(3))
        );
    }

    #[test]
    fn mixed_mode_concatenates_word_lengths() {
        let json = r#"{
            "letters": "ab",
            "words": { "2": ["at", "in"], "3": ["cat", "bat"] },
            "rhymes": { "3": [ { "key": "at", "words": ["cat", "bat"] } ] }
        }"#;
        let catalog = Catalog::from_sources(&[(Language::English, json)]).unwrap();
        assert_eq!(
            catalog.sequence(Language::English, ItemLength::MIXED),
            ["AT", "IN", "CAT", "BAT"]
        );
        assert_eq!(catalog.rhyme_groups(Language::English, ItemLength::MIXED).len(), 1);
    }

    #[test]
    fn rhymes_without_words_define_sequence() {
        let json = r#"{
            "letters": "ab",
            "rhymes": { "2": [ { "key": "e", "words": ["be", "he"] }, { "key": "o", "words": ["go", "no"] } ] }
        }"#;
        let catalog = Catalog::from_sources(&[(Language::English, json)]).unwrap();
        assert_eq!(
            catalog.sequence(Language::English, ItemLength::new(2)),
            ["BE", "HE", "GO", "NO"]
        );
    }

    #[test]
    fn rejects_overlapping_groups() {
        let json = r#"{
            "letters": "ab",
            "words": { "3": ["cat", "bat"] },
            "rhymes": { "3": [ { "key": "at", "words": ["cat", "bat"] }, { "key": "xx", "words": ["bat"] } ] }
        }"#;
        let err = Catalog::from_sources(&[(Language::English, json)]).unwrap_err();
        assert!(matches!(err, CatalogError::OverlappingGroups { ref entry, .. } if entry == "BAT"));
    }

    #[test]
    fn rejects_dangling_member() {
        let json = r#"{
            "letters": "ab",
            "words": { "3": ["cat"] },
            "rhymes": { "3": [ { "key": "at", "words": ["cat", "hat"] } ] }
        }"#;
        let err = Catalog::from_sources(&[(Language::English, json)]).unwrap_err();
        assert!(matches!(err, CatalogError::DanglingMember { ref entry, .. } if entry == "HAT"));
    }

    #[test]
    fn rejects_empty_group() {
        let json = r#"{
            "letters": "ab",
            "words": { "3": ["cat"] },
            "rhymes": { "3": [ { "key": "at", "words": [] } ] }
        }"#;
        let err = Catalog::from_sources(&[(Language::English, json)]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyGroup { ref key, .. } if key == "at"));
    }

    #[test]
    fn rejects_empty_word_list() {
        let json = r#"{ "letters": "ab", "words": { "3": [] } }"#;
        let err = Catalog::from_sources(&[(Language::English, json)]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptySequence { language: Language::English, length } if length == ItemLength::new(3)
        ));
    }

    #[test]
    fn broken_secondary_deck_is_skipped() {
        let broken = r#"{ "letters": "ab", "words": { "3": ["cat", "cat"] } }"#;
        let catalog = Catalog::from_sources(&[
            (Language::English, SMALL),
            (Language::Korean, broken),
            (Language::Japanese, r#"{ "letters": ["あ"] }"#),
        ])
        .unwrap();
        assert!(!catalog.has_language(Language::Korean));
        assert!(catalog.has_language(Language::Japanese));
        assert_eq!(
            catalog.resolve(Language::Korean, ItemLength::LETTERS),
            (Language::English, ItemLength::LETTERS)
        );
        let bad_json = Catalog::from_sources(&[(Language::English, SMALL), (Language::Farsi, "{")]);
        assert!(bad_json.is_ok());
    }

    #[test]
    fn rejects_duplicates_and_empty_letters() {
        let dup = r#"{ "letters": "aa" }"#;
        assert!(matches!(
            Catalog::from_sources(&[(Language::English, dup)]),
            Err(CatalogError::DuplicateEntry { .. })
        ));
        let empty = r#"{ "letters": [] }"#;
        assert!(matches!(
            Catalog::from_sources(&[(Language::English, empty)]),
            Err(CatalogError::NoLetters(Language::English))
        ));
    }

    #[test]
    fn rejects_bad_length_key_and_bad_json() {
        let bad_key = r#"{ "letters": "ab", "words": { "1": ["a"] } }"#;
        assert!(matches!(
            Catalog::from_sources(&[(Language::English, bad_key)]),
            Err(CatalogError::BadLengthKey { .. })
        ));
        assert!(matches!(
            Catalog::from_sources(&[(Language::English, "{")]),
            Err(CatalogError::Json { .. })
        ));
    }

    #[test]
    fn requires_default_language() {
        let json = r#"{ "letters": "ab" }"#;
        assert!(matches!(
            Catalog::from_sources(&[(Language::Arabic, json)]),
            Err(CatalogError::NoDefaultLanguage)
        ));
    }

    #[test]
    fn fallback_is_alphabet() {
        let catalog = Catalog::fallback();
        let seq = catalog.sequence(Language::Japanese, ItemLength::new(3));
        assert_eq!(seq.len(), 26);
        assert_eq!(seq[0], "A");
    }

    #[test]
    fn transliteration_joins_characters() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.transliteration(Language::Arabic, "ب").as_deref(), Some("ba"));
        assert_eq!(catalog.transliteration(Language::Arabic, "باب").as_deref(), Some("ba-alif-ba"));
        assert_eq!(catalog.transliteration(Language::Japanese, "ねこ").as_deref(), Some("ne-ko"));
        assert_eq!(catalog.transliteration(Language::English, "CAT"), None);
    }
}
