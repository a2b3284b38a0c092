use std::fmt;
use std::str::FromStr;

/// A language the catalog carries data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    #[default]
    English,
    Arabic,
    Farsi,
    Japanese,
    Korean,
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Arabic,
        Language::Farsi,
        Language::Japanese,
        Language::Korean,
    ];

    /// Two-letter code used in preferences and the JS bridge.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
            Language::Farsi => "fa",
            Language::Japanese => "ja",
            Language::Korean => "ko",
        }
    }

    /// Parse a language code. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            log::warn!("unknown language code {code:?}, using en");
            Language::default()
        })
    }

    /// BCP-47 tag handed to the browser's speech synthesis.
    pub fn speech_locale(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Arabic => "ar-SA",
            Language::Farsi => "fa-IR",
            Language::Japanese => "ja-JP",
            Language::Korean => "ko-KR",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Arabic | Language::Farsi)
    }

    /// The language after this one in selector order, wrapping.
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Position in [`Language::ALL`]; used as the numeric id on the JS side.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&l| l == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code {:?}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

/// Which catalog subset is active: letters, N-letter words, or everything mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemLength(u8);

impl ItemLength {
    /// Every word length concatenated in length order.
    pub const MIXED: ItemLength = ItemLength(0);
    pub const LETTERS: ItemLength = ItemLength(1);
    /// Longest word length the catalog format supports.
    pub const MAX_WORD: u8 = 4;

    /// Build a mode selector. Unsupported values fall back to letters.
    pub fn new(n: u32) -> Self {
        match n {
            0..=4 => ItemLength(n as u8),
            _ => {
                log::warn!("unsupported item length {n}, using letters");
                Self::LETTERS
            }
        }
    }

    /// Strict variant of [`ItemLength::new`] for data parsing.
    pub fn try_new(n: u32) -> Option<Self> {
        (n <= Self::MAX_WORD as u32).then_some(ItemLength(n as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_letters(self) -> bool {
        self == Self::LETTERS
    }

    pub fn is_mixed(self) -> bool {
        self == Self::MIXED
    }

    /// Concrete word lengths, shortest first.
    pub fn word_lengths() -> impl Iterator<Item = ItemLength> {
        (2..=Self::MAX_WORD).map(ItemLength)
    }

    /// Selector label shown next to the mode buttons.
    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Mixed Words",
            1 => "Letters",
            2 => "2-Letter Words",
            3 => "3-Letter Words",
            _ => "4-Letter Words",
        }
    }
}

impl Default for ItemLength {
    fn default() -> Self {
        Self::LETTERS
    }
}

impl fmt::Display for ItemLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code("xx"), Language::English);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Language::Korean.next(), Language::English);
        assert_eq!(Language::English.next(), Language::Arabic);
    }

    #[test]
    fn rtl_languages() {
        assert!(Language::Arabic.is_rtl());
        assert!(Language::Farsi.is_rtl());
        assert!(!Language::Japanese.is_rtl());
    }

    #[test]
    fn unsupported_length_falls_back_to_letters() {
        assert_eq!(ItemLength::new(9), ItemLength::LETTERS);
        assert_eq!(ItemLength::new(0), ItemLength::MIXED);
        assert_eq!(ItemLength::new(3).get(), 3);
        assert!(ItemLength::try_new(5).is_none());
    }

    #[test]
    fn word_lengths_skip_letters_and_mixed() {
        let lens: Vec<u8> = ItemLength::word_lengths().map(|l| l.get()).collect();
        assert_eq!(lens, vec![2, 3, 4]);
    }
}
