use std::fmt;
use std::str::FromStr;

use crate::content::{canonical, Catalog, Dataset, ItemLength, Language, RhymeGroup};
use crate::rhyme::RhymeIndex;

/// Which way a sequential step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Wrap-around step over a sequence of `len` entries.
    pub fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Prev => (index + len - 1) % len,
        }
    }
}

/// Display-only casing transform applied to the current entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    Lowercase,
    #[default]
    Uppercase,
    /// Lowercase and uppercase side by side ("a A").
    Both,
}

impl CaseMode {
    pub const ALL: [CaseMode; 3] = [CaseMode::Lowercase, CaseMode::Uppercase, CaseMode::Both];

    pub fn toggled(self) -> Self {
        match self {
            CaseMode::Lowercase => CaseMode::Uppercase,
            CaseMode::Uppercase | CaseMode::Both => CaseMode::Lowercase,
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            CaseMode::Lowercase => text.to_lowercase(),
            CaseMode::Uppercase => text.to_uppercase(),
            CaseMode::Both => {
                let lower = text.to_lowercase();
                let upper = text.to_uppercase();
                // Caseless scripts would just repeat themselves.
                if lower == upper {
                    upper
                } else {
                    format!("{lower} {upper}")
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CaseMode::Lowercase => "lowercase",
            CaseMode::Uppercase => "uppercase",
            CaseMode::Both => "both",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| format!("unknown case mode {s:?}"))
    }
}

/// Everything that decides what is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorState {
    pub language: Language,
    pub item_length: ItemLength,
    /// Always `< sequence.len()`.
    pub current_index: usize,
    pub case_mode: CaseMode,
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            item_length: ItemLength::LETTERS,
            current_index: 0,
            case_mode: CaseMode::Uppercase,
        }
    }
}

/// Owns the current selection and the transitions between selections.
///
/// Every transition is synchronous and leaves `current_index` inside the
/// active sequence. Item-changing transitions return whether the
/// displayed entry changed so the caller can fire its side effects.
pub struct Navigator {
    catalog: Catalog,
    state: NavigatorState,
    rhyme: RhymeIndex,
}

impl Navigator {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_selection(catalog, Language::default(), ItemLength::LETTERS, CaseMode::default())
    }

    /// Start on a specific pair, e.g. one restored from preferences.
    pub fn with_selection(
        catalog: Catalog,
        language: Language,
        item_length: ItemLength,
        case_mode: CaseMode,
    ) -> Self {
        let mut nav = Self {
            catalog,
            state: NavigatorState {
                case_mode,
                ..NavigatorState::default()
            },
            rhyme: RhymeIndex::default(),
        };
        nav.load_dataset(language, item_length);
        nav
    }

    // -- Dataset switches --

    pub fn set_language(&mut self, language: Language) {
        self.load_dataset(language, self.state.item_length);
    }

    pub fn set_item_length(&mut self, item_length: ItemLength) {
        self.load_dataset(self.state.language, item_length);
    }

    /// Switch the active sequence. Index and rhyme cursor always reset,
    /// even when the resolved pair is unchanged.
    fn load_dataset(&mut self, language: Language, item_length: ItemLength) {
        let (language, item_length) = self.catalog.resolve(language, item_length);
        self.state.language = language;
        self.state.item_length = item_length;
        self.state.current_index = 0;
        let groups = self.catalog.rhyme_groups(language, item_length).to_vec();
        self.rhyme.reset(groups);
        debug_assert!(!self.dataset().is_empty(), "empty sequence for {language}/{item_length}");
        log::debug!("dataset {language}/{item_length}: {} entries", self.len());
    }

    // -- Item transitions --

    /// Plain catalog-order step with wrap-around.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let len = self.len();
        if len == 0 {
            return false;
        }
        let next = direction.step(self.state.current_index, len);
        self.move_to(next)
    }

    /// Step until the entry's rhyme group differs from the current one.
    ///
    /// An ungrouped entry behaves like [`Navigator::advance`]. If every
    /// other entry shares the current group the index stays put.
    pub fn advance_skipping_rhyme_group(&mut self, direction: Direction) -> bool {
        let Some(current_group) = self.rhyme.group_of(self.current_entry()) else {
            return self.advance(direction);
        };
        let entries = self.dataset().entries();
        let len = entries.len();
        let mut idx = self.state.current_index;
        let mut landing = None;
        for _ in 1..len {
            idx = direction.step(idx, len);
            if self.rhyme.group_of(&entries[idx]) != Some(current_group) {
                landing = Some(idx);
                break;
            }
        }
        match landing {
            Some(idx) => self.move_to(idx),
            None => false,
        }
    }

    /// Move to the next member of the current entry's rhyme group.
    /// Without a group this is a no-op and returns false.
    pub fn cycle_rhyme(&mut self) -> bool {
        let entry = self.current_entry().to_string();
        if !self.rhyme.is_on(&entry) && self.rhyme.find_group(&entry).is_none() {
            return false;
        }
        let Some(next) = self.rhyme.next_in_group().map(canonical) else {
            return false;
        };
        match self.dataset().position(&next) {
            Some(idx) => {
                let changed = idx != self.state.current_index;
                self.state.current_index = idx;
                changed
            }
            None => {
                log::warn!("rhyme member {next:?} missing from sequence");
                self.rhyme.clear();
                false
            }
        }
    }

    /// Jump straight to an index, reduced modulo the sequence length.
    pub fn jump_to_index(&mut self, index: usize) -> bool {
        let len = self.len();
        if len == 0 {
            return false;
        }
        self.move_to(index % len)
    }

    /// Jump to the first entry matching `predicate`.
    pub fn jump_to_entry(&mut self, predicate: impl Fn(&str) -> bool) -> bool {
        match self.dataset().entries().iter().position(|e| predicate(e)) {
            Some(idx) => self.move_to(idx),
            None => false,
        }
    }

    /// Letter mode only: jump to the entry spelled by `ch`.
    pub fn jump_to_letter(&mut self, ch: char) -> bool {
        if !self.state.item_length.is_letters() {
            return false;
        }
        let target = canonical(&ch.to_string());
        self.jump_to_entry(|e| e == target)
    }

    fn move_to(&mut self, index: usize) -> bool {
        let changed = index != self.state.current_index;
        self.state.current_index = index;
        if changed {
            self.rhyme.clear();
        }
        changed
    }

    // -- Display transitions --

    pub fn toggle_case_mode(&mut self) {
        self.state.case_mode = self.state.case_mode.toggled();
    }

    pub fn set_case_mode(&mut self, mode: CaseMode) {
        self.state.case_mode = mode;
    }

    // -- Read side --

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dataset(&self) -> &Dataset {
        self.catalog.dataset(self.state.language, self.state.item_length)
    }

    pub fn len(&self) -> usize {
        self.dataset().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn item_length(&self) -> ItemLength {
        self.state.item_length
    }

    pub fn case_mode(&self) -> CaseMode {
        self.state.case_mode
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// The entry in catalog casing.
    pub fn current_entry(&self) -> &str {
        self.dataset()
            .entries()
            .get(self.state.current_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The entry with the case mode applied.
    pub fn display_text(&self) -> String {
        self.state.case_mode.apply(self.current_entry())
    }

    pub fn transliteration(&self) -> Option<String> {
        self.catalog
            .transliteration(self.state.language, self.current_entry())
    }

    /// Whether the current entry belongs to any rhyme group.
    pub fn has_rhyme_group(&self) -> bool {
        self.rhyme.group_of(self.current_entry()).is_some()
    }

    /// Whether the active dataset carries any rhyme groups at all.
    pub fn has_rhymes(&self) -> bool {
        !self.rhyme.is_empty()
    }

    /// The group the rhyme cursor is walking, if a cycle is in progress.
    pub fn active_rhyme_group(&self) -> Option<&RhymeGroup> {
        self.rhyme.active_group()
    }
}
