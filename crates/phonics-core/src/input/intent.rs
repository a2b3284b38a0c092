use crate::content::{ItemLength, Language};
use crate::navigator::CaseMode;

// Custom event kinds (React → Rust)
pub const CUSTOM_NEXT: u32 = 1;
pub const CUSTOM_PREV: u32 = 2;
pub const CUSTOM_SET_LANGUAGE: u32 = 3;
pub const CUSTOM_CYCLE_LANGUAGE: u32 = 4;
pub const CUSTOM_SET_ITEM_LENGTH: u32 = 5;
pub const CUSTOM_TOGGLE_CASE: u32 = 6;
pub const CUSTOM_SET_CASE_MODE: u32 = 7;
pub const CUSTOM_CYCLE_RHYME: u32 = 8;
pub const CUSTOM_CELEBRATE: u32 = 9;
pub const CUSTOM_SHOW_IMAGE: u32 = 10;
pub const CUSTOM_HIDE_IMAGE: u32 = 11;
pub const CUSTOM_TOGGLE_DARK_MODE: u32 = 12;
pub const CUSTOM_TOGGLE_AUDIO: u32 = 13;
pub const CUSTOM_ZOOM: u32 = 14;
pub const CUSTOM_RESET_ZOOM: u32 = 15;
pub const CUSTOM_JUMP_TO_INDEX: u32 = 16;
pub const CUSTOM_SPEAK: u32 = 17;

/// An already-classified user intent. Geometry and key codes are gone
/// by the time one of these exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Catalog-order step.
    Next,
    Prev,
    /// Step to the next rhyme family in word modes.
    NextFamily,
    PrevFamily,
    JumpToIndex(usize),
    JumpToLetter(char),
    ToggleCase,
    SetCaseMode(CaseMode),
    SetLanguage(Language),
    CycleLanguage,
    SetItemLength(ItemLength),
    CycleRhyme,
    Celebrate,
    ShowImage,
    HideImage,
    ToggleDarkMode,
    ToggleAudio,
    /// Zoom by a signed number of steps.
    Zoom(i32),
    ResetZoom,
    Speak,
}

impl Intent {
    /// Decode a React button event. Unknown kinds and out-of-range
    /// arguments yield `None`.
    pub fn from_custom(kind: u32, a: f32, _b: f32, _c: f32) -> Option<Self> {
        let index = || (a >= 0.0).then_some(a as usize);
        let intent = match kind {
            CUSTOM_NEXT => Intent::Next,
            CUSTOM_PREV => Intent::Prev,
            CUSTOM_SET_LANGUAGE => Intent::SetLanguage(Language::from_index(index()?)?),
            CUSTOM_CYCLE_LANGUAGE => Intent::CycleLanguage,
            // Out-of-range lengths go through `ItemLength::new`, which falls back to letters.
            CUSTOM_SET_ITEM_LENGTH => {
                Intent::SetItemLength(ItemLength::new(u32::try_from(index()?).unwrap_or(u32::MAX)))
            }
            CUSTOM_TOGGLE_CASE => Intent::ToggleCase,
            CUSTOM_SET_CASE_MODE => Intent::SetCaseMode(CaseMode::from_index(index()?)?),
            CUSTOM_CYCLE_RHYME => Intent::CycleRhyme,
            CUSTOM_CELEBRATE => Intent::Celebrate,
            CUSTOM_SHOW_IMAGE => Intent::ShowImage,
            CUSTOM_HIDE_IMAGE => Intent::HideImage,
            CUSTOM_TOGGLE_DARK_MODE => Intent::ToggleDarkMode,
            CUSTOM_TOGGLE_AUDIO => Intent::ToggleAudio,
            CUSTOM_ZOOM => Intent::Zoom(a.round() as i32),
            CUSTOM_RESET_ZOOM => Intent::ResetZoom,
            CUSTOM_JUMP_TO_INDEX => Intent::JumpToIndex(index()?),
            CUSTOM_SPEAK => Intent::Speak,
            _ => {
                log::debug!("ignoring custom event kind {kind}");
                return None;
            }
        };
        Some(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_custom_events() {
        assert_eq!(
            Intent::from_custom(CUSTOM_SET_LANGUAGE, 2.0, 0.0, 0.0),
            Some(Intent::SetLanguage(Language::Farsi))
        );
        assert_eq!(
            Intent::from_custom(CUSTOM_SET_ITEM_LENGTH, 3.0, 0.0, 0.0),
            Some(Intent::SetItemLength(ItemLength::new(3)))
        );
        assert_eq!(
            Intent::from_custom(CUSTOM_SET_CASE_MODE, 2.0, 0.0, 0.0),
            Some(Intent::SetCaseMode(CaseMode::Both))
        );
        assert_eq!(Intent::from_custom(CUSTOM_ZOOM, -1.0, 0.0, 0.0), Some(Intent::Zoom(-1)));
    }

    #[test]
    fn rejects_unknown_kinds_and_bad_args() {
        assert_eq!(Intent::from_custom(999, 0.0, 0.0, 0.0), None);
        assert_eq!(Intent::from_custom(CUSTOM_SET_LANGUAGE, 42.0, 0.0, 0.0), None);
        assert_eq!(Intent::from_custom(CUSTOM_JUMP_TO_INDEX, -1.0, 0.0, 0.0), None);
    }

    #[test]
    fn huge_item_length_falls_back_to_letters() {
        assert_eq!(
            Intent::from_custom(CUSTOM_SET_ITEM_LENGTH, 4294967298.0, 0.0, 0.0),
            Some(Intent::SetItemLength(ItemLength::LETTERS))
        );
        assert_eq!(
            Intent::from_custom(CUSTOM_SET_ITEM_LENGTH, 9.0, 0.0, 0.0),
            Some(Intent::SetItemLength(ItemLength::LETTERS))
        );
    }
}
