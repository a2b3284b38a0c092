use crate::content::ItemLength;

use super::intent::Intent;

// DOM keyCode values
pub const KEY_ENTER: u32 = 13;
pub const KEY_SHIFT: u32 = 16;
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_SPACE: u32 = 32;
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_0: u32 = 48;
pub const KEY_4: u32 = 52;
pub const KEY_A: u32 = 65;
pub const KEY_Z: u32 = 90;
pub const KEY_NUMPAD_0: u32 = 96;
pub const KEY_NUMPAD_4: u32 = 100;
pub const KEY_NUMPAD_ADD: u32 = 107;
pub const KEY_NUMPAD_SUBTRACT: u32 = 109;
pub const KEY_EQUALS: u32 = 187;
pub const KEY_MINUS: u32 = 189;
// Firefox reports these two differently
pub const KEY_EQUALS_GECKO: u32 = 61;
pub const KEY_MINUS_GECKO: u32 = 173;

/// Map a key press to an intent. Keys with no binding return `None`.
///
/// Letter keys always produce [`Intent::JumpToLetter`]; whether that
/// does anything depends on the active mode.
pub fn intent_for_key(key_code: u32) -> Option<Intent> {
    let intent = match key_code {
        KEY_SHIFT => Intent::ToggleCase,
        KEY_RIGHT | KEY_SPACE => Intent::NextFamily,
        KEY_LEFT => Intent::PrevFamily,
        KEY_UP | KEY_DOWN => Intent::CycleRhyme,
        KEY_ENTER => Intent::Celebrate,
        KEY_ESCAPE => Intent::HideImage,
        KEY_EQUALS | KEY_EQUALS_GECKO | KEY_NUMPAD_ADD => Intent::Zoom(1),
        KEY_MINUS | KEY_MINUS_GECKO | KEY_NUMPAD_SUBTRACT => Intent::Zoom(-1),
        KEY_0..=KEY_4 => Intent::SetItemLength(ItemLength::new(key_code - KEY_0)),
        KEY_NUMPAD_0..=KEY_NUMPAD_4 => {
            Intent::SetItemLength(ItemLength::new(key_code - KEY_NUMPAD_0))
        }
        KEY_A..=KEY_Z => {
            let ch = char::from_u32(key_code)?.to_ascii_lowercase();
            Intent::JumpToLetter(ch)
        }
        _ => return None,
    };
    Some(intent)
}
