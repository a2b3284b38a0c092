//! Per-entry presentation hints: what to speak, what colour to draw,
//! and what to search for when the child asks for a picture.

use super::language::Language;

/// Phonic sounds for single English letters, plus digit names.
const PHONIC_SOUNDS: [(char, &str); 36] = [
    ('a', "a"), ('b', "buh"), ('c', "kuh"), ('d', "duh"), ('e', "e"), ('f', "f"),
    ('g', "guh"), ('h', "huh"), ('i', "i"), ('j', "juh"), ('k', "kuh"), ('l', "luh"),
    ('m', "m"), ('n', "n"), ('o', "o"), ('p', "puh"), ('q', "kwuh"), ('r', "r"),
    ('s', "s"), ('t', "tuh"), ('u', "u"), ('v', "vuh"), ('w', "wuh"), ('x', "ks"),
    ('y', "yuh"), ('z', "zuh"),
    ('0', "zero"), ('1', "one"), ('2', "two"), ('3', "three"), ('4', "four"),
    ('5', "five"), ('6', "six"), ('7', "seven"), ('8', "eight"), ('9', "nine"),
];

/// A picture-friendly noun for each English letter.
const LETTER_NOUNS: [&str; 26] = [
    "apple", "ball", "cat", "dog", "elephant", "fish", "guitar", "house", "ice cream",
    "juice", "kite", "lion", "moon", "nest", "orange", "pig", "queen", "rainbow", "sun",
    "tree", "umbrella", "violin", "water", "xylophone", "yellow", "zebra",
];

/// Colour cycle for Latin letters, A..M then repeating for N..Z.
const LETTER_COLORS: [[u8; 3]; 13] = [
    [0xFF, 0x57, 0x33], // red
    [0x33, 0xFF, 0x57], // green
    [0x33, 0x57, 0xFF], // blue
    [0xFF, 0x33, 0xA1], // pink
    [0xA1, 0x33, 0xFF], // purple
    [0x33, 0xFF, 0xF3], // cyan
    [0xF3, 0xFF, 0x33], // yellow
    [0xFF, 0x8C, 0x33], // orange
    [0x8C, 0x33, 0xFF], // indigo
    [0x33, 0xFF, 0x8C], // lime
    [0xFF, 0x33, 0x8C], // magenta
    [0x8C, 0xFF, 0x33], // light green
    [0x33, 0xA1, 0xFF], // light blue
];

/// Text handed to speech synthesis for an entry.
/// English single letters are spoken as their sound, not their name.
pub fn speech_text(language: Language, entry: &str) -> String {
    let lower = entry.to_lowercase();
    if language == Language::English {
        let mut chars = lower.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some((_, sound)) = PHONIC_SOUNDS.iter().find(|(k, _)| *k == c) {
                return (*sound).to_string();
            }
        }
    }
    lower
}

/// Display colour keyed by the entry's first Latin letter.
pub fn letter_color(entry: &str) -> Option<[u8; 3]> {
    let first = entry.chars().next()?.to_ascii_uppercase();
    if !first.is_ascii_uppercase() {
        return None;
    }
    let idx = (first as u8 - b'A') as usize % LETTER_COLORS.len();
    Some(LETTER_COLORS[idx])
}

/// `#RRGGBB` form of [`letter_color`].
pub fn letter_color_hex(entry: &str) -> Option<String> {
    letter_color(entry).map(|[r, g, b]| format!("#{r:02X}{g:02X}{b:02X}"))
}

/// What to search an image for. Latin letters map to a fixed noun so
/// the same letter always shows the same kind of picture.
pub fn image_search_term(entry: &str, is_letter: bool) -> String {
    let lower = entry.to_lowercase();
    if is_letter {
        if let Some(c) = lower.chars().next().filter(|c| c.is_ascii_lowercase()) {
            return LETTER_NOUNS[(c as u8 - b'a') as usize].to_string();
        }
    }
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_letters_use_phonic_sounds() {
        assert_eq!(speech_text(Language::English, "B"), "buh");
        assert_eq!(speech_text(Language::English, "q"), "kwuh");
        assert_eq!(speech_text(Language::English, "7"), "seven");
    }

    #[test]
    fn words_and_other_languages_are_lowercased() {
        assert_eq!(speech_text(Language::English, "CAT"), "cat");
        assert_eq!(speech_text(Language::Arabic, "ب"), "ب");
    }

    #[test]
    fn colors_cycle_after_m() {
        assert_eq!(letter_color("A"), letter_color("N"));
        assert_eq!(letter_color_hex("a").as_deref(), Some("#FF5733"));
        assert_eq!(letter_color("CAT"), letter_color("C"));
        assert!(letter_color("ب").is_none());
    }

    #[test]
    fn letters_search_for_fixed_nouns() {
        assert_eq!(image_search_term("A", true), "apple");
        assert_eq!(image_search_term("I", true), "ice cream");
        assert_eq!(image_search_term("CAT", false), "cat");
        assert_eq!(image_search_term("ب", true), "ب");
    }
}
