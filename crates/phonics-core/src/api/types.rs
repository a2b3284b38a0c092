use bytemuck::{Pod, Zeroable};

/// A sound cue for the front end's audio player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    /// Card flip on every item change.
    pub const FLIP: SoundEvent = SoundEvent(1);
    pub const CELEBRATE: SoundEvent = SoundEvent(2);
}

// Event kinds (Rust → React)

/// a = index, b = sequence length.
pub const EVENT_ITEM_CHANGED: u32 = 1;
/// a = language index, b = item length, c = sequence length.
pub const EVENT_DATASET_CHANGED: u32 = 2;
/// a = case mode index.
pub const EVENT_CASE_CHANGED: u32 = 3;
pub const EVENT_CELEBRATION_STARTED: u32 = 4;
pub const EVENT_CELEBRATION_ENDED: u32 = 5;
/// a = generation. The search term is read through the getter.
pub const EVENT_IMAGE_REQUESTED: u32 = 6;
pub const EVENT_IMAGE_HIDDEN: u32 = 7;
/// Speak the current entry; text and locale come from the getters.
pub const EVENT_SPEAK: u32 = 8;
/// a = dark mode, b = audio, c = zoom level.
pub const EVENT_SETTINGS_CHANGED: u32 = 9;

/// Fixed-size event record read by the front end as four floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct AppEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl AppEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: u32, a: f32, b: f32, c: f32) -> Self {
        Self {
            kind: kind as f32,
            a,
            b,
            c,
        }
    }

    pub fn bare(kind: u32) -> Self {
        Self::new(kind, 0.0, 0.0, 0.0)
    }

    pub fn kind(&self) -> u32 {
        self.kind as u32
    }
}
