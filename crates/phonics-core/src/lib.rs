pub mod api;
pub mod content;
pub mod core;
pub mod effects;
pub mod flashcards;
pub mod input;
pub mod navigator;
pub mod overlay;
pub mod prefs;
pub mod rhyme;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, AppContext};
pub use api::types::{AppEvent, SoundEvent};
pub use content::{Catalog, CatalogError, ItemLength, Language, RhymeGroup};
pub use self::core::time::FixedTimestep;
pub use effects::{BurstConfig, ConfettiInstance, EffectsState};
pub use flashcards::FlashcardApp;
pub use input::{InputEvent, InputQueue, Intent};
pub use navigator::{CaseMode, Direction, Navigator, NavigatorState};
pub use overlay::{ImageOverlay, OverlayState};
pub use prefs::{MemoryStore, PreferenceStore, Preferences};
pub use rhyme::RhymeIndex;
