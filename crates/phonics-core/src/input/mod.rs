pub mod gesture;
pub mod intent;
pub mod keymap;
pub mod queue;

pub use gesture::{Gesture, PointerTracker, ZoneLayout};
pub use intent::Intent;
pub use keymap::intent_for_key;
pub use queue::{InputEvent, InputQueue};
