pub mod app;
pub mod types;

pub use app::{App, AppConfig, AppContext};
pub use types::{AppEvent, SoundEvent};
