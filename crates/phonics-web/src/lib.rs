//! WASM bridge for the phonics flashcards.
//!
//! The React front end calls `app_init` once, then `app_tick(dt)` every
//! animation frame. Input is pushed through the `app_*` functions between
//! frames; after each tick JS reads the event, sound and confetti buffers
//! straight out of wasm memory and polls the getters for display state.

pub mod runner;
pub mod storage;

pub use runner::AppRunner;
pub use storage::LocalStore;

use std::cell::RefCell;

use phonics_core::{FlashcardApp, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<AppRunner<FlashcardApp>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut AppRunner<FlashcardApp>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Flashcards not initialized. Call app_init() first.");
        f(runner)
    })
}

fn with_app<R>(f: impl FnOnce(&FlashcardApp) -> R) -> R {
    with_runner(|r| f(r.app()))
}

#[wasm_bindgen]
pub fn app_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let app = FlashcardApp::new(Box::new(LocalStore::open()));
    let seed = js_sys::Date::now() as u64;
    let mut runner = AppRunner::with_seed(app, seed);
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("phonics: initialized");
}

#[wasm_bindgen]
pub fn app_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn app_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn app_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn app_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn app_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn app_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn app_wheel(delta_y: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
}

#[wasm_bindgen]
pub fn app_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- Image lookups finished by JS ----

/// Returns false when the result arrived after the child moved on.
#[wasm_bindgen]
pub fn app_image_loaded(generation: u32, url: &str) -> bool {
    with_runner(|r| r.app_mut().image_loaded(generation, url))
}

#[wasm_bindgen]
pub fn app_image_failed(generation: u32) {
    with_runner(|r| r.app_mut().image_failed(generation));
}

// ---- Display state ----

#[wasm_bindgen]
pub fn get_display_text() -> String {
    with_app(|a| a.display_text())
}

#[wasm_bindgen]
pub fn get_transliteration() -> Option<String> {
    with_app(|a| a.transliteration())
}

#[wasm_bindgen]
pub fn get_speech_text() -> String {
    with_app(|a| a.speech_text())
}

#[wasm_bindgen]
pub fn get_speech_locale() -> String {
    with_app(|a| a.speech_locale().to_string())
}

#[wasm_bindgen]
pub fn get_display_color() -> Option<String> {
    with_app(|a| a.display_color())
}

#[wasm_bindgen]
pub fn get_language() -> String {
    with_app(|a| a.language().code().to_string())
}

#[wasm_bindgen]
pub fn get_item_length() -> u32 {
    with_app(|a| a.item_length().get() as u32)
}

#[wasm_bindgen]
pub fn get_case_mode() -> String {
    with_app(|a| a.case_mode().as_str().to_string())
}

#[wasm_bindgen]
pub fn get_current_index() -> u32 {
    with_app(|a| a.navigator().current_index() as u32)
}

#[wasm_bindgen]
pub fn get_item_count() -> u32 {
    with_app(|a| a.navigator().len() as u32)
}

#[wasm_bindgen]
pub fn has_rhyme_group() -> bool {
    with_app(|a| a.navigator().has_rhyme_group())
}

#[wasm_bindgen]
pub fn is_rtl() -> bool {
    with_app(|a| a.is_rtl())
}

#[wasm_bindgen]
pub fn get_image_url() -> Option<String> {
    with_app(|a| a.image_url().map(str::to_string))
}

#[wasm_bindgen]
pub fn get_image_term() -> Option<String> {
    with_app(|a| a.image_term().map(str::to_string))
}

#[wasm_bindgen]
pub fn is_dark_mode() -> bool {
    with_app(|a| a.is_dark_mode())
}

#[wasm_bindgen]
pub fn is_audio_enabled() -> bool {
    with_app(|a| a.is_audio_enabled())
}

#[wasm_bindgen]
pub fn get_zoom_level() -> f32 {
    with_app(|a| a.zoom_level())
}

#[wasm_bindgen]
pub fn is_celebrating() -> bool {
    with_app(|a| a.is_celebrating())
}

// ---- Frame buffers ----

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const u8 {
    with_runner(|r| r.sound_events_ptr())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_events_len())
}

#[wasm_bindgen]
pub fn get_confetti_ptr() -> *const f32 {
    with_runner(|r| r.confetti_ptr())
}

#[wasm_bindgen]
pub fn get_confetti_count() -> u32 {
    with_runner(|r| r.confetti_count())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_max_sounds() -> u32 {
    with_runner(|r| r.max_sounds())
}
