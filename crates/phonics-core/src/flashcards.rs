//! The flashcard application: turns input into navigator transitions and
//! the side effects the front end renders (events, sounds, confetti).

use glam::Vec2;

use crate::api::types::*;
use crate::api::{App, AppConfig, AppContext};
use crate::content::{hints, Catalog, ItemLength, Language};
use crate::input::{intent_for_key, Gesture, InputEvent, InputQueue, Intent, PointerTracker, ZoneLayout};
use crate::navigator::{CaseMode, Direction, Navigator};
use crate::overlay::ImageOverlay;
use crate::prefs::{PreferenceStore, Preferences};

pub struct FlashcardApp {
    config: AppConfig,
    navigator: Navigator,
    prefs: Preferences,
    store: Box<dyn PreferenceStore>,
    overlay: ImageOverlay,
    pointer: PointerTracker,
    zones: ZoneLayout,
    /// Seconds left in the running celebration.
    celebration: Option<f32>,
}

impl FlashcardApp {
    /// Built-in decks, preferences restored from `store`.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_catalog(Catalog::builtin_or_fallback(), store)
    }

    pub fn with_catalog(catalog: Catalog, store: Box<dyn PreferenceStore>) -> Self {
        Self::with_config(catalog, store, AppConfig::default())
    }

    pub fn with_config(catalog: Catalog, store: Box<dyn PreferenceStore>, config: AppConfig) -> Self {
        let mut prefs = Preferences::load(store.as_ref());
        let navigator =
            Navigator::with_selection(catalog, prefs.language, prefs.item_length, prefs.case_mode);
        // Keep what the navigator actually resolved to.
        prefs.language = navigator.language();
        prefs.item_length = navigator.item_length();
        prefs.zoom_level = prefs.zoom_level.clamp(config.min_zoom, config.max_zoom);

        let zones = ZoneLayout {
            world_size: config.world_size(),
            prev_fraction: config.prev_fraction,
            card_half_extents: Vec2::new(config.card_half_width, config.card_half_height),
        };
        Self {
            pointer: PointerTracker::new(config.long_press_secs, config.tap_slop),
            zones,
            config,
            navigator,
            prefs,
            store,
            overlay: ImageOverlay::new(),
            celebration: None,
        }
    }

    /// Apply one classified intent.
    pub fn handle_intent(&mut self, ctx: &mut AppContext, intent: Intent) {
        log::debug!("intent {intent:?}");
        match intent {
            Intent::Next => self.step(ctx, Direction::Next),
            Intent::Prev => self.step(ctx, Direction::Prev),
            Intent::NextFamily => self.step_family(ctx, Direction::Next),
            Intent::PrevFamily => self.step_family(ctx, Direction::Prev),
            Intent::JumpToIndex(index) => {
                let moved = self.navigator.jump_to_index(index);
                self.after_move(ctx, moved);
            }
            Intent::JumpToLetter(ch) => {
                let moved = self.navigator.jump_to_letter(ch);
                self.after_move(ctx, moved);
            }
            Intent::CycleRhyme => {
                // A tap on the card always changes it, grouped or not.
                let moved = self.navigator.cycle_rhyme() || self.navigator.advance(Direction::Next);
                self.after_move(ctx, moved);
            }
            Intent::SetLanguage(language) => {
                self.navigator.set_language(language);
                self.after_dataset_switch(ctx);
            }
            Intent::CycleLanguage => {
                let language = self.next_language();
                self.navigator.set_language(language);
                self.after_dataset_switch(ctx);
            }
            Intent::SetItemLength(length) => {
                self.navigator.set_item_length(length);
                self.after_dataset_switch(ctx);
            }
            Intent::ToggleCase => {
                self.navigator.toggle_case_mode();
                self.after_case_change(ctx);
            }
            Intent::SetCaseMode(mode) => {
                if mode != self.navigator.case_mode() {
                    self.navigator.set_case_mode(mode);
                    self.after_case_change(ctx);
                }
            }
            Intent::Celebrate => self.celebrate(ctx),
            Intent::ShowImage => self.request_image(ctx),
            Intent::HideImage => self.hide_image(ctx),
            Intent::ToggleDarkMode => {
                self.prefs.dark_mode = !self.prefs.dark_mode;
                self.after_settings_change(ctx);
            }
            Intent::ToggleAudio => {
                self.prefs.audio_enabled = !self.prefs.audio_enabled;
                self.after_settings_change(ctx);
            }
            Intent::Zoom(steps) => {
                let target = self.prefs.zoom_level + steps as f32 * self.config.zoom_step;
                self.set_zoom(ctx, target);
            }
            Intent::ResetZoom => self.set_zoom(ctx, 1.0),
            Intent::Speak => self.speak(ctx),
        }
    }

    fn step(&mut self, ctx: &mut AppContext, direction: Direction) {
        let moved = self.navigator.advance(direction);
        self.after_move(ctx, moved);
    }

    /// Word modes with rhyme data hop whole families; everything else
    /// steps one card.
    fn step_family(&mut self, ctx: &mut AppContext, direction: Direction) {
        let moved = if !self.navigator.item_length().is_letters() && self.navigator.has_rhymes() {
            self.navigator.advance_skipping_rhyme_group(direction)
        } else {
            self.navigator.advance(direction)
        };
        self.after_move(ctx, moved);
    }

    /// Next language in cycle order that actually has a deck.
    fn next_language(&self) -> Language {
        let mut language = self.navigator.language();
        for _ in 0..Language::ALL.len() {
            language = language.next();
            if self.navigator.catalog().has_language(language) {
                break;
            }
        }
        language
    }

    fn after_move(&mut self, ctx: &mut AppContext, moved: bool) {
        if moved {
            self.item_changed(ctx);
        }
    }

    fn item_changed(&mut self, ctx: &mut AppContext) {
        self.hide_image(ctx);
        ctx.emit_event(AppEvent::new(
            EVENT_ITEM_CHANGED,
            self.navigator.current_index() as f32,
            self.navigator.len() as f32,
            0.0,
        ));
        if self.prefs.audio_enabled {
            ctx.emit_sound(SoundEvent::FLIP);
            ctx.emit_event(AppEvent::bare(EVENT_SPEAK));
        }
    }

    fn after_dataset_switch(&mut self, ctx: &mut AppContext) {
        self.prefs.language = self.navigator.language();
        self.prefs.item_length = self.navigator.item_length();
        self.save_prefs();
        log::info!(
            "deck {}/{} ({} cards)",
            self.prefs.language,
            self.prefs.item_length.label(),
            self.navigator.len()
        );
        ctx.emit_event(AppEvent::new(
            EVENT_DATASET_CHANGED,
            self.prefs.language.index() as f32,
            self.prefs.item_length.get() as f32,
            self.navigator.len() as f32,
        ));
        self.item_changed(ctx);
    }

    fn after_case_change(&mut self, ctx: &mut AppContext) {
        self.prefs.case_mode = self.navigator.case_mode();
        self.save_prefs();
        ctx.emit_event(AppEvent::new(
            EVENT_CASE_CHANGED,
            self.prefs.case_mode.index() as f32,
            0.0,
            0.0,
        ));
    }

    fn after_settings_change(&mut self, ctx: &mut AppContext) {
        self.save_prefs();
        ctx.emit_event(AppEvent::new(
            EVENT_SETTINGS_CHANGED,
            bool_flag(self.prefs.dark_mode),
            bool_flag(self.prefs.audio_enabled),
            self.prefs.zoom_level,
        ));
    }

    fn set_zoom(&mut self, ctx: &mut AppContext, target: f32) {
        let zoom = round_zoom(target.clamp(self.config.min_zoom, self.config.max_zoom));
        if zoom != self.prefs.zoom_level {
            self.prefs.zoom_level = zoom;
            self.after_settings_change(ctx);
        }
    }

    fn celebrate(&mut self, ctx: &mut AppContext) {
        ctx.effects.spawn_burst(self.config.stage_center());
        if self.celebration.is_none() {
            ctx.emit_event(AppEvent::bare(EVENT_CELEBRATION_STARTED));
        }
        self.celebration = Some(self.config.celebration_secs);
        if self.prefs.audio_enabled {
            ctx.emit_sound(SoundEvent::CELEBRATE);
        }
    }

    fn request_image(&mut self, ctx: &mut AppContext) {
        let term = hints::image_search_term(
            self.navigator.current_entry(),
            self.navigator.item_length().is_letters(),
        );
        log::debug!("image lookup for {term:?}");
        let generation = self.overlay.request(term);
        ctx.emit_event(AppEvent::new(EVENT_IMAGE_REQUESTED, generation as f32, 0.0, 0.0));
    }

    fn hide_image(&mut self, ctx: &mut AppContext) {
        if self.overlay.clear() {
            ctx.emit_event(AppEvent::bare(EVENT_IMAGE_HIDDEN));
        }
    }

    fn speak(&mut self, ctx: &mut AppContext) {
        if self.prefs.audio_enabled {
            ctx.emit_event(AppEvent::bare(EVENT_SPEAK));
        }
    }

    fn save_prefs(&mut self) {
        self.prefs.save(self.store.as_mut());
    }

    fn handle_event(&mut self, ctx: &mut AppContext, event: &InputEvent) {
        let intent = match *event {
            InputEvent::PointerDown { x, y } => {
                self.pointer.on_pointer_down(Vec2::new(x, y));
                None
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer.on_pointer_move(Vec2::new(x, y));
                None
            }
            InputEvent::PointerUp { x, y } => match self.pointer.on_pointer_up(Vec2::new(x, y)) {
                Some(Gesture::Tap(pos)) => Some(self.zones.classify_tap(pos)),
                _ => None,
            },
            InputEvent::KeyDown { key_code } => intent_for_key(key_code),
            InputEvent::KeyUp { .. } => None,
            InputEvent::Wheel { delta_y } if delta_y < 0.0 => Some(Intent::Zoom(1)),
            InputEvent::Wheel { delta_y } if delta_y > 0.0 => Some(Intent::Zoom(-1)),
            InputEvent::Wheel { .. } => None,
            InputEvent::Custom { kind, a, b, c } => Intent::from_custom(kind, a, b, c),
        };
        if let Some(intent) = intent {
            self.handle_intent(ctx, intent);
        }
    }

    // -- Image results from the front end --

    /// Returns whether the result was accepted. Stale ones are dropped.
    pub fn image_loaded(&mut self, generation: u32, url: &str) -> bool {
        self.overlay.resolve(generation, url)
    }

    pub fn image_failed(&mut self, generation: u32) {
        self.overlay.fail(generation);
    }

    // -- Read side --

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn display_text(&self) -> String {
        self.navigator.display_text()
    }

    pub fn transliteration(&self) -> Option<String> {
        self.navigator.transliteration()
    }

    pub fn speech_text(&self) -> String {
        hints::speech_text(self.navigator.language(), self.navigator.current_entry())
    }

    pub fn speech_locale(&self) -> &'static str {
        self.navigator.language().speech_locale()
    }

    /// Card colour for Latin letters, `None` for everything else.
    pub fn display_color(&self) -> Option<String> {
        if !self.navigator.item_length().is_letters() {
            return None;
        }
        hints::letter_color_hex(self.navigator.current_entry())
    }

    pub fn image_url(&self) -> Option<&str> {
        self.overlay.url()
    }

    pub fn image_term(&self) -> Option<&str> {
        self.overlay.term()
    }

    pub fn language(&self) -> Language {
        self.navigator.language()
    }

    pub fn item_length(&self) -> ItemLength {
        self.navigator.item_length()
    }

    pub fn case_mode(&self) -> CaseMode {
        self.navigator.case_mode()
    }

    pub fn is_rtl(&self) -> bool {
        self.navigator.language().is_rtl()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    pub fn is_audio_enabled(&self) -> bool {
        self.prefs.audio_enabled
    }

    pub fn zoom_level(&self) -> f32 {
        self.prefs.zoom_level
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }
}

impl App for FlashcardApp {
    fn config(&self) -> AppConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut AppContext) {
        log::info!(
            "flashcards ready: {} {} ({} cards)",
            self.navigator.language(),
            self.navigator.item_length().label(),
            self.navigator.len()
        );
        ctx.emit_event(AppEvent::new(
            EVENT_DATASET_CHANGED,
            self.navigator.language().index() as f32,
            self.navigator.item_length().get() as f32,
            self.navigator.len() as f32,
        ));
        ctx.emit_event(AppEvent::new(
            EVENT_ITEM_CHANGED,
            self.navigator.current_index() as f32,
            self.navigator.len() as f32,
            0.0,
        ));
    }

    fn handle_input(&mut self, ctx: &mut AppContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle_event(ctx, event);
        }
    }

    fn update(&mut self, ctx: &mut AppContext, dt: f32) {
        if let Some(Gesture::LongPress(_)) = self.pointer.tick(dt) {
            self.handle_intent(ctx, Intent::ToggleCase);
        }
        if let Some(remaining) = self.celebration.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.celebration = None;
                ctx.emit_event(AppEvent::bare(EVENT_CELEBRATION_ENDED));
            }
        }
    }
}

fn bool_flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Snap to hundredths so repeated steps don't drift.
fn round_zoom(z: f32) -> f32 {
    (z * 100.0).round() / 100.0
}
