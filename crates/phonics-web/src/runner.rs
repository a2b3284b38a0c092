use phonics_core::{App, AppConfig, AppContext, AppEvent, FixedTimestep, InputEvent, InputQueue};

/// Drives an [`App`] from browser frames.
///
/// `lib.rs` keeps one of these in a `thread_local!` and exposes free
/// functions through `#[wasm_bindgen]`, since generic structs cannot be
/// exported directly.
///
/// Events and sounds emitted between frames (during `init`, say) are
/// delivered with the next frame rather than cleared by it.
pub struct AppRunner<A: App> {
    app: A,
    ctx: AppContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: AppConfig,
    initialized: bool,
    /// Set once a frame's outputs have been handed to JS.
    delivered: bool,
    /// Sound ids packed one byte each.
    sound_buffer: Vec<u8>,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        Self::with_config(app, config)
    }

    /// Like [`AppRunner::new`] but with a caller-chosen confetti seed.
    pub fn with_seed(app: A, seed: u64) -> Self {
        let config = AppConfig {
            seed,
            ..app.config()
        };
        Self::with_config(app, config)
    }

    fn with_config(app: A, config: AppConfig) -> Self {
        Self {
            ctx: AppContext::new(&config),
            input: InputQueue::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            initialized: false,
            delivered: false,
            app,
            config,
        }
    }

    pub fn init(&mut self) {
        self.app.init(&mut self.ctx);
        self.initialized = true;
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// One browser frame: input once, then as many fixed steps as are due.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }
        if self.delivered {
            self.ctx.clear_frame_data();
        }

        self.app.handle_input(&mut self.ctx, &self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(dt);
        let step_dt = self.timestep.dt();
        for _ in 0..steps {
            self.app.update(&mut self.ctx, step_dt);
            self.ctx.effects.tick(step_dt);
        }

        self.ctx.effects.rebuild_buffer();

        self.sound_buffer.clear();
        self.sound_buffer
            .extend(self.ctx.sounds.iter().map(|s| s.0 as u8));
        self.delivered = true;
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn events(&self) -> &[AppEvent] {
        &self.ctx.events
    }

    pub fn events_ptr(&self) -> *const f32 {
        let floats: &[f32] = bytemuck::cast_slice(&self.ctx.events);
        floats.as_ptr()
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn confetti_ptr(&self) -> *const f32 {
        self.ctx.effects.buffer_ptr()
    }

    pub fn confetti_count(&self) -> u32 {
        self.ctx.effects.instance_count()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.config.max_sounds as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonics_core::api::types::{EVENT_DATASET_CHANGED, EVENT_ITEM_CHANGED};
    use phonics_core::input::keymap::{KEY_ENTER, KEY_RIGHT};
    use phonics_core::{FlashcardApp, MemoryStore};

    fn runner() -> AppRunner<FlashcardApp> {
        let app = FlashcardApp::new(Box::new(MemoryStore::new()));
        let mut runner = AppRunner::with_seed(app, 7);
        runner.init();
        runner
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let app = FlashcardApp::new(Box::new(MemoryStore::new()));
        let mut runner = AppRunner::new(app);
        runner.push_input(InputEvent::KeyDown { key_code: KEY_RIGHT });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.app().navigator().current_index(), 0);
    }

    #[test]
    fn init_events_survive_first_frame() {
        let mut runner = runner();
        runner.tick(1.0 / 60.0);
        let kinds: Vec<u32> = runner.events().iter().map(AppEvent::kind).collect();
        assert_eq!(kinds, vec![EVENT_DATASET_CHANGED, EVENT_ITEM_CHANGED]);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.events_len(), 0);
    }

    #[test]
    fn input_is_applied_once_per_frame() {
        let mut runner = runner();
        runner.tick(1.0 / 60.0);
        runner.push_input(InputEvent::KeyDown { key_code: KEY_RIGHT });
        // Several fixed steps are due, the key press still counts once.
        runner.tick(4.0 / 60.0);
        assert_eq!(runner.app().navigator().current_index(), 1);
        assert_eq!(runner.sound_events_len(), 1);
    }

    #[test]
    fn celebration_fills_confetti_buffer() {
        let mut runner = runner();
        runner.push_input(InputEvent::KeyDown { key_code: KEY_ENTER });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.confetti_count(), 100);
        for _ in 0..240 {
            runner.tick(1.0 / 60.0);
        }
        assert_eq!(runner.confetti_count(), 0);
    }
}
