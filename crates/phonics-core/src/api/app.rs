use glam::Vec2;

use crate::api::types::{AppEvent, SoundEvent};
use crate::effects::{BurstConfig, EffectsState};
use crate::input::InputQueue;

/// Runtime knobs, returned by the app before init.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed step in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Logical stage size that pointer coordinates are expressed in.
    pub world_width: f32,
    pub world_height: f32,
    pub burst: BurstConfig,
    /// How long a celebration lasts before CELEBRATION_ENDED.
    pub celebration_secs: f32,
    /// Hold time before a press becomes a long press.
    pub long_press_secs: f32,
    /// Pointer travel that turns a press into a drag.
    pub tap_slop: f32,
    /// Left share of the stage that means "previous".
    pub prev_fraction: f32,
    /// Half size of the centred card.
    pub card_half_width: f32,
    pub card_half_height: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_step: f32,
    /// Per-frame caps on the outbound buffers.
    pub max_events: usize,
    pub max_sounds: usize,
    /// Confetti RNG seed. The web bridge replaces it with the clock.
    pub seed: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            burst: BurstConfig::default(),
            celebration_secs: 2.0,
            long_press_secs: 0.6,
            tap_slop: 12.0,
            prev_fraction: 0.4,
            card_half_width: 200.0,
            card_half_height: 150.0,
            min_zoom: 0.5,
            max_zoom: 3.0,
            zoom_step: 0.1,
            max_events: 32,
            max_sounds: 8,
            seed: 42,
        }
    }
}

impl AppConfig {
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    pub fn stage_center(&self) -> Vec2 {
        self.world_size() * 0.5
    }
}

/// What an application built on the runner has to provide.
pub trait App {
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Called once before the first frame.
    fn init(&mut self, ctx: &mut AppContext);

    /// Consume this frame's input. Runs once per frame, before any step.
    fn handle_input(&mut self, ctx: &mut AppContext, input: &InputQueue);

    /// Advance timers by one fixed step.
    fn update(&mut self, ctx: &mut AppContext, dt: f32);
}

/// Mutable per-frame state shared between the runner and the app.
pub struct AppContext {
    pub effects: EffectsState,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<AppEvent>,
    max_events: usize,
    max_sounds: usize,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            effects: EffectsState::new(config.seed, config.burst),
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            max_events: config.max_events,
            max_sounds: config.max_sounds,
        }
    }

    pub fn emit_sound(&mut self, sound: SoundEvent) {
        if self.sounds.len() >= self.max_sounds {
            log::warn!("sound buffer full, dropping {sound:?}");
            return;
        }
        self.sounds.push(sound);
    }

    pub fn emit_event(&mut self, event: AppEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full, dropping kind {}", event.kind());
            return;
        }
        self.events.push(event);
    }

    /// Forget last frame's sounds and events.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    pub fn has_event(&self, kind: u32) -> bool {
        self.events.iter().any(|e| e.kind() == kind)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EVENT_SPEAK;

    #[test]
    fn outbound_buffers_are_capped() {
        let config = AppConfig {
            max_events: 2,
            max_sounds: 1,
            ..AppConfig::default()
        };
        let mut ctx = AppContext::new(&config);
        for _ in 0..5 {
            ctx.emit_event(AppEvent::bare(EVENT_SPEAK));
            ctx.emit_sound(SoundEvent::FLIP);
        }
        assert_eq!(ctx.events.len(), 2);
        assert_eq!(ctx.sounds.len(), 1);
        assert!(ctx.has_event(EVENT_SPEAK));
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty() && ctx.sounds.is_empty());
    }
}
