//! Celebration confetti.
//!
//! `EffectsState` owns live pieces and a flat instance buffer that the
//! front end reads straight out of wasm memory each frame.

mod particle;
mod rng;

pub use particle::{ConfettiInstance, ConfettiPiece};
pub use rng::Rng;

use glam::Vec2;

/// Confetti colours, as linear 0..1 RGB.
pub const CONFETTI_PALETTE: [[f32; 3]; 7] = [
    rgb(0xff, 0x6b, 0x6b),
    rgb(0x4e, 0xcd, 0xc4),
    rgb(0x45, 0xb7, 0xd1),
    rgb(0x96, 0xce, 0xb4),
    rgb(0xfe, 0xca, 0x57),
    rgb(0xff, 0x9f, 0xf3),
    rgb(0x54, 0xa0, 0xff),
];

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Shape of one burst.
#[derive(Debug, Clone, Copy)]
pub struct BurstConfig {
    pub count: usize,
    pub distance: (f32, f32),
    pub size: (f32, f32),
    pub duration: (f32, f32),
    pub fall: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 100,
            distance: (200.0, 500.0),
            size: (10.0, 25.0),
            duration: (1.0, 2.5),
            fall: 400.0,
        }
    }
}

pub struct EffectsState {
    pub confetti: Vec<ConfettiPiece>,
    pub buffer: Vec<ConfettiInstance>,
    pub rng: Rng,
    pub burst: BurstConfig,
}

impl EffectsState {
    pub fn new(seed: u64, burst: BurstConfig) -> Self {
        Self {
            confetti: Vec::with_capacity(burst.count),
            buffer: Vec::with_capacity(burst.count),
            rng: Rng::new(seed),
            burst,
        }
    }

    /// Spawn a burst evenly spread around `center`.
    pub fn spawn_burst(&mut self, center: Vec2) {
        let cfg = self.burst;
        for i in 0..cfg.count {
            let angle = std::f32::consts::TAU * i as f32 / cfg.count as f32;
            let color_idx = self.rng.next_int(CONFETTI_PALETTE.len() as u32) as usize;
            self.confetti.push(ConfettiPiece {
                origin: center,
                direction: Vec2::from_angle(angle),
                distance: self.rng.range(cfg.distance.0, cfg.distance.1),
                fall: cfg.fall,
                size: self.rng.range(cfg.size.0, cfg.size.1),
                color: CONFETTI_PALETTE[color_idx],
                round: self.rng.coin(),
                spin: self.rng.range(0.0, std::f32::consts::TAU),
                duration: self.rng.range(cfg.duration.0, cfg.duration.1),
                age: 0.0,
            });
        }
        log::debug!("confetti burst: {} pieces live", self.confetti.len());
    }

    /// Age every piece and drop the expired ones.
    pub fn tick(&mut self, dt: f32) {
        self.confetti.retain_mut(|p| p.tick(dt));
    }

    /// Refresh the flat buffer from live pieces.
    pub fn rebuild_buffer(&mut self) {
        self.buffer.clear();
        self.buffer.extend(self.confetti.iter().map(ConfettiPiece::to_instance));
    }

    pub fn clear(&mut self) {
        self.confetti.clear();
        self.buffer.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.confetti.is_empty()
    }

    pub fn buffer_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.buffer)
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer_floats().as_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.buffer.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects() -> EffectsState {
        EffectsState::new(42, BurstConfig::default())
    }

    #[test]
    fn burst_spawns_configured_count() {
        let mut fx = effects();
        fx.spawn_burst(Vec2::new(400.0, 300.0));
        assert_eq!(fx.confetti.len(), 100);
        assert!(fx.is_active());
        for p in &fx.confetti {
            assert!(p.distance >= 200.0 && p.distance <= 500.0);
            assert!(p.duration >= 1.0 && p.duration <= 2.5);
        }
    }

    #[test]
    fn pieces_spread_around_circle() {
        let mut fx = effects();
        fx.spawn_burst(Vec2::ZERO);
        let first = fx.confetti[0].direction;
        let half = fx.confetti[50].direction;
        assert!((first + half).length() < 1e-4, "opposite pieces should cancel");
    }

    #[test]
    fn all_pieces_expire() {
        let mut fx = effects();
        fx.spawn_burst(Vec2::ZERO);
        for _ in 0..200 {
            fx.tick(1.0 / 60.0);
        }
        assert!(!fx.is_active());
    }

    #[test]
    fn buffer_is_flat_floats() {
        let mut fx = effects();
        fx.spawn_burst(Vec2::ZERO);
        fx.rebuild_buffer();
        assert_eq!(fx.instance_count(), 100);
        assert_eq!(fx.buffer_floats().len(), 100 * ConfettiInstance::FLOATS);
        fx.clear();
        assert_eq!(fx.instance_count(), 0);
    }
}
