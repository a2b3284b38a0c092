//! A single confetti piece and its flat render form.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// One confetti piece as the front end draws it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ConfettiInstance {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotation: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    /// 1.0 for a disc, 0.0 for a square.
    pub round: f32,
}

impl ConfettiInstance {
    pub const FLOATS: usize = 9;
}

/// A piece flung out from a burst origin.
///
/// Motion is keyed on normalised age with an ease-out curve: it travels
/// `distance` along `direction` while drifting `fall` units downward,
/// spinning two full turns, shrinking to half size and fading out.
#[derive(Debug, Clone)]
pub struct ConfettiPiece {
    pub origin: Vec2,
    pub direction: Vec2,
    pub distance: f32,
    pub fall: f32,
    pub size: f32,
    pub color: [f32; 3],
    pub round: bool,
    pub spin: f32,
    pub duration: f32,
    pub age: f32,
}

impl ConfettiPiece {
    /// Advance by `dt` seconds. Returns false once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.age += dt;
        self.age < self.duration
    }

    /// Normalised age in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.age / self.duration).clamp(0.0, 1.0)
    }

    fn eased(&self) -> f32 {
        let inv = 1.0 - self.progress();
        1.0 - inv * inv
    }

    pub fn position(&self) -> Vec2 {
        let t = self.eased();
        self.origin + self.direction * self.distance * t + Vec2::new(0.0, self.fall * t)
    }

    pub fn to_instance(&self) -> ConfettiInstance {
        let t = self.eased();
        let pos = self.position();
        ConfettiInstance {
            x: pos.x,
            y: pos.y,
            size: self.size * (1.0 - 0.5 * t),
            rotation: self.spin + std::f32::consts::TAU * 2.0 * t,
            r: self.color[0],
            g: self.color[1],
            b: self.color[2],
            alpha: 1.0 - t,
            round: if self.round { 1.0 } else { 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece() -> ConfettiPiece {
        ConfettiPiece {
            origin: Vec2::new(400.0, 300.0),
            direction: Vec2::X,
            distance: 200.0,
            fall: 400.0,
            size: 20.0,
            color: [1.0, 0.0, 0.0],
            round: true,
            spin: 0.0,
            duration: 1.0,
            age: 0.0,
        }
    }

    #[test]
    fn expires_after_duration() {
        let mut p = piece();
        assert!(p.tick(0.5));
        assert!(!p.tick(0.6));
    }

    #[test]
    fn starts_at_origin_fully_visible() {
        let inst = piece().to_instance();
        assert_eq!((inst.x, inst.y), (400.0, 300.0));
        assert_eq!(inst.alpha, 1.0);
        assert_eq!(inst.size, 20.0);
        assert_eq!(inst.round, 1.0);
    }

    #[test]
    fn ends_out_and_down_faded_half_size() {
        let mut p = piece();
        p.tick(1.0);
        let inst = p.to_instance();
        assert!((inst.x - 600.0).abs() < 1e-3);
        assert!((inst.y - 700.0).abs() < 1e-3);
        assert!(inst.alpha.abs() < 1e-6);
        assert!((inst.size - 10.0).abs() < 1e-4);
    }

    #[test]
    fn ease_out_front_loads_motion() {
        let mut p = piece();
        p.tick(0.5);
        // Halfway through life, three quarters of the way there.
        assert!((p.position().x - 550.0).abs() < 1e-3);
    }
}
