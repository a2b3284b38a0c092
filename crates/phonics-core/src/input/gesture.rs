use glam::Vec2;

use super::intent::Intent;

/// A completed pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap(Vec2),
    LongPress(Vec2),
}

/// Screen regions that taps are classified into.
#[derive(Debug, Clone, Copy)]
pub struct ZoneLayout {
    pub world_size: Vec2,
    /// Fraction of the width, from the left edge, that means "previous".
    pub prev_fraction: f32,
    /// Half extents of the centred card; taps inside it cycle rhymes.
    pub card_half_extents: Vec2,
}

impl ZoneLayout {
    pub fn classify_tap(&self, pos: Vec2) -> Intent {
        let center = self.world_size * 0.5;
        let offset = (pos - center).abs();
        if offset.x <= self.card_half_extents.x && offset.y <= self.card_half_extents.y {
            Intent::CycleRhyme
        } else if pos.x < self.world_size.x * self.prev_fraction {
            Intent::Prev
        } else {
            Intent::Next
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Vec2,
    held: f32,
    moved: bool,
    fired: bool,
}

/// Turns pointer down/move/up plus elapsed time into taps and long presses.
///
/// A long press fires while the pointer is still held, so the release
/// that follows produces nothing. Moving further than `slop` from the
/// press origin cancels both.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    press: Option<Press>,
    long_press_secs: f32,
    slop: f32,
}

impl PointerTracker {
    pub fn new(long_press_secs: f32, slop: f32) -> Self {
        Self {
            press: None,
            long_press_secs,
            slop,
        }
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        self.press = Some(Press {
            origin: pos,
            held: 0.0,
            moved: false,
            fired: false,
        });
    }

    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if let Some(press) = &mut self.press {
            if pos.distance(press.origin) > self.slop {
                press.moved = true;
            }
        }
    }

    pub fn on_pointer_up(&mut self, pos: Vec2) -> Option<Gesture> {
        let press = self.press.take()?;
        if press.fired || press.moved || pos.distance(press.origin) > self.slop {
            return None;
        }
        Some(Gesture::Tap(press.origin))
    }

    /// Advance the hold timer. Returns a long press the moment it triggers.
    pub fn tick(&mut self, dt: f32) -> Option<Gesture> {
        let press = self.press.as_mut()?;
        if press.fired || press.moved {
            return None;
        }
        press.held += dt;
        if press.held >= self.long_press_secs {
            press.fired = true;
            return Some(Gesture::LongPress(press.origin));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ZoneLayout {
        ZoneLayout {
            world_size: Vec2::new(800.0, 600.0),
            prev_fraction: 0.4,
            card_half_extents: Vec2::new(150.0, 120.0),
        }
    }

    #[test]
    fn tap_zones() {
        let l = layout();
        assert_eq!(l.classify_tap(Vec2::new(400.0, 300.0)), Intent::CycleRhyme);
        assert_eq!(l.classify_tap(Vec2::new(100.0, 300.0)), Intent::Prev);
        assert_eq!(l.classify_tap(Vec2::new(319.0, 50.0)), Intent::Prev);
        assert_eq!(l.classify_tap(Vec2::new(321.0, 50.0)), Intent::Next);
        assert_eq!(l.classify_tap(Vec2::new(700.0, 300.0)), Intent::Next);
    }

    #[test]
    fn quick_release_is_tap() {
        let mut t = PointerTracker::new(0.5, 10.0);
        t.on_pointer_down(Vec2::new(50.0, 50.0));
        assert!(t.tick(0.1).is_none());
        assert_eq!(
            t.on_pointer_up(Vec2::new(52.0, 51.0)),
            Some(Gesture::Tap(Vec2::new(50.0, 50.0)))
        );
        // The press is consumed; a second release is not another tap.
        assert!(t.on_pointer_up(Vec2::new(52.0, 51.0)).is_none());
    }

    #[test]
    fn hold_fires_long_press_once() {
        let mut t = PointerTracker::new(0.5, 10.0);
        t.on_pointer_down(Vec2::new(50.0, 50.0));
        assert!(t.tick(0.3).is_none());
        assert_eq!(t.tick(0.3), Some(Gesture::LongPress(Vec2::new(50.0, 50.0))));
        assert!(t.tick(0.3).is_none());
        assert!(t.on_pointer_up(Vec2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn drag_cancels() {
        let mut t = PointerTracker::new(0.5, 10.0);
        t.on_pointer_down(Vec2::new(50.0, 50.0));
        t.on_pointer_move(Vec2::new(90.0, 50.0));
        assert!(t.tick(1.0).is_none());
        assert!(t.on_pointer_up(Vec2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn up_without_down_is_ignored() {
        let mut t = PointerTracker::new(0.5, 10.0);
        assert!(t.on_pointer_up(Vec2::ZERO).is_none());
    }
}
