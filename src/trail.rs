//! Pointer-trail sprite field: every pointer move spawns a sprite that
//! grows in and fades out over subsequent ticks. Fully deterministic given
//! the spawn sequence; which artwork a sprite shows is the view's concern.

use crate::foundation::core::Point;

const FADE_STEP: f64 = 0.02;
const GROW_STEP: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TrailSprite {
    pub id: u64,
    pub position: Point,
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Debug, Default)]
pub struct TrailField {
    sprites: Vec<TrailSprite>,
    next_id: u64,
}

impl TrailField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a sprite at the pointer position: full opacity, zero scale.
    pub fn spawn(&mut self, x: f64, y: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.sprites.push(TrailSprite {
            id,
            position: Point::new(x, y),
            opacity: 1.0,
            scale: 0.0,
        });
        id
    }

    /// One animation-frame tick: fade everything a little, grow toward full
    /// scale, and drop sprites that have faded out.
    pub fn step(&mut self) {
        for sprite in &mut self.sprites {
            sprite.opacity = (sprite.opacity - FADE_STEP).max(0.0);
            sprite.scale = (sprite.scale + GROW_STEP).min(1.0);
        }
        self.sprites.retain(|s| s.opacity > 0.0);
    }

    pub fn sprites(&self) -> &[TrailSprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprites_grow_in_and_fade_out() {
        let mut field = TrailField::new();
        field.spawn(10.0, 20.0);
        field.step();
        let s = field.sprites()[0];
        assert!((s.opacity - 0.98).abs() < 1e-12);
        assert!((s.scale - 0.05).abs() < 1e-12);
    }

    #[test]
    fn scale_caps_at_one() {
        let mut field = TrailField::new();
        field.spawn(0.0, 0.0);
        for _ in 0..30 {
            field.step();
        }
        assert_eq!(field.sprites()[0].scale, 1.0);
    }

    #[test]
    fn faded_sprites_are_pruned() {
        let mut field = TrailField::new();
        field.spawn(0.0, 0.0);
        // 1.0 / 0.02 = 50 ticks to fade out; allow slack for float drift.
        for _ in 0..60 {
            field.step();
        }
        assert!(field.is_empty());
    }

    #[test]
    fn spawn_order_is_preserved_and_ids_are_unique() {
        let mut field = TrailField::new();
        let a = field.spawn(1.0, 1.0);
        field.step();
        let b = field.spawn(2.0, 2.0);
        assert_ne!(a, b);
        assert_eq!(field.len(), 2);
        // The older sprite has faded further.
        assert!(field.sprites()[0].opacity < field.sprites()[1].opacity);
    }
}
