//! Transform component
//!
//! World placement for 2D entities: position plus rotation in degrees.
//! Movement integrates directly into this, either along the world axes or
//! along the entity's own rotated basis.

use serde::{Serialize, Deserialize};
use crate::math::Vec2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform2D {
    pub position: Vec2,
    /// Rotation around the view axis, counter-clockwise degrees
    pub rotation: f32,
}

impl Transform2D {
    /// Origin, no rotation
    pub const IDENTITY: Transform2D = Transform2D {
        position: Vec2::ZERO,
        rotation: 0.0,
    };

    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
        }
    }

    pub fn from_position_rotation(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Move by a world-space offset.
    pub fn translate(&mut self, offset: Vec2) {
        self.position = self.position + offset;
    }

    /// Local +X axis in world space.
    pub fn right(&self) -> Vec2 {
        let rad = self.rotation.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }

    /// Local +Y axis in world space.
    pub fn up(&self) -> Vec2 {
        let rad = self.rotation.to_radians();
        Vec2::new(-rad.sin(), rad.cos())
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_accumulates() {
        let mut t = Transform2D::from_position(Vec2::new(10.0, 20.0));
        t.translate(Vec2::new(5.0, -5.0));
        t.translate(Vec2::new(1.0, 1.0));
        assert!((t.position.x - 16.0).abs() < 0.001);
        assert!((t.position.y - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_axes_unrotated() {
        let t = Transform2D::IDENTITY;
        let r = t.right();
        let u = t.up();
        assert!((r.x - 1.0).abs() < 0.001 && r.y.abs() < 0.001);
        assert!(u.x.abs() < 0.001 && (u.y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_axes_rotated_quarter_turn() {
        let t = Transform2D::from_position_rotation(Vec2::ZERO, 90.0);
        let r = t.right();
        let u = t.up();
        // Right now points along world +Y, up along world -X
        assert!(r.x.abs() < 0.001 && (r.y - 1.0).abs() < 0.001);
        assert!((u.x + 1.0).abs() < 0.001 && u.y.abs() < 0.001);
    }
}
