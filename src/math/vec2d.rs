// src/math/vec2d.rs

use crate::types::Vec2d;

impl Vec2d {
  /// Creates a vector from its components.
  #[inline]
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Calculates the magnitude of a 2D Cartesian vector.
#[inline]
#[must_use]
pub(crate) fn v2d_mag(v: &Vec2d) -> f64 {
  (v.x * v.x + v.y * v.y).sqrt()
}
