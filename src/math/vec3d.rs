// src/math/vec3d.rs

use crate::types::{LatLng, Vec3d};

/// Square of a number.
#[inline]
fn square(x: f64) -> f64 {
  x * x
}

impl Vec3d {
  /// Creates a vector from its components.
  #[inline]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }
}

/// Dot product.
#[inline]
#[must_use]
pub(crate) fn v3d_dot(a: &Vec3d, b: &Vec3d) -> f64 {
  a.x * b.x + a.y * b.y + a.z * b.z
}

/// Cross product `a x b`.
#[inline]
#[must_use]
pub(crate) fn v3d_cross(a: &Vec3d, b: &Vec3d) -> Vec3d {
  Vec3d {
    x: a.y * b.z - a.z * b.y,
    y: a.z * b.x - a.x * b.z,
    z: a.x * b.y - a.y * b.x,
  }
}

/// Component-wise sum.
#[inline]
#[must_use]
pub(crate) fn v3d_add(a: &Vec3d, b: &Vec3d) -> Vec3d {
  Vec3d {
    x: a.x + b.x,
    y: a.y + b.y,
    z: a.z + b.z,
  }
}

/// Component-wise difference `a - b`.
#[inline]
#[must_use]
pub(crate) fn v3d_sub(a: &Vec3d, b: &Vec3d) -> Vec3d {
  Vec3d {
    x: a.x - b.x,
    y: a.y - b.y,
    z: a.z - b.z,
  }
}

/// Uniform scale.
#[inline]
#[must_use]
pub(crate) fn v3d_scale(v: &Vec3d, s: f64) -> Vec3d {
  Vec3d {
    x: v.x * s,
    y: v.y * s,
    z: v.z * s,
  }
}

/// Euclidean length.
#[inline]
#[must_use]
pub(crate) fn v3d_mag(v: &Vec3d) -> f64 {
  v3d_dot(v, v).sqrt()
}

/// Scales `v` onto the unit sphere.
///
/// Returns `None` for non-finite or zero-length input.
#[inline]
#[must_use]
pub(crate) fn v3d_normalize(v: &Vec3d) -> Option<Vec3d> {
  if !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()) {
    return None;
  }
  let mag = v3d_mag(v);
  if !mag.is_finite() || mag == 0.0 {
    return None;
  }
  Some(v3d_scale(v, 1.0 / mag))
}

/// Calculate the square of the Euclidean distance between two 3D coordinates.
#[inline]
#[must_use]
pub(crate) fn point_square_dist(v1: &Vec3d, v2: &Vec3d) -> f64 {
  square(v1.x - v2.x) + square(v1.y - v2.y) + square(v1.z - v2.z)
}

/// Calculate the 3D Cartesian coordinate on a unit sphere from latitude and longitude.
///
/// Latitudes outside `[-PI/2, PI/2]` are not rejected: the trigonometry carries
/// them over the pole onto the opposite meridian.
#[inline]
#[must_use]
pub(crate) fn geo_to_vec3d(geo: &LatLng) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d {
    x: geo.lng.cos() * r,
    y: geo.lng.sin() * r,
    z: geo.lat.sin(),
  }
}

/// Latitude and longitude of the direction of `v`. Longitude is in `[-PI, PI]`.
#[inline]
#[must_use]
pub(crate) fn vec3d_to_geo(v: &Vec3d) -> LatLng {
  let horizontal = (v.x * v.x + v.y * v.y).sqrt();
  LatLng {
    lat: v.z.atan2(horizontal),
    lng: v.y.atan2(v.x),
  }
}
