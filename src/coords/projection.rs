// src/coords/projection.rs

use crate::math::quat::{frame_to_axes, rotate, rotate_inverse};
use crate::math::vec2d::v2d_mag;
use crate::math::vec3d::{v3d_add, v3d_cross, v3d_dot, v3d_mag, v3d_normalize, v3d_scale, v3d_sub};
use crate::types::{RotationMethod, Vec2d, Vec3d};
use glam::DQuat;

/// Face-local planar frame of one icosahedron face.
///
/// `center` is the normalised vertex sum, `ex` points from the center towards
/// the face's first vertex and `ey = center x ex`. Corners are the planar images
/// of the three face vertices under each rotation method.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceFrame {
  pub(crate) center: Vec3d,
  pub(crate) ex: Vec3d,
  pub(crate) ey: Vec3d,
  quat: DQuat,
  gnomonic_corners: [Vec2d; 3],
  quaternion_corners: [Vec2d; 3],
}

/// Unit vector along `v`, for inputs known to be non-degenerate.
#[inline]
fn unit(v: &Vec3d) -> Vec3d {
  v3d_scale(v, 1.0 / v3d_mag(v))
}

impl FaceFrame {
  /// Builds the frame of the face `(a, b, c)`; the vertices are unit vectors.
  pub(crate) fn new(a: &Vec3d, b: &Vec3d, c: &Vec3d) -> Self {
    let center = unit(&v3d_add(&v3d_add(a, b), c));
    // a lifted onto the tangent plane, minus the tangent point
    let ex = unit(&v3d_sub(&v3d_scale(a, 1.0 / v3d_dot(a, &center)), &center));
    let ey = v3d_cross(&center, &ex);
    let quat = frame_to_axes(&ex, &ey, &center);

    let mut frame = Self {
      center,
      ex,
      ey,
      quat,
      gnomonic_corners: [Vec2d::default(); 3],
      quaternion_corners: [Vec2d::default(); 3],
    };
    for (i, v) in [a, b, c].into_iter().enumerate() {
      // face vertices sit in front of their own face, so projection is total here
      frame.gnomonic_corners[i] = frame.gnomonic(v).unwrap_or_default();
      frame.quaternion_corners[i] = frame.quaternion(v).unwrap_or_default();
    }
    frame
  }

  /// Planar images of the face vertices, in face vertex order.
  #[inline]
  pub(crate) fn corners(&self, rm: RotationMethod) -> &[Vec2d; 3] {
    match rm {
      RotationMethod::Gnomonic => &self.gnomonic_corners,
      RotationMethod::Quaternion => &self.quaternion_corners,
    }
  }

  /// Projects `p` onto the face plane.
  ///
  /// Returns `None` when `p` is not in front of the face (no planar image).
  #[inline]
  pub(crate) fn project(&self, rm: RotationMethod, p: &Vec3d) -> Option<Vec2d> {
    match rm {
      RotationMethod::Gnomonic => self.gnomonic(p),
      RotationMethod::Quaternion => self.quaternion(p),
    }
  }

  /// Inverse of [`FaceFrame::project`]: a unit vector on the sphere.
  #[inline]
  pub(crate) fn unproject(&self, rm: RotationMethod, uv: &Vec2d) -> Option<Vec3d> {
    match rm {
      RotationMethod::Gnomonic => self.inverse_gnomonic(uv),
      RotationMethod::Quaternion => self.inverse_quaternion(uv),
    }
  }

  fn gnomonic(&self, p: &Vec3d) -> Option<Vec2d> {
    let d = v3d_dot(p, &self.center);
    if d <= 0.0 || !d.is_finite() {
      return None;
    }
    let q = v3d_scale(p, 1.0 / d);
    Some(Vec2d::new(v3d_dot(&q, &self.ex), v3d_dot(&q, &self.ey)))
  }

  fn inverse_gnomonic(&self, uv: &Vec2d) -> Option<Vec3d> {
    let q = v3d_add(
      &self.center,
      &v3d_add(&v3d_scale(&self.ex, uv.x), &v3d_scale(&self.ey, uv.y)),
    );
    v3d_normalize(&q)
  }

  /// Rotation into the face frame, then Lambert azimuthal equal-area about +Z.
  fn quaternion(&self, p: &Vec3d) -> Option<Vec2d> {
    let r = rotate(&self.quat, &v3d_normalize(p)?);
    if r.z <= -1.0 {
      return None;
    }
    let k = (2.0 / (1.0 + r.z)).sqrt();
    Some(Vec2d::new(k * r.x, k * r.y))
  }

  fn inverse_quaternion(&self, uv: &Vec2d) -> Option<Vec3d> {
    // the equal-area disc has radius 2
    let r = v2d_mag(uv);
    if !(0.0..=2.0).contains(&r) {
      return None;
    }
    let r2 = r * r;
    let t = (1.0 - r2 / 4.0).sqrt();
    let r = Vec3d::new(uv.x * t, uv.y * t, 1.0 - r2 / 2.0);
    v3d_normalize(&rotate_inverse(&self.quat, &r))
  }
}

/// Barycentric weights of `uv` against the triangle `corners`.
#[must_use]
pub(crate) fn barycentric(corners: &[Vec2d; 3], uv: &Vec2d) -> [f64; 3] {
  let [a, b, c] = corners;
  let det = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
  let l1 = ((b.y - c.y) * (uv.x - c.x) + (c.x - b.x) * (uv.y - c.y)) / det;
  let l2 = ((c.y - a.y) * (uv.x - c.x) + (a.x - c.x) * (uv.y - c.y)) / det;
  [l1, l2, 1.0 - l1 - l2]
}
