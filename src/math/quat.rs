// src/math/quat.rs

use crate::types::Vec3d;
use glam::{DMat3, DQuat, DVec3};

impl From<Vec3d> for DVec3 {
  #[inline]
  fn from(v: Vec3d) -> Self {
    DVec3::new(v.x, v.y, v.z)
  }
}

impl From<DVec3> for Vec3d {
  #[inline]
  fn from(v: DVec3) -> Self {
    Vec3d::new(v.x, v.y, v.z)
  }
}

/// Unit quaternion taking the right-handed orthonormal frame `(ex, ey, ez)` onto
/// the global `(X, Y, Z)` axes.
#[must_use]
pub(crate) fn frame_to_axes(ex: &Vec3d, ey: &Vec3d, ez: &Vec3d) -> DQuat {
  // rows of the rotation are the frame axes
  let m = DMat3::from_cols((*ex).into(), (*ey).into(), (*ez).into()).transpose();
  DQuat::from_mat3(&m).normalize()
}

/// Rotates `v` by `q`.
#[inline]
#[must_use]
pub(crate) fn rotate(q: &DQuat, v: &Vec3d) -> Vec3d {
  q.mul_vec3((*v).into()).into()
}

/// Rotates `v` by the inverse of the unit quaternion `q`.
#[inline]
#[must_use]
pub(crate) fn rotate_inverse(q: &DQuat, v: &Vec3d) -> Vec3d {
  q.conjugate().mul_vec3((*v).into()).into()
}
