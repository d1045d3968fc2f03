// src/icosahedron.rs

use crate::backend::{backend, try_backend};
use crate::constants::{FACE_EPSILON, MAX_RES, NUM_ICOSA_FACES};
use crate::coords::icosa::IcosaModel;
use crate::latlng;
use crate::math::vec3d::v3d_normalize;
use crate::types::{GeocombError, HashProperties, MapOrientation, Point3, RotationMethod};

/// A geocomb engine bound to one map orientation and rotation method.
///
/// Engines borrow the process-wide tables, hold no other state and are cheap to
/// copy and share between threads.
#[derive(Debug, Clone, Copy)]
pub struct Icosahedron {
  mo: MapOrientation,
  rm: RotationMethod,
  pub(crate) model: &'static IcosaModel,
}

impl Icosahedron {
  /// Creates an engine. Fails with [`GeocombError::NotReady`] until [`crate::ready`] has run.
  pub fn new(mo: MapOrientation, rm: RotationMethod) -> Result<Self, GeocombError> {
    let backend = try_backend().ok_or(GeocombError::NotReady)?;
    Ok(Self {
      mo,
      rm,
      model: backend.model(mo),
    })
  }

  /// Waits for the backend (initialising it if needed), then creates an engine.
  pub fn on_ready(mo: MapOrientation, rm: RotationMethod) -> Result<Self, GeocombError> {
    backend();
    Self::new(mo, rm)
  }

  /// Map orientation of the engine.
  pub const fn mo(&self) -> MapOrientation {
    self.mo
  }

  /// Rotation method of the engine.
  pub const fn rm(&self) -> RotationMethod {
    self.rm
  }

  /// Unresolved point on the unit sphere from latitude and longitude in degrees.
  pub fn point_from_coords(&self, lat_deg: f64, lng_deg: f64) -> Point3 {
    latlng::point_from_coords(lat_deg, lng_deg)
  }

  /// Resolves `p` against this engine's icosahedron: the returned point is on
  /// the unit sphere with `tri_num` and `is_pc` filled in.
  pub fn resolve(&self, p: &Point3) -> Result<Point3, GeocombError> {
    let v = v3d_normalize(&p.to_vec3d()).ok_or(GeocombError::UnresolvablePoint)?;
    let face = self.model.resolve_face(&v)?;
    Ok(Point3 {
      x: v.x,
      y: v.y,
      z: v.z,
      tri_num: face as i32,
      is_pc: self.model.vertex_at(&v).is_some(),
    })
  }

  /// Face index of a point.
  ///
  /// A cached `tri_num` is kept only when that face of this engine's icosahedron
  /// contains the point; a face cached under another orientation is re-resolved.
  pub(crate) fn face_of(&self, p: &Point3) -> Result<usize, GeocombError> {
    let v = v3d_normalize(&p.to_vec3d()).ok_or(GeocombError::UnresolvablePoint)?;
    if p.is_resolved() {
      let face = p.tri_num as usize;
      if face >= NUM_ICOSA_FACES {
        return Err(GeocombError::UnresolvablePoint);
      }
      if self.model.containment(face, &v) >= -FACE_EPSILON {
        return Ok(face);
      }
      log::trace!("cached face {} does not contain {:?} under {}, resolving", face, v, self.mo);
    }
    self.model.resolve_face(&v)
  }

  /// Checks that an address was produced under this engine's variant.
  pub(crate) fn check_variant(&self, addr: &HashProperties) -> Result<(), GeocombError> {
    if addr.mo != self.mo || addr.rm != self.rm {
      return Err(GeocombError::VariantMismatch);
    }
    Ok(())
  }
}

impl PartialEq for Icosahedron {
  fn eq(&self, other: &Self) -> bool {
    self.mo == other.mo && self.rm == other.rm
  }
}

impl Eq for Icosahedron {}

/// Face edge frequency at `res`, or [`GeocombError::ResDomain`] past [`MAX_RES`].
#[inline]
pub(crate) fn frequency(res: u32) -> Result<u32, GeocombError> {
  if res > MAX_RES {
    return Err(GeocombError::ResDomain);
  }
  Ok(res + 1)
}
