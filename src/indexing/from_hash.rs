// src/indexing/from_hash.rs

use crate::coords::icosa::IcosaModel;
use crate::coords::lattice::{decode, LatticePoint};
use crate::icosahedron::{frequency, Icosahedron};
use crate::types::{GeoPoint, GeocombError, HashProperties, MapOrientation, Point3, RotationMethod, Vec2d};

/// Face and planar center of the cell at `(row, col)`.
///
/// The face is the lowest-index face the cell center lies on.
pub(crate) fn cell_center(
  model: &IcosaModel,
  rm: RotationMethod,
  row: u32,
  col: u32,
  n: u32,
) -> Result<(usize, Vec2d, LatticePoint), GeocombError> {
  let lattice = decode(row, col, n).ok_or(GeocombError::InvalidAddress)?;
  let face = lattice.home_face().ok_or(GeocombError::InvalidAddress)?;
  let weights = lattice.face_weights(face);
  let corners = model.frames[face].corners(rm);

  let n_f = f64::from(n);
  let mut uv = Vec2d::default();
  for (w, corner) in weights.iter().zip(corners.iter()) {
    let w = f64::from(*w) / n_f;
    uv.x += w * corner.x;
    uv.y += w * corner.y;
  }
  Ok((face, uv, lattice))
}

impl Icosahedron {
  /// Center point of the cell at `addr`.
  ///
  /// The returned point is resolved: `tri_num` is the face the center was
  /// computed on and `is_pc` marks the 12 pentagon cells.
  ///
  /// # Errors
  /// * [`GeocombError::UnsupportedVariant`] unless `addr` is ECEF + gnomonic.
  /// * [`GeocombError::VariantMismatch`] when `addr` was built for another engine variant.
  /// * [`GeocombError::ResDomain`] when `addr.res` exceeds [`crate::MAX_RES`].
  /// * [`GeocombError::InvalidAddress`] for a row or col outside the grid.
  pub fn parse_hash(&self, addr: &HashProperties) -> Result<GeoPoint, GeocombError> {
    if addr.mo != MapOrientation::Ecef || addr.rm != RotationMethod::Gnomonic {
      return Err(GeocombError::UnsupportedVariant);
    }
    self.check_variant(addr)?;
    let n = frequency(addr.res)?;

    let (face, uv, lattice) = cell_center(self.model, addr.rm, addr.row, addr.col, n)?;
    let v = self.model.frames[face]
      .unproject(addr.rm, &uv)
      .ok_or(GeocombError::InvalidAddress)?;
    Ok(GeoPoint {
      point: Point3 {
        x: v.x,
        y: v.y,
        z: v.z,
        tri_num: face as i32,
        is_pc: lattice.vertex(n).is_some(),
      },
      hash: *addr,
    })
  }
}
