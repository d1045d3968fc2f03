// src/indexing/to_hash.rs

use crate::coords::lattice::{encode, nearest_lattice_weights, LatticePoint};
use crate::coords::projection::barycentric;
use crate::icosahedron::{frequency, Icosahedron};
use crate::math::vec3d::v3d_normalize;
use crate::types::{GeocombError, HashProperties, MapOrientation, Point3, Vec2d};

/// Net address of the cell containing the planar point `uv` on `face`.
///
/// `corners` are the face's planar vertex images. Points outside the face are
/// clamped onto it, so the function is total over the plane.
pub(crate) fn cell_address(corners: &[Vec2d; 3], face: usize, uv: &Vec2d, n: u32) -> Option<(u32, u32)> {
  let lambda = barycentric(corners, uv);
  let weights = nearest_lattice_weights(&lambda, n);
  encode(&LatticePoint::on_face(face, weights), n)
}

impl Icosahedron {
  /// Address of the cell containing `p` at `res`.
  ///
  /// A point that already carries a face (`tri_num >= 0`) is hashed against that
  /// face when it contains the point; otherwise the point is resolved first.
  ///
  /// # Errors
  /// * [`GeocombError::UnsupportedVariant`] for a Dymaxion engine.
  /// * [`GeocombError::ResDomain`] when `res` exceeds [`crate::MAX_RES`].
  /// * [`GeocombError::UnresolvablePoint`] for a non-finite or zero-length point,
  ///   or one whose cached `tri_num` is not a face index.
  pub fn hash(&self, p: &Point3, res: u32) -> Result<HashProperties, GeocombError> {
    if self.mo() != MapOrientation::Ecef {
      return Err(GeocombError::UnsupportedVariant);
    }
    let n = frequency(res)?;
    let v = v3d_normalize(&p.to_vec3d()).ok_or(GeocombError::UnresolvablePoint)?;
    let face = self.face_of(p)?;

    let frame = &self.model.frames[face];
    let uv = frame.project(self.rm(), &v).ok_or(GeocombError::UnresolvablePoint)?;
    let (row, col) = cell_address(frame.corners(self.rm()), face, &uv, n).ok_or(GeocombError::InvalidAddress)?;
    Ok(HashProperties::new(res, row, col, self.mo(), self.rm()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::MAX_RES;
  use crate::types::RotationMethod;

  fn ecef(rm: RotationMethod) -> Icosahedron {
    Icosahedron::on_ready(MapOrientation::Ecef, rm).unwrap()
  }

  #[test]
  fn test_hash_scenario() {
    let ico = ecef(RotationMethod::Gnomonic);
    let p = ico.point_from_coords(47.0, 47.0);
    let h = ico.hash(&p, 777).unwrap();
    assert_eq!(h, HashProperties::new(777, 1755, 367, MapOrientation::Ecef, RotationMethod::Gnomonic));
  }

  #[test]
  fn test_hash_poles() {
    let ico = ecef(RotationMethod::Gnomonic);
    for res in [0, 1, 9, 777] {
      let n = res + 1;
      let north = ico.hash(&ico.point_from_coords(90.0, 0.0), res).unwrap();
      assert_eq!((north.row, north.col), (3 * n, 0), "north pole at res {}", res);
      let south = ico.hash(&ico.point_from_coords(-90.0, 0.0), res).unwrap();
      assert_eq!((south.row, south.col), (0, 0), "south pole at res {}", res);
    }
  }

  #[test]
  fn test_hash_res_zero_is_dodecahedron() {
    let ico = ecef(RotationMethod::Gnomonic);
    // every point at res 0 lands on one of the 12 vertex cells
    let mut seen = std::collections::BTreeSet::new();
    for lat in (-85..=85).step_by(5) {
      for lng in (-180..180).step_by(10) {
        let h = ico.hash(&ico.point_from_coords(f64::from(lat), f64::from(lng)), 0).unwrap();
        seen.insert((h.row, h.col));
      }
    }
    assert_eq!(seen.len(), 12);
  }

  #[test]
  fn test_hash_quaternion() {
    let ico = ecef(RotationMethod::Quaternion);
    let p = ico.point_from_coords(47.0, 47.0);
    let h = ico.hash(&p, 777).unwrap();
    assert_eq!(h.rm, RotationMethod::Quaternion);
    assert_eq!(h, ico.hash(&p, 777).unwrap(), "deterministic");
    assert!(h.row <= 3 * 778 && h.col < 5 * 778);
  }

  #[test]
  fn test_hash_errors() {
    let ico = ecef(RotationMethod::Gnomonic);
    let p = ico.point_from_coords(10.0, 10.0);
    assert_eq!(ico.hash(&p, MAX_RES + 1), Err(GeocombError::ResDomain));
    assert!(ico.hash(&p, MAX_RES).is_ok());
    assert_eq!(ico.hash(&Point3::default(), 3), Err(GeocombError::UnresolvablePoint));
    assert_eq!(
      ico.hash(&ico.point_from_coords(f64::NAN, 0.0), 3),
      Err(GeocombError::UnresolvablePoint)
    );

    let dym = Icosahedron::on_ready(MapOrientation::Dymaxion, RotationMethod::Gnomonic).unwrap();
    assert_eq!(dym.hash(&p, 3), Err(GeocombError::UnsupportedVariant));
  }

  #[test]
  fn test_hash_ignores_stale_cached_face() {
    let ico = ecef(RotationMethod::Gnomonic);
    let mut p = ico.point_from_coords(-90.0, 0.0);
    p.tri_num = 0;
    let h = ico.hash(&p, 5).unwrap();
    assert_eq!((h.row, h.col), (0, 0), "south pole, not clamped onto face 0");
  }

  #[test]
  fn test_cell_address_clamps_outside_points() {
    let ico = ecef(RotationMethod::Gnomonic);
    let frame = &ico.model.frames[0];
    let corners = frame.corners(RotationMethod::Gnomonic);
    let far = Vec2d::new(corners[0].x * 10.0, 0.0);
    // clamped onto vertex a of face 0, the north pole
    assert_eq!(cell_address(corners, 0, &far, 4), Some((12, 0)));
  }
}
