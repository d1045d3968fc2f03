// src/traversal/neighbors.rs

use crate::coords::lattice::neighbor_addresses;
use crate::icosahedron::Icosahedron;
use crate::types::{GeocombError, HashProperties};

impl Icosahedron {
  /// Cells sharing an edge with `addr`, in ascending `(row, col)` order.
  ///
  /// Pentagon cells have 5 neighbors, every other cell 6.
  pub fn neighbors(&self, addr: &HashProperties) -> Result<Vec<HashProperties>, GeocombError> {
    let (p, n) = self.lattice_point(addr)?;
    Ok(
      neighbor_addresses(&p, n)
        .into_iter()
        .map(|rc| self.address(addr.res, rc))
        .collect(),
    )
  }

  /// Returns whether or not the provided cells are neighbors.
  ///
  /// A cell is not its own neighbor.
  ///
  /// # Errors
  /// [`GeocombError::ResMismatch`] if the cells have different resolutions, or
  /// the address errors of [`Icosahedron::neighbors`] for an invalid cell.
  pub fn are_neighbor_cells(&self, origin: &HashProperties, destination: &HashProperties) -> Result<bool, GeocombError> {
    if origin.res != destination.res {
      return Err(GeocombError::ResMismatch);
    }
    // validates the destination as well
    self.lattice_point(destination)?;
    if origin == destination {
      return Ok(false);
    }
    Ok(self.neighbors(origin)?.contains(destination))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{MapOrientation, RotationMethod};

  fn ecef() -> Icosahedron {
    Icosahedron::on_ready(MapOrientation::Ecef, RotationMethod::Gnomonic).unwrap()
  }

  #[test]
  fn test_neighbors_of_hexagon() {
    let ico = ecef();
    let h = ico.hash(&ico.point_from_coords(47.0, 47.0), 777).unwrap();
    let nbrs = ico.neighbors(&h).unwrap();
    assert_eq!(nbrs.len(), 6);
    assert!(nbrs.windows(2).all(|w| (w[0].row, w[0].col) < (w[1].row, w[1].col)), "sorted");
    for nb in &nbrs {
      assert_eq!(nb.res, 777);
      assert!(ico.are_neighbor_cells(&h, nb).unwrap());
      assert!(ico.are_neighbor_cells(nb, &h).unwrap());
    }
  }

  #[test]
  fn test_neighbors_of_pentagons() {
    let ico = ecef();
    for res in [0, 3, 100] {
      for pent in ico.pentagons(res).unwrap() {
        let nbrs = ico.neighbors(&pent).unwrap();
        assert_eq!(nbrs.len(), 5, "pentagon {:?}", pent);
        assert!(nbrs.iter().all(|nb| !ico.is_pentagon(nb) || res == 0));
      }
    }
  }

  #[test]
  fn test_neighbors_are_physically_close() {
    let ico = ecef();
    let res = 50;
    let h = ico.hash(&ico.point_from_coords(-20.0, 100.0), res).unwrap();
    let center = ico.parse_hash(&h).unwrap().point.to_lat_lng();
    for nb in ico.neighbors(&h).unwrap() {
      let c = ico.parse_hash(&nb).unwrap().point.to_lat_lng();
      let d = crate::latlng::great_circle_distance_rads(&center, &c);
      // edge length over frequency, with slack for gnomonic distortion
      assert!(d > 0.0 && d < 1.107 / 51.0 * 1.5, "neighbor {:?} at {}", nb, d);
    }
  }

  #[test]
  fn test_are_neighbor_cells_errors() {
    let ico = ecef();
    let a = HashProperties::new(3, 4, 4, MapOrientation::Ecef, RotationMethod::Gnomonic);
    let b = HashProperties { res: 4, ..a };
    assert_eq!(ico.are_neighbor_cells(&a, &b), Err(GeocombError::ResMismatch));
    assert_eq!(ico.are_neighbor_cells(&a, &a), Ok(false), "not its own neighbor");
    let bad = HashProperties { row: 100, ..a };
    assert_eq!(ico.are_neighbor_cells(&a, &bad), Err(GeocombError::InvalidAddress));
    assert_eq!(ico.neighbors(&bad), Err(GeocombError::InvalidAddress));
    let other = HashProperties {
      mo: MapOrientation::Dymaxion,
      ..a
    };
    assert_eq!(ico.neighbors(&other), Err(GeocombError::VariantMismatch));
  }

  #[test]
  fn test_dymaxion_traversal() {
    let dym = Icosahedron::on_ready(MapOrientation::Dymaxion, RotationMethod::Quaternion).unwrap();
    let pents = dym.pentagons(6).unwrap();
    assert_eq!(dym.neighbors(&pents[3]).unwrap().len(), 5);
  }
}
