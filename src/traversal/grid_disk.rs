// src/traversal/grid_disk.rs

use crate::coords::lattice::{decode, neighbor_addresses};
use crate::icosahedron::Icosahedron;
use crate::types::{GeocombError, HashProperties};
use std::collections::{HashSet, VecDeque};

/// Maximum number of cells in a k-disk: `3k(k+1) + 1`.
///
/// Disks around pentagons, or large enough to wrap the sphere, hold fewer.
/// Saturates at `u64::MAX`.
pub fn max_grid_disk_size(k: u32) -> u64 {
  let k = u64::from(k);
  (k * (k + 1)).saturating_mul(3).saturating_add(1)
}

impl Icosahedron {
  /// Every cell within `k` steps of `origin`, origin first, then by ascending
  /// distance. Cells at the same distance are in ascending `(row, col)` order.
  pub fn grid_disk(&self, origin: &HashProperties, k: u32) -> Result<Vec<HashProperties>, GeocombError> {
    Ok(
      self
        .grid_disk_distances(origin, k)?
        .into_iter()
        .map(|(cell, _)| cell)
        .collect(),
    )
  }

  /// Like [`Icosahedron::grid_disk`], with each cell's step distance from `origin`.
  pub fn grid_disk_distances(
    &self,
    origin: &HashProperties,
    k: u32,
  ) -> Result<Vec<(HashProperties, u32)>, GeocombError> {
    let (_, n) = self.lattice_point(origin)?;
    let start = (origin.row, origin.col);

    let mut seen = HashSet::new();
    seen.insert(start);
    let mut out = vec![(*origin, 0)];
    let mut ring = VecDeque::from([start]);

    for dist in 1..=k {
      let mut next = Vec::new();
      while let Some((row, col)) = ring.pop_front() {
        let Some(p) = decode(row, col, n) else {
          continue;
        };
        for rc in neighbor_addresses(&p, n) {
          if seen.insert(rc) {
            next.push(rc);
          }
        }
      }
      if next.is_empty() {
        break;
      }
      next.sort_unstable();
      out.extend(next.iter().map(|rc| (self.address(origin.res, *rc), dist)));
      ring.extend(next);
    }
    Ok(out)
  }
}
