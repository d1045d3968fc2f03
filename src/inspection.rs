// src/inspection.rs

use crate::constants::{NUM_ICOSA_VERTS, NUM_PENTAGONS};
use crate::coords::lattice::{self, decode, encode, LatticePoint};
use crate::icosahedron::{frequency, Icosahedron};
use crate::types::{GeocombError, HashProperties};

/// Number of cells at the given resolution: `10 * (res + 1)^2 + 2`.
pub fn num_cells(res: u32) -> Result<u64, GeocombError> {
  let n = u64::from(frequency(res)?);
  Ok(10 * n * n + 2)
}

/// Number of pentagon cells at any resolution (always 12).
pub fn pentagon_count() -> u32 {
  NUM_PENTAGONS
}

/// Largest valid row at `res`.
pub fn max_row(res: u32) -> Result<u32, GeocombError> {
  Ok(lattice::max_row(frequency(res)?))
}

/// Largest valid column at `res`.
pub fn max_col(res: u32) -> Result<u32, GeocombError> {
  Ok(lattice::max_col(frequency(res)?))
}

impl Icosahedron {
  /// Lattice point of a valid address of this engine, with the frequency of its resolution.
  pub(crate) fn lattice_point(&self, addr: &HashProperties) -> Result<(LatticePoint, u32), GeocombError> {
    self.check_variant(addr)?;
    let n = frequency(addr.res)?;
    let p = decode(addr.row, addr.col, n).ok_or(GeocombError::InvalidAddress)?;
    Ok((p, n))
  }

  /// Address at `res` and `(row, col)` tagged with this engine's variant.
  #[inline]
  pub(crate) fn address(&self, res: u32, (row, col): (u32, u32)) -> HashProperties {
    HashProperties::new(res, row, col, self.mo(), self.rm())
  }

  /// The 12 pentagon cells at `res`, in icosahedron vertex order: north, upper
  /// ring, lower ring, south.
  pub fn pentagons(&self, res: u32) -> Result<Vec<HashProperties>, GeocombError> {
    let n = frequency(res)?;
    (0..NUM_ICOSA_VERTS)
      .map(|v| {
        encode(&LatticePoint::at_vertex(v, n), n)
          .map(|rc| self.address(res, rc))
          .ok_or(GeocombError::InvalidAddress)
      })
      .collect()
  }

  /// Whether `addr` names a cell of this engine's grid.
  pub fn is_valid_address(&self, addr: &HashProperties) -> bool {
    self.lattice_point(addr).is_ok()
  }

  /// Whether `addr` is one of the 12 pentagon cells. Invalid addresses are not pentagons.
  pub fn is_pentagon(&self, addr: &HashProperties) -> bool {
    self
      .lattice_point(addr)
      .map(|(p, n)| p.vertex(n).is_some())
      .unwrap_or(false)
  }
}
