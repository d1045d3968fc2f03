// src/iterators.rs

use crate::coords::lattice::{decode, max_col, max_row};
use crate::icosahedron::{frequency, Icosahedron};
use crate::types::{GeocombError, HashProperties};

/// Iterator over every cell of a resolution in row-major order (ascending row,
/// then column). Net gaps are skipped.
#[derive(Debug, Clone)]
pub struct CellIter {
  ico: Icosahedron,
  res: u32,
  n: u32,
  row: u32,
  col: u32,
  done: bool,
}

impl CellIter {
  fn advance(&mut self) {
    if self.col < max_col(self.n) {
      self.col += 1;
    } else if self.row < max_row(self.n) {
      self.row += 1;
      self.col = 0;
    } else {
      self.done = true;
    }
  }
}

impl Iterator for CellIter {
  type Item = HashProperties;

  fn next(&mut self) -> Option<Self::Item> {
    while !self.done {
      let (row, col) = (self.row, self.col);
      self.advance();
      if decode(row, col, self.n).is_some() {
        return Some(self.ico.address(self.res, (row, col)));
      }
    }
    None
  }
}

impl Icosahedron {
  /// Iterates every cell at `res`.
  pub fn cells(&self, res: u32) -> Result<CellIter, GeocombError> {
    let n = frequency(res)?;
    Ok(CellIter {
      ico: *self,
      res,
      n,
      row: 0,
      col: 0,
      done: false,
    })
  }
}
