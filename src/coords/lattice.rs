// src/coords/lattice.rs

//! Integer lattice over the icosahedron faces and the global `(row, col)` net.
//!
//! At frequency `n = res + 1` a lattice point is a triple of non-negative integer
//! weights summing to `n` over the vertices of a face. Points on an edge or at a
//! vertex have several face representations; [`LatticePoint`] keeps its weights
//! keyed by icosahedron vertex, so [`LatticePoint::weight_of`] and [`encode`]
//! agree across all of them.
//!
//! The 20 faces pair into 10 rhombi. A rhombus with origin `O`, side corners
//! `A`, `B` and far corner `F` gives each of its points local coordinates
//! `(s, t)` in `[0, n]`, and owns the half-open square `s, t < n`. The two poles
//! are owned by no rhombus. Unfolded side by side the rhombi form a net of
//! `3n + 1` rows and `5n` columns.

use crate::constants::{NORTH_VERT, NUM_ICOSA_FACES, NUM_RHOMBI, SOUTH_VERT};
use crate::coords::icosa::ICOSA_FACES;

/// A lattice point: weights on (up to) three icosahedron vertices, summing to `n`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LatticePoint {
  verts: [usize; 3],
  weights: [u32; 3],
}

impl LatticePoint {
  /// Lattice point with barycentric `weights` over `face`.
  pub(crate) fn on_face(face: usize, weights: [u32; 3]) -> Self {
    Self {
      verts: ICOSA_FACES[face],
      weights,
    }
  }

  /// The lattice point sitting on icosahedron vertex `vert`.
  pub(crate) fn at_vertex(vert: usize, n: u32) -> Self {
    Self {
      verts: [vert, vert, vert],
      weights: [n, 0, 0],
    }
  }

  /// Total weight on icosahedron vertex `vert`.
  pub(crate) fn weight_of(&self, vert: usize) -> u32 {
    self
      .verts
      .iter()
      .zip(self.weights.iter())
      .filter(|(v, _)| **v == vert)
      .map(|(_, w)| *w)
      .sum()
  }

  /// Whether every vertex carrying weight is one of `verts`.
  pub(crate) fn within(&self, verts: &[usize; 3]) -> bool {
    self
      .verts
      .iter()
      .zip(self.weights.iter())
      .all(|(v, w)| *w == 0 || verts.contains(v))
  }

  /// Weights re-expressed over the vertex order of `face`.
  ///
  /// Only meaningful when the point lies on `face` (see [`LatticePoint::within`]).
  pub(crate) fn face_weights(&self, face: usize) -> [u32; 3] {
    ICOSA_FACES[face].map(|v| self.weight_of(v))
  }

  /// Lowest-index face containing the point.
  pub(crate) fn home_face(&self) -> Option<usize> {
    (0..NUM_ICOSA_FACES).find(|&f| self.within(&ICOSA_FACES[f]))
  }

  /// Icosahedron vertex carrying the full weight `n`, if the point is a pentagon center.
  pub(crate) fn vertex(&self, n: u32) -> Option<usize> {
    self
      .verts
      .iter()
      .find(|&&v| self.weight_of(v) == n)
      .copied()
  }
}

/// One rhombus of the net: two faces sharing the `A`-`B` diagonal.
#[derive(Debug, Clone, Copy)]
struct Rhombus {
  origin: usize,
  a: usize,
  b: usize,
  far: usize,
  /// Column offset of the origin, in multiples of `n`.
  col0: u32,
  /// Row offset of the origin, in multiples of `n`.
  row0: u32,
}

/// North rhombi 0-4 pair faces `k` and `5 + k`, south rhombi 5-9 pair faces `10 + k` and `15 + k`.
#[rustfmt::skip]
static RHOMBI: [Rhombus; NUM_RHOMBI] = [
  Rhombus { origin: 1,  a: 0, b: 6,  far: 2,  col0: 0, row0: 2 },
  Rhombus { origin: 2,  a: 0, b: 7,  far: 3,  col0: 1, row0: 2 },
  Rhombus { origin: 3,  a: 0, b: 8,  far: 4,  col0: 2, row0: 2 },
  Rhombus { origin: 4,  a: 0, b: 9,  far: 5,  col0: 3, row0: 2 },
  Rhombus { origin: 5,  a: 0, b: 10, far: 1,  col0: 4, row0: 2 },
  Rhombus { origin: 6,  a: 2, b: 11, far: 7,  col0: 1, row0: 1 },
  Rhombus { origin: 7,  a: 3, b: 11, far: 8,  col0: 2, row0: 1 },
  Rhombus { origin: 8,  a: 4, b: 11, far: 9,  col0: 3, row0: 1 },
  Rhombus { origin: 9,  a: 5, b: 11, far: 10, col0: 4, row0: 1 },
  Rhombus { origin: 10, a: 1, b: 11, far: 6,  col0: 5, row0: 1 },
];

/// Largest valid row at frequency `n`.
#[inline]
#[must_use]
pub(crate) fn max_row(n: u32) -> u32 {
  3 * n
}

/// Largest valid column at frequency `n`.
#[inline]
#[must_use]
pub(crate) fn max_col(n: u32) -> u32 {
  5 * n - 1
}

/// Global net address of a lattice point.
///
/// Returns `None` only for a point that is not a lattice point at frequency `n`.
pub(crate) fn encode(p: &LatticePoint, n: u32) -> Option<(u32, u32)> {
  if p.weight_of(NORTH_VERT) == n {
    return Some((max_row(n), 0));
  }
  if p.weight_of(SOUTH_VERT) == n {
    return Some((0, 0));
  }
  let (n64, width) = (u64::from(n), 5 * u64::from(n));
  for r in &RHOMBI {
    let w_far = u64::from(p.weight_of(r.far));
    let (s, t) = if p.within(&[r.origin, r.a, r.far]) {
      (u64::from(p.weight_of(r.a)) + w_far, w_far)
    } else if p.within(&[r.origin, r.b, r.far]) {
      (w_far, u64::from(p.weight_of(r.b)) + w_far)
    } else {
      continue;
    };
    if s < n64 && t < n64 {
      let row = u64::from(r.row0) * n64 + s - t;
      let col = (u64::from(r.col0) * n64 + t) % width;
      return Some((row as u32, col as u32));
    }
  }
  None
}

/// Lattice point at a global net address, or `None` for a position outside the net.
pub(crate) fn decode(row: u32, col: u32, n: u32) -> Option<LatticePoint> {
  if row == max_row(n) && col == 0 {
    return Some(LatticePoint::at_vertex(NORTH_VERT, n));
  }
  if row == 0 && col == 0 {
    return Some(LatticePoint::at_vertex(SOUTH_VERT, n));
  }
  if row > max_row(n) || col > max_col(n) {
    return None;
  }
  let (n64, width) = (i64::from(n), 5 * i64::from(n));
  let (row, col) = (i64::from(row), i64::from(col));
  for r in &RHOMBI {
    let t = (col - i64::from(r.col0) * n64).rem_euclid(width);
    let s = row - i64::from(r.row0) * n64 + t;
    if !(0..n64).contains(&s) || !(0..n64).contains(&t) {
      continue;
    }
    let p = if t <= s {
      LatticePoint {
        verts: [r.a, r.far, r.origin],
        weights: [(s - t) as u32, t as u32, (n64 - s) as u32],
      }
    } else {
      LatticePoint {
        verts: [r.b, r.far, r.origin],
        weights: [(t - s) as u32, s as u32, (n64 - t) as u32],
      }
    };
    return Some(p);
  }
  None
}

/// Nearest lattice point to the barycentric coordinates `lambda` at frequency `n`.
///
/// Negative weights are clamped to the face first. Among the corners of the small
/// triangle containing the scaled point the closest (squared barycentric distance)
/// wins; ties go to the first candidate.
#[must_use]
pub(crate) fn nearest_lattice_weights(lambda: &[f64; 3], n: u32) -> [u32; 3] {
  let clamped = lambda.map(|l| if l.is_finite() { l.max(0.0) } else { 0.0 });
  let sum: f64 = clamped.iter().sum();
  if sum <= 0.0 {
    return [n, 0, 0];
  }
  let n_f = f64::from(n);
  let x = clamped.map(|l| l * n_f / sum);

  let fi = x[0].floor() as i64;
  let fj = x[1].floor() as i64;
  let (ri, rj) = (x[0] - fi as f64, x[1] - fj as f64);
  let candidates = if ri + rj < 1.0 {
    [(fi, fj), (fi + 1, fj), (fi, fj + 1)]
  } else {
    [(fi + 1, fj + 1), (fi + 1, fj), (fi, fj + 1)]
  };

  let n_i = i64::from(n);
  let mut best = [n, 0, 0];
  let mut best_dist = f64::INFINITY;
  for (i, j) in candidates {
    let k = n_i - i - j;
    if i < 0 || j < 0 || k < 0 {
      continue;
    }
    let d = (x[0] - i as f64).powi(2) + (x[1] - j as f64).powi(2) + (x[2] - k as f64).powi(2);
    if d < best_dist {
      best_dist = d;
      best = [i as u32, j as u32, k as u32];
    }
  }
  best
}

/// Unit steps between adjacent lattice points, as barycentric weight deltas.
#[rustfmt::skip]
const NEIGHBOR_STEPS: [[i64; 3]; 6] = [
  [1, -1, 0], [-1, 1, 0],
  [1, 0, -1], [-1, 0, 1],
  [0, 1, -1], [0, -1, 1],
];

/// Net addresses of the lattice points one step from `p`, ascending and deduplicated.
///
/// Steps are taken within every face `p` lies on, so points on edges and at
/// vertices reach across into the adjacent faces.
pub(crate) fn neighbor_addresses(p: &LatticePoint, n: u32) -> Vec<(u32, u32)> {
  let mut out = Vec::with_capacity(6);
  for (face, verts) in ICOSA_FACES.iter().enumerate() {
    if !p.within(verts) {
      continue;
    }
    let base = p.face_weights(face);
    for step in &NEIGHBOR_STEPS {
      let w = [
        i64::from(base[0]) + step[0],
        i64::from(base[1]) + step[1],
        i64::from(base[2]) + step[2],
      ];
      if w.iter().any(|c| *c < 0) {
        continue;
      }
      let q = LatticePoint::on_face(face, w.map(|c| c as u32));
      if let Some(addr) = encode(&q, n) {
        out.push(addr);
      }
    }
  }
  out.sort_unstable();
  out.dedup();
  out
}
