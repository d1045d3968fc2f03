// src/coords/icosa.rs

use crate::constants::{
  DYMAXION_POLE_LAT_DEG, DYMAXION_POLE_LNG_DEG, DYMAXION_RING_LAT_DEG, DYMAXION_RING_LNG_DEG, FACE_EPSILON,
  NUM_ICOSA_FACES, NUM_ICOSA_VERTS, PENTAGON_EPSILON, VERTEX_RING_LAT_RADS,
};
use crate::coords::projection::FaceFrame;
use crate::latlng::degs_to_rads;
use crate::math::vec3d::{
  geo_to_vec3d, point_square_dist, v3d_add, v3d_cross, v3d_dot, v3d_mag, v3d_normalize, v3d_scale, v3d_sub,
};
use crate::types::{GeocombError, LatLng, MapOrientation, Vec3d};

/// Vertex triples of the 20 faces, counter-clockwise seen from outside.
///
/// Faces 0-4 are the north cap, 5-9 the upper middle band, 10-14 the lower
/// middle band and 15-19 the south cap. Vertex 0 is the north vertex, 1-5 the
/// upper ring, 6-10 the lower ring and 11 the south vertex.
#[rustfmt::skip]
pub(crate) static ICOSA_FACES: [[usize; 3]; NUM_ICOSA_FACES] = [
  [0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 5], [0, 5, 1],
  [1, 6, 2], [2, 7, 3], [3, 8, 4], [4, 9, 5], [5, 10, 1],
  [6, 7, 2], [7, 8, 3], [8, 9, 4], [9, 10, 5], [10, 6, 1],
  [11, 7, 6], [11, 8, 7], [11, 9, 8], [11, 10, 9], [11, 6, 10],
];

/// Icosahedron vertices aligned with the Earth-centered frame.
pub(crate) fn ecef_vertices() -> [Vec3d; NUM_ICOSA_VERTS] {
  let mut verts = [Vec3d::default(); NUM_ICOSA_VERTS];
  verts[0] = Vec3d::new(0.0, 0.0, 1.0);
  for k in 0..5 {
    let k_f = k as f64;
    verts[1 + k] = geo_to_vec3d(&LatLng {
      lat: VERTEX_RING_LAT_RADS,
      lng: degs_to_rads(72.0 * k_f),
    });
    verts[6 + k] = geo_to_vec3d(&LatLng {
      lat: -VERTEX_RING_LAT_RADS,
      lng: degs_to_rads(36.0 + 72.0 * k_f),
    });
  }
  verts[11] = Vec3d::new(0.0, 0.0, -1.0);
  verts
}

/// Orthonormal frame spanned by `p` and the component of `q` orthogonal to it.
fn anchor_frame(p: &Vec3d, q: &Vec3d) -> [Vec3d; 3] {
  let e1 = v3d_scale(p, 1.0 / v3d_mag(p));
  let q_perp = v3d_sub(q, &v3d_scale(&e1, v3d_dot(q, &e1)));
  let e2 = v3d_scale(&q_perp, 1.0 / v3d_mag(&q_perp));
  let e3 = v3d_cross(&e1, &e2);
  [e1, e2, e3]
}

/// Icosahedron vertices in Fuller's Dymaxion orientation.
///
/// The ECEF icosahedron is rigidly rotated so the north vertex and the first
/// upper-ring vertex land on their Dymaxion anchors.
pub(crate) fn dymaxion_vertices() -> [Vec3d; NUM_ICOSA_VERTS] {
  let ecef = ecef_vertices();
  let pole = geo_to_vec3d(&LatLng {
    lat: degs_to_rads(DYMAXION_POLE_LAT_DEG),
    lng: degs_to_rads(DYMAXION_POLE_LNG_DEG),
  });
  let ring = geo_to_vec3d(&LatLng {
    lat: degs_to_rads(DYMAXION_RING_LAT_DEG),
    lng: degs_to_rads(DYMAXION_RING_LNG_DEG),
  });
  let src = anchor_frame(&ecef[0], &ecef[1]);
  let dst = anchor_frame(&pole, &ring);

  ecef.map(|v| {
    let coords = [v3d_dot(&v, &src[0]), v3d_dot(&v, &src[1]), v3d_dot(&v, &src[2])];
    v3d_add(
      &v3d_add(&v3d_scale(&dst[0], coords[0]), &v3d_scale(&dst[1], coords[1])),
      &v3d_scale(&dst[2], coords[2]),
    )
  })
}

/// Per-orientation icosahedron tables: vertices, edge plane normals and face frames.
#[derive(Debug, Clone)]
pub(crate) struct IcosaModel {
  pub(crate) mo: MapOrientation,
  pub(crate) verts: [Vec3d; NUM_ICOSA_VERTS],
  /// `a x b`, `b x c`, `c x a` per face; a point is inside when all three dot products are non-negative.
  edge_normals: [[Vec3d; 3]; NUM_ICOSA_FACES],
  pub(crate) frames: [FaceFrame; NUM_ICOSA_FACES],
}

impl IcosaModel {
  /// Builds the tables for `mo`.
  pub(crate) fn new(mo: MapOrientation) -> Self {
    let verts = match mo {
      MapOrientation::Ecef => ecef_vertices(),
      MapOrientation::Dymaxion => dymaxion_vertices(),
    };
    let edge_normals = ICOSA_FACES.map(|[a, b, c]| {
      let (a, b, c) = (&verts[a], &verts[b], &verts[c]);
      [v3d_cross(a, b), v3d_cross(b, c), v3d_cross(c, a)]
    });
    let frames = ICOSA_FACES.map(|[a, b, c]| FaceFrame::new(&verts[a], &verts[b], &verts[c]));
    Self {
      mo,
      verts,
      edge_normals,
      frames,
    }
  }

  /// Smallest edge-plane dot product of `p` against `face`; non-negative inside.
  #[inline]
  pub(crate) fn containment(&self, face: usize, p: &Vec3d) -> f64 {
    let [n0, n1, n2] = &self.edge_normals[face];
    v3d_dot(p, n0).min(v3d_dot(p, n1)).min(v3d_dot(p, n2))
  }

  /// Face whose spherical triangle contains `p`.
  ///
  /// Faces are scanned in index order and the first containing face wins, so a
  /// point on a shared edge or vertex resolves to the lowest face index.
  pub(crate) fn resolve_face(&self, p: &Vec3d) -> Result<usize, GeocombError> {
    let p = v3d_normalize(p).ok_or(GeocombError::UnresolvablePoint)?;

    let mut best = 0;
    let mut best_val = f64::NEG_INFINITY;
    for face in 0..NUM_ICOSA_FACES {
      let m = self.containment(face, &p);
      if m >= -FACE_EPSILON {
        return Ok(face);
      }
      if m > best_val {
        best = face;
        best_val = m;
      }
    }
    log::trace!("no face contains {:?} under {}, falling back to face {}", p, self.mo, best);
    Ok(best)
  }

  /// Index of the icosahedron vertex `p` coincides with, if any. `p` is a unit vector.
  pub(crate) fn vertex_at(&self, p: &Vec3d) -> Option<usize> {
    self
      .verts
      .iter()
      .position(|v| point_square_dist(v, p).sqrt() < PENTAGON_EPSILON)
  }
}
