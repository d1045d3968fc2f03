// tests/properties_tests.rs

use geocomb::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn ecef_gnomonic() -> Icosahedron {
  Icosahedron::on_ready(MapOrientation::Ecef, RotationMethod::Gnomonic).expect("backend ready")
}

/// Uniformly distributed point on the sphere, in degrees.
fn random_coords(rng: &mut StdRng) -> (f64, f64) {
  let lat = rads_to_degs(rng.random_range(-1.0f64..1.0).asin());
  let lng = rng.random_range(-180.0..180.0);
  (lat, lng)
}

#[test]
fn test_random_round_trip() {
  let ico = ecef_gnomonic();
  let mut rng = StdRng::seed_from_u64(0x6765_6f63);
  for res in [0, 1, 7, 777, 65_535, 1_000_002, MAX_RES] {
    for _ in 0..500 {
      let (lat, lng) = random_coords(&mut rng);
      let h = ico.hash(&ico.point_from_coords(lat, lng), res).unwrap();
      assert!(ico.is_valid_address(&h));
      let center = ico.parse_hash(&h).unwrap();
      assert_eq!(center.hash, h);
      assert_eq!(ico.hash(&center.point, res).unwrap(), h, "cached face at res {}", res);
      let (clat, clng) = center.point.to_coords();
      assert_eq!(
        ico.hash(&ico.point_from_coords(clat, clng), res).unwrap(),
        h,
        "re-resolved at res {}",
        res
      );
    }
  }
}

#[test]
fn test_exhaustive_round_trip_low_res() {
  let ico = ecef_gnomonic();
  for res in 0..6 {
    let mut count = 0u64;
    for cell in ico.cells(res).unwrap() {
      let center = ico.parse_hash(&cell).unwrap();
      assert_eq!(ico.hash(&center.point, res).unwrap(), cell);
      let unresolved = Point3::new(center.point.x, center.point.y, center.point.z);
      assert_eq!(ico.hash(&unresolved, res).unwrap(), cell);
      count += 1;
    }
    assert_eq!(count, num_cells(res).unwrap());
  }
}

#[test]
fn test_face_coverage() {
  let ico = ecef_gnomonic();
  let mut rng = StdRng::seed_from_u64(7);
  let mut faces = HashSet::new();
  for _ in 0..20_000 {
    let (lat, lng) = random_coords(&mut rng);
    let p = ico.resolve(&ico.point_from_coords(lat, lng)).unwrap();
    assert!((0..20).contains(&p.tri_num));
    faces.insert(p.tri_num);
  }
  assert_eq!(faces.len(), 20);

  for bad in [
    Point3::new(0.0, 0.0, 0.0),
    Point3::new(f64::NAN, 1.0, 0.0),
    Point3::new(1.0, f64::NEG_INFINITY, 0.0),
  ] {
    assert_eq!(ico.resolve(&bad), Err(GeocombError::UnresolvablePoint));
    assert_eq!(ico.hash(&bad, 5), Err(GeocombError::UnresolvablePoint));
  }
}

#[test]
fn test_pentagons_are_fixed_points() {
  let ico = ecef_gnomonic();
  let mut reference: Option<Vec<Vec3d>> = None;
  for res in [0, 1, 2, 5, 777, 123_456] {
    let pents = ico.pentagons(res).unwrap();
    assert_eq!(pents.len() as u32, pentagon_count());
    let unique: HashSet<_> = pents.iter().map(|h| (h.row, h.col)).collect();
    assert_eq!(unique.len(), 12);

    let points: Vec<Vec3d> = pents
      .iter()
      .map(|h| {
        let g = ico.parse_hash(h).unwrap();
        assert!(g.point.is_pc, "pentagon center flagged at res {}", res);
        g.point.to_vec3d()
      })
      .collect();
    match &reference {
      None => reference = Some(points),
      Some(r) => {
        for (a, b) in r.iter().zip(points.iter()) {
          assert!((a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12 && (a.z - b.z).abs() < 1e-12);
        }
      }
    }
  }
}

#[test]
fn test_exactly_twelve_pentagon_centers() {
  let ico = ecef_gnomonic();
  for res in 0..5 {
    let flagged = ico
      .cells(res)
      .unwrap()
      .filter(|c| ico.parse_hash(c).unwrap().point.is_pc)
      .count();
    assert_eq!(flagged, 12, "res {}", res);
  }
}

#[test]
fn test_vertices_hash_to_pentagons() {
  let ico = ecef_gnomonic();
  let vertex_coords = [(90.0, 0.0), (26.565_051_177_077_99, 72.0), (-26.565_051_177_077_99, 36.0), (-90.0, 0.0)];
  for res in [0, 9, 777, MAX_RES] {
    for (lat, lng) in vertex_coords {
      let p = ico.resolve(&ico.point_from_coords(lat, lng)).unwrap();
      assert!(p.is_pc, "({}, {}) is a pentagon center", lat, lng);
      let h = ico.hash(&p, res).unwrap();
      assert!(ico.is_pentagon(&h), "({}, {}) at res {}", lat, lng, res);
    }
  }
}

#[test]
fn test_edge_points_round_trip() {
  let ico = ecef_gnomonic();
  let mut rng = StdRng::seed_from_u64(99);
  // points on the great circle edges between adjacent vertices
  let edges = [((90.0, 0.0), (26.565_051_177_077_99, 0.0)), ((26.565_051_177_077_99, 0.0), (-26.565_051_177_077_99, 36.0))];
  for ((la, lo), (lb, lob)) in edges {
    let a = ico.point_from_coords(la, lo).to_vec3d();
    let b = ico.point_from_coords(lb, lob).to_vec3d();
    for _ in 0..200 {
      let t: f64 = rng.random_range(0.0..1.0);
      let p = Point3::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y), a.z + t * (b.z - a.z));
      for res in [3, 777] {
        let h = ico.hash(&p, res).unwrap();
        let center = ico.parse_hash(&h).unwrap();
        assert_eq!(ico.hash(&center.point, res).unwrap(), h);
      }
    }
  }
}

#[test]
fn test_neighbors_symmetric_low_res() {
  let ico = ecef_gnomonic();
  for res in 0..4 {
    let mut degree5 = 0;
    for cell in ico.cells(res).unwrap() {
      let nbrs = ico.neighbors(&cell).unwrap();
      if nbrs.len() == 5 {
        degree5 += 1;
        assert!(ico.is_pentagon(&cell));
      } else {
        assert_eq!(nbrs.len(), 6);
      }
      for nb in &nbrs {
        assert!(ico.are_neighbor_cells(nb, &cell).unwrap());
      }
    }
    assert_eq!(degree5, 12);
  }
}
