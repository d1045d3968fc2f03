// src/latlng.rs

use crate::constants::{M_180_PI, M_2PI, M_PI, M_PI_180};
use crate::math::vec3d::{geo_to_vec3d, vec3d_to_geo};
use crate::types::{LatLng, Point3};

/// Constrains longitude to the range `[-PI, PI]`.
///
/// Values past `PI` land in `(-PI, PI]`, values past `-PI` in `[-PI, PI)`.
/// Non-finite input passes through.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(lng: f64) -> f64 {
  if !lng.is_finite() || (-M_PI..=M_PI).contains(&lng) {
    return lng;
  }
  if lng > M_PI {
    let r = (lng - M_PI).rem_euclid(M_2PI);
    if r == 0.0 {
      M_PI
    } else {
      r - M_PI
    }
  } else {
    (lng + M_PI).rem_euclid(M_2PI) - M_PI
  }
}

/// The great circle distance in radians between two spherical coordinates.
///
/// This function uses the Haversine formula.
#[must_use]
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat_half = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng_half = ((b.lng - a.lng) * 0.5).sin();
  let component_a = sin_lat_half * sin_lat_half + a.lat.cos() * b.lat.cos() * sin_lng_half * sin_lng_half;
  let component_a_clamped = component_a.clamp(0.0, 1.0);
  2.0 * component_a_clamped.sqrt().atan2((1.0 - component_a_clamped).sqrt())
}

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Builds an unresolved point on the unit sphere from latitude and longitude in degrees.
///
/// Values outside `[-90, 90]` / `[-180, 180]` wrap around the sphere; nothing is rejected.
/// Non-finite input yields a non-finite point, which fails later at resolution.
#[must_use]
pub fn point_from_coords(lat_deg: f64, lng_deg: f64) -> Point3 {
  let v = geo_to_vec3d(&LatLng {
    lat: degs_to_rads(lat_deg),
    lng: constrain_lng(degs_to_rads(lng_deg)),
  });
  Point3::from(v)
}

impl Point3 {
  /// Spherical coordinates of the point's direction, in radians.
  #[must_use]
  pub fn to_lat_lng(&self) -> LatLng {
    let g = vec3d_to_geo(&self.to_vec3d());
    LatLng {
      lat: g.lat,
      lng: constrain_lng(g.lng),
    }
  }

  /// Latitude and longitude of the point's direction, in degrees.
  /// Longitude is in `[-180, 180]`.
  #[must_use]
  pub fn to_coords(&self) -> (f64, f64) {
    let g = self.to_lat_lng();
    (rads_to_degs(g.lat), rads_to_degs(g.lng))
  }
}
