//! Core geocomb data structures.

use crate::constants::UNRESOLVED_FACE;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::str::FromStr;

/// 2D floating-point vector. Used for face-local planar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Latitude/longitude coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

/// A point on (or near) the unit sphere.
///
/// `tri_num` and `is_pc` are filled in once, when the point is resolved against
/// an icosahedron face; an unresolved point has `tri_num == -1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3 {
  /// X coordinate (towards latitude 0, longitude 0).
  pub x: f64,
  /// Y coordinate (towards latitude 0, longitude 90E).
  pub y: f64,
  /// Z coordinate (towards the north pole).
  pub z: f64,
  /// Icosahedron face (0-19) the point was resolved against, or -1.
  pub tri_num: i32,
  /// True when the point is a pentagon center (an icosahedron vertex).
  pub is_pc: bool,
}

impl Point3 {
  /// Creates an unresolved point.
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self {
      x,
      y,
      z,
      tri_num: UNRESOLVED_FACE,
      is_pc: false,
    }
  }

  /// Whether the point carries a face assignment.
  pub const fn is_resolved(&self) -> bool {
    self.tri_num >= 0
  }

  /// The Cartesian coordinates as a vector.
  pub const fn to_vec3d(&self) -> Vec3d {
    Vec3d {
      x: self.x,
      y: self.y,
      z: self.z,
    }
  }
}

impl Default for Point3 {
  fn default() -> Self {
    Self::new(0.0, 0.0, 0.0)
  }
}

impl From<Vec3d> for Point3 {
  fn from(v: Vec3d) -> Self {
    Self::new(v.x, v.y, v.z)
  }
}

/// Global rotation of the icosahedron relative to the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MapOrientation {
  /// Aligned with the Earth-centered frame: vertices at the poles.
  #[default]
  #[cfg_attr(feature = "serde", serde(rename = "ECEF"))]
  Ecef,
  /// Fuller's Dymaxion orientation: every vertex lies over ocean.
  #[cfg_attr(feature = "serde", serde(rename = "dymaxion"))]
  Dymaxion,
}

impl MapOrientation {
  /// Canonical name.
  pub const fn as_str(self) -> &'static str {
    match self {
      MapOrientation::Ecef => "ECEF",
      MapOrientation::Dymaxion => "dymaxion",
    }
  }
}

impl fmt::Display for MapOrientation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for MapOrientation {
  type Err = GeocombError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "ECEF" => Ok(MapOrientation::Ecef),
      "dymaxion" => Ok(MapOrientation::Dymaxion),
      _ => Err(GeocombError::UnsupportedVariant),
    }
  }
}

/// Technique used to flatten a point on a face into planar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationMethod {
  /// Projection through the sphere center onto the face plane.
  /// Cells shrink towards vertices but stay symmetric.
  #[default]
  #[cfg_attr(feature = "serde", serde(rename = "gnomonic"))]
  Gnomonic,
  /// Quaternion rotation into the face frame followed by an equal-area flattening.
  /// Cell areas are more uniform, shapes more distorted.
  #[cfg_attr(feature = "serde", serde(rename = "quaternion"))]
  Quaternion,
}

impl RotationMethod {
  /// Canonical name.
  pub const fn as_str(self) -> &'static str {
    match self {
      RotationMethod::Gnomonic => "gnomonic",
      RotationMethod::Quaternion => "quaternion",
    }
  }
}

impl fmt::Display for RotationMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for RotationMethod {
  type Err = GeocombError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "gnomonic" => Ok(RotationMethod::Gnomonic),
      "quaternion" => Ok(RotationMethod::Quaternion),
      _ => Err(GeocombError::UnsupportedVariant),
    }
  }
}

/// Address of a phex cell: row and col on the geocomb grid at `res`, for the
/// orientation and rotation method that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HashProperties {
  /// Grid resolution. The face edge is divided into `res + 1` steps.
  pub res: u32,
  /// Lattice row, `0..=3 * (res + 1)`.
  pub row: u32,
  /// Lattice column, `0..5 * (res + 1)`.
  pub col: u32,
  /// Map orientation of the grid.
  pub mo: MapOrientation,
  /// Rotation method of the grid.
  pub rm: RotationMethod,
}

impl HashProperties {
  /// Creates an address record. Validity is checked when the address is used.
  pub const fn new(res: u32, row: u32, col: u32, mo: MapOrientation, rm: RotationMethod) -> Self {
    Self { res, row, col, mo, rm }
  }
}

/// Phex center point produced by parsing a hash: the point plus the address it
/// is the center of.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
  /// The cell center, resolved against its face.
  pub point: Point3,
  /// The address of the cell.
  pub hash: HashProperties,
}

impl GeoPoint {
  /// Resolution of the cell.
  pub const fn res(&self) -> u32 {
    self.hash.res
  }

  /// Lattice row of the cell.
  pub const fn row(&self) -> u32 {
    self.hash.row
  }

  /// Lattice column of the cell.
  pub const fn col(&self) -> u32 {
    self.hash.col
  }

  /// Map orientation of the grid.
  pub const fn mo(&self) -> MapOrientation {
    self.hash.mo
  }

  /// Rotation method of the grid.
  pub const fn rm(&self) -> RotationMethod {
    self.hash.rm
  }
}

/// Represents a geocomb error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GeocombError {
  /// The runtime tables have not been initialized yet.
  #[error("runtime not ready yet (geocomb)")]
  NotReady = 1,
  /// Point was not finite or had zero length.
  #[error("point is not finite or has zero length")]
  UnresolvablePoint = 2,
  /// Map orientation / rotation method combination is not supported for the operation.
  #[error("unsupported map orientation / rotation method combination")]
  UnsupportedVariant = 3,
  /// Row or col was outside the lattice at the given resolution.
  #[error("row or col outside of the grid for the resolution")]
  InvalidAddress = 4,
  /// Resolution argument was outside of acceptable range.
  #[error("resolution outside of acceptable range")]
  ResDomain = 5,
  /// Address orientation or rotation method differs from the icosahedron's.
  #[error("address map orientation or rotation method does not match the icosahedron")]
  VariantMismatch = 6,
  /// Cell arguments had incompatible resolutions.
  #[error("cells have different resolutions")]
  ResMismatch = 7,
}
