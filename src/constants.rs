//! geocomb core library constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// Epsilon for floating point comparisons. ~0.1mm in degrees.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Epsilon for floating point comparisons. ~0.1mm in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// Slack allowed on a face edge plane test. Points this close to an edge count
/// as inside both faces, and the lower face index wins.
pub const FACE_EPSILON: f64 = 1e-12;

/// Chord distance under which a point is considered to sit on an icosahedron vertex.
pub const PENTAGON_EPSILON: f64 = 1e-12;

/// Latitude of the two icosahedron vertex rings, atan(1/2), in radians.
pub const VERTEX_RING_LAT_RADS: f64 = 0.463_647_609_000_806_1;

// Icosahedron topology

/// The number of faces on an icosahedron.
pub const NUM_ICOSA_FACES: usize = 20;
/// The number of vertices on an icosahedron.
pub const NUM_ICOSA_VERTS: usize = 12;
/// The number of pentagons per resolution (one per icosahedron vertex).
pub const NUM_PENTAGONS: u32 = 12;
/// The number of rhombi the faces pair into for global addressing.
pub const NUM_RHOMBI: usize = 10;

/// Vertex index of the north pole (ECEF orientation).
pub const NORTH_VERT: usize = 0;
/// Vertex index of the south pole (ECEF orientation).
pub const SOUTH_VERT: usize = 11;

/// `tri_num` sentinel for a point that has not been resolved against a face.
pub const UNRESOLVED_FACE: i32 = -1;

// Grid constants

/// Maximum supported resolution. The face edge frequency at `res` is `res + 1`,
/// so the widest row (`5 * (res + 1)` columns) stays well inside `u32`, and lattice
/// rounding keeps a wide margin over `f64` error.
pub const MAX_RES: u32 = (1 << 24) - 1;

// Dymaxion orientation anchors (Fuller's vertex table, degrees).

/// Latitude of the Dymaxion vertex the ECEF north pole rotates onto.
pub const DYMAXION_POLE_LAT_DEG: f64 = 64.7;
/// Longitude of the Dymaxion vertex the ECEF north pole rotates onto.
pub const DYMAXION_POLE_LNG_DEG: f64 = 10.536_20;
/// Latitude of the Dymaxion vertex the first upper-ring vertex rotates onto.
pub const DYMAXION_RING_LAT_DEG: f64 = 10.447_378;
/// Longitude of the Dymaxion vertex the first upper-ring vertex rotates onto.
pub const DYMAXION_RING_LNG_DEG: f64 = 58.157_706;
