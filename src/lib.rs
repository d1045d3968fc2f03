#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // GeocombError variants are documented on the enum
#![allow(clippy::cast_possible_truncation)] // lattice weights are bounded by the frequency
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // Vertex tables are clearer as written
#![allow(clippy::similar_names)] // Can be common in math-heavy code

//! `geocomb` is a geodesic spatial index on an icosahedron.
//!
//! Points on the sphere are hashed to phex cells (hexagons everywhere except at
//! the 12 icosahedron vertices, where they are pentagons) addressed by
//! resolution, row and column, and addresses are parsed back to cell centers.
//!
//! ```
//! use geocomb::{Icosahedron, MapOrientation, RotationMethod};
//!
//! let ico = Icosahedron::on_ready(MapOrientation::Ecef, RotationMethod::Gnomonic).unwrap();
//! let p = ico.point_from_coords(47.0, 47.0);
//! let h = ico.hash(&p, 777).unwrap();
//! let center = ico.parse_hash(&h).unwrap();
//! assert_eq!(ico.hash(&center.point, 777).unwrap(), h);
//! ```

// Declare modules
pub mod backend;
pub mod constants;
pub mod coords;
pub mod icosahedron;
pub mod indexing;
pub mod inspection;
pub mod iterators;
pub mod latlng;
pub mod math;
pub mod traversal;
pub mod types;

// Re-export key public types and functions for easier use
pub use backend::{is_ready, ready};
pub use constants::MAX_RES;
pub use icosahedron::Icosahedron;
pub use inspection::{max_col, max_row, num_cells, pentagon_count};
pub use iterators::CellIter;
pub use latlng::{degs_to_rads, great_circle_distance_rads, point_from_coords, rads_to_degs};
pub use traversal::max_grid_disk_size;
pub use types::{
  GeoPoint, GeocombError, HashProperties, LatLng, MapOrientation, Point3, RotationMethod, Vec2d, Vec3d,
};
