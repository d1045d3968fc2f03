// src/traversal/mod.rs

pub mod grid_disk;
pub mod neighbors;

pub use grid_disk::max_grid_disk_size;
