// src/coords/mod.rs

pub mod icosa;
pub mod lattice;
pub mod projection;
