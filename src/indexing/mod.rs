// src/indexing/mod.rs

pub mod from_hash;
pub mod to_hash;
