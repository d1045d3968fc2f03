// src/math/mod.rs
#![allow(clippy::module_name_repetitions)] // Common in math modules

pub mod quat;
pub mod vec2d;
pub mod vec3d;
