// src/backend.rs

//! One-shot initialisation of the process-wide icosahedron tables.
//!
//! Engines can only be constructed once the tables exist. [`ready`] builds them
//! (blocking concurrent first callers on the same build) and returns at once on
//! every later call; [`is_ready`] polls without building.

use crate::coords::icosa::IcosaModel;
use crate::types::MapOrientation;
use std::sync::OnceLock;

/// Immutable tables shared by every engine in the process.
#[derive(Debug)]
pub(crate) struct Backend {
  ecef: IcosaModel,
  dymaxion: IcosaModel,
}

static BACKEND: OnceLock<Backend> = OnceLock::new();

impl Backend {
  fn build() -> Self {
    let ecef = IcosaModel::new(MapOrientation::Ecef);
    log::debug!("built {} icosahedron tables", ecef.mo);
    let dymaxion = IcosaModel::new(MapOrientation::Dymaxion);
    log::debug!("built {} icosahedron tables", dymaxion.mo);
    Self { ecef, dymaxion }
  }

  /// Tables for one map orientation.
  pub(crate) fn model(&self, mo: MapOrientation) -> &IcosaModel {
    match mo {
      MapOrientation::Ecef => &self.ecef,
      MapOrientation::Dymaxion => &self.dymaxion,
    }
  }
}

/// Initialises the backend if needed and waits for it. Idempotent.
pub fn ready() {
  backend();
}

/// Whether the backend has been initialised.
pub fn is_ready() -> bool {
  BACKEND.get().is_some()
}

/// The initialised backend, building it first if needed.
pub(crate) fn backend() -> &'static Backend {
  BACKEND.get_or_init(Backend::build)
}

/// The backend, if it has been initialised.
pub(crate) fn try_backend() -> Option<&'static Backend> {
  BACKEND.get()
}
