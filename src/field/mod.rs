//! Illuminance Field
//!
//! Builds the Cartesian sample grid beneath the luminaire and evaluates the
//! point-source illuminance law over it, producing the scalar field the
//! contour extractor consumes.

pub mod engine;
pub mod err;
pub mod grid;
pub use self::{engine::*, err::*, grid::*};

#[cfg(test)]
pub mod tests;
