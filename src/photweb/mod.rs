//! Photometric Web
//!
//! A module that contains a common object for representing luminous intensity
//! distributions over the sphere of directions around a luminaire, along with
//! the symmetry-aware interpolation used to query them at arbitrary angles.

pub mod photweb;
pub mod symmetry;
pub use self::{photweb::*, symmetry::*};

#[cfg(test)]
pub mod tests;
