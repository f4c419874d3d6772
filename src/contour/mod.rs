//! Contour Extraction
//!
//! Marching-squares extraction of iso-value polylines from a scalar field,
//! plus the distance-thinned label placement used to annotate them.

pub mod label;
pub mod march;
pub use self::{label::*, march::*};
