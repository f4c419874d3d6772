//! Isolux - A Rust Crate for Computing Iso-Illuminance Contours from Photometric Files.
//!

pub mod compute;
pub mod contour;
pub mod err;
pub mod field;
pub mod io;
pub mod photweb;
pub mod units;
pub mod util;
