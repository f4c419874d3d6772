//! IES File Struct.
//!
//! This module contains the structs and enums for supporting parsing of the
//! IESNA LM-63 photometric file format. The parser is deliberately tolerant:
//! real-world files vary wildly in whitespace and line wrapping, so after the
//! tilt marker the numeric payload is consumed as a flat token stream rather
//! than line-by-line. Useful references on the format:
//! - The IESNA LM-63-2002 standard document.
//! - Documentation by Paul Bourke: <http://paulbourke.net/dataformats/ies/>

pub mod err;
pub mod ies_file;
pub mod phot_type;
pub mod standard;
pub mod tilt;
mod util;
pub use self::{err::*, ies_file::*, phot_type::*, standard::*, tilt::*};

/// The pattern used to split runs of numbers within the data section.
pub(crate) const DELIMITERS_PATTERN: &str = r"[\s,]+";
