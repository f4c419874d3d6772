use crate::util::geom::normalise_degrees;

/// The lateral symmetry regime of a photometric web, declared by the terminal
/// horizontal angle of the file: a file ending at 0 degrees is axially
/// symmetric, at 90 degrees symmetric in each quadrant, at 180 degrees
/// symmetric about a vertical plane, and anything else carries the full
/// horizontal sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateralSymmetry {
    Axial,
    Quadrant,
    Bilateral,
    Full,
}

impl Default for LateralSymmetry {
    fn default() -> Self {
        LateralSymmetry::Full
    }
}

impl LateralSymmetry {
    /// Resolves the symmetry regime from the terminal horizontal angle.
    pub fn from_terminal_angle(h_max: f64) -> LateralSymmetry {
        if h_max == 0.0 {
            LateralSymmetry::Axial
        } else if h_max == 90.0 {
            LateralSymmetry::Quadrant
        } else if h_max == 180.0 {
            LateralSymmetry::Bilateral
        } else {
            LateralSymmetry::Full
        }
    }

    /// Folds an arbitrary horizontal angle through the symmetry planes into
    /// the angular range the web actually stores. The input is normalised
    /// into [0, 360) first.
    pub fn fold(&self, h_deg: f64) -> f64 {
        let h = normalise_degrees(h_deg);
        match self {
            LateralSymmetry::Axial => 0.0,
            LateralSymmetry::Quadrant => {
                if h <= 90.0 {
                    h
                } else if h <= 180.0 {
                    180.0 - h
                } else if h <= 270.0 {
                    h - 180.0
                } else {
                    360.0 - h
                }
            }
            LateralSymmetry::Bilateral => {
                if h <= 180.0 {
                    h
                } else {
                    360.0 - h
                }
            }
            LateralSymmetry::Full => h,
        }
    }
}
