use super::LateralSymmetry;
use crate::{err::Error, io::ies::IesFile};
use ndarray::Array2;

/// A photometric web over a regular spherical angular grid.
///
/// Vertical angles run from nadir (0 degrees) towards zenith, horizontal
/// angles sweep around the nadir axis. The candela matrix holds one row per
/// horizontal angle, with the file's multiplying factor already applied.
#[derive(Debug, Clone)]
pub struct PhotometricWeb {
    /// Vertical angles in degrees, strictly increasing, within [0, 180].
    vertical_angles: Vec<f64>,
    /// Horizontal angles in degrees, strictly increasing from 0.
    horizontal_angles: Vec<f64>,
    /// Luminous intensities in candela, shape (n horizontal, n vertical).
    candela: Array2<f64>,
    /// The lateral symmetry regime declared by the terminal horizontal angle.
    symmetry: LateralSymmetry,
    /// The largest intensity in the web.
    max_intensity: f64,
}

impl PhotometricWeb {
    /// Builds a web from raw angle and intensity data. The candela matrix
    /// must have one row per horizontal angle and one column per vertical
    /// angle; the symmetry regime is derived from the terminal horizontal
    /// angle.
    pub fn new(
        vertical_angles: Vec<f64>,
        horizontal_angles: Vec<f64>,
        candela: Array2<f64>,
    ) -> PhotometricWeb {
        debug_assert_eq!(
            candela.dim(),
            (horizontal_angles.len(), vertical_angles.len())
        );

        let symmetry =
            LateralSymmetry::from_terminal_angle(*horizontal_angles.last().unwrap_or(&0.0));
        let max_intensity = candela.iter().copied().fold(0.0, f64::max);

        Self {
            vertical_angles,
            horizontal_angles,
            candela,
            symmetry,
            max_intensity,
        }
    }

    /// Builds the web from a parsed IES file, applying the file's candela
    /// multiplying factor.
    pub fn from_ies(ies: &IesFile) -> Result<PhotometricWeb, Error> {
        let multiplier = ies.candela_multiplying_factor();
        let scaled = ies
            .candela_values()
            .iter()
            .map(|cd| cd * multiplier)
            .collect::<Vec<f64>>();

        let candela =
            Array2::from_shape_vec((ies.n_horizontal_angles(), ies.n_vertical_angles()), scaled)
                .map_err(|e| Error::InternalError(e.to_string()))?;

        Ok(Self::new(
            ies.vertical_angles().to_vec(),
            ies.horizontal_angles().to_vec(),
            candela,
        ))
    }

    /// The number of angle pairs in the web.
    pub fn n_samples(&self) -> usize {
        self.candela.len()
    }

    /// Vertical angles in degrees.
    pub fn vertical_angles(&self) -> &[f64] {
        &self.vertical_angles
    }

    /// Horizontal angles in degrees.
    pub fn horizontal_angles(&self) -> &[f64] {
        &self.horizontal_angles
    }

    /// The candela matrix, one row per horizontal angle.
    pub fn candela(&self) -> &Array2<f64> {
        &self.candela
    }

    /// The lateral symmetry regime of the web.
    pub fn symmetry(&self) -> LateralSymmetry {
        self.symmetry
    }

    /// The largest intensity in the web.
    pub fn max_intensity(&self) -> f64 {
        self.max_intensity
    }

    /// Samples the luminous intensity at the given horizontal and vertical
    /// angle, in degrees.
    ///
    /// The vertical angle is clamped to the span the file covers. The
    /// horizontal angle is folded through the symmetry planes; a folded angle
    /// that still falls outside the stored sweep yields zero.
    pub fn sample(&self, h_deg: f64, v_deg: f64) -> f64 {
        if self.vertical_angles.is_empty() || self.horizontal_angles.is_empty() {
            return 0.0;
        }

        let first = self.vertical_angles[0];
        let last = self.vertical_angles[self.vertical_angles.len() - 1];
        let v = v_deg.clamp(first, last);

        let h = self.symmetry.fold(h_deg);
        if h < self.horizontal_angles[0] || h > self.horizontal_angles[self.horizontal_angles.len() - 1]
        {
            return 0.0;
        }

        let (ih0, ih1, th) = bracket(&self.horizontal_angles, h);
        let (iv0, iv1, tv) = bracket(&self.vertical_angles, v);

        let low = (1.0 - tv) * self.candela[[ih0, iv0]] + tv * self.candela[[ih0, iv1]];
        let high = (1.0 - tv) * self.candela[[ih1, iv0]] + tv * self.candela[[ih1, iv1]];
        (1.0 - th) * low + th * high
    }

    /// Samples a batch of angle pairs into a caller-provided buffer. This is
    /// the form the illuminance engine uses for its row sweeps.
    pub fn sample_into(&self, h_deg: &[f64], v_deg: &[f64], out: &mut [f64]) {
        for ((h, v), val) in h_deg.iter().zip(v_deg.iter()).zip(out.iter_mut()) {
            *val = self.sample(*h, *v);
        }
    }
}

/// Finds the pair of indices bracketing `x` on a strictly increasing axis,
/// along with the fractional position between them. `x` must already lie
/// within the axis span.
fn bracket(axis: &[f64], x: f64) -> (usize, usize, f64) {
    if axis.len() < 2 {
        return (0, 0, 0.0);
    }

    let hi = axis.partition_point(|a| *a <= x);
    if hi == 0 {
        return (0, 0, 0.0);
    }
    if hi == axis.len() {
        return (axis.len() - 1, axis.len() - 1, 0.0);
    }

    let lo = hi - 1;
    let t = (x - axis[lo]) / (axis[hi] - axis[lo]);
    (lo, hi, t)
}
