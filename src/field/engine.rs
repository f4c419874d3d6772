use super::CalcGrid;
use crate::{
    photweb::PhotometricWeb,
    units::{convert_illuminance, IlluminanceUnits, LengthUnits},
    util::geom::{degrees_to_radians, normalise_degrees, radians_to_degrees},
};
use log::{debug, warn};
use nalgebra::{Rotation3, Vector3};
use ndarray::{Array1, Array2, Zip};

/// Distance floor that keeps the inverse-cube law finite when a sample point
/// coincides with the luminaire.
const MIN_DISTANCE: f64 = 1.0e-9;

/// Everything the engine needs to know about a compute request beyond the
/// photometric web and the grid itself.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Height of the luminaire above the reference plane.
    pub mounting_height: f64,
    /// Height of the calculation plane above the reference plane.
    pub calc_plane_height: f64,
    /// Light loss factor applied to every sample.
    pub llf: f64,
    /// Luminaire rotation about its local X, Y and Z axes, in degrees.
    pub rotation: [f64; 3],
    /// The length unit the request geometry is expressed in.
    pub units: LengthUnits,
    /// The illuminance unit results are reported in.
    pub illuminance_units: IlluminanceUnits,
}

/// The computed illuminance field over the calculation grid.
#[derive(Debug, Clone)]
pub struct ScalarField {
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    values: Array2<f64>,
}

impl ScalarField {
    /// Sample positions along the x axis.
    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    /// Sample positions along the y axis.
    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    /// Illuminance samples, one row per y-axis position.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
}

/// Evaluates the illuminance field over the grid.
///
/// Grid points are taken in luminaire-centred coordinates, so each world
/// vector is `(x, y, -dz)` with `dz` the drop from the luminaire to the
/// calculation plane. The luminaire's own rotation is applied by rotating
/// those vectors into the luminaire's local frame before the angular lookup;
/// the distance and the incidence cosine are rotation-invariant, so the
/// point-source law `E = I * dz / d^3` uses the unrotated geometry.
pub fn illuminance_field(
    web: &PhotometricWeb,
    grid: &CalcGrid,
    settings: &EngineSettings,
) -> ScalarField {
    let nx = grid.x_axis().len();
    let ny = grid.y_axis().len();
    let mut values = Array2::<f64>::zeros((ny, nx));

    let dz = settings.mounting_height - settings.calc_plane_height;
    if dz > 0.0 {
        let rot_inv = inverse_rotation(&settings.rotation);
        let llf = settings.llf;
        let y_axis = Array1::from(grid.y_axis().to_vec());

        Zip::from(values.rows_mut())
            .and(&y_axis)
            .par_for_each(|mut row, &y| {
                let mut h_angles = vec![0.0; nx];
                let mut v_angles = vec![0.0; nx];
                let mut intensity = vec![0.0; nx];
                let mut falloff = vec![0.0; nx];

                for (i, x) in grid.x_axis().iter().enumerate() {
                    let d = (x * x + y * y + dz * dz).sqrt().max(MIN_DISTANCE);
                    let local = rot_inv * Vector3::new(*x, y, -dz);

                    let cos_v = (-local.z / d).clamp(-1.0, 1.0);
                    v_angles[i] = radians_to_degrees(cos_v.acos());
                    h_angles[i] = normalise_degrees(radians_to_degrees(local.y.atan2(local.x)));
                    falloff[i] = dz / (d * d * d);
                }

                web.sample_into(&h_angles, &v_angles, &mut intensity);

                for (i, e) in row.iter_mut().enumerate() {
                    *e = intensity[i] * falloff[i] * llf;
                }
            });
    } else {
        debug!("calculation plane at or above the luminaire, field is zero");
    }

    let native = settings.units.native_illuminance();
    if settings.illuminance_units != native {
        values.mapv_inplace(|e| convert_illuminance(e, native, settings.illuminance_units));
    }

    // Scrub any non-finite samples once the sweep is complete, so nothing
    // propagates into contouring.
    let mut scrubbed: usize = 0;
    values.mapv_inplace(|e| {
        if e.is_finite() {
            e
        } else {
            scrubbed += 1;
            0.0
        }
    });
    if scrubbed > 0 {
        warn!("scrubbed {} non-finite illuminance samples", scrubbed);
    }

    ScalarField {
        x_axis: grid.x_axis().to_vec(),
        y_axis: grid.y_axis().to_vec(),
        values,
    }
}

/// The world-to-local rotation for a luminaire rotated by intrinsic X -> Y ->
/// Z Euler angles: the inverse composition, applied in reverse order with
/// negated angles.
fn inverse_rotation(rotation_deg: &[f64; 3]) -> Rotation3<f64> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), degrees_to_radians(-rotation_deg[0]));
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), degrees_to_radians(-rotation_deg[1]));
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), degrees_to_radians(-rotation_deg[2]));
    rx * ry * rz
}
