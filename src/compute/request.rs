use super::err::Error;
use crate::{
    field::DetailLevel,
    units::{IlluminanceUnits, LengthUnits},
};
use serde::{Deserialize, Serialize};

/// A single requested iso-illuminance level and the colour it should be
/// rendered in. The colour is an opaque string passed through to the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsoLevel {
    pub value: f64,
    pub color: String,
}

/// The immutable input record of a compute request. Field names serialise in
/// camel case so the record can cross a JSON boundary unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    /// The length unit every height and radius below is expressed in.
    #[serde(default)]
    pub units: LengthUnits,
    /// Height of the luminaire above the reference plane.
    pub mounting_height: f64,
    /// Height of the calculation plane. Must lie below the luminaire.
    #[serde(default)]
    pub calc_plane_height: f64,
    /// The field half-width as a multiple of the mounting height.
    #[serde(default = "default_radius_factor")]
    pub radius_factor: f64,
    /// The sample density of the calculation grid.
    #[serde(default)]
    pub detail_level: DetailLevel,
    /// Light loss factor applied to every sample.
    #[serde(default = "default_llf")]
    pub llf: f64,
    /// The iso levels to contour, in the reporting illuminance unit.
    pub iso_levels: Vec<IsoLevel>,
    /// The illuminance unit results are reported in.
    #[serde(default)]
    pub illuminance_units: IlluminanceUnits,
    /// Luminaire rotation about its local X axis, in degrees.
    #[serde(default)]
    pub rotation_x: f64,
    /// Luminaire rotation about its local Y axis, in degrees.
    #[serde(default)]
    pub rotation_y: f64,
    /// Luminaire rotation about its local Z axis, in degrees.
    #[serde(default)]
    pub rotation_z: f64,
}

fn default_radius_factor() -> f64 {
    10.0
}

fn default_llf() -> f64 {
    1.0
}

impl Default for ComputeRequest {
    fn default() -> Self {
        Self {
            units: LengthUnits::default(),
            mounting_height: 0.0,
            calc_plane_height: 0.0,
            radius_factor: default_radius_factor(),
            detail_level: DetailLevel::default(),
            llf: default_llf(),
            iso_levels: Vec::new(),
            illuminance_units: IlluminanceUnits::default(),
            rotation_x: 0.0,
            rotation_y: 0.0,
            rotation_z: 0.0,
        }
    }
}

impl ComputeRequest {
    /// Checks the numeric constraints on the request.
    pub fn validate(&self) -> Result<(), Error> {
        if self.mounting_height <= 0.0 {
            return Err(Error::NonPositiveMountingHeight(self.mounting_height));
        }
        if self.calc_plane_height >= self.mounting_height {
            return Err(Error::CalcPlaneAboveLuminaire(
                self.calc_plane_height,
                self.mounting_height,
            ));
        }
        if self.radius_factor <= 0.0 {
            return Err(Error::NonPositiveRadiusFactor(self.radius_factor));
        }
        if self.llf <= 0.0 {
            return Err(Error::NonPositiveLightLossFactor(self.llf));
        }
        if self.iso_levels.is_empty() {
            return Err(Error::NoIsoLevels);
        }
        if let Some(level) = self.iso_levels.iter().find(|level| level.value <= 0.0) {
            return Err(Error::NonPositiveIsoLevel(level.value));
        }
        for (axis, angle) in [
            ('X', self.rotation_x),
            ('Y', self.rotation_y),
            ('Z', self.rotation_z),
        ] {
            if !(angle > -180.0 && angle <= 180.0) {
                return Err(Error::RotationOutOfRange(axis, angle));
            }
        }
        Ok(())
    }
}
