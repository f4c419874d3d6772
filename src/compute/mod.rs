//! Compute Pipeline
//!
//! The request/result records of the compute boundary and the orchestration
//! that takes a parsed IES file through grid layout, illuminance evaluation,
//! contour extraction and result assembly.

pub mod err;
pub mod request;
pub mod result;
pub use self::{request::*, result::*};

use crate::{
    contour::{extract_isolines, label_anchors},
    err::Error,
    field::{illuminance_field, CalcGrid, EngineSettings},
    io::ies::IesFile,
    photweb::PhotometricWeb,
};
use log::debug;
use rayon::prelude::*;


/// Runs the full compute pipeline for a parsed IES file.
pub fn compute(ies: &IesFile, request: &ComputeRequest) -> Result<ComputeResult, Error> {
    request.validate()?;

    let web = PhotometricWeb::from_ies(ies)?;

    let radius = request.radius_factor * request.mounting_height;
    let grid = CalcGrid::new(radius, request.detail_level)?;
    debug!(
        "laid out {} point grid over radius {}",
        grid.n_points(),
        radius
    );

    let settings = EngineSettings {
        mounting_height: request.mounting_height,
        calc_plane_height: request.calc_plane_height,
        llf: request.llf,
        rotation: [request.rotation_x, request.rotation_y, request.rotation_z],
        units: request.units,
        illuminance_units: request.illuminance_units,
    };
    let field = illuminance_field(&web, &grid, &settings);

    let interval = request.units.label_interval();
    let levels: Vec<IsoLevelResult> = request
        .iso_levels
        .par_iter()
        .map(|iso| {
            let paths = extract_isolines(field.x_axis(), field.y_axis(), field.values(), iso.value);
            let text = format!("{} {}", format_level(iso.value), request.illuminance_units);
            let labels = paths
                .iter()
                .flat_map(|path| label_anchors(path, interval))
                .map(|anchor| IsoLabel {
                    x: anchor[0],
                    y: anchor[1],
                    text: text.clone(),
                })
                .collect();

            IsoLevelResult {
                value: iso.value,
                color: iso.color.clone(),
                paths,
                labels,
            }
        })
        .collect();
    debug!("extracted contours for {} iso levels", levels.len());

    Ok(ComputeResult {
        units: request.units,
        illuminance_units: request.illuminance_units,
        mounting_height: request.mounting_height,
        calc_plane_height: request.calc_plane_height,
        radius,
        extents: Extents {
            min_x: -radius,
            max_x: radius,
            min_y: -radius,
            max_y: radius,
        },
        scale_bar: ScaleBar::for_units(request.units),
        levels,
    })
}

/// Parses the IES text and runs the pipeline in one step. This is the entry
/// point a file-upload adapter calls.
pub fn compute_from_str(ies_text: &str, request: &ComputeRequest) -> Result<ComputeResult, Error> {
    let ies = IesFile::parse(ies_text)?;
    compute(&ies, request)
}

/// Formats an iso value for labelling: whole numbers keep one decimal place,
/// anything else prints as-is.
fn format_level(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
