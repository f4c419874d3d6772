use super::err::Error;
use serde::{Deserialize, Serialize};

/// The hard ceiling on the number of samples in a calculation grid. Requests
/// that would exceed it are refused before anything is allocated.
pub const MAX_GRID_POINTS: usize = 5_000_000;

/// The sample density of the calculation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Low,
    Medium,
    High,
}

impl Default for DetailLevel {
    fn default() -> Self {
        DetailLevel::Medium
    }
}

impl DetailLevel {
    /// The grid spacing for this detail level, in the request's length unit.
    pub fn spacing(&self) -> f64 {
        match self {
            DetailLevel::Low => 2.0,
            DetailLevel::Medium => 1.0,
            DetailLevel::High => 0.5,
        }
    }
}

/// The Cartesian sample grid on the calculation plane. Both axes run from
/// -radius to +radius inclusive at the detail level's spacing.
#[derive(Debug, Clone)]
pub struct CalcGrid {
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    spacing: f64,
    radius: f64,
}

impl CalcGrid {
    /// Lays out the grid for the given radius and detail level. The total
    /// sample count is checked against [`MAX_GRID_POINTS`] before the axes
    /// are allocated.
    pub fn new(radius: f64, detail_level: DetailLevel) -> Result<CalcGrid, Error> {
        let spacing = detail_level.spacing();

        // Slack keeps the +radius endpoint when the span divides exactly.
        let n = ((2.0 * radius) / spacing + 1.0e-9).floor() as usize + 1;
        let count = n * n;
        if count > MAX_GRID_POINTS {
            return Err(Error::TooManyPoints(count));
        }

        let axis: Vec<f64> = (0..n).map(|i| -radius + i as f64 * spacing).collect();

        Ok(CalcGrid {
            x_axis: axis.clone(),
            y_axis: axis,
            spacing,
            radius,
        })
    }

    /// Sample positions along the x axis.
    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    /// Sample positions along the y axis.
    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    /// The spacing between adjacent samples.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// The half-width of the grid.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The total number of samples in the grid.
    pub fn n_points(&self) -> usize {
        self.x_axis.len() * self.y_axis.len()
    }
}
