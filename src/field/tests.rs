use super::{illuminance_field, CalcGrid, DetailLevel, EngineSettings, MAX_GRID_POINTS};
use crate::{
    photweb::PhotometricWeb,
    units::{IlluminanceUnits, LengthUnits, FC_TO_LUX},
    util::geom::{degrees_to_radians, normalise_degrees, radians_to_degrees},
};
use approx::assert_abs_diff_eq;
use ndarray::Array2;

/// An axially symmetric source with the same intensity at every angle.
fn isotropic_web(intensity: f64) -> PhotometricWeb {
    PhotometricWeb::new(
        vec![0.0, 90.0, 180.0],
        vec![0.0],
        Array2::from_elem((1, 3), intensity),
    )
}

/// An axially symmetric Lambertian downlight, `I(v) = 1000 cos(v)`.
fn lambertian_web() -> PhotometricWeb {
    let verticals: Vec<f64> = (0..=18).map(|i| i as f64 * 5.0).collect();
    let candela: Vec<f64> = verticals
        .iter()
        .map(|v| 1000.0 * degrees_to_radians(*v).cos())
        .collect();
    let n = verticals.len();
    PhotometricWeb::new(
        verticals,
        vec![0.0],
        Array2::from_shape_vec((1, n), candela).unwrap(),
    )
}

/// A bilaterally symmetric web with smooth variation in both angles.
fn bilateral_web() -> PhotometricWeb {
    let verticals: Vec<f64> = (0..=6).map(|i| i as f64 * 15.0).collect();
    let horizontals: Vec<f64> = (0..=6).map(|i| i as f64 * 30.0).collect();
    let mut candela = Array2::zeros((horizontals.len(), verticals.len()));
    for (ih, h) in horizontals.iter().enumerate() {
        for (iv, v) in verticals.iter().enumerate() {
            candela[[ih, iv]] =
                500.0 + 400.0 * degrees_to_radians(*h).cos() * degrees_to_radians(*v).sin();
        }
    }
    PhotometricWeb::new(verticals, horizontals, candela)
}

fn settings() -> EngineSettings {
    EngineSettings {
        mounting_height: 10.0,
        calc_plane_height: 0.0,
        llf: 1.0,
        rotation: [0.0, 0.0, 0.0],
        units: LengthUnits::Feet,
        illuminance_units: IlluminanceUnits::Footcandles,
    }
}

#[test]
fn test_grid_axes() {
    let grid = CalcGrid::new(10.0, DetailLevel::Low).unwrap();
    assert_eq!(grid.x_axis().len(), 11);
    assert_eq!(grid.x_axis()[0], -10.0);
    assert_eq!(grid.x_axis()[10], 10.0);
    assert_eq!(grid.spacing(), 2.0);

    let grid = CalcGrid::new(10.0, DetailLevel::Medium).unwrap();
    assert_eq!(grid.x_axis().len(), 21);
    assert_eq!(grid.n_points(), 441);

    let grid = CalcGrid::new(10.0, DetailLevel::High).unwrap();
    assert_eq!(grid.x_axis().len(), 41);
    assert_eq!(grid.y_axis().len(), 41);
}

/// A grid that would exceed the point ceiling is refused with the offending
/// count, before anything is allocated.
#[test]
fn test_grid_capacity() {
    match CalcGrid::new(1000.0, DetailLevel::High) {
        Err(super::err::Error::TooManyPoints(count)) => {
            assert_eq!(count, 4001 * 4001);
            assert!(count > MAX_GRID_POINTS);
            assert!(super::err::Error::TooManyPoints(count)
                .to_string()
                .contains("16008001"));
        }
        Ok(_) => assert!(false, "expected the grid to be refused"),
    }
}

#[test]
fn test_zero_field_when_plane_at_luminaire() {
    let web = isotropic_web(1000.0);
    let grid = CalcGrid::new(10.0, DetailLevel::Medium).unwrap();
    let mut cfg = settings();
    cfg.calc_plane_height = 10.0;

    let field = illuminance_field(&web, &grid, &cfg);
    assert!(field.values().iter().all(|e| *e == 0.0));
}

/// On the nadir line the illuminance reduces to `I / dz^2` exactly.
#[test]
fn test_nadir_inverse_square() {
    let web = isotropic_web(1000.0);
    let grid = CalcGrid::new(10.0, DetailLevel::Medium).unwrap();

    let field = illuminance_field(&web, &grid, &settings());
    // Centre of the 21 x 21 grid is the nadir point.
    assert_eq!(field.values()[[10, 10]], 10.0);
}

/// With zero rotation the engine must agree with the point-source law
/// evaluated directly.
#[test]
fn test_rotation_identity() {
    let web = bilateral_web();
    let grid = CalcGrid::new(10.0, DetailLevel::Medium).unwrap();
    let field = illuminance_field(&web, &grid, &settings());

    let dz = 10.0;
    for (j, y) in grid.y_axis().iter().enumerate() {
        for (i, x) in grid.x_axis().iter().enumerate() {
            let d = (x * x + y * y + dz * dz).sqrt();
            let v = radians_to_degrees((dz / d).clamp(-1.0, 1.0).acos());
            let h = normalise_degrees(radians_to_degrees(y.atan2(*x)));
            let expected = web.sample(h, v) * dz / (d * d * d);
            assert_abs_diff_eq!(field.values()[[j, i]], expected, epsilon = 1.0e-12);
        }
    }
}

/// An axially symmetric source cannot care about rotation around the
/// vertical axis.
#[test]
fn test_axial_rz_invariance() {
    let web = lambertian_web();
    let grid = CalcGrid::new(10.0, DetailLevel::Medium).unwrap();

    let reference = illuminance_field(&web, &grid, &settings());
    for rz in [37.5, 90.0, 180.0, -120.25] {
        let mut cfg = settings();
        cfg.rotation = [0.0, 0.0, rz];
        let rotated = illuminance_field(&web, &grid, &cfg);
        assert_eq!(rotated.values(), reference.values());
    }
}

/// Doubling the light loss factor doubles every sample exactly.
#[test]
fn test_llf_scaling() {
    let web = bilateral_web();
    let grid = CalcGrid::new(10.0, DetailLevel::Medium).unwrap();

    let base = illuminance_field(&web, &grid, &settings());
    let mut cfg = settings();
    cfg.llf = 2.0;
    let doubled = illuminance_field(&web, &grid, &cfg);

    for (a, b) in base.values().iter().zip(doubled.values().iter()) {
        assert_eq!(*b, 2.0 * *a);
    }
}

/// A Lambertian downlight peaks at nadir and decays monotonically with
/// horizontal distance.
#[test]
fn test_lambertian_decay() {
    let web = lambertian_web();
    let grid = CalcGrid::new(50.0, DetailLevel::Medium).unwrap();
    let field = illuminance_field(&web, &grid, &settings());

    let centre = 50;
    assert_eq!(field.values()[[centre, centre]], 10.0);

    let mut previous = f64::INFINITY;
    for i in centre..grid.x_axis().len() {
        let e = field.values()[[centre, i]];
        assert!(e <= previous + 1.0e-12, "field rises away from nadir");
        assert!(e >= 0.0);
        previous = e;
    }
}

/// Rotating a bilateral luminaire 90 degrees about Z rotates the output
/// field 90 degrees about the origin.
#[test]
fn test_bilateral_rotation_about_z() {
    let web = bilateral_web();
    let grid = CalcGrid::new(10.0, DetailLevel::Medium).unwrap();

    let unrotated = illuminance_field(&web, &grid, &settings());
    let mut cfg = settings();
    cfg.rotation = [0.0, 0.0, 90.0];
    let rotated = illuminance_field(&web, &grid, &cfg);

    let n = grid.x_axis().len();
    for iy in 0..n {
        for ix in 0..n {
            assert_abs_diff_eq!(
                rotated.values()[[iy, ix]],
                unrotated.values()[[n - 1 - ix, iy]],
                epsilon = 1.0e-9
            );
        }
    }
}

/// A 1000 cd isotropic source one meter up yields 1000 lux at nadir,
/// reported as 1000 / 10.7639 footcandles when the request asks for fc.
#[test]
fn test_meter_geometry_reported_in_footcandles() {
    let web = isotropic_web(1000.0);
    let grid = CalcGrid::new(2.0, DetailLevel::Medium).unwrap();
    let cfg = EngineSettings {
        mounting_height: 1.0,
        calc_plane_height: 0.0,
        llf: 1.0,
        rotation: [0.0, 0.0, 0.0],
        units: LengthUnits::Meters,
        illuminance_units: IlluminanceUnits::Footcandles,
    };

    let field = illuminance_field(&web, &grid, &cfg);
    assert_abs_diff_eq!(field.values()[[2, 2]], 1000.0 / FC_TO_LUX, epsilon = 1.0e-9);
    assert_abs_diff_eq!(field.values()[[2, 2]], 92.903, epsilon = 1.0e-2);
}

/// Non-finite intensities must never reach the caller; they are scrubbed to
/// zero once the sweep completes.
#[test]
fn test_non_finite_samples_scrubbed() {
    let web = PhotometricWeb::new(
        vec![0.0, 180.0],
        vec![0.0],
        Array2::from_elem((1, 2), f64::INFINITY),
    );
    let grid = CalcGrid::new(5.0, DetailLevel::Medium).unwrap();
    let field = illuminance_field(&web, &grid, &settings());
    assert!(field.values().iter().all(|e| *e == 0.0));
}
