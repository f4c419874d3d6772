use super::{LateralSymmetry, PhotometricWeb};
use crate::io::ies::IesFile;
use approx::assert_abs_diff_eq;
use ndarray::{arr2, Array2};

fn quadrant_web() -> PhotometricWeb {
    // Distinct values in every cell so folding mistakes show up.
    PhotometricWeb::new(
        vec![0.0, 45.0, 90.0],
        vec![0.0, 45.0, 90.0],
        arr2(&[
            [1000.0, 800.0, 100.0],
            [900.0, 700.0, 80.0],
            [850.0, 600.0, 50.0],
        ]),
    )
}

#[test]
fn test_symmetry_from_terminal_angle() {
    assert_eq!(LateralSymmetry::from_terminal_angle(0.0), LateralSymmetry::Axial);
    assert_eq!(LateralSymmetry::from_terminal_angle(90.0), LateralSymmetry::Quadrant);
    assert_eq!(LateralSymmetry::from_terminal_angle(180.0), LateralSymmetry::Bilateral);
    assert_eq!(LateralSymmetry::from_terminal_angle(360.0), LateralSymmetry::Full);
    assert_eq!(LateralSymmetry::from_terminal_angle(345.0), LateralSymmetry::Full);
}

#[test]
fn test_quadrant_fold() {
    let sym = LateralSymmetry::Quadrant;
    assert_eq!(sym.fold(30.0), 30.0);
    assert_eq!(sym.fold(135.0), 45.0);
    assert_eq!(sym.fold(180.0), 0.0);
    assert_eq!(sym.fold(225.0), 45.0);
    assert_eq!(sym.fold(315.0), 45.0);
    assert_eq!(sym.fold(-45.0), 45.0);
}

#[test]
fn test_bilateral_fold() {
    let sym = LateralSymmetry::Bilateral;
    assert_eq!(sym.fold(170.0), 170.0);
    assert_eq!(sym.fold(190.0), 170.0);
    assert_eq!(sym.fold(359.0), 1.0);
    assert_eq!(sym.fold(-10.0), 10.0);
}

#[test]
fn test_axial_fold() {
    let sym = LateralSymmetry::Axial;
    assert_eq!(sym.fold(0.0), 0.0);
    assert_eq!(sym.fold(123.4), 0.0);
    assert_eq!(sym.fold(-271.0), 0.0);
}

/// The resolver's value for any horizontal angle must equal its value for
/// the folded angle exactly, for every symmetry regime.
#[test]
fn test_symmetry_consistency() {
    let quad = quadrant_web();
    for v in [0.0, 22.5, 45.0, 67.5, 90.0] {
        assert_eq!(quad.sample(135.0, v), quad.sample(45.0, v));
        assert_eq!(quad.sample(225.0, v), quad.sample(45.0, v));
        assert_eq!(quad.sample(315.0, v), quad.sample(45.0, v));
        assert_eq!(quad.sample(100.0, v), quad.sample(80.0, v));
    }

    let bilateral = PhotometricWeb::new(
        vec![0.0, 90.0],
        vec![0.0, 90.0, 180.0],
        arr2(&[[1000.0, 100.0], [800.0, 90.0], [600.0, 40.0]]),
    );
    assert_eq!(bilateral.symmetry(), LateralSymmetry::Bilateral);
    for h in [185.0, 270.0, 359.5] {
        assert_eq!(bilateral.sample(h, 45.0), bilateral.sample(360.0 - h, 45.0));
    }

    let axial = PhotometricWeb::new(
        vec![0.0, 90.0, 180.0],
        vec![0.0],
        arr2(&[[1000.0, 500.0, 0.0]]),
    );
    assert_eq!(axial.symmetry(), LateralSymmetry::Axial);
    for h in [0.0, 17.0, 90.0, 254.3] {
        assert_eq!(axial.sample(h, 45.0), axial.sample(0.0, 45.0));
    }
}

#[test]
fn test_bilinear_interpolation() {
    let web = PhotometricWeb::new(
        vec![0.0, 10.0],
        vec![0.0, 90.0],
        arr2(&[[1.0, 2.0], [3.0, 4.0]]),
    );

    // Dead centre of the cell averages all four corners.
    assert_abs_diff_eq!(web.sample(45.0, 5.0), 2.5, epsilon = 1.0e-12);

    // On the nodes the stored values come back exactly.
    assert_eq!(web.sample(0.0, 0.0), 1.0);
    assert_eq!(web.sample(0.0, 10.0), 2.0);
    assert_eq!(web.sample(90.0, 0.0), 3.0);
    assert_eq!(web.sample(90.0, 10.0), 4.0);

    // Part-way along a single edge.
    assert_abs_diff_eq!(web.sample(0.0, 2.5), 1.25, epsilon = 1.0e-12);
}

#[test]
fn test_vertical_clamp() {
    let web = quadrant_web();
    assert_eq!(web.sample(0.0, -5.0), web.sample(0.0, 0.0));
    assert_eq!(web.sample(0.0, 175.0), web.sample(0.0, 90.0));
}

#[test]
fn test_full_sweep_out_of_grid() {
    // A terminal angle of 345 degrees leaves a wedge the web does not cover.
    let web = PhotometricWeb::new(
        vec![0.0, 90.0],
        vec![0.0, 115.0, 230.0, 345.0],
        arr2(&[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]]),
    );
    assert_eq!(web.symmetry(), LateralSymmetry::Full);
    assert_eq!(web.sample(350.0, 45.0), 0.0);
    assert_abs_diff_eq!(web.sample(115.0, 45.0), 2.0, epsilon = 1.0e-12);
}

#[test]
fn test_from_ies_applies_multiplier() {
    let contents = "TILT=NONE
1 5000 2.0 2 2 1 1
1.2 1.2 0.0
1.0 1.0 100.0
0.0 90.0
0.0 90.0
500.0 400.0
450.0 350.0
";
    let ies = IesFile::parse(contents).expect("fixture should parse");
    let web = PhotometricWeb::from_ies(&ies).expect("web should build");

    assert_eq!(web.symmetry(), LateralSymmetry::Quadrant);
    assert_eq!(web.candela()[[0, 0]], 1000.0);
    assert_eq!(web.candela()[[1, 1]], 700.0);
    assert_eq!(web.max_intensity(), 1000.0);
    assert_eq!(web.n_samples(), 4);
}

#[test]
fn test_sample_into_matches_scalar() {
    let web = quadrant_web();
    let h = vec![0.0, 45.0, 135.0, 310.0];
    let v = vec![0.0, 30.0, 60.0, 89.0];
    let mut out = vec![0.0; 4];
    web.sample_into(&h, &v, &mut out);

    let expected: Vec<f64> = h
        .iter()
        .zip(v.iter())
        .map(|(h, v)| web.sample(*h, *v))
        .collect();
    assert_eq!(out, expected);
}

#[test]
fn test_zero_web() {
    let web = PhotometricWeb::new(
        vec![0.0, 90.0],
        vec![0.0],
        Array2::zeros((1, 2)),
    );
    assert_eq!(web.max_intensity(), 0.0);
    assert_eq!(web.sample(12.0, 34.0), 0.0);
}
