use std::fmt::Display;

#[derive(Debug, Clone)]
pub enum Error {
    NonPositiveMountingHeight(f64),
    CalcPlaneAboveLuminaire(f64, f64),
    NonPositiveRadiusFactor(f64),
    NonPositiveLightLossFactor(f64),
    NoIsoLevels,
    NonPositiveIsoLevel(f64),
    RotationOutOfRange(char, f64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", {
            match self {
                Error::NonPositiveMountingHeight(ref mh) => {
                    format!("Mounting height must be positive, got {}. ", mh)
                }
                Error::CalcPlaneAboveLuminaire(ref calc, ref mh) => {
                    format!(
                        "The calculation plane ({}) must lie below the mounting height ({}). ",
                        calc, mh
                    )
                }
                Error::NonPositiveRadiusFactor(ref factor) => {
                    format!("Radius factor must be positive, got {}. ", factor)
                }
                Error::NonPositiveLightLossFactor(ref llf) => {
                    format!("Light loss factor must be positive, got {}. ", llf)
                }
                Error::NoIsoLevels => "At least one iso level is required. ".to_string(),
                Error::NonPositiveIsoLevel(ref value) => {
                    format!("Iso level values must be positive, got {}. ", value)
                }
                Error::RotationOutOfRange(ref axis, ref angle) => {
                    format!(
                        "Rotation about {} must lie within (-180, 180] degrees, got {}. ",
                        axis, angle
                    )
                }
            }
        })
    }
}
