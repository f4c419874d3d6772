use std::fmt::Display;

#[derive(Debug, Clone)]
pub enum Error {
    MissingTilt,
    UnsupportedTilt(String),
    UnsupportedPhotometry(i64),
    InvalidOpeningUnits(i64),
    Truncated(&'static str, usize, usize),
    VerticalAnglesInvalid,
    HorizontalAnglesInvalid,
    CandelaInvalid(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", {
            match self {
                Error::MissingTilt => {
                    "The file does not contain a TILT= line. ".to_string()
                }
                Error::UnsupportedTilt(ref mode) => {
                    format!("Unsupported tilt mode TILT={}. Only TILT=NONE is supported. ", mode)
                }
                Error::UnsupportedPhotometry(ref code) => {
                    format!("Unsupported photometric type {}. Only Type C (1) is supported. ", code)
                }
                Error::InvalidOpeningUnits(ref code) => {
                    format!("Invalid luminous opening units code {}. ", code)
                }
                Error::Truncated(ref section, ref expected, ref found) => {
                    format!(
                        "Numeric stream truncated while reading {}. Expected {} values, but found {}. ",
                        section, expected, found
                    )
                }
                Error::VerticalAnglesInvalid => {
                    "Vertical angles are invalid. They must increase strictly from nadir and lie within [0, 180] degrees. ".to_string()
                }
                Error::HorizontalAnglesInvalid => {
                    "Horizontal angles are invalid. They must start at 0 degrees and increase strictly. ".to_string()
                }
                Error::CandelaInvalid(ref idx) => {
                    format!("Candela value at index {} is not a finite, non-negative number. ", idx)
                }
            }
        })
    }
}
