/// The tilt mode declared by a file's `TILT=` line.
///
/// Only `TILT=NONE` files can feed the illuminance pipeline. The other modes
/// are recognised so that rejections can name what was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TiltMode {
    /// The luminaire output does not vary with lamp tilt.
    None,
    /// Tilt angle / multiplier pairs follow inline in the file.
    Include,
    /// Tilt data lives in a sidecar file with the given name.
    File(String),
}

impl Default for TiltMode {
    fn default() -> Self {
        TiltMode::None
    }
}

impl From<&str> for TiltMode {
    fn from(value: &str) -> Self {
        match value {
            "NONE" => TiltMode::None,
            "INCLUDE" => TiltMode::Include,
            filename => TiltMode::File(filename.to_owned()),
        }
    }
}

impl std::fmt::Display for TiltMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TiltMode::None => "NONE",
                TiltMode::Include => "INCLUDE",
                TiltMode::File(ref name) => name,
            }
        )
    }
}
