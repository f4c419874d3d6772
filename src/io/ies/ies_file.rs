use crate::err::Error;
use log::debug;
use num_enum::TryFromPrimitive;
use property::Property;
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use super::{util, IesPhotometryType, IesStandard, TiltMode};

/// The unit in which the luminous opening dimensions are measured.
#[derive(Debug, Clone, PartialEq, Eq, TryFromPrimitive)]
#[repr(usize)]
pub enum LuminousOpeningUnits {
    Feet = 1,
    Meters = 2,
}

impl Default for LuminousOpeningUnits {
    fn default() -> Self {
        LuminousOpeningUnits::Meters
    }
}

/// A parsed IES photometric file.
///
/// Candela values are stored exactly as the file carries them, one full
/// vertical sweep per horizontal angle, with the multiplying factor left
/// unapplied so that the file can be written back out unchanged.
#[derive(Default, Debug, Clone, Property)]
#[property(get(public), set(public))]
pub struct IesFile {
    /// The standard declared by the first line of the file, where recognised.
    standard: IesStandard,
    /// All lines preceding the tilt marker, kept verbatim.
    header_lines: Vec<String>,

    /// Number of lamps in the luminaire.
    n_lamps: usize,
    /// Rated lumens per lamp, or -1 for absolute photometry.
    lumens_per_lamp: f64,
    /// A multiplying factor for all the candela values in the file.
    candela_multiplying_factor: f64,
    /// The number of vertical angles in the photometric web.
    n_vertical_angles: usize,
    /// The number of horizontal angles in the photometric web.
    n_horizontal_angles: usize,
    /// The angular coordinate convention of the measurement.
    photometry: IesPhotometryType,

    // Luminous opening parameters.
    luminous_opening_units: LuminousOpeningUnits,
    luminous_opening_width: f64,
    luminous_opening_length: f64,
    luminous_opening_height: f64,

    // Ballast parameters.
    ballast_factor: f64,
    ballast_lamp_photometric_factor: f64,
    input_watts: f64,

    // Angles.
    vertical_angles: Vec<f64>,
    horizontal_angles: Vec<f64>,

    // Brightness values, measured in candela, vertical axis fastest.
    candela_values: Vec<f64>,
}

impl IesFile {
    /// Returns a new instance of an IES file with default values.
    pub fn new() -> IesFile {
        IesFile {
            ..Default::default()
        }
    }

    /// A wrapper around the parsing code, that opens a file and reads it.
    pub fn parse_file(filepath: &Path) -> Result<IesFile, Error> {
        let infile = File::open(filepath)?;
        let mut ies_string_buf = String::new();
        BufReader::new(infile).read_to_string(&mut ies_string_buf)?;
        Self::parse(&ies_string_buf)
    }

    /// Attempts to parse an input file.
    pub fn parse(ies_string: &str) -> Result<IesFile, Error> {
        let mut ies_file = IesFile::new();
        ies_file.parse_str(ies_string)?;
        Ok(ies_file)
    }

    fn parse_str(&mut self, ies_string: &str) -> Result<(), super::Error> {
        let lines: Vec<&str> = ies_string.lines().map(str::trim).collect();

        // Everything up to the tilt marker is header content, kept verbatim.
        let tilt_line = lines
            .iter()
            .position(|line| line.starts_with("TILT="))
            .ok_or(super::Error::MissingTilt)?;

        let tilt = TiltMode::from(lines[tilt_line].trim_start_matches("TILT=").trim());
        if tilt != TiltMode::None {
            return Err(super::Error::UnsupportedTilt(tilt.to_string()));
        }

        if tilt_line > 0 {
            self.standard = IesStandard::from(lines[0]);
        }
        self.header_lines = lines[..tilt_line]
            .iter()
            .map(|line| (*line).to_owned())
            .collect();

        // Flatten the remainder of the file into a single numeric stream,
        // then consume it positionally.
        let tokens = util::numeric_tokens(&lines[tilt_line + 1..].join("\n"));
        let mut stream = NumberStream::new(&tokens);

        self.n_lamps = stream.next("lamp count")? as usize;
        self.lumens_per_lamp = stream.next("lumens per lamp")?;
        self.candela_multiplying_factor = stream.next("candela multiplier")?;
        self.n_vertical_angles = stream.next("vertical angle count")? as usize;
        self.n_horizontal_angles = stream.next("horizontal angle count")? as usize;

        let phot_code = stream.next("photometric type")? as i64;
        self.photometry = usize::try_from(phot_code)
            .ok()
            .and_then(|code| IesPhotometryType::try_from(code).ok())
            .ok_or(super::Error::UnsupportedPhotometry(phot_code))?;
        if self.photometry != IesPhotometryType::TypeC {
            return Err(super::Error::UnsupportedPhotometry(phot_code));
        }

        let units_code = stream.next("luminous opening units")? as i64;
        self.luminous_opening_units = usize::try_from(units_code)
            .ok()
            .and_then(|code| LuminousOpeningUnits::try_from(code).ok())
            .ok_or(super::Error::InvalidOpeningUnits(units_code))?;

        self.luminous_opening_width = stream.next("luminous opening width")?;
        self.luminous_opening_length = stream.next("luminous opening length")?;
        self.luminous_opening_height = stream.next("luminous opening height")?;

        self.ballast_factor = stream.next("ballast factor")?;
        self.ballast_lamp_photometric_factor = stream.next("ballast-lamp photometric factor")?;
        self.input_watts = stream.next("input watts")?;

        self.vertical_angles = stream
            .take(self.n_vertical_angles, "vertical angles")?
            .to_vec();
        self.horizontal_angles = stream
            .take(self.n_horizontal_angles, "horizontal angles")?
            .to_vec();
        self.candela_values = stream
            .take(
                self.n_vertical_angles * self.n_horizontal_angles,
                "candela values",
            )?
            .to_vec();

        if !Self::vertical_angles_valid(&self.vertical_angles) {
            return Err(super::Error::VerticalAnglesInvalid);
        }
        if !Self::horizontal_angles_valid(&self.horizontal_angles) {
            return Err(super::Error::HorizontalAnglesInvalid);
        }
        if let Some(idx) = self
            .candela_values
            .iter()
            .position(|cd| !cd.is_finite() || *cd < 0.0)
        {
            return Err(super::Error::CandelaInvalid(idx));
        }

        debug!(
            "parsed IES file: {} vertical x {} horizontal angles",
            self.n_vertical_angles, self.n_horizontal_angles
        );

        Ok(())
    }

    /// Checks that the vertical angles increase strictly and stay within the
    /// nadir-to-zenith span.
    pub fn vertical_angles_valid(angles: &[f64]) -> bool {
        angles.len() >= 2
            && angles.windows(2).all(|pair| pair[0] < pair[1])
            && angles.iter().all(|ang| (0.0..=180.0).contains(ang))
    }

    /// Checks that the horizontal angles start at 0 degrees and increase
    /// strictly.
    pub fn horizontal_angles_valid(angles: &[f64]) -> bool {
        angles.first() == Some(&0.0) && angles.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl ToString for IesFile {
    /// Writes the object back out in the interchange layout. Values are
    /// written with Rust's shortest round-trip float formatting, so a
    /// parse -> write -> parse cycle reproduces the numeric content exactly.
    fn to_string(&self) -> String {
        let mut out = String::new();

        for line in &self.header_lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("TILT=NONE\n");

        out.push_str(&format!(
            "{} {} {} {} {} {} {} {} {} {}\n",
            self.n_lamps,
            self.lumens_per_lamp,
            self.candela_multiplying_factor,
            self.n_vertical_angles,
            self.n_horizontal_angles,
            self.photometry.clone() as usize,
            self.luminous_opening_units.clone() as usize,
            self.luminous_opening_width,
            self.luminous_opening_length,
            self.luminous_opening_height,
        ));
        out.push_str(&format!(
            "{} {} {}\n",
            self.ballast_factor, self.ballast_lamp_photometric_factor, self.input_watts,
        ));

        out.push_str(&join_values(&self.vertical_angles));
        out.push('\n');
        out.push_str(&join_values(&self.horizontal_angles));
        out.push('\n');

        if self.n_vertical_angles > 0 {
            for sweep in self.candela_values.chunks(self.n_vertical_angles) {
                out.push_str(&join_values(sweep));
                out.push('\n');
            }
        }

        out
    }
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A cursor over the flattened numeric payload of the file.
struct NumberStream<'a> {
    tokens: &'a [f64],
    pos: usize,
}

impl<'a> NumberStream<'a> {
    fn new(tokens: &'a [f64]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn next(&mut self, section: &'static str) -> Result<f64, super::Error> {
        let val = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or(super::Error::Truncated(section, 1, 0))?;
        self.pos += 1;
        Ok(val)
    }

    fn take(&mut self, n: usize, section: &'static str) -> Result<&'a [f64], super::Error> {
        let available = self.tokens.len() - self.pos;
        if available < n {
            return Err(super::Error::Truncated(section, n, available));
        }
        let slice = &self.tokens[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }
}
