//! Fretboard configuration: every input the geometry engine needs,
//! bundled so a host can describe a diagram once (in Rust or as JSON).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::*;
use crate::error::{FretboardError, Result};
use crate::geometry::fret_scale::{check_fret_count, FRET_DISTANCES};
use crate::pitch::{Pitch, OCTAVE_RANGE};
use crate::shorthand::{BoxValue, Shorthand, Side};
use crate::tuning::Instrument;

/// Neck finish, which selects a color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeckType {
    #[default]
    Plain,
    Maple,
    Rosewood,
}

/// Visual sizes that affect geometry (nut width) or that renderers read
/// alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub font_family: String,
    pub label_font_size: f64,
    /// Width of the nut; fret 1 starts half of it past the nut line.
    pub nut_width: f64,
    pub fret_width: f64,
    pub dot_radius: f64,
    pub selected_note_radius: f64,
}

impl Appearance {
    pub fn desktop() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            label_font_size: LABEL_FONT_SIZE,
            nut_width: NUT_WIDTH_DESKTOP,
            fret_width: FRET_WIDTH_DESKTOP,
            dot_radius: DOT_RADIUS_DESKTOP,
            selected_note_radius: SELECTED_NOTE_RADIUS,
        }
    }

    pub fn mobile() -> Self {
        Self {
            nut_width: NUT_WIDTH_MOBILE,
            fret_width: FRET_WIDTH_MOBILE,
            dot_radius: DOT_RADIUS_MOBILE,
            ..Self::desktop()
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::desktop()
    }
}

/// A complete fretboard description.
///
/// Missing JSON fields take the defaults of a 950×300 desktop guitar
/// diagram with 12 frets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fretboard {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Space between the canvas edge and the neck (CSS shorthand).
    pub padding: Shorthand,
    /// Space between the neck edge and the outer strings; only top and
    /// bottom are used.
    pub inner_padding: Shorthand,
    pub number_of_frets: usize,
    /// Open-string pitches, lowest string first.
    pub tuning: Vec<Pitch>,
    pub appearance: Appearance,
    pub neck_type: NeckType,
    pub dark_mode: bool,
    pub left_handed: bool,
}

impl Default for Fretboard {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: Shorthand::from(DEFAULT_PADDING_DESKTOP),
            inner_padding: Shorthand::from(DEFAULT_INNER_PADDING),
            number_of_frets: DEFAULT_NUMBER_OF_FRETS,
            tuning: Instrument::Guitar.standard_tuning(),
            appearance: Appearance::default(),
            neck_type: NeckType::default(),
            dark_mode: false,
            left_handed: false,
        }
    }
}

impl Fretboard {
    /// Decode and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let fretboard: Fretboard = serde_json::from_str(json)?;
        fretboard.validate()?;
        Ok(fretboard)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the preconditions every geometry call relies on.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                warn!(field = label, value, "rejecting fretboard size");
                return Err(FretboardError::invalid(format!(
                    "{label} must be a positive number, got {value}"
                )));
            }
        }

        check_fret_count(&FRET_DISTANCES, self.number_of_frets).inspect_err(|_| {
            warn!(number_of_frets = self.number_of_frets, "rejecting fret count");
        })?;

        if self.tuning.is_empty() {
            warn!("rejecting empty tuning");
            return Err(FretboardError::invalid("tuning must contain at least one string"));
        }
        for (i, string) in self.tuning.iter().enumerate() {
            if !string.in_octave_range() {
                warn!(%string, "rejecting string octave");
                return Err(FretboardError::invalid(format!(
                    "string {string} has an octave outside {}..={}",
                    OCTAVE_RANGE.start(),
                    OCTAVE_RANGE.end()
                )));
            }
            if self.tuning[..i].contains(string) {
                warn!(%string, "rejecting duplicate string");
                return Err(FretboardError::invalid(format!(
                    "string {string} appears more than once in the tuning"
                )));
            }
        }
        Ok(())
    }

    /// Padding resolved for all four sides.
    pub fn padding_box(&self) -> BoxValue {
        self.padding.resolve()
    }

    /// Inner padding; only top and bottom carry meaning.
    pub fn inner_padding_box(&self) -> BoxValue {
        self.inner_padding.sides(&[Side::Top, Side::Bottom])
    }

    /// Position of `string` in the tuning, lowest string = 0.
    pub fn string_index(&self, string: &Pitch) -> Option<usize> {
        self.tuning.iter().position(|s| s == string)
    }

    pub fn color_scheme(&self) -> &'static ColorScheme {
        match (self.neck_type, self.dark_mode) {
            (NeckType::Maple, _) => &MAPLE,
            (NeckType::Rosewood, _) => &ROSEWOOD,
            (NeckType::Plain, false) => &PLAIN_LIGHT,
            (NeckType::Plain, true) => &PLAIN_DARK,
        }
    }
}
