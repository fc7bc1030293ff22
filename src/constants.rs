//! Default values and static tables (all in canvas user units).

use serde::Serialize;

// ── Canvas ──────────────────────────────────────────────────────────
pub const DEFAULT_WIDTH: f64 = 950.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;
pub const DEFAULT_PADDING_DESKTOP: [f64; 4] = [30.0, 50.0, 50.0, 70.0]; // top, right, bottom, left
pub const DEFAULT_PADDING_MOBILE: [f64; 4] = [30.0, 20.0, 50.0, 40.0];
pub const DEFAULT_INNER_PADDING: [f64; 3] = [15.0, 0.0, 20.0]; // strings inset from the frame
pub const DEFAULT_NUMBER_OF_FRETS: usize = 12;

// ── Appearance ──────────────────────────────────────────────────────
pub const DEFAULT_FONT_FAMILY: &str =
    r#""Proxima Nova", "Helvetica Neue", Helvetica, Arial, sans-serif"#;
pub const LABEL_FONT_SIZE: f64 = 16.0;
pub const NUT_WIDTH_DESKTOP: f64 = 16.0;
pub const NUT_WIDTH_MOBILE: f64 = 8.0;
pub const FRET_WIDTH_DESKTOP: f64 = 6.0;
pub const FRET_WIDTH_MOBILE: f64 = 4.0;
pub const DOT_RADIUS_DESKTOP: f64 = 10.0;
pub const DOT_RADIUS_MOBILE: f64 = 8.0;
pub const SELECTED_NOTE_RADIUS: f64 = 18.0;

// ── Decorations ─────────────────────────────────────────────────────
pub const INLAY_FRETS: [usize; 10] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24];
pub const DOUBLE_INLAY_INTERVAL: usize = 12; // octave frets get two dots
pub const FRET_LABEL_OFFSET: f64 = 10.0; // below the frame
pub const STRING_LABEL_OFFSET: f64 = 15.0; // outside the nut

// ── Colors ──────────────────────────────────────────────────────────
/// Colors a renderer uses for one neck finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub frame: &'static str,
    pub nut: &'static str,
    pub dots: &'static str,
    pub string: &'static str,
    pub string_shadow: &'static str,
    pub labels: &'static str,
    pub frets: &'static str,
}

pub const MAPLE: ColorScheme = ColorScheme {
    frame: "#F5DFB6",
    nut: "#E7D293",
    dots: "rgb(70,70,70)",
    string: "rgba(0,0,0)",
    string_shadow: "rgba(100, 100, 100, 0.1)",
    labels: "rgb(100,100,100)",
    frets: "rgb(100,100,100)",
};

pub const ROSEWOOD: ColorScheme = ColorScheme {
    frame: "#543429",
    nut: "#E7D293",
    dots: "#d8d8d8",
    string: "rgb(200,200,200)",
    string_shadow: "rgba(50, 50, 50, 0.1)",
    labels: "rgb(100,100,100)",
    frets: "rgb(150,150,150)",
};

pub const PLAIN_LIGHT: ColorScheme = ColorScheme {
    frame: "rgb(256,256,256)",
    nut: "rgb(0,0,0)",
    dots: "rgb(150,150,150)",
    string: "rgb(0,0,0)",
    string_shadow: "rgba(100, 100, 100, 0)",
    labels: "rgb(100,100,100)",
    frets: "rgb(100,100,100)",
};

pub const PLAIN_DARK: ColorScheme = ColorScheme {
    frame: "#212121",
    nut: "rgb(0,0,0)",
    dots: "rgb(170,170,170)",
    string: "rgb(150,150,150)",
    string_shadow: "rgba(100, 100, 100, 0)",
    labels: "rgb(180,180,180)",
    frets: "rgb(120,120,120)",
};
