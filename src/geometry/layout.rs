//! Layout computation: the frame, nut, fret lines and string lines of a
//! fretboard for a given canvas size, padding and handedness.
//!
//! Left-handed layouts are mirror images: every x coordinate becomes
//! `width - x`. Heights and y coordinates never change.

use serde::Serialize;

use super::fret_scale::check_fret_count;
use crate::error::Result;
use crate::pitch::Pitch;
use crate::shorthand::{BoxValue, Shorthand, Side};

// ═══════════════════════════════════════════════════════════════════════
// Layout structures
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The drawable neck area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// The two vertical boundaries of the neck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SidePositions {
    pub nut: Line,
    pub last_fret: Line,
}

/// One horizontal string line. `x1` is always the nut end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StringPosition {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

// ═══════════════════════════════════════════════════════════════════════
// Helper functions
// ═══════════════════════════════════════════════════════════════════════

/// Screen row (0 = top) of the string at `source_index` in the tuning.
///
/// Tunings list the lowest string first but the lowest string is drawn at
/// the bottom, so the order flips. The mapping is its own inverse: passing
/// a row index returns the tuning index drawn on that row.
pub fn row_index_for_string(source_index: usize, total_strings: usize) -> usize {
    total_strings.saturating_sub(source_index + 1)
}

/// Vertical distance between neighbouring strings.
///
/// A single string gets the whole available height, which places it on
/// the top inner edge.
pub fn string_spacing(height: f64, padding: &BoxValue, inner: &BoxValue, string_count: usize) -> f64 {
    let available = height - padding.vertical() - inner.vertical();
    if string_count > 1 {
        available / (string_count - 1) as f64
    } else {
        available
    }
}

fn mirror(x: f64, width: f64, left_handed: bool) -> f64 {
    if left_handed {
        width - x
    } else {
        x
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Main layout computation
// ═══════════════════════════════════════════════════════════════════════

/// The canvas minus its padding. Left-handed frames start after the right
/// padding instead of the left one.
pub fn frame_positions(padding: &Shorthand, width: f64, height: f64, left_handed: bool) -> Frame {
    let p = padding.resolve();
    Frame {
        x: if left_handed { p.right } else { p.left },
        y: p.top,
        width: width - p.horizontal(),
        height: height - p.vertical(),
    }
}

/// Nut and last-fret lines, spanning the padded height.
pub fn side_positions(padding: &Shorthand, width: f64, height: f64, left_handed: bool) -> SidePositions {
    let p = padding.resolve();
    let (nut_x, last_x) = if left_handed {
        (width - p.left, p.right)
    } else {
        (p.left, width - p.right)
    };
    let vertical = |x| Line {
        x1: x,
        y1: p.top,
        x2: x,
        y2: height - p.bottom,
    };
    SidePositions {
        nut: vertical(nut_x),
        last_fret: vertical(last_x),
    }
}

/// X coordinate of every fret line, fret 1 first.
///
/// The last requested fret always lands on the far frame edge.
pub fn fret_x_positions(
    width: f64,
    padding: &Shorthand,
    fret_distances: &[f64],
    number_of_frets: usize,
    left_handed: bool,
) -> Result<Vec<f64>> {
    check_fret_count(fret_distances, number_of_frets)?;
    let p = padding.sides(&[Side::Right, Side::Left]);
    let frame_width = width - p.horizontal();
    let last = fret_distances[number_of_frets - 1];

    Ok(fret_distances[..number_of_frets]
        .iter()
        .map(|d| mirror((d / last) * frame_width + p.left, width, left_handed))
        .collect())
}

/// X coordinate halfway between each fret and the one before it (the nut
/// for fret 1). This is where dots and note markers go.
pub fn between_fret_x_positions(
    width: f64,
    padding: &Shorthand,
    fret_distances: &[f64],
    number_of_frets: usize,
    left_handed: bool,
) -> Result<Vec<f64>> {
    let frets = fret_x_positions(width, padding, fret_distances, number_of_frets, left_handed)?;
    let nut = mirror(padding.value(Side::Left), width, left_handed);

    Ok(frets
        .iter()
        .enumerate()
        .map(|(i, &right)| {
            let left = if i == 0 { nut } else { frets[i - 1] };
            left + (right - left) / 2.0
        })
        .collect())
}

/// String lines, evenly spaced from the top inner edge down, in tuning
/// order. Use [`row_index_for_string`] to find the row of a given string.
pub fn string_positions(
    width: f64,
    height: f64,
    padding: &Shorthand,
    tuning: &[Pitch],
    inner_padding: &Shorthand,
    left_handed: bool,
) -> Vec<StringPosition> {
    let p = padding.resolve();
    let inner = inner_padding.sides(&[Side::Top, Side::Bottom]);
    let spacing = string_spacing(height, &p, &inner, tuning.len());
    let x1 = mirror(p.left, width, left_handed);
    let x2 = if left_handed { p.right } else { width - p.right };

    (0..tuning.len())
        .map(|i| StringPosition {
            x1,
            x2,
            y: p.top + inner.top + spacing * i as f64,
        })
        .collect()
}
