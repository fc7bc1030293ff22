//! Anchors for the non-interactive parts of a diagram: inlay dots, fret
//! numbers and string names.

use serde::Serialize;

use super::fret_scale::FRET_DISTANCES;
use super::layout::*;
use crate::constants::{DOUBLE_INLAY_INTERVAL, FRET_LABEL_OFFSET, INLAY_FRETS, STRING_LABEL_OFFSET};
use crate::error::Result;
use crate::fretboard::Fretboard;
use crate::pitch::Pitch;

/// One inlay dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Inlay {
    pub fret: usize,
    pub center: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FretLabel {
    pub fret: usize,
    pub anchor: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLabel {
    pub string: Pitch,
    /// Pitch class with typographic accidentals.
    pub text: String,
    pub anchor: Point,
    pub align: TextAlign,
}

/// Dot centers on the marker frets that fit on the neck. Octave frets get
/// two dots, at a quarter and three quarters of the frame height.
pub fn inlay_positions(fretboard: &Fretboard) -> Result<Vec<Inlay>> {
    let between = between_fret_x_positions(
        fretboard.width,
        &fretboard.padding,
        &FRET_DISTANCES,
        fretboard.number_of_frets,
        fretboard.left_handed,
    )?;
    let p = fretboard.padding_box();
    let inner = fretboard.inner_padding_box();
    let y_offset = (inner.top - inner.bottom) / 2.0;
    let frame_height = fretboard.height - p.vertical();

    let mut dots = Vec::new();
    for fret in INLAY_FRETS.into_iter().filter(|&f| f <= fretboard.number_of_frets) {
        let x = between[fret - 1];
        if fret % DOUBLE_INLAY_INTERVAL == 0 {
            for share in [0.25, 0.75] {
                dots.push(Inlay {
                    fret,
                    center: Point {
                        x,
                        y: p.top + frame_height * share + y_offset,
                    },
                });
            }
        } else {
            dots.push(Inlay {
                fret,
                center: Point {
                    x,
                    y: (fretboard.height - p.bottom + p.top) / 2.0 + y_offset,
                },
            });
        }
    }
    Ok(dots)
}

/// Fret numbers, centered under each fret below the frame.
pub fn fret_label_positions(fretboard: &Fretboard) -> Result<Vec<FretLabel>> {
    let between = between_fret_x_positions(
        fretboard.width,
        &fretboard.padding,
        &FRET_DISTANCES,
        fretboard.number_of_frets,
        fretboard.left_handed,
    )?;
    let y = fretboard.height - fretboard.padding_box().bottom + FRET_LABEL_OFFSET;

    Ok(between
        .into_iter()
        .enumerate()
        .map(|(i, x)| FretLabel {
            fret: i + 1,
            anchor: Point { x, y },
        })
        .collect())
}

/// String names just outside the nut, top row first.
pub fn string_label_positions(fretboard: &Fretboard) -> Vec<StringLabel> {
    let rows = string_positions(
        fretboard.width,
        fretboard.height,
        &fretboard.padding,
        &fretboard.tuning,
        &fretboard.inner_padding,
        fretboard.left_handed,
    );
    let (offset, align) = if fretboard.left_handed {
        (STRING_LABEL_OFFSET, TextAlign::Left)
    } else {
        (-STRING_LABEL_OFFSET, TextAlign::Right)
    };
    let total = fretboard.tuning.len();

    rows.iter()
        .enumerate()
        .map(|(row, pos)| {
            let string = &fretboard.tuning[row_index_for_string(row, total)];
            StringLabel {
                string: string.clone(),
                text: string.pitch_class().display_name(),
                anchor: Point {
                    x: pos.x1 + offset,
                    y: pos.y,
                },
                align,
            }
        })
        .collect()
}
