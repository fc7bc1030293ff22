//! Fret cells: the reference points and click rectangle for one
//! (fret, string) pair.

use serde::Serialize;

use super::fret_scale::FRET_DISTANCES;
use super::layout::*;
use crate::error::{FretboardError, Result};
use crate::fretboard::Fretboard;
use crate::pitch::{IntervalSpeller, Pitch, PitchSpeller};
use crate::shorthand::BoxValue;

/// The three x anchors of a cell, all on the string's row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FretPositions {
    /// Nut side of the cell.
    pub before: Point,
    /// Fret line closing the cell.
    pub after: Point,
    /// Midpoint, where a note marker is drawn.
    pub between: Point,
}

/// Click target of a cell.
///
/// Cells built by this module always have `x1 <= x2` and `y1 <= y2`, in
/// both handedness modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Button {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Button {
    fn spanning(xa: f64, xb: f64, y1: f64, y2: f64) -> Self {
        Self {
            x1: xa.min(xb),
            y1,
            x2: xa.max(xb),
            y2,
        }
    }

    /// Inclusive point test. Works on unnormalized rectangles too.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (left, right) = (self.x1.min(self.x2), self.x1.max(self.x2));
        let (top, bottom) = (self.y1.min(self.y2), self.y1.max(self.y2));
        x >= left && x <= right && y >= top && y <= bottom
    }
}

/// One playable position on the neck.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FretCell {
    /// Open-string pitch identifying the string.
    pub string: Pitch,
    /// 0 = open string.
    pub fret: usize,
    /// Sounded pitch.
    pub note: Pitch,
    pub frets: FretPositions,
    pub button: Button,
}

/// All per-fret and per-string coordinates for one fretboard, computed
/// once so that many cells can be located without recomputing the layout.
#[derive(Debug, Clone)]
pub struct NeckGeometry {
    width: f64,
    height: f64,
    padding: BoxValue,
    nut_width: f64,
    left_handed: bool,
    tuning: Vec<Pitch>,
    fret_xs: Vec<f64>,
    between_xs: Vec<f64>,
    rows: Vec<StringPosition>,
    spacing: f64,
}

impl NeckGeometry {
    pub fn new(fretboard: &Fretboard) -> Result<Self> {
        fretboard.validate()?;

        let Fretboard {
            width,
            height,
            ref padding,
            ref inner_padding,
            number_of_frets,
            ref tuning,
            left_handed,
            ..
        } = *fretboard;

        let fret_xs = fret_x_positions(width, padding, &FRET_DISTANCES, number_of_frets, left_handed)?;
        let between_xs =
            between_fret_x_positions(width, padding, &FRET_DISTANCES, number_of_frets, left_handed)?;
        let rows = string_positions(width, height, padding, tuning, inner_padding, left_handed);
        let padding = fretboard.padding_box();
        let spacing = string_spacing(height, &padding, &fretboard.inner_padding_box(), tuning.len());

        Ok(Self {
            width,
            height,
            padding,
            nut_width: fretboard.appearance.nut_width,
            left_handed,
            tuning: tuning.clone(),
            fret_xs,
            between_xs,
            rows,
            spacing,
        })
    }

    pub fn number_of_frets(&self) -> usize {
        self.fret_xs.len()
    }

    /// The cell for `fret` on the string at `source_index` of the tuning,
    /// reporting `note` as its sounded pitch.
    pub fn cell(&self, fret: usize, source_index: usize, note: Pitch) -> Result<FretCell> {
        if fret > self.number_of_frets() {
            return Err(FretboardError::invalid(format!(
                "fret {fret} is beyond the last fret {}",
                self.number_of_frets()
            )));
        }
        let string = self.tuning.get(source_index).ok_or_else(|| {
            FretboardError::invalid(format!(
                "string index {source_index} is outside a {}-string tuning",
                self.tuning.len()
            ))
        })?;

        let last_string = self.tuning.len() - 1;
        let y = self.rows[row_index_for_string(source_index, self.tuning.len())].y;
        let at = |x| Point { x, y };

        let p = &self.padding;
        let nut_line = if self.left_handed { self.width - p.left } else { p.left };
        let half_nut = self.nut_width / 2.0;
        let nut_edge = if self.left_handed {
            nut_line - half_nut
        } else {
            nut_line + half_nut
        };

        // Open strings sit between the canvas edge and the nut.
        let frets = if fret == 0 {
            let (before, after) = if self.left_handed {
                (nut_edge, self.width)
            } else {
                (0.0, nut_edge)
            };
            FretPositions {
                before: at(before),
                after: at(after),
                between: at(nut_line),
            }
        } else {
            let before = if fret == 1 { nut_edge } else { self.fret_xs[fret - 2] };
            FretPositions {
                before: at(before),
                after: at(self.fret_xs[fret - 1]),
                between: at(self.between_xs[fret - 1]),
            }
        };

        let mut button = Button::spanning(
            frets.before.x,
            frets.after.x,
            y - self.spacing / 2.0,
            y + self.spacing / 2.0,
        );
        // Outer strings reach the frame edge so there is no dead zone.
        if source_index == last_string {
            button.y1 = p.top;
        }
        if source_index == 0 {
            button.y2 = self.height - p.bottom;
        }

        Ok(FretCell {
            string: string.clone(),
            fret,
            note,
            frets,
            button,
        })
    }
}

/// Locate one (fret, string) cell. The sounded note is the open string
/// transposed up by `fret` semitones.
pub fn locate_fret_cell(fret: usize, string: &Pitch, fretboard: &Fretboard) -> Result<FretCell> {
    let geometry = NeckGeometry::new(fretboard)?;
    let source_index = fretboard.string_index(string).ok_or_else(|| {
        FretboardError::invalid(format!("string {string} is not part of the tuning"))
    })?;
    let note = IntervalSpeller.transpose(string, fret as i32);
    geometry.cell(fret, source_index, note)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_orders_the_x_edges() {
        let button = Button::spanning(992.0, 887.748, 270.0, 300.0);
        assert_eq!(button.x1, 887.748);
        assert_eq!(button.x2, 992.0);
    }

    #[test]
    fn contains_is_inclusive_and_order_free() {
        let flipped = Button {
            x1: 10.0,
            y1: 20.0,
            x2: 0.0,
            y2: 0.0,
        };
        assert!(flipped.contains(0.0, 0.0));
        assert!(flipped.contains(10.0, 20.0));
        assert!(flipped.contains(5.0, 5.0));
        assert!(!flipped.contains(10.5, 5.0));
        assert!(!flipped.contains(5.0, -0.1));
    }

    #[test]
    fn geometry_rejects_out_of_range_cells() {
        let geometry = NeckGeometry::new(&Fretboard::default()).unwrap();
        assert_eq!(geometry.number_of_frets(), 12);
        let note = Pitch::parse("E2").unwrap();
        assert!(geometry.cell(12, 0, note.clone()).is_ok());
        assert!(geometry.cell(13, 0, note.clone()).is_err());
        assert!(geometry.cell(0, 6, note).is_err());
    }
}
