//! CSS-style shorthand box values.
//!
//! Padding is written the way CSS writes `padding`: a single number, or a
//! list of one to four numbers that expands clockwise from the top. The
//! expansion happens once, here; everything downstream works with a fully
//! populated [`BoxValue`].

use serde::{Deserialize, Serialize};

/// One side of a box, in CSS clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    const fn slot(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }
}

/// A shorthand value as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shorthand {
    Scalar(f64),
    Sequence(Vec<f64>),
}

/// Per-side values. Sides that were not requested hold 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxValue {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl BoxValue {
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    fn set(&mut self, side: Side, value: f64) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }

    /// left + right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// top + bottom.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Shorthand {
    /// Expand into the four `[top, right, bottom, left]` slots.
    ///
    /// Empty sequences and negative or non-finite entries read as 0.
    pub fn expand(&self) -> [f64; 4] {
        let slots = match self {
            Shorthand::Scalar(v) => [*v; 4],
            Shorthand::Sequence(values) => match values.as_slice() {
                [] => [0.0; 4],
                [a] => [*a; 4],
                [a, b] => [*a, *b, *a, *b],
                [a, b, c] => [*a, *b, *c, *b],
                [a, b, c, d, ..] => [*a, *b, *c, *d],
            },
        };
        slots.map(|v| if v.is_finite() && v > 0.0 { v } else { 0.0 })
    }

    /// The value for one side.
    pub fn value(&self, side: Side) -> f64 {
        self.expand()[side.slot()]
    }

    /// A box populated only for the requested sides.
    pub fn sides(&self, sides: &[Side]) -> BoxValue {
        let slots = self.expand();
        let mut out = BoxValue::default();
        for &side in sides {
            out.set(side, slots[side.slot()]);
        }
        out
    }

    /// A box populated for all four sides.
    pub fn resolve(&self) -> BoxValue {
        self.sides(&Side::ALL)
    }
}

impl Default for Shorthand {
    fn default() -> Self {
        Shorthand::Scalar(0.0)
    }
}

impl From<f64> for Shorthand {
    fn from(value: f64) -> Self {
        Shorthand::Scalar(value)
    }
}

impl From<Vec<f64>> for Shorthand {
    fn from(values: Vec<f64>) -> Self {
        Shorthand::Sequence(values)
    }
}

impl From<&[f64]> for Shorthand {
    fn from(values: &[f64]) -> Self {
        Shorthand::Sequence(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Shorthand {
    fn from(values: [f64; N]) -> Self {
        Shorthand::Sequence(values.to_vec())
    }
}

/// Resolve a shorthand value for a single side.
pub fn shorthand_value(value: &Shorthand, side: Side) -> f64 {
    value.value(side)
}

/// Resolve a shorthand value for a list of sides; the rest stay 0.
pub fn shorthand_sides(value: &Shorthand, sides: &[Side]) -> BoxValue {
    value.sides(sides)
}
