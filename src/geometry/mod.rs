//! Fretboard geometry: pure functions from canvas size, padding, tuning
//! and handedness to coordinates.
//!
//! Nothing here is cached: every call recomputes from its inputs, so the
//! functions can be called from any thread.

pub mod decorations;
pub mod fret_scale;
pub mod layout;
pub mod locator;

pub use decorations::{
    fret_label_positions, inlay_positions, string_label_positions, FretLabel, Inlay, StringLabel,
    TextAlign,
};
pub use fret_scale::{check_fret_count, fret_distance, FRET_DISTANCES, MAX_FRETS};
pub use layout::{
    between_fret_x_positions, frame_positions, fret_x_positions, row_index_for_string,
    side_positions, string_positions, string_spacing, Frame, Line, Point, SidePositions,
    StringPosition,
};
pub use locator::{locate_fret_cell, Button, FretCell, FretPositions, NeckGeometry};
