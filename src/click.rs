//! Hit testing: which note, if any, sits under a clicked canvas point.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::fretboard::Fretboard;
use crate::pitch::Pitch;
use crate::resolver::{note_locations, NoteQuery};

/// What a click at (`x`, `y`) landed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickResult {
    pub x: f64,
    pub y: f64,
    /// Sounded note of the clicked cell.
    pub note: Option<Pitch>,
    /// Open-string pitch of the clicked string.
    pub string: Option<Pitch>,
    pub fret: Option<usize>,
}

/// Resolve a click in canvas coordinates.
///
/// Cells are tried string by string in tuning order, then fret by fret;
/// on a shared edge the first cell wins. A click outside every cell is
/// not an error, it just carries no note.
pub fn find_clicked_note(x: f64, y: f64, fretboard: &Fretboard) -> Result<ClickResult> {
    let locations = note_locations(&NoteQuery::all(), fretboard)?;
    let hit = locations.cells().find(|cell| cell.button.contains(x, y));

    debug!(x, y, hit = ?hit.map(|c| (c.string.name(), c.fret)), "fretboard click");

    Ok(ClickResult {
        x,
        y,
        note: hit.map(|c| c.note.clone()),
        string: hit.map(|c| c.string.clone()),
        fret: hit.map(|c| c.fret),
    })
}
