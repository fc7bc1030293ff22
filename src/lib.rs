//! fretlib: fretboard geometry and note locations for stringed-instrument
//! diagrams.
//!
//! Given a canvas size, padding, tuning and handedness, fretlib computes
//! where the frame, frets and strings go, and where any note can be
//! played on the neck (including enharmonic spellings). Drawing is left to
//! the host; everything here is a pure function of its inputs.
//!
//! # Example
//! ```no_run
//! use fretlib::{note_locations, Fretboard, NoteQuery, Pitch};
//!
//! let fretboard = Fretboard::default();
//! let query = NoteQuery::note(Pitch::parse("C").unwrap());
//! let locations = note_locations(&query, &fretboard).unwrap();
//! for cell in locations.cells() {
//!     println!("{} fret {}: {}", cell.string, cell.fret, cell.note);
//! }
//! ```

pub mod click;
pub mod constants;
pub mod error;
pub mod fretboard;
pub mod geometry;
pub mod pitch;
pub mod resolver;
pub mod shorthand;
pub mod tuning;

#[cfg(target_os = "android")]
pub mod android;

pub use click::{find_clicked_note, ClickResult};
pub use error::{FretboardError, Result};
pub use fretboard::{Appearance, Fretboard, NeckType};
pub use geometry::*;
pub use pitch::{IntervalSpeller, Letter, Pitch, PitchParseError, PitchSpeller, OCTAVE_RANGE};
pub use resolver::{
    note_locations, note_locations_with, NoteLocations, NoteQuery, NoteTarget, StringLocations,
    StringSelection,
};
pub use shorthand::{shorthand_sides, shorthand_value, BoxValue, Shorthand, Side};
pub use tuning::{convert_tuning_with_map, standard_tuning, Instrument};

/// Convert note locations to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn note_locations_to_json(locations: &NoteLocations) -> Result<String> {
    Ok(serde_json::to_string(locations)?)
}

/// Resolve a note query against a JSON fretboard configuration and return
/// the locations as JSON.
///
/// `note` is `"all"` or a note name; `strings_json` is an optional JSON
/// array of open-string names restricting the search.
pub fn note_locations_json(config_json: &str, note: &str, strings_json: Option<&str>) -> Result<String> {
    let fretboard = Fretboard::from_json(config_json)?;
    let strings: Option<Vec<Pitch>> = strings_json.map(serde_json::from_str).transpose()?;
    let mut query = NoteQuery {
        target: NoteTarget::parse(note)?,
        strings: StringSelection::All,
    };
    if let Some(strings) = strings {
        query = query.on_strings(strings);
    }
    note_locations_to_json(&note_locations(&query, &fretboard)?)
}

/// Hit-test a click against a JSON fretboard configuration and return the
/// result as JSON.
pub fn click_json(config_json: &str, x: f64, y: f64) -> Result<String> {
    let fretboard = Fretboard::from_json(config_json)?;
    Ok(serde_json::to_string(&find_clicked_note(x, y, &fretboard)?)?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Read an optional C string; null reads as None, invalid UTF-8 as Err.
unsafe fn opt_str<'a>(ptr: *const c_char) -> std::result::Result<Option<&'a str>, ()> {
    if ptr.is_null() {
        return Ok(None);
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().map(Some).map_err(|_| ())
}

fn into_c_string(result: Result<String>) -> *mut c_char {
    match result {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Resolve note locations and return them as a JSON C string.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// `config_json` may be null to use the default fretboard. `strings_json`
/// may be null to search every string. Returns null on any error.
///
/// # Safety
/// Non-null pointers must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn fretlib_note_locations(
    config_json: *const c_char,
    note: *const c_char,
    strings_json: *const c_char,
) -> *mut c_char {
    let (Ok(config), Ok(Some(note)), Ok(strings)) = (
        unsafe { opt_str(config_json) },
        unsafe { opt_str(note) },
        unsafe { opt_str(strings_json) },
    ) else {
        return std::ptr::null_mut();
    };

    into_c_string(note_locations_json(config.unwrap_or("{}"), note, strings))
}

/// Hit-test a click and return the result as a JSON C string.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `config_json` must be null or a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_click(config_json: *const c_char, x: f64, y: f64) -> *mut c_char {
    let Ok(config) = (unsafe { opt_str(config_json) }) else {
        return std::ptr::null_mut();
    };

    into_c_string(click_json(config.unwrap_or("{}"), x, y))
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
