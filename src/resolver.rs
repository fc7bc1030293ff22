//! Note resolution: every place on the neck where a note can be played.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::fretboard::Fretboard;
use crate::geometry::{FretCell, NeckGeometry};
use crate::pitch::{IntervalSpeller, Pitch, PitchParseError, PitchSpeller};

/// What to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteTarget {
    /// Every fret of every selected string.
    All,
    /// A pitch class ("C#") matches in every octave; a pitch with an
    /// octave ("C#3") matches only that octave.
    Note(Pitch),
}

impl NoteTarget {
    /// `"all"` (any case) or a note name.
    pub fn parse(input: &str) -> std::result::Result<Self, PitchParseError> {
        if input.trim().eq_ignore_ascii_case("all") {
            Ok(NoteTarget::All)
        } else {
            Ok(NoteTarget::Note(Pitch::parse(input)?))
        }
    }
}

/// Which strings to search, identified by their open-string pitch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StringSelection {
    #[default]
    All,
    Only(Vec<Pitch>),
}

impl StringSelection {
    fn includes(&self, string: &Pitch) -> bool {
        match self {
            StringSelection::All => true,
            StringSelection::Only(strings) => strings.contains(string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteQuery {
    pub target: NoteTarget,
    pub strings: StringSelection,
}

impl NoteQuery {
    /// Every cell on every string.
    pub fn all() -> Self {
        Self {
            target: NoteTarget::All,
            strings: StringSelection::All,
        }
    }

    pub fn note(target: Pitch) -> Self {
        Self {
            target: NoteTarget::Note(target),
            strings: StringSelection::All,
        }
    }

    /// Restrict the search to the given strings.
    pub fn on_strings(mut self, strings: Vec<Pitch>) -> Self {
        self.strings = StringSelection::Only(strings);
        self
    }

    /// Build a query from note strings, e.g. `("C#", Some(&["E2"][..]))`.
    pub fn parse(target: &str, strings: Option<&[&str]>) -> std::result::Result<Self, PitchParseError> {
        let strings = match strings {
            None => StringSelection::All,
            Some(names) => StringSelection::Only(
                names
                    .iter()
                    .map(|s| Pitch::parse(s))
                    .collect::<std::result::Result<_, _>>()?,
            ),
        };
        Ok(Self {
            target: NoteTarget::parse(target)?,
            strings,
        })
    }
}

/// Matching cells on one string, in fret order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLocations {
    pub string: Pitch,
    pub cells: Vec<FretCell>,
}

/// Query result: one entry per searched string, in tuning order. Strings
/// outside the selection are absent; searched strings without a match
/// are present with no cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NoteLocations {
    pub strings: Vec<StringLocations>,
}

impl NoteLocations {
    /// Number of strings present.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Cells for one string, if it was searched.
    pub fn get(&self, string: &Pitch) -> Option<&[FretCell]> {
        self.strings
            .iter()
            .find(|s| &s.string == string)
            .map(|s| s.cells.as_slice())
    }

    /// Every cell, string by string.
    pub fn cells(&self) -> impl Iterator<Item = &FretCell> {
        self.strings.iter().flat_map(|s| s.cells.iter())
    }
}

/// Find every location of `query` on `fretboard` using the default
/// interval-based pitch spelling.
pub fn note_locations(query: &NoteQuery, fretboard: &Fretboard) -> Result<NoteLocations> {
    note_locations_with(&IntervalSpeller, query, fretboard)
}

/// Like [`note_locations`], with caller-supplied pitch arithmetic.
pub fn note_locations_with<S: PitchSpeller + ?Sized>(
    speller: &S,
    query: &NoteQuery,
    fretboard: &Fretboard,
) -> Result<NoteLocations> {
    let geometry = NeckGeometry::new(fretboard)?;
    let mut strings = Vec::new();

    for (source_index, open) in fretboard.tuning.iter().enumerate() {
        if !query.strings.includes(open) {
            continue;
        }

        let mut cells = Vec::new();
        for fret in 0..=fretboard.number_of_frets {
            let sounded = speller.transpose(open, fret as i32);
            if let Some(note) = match_note(speller, &query.target, sounded) {
                trace!(string = %open, fret, note = %note, "matched");
                cells.push(geometry.cell(fret, source_index, note)?);
            }
        }
        strings.push(StringLocations {
            string: open.clone(),
            cells,
        });
    }

    let locations = NoteLocations { strings };
    debug!(
        query = ?query.target,
        strings = locations.len(),
        matches = locations.cells().count(),
        "resolved note locations"
    );
    Ok(locations)
}

/// The note to report when `sounded` matches `target`, or None.
///
/// Enharmonic matches are respelled the way the caller asked ("C#" finds
/// a sounded Db and reports it as C#).
fn match_note<S: PitchSpeller + ?Sized>(speller: &S, target: &NoteTarget, sounded: Pitch) -> Option<Pitch> {
    let wanted = match target {
        NoteTarget::All => return Some(sounded),
        NoteTarget::Note(pitch) => pitch,
    };
    let key = if wanted.octave.is_some() {
        sounded.clone()
    } else {
        sounded.pitch_class()
    };

    if speller.enharmonic(&key) == *wanted {
        Some(speller.enharmonic(&sounded))
    } else if key == *wanted {
        Some(sounded)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pitch {
        Pitch::parse(s).unwrap()
    }

    #[test]
    fn wildcard_matches_as_spelled() {
        let speller = IntervalSpeller;
        assert_eq!(match_note(&speller, &NoteTarget::All, p("Bb2")), Some(p("Bb2")));
    }

    #[test]
    fn pitch_class_ignores_octave() {
        let speller = IntervalSpeller;
        let target = NoteTarget::Note(p("C"));
        assert_eq!(match_note(&speller, &target, p("C3")), Some(p("C3")));
        assert_eq!(match_note(&speller, &target, p("C#3")), None);
    }

    #[test]
    fn octave_must_match_when_given() {
        let speller = IntervalSpeller;
        let target = NoteTarget::Note(p("C4"));
        assert_eq!(match_note(&speller, &target, p("C4")), Some(p("C4")));
        assert_eq!(match_note(&speller, &target, p("C3")), None);
        // octave 0 is a real octave
        let target = NoteTarget::Note(p("B0"));
        assert_eq!(match_note(&speller, &target, p("B1")), None);
    }

    #[test]
    fn enharmonic_matches_take_the_query_spelling() {
        let speller = IntervalSpeller;
        let target = NoteTarget::Note(p("C#"));
        assert_eq!(match_note(&speller, &target, p("Db4")), Some(p("C#4")));
        let target = NoteTarget::Note(p("Bb"));
        assert_eq!(match_note(&speller, &target, p("A#2")), Some(p("Bb2")));
    }

    #[test]
    fn parses_queries() {
        assert_eq!(NoteTarget::parse("ALL"), Ok(NoteTarget::All));
        let query = NoteQuery::parse("db", Some(&["E2", "A2"][..])).unwrap();
        assert_eq!(query.target, NoteTarget::Note(p("Db")));
        assert_eq!(query.strings, StringSelection::Only(vec![p("E2"), p("A2")]));
        assert!(NoteQuery::parse("Z", None).is_err());
        assert!(NoteQuery::parse("C", Some(&["E2", "nope"][..])).is_err());
    }
}
