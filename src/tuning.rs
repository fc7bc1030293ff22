//! Standard instrument tunings and per-string retuning.

use std::fmt;
use std::str::FromStr;

use crate::error::{FretboardError, Result};
use crate::pitch::{IntervalSpeller, Letter, Pitch, PitchSpeller};

/// Instruments with a known standard tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    Guitar,
    Guitar7,
    Bass,
    Bass5,
    Bass6,
    Ukulele,
}

const fn natural(letter: Letter, octave: i32) -> Pitch {
    Pitch::new(letter, 0, Some(octave))
}

const GUITAR: [Pitch; 6] = [
    natural(Letter::E, 2),
    natural(Letter::A, 2),
    natural(Letter::D, 3),
    natural(Letter::G, 3),
    natural(Letter::B, 3),
    natural(Letter::E, 4),
];

const GUITAR_7: [Pitch; 7] = [
    natural(Letter::B, 1),
    natural(Letter::E, 2),
    natural(Letter::A, 2),
    natural(Letter::D, 3),
    natural(Letter::G, 3),
    natural(Letter::B, 3),
    natural(Letter::E, 4),
];

const BASS: [Pitch; 4] = [
    natural(Letter::E, 1),
    natural(Letter::A, 1),
    natural(Letter::D, 2),
    natural(Letter::G, 2),
];

const BASS_5: [Pitch; 5] = [
    natural(Letter::B, 0),
    natural(Letter::E, 1),
    natural(Letter::A, 1),
    natural(Letter::D, 2),
    natural(Letter::G, 2),
];

const BASS_6: [Pitch; 6] = [
    natural(Letter::B, 0),
    natural(Letter::E, 1),
    natural(Letter::A, 1),
    natural(Letter::D, 2),
    natural(Letter::G, 2),
    natural(Letter::C, 3),
];

// Re-entrant tuning: the G string sits above C.
const UKULELE: [Pitch; 4] = [
    natural(Letter::G, 4),
    natural(Letter::C, 4),
    natural(Letter::E, 4),
    natural(Letter::A, 4),
];

impl Instrument {
    pub const ALL: [Instrument; 6] = [
        Instrument::Guitar,
        Instrument::Guitar7,
        Instrument::Bass,
        Instrument::Bass5,
        Instrument::Bass6,
        Instrument::Ukulele,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Instrument::Guitar => "guitar",
            Instrument::Guitar7 => "guitar-7",
            Instrument::Bass => "bass",
            Instrument::Bass5 => "bass-5",
            Instrument::Bass6 => "bass-6",
            Instrument::Ukulele => "ukulele",
        }
    }

    /// Open-string pitches, lowest string first.
    pub fn standard_tuning(self) -> Vec<Pitch> {
        let strings: &[Pitch] = match self {
            Instrument::Guitar => &GUITAR,
            Instrument::Guitar7 => &GUITAR_7,
            Instrument::Bass => &BASS,
            Instrument::Bass5 => &BASS_5,
            Instrument::Bass6 => &BASS_6,
            Instrument::Ukulele => &UKULELE,
        };
        strings.to_vec()
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Instrument {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self> {
        Instrument::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| FretboardError::UnknownInstrument {
                name: s.to_string(),
            })
    }
}

/// Standard tuning for an instrument given by name (`"guitar"`, `"bass-5"`, ...).
pub fn standard_tuning(instrument: &str) -> Result<Vec<Pitch>> {
    Ok(instrument.parse::<Instrument>()?.standard_tuning())
}

/// Retune string `i` by `map[i]` semitones.
///
/// Strings without an entry (or with 0) are left untouched. Results are
/// always spelled with sharps.
pub fn convert_tuning_with_map(tuning: &[Pitch], map: &[i32]) -> Vec<Pitch> {
    let speller = IntervalSpeller;
    tuning
        .iter()
        .enumerate()
        .map(|(i, string)| match map.get(i).copied().unwrap_or(0) {
            0 => string.clone(),
            shift => {
                let moved = speller.transpose(string, shift);
                if moved.alter < 0 {
                    speller.enharmonic(&moved)
                } else {
                    moved
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pitches: &[Pitch]) -> Vec<String> {
        pitches.iter().map(Pitch::name).collect()
    }

    #[test]
    fn standard_tunings() {
        assert_eq!(
            names(&standard_tuning("guitar").unwrap()),
            ["E2", "A2", "D3", "G3", "B3", "E4"]
        );
        assert_eq!(
            names(&standard_tuning("guitar-7").unwrap()),
            ["B1", "E2", "A2", "D3", "G3", "B3", "E4"]
        );
        assert_eq!(names(&standard_tuning("bass").unwrap()), ["E1", "A1", "D2", "G2"]);
        assert_eq!(
            names(&standard_tuning("bass-5").unwrap()),
            ["B0", "E1", "A1", "D2", "G2"]
        );
        assert_eq!(
            names(&standard_tuning("bass-6").unwrap()),
            ["B0", "E1", "A1", "D2", "G2", "C3"]
        );
        assert_eq!(names(&standard_tuning("ukulele").unwrap()), ["G4", "C4", "E4", "A4"]);
    }

    #[test]
    fn unknown_instrument_is_an_error() {
        let err = standard_tuning("mandolin").unwrap_err();
        assert!(matches!(err, FretboardError::UnknownInstrument { ref name } if name == "mandolin"));
        assert_eq!(err.to_string(), "no tuning for this instrument: mandolin");
    }

    #[test]
    fn retunes_every_mapped_string() {
        let tuning = Instrument::Guitar.standard_tuning();
        assert_eq!(
            names(&convert_tuning_with_map(&tuning, &[-1, -1, -1, -1, -1, 1])),
            ["D#2", "G#2", "C#3", "F#3", "A#3", "F4"]
        );
    }

    #[test]
    fn leaves_unmapped_strings_alone() {
        let tuning = Instrument::Guitar.standard_tuning();
        assert_eq!(
            names(&convert_tuning_with_map(&tuning, &[0, 0, -1])),
            ["E2", "A2", "C#3", "G3", "B3", "E4"]
        );
        assert_eq!(convert_tuning_with_map(&tuning, &[]), tuning);
    }

    #[test]
    fn extreme_shifts_do_not_panic() {
        let tuning = vec![Pitch::parse("E2").unwrap()];
        assert_eq!(convert_tuning_with_map(&tuning, &[i32::MIN]).len(), 1);
        assert_eq!(convert_tuning_with_map(&tuning, &[i32::MAX]).len(), 1);
    }

    #[test]
    fn flat_results_are_respelled_sharp() {
        // A2 + 1 would be spelled Bb2
        let tuning = vec![Pitch::parse("A2").unwrap()];
        assert_eq!(names(&convert_tuning_with_map(&tuning, &[1])), ["A#2"]);
    }
}
