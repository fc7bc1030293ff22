//! Pitch spelling and arithmetic.
//!
//! A [`Pitch`] is a spelled note: a letter, a chromatic alteration and an
//! optional octave. Without an octave it is a pitch class ("C#"); with one
//! it is a concrete pitch ("C#4", middle C = C4).
//!
//! The note resolver only needs three operations from this module (parse,
//! transpose, enharmonic respelling), and reaches them through the
//! [`PitchSpeller`] trait so a host can plug in its own music-theory rules.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Natural note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    const ORDER: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Diatonic index, C = 0.
    fn index(self) -> i32 {
        self as i32
    }

    fn from_index(index: i32) -> Self {
        Self::ORDER[index.rem_euclid(7) as usize]
    }

    /// Semitones above C.
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// Octaves a note name may carry: MIDI 0 (C-1) up through B9.
pub const OCTAVE_RANGE: RangeInclusive<i32> = -1..=9;

/// A note string that could not be read as a pitch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to parse pitch {input:?}")]
pub struct PitchParseError {
    pub input: String,
}

/// A spelled pitch or pitch class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    /// Note letter.
    pub letter: Letter,
    /// Chromatic alteration: -1 = flat, 1 = sharp, 0 = natural.
    pub alter: i32,
    /// Octave number (None for a bare pitch class).
    pub octave: Option<i32>,
}

impl Pitch {
    pub const fn new(letter: Letter, alter: i32, octave: Option<i32>) -> Self {
        Self {
            letter,
            alter,
            octave,
        }
    }

    /// Parse a note name such as `E2`, `c#`, `Bb3`, `F♯` or `Cb-1`.
    ///
    /// Octaves outside [`OCTAVE_RANGE`] are rejected.
    pub fn parse(input: &str) -> Result<Self, PitchParseError> {
        let err = || PitchParseError {
            input: input.to_string(),
        };

        let mut chars = input.trim().chars().peekable();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(err)?;

        let mut sharps = 0;
        let mut flats = 0;
        while let Some(&c) = chars.peek() {
            match c {
                '#' | '♯' => sharps += 1,
                'b' | '♭' => flats += 1,
                _ => break,
            }
            chars.next();
        }
        if sharps > 0 && flats > 0 {
            return Err(err());
        }

        let rest: String = chars.collect();
        let octave = if rest.is_empty() {
            None
        } else {
            let octave = rest.parse::<i32>().map_err(|_| err())?;
            if !OCTAVE_RANGE.contains(&octave) {
                return Err(err());
            }
            Some(octave)
        };

        Ok(Self::new(letter, sharps - flats, octave))
    }

    /// The same note without its octave.
    pub fn pitch_class(&self) -> Pitch {
        Pitch::new(self.letter, self.alter, None)
    }

    /// Position within the octave, 0..12, C = 0.
    pub fn chroma(&self) -> i32 {
        self.letter.semitone().saturating_add(self.alter).rem_euclid(12)
    }

    /// Semitones from C0 given an octave. Saturates for pitches built
    /// by hand far outside [`OCTAVE_RANGE`].
    fn absolute(&self, octave: i32) -> i32 {
        self.letter
            .semitone()
            .saturating_add(self.alter)
            .saturating_add(octave.saturating_mul(12))
    }

    /// Convert to a MIDI note number. Middle C (C4) = 60.
    pub fn to_midi(&self) -> Option<i32> {
        self.octave.map(|o| self.absolute(o.saturating_add(1)))
    }

    /// Whether the octave, if any, lies in [`OCTAVE_RANGE`].
    pub fn in_octave_range(&self) -> bool {
        self.octave.map_or(true, |o| OCTAVE_RANGE.contains(&o))
    }

    /// Name including octave when present, e.g. `C#4`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Name with typographic accidentals, e.g. `C♯4`.
    pub fn display_name(&self) -> String {
        self.render('♯', '♭')
    }

    fn render(&self, sharp: char, flat: char) -> String {
        let mut s = String::new();
        s.push(self.letter.as_char());
        let mark = if self.alter > 0 { sharp } else { flat };
        for _ in 0..self.alter.unsigned_abs() {
            s.push(mark);
        }
        if let Some(octave) = self.octave {
            s.push_str(&octave.to_string());
        }
        s
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render('#', 'b'))
    }
}

impl FromStr for Pitch {
    type Err = PitchParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pitch::parse(s)
    }
}

impl TryFrom<String> for Pitch {
    type Error = PitchParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Pitch::parse(&value)
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Pitch arithmetic
// ═══════════════════════════════════════════════════════════════════════

/// The pitch arithmetic the note resolver depends on.
pub trait PitchSpeller {
    fn parse(&self, input: &str) -> Result<Pitch, PitchParseError> {
        Pitch::parse(input)
    }

    /// Move `pitch` by `semitones` (negative = down).
    fn transpose(&self, pitch: &Pitch, semitones: i32) -> Pitch;

    /// The same sounding pitch under its alternative spelling.
    fn enharmonic(&self, pitch: &Pitch) -> Pitch;
}

/// Diatonic steps of the interval used for each semitone class:
/// P1 m2 M2 m3 M3 P4 d5 P5 m6 M6 m7 M7.
const INTERVAL_STEPS: [i32; 12] = [0, 1, 1, 2, 2, 3, 4, 4, 5, 5, 6, 6];

const SHARP_SPELLING: [(Letter, i32); 12] = [
    (Letter::C, 0),
    (Letter::C, 1),
    (Letter::D, 0),
    (Letter::D, 1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::F, 1),
    (Letter::G, 0),
    (Letter::G, 1),
    (Letter::A, 0),
    (Letter::A, 1),
    (Letter::B, 0),
];

const FLAT_SPELLING: [(Letter, i32); 12] = [
    (Letter::C, 0),
    (Letter::D, -1),
    (Letter::D, 0),
    (Letter::E, -1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::G, -1),
    (Letter::G, 0),
    (Letter::A, -1),
    (Letter::A, 0),
    (Letter::B, -1),
    (Letter::B, 0),
];

/// Spells transpositions by interval (E + 6 semitones is Bb, not A#) and
/// respells enharmonics towards the opposite accidental.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalSpeller;

impl PitchSpeller for IntervalSpeller {
    fn transpose(&self, pitch: &Pitch, semitones: i32) -> Pitch {
        let direction = if semitones < 0 { -1 } else { 1 };
        let distance = semitones.unsigned_abs();
        // distance <= 2^31, so steps stay below 7 * 2^31 / 12
        let steps = INTERVAL_STEPS[(distance % 12) as usize] + 7 * (distance / 12) as i32;

        let octave = pitch.octave.unwrap_or(0);
        let letter_index = pitch.letter.index() + direction * steps;
        let letter = Letter::from_index(letter_index);
        let new_octave = octave.saturating_add(letter_index.div_euclid(7));

        let target = pitch.absolute(octave).saturating_add(semitones);
        let alter = target.saturating_sub(
            letter
                .semitone()
                .saturating_add(new_octave.saturating_mul(12)),
        );

        Pitch::new(letter, alter, pitch.octave.map(|_| new_octave))
    }

    fn enharmonic(&self, pitch: &Pitch) -> Pitch {
        let table = if pitch.alter < 0 {
            &SHARP_SPELLING
        } else {
            &FLAT_SPELLING
        };
        let (letter, alter) = table[pitch.chroma() as usize];
        let octave = pitch
            .octave
            .map(|o| {
                pitch
                    .absolute(o)
                    .saturating_sub(letter.semitone() + alter)
                    .div_euclid(12)
            });
        Pitch::new(letter, alter, octave)
    }
}
