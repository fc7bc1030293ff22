//! Note location tests: fret cells, note queries across strings, and
//! click hit-testing.

use fretlib::{
    find_clicked_note, locate_fret_cell, note_locations, Button, FretCell, Fretboard,
    FretboardError, NoteQuery, Pitch, Point, Shorthand,
};
use pretty_assertions::assert_eq;

fn p(name: &str) -> Pitch {
    Pitch::parse(name).unwrap()
}

fn bare_guitar(left_handed: bool) -> Fretboard {
    Fretboard {
        width: 1000.0,
        height: 300.0,
        padding: Shorthand::from(0.0),
        inner_padding: Shorthand::from(0.0),
        left_handed,
        ..Fretboard::default()
    }
}

fn assert_point(actual: Point, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < 1e-9 && (actual.y - y).abs() < 1e-9,
        "got ({}, {}), expected ({x}, {y})",
        actual.x,
        actual.y
    );
}

fn assert_button(actual: Button, x1: f64, y1: f64, x2: f64, y2: f64) {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert!(
        close(actual.x1, x1) && close(actual.y1, y1) && close(actual.x2, x2) && close(actual.y2, y2),
        "got {actual:?}, expected {{{x1}, {y1}, {x2}, {y2}}}"
    );
}

/// (open string, fret, sounded note) for every cell, string by string.
fn summary<'a>(cells: impl Iterator<Item = &'a FretCell>) -> Vec<(String, usize, String)> {
    cells
        .map(|c| (c.string.name(), c.fret, c.note.name()))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Single cells
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn first_fret_on_the_low_string() {
    let cell = locate_fret_cell(1, &p("E2"), &bare_guitar(false)).unwrap();
    assert_eq!(cell.note, p("F2"));
    assert_point(cell.frets.before, 8.0, 300.0);
    assert_point(cell.frets.after, 112.252, 300.0);
    assert_point(cell.frets.between, 56.126, 300.0);
    assert_button(cell.button, 8.0, 270.0, 112.252, 300.0);
}

#[test]
fn first_fret_left_handed() {
    let cell = locate_fret_cell(1, &p("E2"), &bare_guitar(true)).unwrap();
    assert_point(cell.frets.before, 992.0, 300.0);
    assert_point(cell.frets.after, 887.748, 300.0);
    assert_point(cell.frets.between, 943.874, 300.0);
    assert_button(cell.button, 887.748, 270.0, 992.0, 300.0);
}

#[test]
fn open_string_cells_sit_behind_the_nut() {
    let cell = locate_fret_cell(0, &p("E2"), &bare_guitar(false)).unwrap();
    assert_eq!(cell.note, p("E2"));
    assert_point(cell.frets.before, 0.0, 300.0);
    assert_point(cell.frets.after, 8.0, 300.0);
    assert_point(cell.frets.between, 0.0, 300.0);
    assert_button(cell.button, 0.0, 270.0, 8.0, 300.0);

    let cell = locate_fret_cell(0, &p("E2"), &bare_guitar(true)).unwrap();
    assert_point(cell.frets.before, 992.0, 300.0);
    assert_point(cell.frets.after, 1000.0, 300.0);
    assert_point(cell.frets.between, 1000.0, 300.0);
    assert_button(cell.button, 992.0, 270.0, 1000.0, 300.0);
}

#[test]
fn top_string_button_reaches_the_frame_top() {
    let cell = locate_fret_cell(1, &p("E4"), &bare_guitar(false)).unwrap();
    assert_eq!(cell.note, p("F4"));
    assert_point(cell.frets.between, 56.126, 0.0);
    assert_button(cell.button, 8.0, 0.0, 112.252, 30.0);
}

#[test]
fn inner_strings_get_half_the_spacing_each_way() {
    let cell = locate_fret_cell(2, &p("G3"), &bare_guitar(false)).unwrap();
    assert_eq!(cell.note, p("A3"));
    assert_button(cell.button, 112.252, 90.0, 218.202, 150.0);
}

#[test]
fn last_fret_closes_on_the_frame_edge() {
    let cell = locate_fret_cell(12, &p("A2"), &bare_guitar(false)).unwrap();
    assert_eq!(cell.note, p("A3"));
    assert_point(cell.frets.after, 1000.0, 240.0);
}

#[test]
fn cell_preconditions() {
    let fretboard = bare_guitar(false);
    assert!(matches!(
        locate_fret_cell(13, &p("E2"), &fretboard),
        Err(FretboardError::InvalidArgument { .. })
    ));
    assert!(matches!(
        locate_fret_cell(1, &p("C2"), &fretboard),
        Err(FretboardError::InvalidArgument { .. })
    ));

    let too_long = Fretboard {
        number_of_frets: 25,
        ..bare_guitar(false)
    };
    assert!(matches!(
        locate_fret_cell(1, &p("E2"), &too_long),
        Err(FretboardError::FretCountOutOfRange { requested: 25, max: 24 })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Note queries
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn every_c_on_a_twelve_fret_guitar() {
    let locations = note_locations(&NoteQuery::note(p("C")), &bare_guitar(false)).unwrap();
    assert_eq!(locations.len(), 6);
    assert_eq!(
        summary(locations.cells()),
        vec![
            ("E2".to_string(), 8, "C3".to_string()),
            ("A2".to_string(), 3, "C3".to_string()),
            ("D3".to_string(), 10, "C4".to_string()),
            ("G3".to_string(), 5, "C4".to_string()),
            ("B3".to_string(), 1, "C4".to_string()),
            ("E4".to_string(), 8, "C5".to_string()),
        ]
    );
}

#[test]
fn all_notes_on_one_string() {
    let query = NoteQuery::parse("all", Some(&["E2"][..])).unwrap();
    let locations = note_locations(&query, &bare_guitar(false)).unwrap();
    assert_eq!(locations.len(), 1);

    let cells = locations.get(&p("E2")).unwrap();
    assert_eq!(cells.len(), 13);
    let notes: Vec<String> = cells.iter().map(|c| c.note.name()).collect();
    assert_eq!(
        notes,
        [
            "E2", "F2", "F#2", "G2", "G#2", "A2", "Bb2", "B2", "C3", "C#3", "D3", "D#3", "E3"
        ]
    );
    let frets: Vec<usize> = cells.iter().map(|c| c.fret).collect();
    assert_eq!(frets, (0..=12).collect::<Vec<_>>());
}

#[test]
fn strings_come_back_in_tuning_order() {
    let query = NoteQuery::parse("all", Some(&["E4", "C2", "E2"][..])).unwrap();
    let locations = note_locations(&query, &bare_guitar(false)).unwrap();
    let strings: Vec<String> = locations.strings.iter().map(|s| s.string.name()).collect();
    assert_eq!(strings, ["E2", "E4"]);
    assert!(locations.get(&p("C2")).is_none());
}

#[test]
fn searched_strings_without_a_match_are_kept() {
    let short = Fretboard {
        number_of_frets: 2,
        ..bare_guitar(false)
    };
    let query = NoteQuery::parse("C", Some(&["E2", "B3"][..])).unwrap();
    let locations = note_locations(&query, &short).unwrap();
    assert_eq!(locations.len(), 2);
    assert_eq!(locations.get(&p("E2")), Some(&[][..]));
    assert_eq!(summary(locations.cells()), vec![("B3".to_string(), 1, "C4".to_string())]);
}

#[test]
fn sharp_and_flat_queries_find_the_same_cells() {
    let fretboard = bare_guitar(false);
    let sharp = note_locations(&NoteQuery::note(p("C#")), &fretboard).unwrap();
    let flat = note_locations(&NoteQuery::note(p("Db")), &fretboard).unwrap();

    let positions = |cells: &fretlib::NoteLocations| -> Vec<(String, usize)> {
        cells.cells().map(|c| (c.string.name(), c.fret)).collect()
    };
    assert_eq!(positions(&sharp), positions(&flat));
    assert_eq!(
        positions(&sharp),
        vec![
            ("E2".to_string(), 9),
            ("A2".to_string(), 4),
            ("D3".to_string(), 11),
            ("G3".to_string(), 6),
            ("B3".to_string(), 2),
            ("E4".to_string(), 9),
        ]
    );

    // each query reports its own spelling
    assert!(sharp.cells().all(|c| c.note.pitch_class() == p("C#")));
    assert!(flat.cells().all(|c| c.note.pitch_class() == p("Db")));
    assert_eq!(sharp.get(&p("G3")).unwrap()[0].note, p("C#4"));
    assert_eq!(flat.get(&p("E2")).unwrap()[0].note, p("Db3"));
}

#[test]
fn octave_queries_match_one_octave() {
    let locations = note_locations(&NoteQuery::note(p("C4")), &bare_guitar(false)).unwrap();
    assert_eq!(
        summary(locations.cells()),
        vec![
            ("D3".to_string(), 10, "C4".to_string()),
            ("G3".to_string(), 5, "C4".to_string()),
            ("B3".to_string(), 1, "C4".to_string()),
        ]
    );
    assert_eq!(locations.len(), 6);
}

#[test]
fn left_handed_queries_mirror_x_only() {
    let right = note_locations(&NoteQuery::all(), &bare_guitar(false)).unwrap();
    let left = note_locations(&NoteQuery::all(), &bare_guitar(true)).unwrap();

    for (r, l) in right.cells().zip(left.cells()) {
        assert_eq!((&r.string, r.fret, &r.note), (&l.string, l.fret, &l.note));
        assert!((l.frets.between.x - (1000.0 - r.frets.between.x)).abs() < 1e-9);
        assert_eq!(l.frets.between.y, r.frets.between.y);
        assert!(l.button.x1 <= l.button.x2 && l.button.y1 <= l.button.y2);
    }
}

#[test]
fn invalid_boards_are_rejected_before_searching() {
    let empty = Fretboard {
        tuning: Vec::new(),
        ..bare_guitar(false)
    };
    assert!(matches!(
        note_locations(&NoteQuery::all(), &empty),
        Err(FretboardError::InvalidArgument { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Clicks
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn click_on_a_fretted_note() {
    let hit = find_clicked_note(500.0, 10.0, &bare_guitar(false)).unwrap();
    assert_eq!(hit.string, Some(p("E4")));
    assert_eq!(hit.fret, Some(5));
    assert_eq!(hit.note, Some(p("A4")));
}

#[test]
fn click_on_an_open_string() {
    let hit = find_clicked_note(4.0, 125.0, &bare_guitar(false)).unwrap();
    assert_eq!(hit.string, Some(p("G3")));
    assert_eq!(hit.fret, Some(0));
    assert_eq!(hit.note, Some(p("G3")));
}

#[test]
fn click_left_handed() {
    let hit = find_clicked_note(944.0, 295.0, &bare_guitar(true)).unwrap();
    assert_eq!(hit.string, Some(p("E2")));
    assert_eq!(hit.fret, Some(1));
    assert_eq!(hit.note, Some(p("F2")));
}

#[test]
fn click_outside_the_neck() {
    let hit = find_clicked_note(500.0, 400.0, &bare_guitar(false)).unwrap();
    assert_eq!((hit.x, hit.y), (500.0, 400.0));
    assert_eq!(hit.note, None);
    assert_eq!(hit.string, None);
    assert_eq!(hit.fret, None);
}
