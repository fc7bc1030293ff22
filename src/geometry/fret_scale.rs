//! Equal-tempered fret scale.
//!
//! Fret `n` sits at `1 - 2^(-n/12)` of the scale length from the nut. The
//! table holds those fractions for frets 1..=24; layouts normalise against
//! the entry for their last fret so the last fret lands on the frame edge.

use crate::error::{FretboardError, Result};

pub const MAX_FRETS: usize = 24;

/// Cumulative neck-length fraction for frets 1..=24.
pub const FRET_DISTANCES: [f64; MAX_FRETS] = [
    0.056126, 0.109101, 0.159104, 0.206291, 0.250847, 0.292893, 0.33258, 0.370039, 0.405396,
    0.438769, 0.470268, 0.5, 0.528063, 0.554551, 0.579552, 0.60315, 0.625423, 0.646447, 0.66629,
    0.68502, 0.702698, 0.719385, 0.735134, 0.75,
];

/// The exact fraction for fret `n`, for building longer custom tables.
pub fn fret_distance(n: usize) -> f64 {
    1.0 - 2f64.powf(-(n as f64) / 12.0)
}

/// A fret count is usable when it is at least 1 and the table covers it.
pub fn check_fret_count(fret_distances: &[f64], number_of_frets: usize) -> Result<()> {
    if number_of_frets == 0 || number_of_frets > fret_distances.len() {
        return Err(FretboardError::FretCountOutOfRange {
            requested: number_of_frets,
            max: fret_distances.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_follows_the_formula() {
        for (i, &d) in FRET_DISTANCES.iter().enumerate() {
            assert!(
                (d - fret_distance(i + 1)).abs() < 1e-6,
                "fret {} is {d}, formula gives {}",
                i + 1,
                fret_distance(i + 1)
            );
        }
    }

    #[test]
    fn table_is_strictly_increasing_below_one() {
        assert!(FRET_DISTANCES.windows(2).all(|w| w[0] < w[1]));
        assert!(FRET_DISTANCES.iter().all(|&d| d > 0.0 && d <= 0.75));
        assert_eq!(FRET_DISTANCES[11], 0.5);
    }

    #[test]
    fn fret_count_bounds() {
        assert!(check_fret_count(&FRET_DISTANCES, 1).is_ok());
        assert!(check_fret_count(&FRET_DISTANCES, 24).is_ok());
        assert!(matches!(
            check_fret_count(&FRET_DISTANCES, 0),
            Err(FretboardError::FretCountOutOfRange { requested: 0, max: 24 })
        ));
        assert!(matches!(
            check_fret_count(&FRET_DISTANCES, 25),
            Err(FretboardError::FretCountOutOfRange { requested: 25, max: 24 })
        ));
    }
}
