//! The fixed distinct-color palette for categorical encoding.

use crate::style::Color;
use crate::{MapError, Result};

/// A fixed, ordered palette of 128 colors chosen for pairwise visual
/// separability.
///
/// The order is part of the contract: callers rely on index-stable colors
/// across calls, so entries are only ever sliced, never reshuffled or
/// regenerated.
pub const DISTINCT_COLORS: [Color; 128] = [
    Color::rgb(0x00, 0x00, 0x00), Color::rgb(0xFF, 0xFF, 0x00), Color::rgb(0x1C, 0xE6, 0xFF), Color::rgb(0xFF, 0x34, 0xFF),
    Color::rgb(0xFF, 0x4A, 0x46), Color::rgb(0x00, 0x89, 0x41), Color::rgb(0x00, 0x6F, 0xA6), Color::rgb(0xA3, 0x00, 0x59),
    Color::rgb(0xFF, 0xDB, 0xE5), Color::rgb(0x7A, 0x49, 0x00), Color::rgb(0x00, 0x00, 0xA6), Color::rgb(0x63, 0xFF, 0xAC),
    Color::rgb(0xB7, 0x97, 0x62), Color::rgb(0x00, 0x4D, 0x43), Color::rgb(0x8F, 0xB0, 0xFF), Color::rgb(0x99, 0x7D, 0x87),
    Color::rgb(0x5A, 0x00, 0x07), Color::rgb(0x80, 0x96, 0x93), Color::rgb(0xFE, 0xFF, 0xE6), Color::rgb(0x1B, 0x44, 0x00),
    Color::rgb(0x4F, 0xC6, 0x01), Color::rgb(0x3B, 0x5D, 0xFF), Color::rgb(0x4A, 0x3B, 0x53), Color::rgb(0xFF, 0x2F, 0x80),
    Color::rgb(0x61, 0x61, 0x5A), Color::rgb(0xBA, 0x09, 0x00), Color::rgb(0x6B, 0x79, 0x00), Color::rgb(0x00, 0xC2, 0xA0),
    Color::rgb(0xFF, 0xAA, 0x92), Color::rgb(0xFF, 0x90, 0xC9), Color::rgb(0xB9, 0x03, 0xAA), Color::rgb(0xD1, 0x61, 0x00),
    Color::rgb(0xDD, 0xEF, 0xFF), Color::rgb(0x00, 0x00, 0x35), Color::rgb(0x7B, 0x4F, 0x4B), Color::rgb(0xA1, 0xC2, 0x99),
    Color::rgb(0x30, 0x00, 0x18), Color::rgb(0x0A, 0xA6, 0xD8), Color::rgb(0x01, 0x33, 0x49), Color::rgb(0x00, 0x84, 0x6F),
    Color::rgb(0x37, 0x21, 0x01), Color::rgb(0xFF, 0xB5, 0x00), Color::rgb(0xC2, 0xFF, 0xED), Color::rgb(0xA0, 0x79, 0xBF),
    Color::rgb(0xCC, 0x07, 0x44), Color::rgb(0xC0, 0xB9, 0xB2), Color::rgb(0xC2, 0xFF, 0x99), Color::rgb(0x00, 0x1E, 0x09),
    Color::rgb(0x00, 0x48, 0x9C), Color::rgb(0x6F, 0x00, 0x62), Color::rgb(0x0C, 0xBD, 0x66), Color::rgb(0xEE, 0xC3, 0xFF),
    Color::rgb(0x45, 0x6D, 0x75), Color::rgb(0xB7, 0x7B, 0x68), Color::rgb(0x7A, 0x87, 0xA1), Color::rgb(0x78, 0x8D, 0x66),
    Color::rgb(0x88, 0x55, 0x78), Color::rgb(0xFA, 0xD0, 0x9F), Color::rgb(0xFF, 0x8A, 0x9A), Color::rgb(0xD1, 0x57, 0xA0),
    Color::rgb(0xBE, 0xC4, 0x59), Color::rgb(0x45, 0x66, 0x48), Color::rgb(0x00, 0x86, 0xED), Color::rgb(0x88, 0x6F, 0x4C),
    Color::rgb(0x34, 0x36, 0x2D), Color::rgb(0xB4, 0xA8, 0xBD), Color::rgb(0x00, 0xA6, 0xAA), Color::rgb(0x45, 0x2C, 0x2C),
    Color::rgb(0x63, 0x63, 0x75), Color::rgb(0xA3, 0xC8, 0xC9), Color::rgb(0xFF, 0x91, 0x3F), Color::rgb(0x93, 0x8A, 0x81),
    Color::rgb(0x57, 0x53, 0x29), Color::rgb(0x00, 0xFE, 0xCF), Color::rgb(0xB0, 0x5B, 0x6F), Color::rgb(0x8C, 0xD0, 0xFF),
    Color::rgb(0x3B, 0x97, 0x00), Color::rgb(0x04, 0xF7, 0x57), Color::rgb(0xC8, 0xA1, 0xA1), Color::rgb(0x1E, 0x6E, 0x00),
    Color::rgb(0x79, 0x00, 0xD7), Color::rgb(0xA7, 0x75, 0x00), Color::rgb(0x63, 0x67, 0xA9), Color::rgb(0xA0, 0x58, 0x37),
    Color::rgb(0x6B, 0x00, 0x2C), Color::rgb(0x77, 0x26, 0x00), Color::rgb(0xD7, 0x90, 0xFF), Color::rgb(0x9B, 0x97, 0x00),
    Color::rgb(0x54, 0x9E, 0x79), Color::rgb(0xFF, 0xF6, 0x9F), Color::rgb(0x20, 0x16, 0x25), Color::rgb(0x72, 0x41, 0x8F),
    Color::rgb(0xBC, 0x23, 0xFF), Color::rgb(0x99, 0xAD, 0xC0), Color::rgb(0x3A, 0x24, 0x65), Color::rgb(0x92, 0x23, 0x29),
    Color::rgb(0x5B, 0x45, 0x34), Color::rgb(0xFD, 0xE8, 0xDC), Color::rgb(0x40, 0x4E, 0x55), Color::rgb(0x00, 0x89, 0xA3),
    Color::rgb(0xCB, 0x7E, 0x98), Color::rgb(0xA4, 0xE8, 0x04), Color::rgb(0x32, 0x4E, 0x72), Color::rgb(0x6A, 0x3A, 0x4C),
    Color::rgb(0x83, 0xAB, 0x58), Color::rgb(0x00, 0x1C, 0x1E), Color::rgb(0xD1, 0xF7, 0xCE), Color::rgb(0x00, 0x4B, 0x28),
    Color::rgb(0xC8, 0xD0, 0xF6), Color::rgb(0xA3, 0xA4, 0x89), Color::rgb(0x80, 0x6C, 0x66), Color::rgb(0x22, 0x28, 0x00),
    Color::rgb(0xBF, 0x56, 0x50), Color::rgb(0xE8, 0x30, 0x00), Color::rgb(0x66, 0x79, 0x6D), Color::rgb(0xDA, 0x00, 0x7C),
    Color::rgb(0xFF, 0x1A, 0x59), Color::rgb(0x8A, 0xDB, 0xB4), Color::rgb(0x1E, 0x02, 0x00), Color::rgb(0x5B, 0x4E, 0x51),
    Color::rgb(0xC8, 0x95, 0xC5), Color::rgb(0x32, 0x00, 0x33), Color::rgb(0xFF, 0x68, 0x32), Color::rgb(0x66, 0xE1, 0xD3),
    Color::rgb(0xCF, 0xCD, 0xAC), Color::rgb(0xD0, 0xAC, 0x94), Color::rgb(0x7E, 0xD3, 0x79), Color::rgb(0x01, 0x2C, 0x58),
];

/// Returns the first `n` entries of [`DISTINCT_COLORS`].
///
/// The same `n` always yields the same colors in the same order. Fails with
/// [`MapError::OutOfRange`] when `n` exceeds the palette size; there is no
/// wrap-around or fallback.
pub fn distinct_colors(n: usize) -> Result<&'static [Color]> {
    DISTINCT_COLORS.get(..n).ok_or(MapError::OutOfRange {
        requested: n,
        max: DISTINCT_COLORS.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_slicing() {
        assert!(distinct_colors(0).unwrap().is_empty());
        assert_eq!(distinct_colors(2).unwrap(), &DISTINCT_COLORS[..2]);
        assert_eq!(distinct_colors(128).unwrap(), &DISTINCT_COLORS[..]);
    }

    #[test]
    fn test_over_allocation_fails() {
        let err = distinct_colors(129).unwrap_err();
        match err {
            MapError::OutOfRange { requested, max } => {
                assert_eq!(requested, 129);
                assert_eq!(max, 128);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(distinct_colors(32).unwrap(), distinct_colors(32).unwrap());
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(DISTINCT_COLORS[0].to_string(), "#000000");
        assert_eq!(DISTINCT_COLORS[1].to_string(), "#FFFF00");
        assert_eq!(DISTINCT_COLORS[2].to_string(), "#1CE6FF");
        assert_eq!(DISTINCT_COLORS[127].to_string(), "#012C58");
    }

    #[test]
    fn test_all_entries_distinct() {
        use crate::prelude::HashSet;
        let unique: HashSet<_> = DISTINCT_COLORS.iter().collect();
        assert_eq!(unique.len(), DISTINCT_COLORS.len());
    }
}
