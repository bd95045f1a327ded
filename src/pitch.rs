//! Pitch class model for chord transposition.
//!
//! Twelve canonical chromatic pitch classes in sharp spelling, plus an
//! enharmonic flat-to-sharp table used to normalize a root before shifting.
//! Both operations are pure and total: anything that is not a recognized
//! root passes through unchanged rather than producing an error.

/// The twelve chromatic pitch classes in cyclic order, sharp-spelled.
///
/// Indices are taken modulo 12 when shifting; output spellings always come
/// from this table (flats are normalized away, never produced).
pub const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Normalize a flat-spelled root to its canonical sharp spelling.
///
/// Roots that are not in the enharmonic table (including already-canonical
/// spellings and malformed input) are returned unchanged.
#[must_use]
pub fn normalize_root(root: &str) -> &str {
    match root {
        "Db" => "C#",
        "Eb" => "D#",
        "Gb" => "F#",
        "Ab" => "G#",
        "Bb" => "A#",
        other => other,
    }
}

/// Shift a root by `steps` semitones around the chromatic cycle.
///
/// The root is normalized first; if the normalized spelling is not one of
/// the twelve canonical pitch classes the ORIGINAL input is returned
/// unchanged. Negative steps wrap correctly: the modulo is always
/// non-negative regardless of sign.
#[must_use]
pub fn shift(root: &str, steps: i32) -> String {
    let normalized = normalize_root(root);
    let Some(idx) = CHROMATIC.iter().position(|&pc| pc == normalized) else {
        return root.to_string();
    };
    let idx = i32::try_from(idx).unwrap_or_default();
    let shifted = usize::try_from((idx + steps).rem_euclid(12)).unwrap_or_default();
    CHROMATIC[shifted].to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn normalize_maps_flats_to_sharps() {
        assert_eq!(normalize_root("Db"), "C#");
        assert_eq!(normalize_root("Eb"), "D#");
        assert_eq!(normalize_root("Gb"), "F#");
        assert_eq!(normalize_root("Ab"), "G#");
        assert_eq!(normalize_root("Bb"), "A#");
    }

    #[test]
    fn normalize_passes_through_canonical_and_junk() {
        assert_eq!(normalize_root("C#"), "C#");
        assert_eq!(normalize_root("G"), "G");
        assert_eq!(normalize_root("H"), "H");
        assert_eq!(normalize_root(""), "");
    }

    #[test]
    fn shift_wraps_upward() {
        assert_eq!(shift("B", 1), "C");
        assert_eq!(shift("G", 6), "C#");
    }

    #[test]
    fn shift_wraps_downward() {
        assert_eq!(shift("C", -1), "B");
        assert_eq!(shift("C", -13), "B");
    }

    #[test]
    fn shift_normalizes_before_shifting() {
        // Db -> C#, +1 semitone -> D
        assert_eq!(shift("Db", 1), "D");
        assert_eq!(shift("Bb", -1), "A");
    }

    #[test]
    fn shift_zero_is_identity_up_to_spelling() {
        assert_eq!(shift("F#", 0), "F#");
        // Zero steps still canonicalizes the spelling
        assert_eq!(shift("Gb", 0), "F#");
    }

    #[test]
    fn shift_twelve_is_a_full_cycle() {
        for pc in CHROMATIC {
            assert_eq!(shift(pc, 12), pc);
            assert_eq!(shift(pc, -12), pc);
        }
    }

    #[test]
    fn shift_leaves_unknown_roots_untouched() {
        assert_eq!(shift("H", 3), "H");
        assert_eq!(shift("Cb", 3), "Cb");
        assert_eq!(shift("", 5), "");
    }
}
