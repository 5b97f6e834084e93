//! Domain types for dungeon-dice.
//!
//! Pure data — no I/O, no randomness. Rolling a die requires a
//! [`FaceSource`](crate::roll::FaceSource), injected by the caller.

use std::fmt;

use serde::Serialize;

use crate::roll::FaceSource;

/// Upper bound for a single color's count.
///
/// Counter entry is a two-digit field, so 99 is the largest value a player
/// can express. [`DiceTally::set_count`] clamps here so steppers and
/// programmatic callers can't push a counter past what the UI can show.
pub const MAX_COUNT: u32 = 99;

// ============================================================================
// DIE COLOR
// ============================================================================

/// The four One Deck Dungeon die categories.
///
/// Closed set, never extended at runtime. Declaration order is the canonical
/// order: tallies materialize and render in this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DieColor {
    /// Magenta dice.
    Agility,
    /// Yellow dice.
    Strength,
    /// Blue dice.
    Magic,
    /// Black dice — wild, count toward any category.
    Heroic,
}

impl DieColor {
    /// Every variant in canonical order.
    pub const ALL: [DieColor; 4] = [
        DieColor::Agility,
        DieColor::Strength,
        DieColor::Magic,
        DieColor::Heroic,
    ];

    /// Display label for counters and roll listings.
    pub fn label(self) -> &'static str {
        match self {
            DieColor::Agility => "Agility",
            DieColor::Strength => "Strength",
            DieColor::Magic => "Magic",
            DieColor::Heroic => "Heroic",
        }
    }

    /// Position in [`Self::ALL`] — index into per-color storage.
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DieColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// DIE
// ============================================================================

/// A single die instance.
///
/// Created unrolled by [`DiceTally::materialize`]. The face is `None` until
/// the first roll and fixed thereafter — a die shows one face for its
/// lifetime. Color is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Die {
    color: DieColor,
    /// `None` = not yet rolled; `Some(1..=6)` after the first roll.
    face: Option<u8>,
}

impl Die {
    /// A fresh, unrolled die of the given color.
    pub fn new(color: DieColor) -> Self {
        Die { color, face: None }
    }

    pub fn color(&self) -> DieColor {
        self.color
    }

    pub fn face(&self) -> Option<u8> {
        self.face
    }

    pub fn is_rolled(&self) -> bool {
        self.face.is_some()
    }

    /// Roll the die.
    ///
    /// The first call draws a face from `faces`, stores it, and returns it.
    /// Every later call returns the stored face without drawing again.
    pub fn roll(&mut self, faces: &mut dyn FaceSource) -> u8 {
        match self.face {
            Some(face) => face,
            None => {
                let face = faces.next_face();
                self.face = Some(face);
                face
            }
        }
    }
}

// ============================================================================
// DICE TALLY
// ============================================================================

/// Per-color dice counts.
///
/// Every color always has an entry (the array can't have missing keys);
/// a fresh tally is all zeros. The tally is owned by the caller and passed
/// by reference to whoever needs read or write access — there is no shared
/// global.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceTally {
    counts: [u32; DieColor::ALL.len()],
}

impl DiceTally {
    /// All counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the count for one color, clamped to [`MAX_COUNT`].
    pub fn set_count(&mut self, color: DieColor, count: u32) {
        self.counts[color.index()] = count.min(MAX_COUNT);
    }

    /// Current count for one color.
    pub fn count(&self, color: DieColor) -> u32 {
        self.counts[color.index()]
    }

    /// Sum of all counts — the length of a materialized pool.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Reset every count to zero.
    pub fn clear(&mut self) {
        self.counts = Default::default();
    }

    /// Expand the tally into a concrete dice pool.
    ///
    /// For each color in canonical order, produces that many fresh unrolled
    /// dice. Deterministic for a fixed tally; the tally itself is untouched,
    /// and every call returns independent instances.
    pub fn materialize(&self) -> Vec<Die> {
        let mut dice = Vec::with_capacity(self.total());
        for color in DieColor::ALL {
            for _ in 0..self.count(color) {
                dice.push(Die::new(color));
            }
        }
        dice
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for one-shot roll reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::FixedFaces;

    #[test]
    fn new_tally_is_all_zero() {
        let tally = DiceTally::new();
        for color in DieColor::ALL {
            assert_eq!(tally.count(color), 0);
        }
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn set_count_then_count_returns_it() {
        let mut tally = DiceTally::new();
        tally.set_count(DieColor::Magic, 7);
        assert_eq!(tally.count(DieColor::Magic), 7);

        // Overwrite, not accumulate
        tally.set_count(DieColor::Magic, 2);
        assert_eq!(tally.count(DieColor::Magic), 2);
    }

    #[test]
    fn set_count_leaves_other_colors_alone() {
        let mut tally = DiceTally::new();
        tally.set_count(DieColor::Agility, 3);
        assert_eq!(tally.count(DieColor::Strength), 0);
        assert_eq!(tally.count(DieColor::Magic), 0);
        assert_eq!(tally.count(DieColor::Heroic), 0);
    }

    #[test]
    fn set_count_clamps_at_max() {
        let mut tally = DiceTally::new();
        tally.set_count(DieColor::Heroic, 1_000);
        assert_eq!(tally.count(DieColor::Heroic), MAX_COUNT);
    }

    #[test]
    fn total_sums_all_colors() {
        let mut tally = DiceTally::new();
        tally.set_count(DieColor::Agility, 2);
        tally.set_count(DieColor::Strength, 1);
        tally.set_count(DieColor::Heroic, 4);
        assert_eq!(tally.total(), 7);
    }

    #[test]
    fn clear_resets_every_count() {
        let mut tally = DiceTally::new();
        for color in DieColor::ALL {
            tally.set_count(color, 5);
        }
        tally.clear();
        assert_eq!(tally, DiceTally::new());
    }

    #[test]
    fn materialize_empty_tally_is_empty() {
        assert!(DiceTally::new().materialize().is_empty());
    }

    #[test]
    fn materialize_length_equals_total() {
        let mut tally = DiceTally::new();
        tally.set_count(DieColor::Agility, 2);
        tally.set_count(DieColor::Magic, 1);
        let dice = tally.materialize();
        assert_eq!(dice.len(), tally.total());
    }

    #[test]
    fn materialize_groups_in_canonical_order() {
        let mut tally = DiceTally::new();
        tally.set_count(DieColor::Magic, 1);
        tally.set_count(DieColor::Agility, 2);
        let dice = tally.materialize();

        // Agility precedes Magic regardless of set order
        let colors: Vec<DieColor> = dice.iter().map(|d| d.color()).collect();
        assert_eq!(
            colors,
            vec![DieColor::Agility, DieColor::Agility, DieColor::Magic]
        );
    }

    #[test]
    fn materialize_per_color_counts_match_tally() {
        let mut tally = DiceTally::new();
        tally.set_count(DieColor::Strength, 3);
        tally.set_count(DieColor::Heroic, 2);
        let dice = tally.materialize();

        for color in DieColor::ALL {
            let n = dice.iter().filter(|d| d.color() == color).count();
            assert_eq!(n, tally.count(color) as usize);
        }
    }

    #[test]
    fn materialize_does_not_change_the_tally() {
        let mut tally = DiceTally::new();
        tally.set_count(DieColor::Agility, 2);
        let before = tally.clone();
        let _ = tally.materialize();
        assert_eq!(tally, before);
    }

    #[test]
    fn materialize_twice_yields_independent_dice() {
        let mut tally = DiceTally::new();
        tally.set_count(DieColor::Magic, 1);

        let mut first = tally.materialize();
        let second = tally.materialize();

        let mut faces = FixedFaces::new(&[6]);
        first[0].roll(&mut faces);

        // Rolling the first batch must not touch the second
        assert!(first[0].is_rolled());
        assert!(!second[0].is_rolled());
    }

    #[test]
    fn fresh_die_is_unrolled() {
        let die = Die::new(DieColor::Strength);
        assert!(!die.is_rolled());
        assert_eq!(die.face(), None);
        assert_eq!(die.color(), DieColor::Strength);
    }

    #[test]
    fn roll_stores_the_drawn_face() {
        let mut die = Die::new(DieColor::Agility);
        let mut faces = FixedFaces::new(&[4]);
        assert_eq!(die.roll(&mut faces), 4);
        assert!(die.is_rolled());
        assert_eq!(die.face(), Some(4));
    }

    #[test]
    fn roll_twice_returns_the_same_face() {
        let mut die = Die::new(DieColor::Heroic);
        // Second draw would be 1 — must never be consumed
        let mut faces = FixedFaces::new(&[5, 1]);
        let first = die.roll(&mut faces);
        let second = die.roll(&mut faces);
        assert_eq!(first, 5);
        assert_eq!(second, 5);
    }

    #[test]
    fn independent_dice_draw_independently() {
        let mut faces = FixedFaces::new(&[2, 6]);
        let mut a = Die::new(DieColor::Magic);
        let mut b = Die::new(DieColor::Magic);
        assert_eq!(a.roll(&mut faces), 2);
        assert_eq!(b.roll(&mut faces), 6);
    }

    #[test]
    fn canonical_order_is_declaration_order() {
        assert_eq!(
            DieColor::ALL,
            [
                DieColor::Agility,
                DieColor::Strength,
                DieColor::Magic,
                DieColor::Heroic
            ]
        );
    }

    #[test]
    fn labels_match_variants() {
        assert_eq!(DieColor::Agility.label(), "Agility");
        assert_eq!(DieColor::Strength.label(), "Strength");
        assert_eq!(DieColor::Magic.label(), "Magic");
        assert_eq!(DieColor::Heroic.label(), "Heroic");
    }

    #[test]
    fn die_serializes_color_and_face() {
        let mut die = Die::new(DieColor::Agility);
        let unrolled = serde_json::to_value(&die).unwrap();
        assert_eq!(unrolled["color"], "agility");
        assert!(unrolled["face"].is_null());

        let mut faces = FixedFaces::new(&[3]);
        die.roll(&mut faces);
        let rolled = serde_json::to_value(&die).unwrap();
        assert_eq!(rolled["face"], 3);
    }
}
