//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. Illegal states should be
//! unrepresentable: a die's rolled flag and face live in one `Option`, the
//! roll screen owns its dice list so no stale pool can outlive a visit.
//!
//! Design principle: Screen variants carry only per-screen transient state
//! (cursors, the materialized pool). Shared data (the tally) lives in App
//! and survives screen changes.

use crate::types::{DiceTally, Die};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the shared tally and the current screen. Handed by reference to the
/// update and view layers — there is no global. The effects layer reads this
/// to know what to render.
#[derive(Debug, Default)]
pub struct App {
    /// Current screen — carries per-screen navigation state.
    pub screen: Screen,

    /// The dice tally, shared across screens. Lives for the whole session.
    pub tally: DiceTally,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// A fresh session: tally screen, all counts at zero.
    pub fn new() -> Self {
        App::default()
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
///
/// Two states, cycling for the life of the session:
/// tally entry ⇄ roll results. The roll screen owns the pool materialized
/// on entry; leaving it drops the dice.
#[derive(Debug, PartialEq)]
pub enum Screen {
    /// Per-color counters being edited.
    Tally {
        /// Focused color row, index into [`crate::types::DieColor::ALL`].
        cursor: usize,
    },

    /// A materialized pool being rolled, one die at a time.
    Roll {
        /// The pool, in canonical color order.
        dice: Vec<Die>,
        /// Focused die.
        cursor: usize,
    },
}

/// Default screen is the tally with the first color focused.
impl Default for Screen {
    fn default() -> Self {
        Screen::Tally { cursor: 0 }
    }
}

impl Screen {
    /// Tally screen, cursor on the first color.
    pub fn tally() -> Self {
        Screen::Tally { cursor: 0 }
    }

    /// Roll screen over a freshly materialized pool.
    pub fn roll(dice: Vec<Die>) -> Self {
        Screen::Roll { dice, cursor: 0 }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition function
/// decides what each Action means per Screen. Keys that express nothing
/// (letters in a counter, digits on the roll screen) never become Actions —
/// input validation ends at the mapping boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor up a row.
    MoveUp,
    /// Move the cursor down a row.
    MoveDown,
    /// Step the focused counter up.
    Increment,
    /// Step the focused counter down.
    Decrement,
    /// Append a decimal digit (0-9) to the focused counter.
    Digit(u8),
    /// Drop the last digit of the focused counter.
    Erase,
    /// Reset all counters to zero.
    Clear,
    /// "Done": leave the current screen (tally → roll, roll → tally).
    Done,
    /// Navigate back (roll → tally; no-op on the tally screen).
    Back,
    /// Roll the focused die.
    Roll,
    /// Roll every unrolled die in the pool.
    RollAll,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; the effects boundary inspects it to
/// decide what to render next. Materialization cannot fail and rolling
/// cannot fail, so there is no error variant — the machine is total.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
