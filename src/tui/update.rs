//! State transitions: (Screen, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each screen defines which actions it accepts; unhandled actions return
//! the current screen unchanged (no-op). Counter edits write through the
//! tally handed in by the caller — the only path that mutates it — and the
//! face source is injected so transitions stay deterministic under test.

use crate::roll::FaceSource;
use crate::types::{DiceTally, Die, DieColor, MAX_COUNT};

use super::state::{Action, Screen, Transition};

/// State transition function.
///
/// Given the current screen, an action, write access to the shared tally,
/// and a face source for rolls, produces the next transition. Total over
/// every (screen, action) pair. The effects boundary interprets the result.
pub fn update(
    screen: Screen,
    action: &Action,
    tally: &mut DiceTally,
    faces: &mut dyn FaceSource,
) -> Transition {
    match screen {
        Screen::Tally { cursor } => update_tally(cursor, action, tally),
        Screen::Roll { dice, cursor } => update_roll(dice, cursor, action, faces),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Tally screen: counter editing and the jump to the roll screen.
fn update_tally(cursor: usize, action: &Action, tally: &mut DiceTally) -> Transition {
    let color = DieColor::ALL[cursor];
    let count = tally.count(color);

    match action {
        Action::MoveUp => Transition::Screen(Screen::Tally {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => Transition::Screen(Screen::Tally {
            cursor: (cursor + 1).min(DieColor::ALL.len() - 1),
        }),
        Action::Increment => {
            tally.set_count(color, count + 1);
            Transition::Screen(Screen::Tally { cursor })
        }
        Action::Decrement => {
            tally.set_count(color, count.saturating_sub(1));
            Transition::Screen(Screen::Tally { cursor })
        }
        Action::Digit(d) => {
            // Two-digit entry: a digit that would overflow the field is
            // rejected, keeping the old value.
            let appended = count * 10 + u32::from(*d);
            if appended <= MAX_COUNT {
                tally.set_count(color, appended);
            }
            Transition::Screen(Screen::Tally { cursor })
        }
        Action::Erase => {
            tally.set_count(color, count / 10);
            Transition::Screen(Screen::Tally { cursor })
        }
        Action::Clear => {
            tally.clear();
            Transition::Screen(Screen::Tally { cursor })
        }
        Action::Done => Transition::Screen(Screen::roll(tally.materialize())),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Tally { cursor }),
    }
}

/// Roll screen: cursor movement, rolling, and the way back.
///
/// Leaving the screen drops the pool — dice never survive a visit.
fn update_roll(
    mut dice: Vec<Die>,
    cursor: usize,
    action: &Action,
    faces: &mut dyn FaceSource,
) -> Transition {
    let len = dice.len();

    match action {
        Action::MoveUp => Transition::Screen(Screen::Roll {
            dice,
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => {
            let cursor = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            Transition::Screen(Screen::Roll { dice, cursor })
        }
        Action::Roll => {
            if let Some(die) = dice.get_mut(cursor) {
                die.roll(faces);
            }
            Transition::Screen(Screen::Roll { dice, cursor })
        }
        Action::RollAll => {
            for die in &mut dice {
                die.roll(faces);
            }
            Transition::Screen(Screen::Roll { dice, cursor })
        }
        Action::Done | Action::Back => Transition::Screen(Screen::tally()),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Roll { dice, cursor }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
