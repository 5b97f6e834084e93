//! Report formatting for one-shot rolls.
//!
//! Pure functions — (RollReport, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::types::{Die, DieColor, OutputFormat};

/// Results of rolling a materialized pool, ready for printing.
#[derive(Debug, Clone, Serialize)]
pub struct RollReport {
    /// The rolled pool, in canonical color order.
    pub dice: Vec<Die>,
    /// Pool size.
    pub total: usize,
}

impl RollReport {
    pub fn new(dice: Vec<Die>) -> Self {
        let total = dice.len();
        RollReport { dice, total }
    }
}

/// Format a roll report for output.
///
/// Pure function: takes data, returns formatted string.
pub fn format_report(report: &RollReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &RollReport) -> String {
    let mut out = String::new();

    if report.dice.is_empty() {
        out.push_str("Empty pool — nothing to roll.\n");
        return out;
    }

    out.push_str("=== Dice ===\n");
    for die in &report.dice {
        out.push_str(&format!(
            "{:<9} {}\n",
            die.color().label(),
            face_display(die)
        ));
    }
    out.push('\n');

    out.push_str(&format_summary(report));

    out
}

fn format_summary(report: &RollReport) -> String {
    let mut out = String::new();
    out.push_str("=== Summary ===\n");

    for color in DieColor::ALL {
        let faces: Vec<String> = report
            .dice
            .iter()
            .filter(|d| d.color() == color)
            .map(face_display)
            .collect();
        if faces.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "{:<9} {} {} ({})\n",
            format!("{}:", color.label()),
            faces.len(),
            dice_word(faces.len()),
            faces.join(", ")
        ));
    }

    out.push_str(&format!(
        "{:<9} {} {}\n",
        "Total:",
        report.total,
        dice_word(report.total)
    ));

    out
}

fn face_display(die: &Die) -> String {
    match die.face() {
        Some(face) => face.to_string(),
        None => "-".to_string(),
    }
}

fn dice_word(n: usize) -> &'static str {
    if n == 1 { "die" } else { "dice" }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(report: &RollReport) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
