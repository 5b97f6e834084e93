//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::types::{DiceTally, Die, DieColor};

use super::state::{App, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let title = render_title(&app.screen);
    frame.render_widget(title, chunks[0]);

    let help = render_help(&app.screen);
    frame.render_widget(help, chunks[2]);

    let content_area = chunks[1];

    match &app.screen {
        Screen::Tally { cursor } => {
            render_tally(&app.tally, *cursor, frame, content_area);
        }
        Screen::Roll { dice, cursor } => {
            render_roll(dice, *cursor, frame, content_area);
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and screen-specific context.
fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Tally { .. } => "dungeon-dice — build your pool",
        Screen::Roll { .. } => "dungeon-dice — roll results",
    };

    Paragraph::new(Line::from(Span::styled(title_text, theme::STYLE_TITLE)))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Tally { .. } => {
            "[j/k] move  [h/l] -/+  [0-9] type  [Bksp] erase  [c] clear  [Enter] roll  [q] quit"
        }
        Screen::Roll { .. } => {
            "[j/k] move  [r/Space] roll die  [a] roll all  [Esc] back  [q] quit"
        }
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: TALLY
// ============================================================================

fn render_tally(tally: &DiceTally, cursor: usize, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // counters
        Constraint::Length(1), // pool size
    ])
    .split(area);

    let mut lines = vec![Line::from("")];

    for (i, color) in DieColor::ALL.into_iter().enumerate() {
        let spans = vec![
            Span::raw("  "),
            Span::styled(format!("{:<9}", color.label()), theme::die_style(color)),
            Span::styled(format!("{:>3}", tally.count(color)), theme::STYLE_IMPORTANT),
        ];

        let line = if i == cursor {
            Line::from(spans).style(theme::STYLE_CURSOR)
        } else {
            Line::from(spans)
        };
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let total = tally.total();
    let footer = if total == 0 {
        "  Empty pool".to_string()
    } else {
        format!("  Pool: {} {}", total, dice_word(total))
    };
    frame.render_widget(
        Paragraph::new(Span::styled(footer, theme::STYLE_DIM)),
        chunks[1],
    );
}

// ============================================================================
// SCREEN: ROLL
// ============================================================================

fn render_roll(dice: &[Die], cursor: usize, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // dice
        Constraint::Length(1), // rolled tally
    ])
    .split(area);

    if dice.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Empty pool — press Esc to go back and add dice.",
                theme::STYLE_DIM,
            )),
        ]);
        frame.render_widget(empty, chunks[0]);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, die) in dice.iter().enumerate() {
        let face = match die.face() {
            Some(face) => Span::styled(
                format!("{} {}", face_glyph(face), face),
                theme::STYLE_IMPORTANT,
            ),
            None => Span::styled("[ roll ]", theme::STYLE_INTERACTIVE),
        };

        let spans = vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<9}", die.color().label()),
                theme::die_style(die.color()),
            ),
            face,
        ];

        let line = if i == cursor {
            Line::from(spans).style(theme::STYLE_CURSOR)
        } else {
            Line::from(spans)
        };
        lines.push(line);
    }

    // Scroll: if cursor is beyond visible area, offset the view
    let visible_height = chunks[0].height as usize;
    let scroll_offset = if cursor >= visible_height {
        cursor - visible_height + 1
    } else {
        0
    };

    let list = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, chunks[0]);

    let rolled = dice.iter().filter(|d| d.is_rolled()).count();
    let status = format!("  Rolled: {}/{}", rolled, dice.len());
    frame.render_widget(
        Paragraph::new(Span::styled(status, theme::STYLE_DIM)),
        chunks[1],
    );
}

/// Unicode die face for a rolled value.
fn face_glyph(face: u8) -> char {
    match face {
        1 => '⚀',
        2 => '⚁',
        3 => '⚂',
        4 => '⚃',
        5 => '⚄',
        _ => '⚅',
    }
}

fn dice_word(n: usize) -> &'static str {
    if n == 1 { "die" } else { "dice" }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::FixedFaces;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 20);
        Terminal::new(backend).unwrap()
    }

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn app_with_counts(agility: u32, strength: u32, magic: u32, heroic: u32) -> App {
        let mut app = App::new();
        app.tally.set_count(DieColor::Agility, agility);
        app.tally.set_count(DieColor::Strength, strength);
        app.tally.set_count(DieColor::Magic, magic);
        app.tally.set_count(DieColor::Heroic, heroic);
        app
    }

    #[test]
    fn tally_screen_renders_without_panic() {
        let mut terminal = make_terminal();
        let app = App::new();
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    #[test]
    fn tally_screen_shows_all_labels_and_counts() {
        let mut terminal = make_terminal();
        let app = app_with_counts(2, 0, 13, 1);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        for color in DieColor::ALL {
            assert!(content.contains(color.label()), "missing {}", color.label());
        }
        assert!(content.contains("13"));
        assert!(content.contains("Pool: 16 dice"));
    }

    #[test]
    fn empty_tally_shows_empty_pool_note() {
        let mut terminal = make_terminal();
        let app = App::new();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_content(&terminal).contains("Empty pool"));
    }

    #[test]
    fn roll_screen_renders_without_panic() {
        let mut terminal = make_terminal();
        let mut app = app_with_counts(2, 1, 0, 0);
        app.screen = Screen::roll(app.tally.materialize());
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    #[test]
    fn unrolled_die_shows_roll_affordance() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::roll(vec![Die::new(DieColor::Agility)]);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("[ roll ]"));
        assert!(content.contains("Rolled: 0/1"));
    }

    #[test]
    fn rolled_die_shows_its_face() {
        let mut terminal = make_terminal();
        let mut die = Die::new(DieColor::Magic);
        die.roll(&mut FixedFaces::new(&[5]));

        let mut app = App::new();
        app.screen = Screen::roll(vec![die]);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains('⚄'));
        assert!(content.contains('5'));
        assert!(content.contains("Rolled: 1/1"));
        assert!(!content.contains("[ roll ]"));
    }

    #[test]
    fn empty_roll_screen_shows_note() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::roll(Vec::new());
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_content(&terminal).contains("Empty pool"));
    }

    #[test]
    fn long_pool_scrolls_to_the_cursor() {
        // 40 dice in a 20-row terminal: the cursor row must stay visible
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.tally.set_count(DieColor::Strength, 40);
        let dice = app.tally.materialize();
        app.screen = Screen::Roll { dice, cursor: 39 };
        terminal
            .draw(|frame| render(&app, frame))
            .expect("scrolled render should not panic");
    }

    #[test]
    fn title_and_help_differ_per_screen() {
        let mut terminal = make_terminal();

        let app = App::new();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let tally_content = buffer_content(&terminal);
        assert!(tally_content.contains("build your pool"));
        assert!(tally_content.contains("[Enter] roll"));

        let mut app = App::new();
        app.screen = Screen::roll(Vec::new());
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let roll_content = buffer_content(&terminal);
        assert!(roll_content.contains("roll results"));
        assert!(roll_content.contains("[Esc] back"));
    }

    #[test]
    fn face_glyphs_cover_all_sides() {
        let glyphs: Vec<char> = (1..=6).map(face_glyph).collect();
        assert_eq!(glyphs, vec!['⚀', '⚁', '⚂', '⚃', '⚄', '⚅']);
    }
}
