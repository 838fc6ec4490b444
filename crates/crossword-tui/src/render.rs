use crate::app::{App, ScreenState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use crossword_core::{Clue, Direction, Position, Session, SessionState};
use std::io;

/// Each cell is 4 columns wide: two for the clue number, one letter, one gap
const CELL_WIDTH: u16 = 4;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(app.theme.bg),
        Clear(ClearType::All)
    )?;

    match app.screen_state {
        ScreenState::Playing => render_game_screen(stdout, app, term_width, term_height)?,
        ScreenState::Summary => render_summary_screen(stdout, app, term_width, term_height)?,
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_game_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let session = app.quiz.session();
    let grid_width = session.grid().cols() as u16 * CELL_WIDTH;
    let grid_height = session.grid().rows() as u16;

    let start_x: u16 = 2;
    let start_y: u16 = 2;

    render_info_bar(stdout, app, start_x, 1)?;
    render_grid(stdout, app, start_x, start_y + 1)?;

    let clues_x = start_x + grid_width + 3;
    let clues_width = term_width.saturating_sub(clues_x + 1).max(20);
    render_clues(stdout, app, clues_x, start_y + 1, clues_width, term_height)?;

    let controls_y = start_y + grid_height + 2;
    render_controls(stdout, app, start_x, controls_y)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }

    Ok(())
}

fn render_info_bar(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let session = app.quiz.session();

    let status = match session.state() {
        SessionState::Active => "",
        SessionState::Finishing => "  [finished]",
        SessionState::Finished => "  [done]",
    };

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        Print("CHEMISTRY CROSSWORD"),
        SetForegroundColor(theme.info),
        Print(format!(
            "   Time {}   Initial hints {}   Random hints {}   Penalty {}",
            session.elapsed_string(),
            session.initial_hints_remaining(),
            session.random_hints_remaining(),
            session.penalty_points()
        )),
        SetForegroundColor(theme.success),
        Print(status)
    )?;

    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let session = app.quiz.session();
    let active: Vec<Position> = app
        .active_clue()
        .and_then(|i| session.clues().get(i))
        .map(|c| c.cells().collect())
        .unwrap_or_default();

    for row in 0..session.grid().rows() {
        execute!(stdout, MoveTo(x, y + row as u16))?;
        for col in 0..session.grid().cols() {
            let pos = Position::new(row, col);
            render_cell(stdout, app, session, pos, active.contains(&pos))?;
        }
    }

    execute!(stdout, SetBackgroundColor(app.theme.bg))?;
    Ok(())
}

fn render_cell(
    stdout: &mut io::Stdout,
    app: &App,
    session: &Session,
    pos: Position,
    in_active_word: bool,
) -> io::Result<()> {
    let theme = &app.theme;

    if !session.grid().is_occupied(pos) {
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            Print(" ".repeat(CELL_WIDTH as usize))
        )?;
        return Ok(());
    }

    let bg = if pos == session.cursor() && session.is_active() {
        theme.selected_bg
    } else if in_active_word && session.is_active() {
        theme.highlight_bg
    } else {
        theme.cell_bg
    };

    let number = session
        .clue_number_at(pos)
        .map(|n| format!("{:<2}", n))
        .unwrap_or_else(|| "  ".to_string());

    let (letter, color): (char, Color) = match session.user_cell(pos) {
        Some(cell) if cell.is_corrected => (cell.letter, theme.corrected),
        Some(cell) if cell.is_hint => (cell.letter, theme.hint),
        Some(cell) => (cell.letter, theme.letter),
        None => (' ', theme.fg),
    };

    execute!(
        stdout,
        SetBackgroundColor(bg),
        SetForegroundColor(theme.number),
        Print(number),
        SetForegroundColor(color),
        Print(letter),
        Print(' ')
    )?;

    Ok(())
}

fn render_clues(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let session = app.quiz.session();
    let active = app.active_clue();
    let max_y = term_height.saturating_sub(2);
    let width = width as usize;

    let mut cy = y;
    for (title, direction) in [("ACROSS", Direction::Across), ("DOWN", Direction::Down)] {
        if cy >= max_y {
            break;
        }
        execute!(
            stdout,
            MoveTo(x, cy),
            SetForegroundColor(theme.key),
            Print(title)
        )?;
        cy += 1;

        let mut entries: Vec<(usize, &Clue)> = session
            .clues()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.direction == direction)
            .collect();
        entries.sort_by_key(|(_, c)| c.number);

        for (index, clue) in entries {
            let color = if Some(index) == active {
                theme.fg
            } else {
                theme.info
            };
            let mut lines = wrap_text(&format!("{:>2}. {}", clue.number, clue.text), width);
            for extra in session.extra_clues(index) {
                lines.extend(wrap_text(&format!("    + {}", extra), width));
            }
            for line in lines {
                if cy >= max_y {
                    return Ok(());
                }
                execute!(
                    stdout,
                    MoveTo(x, cy),
                    SetForegroundColor(color),
                    Print(line)
                )?;
                cy += 1;
            }
        }
        cy += 1;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    let controls = [
        ("Arrows", "Move"),
        ("A-Z", "Type"),
        ("Bksp", "Clear"),
        ("Tab", "Direction"),
        ("1", "First letter"),
        ("2", "Random letter"),
        ("3", "Extra clue"),
        ("Enter", "Finish"),
        ("Ctrl+N", "New puzzle"),
        ("Esc", "Quit"),
    ];

    // Two rows of five
    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 2;
        let row = i % 2;
        let cx = x + (col as u16) * 22;
        let cy = y + row as u16;

        execute!(
            stdout,
            MoveTo(cx, cy),
            SetForegroundColor(theme.key),
            Print(format!("{:>6}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let padded = format!("  {}  ", msg);
    let x = term_width.saturating_sub(padded.chars().count() as u16) / 2;

    execute!(
        stdout,
        MoveTo(x, 0),
        SetForegroundColor(theme.fg),
        SetBackgroundColor(theme.selected_bg),
        Print(&padded),
        SetBackgroundColor(theme.bg)
    )?;

    Ok(())
}

fn render_summary_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let Some(summary) = app.quiz.summary() else {
        return Ok(());
    };
    let d = &summary.details;

    let lines = [
        (theme.success, "CROSSWORD COMPLETE".to_string()),
        (theme.fg, String::new()),
        (theme.fg, format!("Score: {}", summary.score)),
        (theme.fg, format!("Time:  {}", summary.time)),
        (theme.fg, String::new()),
        (theme.info, format!("Correct letters      {:>4}", d.correct_letters)),
        (theme.info, format!("Total letters        {:>4}", d.total_letters)),
        (theme.info, format!("Initial-letter hints {:>4}", d.initial_hints_used)),
        (theme.info, format!("Random-letter hints  {:>4}", d.random_hints_used)),
        (theme.info, format!("Extra clues          {:>4}", d.extra_clues_used)),
        (theme.info, format!("Penalty points       {:>4}", d.penalty_points)),
        (theme.fg, String::new()),
        (theme.key, "Enter/r: new crossword    q: quit".to_string()),
    ];

    let width = lines.iter().map(|(_, l)| l.len()).max().unwrap_or(0) as u16;
    let x = term_width.saturating_sub(width) / 2;
    let y = term_height.saturating_sub(lines.len() as u16) / 2;

    for (i, (color, line)) in lines.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, y + i as u16),
            SetForegroundColor(*color),
            Print(line)
        )?;
    }

    Ok(())
}

fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_width && !current.is_empty() {
            lines.push(current);
            current = String::from("    ");
        }
        if !current.trim().is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.trim().is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_indents_continuation_lines() {
        let lines = wrap_text(" 1. Used for: rechargeable batteries and ceramics", 24);
        assert_eq!(lines[0], "1. Used for:");
        assert!(lines.len() > 1);
        assert!(lines[1..].iter().all(|l| l.starts_with("    ")));
        assert!(lines.iter().all(|l| l.len() <= 24));
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("   ", 10).is_empty());
    }
}
