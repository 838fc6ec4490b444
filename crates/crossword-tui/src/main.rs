mod app;
mod render;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossword_core::{parse_elements, Element, Generator, Quiz, SessionConfig};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use theme::ThemeChoice;

const BUNDLED_ELEMENTS: &str = include_str!("../data/elements.json");

/// Chemistry crossword in the terminal
#[derive(Parser, Debug)]
#[command(name = "crossword", version, about)]
struct Cli {
    /// JSON element dataset (defaults to the bundled one)
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Seed for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds the corrected grid stays up before the summary
    #[arg(long, value_name = "SECS", default_value_t = 3)]
    finish_delay: u64,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let elements = load_elements(cli.data.as_deref())?;
    log::info!("loaded {} elements", elements.len());

    let generator = match cli.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    let config = SessionConfig {
        finish_delay: Duration::from_secs(cli.finish_delay),
        ..Default::default()
    };
    let mut app = App::new(Quiz::new(elements, generator, config), cli.theme.into());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// Default log filter. Without a log file, stderr shares the terminal with
/// the alternate screen, so only errors get through unless `RUST_LOG` says otherwise.
fn default_filter(log_file: Option<&Path>) -> &'static str {
    if log_file.is_some() {
        "warn"
    } else {
        "error"
    }
}

fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let env = env_logger::Env::default().default_filter_or(default_filter(log_file));
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_elements(path: Option<&Path>) -> io::Result<Vec<Element>> {
    let json = match path {
        Some(path) => fs::read_to_string(path)?,
        None => BUNDLED_ELEMENTS.to_string(),
    };
    parse_elements(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();
    let mut last_second = Instant::now();

    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        let timeout = App::TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= App::TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }

        if last_second.elapsed() >= Duration::from_secs(1) {
            app.tick_clock();
            last_second += Duration::from_secs(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_parses() {
        let elements = load_elements(None).unwrap();
        assert!(elements.len() >= 30);
        assert!(elements.iter().all(|e| !e.clue_sentences().is_empty()));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["crossword"]);
        assert_eq!(cli.finish_delay, 3);
        assert_eq!(cli.theme, ThemeChoice::Dark);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_logs_stay_off_the_screen_by_default() {
        assert_eq!(default_filter(None), "error");
        assert_eq!(default_filter(Some(Path::new("crossword.log"))), "warn");
    }

    #[test]
    fn test_cli_theme_names() {
        let cli = Cli::parse_from(["crossword", "--theme", "high-contrast", "--seed", "9"]);
        assert_eq!(cli.theme, ThemeChoice::HighContrast);
        assert_eq!(cli.seed, Some(9));
    }
}
