use clap::ValueEnum;
use crossterm::style::Color;

/// Theme names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    HighContrast,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
            ThemeChoice::HighContrast => Theme::high_contrast(),
        }
    }
}

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Background of a letter cell
    pub cell_bg: Color,
    /// Letters typed by the player
    pub letter: Color,
    /// Letters revealed by a hint
    pub hint: Color,
    /// Letters filled in at finish time
    pub corrected: Color,
    /// Clue numbers inside cells
    pub number: Color,
    /// Focused cell background
    pub selected_bg: Color,
    /// Cells of the active word
    pub highlight_bg: Color,
    /// Success/complete color
    pub success: Color,
    /// Timer/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            cell_bg: Color::Rgb { r: 45, g: 50, b: 65 },
            letter: Color::Rgb { r: 80, g: 180, b: 255 },
            hint: Color::Rgb { r: 255, g: 210, b: 100 },
            corrected: Color::Rgb { r: 255, g: 90, b: 90 },
            number: Color::Rgb { r: 140, g: 150, b: 180 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            highlight_bg: Color::Rgb { r: 55, g: 62, b: 85 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            cell_bg: Color::Rgb { r: 225, g: 228, b: 238 },
            letter: Color::Rgb { r: 30, g: 100, b: 200 },
            hint: Color::Rgb { r: 200, g: 120, b: 20 },
            corrected: Color::Rgb { r: 220, g: 50, b: 50 },
            number: Color::Rgb { r: 130, g: 130, b: 150 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            highlight_bg: Color::Rgb { r: 205, g: 212, b: 235 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            cell_bg: Color::Rgb { r: 40, g: 40, b: 40 },
            letter: Color::Cyan,
            hint: Color::Yellow,
            corrected: Color::Red,
            number: Color::Grey,
            selected_bg: Color::Blue,
            highlight_bg: Color::Rgb { r: 70, g: 70, b: 70 },
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }
}
