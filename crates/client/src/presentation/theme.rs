//! Colors and glyphs for the terminal UI.
use game_core::TerrainKind;
use ratatui::style::{Color, Modifier, Style};
use runtime::Outcome;

/// Consistent styling rules for the CLI.
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn terrain(&self, terrain: TerrainKind) -> (char, Style) {
        let (glyph, color) = match terrain {
            TerrainKind::Floor => ('.', Color::DarkGray),
            TerrainKind::Wall => ('#', Color::Gray),
            TerrainKind::Void => (' ', Color::Reset),
        };
        (glyph, Style::default().fg(color))
    }

    pub fn actor(&self, symbol: char) -> Style {
        if symbol == '@' {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::LightRed)
        }
    }

    pub fn item(&self) -> Style {
        Style::default().fg(Color::LightCyan)
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn outcome(&self, outcome: Outcome) -> Style {
        let color = match outcome {
            Outcome::Quit => Color::Yellow,
            Outcome::Lost => Color::Red,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
