//! Ratatui implementation of the runtime's [`Renderer`].
use std::io;

use game_core::{InventoryEntry, MapOracle, Position, Snapshot, TerrainKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use runtime::{Outcome, Renderer, RoomMap};

use super::terminal::TerminalGuard;
use super::theme::RatatuiTheme;

/// Draws snapshots onto the terminal it owns.
///
/// Terrain comes from the room map; everything that moves comes from the
/// snapshot. The terminal is restored when the renderer is dropped.
pub struct TuiRenderer {
    guard: TerminalGuard,
    map: RoomMap,
    last: Option<Snapshot>,
}

impl TuiRenderer {
    pub fn new(guard: TerminalGuard, map: RoomMap) -> Self {
        Self {
            guard,
            map,
            last: None,
        }
    }
}

impl Renderer for TuiRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let map = &self.map;
        self.guard
            .terminal()
            .draw(|frame| draw_dungeon(frame, map, snapshot))?;
        self.last = Some(snapshot.clone());
        Ok(())
    }

    fn show_inventory(&mut self, entries: &[InventoryEntry]) -> io::Result<()> {
        let map = &self.map;
        let last = self.last.as_ref();
        self.guard.terminal().draw(|frame| {
            if let Some(snapshot) = last {
                draw_dungeon(frame, map, snapshot);
            }
            draw_inventory(frame, entries);
        })?;
        Ok(())
    }

    fn show_outcome(&mut self, outcome: Outcome) -> io::Result<()> {
        self.guard
            .terminal()
            .draw(|frame| draw_outcome(frame, outcome))?;
        Ok(())
    }
}

/// Room, ground items, actors, and the hit point line on top.
pub(crate) fn draw_dungeon(frame: &mut Frame, map: &RoomMap, snapshot: &Snapshot) {
    let theme = RatatuiTheme;
    let dimensions = map.dimensions();

    let mut canvas: Vec<Vec<(char, Style)>> = (0..dimensions.rows as i32)
        .map(|row| {
            (0..dimensions.cols as i32)
                .map(|col| {
                    let terrain = map
                        .tile(Position::new(row, col))
                        .map_or(TerrainKind::Void, |tile| tile.terrain());
                    theme.terrain(terrain)
                })
                .collect()
        })
        .collect();

    for glyph in &snapshot.items {
        put(&mut canvas, glyph.position, glyph.symbol, theme.item());
    }
    for glyph in &snapshot.actors {
        put(&mut canvas, glyph.position, glyph.symbol, theme.actor(glyph.symbol));
    }

    let header = format!("Your Hitpoint is {}", snapshot.hero_hit_points);
    for (col, ch) in header.chars().enumerate() {
        put(&mut canvas, Position::new(0, col as i32), ch, theme.header());
    }

    let lines: Vec<Line> = canvas
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), frame.area());
}

fn put(canvas: &mut [Vec<(char, Style)>], position: Position, symbol: char, style: Style) {
    let (Ok(row), Ok(col)) = (usize::try_from(position.row), usize::try_from(position.col)) else {
        return;
    };
    if let Some(cell) = canvas.get_mut(row).and_then(|cells| cells.get_mut(col)) {
        *cell = (symbol, style);
    }
}

fn draw_inventory(frame: &mut Frame, entries: &[InventoryEntry]) {
    let mut lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            Line::from(format!(
                "{} - {} ({})",
                entry.slot, entry.name, entry.durability
            ))
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::from("(empty)"));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Press a slot number, any other key cancels"));

    let height = lines.len() as u16 + 2;
    let area = centered(frame.area(), 48, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Inventory ");
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_outcome(frame: &mut Frame, outcome: Outcome) {
    let theme = RatatuiTheme;
    let area = frame.area();
    frame.render_widget(Clear, area);

    let message = Paragraph::new(Line::styled(outcome.message(), theme.outcome(outcome)))
        .alignment(Alignment::Center);
    frame.render_widget(message, centered(area, area.width, 1));
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
