use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Vec2, World};
use crate::metrics::SessionStats;

use super::grid::CellGrid;

const HEAD_COLOR: Color = Color::Cyan;
const BODY_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;

pub struct Renderer {
    grid: CellGrid,
    cell_width: usize,
}

impl Renderer {
    pub fn new(cell_width: usize) -> Self {
        Self {
            grid: CellGrid::new(),
            cell_width: cell_width.max(1),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, world: &World, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_stats(world, stats);
        frame.render_widget(header, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if world.game_over() {
            let game_over = self.render_game_over(world);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(game_area, world);
            frame.render_widget(grid, game_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Fill the cell buffer from the world, then blit it row by row
    fn render_grid(&mut self, _area: Rect, world: &World) -> Paragraph<'_> {
        self.grid.clear();
        for segment in world.snake.segments() {
            self.grid.set(segment.pos, BODY_COLOR);
        }
        // Head drawn over the body so a fresh overlap is still visible.
        self.grid.set(world.snake.head_pos(), HEAD_COLOR);
        self.grid.set(world.food.pos, FOOD_COLOR);

        let head = world.snake.head_pos();
        let food = world.food.pos;

        let mut lines = Vec::new();
        for y in 0..world.height() {
            let mut spans = Vec::new();
            for x in 0..world.width() {
                let pos = Vec2::new(x, y);
                let cell = match self.grid.get(pos) {
                    Some(color) => {
                        let glyph = if pos == head {
                            "■"
                        } else if pos == food {
                            "●"
                        } else {
                            "□"
                        };
                        Span::styled(
                            self.cell_text(glyph),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        )
                    }
                    None => Span::styled(self.cell_text("."), Style::default().fg(Color::DarkGray)),
                };
                spans.push(cell);
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    /// Pad a one-column glyph out to the configured cell width
    fn cell_text(&self, glyph: &str) -> String {
        format!("{glyph:<width$}", width = self.cell_width)
    }

    fn render_stats(&self, world: &World, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                world.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.high_score().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                world.snake.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.run_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, world: &World) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    world.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
