use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Phase, Position, Snapshot};
use crate::metrics::GameMetrics;

const HEAD: &str = "■ ";
const BODY: &str = "□ ";
const FOOD: &str = "● ";
const EMPTY: &str = ". ";

/// Draws a [`Snapshot`] into a terminal frame; never touches the state
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot<'_>,
        grid: (usize, usize),
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);
        frame.render_widget(self.render_grid(snapshot, grid), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot<'_>, grid: (usize, usize)) -> Paragraph<'static> {
        let border = match snapshot.phase {
            Phase::Running => Color::White,
            Phase::Crashed | Phase::Crashing => Color::Red,
        };

        Paragraph::new(grid_lines(snapshot, grid))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot<'_>, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Crashes: ", label),
            Span::styled(metrics.crashes.to_string(), value),
            Span::raw("    "),
            Span::styled("Phase: ", label),
            Span::styled(phase_label(snapshot.phase), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
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

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Running => "running",
        Phase::Crashed => "crashed",
        Phase::Crashing => "crashing",
    }
}

/// One line per board row. Segments off the board are not drawn.
fn grid_lines(snapshot: &Snapshot<'_>, (width, height): (usize, usize)) -> Vec<Line<'static>> {
    // The head pulses with the timing accumulator
    let fade = snapshot.intensity;
    let head_style = Style::default()
        .fg(Color::Rgb(fade, fade, fade))
        .add_modifier(Modifier::BOLD);
    let body_style = match snapshot.phase {
        Phase::Running => Style::default().fg(Color::White),
        Phase::Crashed | Phase::Crashing => Style::default().fg(Color::Red),
    };

    (0..height as i32)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..width as i32)
                .map(|x| {
                    let pos = Position::new(x, y);
                    if pos == snapshot.head() {
                        Span::styled(HEAD, head_style)
                    } else if snapshot.segments.contains(&pos) {
                        Span::styled(BODY, body_style)
                    } else if pos == snapshot.food {
                        Span::styled(FOOD, Style::default().fg(Color::Red))
                    } else {
                        Span::styled(EMPTY, Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
