mod help;
mod helpers;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use helpers::{centered_rect, rgb_to_color};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let background = app
        .canvas
        .background
        .map(rgb_to_color)
        .unwrap_or_else(Theme::fallback_background);
    frame.render_widget(Block::default().style(Style::default().bg(background)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let label = Paragraph::new(Line::from(Span::styled(
        app.canvas.label.as_str(),
        Style::default()
            .fg(Theme::label())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, layout[1]);

    let hints = Paragraph::new(Line::from(Span::styled(
        format!("{} shown  space: New color  ?: Help  q: Quit", app.generated),
        Style::default().fg(Theme::hint()),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, layout[3]);

    if app.show_help {
        let popup = centered_rect(50, 50, area);
        frame.render_widget(Clear, popup);
        let help = Paragraph::new(help::build_help_text()).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::accent())),
        );
        frame.render_widget(help, popup);
    }
}
