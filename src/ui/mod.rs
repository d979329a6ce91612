pub mod overlay;
pub mod panel;
pub mod wheel;

use ratatui::prelude::*;
use ratatui::widgets::*;

use rustwheel::Phase;

use crate::app::{App, StatusKind};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Wheel + names
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(38)])
        .split(chunks[0]);

    wheel::render_wheel(frame, body[0], app);
    panel::render_panel(frame, body[1], app);
    render_status(frame, chunks[1], app);

    // Result overlay renders on top of everything
    if let Some(overlay) = &app.wheel.view().overlay {
        overlay::render_overlay(frame, frame.area(), overlay);
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => Color::Rgb(120, 220, 120),
            StatusKind::Warning => Color::Rgb(255, 170, 60),
        };
        Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(notice) = &app.notice {
        Line::from(vec![
            Span::styled(" 📋 Copied ", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{} name(s) to {}", notice.count, notice.path.display()),
                Style::default().fg(Color::Rgb(140, 140, 160)),
            ),
        ])
    } else {
        let hint = match app.wheel.phase() {
            Phase::Idle => " Ready",
            Phase::Spinning => " Spinning...",
            Phase::PresentingOutcome => " Press Enter to continue",
        };
        Line::from(Span::styled(hint, Style::default().fg(Color::Rgb(100, 100, 120))))
    };
    frame.render_widget(Paragraph::new(line), area);
}
