use ratatui::prelude::*;
use ratatui::widgets::*;

use rustwheel::Phase;

use crate::app::{App, InputMode};
use crate::ui::wheel::slice_color;

pub fn render_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Name list
            Constraint::Length(3), // Input
            Constraint::Length(8), // Controls
        ])
        .split(area);

    render_names(frame, chunks[0], app);
    render_input(frame, chunks[1], app);
    render_controls(frame, chunks[2], app);
}

fn render_names(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.wheel.view();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(format!(" Names ({}) ", screen.slices.len()))
        .title_style(Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = match app.wheel.phase() {
        Phase::Spinning => app.wheel.under_pointer(),
        _ => None,
    };

    // Keep the tail of a long list visible
    let visible = inner.height as usize;
    let skip = screen.slices.len().saturating_sub(visible);
    let lines: Vec<Line> = screen
        .slices
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, (name, color_index))| {
            let name_style = if current == Some(name.as_str()) {
                Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(200, 200, 210))
            };
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(slice_color(*color_index))),
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::Rgb(100, 100, 120))),
                Span::styled(name.clone(), name_style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.mode != InputMode::Browse;
    let border = if active { Color::Rgb(255, 220, 80) } else { Color::Rgb(60, 60, 80) };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if active { BorderType::Double } else { BorderType::Rounded })
        .border_style(Style::default().fg(border))
        .title(app.mode.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if active {
        // Show the end of long input
        let width = inner.width.saturating_sub(1) as usize;
        let count = app.input.chars().count();
        let shown: String = app.input.chars().skip(count.saturating_sub(width)).collect();
        Line::from(vec![
            Span::styled(shown, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled("_", Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else {
        Line::from(Span::styled(
            "A add one · M add many",
            Style::default().fg(Color::Rgb(100, 100, 120)),
        ))
    };
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 60, 80)))
        .title(" Controls ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key_style = Style::default().fg(Color::Rgb(80, 200, 255));
    let desc_style = Style::default().fg(Color::Rgb(140, 140, 140));
    let spin_style = if app.wheel.phase() == Phase::Idle {
        key_style.add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Rgb(60, 60, 70))
    };

    let lines = if app.mode == InputMode::Browse {
        vec![
            Line::from(vec![Span::styled("  Space/S   ", spin_style), Span::styled("Spin", desc_style)]),
            Line::from(vec![Span::styled("  A / M     ", key_style), Span::styled("Add one / many", desc_style)]),
            Line::from(vec![Span::styled("  C         ", key_style), Span::styled("Copy list to file", desc_style)]),
            Line::from(vec![Span::styled("  R         ", key_style), Span::styled("New round", desc_style)]),
            Line::from(vec![Span::styled("  Q         ", key_style), Span::styled("Quit", desc_style)]),
        ]
    } else {
        vec![
            Line::from(vec![Span::styled("  Enter     ", key_style), Span::styled("Add", desc_style)]),
            Line::from(vec![Span::styled("  Esc       ", key_style), Span::styled("Done", desc_style)]),
        ]
    };
    frame.render_widget(Paragraph::new(lines), inner);
}
