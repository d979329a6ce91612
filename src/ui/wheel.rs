use ratatui::prelude::*;
use ratatui::widgets::*;

use rustwheel::mapper::{slice_at, slice_center};
use rustwheel::Phase;

use crate::app::App;
use crate::screen::Screen;

const BG: Color = Color::Rgb(10, 10, 20);

const PALETTE: [Color; 8] = [
    Color::Rgb(255, 87, 51),   // #FF5733
    Color::Rgb(51, 255, 87),   // #33FF57
    Color::Rgb(51, 87, 255),   // #3357FF
    Color::Rgb(243, 51, 255),  // #F333FF
    Color::Rgb(255, 51, 168),  // #FF33A8
    Color::Rgb(51, 255, 246),  // #33FFF6
    Color::Rgb(255, 195, 0),   // #FFC300
    Color::Rgb(218, 247, 166), // #DAF7A6
];

pub fn slice_color(color_index: usize) -> Color {
    PALETTE[color_index % PALETTE.len()]
}

pub fn render_wheel(frame: &mut Frame, area: Rect, app: &App) {
    let title = match (app.wheel.phase(), app.wheel.under_pointer()) {
        (Phase::Spinning, Some(name)) => format!(" 🎡 Wheel ▸ {name} "),
        _ => " 🎡 Wheel ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(title)
        .title_style(Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let screen = app.wheel.view();
    if screen.slices.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "The wheel is empty",
                Style::default().fg(Color::Rgb(180, 180, 200)).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press A to add a name, M to add several",
                Style::default().fg(Color::Rgb(100, 100, 120)),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(msg, inner);
        return;
    }

    let lines = wheel_lines(screen, inner.width as usize, inner.height as usize);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Rasterize the wheel into styled cells. Row 0 is kept for the pointer.
pub fn wheel_lines(screen: &Screen, width: usize, height: usize) -> Vec<Line<'static>> {
    let w = width;
    let h = height;
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(BG)); w]; h];

    let count = screen.slices.len();
    if count > 0 && w >= 8 && h >= 5 {
        // Terminal cells are roughly twice as tall as they are wide
        let cx = w as f64 / 2.0;
        let cy = (h as f64 + 1.0) / 2.0;
        let radius = ((h as f64 - 2.0) / 2.0).min(w as f64 / 4.0 - 1.0).max(1.0);

        for (y, row) in grid.iter_mut().enumerate().skip(1) {
            for (x, cell) in row.iter_mut().enumerate() {
                let dx = (x as f64 + 0.5 - cx) / 2.0;
                let dy = y as f64 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > radius {
                    continue;
                }
                let idx = slice_at(dy.atan2(dx), screen.rotation, count);
                let color = slice_color(screen.slices[idx].1);
                *cell = if dist < 0.7 {
                    ('●', Style::default().fg(Color::White).bg(color))
                } else {
                    (' ', Style::default().bg(color))
                };
            }
        }

        // Names along each slice's center line
        let max_label = match count {
            0..=8 => 10,
            9..=16 => 6,
            _ => 3,
        };
        for (i, (name, color_index)) in screen.slices.iter().enumerate() {
            let mid = slice_center(i, screen.rotation, count);
            let lr = radius * 0.6;
            let label: Vec<char> = name.chars().take(max_label).collect();
            let ly = (cy + mid.sin() * lr).floor();
            let lx = (cx + mid.cos() * lr * 2.0 - label.len() as f64 / 2.0).floor();
            if ly < 1.0 || ly >= h as f64 {
                continue;
            }
            let style = Style::default()
                .fg(Color::Rgb(15, 15, 25))
                .bg(slice_color(*color_index))
                .add_modifier(Modifier::BOLD);
            for (k, ch) in label.into_iter().enumerate() {
                let x = lx + k as f64;
                if x >= 0.0 && (x as usize) < w {
                    grid[ly as usize][x as usize] = (ch, style);
                }
            }
        }

        // Pointer, fixed above the wheel
        let px = cx + screen.pointer_angle.cos() * radius * 2.0;
        let py = cy + screen.pointer_angle.sin() * radius - 1.0;
        let col = (px.round().max(0.0) as usize).min(w - 1);
        let row = (py.max(0.0) as usize).min(h - 1);
        grid[row][col] = (
            '▼',
            Style::default()
                .fg(Color::Rgb(255, 235, 59))
                .bg(BG)
                .add_modifier(Modifier::BOLD),
        );
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
