use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::screen::Overlay;

const SPARKS_PER_BURST: usize = 40;
const SPARK_CHARS: [char; 4] = ['✦', '✧', '*', '·'];
const SPARK_COLORS: [Color; 4] = [
    Color::Rgb(255, 220, 80),
    Color::Rgb(255, 87, 51),
    Color::Rgb(51, 255, 246),
    Color::Rgb(243, 51, 255),
];

pub fn render_overlay(frame: &mut Frame, area: Rect, overlay: &Overlay) {
    if let Some(burst) = overlay.burst() {
        render_sparks(frame, area, burst);
    }

    let overlay_w = 46u16.min(area.width.saturating_sub(4));
    let overlay_h = 9u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    // Clear background
    frame.render_widget(Clear, overlay_area);

    let (title, accent) = match overlay {
        Overlay::Eliminated { .. } => (" ❌ ELIMINATED ", Color::Rgb(255, 90, 90)),
        Overlay::Winner { .. } => (" 🏆 WINNER! ", Color::Rgb(255, 220, 80)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(accent))
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let headline = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::Rgb(140, 140, 160));
    let mut lines = vec![Line::from("")];
    match overlay {
        Overlay::Eliminated { name } => {
            lines.push(Line::from(vec![
                Span::styled(name.clone(), headline.fg(accent)),
                Span::styled(" has been eliminated!", headline),
            ]));
        }
        Overlay::Winner { winner, eliminated, .. } => {
            lines.push(Line::from(vec![
                Span::styled(winner.clone(), headline.fg(accent)),
                Span::styled(" has won!", headline),
            ]));
            if let Some(name) = eliminated {
                lines.push(Line::from(Span::styled(
                    format!("{name} went out in the final spin"),
                    muted,
                )));
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" continue", muted),
    ]));

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}

fn render_sparks(frame: &mut Frame, area: Rect, burst: u32) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let mut s = burst.wrapping_add(1).wrapping_mul(2_654_435_761);
    for _ in 0..SPARKS_PER_BURST {
        s = s.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let x = area.x + ((s >> 8) % area.width as u32) as u16;
        s = s.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let y = area.y + ((s >> 8) % area.height as u32) as u16;
        let pick = (s >> 20) as usize;
        let spark = Span::styled(
            SPARK_CHARS[pick % SPARK_CHARS.len()].to_string(),
            Style::default()
                .fg(SPARK_COLORS[(pick >> 2) % SPARK_COLORS.len()])
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Paragraph::new(spark), Rect::new(x, y, 1, 1));
    }
}
