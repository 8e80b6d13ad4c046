//! Shared layout helpers.

use crate::controller::Control;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Prize ladder column on the left.
    pub ladder: Rect,
    /// Question and answers.
    pub content: Rect,
    /// Status bar (2 lines) under the content.
    pub status_bar: Rect,
    /// Lifeline panel on the right.
    pub info_panel: Rect,
}

/// Create the quiz layout inside an outer border.
///
/// ```text
/// ┌─ Title ───────────────────────────────────────────┐
/// │ ┌ Prizes ┐ [content area]               ┌ Info ─┐ │
/// │ │        │                              │       │ │
/// │ │        │ [status bar - 2 lines]       │       │ │
/// └───────────────────────────────────────────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    ladder_width: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ladder_width),
            Constraint::Min(30),
            Constraint::Length(info_panel_width),
        ])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(h_chunks[1]);

    GameLayout {
        ladder: h_chunks[0],
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[2],
    }
}

/// Two-line status bar: the message, then the key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    message_color: Color,
    controls: &[Control],
) {
    if area.height == 0 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(message_color),
    ))];
    if area.height >= 2 {
        lines.push(controls_line(controls));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Key hints on one line. Disabled controls are dimmed and struck through.
fn controls_line(controls: &[Control]) -> Line<'static> {
    let spent = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT);

    let mut spans = Vec::with_capacity(controls.len() * 3);
    for control in controls {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        let (key_style, action_style) = if control.enabled {
            (
                Style::default().fg(Color::White),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (spent, spent)
        };
        spans.push(Span::styled(control.key.clone(), key_style));
        spans.push(Span::styled(format!(" {}", control.action), action_style));
    }
    Line::from(spans)
}

/// A rectangle of at most `width` x `height`, centred in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 12);
        assert_eq!(rect, Rect::new(20, 14, 60, 12));
    }

    #[test]
    fn test_controls_line_strikes_disabled() {
        let controls = [
            Control {
                key: "[F]".to_string(),
                action: "50:50",
                enabled: false,
            },
            Control {
                key: "[Esc]".to_string(),
                action: "Walk away",
                enabled: true,
            },
        ];
        let line = controls_line(&controls);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[F] 50:50  [Esc] Walk away");

        assert!(line.spans[0].style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(line.spans[1].style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(!line.spans[3].style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(line.spans[3].style.fg, Some(Color::White));
    }

    #[test]
    fn test_controls_line_empty() {
        assert!(controls_line(&[]).spans.is_empty());
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(area, 60, 20);
        assert!(rect.width <= 26);
        assert!(rect.height <= 8);
        assert!(rect.x + rect.width <= area.width);
    }
}
