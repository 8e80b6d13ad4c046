//! Modal dialogs drawn over the question screen.

use super::game_common::centered_rect;
use crate::controller::Overlay;
use crate::game::{AnswerFeedback, AudienceVote, Prize};
use crate::questions::OptionKey;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const AUDIENCE_BAR_WIDTH: u32 = 25;

pub fn render_overlay(frame: &mut Frame, area: Rect, overlay: &Overlay) {
    match overlay {
        Overlay::None => {}
        Overlay::AnswerResult(feedback) => render_answer_result(frame, area, feedback),
        Overlay::Defeat(prize) => render_play_again(
            frame,
            area,
            " Game Over ",
            Color::Red,
            "Better luck next time.",
            *prize,
        ),
        Overlay::Audience(vote) => render_audience(frame, area, vote),
        Overlay::PhoneHint(hint) => render_phone_hint(frame, area, hint),
        Overlay::WalkAway(prize) => render_play_again(
            frame,
            area,
            " Walk Away ",
            Color::Yellow,
            "You decided to stop here.",
            *prize,
        ),
        Overlay::Victory(prize) => render_play_again(
            frame,
            area,
            " Millionaire! ",
            Color::Green,
            "All questions answered correctly!",
            *prize,
        ),
    }
}

/// Draw a bordered, cleared dialog box and return its inner area.
fn dialog_frame(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn hint_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_answer_result(frame: &mut Frame, area: Rect, feedback: &AnswerFeedback) {
    let dialog = centered_rect(area, 64, 14);
    let (headline, color) = if feedback.correct {
        ("Correct answer!".to_string(), Color::Green)
    } else {
        (
            format!("Wrong! The correct answer was: {}", feedback.correct_key),
            Color::Red,
        )
    };
    let inner = dialog_frame(frame, dialog, " Result ", color);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            feedback.explanation.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        hint_line("[Enter] Continue"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_play_again(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    prize: Prize,
) {
    let dialog = centered_rect(area, 50, 11);
    let inner = dialog_frame(frame, dialog, title, color);

    let lines = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::raw("You won: "),
            Span::styled(
                prize.label(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from("Play again?"),
        hint_line("[Y] Yes  [N] No"),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_audience(frame: &mut Frame, area: Rect, vote: &AudienceVote) {
    let dialog = centered_rect(area, 46, 10);
    let inner = dialog_frame(frame, dialog, " Ask the Audience ", Color::Cyan);

    let mut lines = vec![Line::from("")];
    for key in OptionKey::ALL {
        let pct = vote.percentage(key);
        let filled = (pct * AUDIENCE_BAR_WIDTH / 100).min(AUDIENCE_BAR_WIDTH) as usize;
        lines.push(Line::from(vec![
            Span::styled(format!(" {}) ", key), Style::default().fg(Color::White)),
            Span::styled(
                "\u{2588}".repeat(filled),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" ".repeat(AUDIENCE_BAR_WIDTH as usize - filled)),
            Span::styled(format!(" {:>3}%", pct), Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(" [Any key] Close"));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_phone_hint(frame: &mut Frame, area: Rect, hint: &str) {
    let dialog = centered_rect(area, 50, 8);
    let inner = dialog_frame(frame, dialog, " Phone a Friend ", Color::LightGreen);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201C}{}\u{201D}", hint),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        hint_line("[Any key] Hang up"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// Load failure. The caller exits after any key.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    frame.render_widget(Clear, area);
    let dialog = centered_rect(area, 60, 9);
    let inner = dialog_frame(frame, dialog, " Error ", Color::Red);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        hint_line("[Any key] Exit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
