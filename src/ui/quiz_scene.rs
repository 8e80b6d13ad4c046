//! Question screen: prize ladder, prompt, answers and lifelines.

use super::game_common::{create_game_layout, render_status_bar};
use crate::constants::PRIZE_LADDER;
use crate::controller::QuizController;
use crate::game::GameSession;
use crate::input::LIFELINE_KEYS;
use crate::questions::OptionKey;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const NAVY: Color = Color::Rgb(0, 31, 63);
const GOLD: Color = Color::Rgb(255, 215, 0);

/// Render the question screen.
pub fn render_quiz(frame: &mut Frame, area: Rect, controller: &QuizController) {
    let layout = create_game_layout(
        frame,
        area,
        " Who Wants to Be an Operations Manager? ",
        GOLD,
        16,
        20,
    );
    let session = controller.session();

    render_ladder(frame, layout.ladder, session);
    render_question(frame, layout.content, controller);
    render_info_panel(frame, layout.info_panel, session);

    let (status, color) = match (controller.status(), session.current_question()) {
        (Some(message), _) => (message.to_string(), Color::Yellow),
        (None, Some(question)) => {
            let index = session.current_index();
            (
                format!(
                    "{} question {} of {} - playing for {}",
                    question.tier,
                    index + 1,
                    session.round().len(),
                    PRIZE_LADDER[index.min(PRIZE_LADDER.len() - 1)]
                ),
                Color::Gray,
            )
        }
        (None, None) => (String::new(), Color::Gray),
    };
    render_status_bar(frame, layout.status_bar, &status, color, &controller.controls());
}

/// Prize ladder, highest prize on top.
fn render_ladder(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .title(" Prizes ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = session
        .current_question()
        .map(|_| session.current_index());
    let guaranteed = session.guaranteed_checkpoint();

    let lines: Vec<Line> = PRIZE_LADDER
        .iter()
        .enumerate()
        .rev()
        .map(|(index, label)| {
            let text = format!(" {:>2} {:>9}", index + 1, label);
            let style = if Some(index) == current {
                Style::default()
                    .fg(Color::Black)
                    .bg(GOLD)
                    .add_modifier(Modifier::BOLD)
            } else if guaranteed.is_some_and(|g| index <= g) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Prompt and the four answers.
fn render_question(frame: &mut Frame, area: Rect, controller: &QuizController) {
    let session = controller.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(12)])
        .split(area);

    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(prompt, chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 4])
        .split(chunks[1]);

    for key in OptionKey::ALL {
        let eliminated = session.is_eliminated(key);
        let selected = controller.cursor() == key && !controller.dialog_open();

        let (text, style, border) = if eliminated {
            (
                format!("{})", key),
                Style::default().fg(Color::DarkGray),
                Color::DarkGray,
            )
        } else if selected {
            (
                format!("{}) {}", key, question.option(key)),
                Style::default()
                    .fg(Color::Black)
                    .bg(GOLD)
                    .add_modifier(Modifier::BOLD),
                GOLD,
            )
        } else {
            (
                format!("{}) {}", key, question.option(key)),
                Style::default().fg(Color::White).bg(NAVY),
                Color::Blue,
            )
        };

        let answer = Paragraph::new(Line::from(Span::styled(text, style))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(answer, rows[key.index()]);
    }
}

/// Lifeline availability and the prize already secured.
fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .title(" Lifelines ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (lifeline, key) in LIFELINE_KEYS {
        let used = session.lifeline_used(lifeline);
        let style = if used {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", key), Style::default().fg(Color::White)),
            Span::styled(lifeline.name(), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Secured:",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        session.prize().label(),
        Style::default().fg(Color::Green),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
