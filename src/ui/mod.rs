//! Terminal rendering for the quiz.

mod dialogs;
pub mod game_common;
mod quiz_scene;

use crate::controller::QuizController;
use ratatui::Frame;

/// Draw the whole quiz screen, including any open dialog.
pub fn draw(frame: &mut Frame, controller: &QuizController) {
    let area = frame.size();
    quiz_scene::render_quiz(frame, area, controller);
    dialogs::render_overlay(frame, area, controller.overlay());
}

/// Blocking error dialog shown when the question bank cannot be used.
pub fn draw_load_error(frame: &mut Frame, message: &str) {
    let area = frame.size();
    dialogs::render_error(frame, area, message);
}
