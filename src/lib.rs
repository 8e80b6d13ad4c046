//! Ops Millionaire - a "Who Wants to Be a Millionaire" style quiz on
//! operations management, played in the terminal.
//!
//! The library holds the question bank, round building, the game session
//! state machine and its lifelines, plus the controller and rendering used
//! by the binary.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod questions;
pub mod round;
pub mod ui;

pub use controller::{Control, InputResult, Overlay, QuizController};
pub use error::{QuizError, Result};
pub use game::{
    AnswerFeedback, GameIntent, GameSession, Lifeline, Outcome, Prize, SessionState,
};
pub use questions::{OptionKey, Question, QuestionStore, Tier};
pub use round::Round;
