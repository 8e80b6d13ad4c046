//! Game session state machine, prize ladder and lifelines.

pub mod lifelines;
pub mod logic;
pub mod prize;
mod session;

pub use lifelines::{AudienceVote, Lifeline, LifelineFlags};
pub use logic::{handle, AnswerFeedback, GameIntent, Outcome};
pub use prize::Prize;
pub use session::{GameSession, SessionState};
