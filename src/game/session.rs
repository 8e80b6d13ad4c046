//! Game session data structures.

use super::lifelines::{Lifeline, LifelineFlags};
use super::prize::Prize;
use crate::error::Result;
use crate::questions::{OptionKey, Question, QuestionStore};
use crate::round::Round;
use rand::Rng;

/// Where the session is in its linear progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an answer to the question at this round index.
    AwaitingAnswer(usize),
    /// Every question answered correctly.
    Finished,
    /// A wrong answer ended the session.
    Lost,
    /// The player walked away.
    Quit,
}

/// Answers disabled by 50:50 on one specific question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Elimination {
    pub(crate) index: usize,
    pub(crate) keys: [OptionKey; 2],
}

/// One play-through: the round being played, progress through it and the
/// lifelines spent. Owned by the interaction loop and replaced wholesale on
/// restart.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) round: Round,
    pub(crate) state: SessionState,
    pub(crate) lifelines: LifelineFlags,
    /// Highest round index answered correctly.
    pub(crate) guaranteed: Option<usize>,
    pub(crate) elimination: Option<Elimination>,
}

impl GameSession {
    /// Start a session on an already built round.
    pub fn new(round: Round) -> Self {
        let state = if round.is_empty() {
            SessionState::Finished
        } else {
            SessionState::AwaitingAnswer(0)
        };
        Self {
            round,
            state,
            lifelines: LifelineFlags::default(),
            guaranteed: None,
            elimination: None,
        }
    }

    /// Build a fresh round from the store and start a session on it.
    pub fn start<R: Rng + ?Sized>(store: &QuestionStore, rng: &mut R) -> Result<Self> {
        Ok(Self::new(Round::build(store, rng)?))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Offset into the round: the question being asked, or the round length
    /// once every question has been answered.
    pub fn current_index(&self) -> usize {
        match self.state {
            SessionState::AwaitingAnswer(index) => index,
            SessionState::Finished => self.round.len(),
            SessionState::Lost | SessionState::Quit => self
                .guaranteed
                .map(|g| g + 1)
                .unwrap_or(0)
                .min(self.round.len()),
        }
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::AwaitingAnswer(index) => self.round.get(index),
            _ => None,
        }
    }

    pub fn in_progress(&self) -> bool {
        matches!(self.state, SessionState::AwaitingAnswer(_))
    }

    pub fn guaranteed_checkpoint(&self) -> Option<usize> {
        self.guaranteed
    }

    /// Prize kept if the session ended now.
    pub fn prize(&self) -> Prize {
        Prize::from_checkpoint(self.guaranteed)
    }

    pub fn lifelines(&self) -> LifelineFlags {
        self.lifelines
    }

    pub fn lifeline_used(&self, lifeline: Lifeline) -> bool {
        self.lifelines.is_used(lifeline)
    }

    /// Options disabled by 50:50 on the current question.
    pub fn eliminated_options(&self) -> Option<[OptionKey; 2]> {
        match (self.state, self.elimination) {
            (SessionState::AwaitingAnswer(index), Some(e)) if e.index == index => Some(e.keys),
            _ => None,
        }
    }

    pub fn is_eliminated(&self, key: OptionKey) -> bool {
        self.eliminated_options()
            .is_some_and(|keys| keys.contains(&key))
    }
}
