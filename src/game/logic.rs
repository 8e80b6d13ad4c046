//! Session transitions.
//!
//! Every user intent enters through [`handle`]. Intents that cannot apply in
//! the current state (a spent lifeline, an answer after the session ended, an
//! eliminated option) come back as [`Outcome::Ignored`] and leave the session
//! untouched.

use super::lifelines::{self, AudienceVote, Lifeline};
use super::prize::Prize;
use super::session::{Elimination, GameSession, SessionState};
use crate::questions::OptionKey;
use rand::Rng;
use tracing::info;

/// Player intents, independent of how they were entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    AnswerChosen(OptionKey),
    LifelineRequested(Lifeline),
    QuitRequested,
}

/// What happened when an answer was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub chosen: OptionKey,
    pub correct_key: OptionKey,
    pub correct: bool,
    pub explanation: String,
    /// Prize kept after this answer.
    pub prize: Prize,
    /// Session state after the transition.
    pub next: SessionState,
}

/// Result of one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answered(AnswerFeedback),
    Eliminated([OptionKey; 2]),
    AudienceVoted(AudienceVote),
    PhoneHint(String),
    WalkedAway(Prize),
    Ignored,
}

/// Apply one intent to the session.
pub fn handle<R: Rng + ?Sized>(
    session: &mut GameSession,
    intent: GameIntent,
    rng: &mut R,
) -> Outcome {
    match intent {
        GameIntent::AnswerChosen(key) => submit_answer(session, key),
        GameIntent::LifelineRequested(lifeline) => use_lifeline(session, lifeline, rng),
        GameIntent::QuitRequested => quit(session),
    }
}

/// Compare the choice with the current question and advance or end the session.
pub fn submit_answer(session: &mut GameSession, choice: OptionKey) -> Outcome {
    let SessionState::AwaitingAnswer(index) = session.state else {
        return Outcome::Ignored;
    };
    if session.is_eliminated(choice) {
        return Outcome::Ignored;
    }
    let Some(question) = session.round.get(index) else {
        return Outcome::Ignored;
    };

    let correct_key = question.correct;
    let explanation = question.explanation.clone();
    let correct = question.is_correct(choice);

    if correct {
        session.guaranteed = Some(index);
        session.state = if index + 1 >= session.round.len() {
            SessionState::Finished
        } else {
            SessionState::AwaitingAnswer(index + 1)
        };
        info!(index, choice = %choice, prize = %session.prize(), "correct answer");
    } else {
        session.state = SessionState::Lost;
        info!(index, choice = %choice, correct = %correct_key, prize = %session.prize(), "wrong answer, session over");
    }

    Outcome::Answered(AnswerFeedback {
        chosen: choice,
        correct_key,
        correct,
        explanation,
        prize: session.prize(),
        next: session.state,
    })
}

/// Spend a lifeline on the current question. Spent lifelines are no-ops.
pub fn use_lifeline<R: Rng + ?Sized>(
    session: &mut GameSession,
    lifeline: Lifeline,
    rng: &mut R,
) -> Outcome {
    let SessionState::AwaitingAnswer(index) = session.state else {
        return Outcome::Ignored;
    };
    let Some(correct) = session.round.get(index).map(|q| q.correct) else {
        return Outcome::Ignored;
    };
    if !session.lifelines.mark_used(lifeline) {
        return Outcome::Ignored;
    }

    info!(index, lifeline = lifeline.name(), "lifeline used");
    match lifeline {
        Lifeline::EliminateTwo => {
            let keys = lifelines::eliminate_two(correct, rng);
            session.elimination = Some(Elimination { index, keys });
            Outcome::Eliminated(keys)
        }
        Lifeline::AudienceVote => Outcome::AudienceVoted(lifelines::audience_vote(correct, rng)),
        Lifeline::PhoneHint => Outcome::PhoneHint(lifelines::phone_hint(correct)),
    }
}

/// Walk away with the guaranteed prize. Accepted from any state.
pub fn quit(session: &mut GameSession) -> Outcome {
    let prize = session.prize();
    session.state = SessionState::Quit;
    info!(prize = %prize, "player walked away");
    Outcome::WalkedAway(prize)
}
