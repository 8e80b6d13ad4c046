//! Quiz screen controller: owns the session and the dialog stack, and turns
//! [`QuizInput`] into game intents and screen transitions.

use crate::error::Result;
use crate::game::{
    self, AnswerFeedback, AudienceVote, GameIntent, GameSession, Outcome, Prize, SessionState,
};
use crate::input::{QuizInput, LIFELINE_KEYS};
use crate::questions::{OptionKey, QuestionStore};
use rand::Rng;
use tracing::info;

/// Modal dialog shown over the question. At most one is open at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Right or wrong, with the explanation.
    AnswerResult(AnswerFeedback),
    /// Asked after a wrong answer: play again?
    Defeat(Prize),
    Audience(AudienceVote),
    PhoneHint(String),
    /// Walked away: show the prize and ask to play again.
    WalkAway(Prize),
    /// All questions answered.
    Victory(Prize),
}

/// Result of handling one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// The player declined to play again.
    Exit,
}

/// One key hint in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub key: String,
    pub action: &'static str,
    /// False when pressing the key would do nothing, e.g. a spent lifeline.
    pub enabled: bool,
}

impl Control {
    fn new(key: &str, action: &'static str) -> Self {
        Self {
            key: key.to_string(),
            action,
            enabled: true,
        }
    }
}

pub struct QuizController {
    store: QuestionStore,
    session: GameSession,
    overlay: Overlay,
    cursor: OptionKey,
    status: Option<String>,
    games_started: u32,
}

impl QuizController {
    /// Start the first session from a loaded store.
    pub fn new<R: Rng + ?Sized>(store: QuestionStore, rng: &mut R) -> Result<Self> {
        let session = GameSession::start(&store, rng)?;
        info!(questions = store.len(), "first session started");
        Ok(Self {
            store,
            session,
            overlay: Overlay::None,
            cursor: OptionKey::A,
            status: None,
            games_started: 1,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn dialog_open(&self) -> bool {
        self.overlay != Overlay::None
    }

    pub fn cursor(&self) -> OptionKey {
        self.cursor
    }

    /// One-line status message for the status bar.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Key hints for the question screen. Spent lifelines stay listed but
    /// disabled.
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = vec![
            Control::new("[A-D]", "Answer"),
            Control::new("[\u{2191}\u{2193}]", "Move"),
            Control::new("[Enter]", "Lock in"),
        ];
        for (lifeline, key) in LIFELINE_KEYS {
            controls.push(Control {
                key: format!("[{}]", key),
                action: lifeline.name(),
                enabled: !self.session.lifeline_used(lifeline),
            });
        }
        controls.push(Control::new("[Esc]", "Walk away"));
        controls
    }

    /// Handle one input. Errors only come from rebuilding a round on restart.
    pub fn handle_input<R: Rng + ?Sized>(
        &mut self,
        input: QuizInput,
        rng: &mut R,
    ) -> Result<InputResult> {
        match self.overlay.clone() {
            Overlay::None => {
                self.handle_question_input(input, rng);
                Ok(InputResult::Continue)
            }
            Overlay::AnswerResult(feedback) => {
                if matches!(input, QuizInput::Confirm | QuizInput::Decline) {
                    self.overlay = match feedback.next {
                        SessionState::Finished => Overlay::Victory(feedback.prize),
                        SessionState::Lost => Overlay::Defeat(feedback.prize),
                        _ => Overlay::None,
                    };
                    self.cursor = self.first_enabled_option();
                }
                Ok(InputResult::Continue)
            }
            Overlay::Audience(_) | Overlay::PhoneHint(_) => {
                self.overlay = Overlay::None;
                Ok(InputResult::Continue)
            }
            Overlay::Defeat(_) | Overlay::WalkAway(_) | Overlay::Victory(_) => match input {
                QuizInput::Confirm => {
                    self.restart(rng)?;
                    Ok(InputResult::Continue)
                }
                QuizInput::Decline => Ok(InputResult::Exit),
                _ => Ok(InputResult::Continue),
            },
        }
    }

    fn handle_question_input<R: Rng + ?Sized>(&mut self, input: QuizInput, rng: &mut R) {
        let intent = match input {
            QuizInput::Choose(key) => GameIntent::AnswerChosen(key),
            QuizInput::Submit => GameIntent::AnswerChosen(self.cursor),
            QuizInput::Lifeline(lifeline) => GameIntent::LifelineRequested(lifeline),
            QuizInput::Quit => GameIntent::QuitRequested,
            QuizInput::CursorUp => {
                self.move_cursor(OptionKey::prev);
                return;
            }
            QuizInput::CursorDown => {
                self.move_cursor(OptionKey::next);
                return;
            }
            QuizInput::Confirm | QuizInput::Decline | QuizInput::Other => return,
        };

        let requested_lifeline = match intent {
            GameIntent::LifelineRequested(lifeline) => Some(lifeline),
            _ => None,
        };

        self.status = None;
        match game::handle(&mut self.session, intent, rng) {
            Outcome::Answered(feedback) => self.overlay = Overlay::AnswerResult(feedback),
            Outcome::Eliminated(_) => {
                self.cursor = self.first_enabled_option();
                self.status = Some("Two wrong answers removed".to_string());
            }
            Outcome::AudienceVoted(vote) => self.overlay = Overlay::Audience(vote),
            Outcome::PhoneHint(hint) => self.overlay = Overlay::PhoneHint(hint),
            Outcome::WalkedAway(prize) => self.overlay = Overlay::WalkAway(prize),
            Outcome::Ignored => {
                if let Some(lifeline) = requested_lifeline {
                    self.status = Some(format!("{} already used", lifeline.name()));
                }
            }
        }
    }

    /// Move the cursor, skipping eliminated options.
    fn move_cursor(&mut self, step: fn(&OptionKey) -> OptionKey) {
        let mut key = step(&self.cursor);
        for _ in 0..OptionKey::ALL.len() {
            if !self.session.is_eliminated(key) {
                self.cursor = key;
                return;
            }
            key = step(&key);
        }
    }

    fn first_enabled_option(&self) -> OptionKey {
        OptionKey::ALL
            .into_iter()
            .find(|k| !self.session.is_eliminated(*k))
            .unwrap_or(OptionKey::A)
    }

    /// Discard the session and start a new one on a freshly drawn round.
    fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.session = GameSession::start(&self.store, rng)?;
        self.overlay = Overlay::None;
        self.cursor = OptionKey::A;
        self.status = None;
        self.games_started += 1;
        info!(game = self.games_started, "new session started");
        Ok(())
    }
}
