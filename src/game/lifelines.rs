//! Lifeline simulators.
//!
//! Each simulator is a pure function of the correct key and a random source.
//! One-shot bookkeeping lives in [`LifelineFlags`], owned by the session.

use crate::constants::{AUDIENCE_CORRECT_BONUS, AUDIENCE_MAX_VOTES, AUDIENCE_MIN_VOTES};
use crate::questions::OptionKey;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// The three one-shot helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifeline {
    /// 50:50, disables two wrong answers.
    EliminateTwo,
    /// Simulated audience poll.
    AudienceVote,
    /// Phone-a-friend hint.
    PhoneHint,
}

impl Lifeline {
    pub const ALL: [Lifeline; 3] = [
        Lifeline::EliminateTwo,
        Lifeline::AudienceVote,
        Lifeline::PhoneHint,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::EliminateTwo => "50:50",
            Self::AudienceVote => "Audience",
            Self::PhoneHint => "Phone",
        }
    }
}

/// Which lifelines have been spent this session. Flags only go false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifelineFlags {
    eliminate_two: bool,
    audience_vote: bool,
    phone_hint: bool,
}

impl LifelineFlags {
    pub fn is_used(&self, lifeline: Lifeline) -> bool {
        match lifeline {
            Lifeline::EliminateTwo => self.eliminate_two,
            Lifeline::AudienceVote => self.audience_vote,
            Lifeline::PhoneHint => self.phone_hint,
        }
    }

    /// Spend a lifeline. Returns false if it was already spent.
    pub fn mark_used(&mut self, lifeline: Lifeline) -> bool {
        let flag = match lifeline {
            Lifeline::EliminateTwo => &mut self.eliminate_two,
            Lifeline::AudienceVote => &mut self.audience_vote,
            Lifeline::PhoneHint => &mut self.phone_hint,
        };
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    pub fn remaining(&self) -> usize {
        Lifeline::ALL.iter().filter(|l| !self.is_used(**l)).count()
    }
}

/// Pick two of the three wrong keys uniformly, returned in A..D order.
pub fn eliminate_two<R: Rng + ?Sized>(correct: OptionKey, rng: &mut R) -> [OptionKey; 2] {
    let wrong: Vec<OptionKey> = OptionKey::ALL
        .into_iter()
        .filter(|k| *k != correct)
        .collect();
    let mut picked: Vec<OptionKey> = wrong.choose_multiple(rng, 2).copied().collect();
    picked.sort();
    [picked[0], picked[1]]
}

/// Result of the audience poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudienceVote {
    /// Raw vote counts indexed by `OptionKey::index`.
    pub votes: [u32; 4],
    /// Rounded share of the total per option, ties to even. Rounded
    /// independently, so the sum can be 99 or 101.
    pub percentages: [u32; 4],
}

impl AudienceVote {
    pub fn percentage(&self, key: OptionKey) -> u32 {
        self.percentages[key.index()]
    }

    pub fn votes(&self, key: OptionKey) -> u32 {
        self.votes[key.index()]
    }
}

/// Simulate the audience: every option draws 10..=30 votes and the correct
/// one gets a fixed bonus on top.
pub fn audience_vote<R: Rng + ?Sized>(correct: OptionKey, rng: &mut R) -> AudienceVote {
    let mut votes = [0u32; 4];
    for slot in votes.iter_mut() {
        *slot = rng.gen_range(AUDIENCE_MIN_VOTES..=AUDIENCE_MAX_VOTES);
    }
    votes[correct.index()] += AUDIENCE_CORRECT_BONUS;

    AudienceVote {
        votes,
        percentages: percentages(votes),
    }
}

/// Whole-number share of each count, rounding exact halves to the even value.
pub fn percentages(votes: [u32; 4]) -> [u32; 4] {
    let total: u32 = votes.iter().sum();
    if total == 0 {
        return [0; 4];
    }
    votes.map(|v| {
        let scaled = 100 * v;
        let (quotient, remainder) = (scaled / total, scaled % total);
        match (2 * remainder).cmp(&total) {
            Ordering::Less => quotient,
            Ordering::Greater => quotient + 1,
            Ordering::Equal => quotient + quotient % 2,
        }
    })
}

/// The friend on the phone always names the correct option.
pub fn phone_hint(correct: OptionKey) -> String {
    format!("Well, I think the right answer is option {}!", correct)
}
