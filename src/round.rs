//! Round building: draws the ordered question sequence for one play-through.

use crate::error::{QuizError, Result};
use crate::questions::{Question, QuestionStore, Tier};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// The ordered questions of one play-through: the Easy quota, then Medium,
/// then Hard. Order within a tier is whatever the sampler produced; tiers are
/// never interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    questions: Vec<Question>,
}

impl Round {
    /// Sample a fresh round from the store.
    ///
    /// Each tier is sampled uniformly without replacement. Fails with
    /// `QuizError::InsufficientData` for the first tier (in Easy, Medium,
    /// Hard order) whose pool is smaller than its quota.
    pub fn build<R: Rng + ?Sized>(store: &QuestionStore, rng: &mut R) -> Result<Self> {
        let mut questions = Vec::with_capacity(crate::constants::ROUND_LENGTH);

        for tier in Tier::ALL {
            let pool = store.by_tier(tier);
            let required = tier.quota();
            if pool.len() < required {
                return Err(QuizError::InsufficientData {
                    tier,
                    required,
                    available: pool.len(),
                });
            }
            debug!(%tier, pool = pool.len(), required, "sampling tier");
            questions.extend(pool.choose_multiple(rng, required).map(|q| (*q).clone()));
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROUND_LENGTH;
    use crate::questions::fixtures;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_build_exact_quota() {
        let store = fixtures::store(3, 3, 2);
        let round = Round::build(&store, &mut seeded_rng()).unwrap();
        assert_eq!(round.len(), ROUND_LENGTH);
    }

    #[test]
    fn test_tiers_are_grouped_in_order() {
        let store = fixtures::store(10, 10, 10);
        let round = Round::build(&store, &mut seeded_rng()).unwrap();
        let tiers: Vec<Tier> = round.questions().iter().map(|q| q.tier).collect();
        assert_eq!(
            tiers,
            vec![
                Tier::Easy,
                Tier::Easy,
                Tier::Easy,
                Tier::Medium,
                Tier::Medium,
                Tier::Medium,
                Tier::Hard,
                Tier::Hard
            ]
        );
    }

    #[test]
    fn test_no_duplicate_questions() {
        let store = fixtures::store(5, 5, 5);
        let mut rng = seeded_rng();
        for _ in 0..50 {
            let round = Round::build(&store, &mut rng).unwrap();
            let prompts: HashSet<&str> =
                round.questions().iter().map(|q| q.prompt.as_str()).collect();
            assert_eq!(prompts.len(), ROUND_LENGTH);
        }
    }

    #[test]
    fn test_insufficient_tier_reported() {
        let store = fixtures::store(3, 2, 5);
        let err = Round::build(&store, &mut seeded_rng()).unwrap_err();
        match err {
            QuizError::InsufficientData {
                tier,
                required,
                available,
            } => {
                assert_eq!(tier, Tier::Medium);
                assert_eq!(required, 3);
                assert_eq!(available, 2);
            }
            other => panic!("expected insufficient data, got {other:?}"),
        }
    }

    #[test]
    fn test_first_short_tier_wins() {
        let store = fixtures::store(1, 0, 0);
        let err = Round::build(&store, &mut seeded_rng()).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientData {
                tier: Tier::Easy,
                ..
            }
        ));
    }

    #[test]
    fn test_sampling_varies_between_builds() {
        let store = fixtures::store(12, 12, 12);
        let mut rng = seeded_rng();
        let first = Round::build(&store, &mut rng).unwrap();
        let differs = (0..20).any(|_| Round::build(&store, &mut rng).unwrap() != first);
        assert!(differs);
    }

    #[test]
    fn test_same_seed_same_round() {
        let store = fixtures::store(8, 8, 8);
        let a = Round::build(&store, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = Round::build(&store, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }
}
