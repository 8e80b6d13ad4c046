//! Question bank data structures.

use crate::constants::{EASY_QUOTA, HARD_QUOTA, MEDIUM_QUOTA};
use std::fmt;

/// Difficulty tier governing a question's pool and round quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// Tiers in round order.
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Number of questions of this tier in every round.
    pub fn quota(&self) -> usize {
        match self {
            Self::Easy => EASY_QUOTA,
            Self::Medium => MEDIUM_QUOTA,
            Self::Hard => HARD_QUOTA,
        }
    }

    /// Parse a tier label. Accepts the English labels in any case and the
    /// Portuguese labels used by older question sheets.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Some(Self::Easy),
            "medium" | "médio" | "medio" => Some(Self::Medium),
            "hard" | "difícil" | "dificil" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four answer slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    pub fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn letter(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// Parse a cell such as `"B"` or `" c "`.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Next key, wrapping D back to A.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Previous key, wrapping A back to D.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub tier: Tier,
    pub prompt: String,
    /// Option texts indexed by `OptionKey::index`.
    pub options: [String; 4],
    pub correct: OptionKey,
    pub explanation: String,
}

impl Question {
    pub fn option(&self, key: OptionKey) -> &str {
        &self.options[key.index()]
    }

    pub fn is_correct(&self, key: OptionKey) -> bool {
        self.correct == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_labels() {
        assert_eq!(Tier::from_label("Easy"), Some(Tier::Easy));
        assert_eq!(Tier::from_label(" MEDIUM "), Some(Tier::Medium));
        assert_eq!(Tier::from_label("hard"), Some(Tier::Hard));
        assert_eq!(Tier::from_label("Fácil"), Some(Tier::Easy));
        assert_eq!(Tier::from_label("Médio"), Some(Tier::Medium));
        assert_eq!(Tier::from_label("Difícil"), Some(Tier::Hard));
        assert_eq!(Tier::from_label("Expert"), None);
        assert_eq!(Tier::from_label(""), None);
    }

    #[test]
    fn test_tier_quotas_fill_round() {
        let total: usize = Tier::ALL.iter().map(|t| t.quota()).sum();
        assert_eq!(total, crate::constants::ROUND_LENGTH);
        assert_eq!(Tier::Easy.quota(), 3);
        assert_eq!(Tier::Medium.quota(), 3);
        assert_eq!(Tier::Hard.quota(), 2);
    }

    #[test]
    fn test_option_key_parsing() {
        assert_eq!(OptionKey::from_label("A"), Some(OptionKey::A));
        assert_eq!(OptionKey::from_label(" d "), Some(OptionKey::D));
        assert_eq!(OptionKey::from_label("E"), None);
        assert_eq!(OptionKey::from_label("AB"), None);
        assert_eq!(OptionKey::from_label(""), None);
    }

    #[test]
    fn test_option_key_cycling() {
        assert_eq!(OptionKey::A.next(), OptionKey::B);
        assert_eq!(OptionKey::D.next(), OptionKey::A);
        assert_eq!(OptionKey::A.prev(), OptionKey::D);
        assert_eq!(OptionKey::C.prev(), OptionKey::B);
        for key in OptionKey::ALL {
            assert_eq!(OptionKey::from_index(key.index()), Some(key));
        }
    }

    #[test]
    fn test_question_option_lookup() {
        let question = Question {
            tier: Tier::Easy,
            prompt: "p".to_string(),
            options: [
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct: OptionKey::C,
            explanation: String::new(),
        };
        assert_eq!(question.option(OptionKey::B), "b");
        assert!(question.is_correct(OptionKey::C));
        assert!(!question.is_correct(OptionKey::A));
    }
}
