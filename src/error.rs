//! Error types for loading the question bank and building rounds.

use crate::questions::Tier;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    /// A required column is absent from the question table.
    #[error("Missing required column: {column}")]
    Schema { column: String },

    /// A tier has fewer questions than its quota for one round.
    #[error("Not enough {tier} questions: need {required}, found {available}")]
    InsufficientData {
        tier: Tier,
        required: usize,
        available: usize,
    },

    #[error("Could not read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed question bank: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
