//! Loads the question table and checks its schema.
//!
//! The table is a CSV sheet with one question per row. Header names and
//! cells are whitespace-trimmed. Only the presence of the required columns is
//! validated; rows whose tier label or correct key cannot be understood are
//! skipped and logged.

use super::types::{OptionKey, Question, Tier};
use crate::config::QuestionSource;
use crate::error::{QuizError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Question sheet compiled into the binary, used when no file is supplied.
const BUNDLED_BANK: &str = include_str!("../../data/questions.csv");

/// Required columns with the header aliases accepted for each.
pub const REQUIRED_COLUMNS: [(&str, &[&str]); 8] = [
    ("Level", &["Nível", "Nivel"]),
    ("Prompt", &["Pergunta"]),
    ("A", &[]),
    ("B", &[]),
    ("C", &[]),
    ("D", &[]),
    ("CorrectKey", &["Correta"]),
    ("Explanation", &["Explicacao", "Explicação"]),
];

/// Raw row as it appears in the sheet.
#[derive(Debug, Deserialize)]
struct QuestionRow {
    #[serde(rename = "Level", alias = "Nível", alias = "Nivel")]
    level: String,
    #[serde(rename = "Prompt", alias = "Pergunta")]
    prompt: String,
    #[serde(rename = "A")]
    a: String,
    #[serde(rename = "B")]
    b: String,
    #[serde(rename = "C")]
    c: String,
    #[serde(rename = "D")]
    d: String,
    #[serde(rename = "CorrectKey", alias = "Correta")]
    correct_key: String,
    #[serde(rename = "Explanation", alias = "Explicacao", alias = "Explicação")]
    explanation: String,
}

impl QuestionRow {
    fn into_question(self) -> std::result::Result<Question, String> {
        let tier = Tier::from_label(&self.level)
            .ok_or_else(|| format!("unknown tier label {:?}", self.level))?;
        let correct = OptionKey::from_label(&self.correct_key)
            .ok_or_else(|| format!("correct key {:?} is not one of A-D", self.correct_key))?;

        Ok(Question {
            tier,
            prompt: self.prompt,
            options: [self.a, self.b, self.c, self.d],
            correct,
            explanation: self.explanation,
        })
    }
}

/// The loaded question bank, in sheet order.
#[derive(Debug, Clone, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Read a question table from any CSV source.
    ///
    /// Fails with `QuizError::Schema` naming the first required column that
    /// is absent, before any row is read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        check_schema(csv_reader.headers()?)?;

        let mut questions = Vec::new();
        let mut skipped = 0usize;
        for (line, record) in csv_reader.deserialize::<QuestionRow>().enumerate() {
            match record?.into_question() {
                Ok(question) => questions.push(question),
                Err(reason) => {
                    // Header is line 1, first data row is line 2.
                    warn!(row = line + 2, %reason, "skipping question row");
                    skipped += 1;
                }
            }
        }

        debug!(loaded = questions.len(), skipped, "question table parsed");
        Ok(Self { questions })
    }

    /// Load a question table from a CSV file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let store = Self::from_reader(file)?;
        info!(path = %path.display(), questions = store.len(), "question bank loaded");
        Ok(store)
    }

    /// The operations-management bank shipped with the game.
    pub fn bundled() -> Result<Self> {
        let store = Self::from_reader(BUNDLED_BANK.as_bytes())?;
        info!(questions = store.len(), "bundled question bank loaded");
        Ok(store)
    }

    /// Load from wherever the configuration points.
    pub fn open(source: &QuestionSource) -> Result<Self> {
        match source {
            QuestionSource::File(path) => Self::load(path),
            QuestionSource::Bundled => Self::bundled(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All questions of one tier, in sheet order.
    pub fn by_tier(&self, tier: Tier) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.tier == tier).collect()
    }

    pub fn count(&self, tier: Tier) -> usize {
        self.questions.iter().filter(|q| q.tier == tier).count()
    }
}

fn check_schema(headers: &csv::StringRecord) -> Result<()> {
    for (column, aliases) in REQUIRED_COLUMNS {
        let present = headers
            .iter()
            .any(|h| h == column || aliases.contains(&h));
        if !present {
            return Err(QuizError::Schema {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::fixtures;

    #[test]
    fn test_load_counts_per_tier() {
        let store = fixtures::store(4, 3, 2);
        assert_eq!(store.len(), 9);
        assert_eq!(store.count(Tier::Easy), 4);
        assert_eq!(store.count(Tier::Medium), 3);
        assert_eq!(store.count(Tier::Hard), 2);
        assert_eq!(store.by_tier(Tier::Hard).len(), 2);
    }

    #[test]
    fn test_row_fields_are_mapped() {
        let csv = "Level,Prompt,A,B,C,D,CorrectKey,Explanation\n\
                   Medium,What is WIP?,Work in progress,Wait in place,Work index,Weekly input,A,Inventory between steps\n";
        let store = QuestionStore::from_reader(csv.as_bytes()).unwrap();
        let question = &store.questions()[0];
        assert_eq!(question.tier, Tier::Medium);
        assert_eq!(question.prompt, "What is WIP?");
        assert_eq!(question.option(OptionKey::A), "Work in progress");
        assert_eq!(question.option(OptionKey::D), "Weekly input");
        assert_eq!(question.correct, OptionKey::A);
        assert_eq!(question.explanation, "Inventory between steps");
    }

    #[test]
    fn test_headers_are_trimmed() {
        let csv = " Level , Prompt ,A, B ,C,D,  CorrectKey,Explanation \n\
                   Easy,Q, a , b ,c,d, B ,why\n";
        let store = QuestionStore::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.questions()[0].correct, OptionKey::B);
        assert_eq!(store.questions()[0].option(OptionKey::A), "a");
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let csv = "Level,Prompt,A,B,C,D,Explanation\nEasy,Q,a,b,c,d,why\n";
        let err = QuestionStore::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            QuizError::Schema { column } => assert_eq!(column, "CorrectKey"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_reported_even_without_rows() {
        let csv = "Prompt,A,B,C,D,CorrectKey,Explanation\n";
        let err = QuestionStore::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, QuizError::Schema { ref column } if column == "Level"));
    }

    #[test]
    fn test_portuguese_headers_accepted() {
        let csv = "Nível,Pergunta,A,B,C,D,Correta,Explicacao\n\
                   Fácil,Q1,a,b,c,d,C,porque\n\
                   Difícil,Q2,a,b,c,d,D,porque\n";
        let store = QuestionStore::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.count(Tier::Easy), 1);
        assert_eq!(store.count(Tier::Hard), 1);
        assert_eq!(store.questions()[0].correct, OptionKey::C);
    }

    #[test]
    fn test_unknown_tier_and_key_rows_are_skipped() {
        let csv = "Level,Prompt,A,B,C,D,CorrectKey,Explanation\n\
                   Easy,kept,a,b,c,d,A,x\n\
                   Expert,dropped tier,a,b,c,d,A,x\n\
                   Hard,dropped key,a,b,c,d,E,x\n";
        let store = QuestionStore::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.questions()[0].prompt, "kept");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "Id,Level,Prompt,A,B,C,D,CorrectKey,Explanation,Source\n\
                   7,Easy,Q,a,b,c,d,A,x,book\n";
        let store = QuestionStore::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = QuestionStore::load(Path::new("/nonexistent/ops-millionaire/questions.csv"))
            .unwrap_err();
        assert!(matches!(err, QuizError::Io(_)));
    }

    #[test]
    fn test_bundled_bank_fills_a_round() {
        let store = QuestionStore::bundled().unwrap();
        for tier in Tier::ALL {
            assert!(
                store.count(tier) >= tier.quota(),
                "bundled bank short on {tier} questions"
            );
        }
        for question in store.questions() {
            assert!(!question.prompt.is_empty());
            assert!(!question.explanation.is_empty());
        }
    }
}
