//! Question bank: the immutable questions a round is drawn from.

mod store;
mod types;

pub use store::{QuestionStore, REQUIRED_COLUMNS};
pub use types::{OptionKey, Question, Tier};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::QuestionStore;

    pub const HEADER: &str = "Level,Prompt,A,B,C,D,CorrectKey,Explanation\n";

    /// CSV body with `easy`, `medium` and `hard` rows, correct key cycling A..D.
    pub fn bank_csv(easy: usize, medium: usize, hard: usize) -> String {
        let mut csv = String::from(HEADER);
        let keys = ["A", "B", "C", "D"];
        let mut n = 0;
        for (label, count) in [("Easy", easy), ("Medium", medium), ("Hard", hard)] {
            for i in 0..count {
                csv.push_str(&format!(
                    "{label},{label} question {i},opt a,opt b,opt c,opt d,{},Because {n}\n",
                    keys[n % 4]
                ));
                n += 1;
            }
        }
        csv
    }

    pub fn store(easy: usize, medium: usize, hard: usize) -> QuestionStore {
        QuestionStore::from_reader(bank_csv(easy, medium, hard).as_bytes())
            .expect("fixture bank should load")
    }
}
