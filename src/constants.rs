// Round composition
pub const ROUND_LENGTH: usize = 8;
pub const EASY_QUOTA: usize = 3;
pub const MEDIUM_QUOTA: usize = 3;
pub const HARD_QUOTA: usize = 2;

// Prize ladder, lowest to highest, aligned 1:1 with round index
pub const PRIZE_LADDER: [&str; ROUND_LENGTH] = [
    "1.000€", "2.000€", "5.000€", "10.000€", "30.000€", "50.000€", "100.000€", "250.000€",
];
pub const NO_PRIZE_LABEL: &str = "no prize";

// Audience vote simulation
pub const AUDIENCE_MIN_VOTES: u32 = 10;
pub const AUDIENCE_MAX_VOTES: u32 = 30;
pub const AUDIENCE_CORRECT_BONUS: u32 = 30;

// Question bank
pub const DEFAULT_QUESTIONS_FILE: &str = "questions.csv";

// Terminal loop
pub const INPUT_POLL_MS: u64 = 50;

// Logging
pub const APP_DIR_NAME: &str = "ops-millionaire";
pub const LOG_FILE_NAME: &str = "ops-millionaire.log";
