pub mod question;
pub mod state;

pub use question::{generate_id, Difficulty, Question};
pub use state::{AppState, ExamRecord, QuestionBank, Settings, WrongAnswer};
