pub mod history;
pub mod tokenizer;

pub use history::{HistoryRing, HISTORY_MAX};
pub use tokenizer::tokenize;
