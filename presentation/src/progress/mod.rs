//! Progress indication for in-flight answers

mod spinner;

pub use spinner::AnswerSpinner;
