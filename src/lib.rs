//! # quiz-question
//!
//! A single quiz question with its answer choices, the rules that keep it
//! valid, and grading of a submitted selection.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_question::{ChoiceId, Question, QuestionConfig, SequentialIdGenerator, ValidationError};
//!
//! fn main() -> Result<(), ValidationError> {
//!     let ids = SequentialIdGenerator::new();
//!     let mut question = Question::with_config(&ids, "Which of these are primes?", QuestionConfig::default().max_selections(2))?;
//!
//!     let two = question.add_choice("2", true)?.id();
//!     let four = question.add_choice("4", false)?.id();
//!
//!     assert_eq!(question.select_choices(&[four, two])?, vec![two]);
//!     assert!(question.select_choices(&[two, four, ChoiceId::new(7)]).is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! The crate logs through `tracing` and leaves installing a subscriber to the
//! application.

mod config;
mod error;
mod ids;
mod models;
pub mod validation;

pub use config::QuestionConfig;
pub use error::{Result, ValidationError};
pub use ids::{IdGenerator, QuestionId, SequentialIdGenerator};
pub use models::{Choice, ChoiceId, Question};
