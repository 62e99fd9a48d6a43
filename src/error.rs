//! Validation error type.

use thiserror::Error;

use crate::models::ChoiceId;
use crate::validation::{POINTS_MAX, POINTS_MIN, TEXT_MAX_LENGTH, TITLE_MAX_LENGTH};

/// Raised when a question or choice operation would break an invariant.
///
/// Every operation checks its input before touching any state, so a returned
/// error always means nothing was changed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title cannot be longer than {} characters", TITLE_MAX_LENGTH)]
    TitleTooLong,

    #[error("Points must be between {} and {}", POINTS_MIN, POINTS_MAX)]
    PointsOutOfRange(u32),

    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text cannot be longer than {} characters", TEXT_MAX_LENGTH)]
    TextTooLong,

    #[error("Invalid choice id: {0}")]
    InvalidChoiceId(ChoiceId),

    #[error("Cannot select more than {max} choices")]
    TooManySelections { max: usize, submitted: usize },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
