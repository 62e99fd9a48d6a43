//! Field limits and the validators shared by questions and choices.
//!
//! Lengths are counted in characters, not bytes.

use crate::error::{Result, ValidationError};

/// Shortest allowed question title.
pub const TITLE_MIN_LENGTH: usize = 1;
/// Longest allowed question title.
pub const TITLE_MAX_LENGTH: usize = 200;

/// Shortest allowed choice text.
pub const TEXT_MIN_LENGTH: usize = 1;
/// Longest allowed choice text.
pub const TEXT_MAX_LENGTH: usize = 100;

/// Lowest points a question can be worth.
pub const POINTS_MIN: u32 = 1;
/// Highest points a question can be worth.
pub const POINTS_MAX: u32 = 100;

/// Points used when none are configured.
pub const DEFAULT_POINTS: u32 = 1;
/// Selection limit used when none is configured.
pub const DEFAULT_MAX_SELECTIONS: usize = 1;

/// Validates a question title.
pub fn validate_title(title: &str) -> Result<()> {
    let len = title.chars().count();

    if len < TITLE_MIN_LENGTH {
        return Err(ValidationError::EmptyTitle);
    }

    if len > TITLE_MAX_LENGTH {
        return Err(ValidationError::TitleTooLong);
    }

    Ok(())
}

/// Validates the text of a choice.
pub fn validate_text(text: &str) -> Result<()> {
    let len = text.chars().count();

    if len < TEXT_MIN_LENGTH {
        return Err(ValidationError::EmptyText);
    }

    if len > TEXT_MAX_LENGTH {
        return Err(ValidationError::TextTooLong);
    }

    Ok(())
}

pub fn validate_points(points: u32) -> Result<()> {
    if (POINTS_MIN..=POINTS_MAX).contains(&points) {
        Ok(())
    } else {
        Err(ValidationError::PointsOutOfRange(points))
    }
}
