mod choice;
mod question;

pub use choice::{Choice, ChoiceId};
pub use question::Question;
