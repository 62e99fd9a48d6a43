use serde::Serialize;
use tracing::{debug, trace};

use crate::config::QuestionConfig;
use crate::error::{Result, ValidationError};
use crate::ids::{IdGenerator, QuestionId};
use crate::models::{Choice, ChoiceId};
use crate::validation::{validate_points, validate_text, validate_title};

/// A quiz question and the choices it owns.
///
/// Title and points are checked once at construction and never change
/// afterwards. Choice ids grow with every [`add_choice`](Self::add_choice)
/// and are never reused, so `choices` stays sorted by id.
///
/// A `Question` only comes from a constructor, which draws a fresh id. It is
/// not `Clone`, since a copy would carry the same id:
///
/// ```compile_fail
/// use quiz_question::{Question, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new();
/// let question = Question::new(&ids, "Q").unwrap();
/// let copy: Question = question.clone();
/// ```
#[derive(Debug, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    #[serde(skip)]
    last_choice_id: u64,
}

impl Question {
    /// Create a question worth 1 point that accepts a single selection.
    pub fn new(ids: &impl IdGenerator, title: impl Into<String>) -> Result<Self> {
        Self::with_config(ids, title, QuestionConfig::default())
    }

    /// Create a question with explicit points and selection limit.
    ///
    /// No id is drawn from `ids` when validation fails.
    pub fn with_config(
        ids: &impl IdGenerator,
        title: impl Into<String>,
        config: QuestionConfig,
    ) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;
        validate_points(config.points)?;

        let id = ids.next_id();
        debug!(question_id = %id, points = config.points, max_selections = config.max_selections, "question created");

        Ok(Self {
            id,
            title,
            points: config.points,
            max_selections: config.max_selections,
            choices: Vec::new(),
            last_choice_id: 0,
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// Choices in the order they were added.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.position(id).map(|index| &self.choices[index])
    }

    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|choice| choice.is_correct())
            .map(Choice::id)
            .collect()
    }

    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Append a new choice and return it.
    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> Result<&Choice> {
        let text = text.into();
        validate_text(&text)?;

        self.last_choice_id += 1;
        let id = ChoiceId::new(self.last_choice_id);
        debug!(question_id = %self.id, choice_id = %id, is_correct, "choice added");

        self.choices.push(Choice::new(id, text, is_correct));
        Ok(&self.choices[self.choices.len() - 1])
    }

    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<()> {
        let index = self
            .position(id)
            .ok_or(ValidationError::InvalidChoiceId(id))?;

        self.choices.remove(index);
        debug!(question_id = %self.id, choice_id = %id, "choice removed");
        Ok(())
    }

    /// Drop every choice. Ids keep counting from where they were.
    pub fn remove_all_choices(&mut self) {
        debug!(question_id = %self.id, removed = self.choices.len(), "all choices removed");
        self.choices.clear();
    }

    /// Grade a selection.
    ///
    /// Returns the submitted ids that name a correct choice, in submission
    /// order. Ids that match no choice are ignored. Only the number of ids is
    /// checked, against `max_selections`.
    pub fn select_choices(&self, ids: &[ChoiceId]) -> Result<Vec<ChoiceId>> {
        if ids.len() > self.max_selections {
            return Err(ValidationError::TooManySelections {
                max: self.max_selections,
                submitted: ids.len(),
            });
        }

        let correct: Vec<ChoiceId> = ids
            .iter()
            .copied()
            .filter(|&id| self.choice(id).is_some_and(Choice::is_correct))
            .collect();

        trace!(question_id = %self.id, submitted = ids.len(), correct = correct.len(), "selection graded");
        Ok(correct)
    }

    /// Mark the named choices as correct.
    ///
    /// Choices not named keep their current flag. Every id must exist;
    /// otherwise nothing is changed.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) -> Result<()> {
        let positions = ids
            .iter()
            .map(|&id| self.position(id).ok_or(ValidationError::InvalidChoiceId(id)))
            .collect::<Result<Vec<_>>>()?;

        for index in positions {
            self.choices[index].mark_correct();
        }

        debug!(question_id = %self.id, marked = ids.len(), "correct choices set");
        Ok(())
    }

    fn position(&self, id: ChoiceId) -> Option<usize> {
        self.choices.binary_search_by_key(&id, Choice::id).ok()
    }
}
