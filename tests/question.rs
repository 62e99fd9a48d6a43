use quiz_question::{ChoiceId, Question, QuestionConfig, SequentialIdGenerator, ValidationError};

fn ids(raw: &[u64]) -> Vec<ChoiceId> {
    raw.iter().copied().map(ChoiceId::new).collect()
}

#[test]
fn single_answer_question_end_to_end() {
    let generator = SequentialIdGenerator::new();
    let config = QuestionConfig::default().points(1).max_selections(1);
    let mut q = Question::with_config(&generator, "Q", config).unwrap();

    q.add_choice("A", true).unwrap();
    q.add_choice("B", false).unwrap();

    assert_eq!(q.select_choices(&ids(&[1])).unwrap(), ids(&[1]));
    assert_eq!(q.select_choices(&ids(&[2])).unwrap(), ids(&[]));

    let err = q.select_choices(&ids(&[1, 2])).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::TooManySelections { max: 1, submitted: 2 }
    ));
}

#[test]
fn limit_applies_even_when_every_id_is_correct() {
    let generator = SequentialIdGenerator::new();
    let config = QuestionConfig::default().max_selections(2);
    let mut q = Question::with_config(&generator, "Pick primes", config).unwrap();
    for text in ["2", "3", "5"] {
        q.add_choice(text, true).unwrap();
    }

    assert_eq!(q.select_choices(&ids(&[3, 1])).unwrap(), ids(&[3, 1]));

    let err = q.select_choices(&ids(&[1, 2, 3])).unwrap_err();
    assert_eq!(err.to_string(), "Cannot select more than 2 choices");
}

#[test]
fn questions_from_one_generator_never_share_ids() {
    let generator = SequentialIdGenerator::new();
    let questions: Vec<Question> = (0..10)
        .map(|_| Question::new(&generator, "same title").unwrap())
        .collect();

    for (i, a) in questions.iter().enumerate() {
        for b in &questions[i + 1..] {
            assert_ne!(a.id(), b.id());
        }
    }
}

#[test]
fn choice_lifecycle() {
    let generator = SequentialIdGenerator::new();
    let mut q = Question::new(&generator, "Question test").unwrap();

    for text in ["A", "B", "C", "D", "E"] {
        q.add_choice(text, false).unwrap();
    }
    q.remove_choice_by_id(ChoiceId::new(2)).unwrap();
    assert_eq!(q.choice_count(), 4);
    assert_eq!(q.add_choice("F", false).unwrap().id(), ChoiceId::new(6));

    let err = q.remove_choice_by_id(ChoiceId::new(2)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid choice id: 2");

    q.set_correct_choices(&ids(&[4, 6])).unwrap();
    assert_eq!(q.correct_choice_ids(), ids(&[4, 6]));
    assert_eq!(q.select_choices(&ids(&[6])).unwrap(), ids(&[6]));

    q.remove_all_choices();
    assert!(q.choices().is_empty());
    assert_eq!(q.select_choices(&ids(&[6])).unwrap(), ids(&[]));
    assert_eq!(q.add_choice("G", false).unwrap().id(), ChoiceId::new(7));
}

#[test]
fn failed_operations_leave_question_untouched() {
    let generator = SequentialIdGenerator::new();
    let mut q = Question::new(&generator, "Q?").unwrap();
    q.add_choice("A", false).unwrap();
    q.add_choice("B", true).unwrap();
    let before = q.choices().to_vec();

    assert!(q.add_choice("", true).is_err());
    assert!(q.add_choice("x".repeat(101), true).is_err());
    assert!(q.remove_choice_by_id(ChoiceId::new(3)).is_err());
    assert!(q.set_correct_choices(&ids(&[1, 3])).is_err());

    assert_eq!(q.choices(), before.as_slice());
}
