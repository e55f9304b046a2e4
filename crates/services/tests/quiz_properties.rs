use proptest::prelude::*;
use signlearn_core::model::{
    AnswerOption, LessonId, OptionId, Question, QuestionDraft, QuestionId, QuestionKind,
};
use signlearn_core::time::fixed_now;
use services::{AdvanceOutcome, QuizAction, QuizSession};

const OPTIONS: [&str; 4] = ["A", "B", "C", "D"];

fn question(id: u64, correct: usize) -> Question {
    QuestionDraft {
        id: QuestionId::new(id),
        kind: QuestionKind::MultipleChoice,
        prompt: format!("Question {id}"),
        media: None,
        options: OPTIONS
            .iter()
            .map(|label| AnswerOption::new(OptionId::new(*label).unwrap(), *label, None).unwrap())
            .collect(),
        correct: OptionId::new(OPTIONS[correct]).unwrap(),
        explanation: None,
    }
    .validate()
    .unwrap()
}

fn quiz() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (1usize..8).prop_flat_map(|len| {
        (
            prop::collection::vec(0usize..OPTIONS.len(), len),
            prop::collection::vec(0usize..OPTIONS.len(), len),
        )
    })
}

proptest! {
    #[test]
    fn score_matches_correct_picks((answers, picks) in quiz()) {
        let questions = answers
            .iter()
            .enumerate()
            .map(|(i, correct)| question(i as u64 + 1, *correct))
            .collect();
        let mut session = QuizSession::new(LessonId::new(1), questions, fixed_now()).unwrap();

        let mut completed = Vec::new();
        for (i, pick) in picks.iter().enumerate() {
            prop_assert_eq!(session.current_index(), i);
            prop_assert_eq!(session.progress().position, i + 1);
            prop_assert_eq!(session.action(), QuizAction::CheckAnswer);
            prop_assert!(!session.can_submit());

            session.select(OptionId::new(OPTIONS[*pick]).unwrap()).unwrap();
            session.confirm().unwrap();
            prop_assert!(session.is_revealed());
            // Selection is frozen once revealed.
            prop_assert!(!session.select(OptionId::new("A").unwrap()).unwrap());

            if let AdvanceOutcome::Completed(result) = session.advance(fixed_now()).unwrap() {
                completed.push(result);
            }
        }

        let expected = answers.iter().zip(&picks).filter(|(a, p)| a == p).count();
        prop_assert_eq!(completed.len(), 1);
        prop_assert_eq!(completed[0].score, expected);
        prop_assert_eq!(completed[0].total, answers.len());
        prop_assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn confirm_twice_never_double_counts(correct in 0usize..OPTIONS.len()) {
        let mut session =
            QuizSession::new(LessonId::new(1), vec![question(1, correct)], fixed_now()).unwrap();
        session.select(OptionId::new(OPTIONS[correct]).unwrap()).unwrap();
        session.confirm().unwrap();
        prop_assert!(session.confirm().is_err());
        prop_assert_eq!(session.score(), 1);
        prop_assert_eq!(session.action(), QuizAction::Finish);
    }
}
