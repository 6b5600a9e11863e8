use chrono::{DateTime, Utc};

use crate::model::exam::SessionQuestion;

/// Aggregate result of a completed exam session.
///
/// Built once by [`ExamResult::from_questions`] when the session reaches its
/// terminal state; the counts always sum to the question total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamResult {
    questions: Vec<SessionQuestion>,
    correct: usize,
    incorrect: usize,
    unanswered: usize,
    total_elapsed_seconds: u64,
    percent_correct: u8,
    completed_at: DateTime<Utc>,
}

impl ExamResult {
    /// Scores a finalized question sequence. Pure; no error conditions —
    /// an empty sequence scores 0 %.
    #[must_use]
    pub fn from_questions(questions: Vec<SessionQuestion>, completed_at: DateTime<Utc>) -> Self {
        let mut correct = 0_usize;
        let mut incorrect = 0_usize;
        let mut unanswered = 0_usize;
        let mut total_elapsed_seconds = 0_u64;

        for question in &questions {
            match question.selected_choice() {
                Some(_) if question.is_correct() => correct += 1,
                Some(_) => incorrect += 1,
                None => unanswered += 1,
            }
            total_elapsed_seconds += u64::from(question.elapsed_seconds().unwrap_or(0));
        }

        let total = questions.len();
        let percent_correct = if total == 0 {
            0
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let percent = (correct as f64 / total as f64 * 100.0).round() as u8;
            percent
        };

        Self {
            questions,
            correct,
            incorrect,
            unanswered,
            total_elapsed_seconds,
            percent_correct,
            completed_at,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.unanswered
    }

    #[must_use]
    pub fn total_elapsed_seconds(&self) -> u64 {
        self.total_elapsed_seconds
    }

    #[must_use]
    pub fn percent_correct(&self) -> u8 {
        self.percent_correct
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, ImageRef, PracticeQuestion, QuestionId, ThemeId};
    use crate::time::fixed_now;

    fn question(id: u32) -> PracticeQuestion {
        PracticeQuestion::new(
            QuestionId::new(id),
            ThemeId::new("tecido-muscular").unwrap(),
            ImageRef::new(format!("/images/tecido-muscular/lamina-{id:02}.jpg")).unwrap(),
            "Identify the muscle tissue.",
            vec![
                Choice::new("Skeletal muscle", "Striated, peripheral nuclei."),
                Choice::new("Cardiac muscle", "Striated, intercalated discs."),
                Choice::new("Smooth muscle", "No striations."),
            ],
            1,
        )
        .unwrap()
    }

    fn answered(id: u32, choice: usize, elapsed: u32) -> SessionQuestion {
        let mut sq = SessionQuestion::new(question(id));
        assert!(sq.finalize_answer(choice, elapsed));
        sq
    }

    fn timed_out(id: u32, elapsed: u32) -> SessionQuestion {
        let mut sq = SessionQuestion::new(question(id));
        assert!(sq.finalize_timeout(elapsed));
        sq
    }

    #[test]
    fn counts_sum_to_total() {
        let result = ExamResult::from_questions(
            vec![
                answered(1, 1, 10),
                answered(2, 0, 20),
                timed_out(3, 30),
                answered(4, 1, 5),
            ],
            fixed_now(),
        );

        assert_eq!(result.correct(), 2);
        assert_eq!(result.incorrect(), 1);
        assert_eq!(result.unanswered(), 1);
        assert_eq!(
            result.correct() + result.incorrect() + result.unanswered(),
            result.total()
        );
        assert_eq!(result.total_elapsed_seconds(), 65);
    }

    #[test]
    fn percent_rounds_like_the_display() {
        // 3 of 4 -> 75 %
        let result = ExamResult::from_questions(
            vec![
                answered(1, 1, 1),
                answered(2, 1, 1),
                answered(3, 1, 1),
                answered(4, 0, 1),
            ],
            fixed_now(),
        );
        assert_eq!(result.percent_correct(), 75);

        // 1 of 3 -> 33 %
        let result = ExamResult::from_questions(
            vec![answered(1, 1, 1), answered(2, 0, 1), timed_out(3, 30)],
            fixed_now(),
        );
        assert_eq!(result.percent_correct(), 33);

        // 2 of 3 -> 67 %
        let result = ExamResult::from_questions(
            vec![answered(1, 1, 1), answered(2, 1, 1), answered(3, 0, 1)],
            fixed_now(),
        );
        assert_eq!(result.percent_correct(), 67);
    }

    #[test]
    fn empty_input_scores_zero() {
        let result = ExamResult::from_questions(Vec::new(), fixed_now());
        assert_eq!(result.total(), 0);
        assert_eq!(result.percent_correct(), 0);
    }
}
