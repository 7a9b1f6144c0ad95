use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("correct answer {0:?} is not one of the options")]
    CorrectNotInOptions(String),

    #[error("quiz already completed")]
    Completed,

    #[error("unknown question: {0:?}")]
    UnknownQuestion(QuestionId),

    #[error("option {option} is out of range for question {question:?}")]
    UnknownOption { question: QuestionId, option: usize },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in catalog data.
///
/// `correct` names the right option by value; validation resolves it to an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: String,
}

impl QuizQuestionDraft {
    /// # Errors
    ///
    /// Returns `QuizError` if the prompt is blank, there are fewer than two
    /// options, an option repeats, or `correct` is not among the options.
    pub fn validate(self) -> Result<QuizQuestion, QuizError> {
        if self.prompt.trim().is_empty() {
            return Err(QuizError::EmptyPrompt);
        }
        if self.options.len() < 2 {
            return Err(QuizError::TooFewOptions {
                len: self.options.len(),
            });
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(QuizError::DuplicateOption(option.clone()));
            }
        }

        let correct = self
            .options
            .iter()
            .position(|option| *option == self.correct)
            .ok_or(QuizError::CorrectNotInOptions(self.correct))?;

        Ok(QuizQuestion {
            prompt: self.prompt,
            options: self.options,
            correct,
        })
    }
}

/// A catalog question with exactly one correct option drawn from its own list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl QuizQuestion {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

//
// ─── QUIZ STATE ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    InProgress,
    Completed,
}

/// What happened when an answer was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct: String },
    /// The question was already answered; the score is unchanged.
    AlreadyAnswered,
}

/// The visitor's recorded answer to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub option: usize,
    pub correct: bool,
}

/// Result band shown once the quiz is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTier {
    Perfect,
    Great,
    KeepExploring,
}

impl CompletionTier {
    /// `score == total` is perfect, one miss is great, anything lower asks for more exploring.
    #[must_use]
    pub fn classify(score: u32, total: u32) -> Self {
        if score >= total {
            CompletionTier::Perfect
        } else if score >= total.saturating_sub(1) {
            CompletionTier::Great
        } else {
            CompletionTier::KeepExploring
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            CompletionTier::Perfect => "🏆 Perfect Score! You're a biotech expert!",
            CompletionTier::Great => "👏 Great job! Strong biotech knowledge!",
            CompletionTier::KeepExploring => "📚 Keep exploring biotechnology!",
        }
    }

    #[must_use]
    pub fn celebrates(self) -> bool {
        matches!(self, CompletionTier::Perfect)
    }
}

/// Per-session quiz progress.
///
/// Each question counts at most once, so the score never exceeds the number
/// of distinct questions answered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    phase: QuizPhase,
    score: u32,
    answered: BTreeMap<QuestionId, AnsweredQuestion>,
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    #[must_use]
    pub fn answer_for(&self, question: QuestionId) -> Option<AnsweredQuestion> {
        self.answered.get(&question).copied()
    }

    /// Record an answer for `question_id`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` once the quiz is finished and
    /// `QuizError::UnknownOption` if `option` is not an index into the question's options.
    pub fn submit(
        &mut self,
        question_id: QuestionId,
        question: &QuizQuestion,
        option: usize,
    ) -> Result<AnswerOutcome, QuizError> {
        if self.is_completed() {
            return Err(QuizError::Completed);
        }
        if option >= question.options().len() {
            return Err(QuizError::UnknownOption {
                question: question_id,
                option,
            });
        }
        if self.answered.contains_key(&question_id) {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }

        let correct = question.is_correct(option);
        self.answered
            .insert(question_id, AnsweredQuestion { option, correct });

        if correct {
            self.score = self.score.saturating_add(1);
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect {
                correct: question.correct_option().to_string(),
            })
        }
    }

    /// Move to `Completed`, whether or not every question was answered.
    pub fn finish(&mut self) {
        self.phase = QuizPhase::Completed;
    }

    /// Clear the score and answers and start over.
    pub fn retake(&mut self) {
        *self = Self::default();
    }

    /// Completion band, available once the quiz is finished.
    #[must_use]
    pub fn tier(&self, total: u32) -> Option<CompletionTier> {
        self.is_completed()
            .then(|| CompletionTier::classify(self.score, total))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> QuizQuestion {
        QuizQuestionDraft {
            prompt: "What is the primary function of CRISPR-Cas9?".to_string(),
            options: vec![
                "Protein synthesis".to_string(),
                "Genome editing".to_string(),
                "Antibody production".to_string(),
            ],
            correct: correct.to_string(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn draft_resolves_correct_option_to_index() {
        let q = question("Genome editing");
        assert_eq!(q.correct_index(), 1);
        assert_eq!(q.correct_option(), "Genome editing");
    }

    #[test]
    fn draft_rejects_correct_answer_outside_options() {
        let err = QuizQuestionDraft {
            prompt: "Q".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            correct: "C".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, QuizError::CorrectNotInOptions("C".to_string()));
    }

    #[test]
    fn draft_rejects_duplicates_and_short_option_lists() {
        let dup = QuizQuestionDraft {
            prompt: "Q".to_string(),
            options: vec!["A".to_string(), "A".to_string()],
            correct: "A".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(dup, QuizError::DuplicateOption("A".to_string()));

        let short = QuizQuestionDraft {
            prompt: "Q".to_string(),
            options: vec!["A".to_string()],
            correct: "A".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(short, QuizError::TooFewOptions { len: 1 });
    }

    #[test]
    fn repeated_correct_submission_counts_once() {
        let q = question("Genome editing");
        let id = QuestionId::new(0);
        let mut quiz = QuizState::new();

        assert_eq!(quiz.submit(id, &q, 1).unwrap(), AnswerOutcome::Correct);
        assert_eq!(quiz.submit(id, &q, 1).unwrap(), AnswerOutcome::AlreadyAnswered);
        assert_eq!(quiz.submit(id, &q, 0).unwrap(), AnswerOutcome::AlreadyAnswered);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.answered_count(), 1);
    }

    #[test]
    fn incorrect_submission_reports_the_right_answer() {
        let q = question("Genome editing");
        let mut quiz = QuizState::new();
        let outcome = quiz.submit(QuestionId::new(0), &q, 2).unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome::Incorrect {
                correct: "Genome editing".to_string()
            }
        );
        assert_eq!(quiz.score(), 0);
        assert_eq!(
            quiz.answer_for(QuestionId::new(0)),
            Some(AnsweredQuestion {
                option: 2,
                correct: false
            })
        );
    }

    #[test]
    fn out_of_range_option_is_rejected_without_recording() {
        let q = question("Genome editing");
        let mut quiz = QuizState::new();
        let err = quiz.submit(QuestionId::new(0), &q, 3).unwrap_err();
        assert!(matches!(err, QuizError::UnknownOption { option: 3, .. }));
        assert_eq!(quiz.answered_count(), 0);
    }

    #[test]
    fn completed_quiz_rejects_submissions() {
        let q = question("Genome editing");
        let mut quiz = QuizState::new();
        quiz.finish();
        let err = quiz.submit(QuestionId::new(0), &q, 1).unwrap_err();
        assert_eq!(err, QuizError::Completed);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn retake_resets_score_answers_and_phase() {
        let q = question("Genome editing");
        let mut quiz = QuizState::new();
        quiz.submit(QuestionId::new(0), &q, 1).unwrap();
        quiz.finish();
        quiz.retake();

        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.phase(), QuizPhase::InProgress);
        assert_eq!(quiz.answer_for(QuestionId::new(0)), None);
    }

    #[test]
    fn tiers_follow_score_thresholds() {
        assert_eq!(CompletionTier::classify(3, 3), CompletionTier::Perfect);
        assert_eq!(CompletionTier::classify(2, 3), CompletionTier::Great);
        assert_eq!(CompletionTier::classify(1, 3), CompletionTier::KeepExploring);
        assert_eq!(CompletionTier::classify(0, 3), CompletionTier::KeepExploring);
        assert!(CompletionTier::Perfect.celebrates());
        assert!(!CompletionTier::Great.celebrates());
    }

    #[test]
    fn tier_is_only_available_after_finishing() {
        let mut quiz = QuizState::new();
        assert_eq!(quiz.tier(3), None);
        quiz.finish();
        assert_eq!(quiz.tier(3), Some(CompletionTier::KeepExploring));
    }
}
