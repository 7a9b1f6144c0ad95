use services::portfolio::QuestionView;

/// How one radio option is decorated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    None,
    Chosen,
    AnsweredCorrect,
    AnsweredWrong,
}

impl OptionMark {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionMark::None => "quiz-option",
            OptionMark::Chosen => "quiz-option quiz-option--chosen",
            OptionMark::AnsweredCorrect => "quiz-option quiz-option--correct",
            OptionMark::AnsweredWrong => "quiz-option quiz-option--wrong",
        }
    }
}

#[must_use]
pub fn option_mark(question: &QuestionView, index: usize) -> OptionMark {
    match question.answered {
        Some(answer) if answer.option == index => {
            if answer.correct {
                OptionMark::AnsweredCorrect
            } else {
                OptionMark::AnsweredWrong
            }
        }
        Some(_) => OptionMark::None,
        None if question.pending == Some(index) => OptionMark::Chosen,
        None => OptionMark::None,
    }
}

#[must_use]
pub fn progress_label(answered: usize, total: u32) -> String {
    format!("Answered {answered} of {total}")
}
