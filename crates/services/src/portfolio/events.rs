use portfolio_core::model::{
    CertificationId, ContactChannel, ContactDraft, QuestionId, Rating, Section, SkillId,
};

/// Discrete UI input handled by `PortfolioService::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioEvent {
    Navigate(Section),
    SetVisitorName(String),
    SubmitAnswer { question: QuestionId, option: usize },
    FinishQuiz,
    RetakeQuiz,
    ExploreSkill(SkillId),
    VerifyCertification(CertificationId),
    /// Profile buttons on the Home page.
    OpenProfileLink(ContactChannel),
    /// Channel buttons on the Contact page.
    OpenChannel(ContactChannel),
    SubmitContact(ContactDraft),
    RandomFact,
    ChangeTheme,
    ViewAnalytics,
    OpenFeedback,
    RateFeedback(Rating),
    AnimationFinished,
}

impl PortfolioEvent {
    /// Short name for log lines; never carries visitor input.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PortfolioEvent::Navigate(_) => "navigate",
            PortfolioEvent::SetVisitorName(_) => "set_visitor_name",
            PortfolioEvent::SubmitAnswer { .. } => "submit_answer",
            PortfolioEvent::FinishQuiz => "finish_quiz",
            PortfolioEvent::RetakeQuiz => "retake_quiz",
            PortfolioEvent::ExploreSkill(_) => "explore_skill",
            PortfolioEvent::VerifyCertification(_) => "verify_certification",
            PortfolioEvent::OpenProfileLink(_) => "open_profile_link",
            PortfolioEvent::OpenChannel(_) => "open_channel",
            PortfolioEvent::SubmitContact(_) => "submit_contact",
            PortfolioEvent::RandomFact => "random_fact",
            PortfolioEvent::ChangeTheme => "change_theme",
            PortfolioEvent::ViewAnalytics => "view_analytics",
            PortfolioEvent::OpenFeedback => "open_feedback",
            PortfolioEvent::RateFeedback(_) => "rate_feedback",
            PortfolioEvent::AnimationFinished => "animation_finished",
        }
    }
}
