mod catalog;
mod contact;
mod ids;
mod media;
mod quiz;
mod section;
mod session;
mod variant;

pub use ids::{CertificationId, ProjectId, QuestionId, SessionId, SkillId};

pub use catalog::{
    Analytics, CatalogDraft, CatalogError, Certification, Metric, Proficiency, Profile,
    ProfileDraft, Project, Skill, SkillCategory, SkillLayout, StaticCatalog, TimelineEntry,
};
pub use contact::{
    ContactChannel, ContactDraft, ContactField, ContactFormError, ContactMessage, ContactSubject,
};
pub use media::{AssetKey, ImageSource, Placeholder};
pub use quiz::{
    AnswerOutcome, AnsweredQuestion, CompletionTier, QuizError, QuizPhase, QuizQuestion,
    QuizQuestionDraft, QuizState,
};
pub use section::{Section, SectionParseError};
pub use session::{GENERIC_GREETING, SessionState};
pub use variant::{ChartBackend, NavStyle, Rating, Theme, Variant, VariantParseError};
