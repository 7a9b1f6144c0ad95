use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::ids::{CertificationId, ProjectId, QuestionId, SkillId};
use crate::model::quiz::{QuizError, QuizQuestion, QuizQuestionDraft};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("quiz question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuizError,
    },

    #[error("catalog has no quiz questions")]
    NoQuestions,

    #[error("invalid {field} link: {raw}")]
    InvalidLink { field: &'static str, raw: String },

    #[error("proficiency {0} is out of range 0-100")]
    ProficiencyOutOfRange(u8),
}

//
// ─── SKILLS ───────────────────────────────────────────────────────────────────
//

/// Skill grouping offered by the category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    #[default]
    MolecularBiology,
    LaboratoryTechniques,
    Bioinformatics,
    ProfessionalSkills,
    /// Headline competencies charted in the Skills Lab.
    CoreCompetency,
}

/// How a category's skills are laid out on the Skills page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLayout {
    Tags,
    Bars,
}

impl SkillCategory {
    /// Categories the visitor can pick on the Skills page.
    pub const EXPLORABLE: [SkillCategory; 4] = [
        SkillCategory::MolecularBiology,
        SkillCategory::LaboratoryTechniques,
        SkillCategory::Bioinformatics,
        SkillCategory::ProfessionalSkills,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::MolecularBiology => "🧬 Molecular Biology",
            SkillCategory::LaboratoryTechniques => "🔬 Laboratory Techniques",
            SkillCategory::Bioinformatics => "💻 Bioinformatics",
            SkillCategory::ProfessionalSkills => "🤝 Professional Skills",
            SkillCategory::CoreCompetency => "📊 Core Competencies",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            SkillCategory::MolecularBiology => "molecular_biology",
            SkillCategory::LaboratoryTechniques => "laboratory_techniques",
            SkillCategory::Bioinformatics => "bioinformatics",
            SkillCategory::ProfessionalSkills => "professional_skills",
            SkillCategory::CoreCompetency => "core_competency",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        SkillCategory::EXPLORABLE
            .into_iter()
            .chain([SkillCategory::CoreCompetency])
            .find(|category| category.slug() == slug)
    }

    #[must_use]
    pub fn layout(self) -> SkillLayout {
        match self {
            SkillCategory::Bioinformatics | SkillCategory::CoreCompetency => SkillLayout::Bars,
            _ => SkillLayout::Tags,
        }
    }
}

/// Percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Proficiency(u8);

impl Proficiency {
    /// # Errors
    ///
    /// Returns `CatalogError::ProficiencyOutOfRange` above 100.
    pub fn new(value: u8) -> Result<Self, CatalogError> {
        if value > 100 {
            return Err(CatalogError::ProficiencyOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Proficiency> for u8 {
    fn from(value: Proficiency) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    /// Shown when the visitor explores the skill.
    #[serde(default)]
    pub blurb: Option<String>,
}

impl Skill {
    #[must_use]
    pub fn explore_message(&self) -> String {
        self.blurb.clone().unwrap_or_else(|| {
            format!("✨ Expert in {} - Driving biotech innovation!", self.name)
        })
    }
}

//
// ─── CERTIFICATIONS / PROJECTS ────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub provider: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// Label/value pair with an optional trend note, as shown in stat cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub kind: String,
    pub description: String,
    pub impact: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

//
// ─── PROFILE / ABOUT ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: u16,
    /// Markdown.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    pub linkedin: String,
    pub researchgate: String,
}

impl ProfileDraft {
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidLink` if a profile link is not a URL.
    pub fn validate(self) -> Result<Profile, CatalogError> {
        let linkedin = parse_link("linkedin", &self.linkedin)?;
        let researchgate = parse_link("researchgate", &self.researchgate)?;
        Ok(Profile {
            name: self.name,
            title: self.title,
            tagline: self.tagline,
            location: self.location,
            phone: self.phone,
            linkedin,
            researchgate,
        })
    }
}

fn parse_link(field: &'static str, raw: &str) -> Result<Url, CatalogError> {
    Url::parse(raw.trim()).map_err(|_| CatalogError::InvalidLink {
        field,
        raw: raw.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    pub linkedin: Url,
    pub researchgate: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    pub monthly_views: u32,
    pub metrics: Vec<Metric>,
}

//
// ─── CATALOG ──────────────────────────────────────────────────────────────────
//

/// Catalog as loaded from data, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDraft {
    pub profile: ProfileDraft,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub questions: Vec<QuizQuestionDraft>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub research_interests: Vec<String>,
    #[serde(default)]
    pub facts: Vec<String>,
    #[serde(default)]
    pub sidebar_stats: Vec<Metric>,
    pub analytics: Analytics,
}

impl CatalogDraft {
    /// # Errors
    ///
    /// Returns `CatalogError` if the profile links or any quiz question are invalid,
    /// or if there are no questions at all.
    pub fn validate(self) -> Result<StaticCatalog, CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::NoQuestions);
        }
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CatalogError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StaticCatalog {
            profile: self.profile.validate()?,
            skills: self.skills,
            certifications: self.certifications,
            projects: self.projects,
            questions,
            timeline: self.timeline,
            research_interests: self.research_interests,
            facts: self.facts,
            sidebar_stats: self.sidebar_stats,
            analytics: self.analytics,
        })
    }
}

/// Read-only content tables, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCatalog {
    profile: Profile,
    skills: Vec<Skill>,
    certifications: Vec<Certification>,
    projects: Vec<Project>,
    questions: Vec<QuizQuestion>,
    timeline: Vec<TimelineEntry>,
    research_interests: Vec<String>,
    facts: Vec<String>,
    sidebar_stats: Vec<Metric>,
    analytics: Analytics,
}

impl StaticCatalog {
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    #[must_use]
    pub fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.get(id.index())
    }

    /// Skills of one category in catalog order, with their ids.
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = (SkillId, &Skill)> {
        self.skills
            .iter()
            .enumerate()
            .filter(move |(_, skill)| skill.category == category)
            .map(|(index, skill)| (SkillId::new(index), skill))
    }

    #[must_use]
    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    #[must_use]
    pub fn certification(&self, id: CertificationId) -> Option<&Certification> {
        self.certifications.get(id.index())
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(id.index())
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&QuizQuestion> {
        self.questions.get(id.index())
    }

    /// Number of quiz questions; the upper bound of any quiz score.
    #[must_use]
    pub fn total_questions(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    #[must_use]
    pub fn research_interests(&self) -> &[String] {
        &self.research_interests
    }

    #[must_use]
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    #[must_use]
    pub fn sidebar_stats(&self) -> &[Metric] {
        &self.sidebar_stats
    }

    #[must_use]
    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
