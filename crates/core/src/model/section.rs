use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct SectionParseError(pub String);

/// One of the fixed navigable content views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Certifications,
    Projects,
    Quiz,
    SkillsLab,
    Algorithms,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 9] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Certifications,
        Section::Projects,
        Section::Quiz,
        Section::SkillsLab,
        Section::Algorithms,
        Section::Contact,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About Me",
            Section::Skills => "Skills",
            Section::Certifications => "Certifications",
            Section::Projects => "Projects",
            Section::Quiz => "Quiz",
            Section::SkillsLab => "Skills Lab",
            Section::Algorithms => "Algorithms",
            Section::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Section::Home => "🏠",
            Section::About => "👨‍🔬",
            Section::Skills => "🔬",
            Section::Certifications => "🏅",
            Section::Projects => "💼",
            Section::Quiz => "🎯",
            Section::SkillsLab => "📊",
            Section::Algorithms => "🧮",
            Section::Contact => "📞",
        }
    }

    /// Stable identifier used by the dropdown selector and the `--section` flag.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
            Section::Projects => "projects",
            Section::Quiz => "quiz",
            Section::SkillsLab => "skills-lab",
            Section::Algorithms => "algorithms",
            Section::Contact => "contact",
        }
    }

    #[must_use]
    pub fn nav_label(self) -> String {
        format!("{} {}", self.icon(), self.label())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Section::ALL
            .into_iter()
            .find(|section| {
                section.slug().eq_ignore_ascii_case(needle)
                    || section.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| SectionParseError(raw.to_string()))
    }
}
