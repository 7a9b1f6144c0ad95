use portfolio_core::model::{
    AnsweredQuestion, Certification, CertificationId, ChartBackend, CompletionTier,
    ContactChannel, ContactSubject, ImageSource, Metric, NavStyle, Proficiency, Project,
    ProjectId, QuestionId, Rating, Section, SkillCategory, SkillId, SkillLayout, Theme,
    TimelineEntry,
};

/// Everything the UI needs to draw one frame.
///
/// Presentation-agnostic: plain data, no markup.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioView {
    pub chrome: Chrome,
    pub page: Page,
}

/// Parts drawn around every page.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub nav: NavStyle,
    pub charts: ChartBackend,
    pub sections: Vec<NavItem>,
    pub current: Section,
    pub visitor_name: String,
    /// Sidebar welcome, present once a name is entered.
    pub welcome: Option<String>,
    pub stats: Vec<Metric>,
    pub theme: Theme,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub copyright: String,
    pub tagline: &'static str,
    pub thanks: Option<String>,
    pub analytics: Option<Vec<Metric>>,
    pub feedback: Option<Vec<Rating>>,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home(HomePage),
    About(AboutPage),
    Skills(SkillsPage),
    Certifications(Vec<CertificationCard>),
    Projects(ProjectsPage),
    Quiz(QuizPage),
    SkillsLab(SkillsLabPage),
    Algorithms(AlgorithmsPage),
    Contact(ContactPage),
}

impl Page {
    #[must_use]
    pub fn section(&self) -> Section {
        match self {
            Page::Home(_) => Section::Home,
            Page::About(_) => Section::About,
            Page::Skills(_) => Section::Skills,
            Page::Certifications(_) => Section::Certifications,
            Page::Projects(_) => Section::Projects,
            Page::Quiz(_) => Section::Quiz,
            Page::SkillsLab(_) => Section::SkillsLab,
            Page::Algorithms(_) => Section::Algorithms,
            Page::Contact(_) => Section::Contact,
        }
    }
}

// ─── Pages ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub contact_line: String,
    pub greeting: String,
    pub picture: ImageSource,
    pub links: Vec<ContactChannel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutPage {
    pub journey: Option<Vec<TimelineEntry>>,
    pub interests: Option<String>,
    pub fun_facts: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillItem {
    pub id: SkillId,
    pub name: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsPage {
    pub categories: Vec<SkillCategory>,
    pub selected: SkillCategory,
    pub layout: SkillLayout,
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationCard {
    pub id: CertificationId,
    pub certification: Certification,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTab {
    pub id: ProjectId,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsPage {
    pub tabs: Vec<ProjectTab>,
    /// Absent only for a catalog without projects.
    pub current: Option<ProjectDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub id: ProjectId,
    pub project: Project,
    pub show_details: bool,
    pub picture: ImageSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub pending: Option<usize>,
    pub answered: Option<AnsweredQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPage {
    InProgress {
        /// Question picker entries.
        prompts: Vec<(QuestionId, String)>,
        current: QuestionView,
        score: u32,
        answered: usize,
        total: u32,
    },
    Completed {
        banner: String,
        score: u32,
        total: u32,
        tier: CompletionTier,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsLabPage {
    pub competencies: Vec<SkillItem>,
    pub charts: ChartBackend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmsPage {
    pub max_size: u32,
    pub pascal_rows: u32,
    pub pascal: Vec<Vec<u64>>,
    pub table_size: u32,
    pub table: Vec<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage {
    pub channels: Vec<ContactChannel>,
    pub subjects: Vec<ContactSubject>,
}
