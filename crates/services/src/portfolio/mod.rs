mod events;
mod notice;
mod selection;
mod service;
mod view;

pub use events::PortfolioEvent;
pub use notice::{Notice, NoticeTone};
pub use selection::Selection;
pub use service::{PortfolioService, Transition};
pub use view::{
    AboutPage, AlgorithmsPage, CertificationCard, Chrome, ContactPage, Footer, HomePage, NavItem,
    Page, PortfolioView, ProjectDetail, ProjectTab, ProjectsPage, QuestionView, QuizPage, SkillItem, SkillsLabPage,
    SkillsPage,
};
