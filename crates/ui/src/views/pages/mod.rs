mod about;
mod algorithms;
mod certifications;
mod contact;
mod home;
mod projects;
mod quiz;
mod skills;
mod skills_lab;

pub use about::AboutView;
pub use algorithms::AlgorithmsView;
pub use certifications::CertificationsView;
pub use contact::ContactView;
pub use home::HomeView;
pub use projects::ProjectsView;
pub use quiz::QuizView;
pub use skills::SkillsView;
pub use skills_lab::SkillsLabView;
