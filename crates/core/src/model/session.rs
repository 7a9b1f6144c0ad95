use crate::model::ids::SessionId;
use crate::model::quiz::QuizState;
use crate::model::section::Section;
use crate::model::variant::Theme;

/// Greeting shown until the visitor enters a name.
pub const GENERIC_GREETING: &str = "Welcome to my Biotech Portfolio!";

/// Everything one visitor's session remembers between interactions.
///
/// Owned by exactly one session; nothing here is shared across visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    id: SessionId,
    current_section: Section,
    visitor_name: String,
    quiz: QuizState,
    theme: Theme,
}

impl SessionState {
    /// Fresh session on the Home section with no name and an empty quiz.
    #[must_use]
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            current_section: Section::default(),
            visitor_name: String::new(),
            quiz: QuizState::new(),
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.current_section = section;
        self
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn current_section(&self) -> Section {
        self.current_section
    }

    /// Switch sections; every other field is left untouched.
    pub fn navigate(&mut self, section: Section) {
        self.current_section = section;
    }

    #[must_use]
    pub fn visitor_name(&self) -> &str {
        &self.visitor_name
    }

    /// Stores the name exactly as typed; an empty string clears it.
    pub fn set_visitor_name(&mut self, name: impl Into<String>) {
        self.visitor_name = name.into();
    }

    #[must_use]
    pub fn has_visitor_name(&self) -> bool {
        !self.visitor_name.is_empty()
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        if self.has_visitor_name() {
            format!("Welcome, {}!", self.visitor_name)
        } else {
            GENERIC_GREETING.to_string()
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizState {
        &mut self.quiz
    }

    #[must_use]
    pub fn quiz_score(&self) -> u32 {
        self.quiz.score()
    }

    #[must_use]
    pub fn quiz_taken(&self) -> bool {
        self.quiz.is_completed()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        SessionState::new(SessionId::random())
    }

    #[test]
    fn new_session_starts_on_home_with_generic_greeting() {
        let s = session();
        assert_eq!(s.current_section(), Section::Home);
        assert_eq!(s.greeting(), GENERIC_GREETING);
        assert_eq!(s.quiz_score(), 0);
        assert!(!s.quiz_taken());
        assert_eq!(s.theme(), Theme::Nature);
    }

    #[test]
    fn greeting_uses_the_name_verbatim() {
        let mut s = session();
        s.set_visitor_name("  Ada ");
        assert_eq!(s.greeting(), "Welcome,   Ada !");
        s.set_visitor_name("");
        assert_eq!(s.greeting(), GENERIC_GREETING);
    }

    #[test]
    fn navigation_leaves_other_fields_alone() {
        let mut s = session();
        s.set_visitor_name("Ada");
        s.set_theme(Theme::Lab);
        s.navigate(Section::Quiz);
        s.navigate(Section::Contact);
        assert_eq!(s.current_section(), Section::Contact);
        assert_eq!(s.visitor_name(), "Ada");
        assert_eq!(s.theme(), Theme::Lab);
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = session();
        let b = session();
        a.set_visitor_name("Ada");
        a.quiz_mut().finish();
        assert_eq!(b.visitor_name(), "");
        assert!(!b.quiz_taken());
        assert_ne!(a.id(), b.id());
    }
}
