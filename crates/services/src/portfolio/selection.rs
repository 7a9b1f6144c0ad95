use std::collections::BTreeMap;

use portfolio_core::algo::MAX_TABLE_SIZE;
use portfolio_core::model::{ProjectId, QuestionId, Rating, SkillCategory};

/// View-local choices that shape rendering but are not session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub skill_category: SkillCategory,
    pub project: ProjectId,
    pub show_project_details: bool,
    pub question: QuestionId,
    pending_answers: BTreeMap<QuestionId, usize>,
    pascal_rows: u32,
    table_size: u32,
    pub show_journey: bool,
    pub show_interests: bool,
    pub show_fun_facts: bool,
    pub show_analytics: bool,
    pub feedback_open: bool,
    pub rating: Rating,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            skill_category: SkillCategory::default(),
            project: ProjectId::new(0),
            show_project_details: false,
            question: QuestionId::new(0),
            pending_answers: BTreeMap::new(),
            pascal_rows: 6,
            table_size: 10,
            show_journey: false,
            show_interests: false,
            show_fun_facts: false,
            show_analytics: false,
            feedback_open: false,
            rating: Rating::default(),
        }
    }
}

impl Selection {
    /// Switching project tabs collapses the details panel.
    pub fn select_project(&mut self, project: ProjectId) {
        if self.project != project {
            self.project = project;
            self.show_project_details = false;
        }
    }

    #[must_use]
    pub fn pending_answer(&self, question: QuestionId) -> Option<usize> {
        self.pending_answers.get(&question).copied()
    }

    pub fn choose_answer(&mut self, question: QuestionId, option: usize) {
        self.pending_answers.insert(question, option);
    }

    pub fn clear_answers(&mut self) {
        self.pending_answers.clear();
    }

    #[must_use]
    pub fn pascal_rows(&self) -> u32 {
        self.pascal_rows
    }

    /// Clamped to `1..=MAX_TABLE_SIZE`.
    pub fn set_pascal_rows(&mut self, rows: u32) {
        self.pascal_rows = rows.clamp(1, MAX_TABLE_SIZE);
    }

    #[must_use]
    pub fn table_size(&self) -> u32 {
        self.table_size
    }

    /// Clamped to `1..=MAX_TABLE_SIZE`.
    pub fn set_table_size(&mut self, size: u32) {
        self.table_size = size.clamp(1, MAX_TABLE_SIZE);
    }
}
