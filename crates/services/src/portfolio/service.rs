use std::sync::{Arc, Mutex, PoisonError};

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use portfolio_core::algo::{MAX_TABLE_SIZE, SortAnimation, multiplication_table, pascal_triangle};
use portfolio_core::model::{
    AnswerOutcome, AssetKey, CertificationId, ContactChannel, ContactSubject, Metric, ProjectId,
    QuestionId, QuizError, Rating, Section, SessionId, SessionState, SkillCategory, StaticCatalog, Theme,
    Variant,
};

use crate::Clock;
use crate::assets::{AssetStore, FsAssetStore, resolve_image};
use crate::config::PortfolioConfig;
use crate::error::PortfolioError;
use crate::random::RandomSource;

use super::events::PortfolioEvent;
use super::notice::Notice;
use super::selection::Selection;
use super::view::{
    AboutPage, AlgorithmsPage, CertificationCard, Chrome, ContactPage, Footer, HomePage, NavItem,
    Page, PortfolioView, ProjectDetail, ProjectTab, ProjectsPage, QuestionView, QuizPage, SkillItem,
    SkillsLabPage, SkillsPage,
};

/// Values drawn for one run of the sort animation.
const ANIMATION_LEN: usize = 10;

const FOOTER_TAGLINE: &str = "✨ Pioneering biotechnology for a healthier future! ✨";

/// Result of handling one event: the next session state and optional feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub notice: Option<Notice>,
}

impl Transition {
    fn quiet(state: SessionState) -> Self {
        Self {
            state,
            notice: None,
        }
    }

    fn with(state: SessionState, notice: Notice) -> Self {
        Self {
            state,
            notice: Some(notice),
        }
    }
}

/// Portfolio view controller.
///
/// Owns the read-only catalog, the asset store, the presentation variant, the
/// time source and the random source. Session state is passed in and returned;
/// nothing here is per-visitor.
pub struct PortfolioService {
    catalog: Arc<StaticCatalog>,
    assets: Arc<dyn AssetStore>,
    variant: Variant,
    initial_section: Section,
    clock: Clock,
    rng: Mutex<StdRng>,
}

impl PortfolioService {
    #[must_use]
    pub fn new(
        catalog: Arc<StaticCatalog>,
        assets: Arc<dyn AssetStore>,
        variant: Variant,
        random: RandomSource,
    ) -> Self {
        Self {
            catalog,
            assets,
            variant,
            initial_section: Section::Home,
            clock: Clock::default_clock(),
            rng: Mutex::new(random.rng()),
        }
    }

    /// Build the service from startup configuration.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::Catalog` if the catalog cannot be loaded.
    pub fn from_config(config: &PortfolioConfig) -> Result<Self, PortfolioError> {
        let catalog = config.catalog.load()?;
        tracing::info!(
            nav = config.variant.nav.as_str(),
            charts = config.variant.charts.as_str(),
            assets = %config.assets_dir.display(),
            questions = catalog.total_questions(),
            "portfolio service ready"
        );
        Ok(Self::new(
            Arc::new(catalog),
            Arc::new(FsAssetStore::new(config.assets_dir.clone())),
            config.variant,
            config.random,
        )
        .with_initial_section(config.initial_section))
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_initial_section(mut self, section: Section) -> Self {
        self.initial_section = section;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Start a session for a new visitor.
    #[must_use]
    pub fn new_session(&self) -> SessionState {
        let state = SessionState::new(SessionId::random()).with_section(self.initial_section);
        tracing::info!(session_id = %state.id(), section = %state.current_section(), "session started");
        state
    }

    /// Apply one event to `state`.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError` when the event is rejected; the caller keeps
    /// its current state in that case.
    pub fn dispatch(
        &self,
        state: &SessionState,
        event: PortfolioEvent,
    ) -> Result<Transition, PortfolioError> {
        let span = tracing::info_span!("dispatch", session_id = %state.id(), event = event.kind());
        let _guard = span.enter();

        let result = self.apply(state.clone(), event);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "event rejected");
        }
        result
    }

    fn apply(
        &self,
        mut state: SessionState,
        event: PortfolioEvent,
    ) -> Result<Transition, PortfolioError> {
        match event {
            PortfolioEvent::Navigate(section) => {
                tracing::debug!(from = %state.current_section(), to = %section, "navigate");
                state.navigate(section);
                Ok(Transition::quiet(state))
            }
            PortfolioEvent::SetVisitorName(name) => {
                state.set_visitor_name(name);
                Ok(Transition::quiet(state))
            }
            PortfolioEvent::SubmitAnswer { question, option } => {
                self.submit_answer(state, question, option)
            }
            PortfolioEvent::FinishQuiz => {
                state.quiz_mut().finish();
                tracing::info!(
                    score = state.quiz_score(),
                    total = self.catalog.total_questions(),
                    "quiz finished"
                );
                Ok(Transition::quiet(state))
            }
            PortfolioEvent::RetakeQuiz => {
                state.quiz_mut().retake();
                tracing::info!("quiz reset");
                Ok(Transition::quiet(state))
            }
            PortfolioEvent::ExploreSkill(id) => {
                let skill = self
                    .catalog
                    .skill(id)
                    .ok_or(PortfolioError::UnknownSkill(id))?;
                let notice = Notice::success(skill.explore_message()).celebrating();
                Ok(Transition::with(state, notice))
            }
            PortfolioEvent::VerifyCertification(id) => {
                self.catalog
                    .certification(id)
                    .ok_or(PortfolioError::UnknownCertification(id))?;
                Ok(Transition::with(state, Notice::success("Certificate verified! ✅")))
            }
            PortfolioEvent::OpenProfileLink(channel) => {
                let notice = Notice::success(channel.opening_message()).celebrating();
                Ok(Transition::with(state, notice))
            }
            PortfolioEvent::OpenChannel(channel) => {
                Ok(Transition::with(state, Notice::success(channel.confirmation())))
            }
            PortfolioEvent::SubmitContact(draft) => {
                let message = draft.validate(self.clock.now())?;
                tracing::info!(subject = message.subject.label(), "contact message accepted");
                let details = message
                    .details()
                    .into_iter()
                    .map(|(label, value)| Metric {
                        label: label.to_string(),
                        value,
                        delta: None,
                    })
                    .collect();
                let notice = Notice::success(message.confirmation())
                    .celebrating()
                    .with_details(details);
                Ok(Transition::with(state, notice))
            }
            PortfolioEvent::RandomFact => {
                let fact = self.with_rng(|rng| self.catalog.facts().choose(rng).cloned());
                Ok(match fact {
                    Some(fact) => Transition::with(state, Notice::success(fact)),
                    None => Transition::quiet(state),
                })
            }
            PortfolioEvent::ChangeTheme => {
                let theme = self
                    .with_rng(|rng| Theme::ALL.choose(rng).copied())
                    .unwrap_or_default();
                state.set_theme(theme);
                let notice = Notice::success(format!("🎨 Theme changed to: {}", theme.label()));
                Ok(Transition::with(state, notice))
            }
            PortfolioEvent::ViewAnalytics => {
                let analytics = self.catalog.analytics();
                let notice = Notice::info(format!(
                    "📈 Portfolio analytics: {} views this month!",
                    analytics.monthly_views
                ))
                .with_details(analytics.metrics.clone());
                Ok(Transition::with(state, notice))
            }
            PortfolioEvent::OpenFeedback => Ok(Transition::with(
                state,
                Notice::success("💌 Thank you for your interest in providing feedback!"),
            )),
            PortfolioEvent::RateFeedback(rating) => {
                tracing::info!(rating = rating.value(), "feedback rating");
                let notice = Notice::success(format!("Thanks for the {} rating!", rating.stars()));
                Ok(Transition::with(state, notice))
            }
            PortfolioEvent::AnimationFinished => Ok(Transition::with(
                state,
                Notice::success("✅ Sequence Alignment Complete!").celebrating(),
            )),
        }
    }

    fn submit_answer(
        &self,
        mut state: SessionState,
        question_id: QuestionId,
        option: usize,
    ) -> Result<Transition, PortfolioError> {
        let question = self
            .catalog
            .question(question_id)
            .ok_or(QuizError::UnknownQuestion(question_id))?;
        let outcome = state.quiz_mut().submit(question_id, question, option)?;
        tracing::info!(question = %question_id, outcome = ?outcome, score = state.quiz_score(), "answer submitted");

        let notice = match outcome {
            AnswerOutcome::Correct => Notice::success("🎉 Correct! Well done!").celebrating(),
            AnswerOutcome::Incorrect { correct } => {
                Notice::error(format!("❌ Incorrect. The correct answer is: {correct}"))
            }
            AnswerOutcome::AlreadyAnswered => {
                Notice::info("You already answered this question. Finish the quiz to see your score.")
            }
        };
        Ok(Transition::with(state, notice))
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    /// Fresh random input for the Skills Lab sort animation.
    #[must_use]
    pub fn sort_animation(&self) -> SortAnimation {
        let values: Vec<u32> = self.with_rng(|rng| {
            (0..ANIMATION_LEN)
                .map(|_| rng.random_range(1..100))
                .collect()
        });
        SortAnimation::new(values)
    }

    //
    // ─── RENDERING ─────────────────────────────────────────────────────────────
    //

    /// Pure projection of catalog, session state and view-local selection.
    #[must_use]
    pub fn render(&self, state: &SessionState, selection: &Selection) -> PortfolioView {
        PortfolioView {
            chrome: self.chrome(state, selection),
            page: self.page(state, selection),
        }
    }

    fn chrome(&self, state: &SessionState, selection: &Selection) -> Chrome {
        let current = state.current_section();
        let sections = Section::ALL
            .into_iter()
            .map(|section| NavItem {
                section,
                label: section.nav_label(),
                active: section == current,
            })
            .collect();

        let profile = self.catalog.profile();
        let footer = Footer {
            copyright: format!(
                "© {} {}. Built with ❤️ in Rust",
                self.clock.year(),
                profile.name
            ),
            tagline: FOOTER_TAGLINE,
            thanks: state
                .has_visitor_name()
                .then(|| format!("🎉 Thanks for visiting, {}!", state.visitor_name())),
            analytics: selection
                .show_analytics
                .then(|| self.catalog.analytics().metrics.clone()),
            feedback: selection.feedback_open.then(|| Rating::ALL.to_vec()),
            rating: selection.rating,
        };

        Chrome {
            nav: self.variant.nav,
            charts: self.variant.charts,
            sections,
            current,
            visitor_name: state.visitor_name().to_string(),
            welcome: state
                .has_visitor_name()
                .then(|| format!("Welcome, {}! 🎉", state.visitor_name())),
            stats: self.catalog.sidebar_stats().to_vec(),
            theme: state.theme(),
            footer,
        }
    }

    fn page(&self, state: &SessionState, selection: &Selection) -> Page {
        match state.current_section() {
            Section::Home => Page::Home(self.home_page(state)),
            Section::About => Page::About(self.about_page(selection)),
            Section::Skills => Page::Skills(self.skills_page(selection)),
            Section::Certifications => Page::Certifications(
                self.catalog
                    .certifications()
                    .iter()
                    .enumerate()
                    .map(|(index, certification)| CertificationCard {
                        id: CertificationId::new(index),
                        certification: certification.clone(),
                    })
                    .collect(),
            ),
            Section::Projects => Page::Projects(self.projects_page(selection)),
            Section::Quiz => Page::Quiz(self.quiz_page(state, selection)),
            Section::SkillsLab => Page::SkillsLab(SkillsLabPage {
                competencies: self.skill_items(SkillCategory::CoreCompetency),
                charts: self.variant.charts,
            }),
            Section::Algorithms => Page::Algorithms(AlgorithmsPage {
                max_size: MAX_TABLE_SIZE,
                pascal_rows: selection.pascal_rows(),
                pascal: pascal_triangle(selection.pascal_rows()),
                table_size: selection.table_size(),
                table: multiplication_table(selection.table_size()),
            }),
            Section::Contact => Page::Contact(ContactPage {
                channels: ContactChannel::ALL.to_vec(),
                subjects: ContactSubject::ALL.to_vec(),
            }),
        }
    }

    fn home_page(&self, state: &SessionState) -> HomePage {
        let profile = self.catalog.profile();
        HomePage {
            name: profile.name.clone(),
            title: profile.title.clone(),
            tagline: profile.tagline.clone(),
            contact_line: format!("📍 {} | 📞 {}", profile.location, profile.phone),
            greeting: state.greeting(),
            picture: resolve_image(self.assets.as_ref(), AssetKey::ProfilePicture),
            links: vec![
                ContactChannel::LinkedIn,
                ContactChannel::ResearchGate,
                ContactChannel::Email,
            ],
        }
    }

    fn about_page(&self, selection: &Selection) -> AboutPage {
        AboutPage {
            journey: selection
                .show_journey
                .then(|| self.catalog.timeline().to_vec()),
            interests: selection
                .show_interests
                .then(|| self.catalog.research_interests().join(" | ")),
            fun_facts: selection
                .show_fun_facts
                .then(|| self.catalog.facts().to_vec()),
        }
    }

    fn skill_items(&self, category: SkillCategory) -> Vec<SkillItem> {
        self.catalog
            .skills_in(category)
            .map(|(id, skill)| SkillItem {
                id,
                name: skill.name.clone(),
                proficiency: skill.proficiency,
            })
            .collect()
    }

    fn skills_page(&self, selection: &Selection) -> SkillsPage {
        let selected = selection.skill_category;
        SkillsPage {
            categories: SkillCategory::EXPLORABLE.to_vec(),
            selected,
            layout: selected.layout(),
            skills: self.skill_items(selected),
        }
    }

    fn projects_page(&self, selection: &Selection) -> ProjectsPage {
        let projects = self.catalog.projects();
        let selected = if selection.project.index() < projects.len() {
            selection.project
        } else {
            ProjectId::new(0)
        };

        let tabs = projects
            .iter()
            .enumerate()
            .map(|(index, p)| ProjectTab {
                id: ProjectId::new(index),
                title: p.title.clone(),
                active: index == selected.index(),
            })
            .collect();

        let current = projects.get(selected.index()).map(|project| ProjectDetail {
            id: selected,
            project: project.clone(),
            show_details: selection.show_project_details,
            picture: resolve_image(self.assets.as_ref(), AssetKey::ProjectPicture(selected)),
        });

        ProjectsPage { tabs, current }
    }

    fn quiz_page(&self, state: &SessionState, selection: &Selection) -> QuizPage {
        let quiz = state.quiz();
        let total = self.catalog.total_questions();

        if let Some(tier) = quiz.tier(total) {
            return QuizPage::Completed {
                banner: format!("🎉 Quiz Completed! Your Score: {}/{total}", quiz.score()),
                score: quiz.score(),
                total,
                tier,
            };
        }

        let current_id = if self.catalog.question(selection.question).is_some() {
            selection.question
        } else {
            QuestionId::new(0)
        };
        let prompts = self
            .catalog
            .questions()
            .iter()
            .enumerate()
            .map(|(index, q)| (QuestionId::new(index), q.prompt().to_string()))
            .collect();

        let current = match self.catalog.question(current_id) {
            Some(question) => QuestionView {
                id: current_id,
                prompt: question.prompt().to_string(),
                options: question.options().to_vec(),
                pending: selection.pending_answer(current_id),
                answered: quiz.answer_for(current_id),
            },
            // Validated catalogs always have a first question.
            None => QuestionView {
                id: current_id,
                prompt: String::new(),
                options: Vec::new(),
                pending: None,
                answered: None,
            },
        };

        QuizPage::InProgress {
            prompts,
            current,
            score: quiz.score(),
            answered: quiz.answered_count(),
            total,
        }
    }
}
