use std::sync::Arc;

use portfolio_core::model::{
    AssetKey, ChartBackend, CompletionTier, ContactDraft, ContactField, ContactSubject,
    ImageSource, NavStyle, ProjectId, QuestionId, Rating, Section, SessionState, SkillCategory,
    Theme, Variant,
};
use portfolio_core::time::fixed_clock;
use services::portfolio::{Page, QuizPage};
use services::{
    InMemoryAssetStore, NoticeTone, PortfolioError, PortfolioEvent, PortfolioService,
    RandomSource, Selection, builtin_catalog,
};

fn service_with(assets: InMemoryAssetStore) -> PortfolioService {
    PortfolioService::new(
        Arc::new(builtin_catalog().unwrap()),
        Arc::new(assets),
        Variant::default(),
        RandomSource::Seeded(42),
    )
    .with_clock(fixed_clock())
}

fn service() -> PortfolioService {
    service_with(InMemoryAssetStore::new())
}

fn apply(svc: &PortfolioService, state: &SessionState, event: PortfolioEvent) -> SessionState {
    svc.dispatch(state, event).unwrap().state
}

#[test]
fn navigation_is_idempotent_and_touches_nothing_else() {
    let svc = service();
    let mut state = svc.new_session();
    state = apply(&svc, &state, PortfolioEvent::SetVisitorName("Ada".into()));

    let once = apply(&svc, &state, PortfolioEvent::Navigate(Section::Projects));
    let twice = apply(&svc, &once, PortfolioEvent::Navigate(Section::Projects));
    assert_eq!(once, twice);
    assert_eq!(twice.current_section(), Section::Projects);
    assert_eq!(twice.visitor_name(), "Ada");
    assert_eq!(twice.quiz_score(), 0);
}

#[test]
fn every_section_renders_its_own_page() {
    let svc = service();
    let mut state = svc.new_session();
    let selection = Selection::default();
    for section in Section::ALL {
        state = apply(&svc, &state, PortfolioEvent::Navigate(section));
        let view = svc.render(&state, &selection);
        assert_eq!(view.page.section(), section);
        assert_eq!(view.chrome.sections.len(), Section::ALL.len());
        assert_eq!(
            view.chrome.sections.iter().filter(|item| item.active).count(),
            1
        );
    }
}

#[test]
fn greeting_round_trip() {
    let svc = service();
    let state = svc.new_session();
    let named = apply(&svc, &state, PortfolioEvent::SetVisitorName("Ada".into()));

    let Page::Home(home) = svc.render(&named, &Selection::default()).page else {
        panic!("expected home page");
    };
    assert_eq!(home.greeting, "Welcome, Ada!");

    let view = svc.render(&named, &Selection::default());
    assert_eq!(view.chrome.welcome.as_deref(), Some("Welcome, Ada! 🎉"));
    assert_eq!(
        view.chrome.footer.thanks.as_deref(),
        Some("🎉 Thanks for visiting, Ada!")
    );

    let cleared = apply(&svc, &named, PortfolioEvent::SetVisitorName(String::new()));
    let Page::Home(home) = svc.render(&cleared, &Selection::default()).page else {
        panic!("expected home page");
    };
    assert_eq!(home.greeting, "Welcome to my Biotech Portfolio!");
    assert_eq!(svc.render(&cleared, &Selection::default()).chrome.welcome, None);
}

#[test]
fn missing_profile_picture_renders_placeholder() {
    let svc = service();
    let Page::Home(home) = svc.render(&svc.new_session(), &Selection::default()).page else {
        panic!("expected home page");
    };
    let ImageSource::Placeholder(placeholder) = home.picture else {
        panic!("expected placeholder");
    };
    assert_eq!(placeholder.icon, "🧬");
    assert_eq!(placeholder.hint, "Add your profile.jpg to the assets folder");
}

#[test]
fn present_project_picture_is_used() {
    let key = AssetKey::ProjectPicture(ProjectId::new(1));
    let svc = service_with(InMemoryAssetStore::new().with_asset(key, "assets/project_2.jpg"));
    let state = apply(&svc, &svc.new_session(), PortfolioEvent::Navigate(Section::Projects));
    let mut selection = Selection::default();
    selection.select_project(ProjectId::new(1));

    let Page::Projects(page) = svc.render(&state, &selection).page else {
        panic!("expected projects page");
    };
    let current = page.current.unwrap();
    assert_eq!(current.id, ProjectId::new(1));
    assert!(!current.picture.is_placeholder());
    assert!(page.tabs[1].active);
}

#[test]
fn two_correct_one_incorrect_scores_two_and_great() {
    let svc = service();
    let mut state = svc.new_session();
    for (question, option) in [(0, 1), (1, 1), (2, 2)] {
        state = apply(
            &svc,
            &state,
            PortfolioEvent::SubmitAnswer {
                question: QuestionId::new(question),
                option,
            },
        );
    }
    state = apply(&svc, &state, PortfolioEvent::FinishQuiz);
    assert!(state.quiz_taken());
    assert_eq!(state.quiz_score(), 2);

    let state = apply(&svc, &state, PortfolioEvent::Navigate(Section::Quiz));
    let Page::Quiz(QuizPage::Completed {
        banner,
        score,
        total,
        tier,
    }) = svc.render(&state, &Selection::default()).page
    else {
        panic!("expected completed quiz");
    };
    assert_eq!((score, total), (2, 3));
    assert_eq!(tier, CompletionTier::Great);
    assert_eq!(banner, "🎉 Quiz Completed! Your Score: 2/3");
}

#[test]
fn repeated_correct_answer_never_exceeds_question_count() {
    let svc = service();
    let mut state = svc.new_session();
    for _ in 0..10 {
        state = apply(
            &svc,
            &state,
            PortfolioEvent::SubmitAnswer {
                question: QuestionId::new(0),
                option: 1,
            },
        );
    }
    assert_eq!(state.quiz_score(), 1);
    assert!(state.quiz_score() <= svc.catalog().total_questions());
}

#[test]
fn answer_notices_match_outcomes() {
    let svc = service();
    let state = svc.new_session();
    let correct = svc
        .dispatch(
            &state,
            PortfolioEvent::SubmitAnswer {
                question: QuestionId::new(1),
                option: 1,
            },
        )
        .unwrap();
    let notice = correct.notice.unwrap();
    assert_eq!(notice.text, "🎉 Correct! Well done!");
    assert!(notice.celebrate);

    let wrong = svc
        .dispatch(
            &state,
            PortfolioEvent::SubmitAnswer {
                question: QuestionId::new(1),
                option: 0,
            },
        )
        .unwrap()
        .notice
        .unwrap();
    assert_eq!(wrong.tone, NoticeTone::Error);
    assert_eq!(wrong.text, "❌ Incorrect. The correct answer is: qPCR");
}

#[test]
fn submitting_after_finish_is_rejected() {
    let svc = service();
    let state = apply(&svc, &svc.new_session(), PortfolioEvent::FinishQuiz);
    let err = svc
        .dispatch(
            &state,
            PortfolioEvent::SubmitAnswer {
                question: QuestionId::new(0),
                option: 1,
            },
        )
        .unwrap_err();
    assert!(matches!(err, PortfolioError::Quiz(_)));
    assert_eq!(state.quiz_score(), 0);
}

#[test]
fn unknown_question_is_rejected() {
    let svc = service();
    let err = svc
        .dispatch(
            &svc.new_session(),
            PortfolioEvent::SubmitAnswer {
                question: QuestionId::new(99),
                option: 0,
            },
        )
        .unwrap_err();
    assert!(matches!(err, PortfolioError::Quiz(_)));
}

#[test]
fn retake_resets_the_quiz() {
    let svc = service();
    let mut state = svc.new_session();
    state = apply(
        &svc,
        &state,
        PortfolioEvent::SubmitAnswer {
            question: QuestionId::new(0),
            option: 1,
        },
    );
    state = apply(&svc, &state, PortfolioEvent::FinishQuiz);
    state = apply(&svc, &state, PortfolioEvent::RetakeQuiz);

    assert_eq!(state.quiz_score(), 0);
    assert!(!state.quiz_taken());

    // Previously answered questions can be answered again after a retake.
    state = apply(
        &svc,
        &state,
        PortfolioEvent::SubmitAnswer {
            question: QuestionId::new(0),
            option: 1,
        },
    );
    assert_eq!(state.quiz_score(), 1);
}

#[test]
fn contact_form_requires_name_email_and_message() {
    let svc = service();
    let state = apply(&svc, &svc.new_session(), PortfolioEvent::Navigate(Section::Contact));
    let draft = ContactDraft {
        name: "Ada".into(),
        email: "  ".into(),
        subject: ContactSubject::Research,
        message: "Hello".into(),
    };

    let err = svc
        .dispatch(&state, PortfolioEvent::SubmitContact(draft.clone()))
        .unwrap_err();
    let PortfolioError::Contact(form) = &err else {
        panic!("expected contact error, got {err:?}");
    };
    assert_eq!(form.missing(), &[ContactField::Email]);
    assert_eq!(err.to_string(), "❌ Please fill in all required fields");

    let fixed = ContactDraft {
        email: "ada@example.com".into(),
        ..draft
    };
    let accepted = svc
        .dispatch(&state, PortfolioEvent::SubmitContact(fixed))
        .unwrap();
    assert_eq!(accepted.state, state);
    let notice = accepted.notice.unwrap();
    assert_eq!(notice.text, "🎉 Message sent successfully!");
    assert_eq!(notice.details.len(), 4);
    assert_eq!(notice.details[2].value, "Research Collaboration");
}

#[test]
fn sort_animation_ends_sorted() {
    let svc = service();
    let animation = svc.sort_animation();
    assert_eq!(animation.len(), 45);
    let last = animation.last().unwrap();
    assert!(last.values.windows(2).all(|w| w[0] <= w[1]));
    assert!(last.values.iter().all(|v| (1..100).contains(v)));
}

#[test]
fn animation_finished_celebrates() {
    let svc = service();
    let notice = svc
        .dispatch(&svc.new_session(), PortfolioEvent::AnimationFinished)
        .unwrap()
        .notice
        .unwrap();
    assert_eq!(notice.text, "✅ Sequence Alignment Complete!");
    assert!(notice.celebrate);
}

#[test]
fn change_theme_picks_a_known_theme_and_stores_it() {
    let svc = service();
    let t = svc
        .dispatch(&svc.new_session(), PortfolioEvent::ChangeTheme)
        .unwrap();
    assert!(Theme::ALL.contains(&t.state.theme()));
    assert_eq!(
        t.notice.unwrap().text,
        format!("🎨 Theme changed to: {}", t.state.theme().label())
    );
    assert_eq!(svc.render(&t.state, &Selection::default()).chrome.theme, t.state.theme());
}

#[test]
fn footer_shows_year_from_clock_and_analytics_on_demand() {
    let svc = service();
    let state = svc.new_session();
    let mut selection = Selection::default();
    let footer = svc.render(&state, &selection).chrome.footer;
    assert!(footer.copyright.starts_with("© 2025 Youssef Mohamed Ali"));
    assert_eq!(footer.analytics, None);

    selection.show_analytics = true;
    let analytics = svc.render(&state, &selection).chrome.footer.analytics.unwrap();
    let values: Vec<_> = analytics.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, ["987", "654", "4m 12s"]);

    let rated = svc
        .dispatch(&state, PortfolioEvent::RateFeedback(Rating::Four))
        .unwrap()
        .notice
        .unwrap();
    assert_eq!(rated.text, "Thanks for the ⭐⭐⭐⭐ rating!");
}

#[test]
fn skills_page_follows_category_layout() {
    let svc = service();
    let state = apply(&svc, &svc.new_session(), PortfolioEvent::Navigate(Section::Skills));
    let mut selection = Selection::default();
    selection.skill_category = SkillCategory::Bioinformatics;

    let Page::Skills(page) = svc.render(&state, &selection).page else {
        panic!("expected skills page");
    };
    assert_eq!(page.categories, SkillCategory::EXPLORABLE.to_vec());
    assert_eq!(page.skills.first().map(|s| s.name.as_str()), Some("Python"));
    assert_eq!(page.skills[0].proficiency.value(), 92);

    let explored = svc
        .dispatch(&state, PortfolioEvent::ExploreSkill(page.skills[1].id))
        .unwrap()
        .notice
        .unwrap();
    assert_eq!(explored.text, "✨ Expert in R - Driving biotech innovation!");
}

#[test]
fn algorithms_page_honours_selection() {
    let svc = service();
    let state = apply(&svc, &svc.new_session(), PortfolioEvent::Navigate(Section::Algorithms));
    let mut selection = Selection::default();
    selection.set_pascal_rows(4);
    selection.set_table_size(3);

    let Page::Algorithms(page) = svc.render(&state, &selection).page else {
        panic!("expected algorithms page");
    };
    assert_eq!(page.pascal.len(), 4);
    assert_eq!(page.pascal[3], vec![1, 3, 3, 1]);
    assert_eq!(page.table[2], vec![3, 6, 9]);
    assert_eq!(page.max_size, 12);
}

#[test]
fn variant_is_reported_in_chrome() {
    let svc = PortfolioService::new(
        Arc::new(builtin_catalog().unwrap()),
        Arc::new(InMemoryAssetStore::new()),
        Variant {
            nav: NavStyle::Dropdown,
            charts: ChartBackend::Svg,
        },
        RandomSource::Seeded(1),
    );
    let chrome = svc.render(&svc.new_session(), &Selection::default()).chrome;
    assert_eq!(chrome.nav, NavStyle::Dropdown);
    assert_eq!(chrome.charts, ChartBackend::Svg);
}

#[test]
fn sessions_do_not_share_state() {
    let svc = service();
    let a = apply(&svc, &svc.new_session(), PortfolioEvent::SetVisitorName("Ada".into()));
    let b = svc.new_session();
    assert_ne!(a.id(), b.id());
    assert_eq!(b.visitor_name(), "");
}
