use portfolio_core::model::{
    AssetKey, CertificationId, ChartBackend, NavStyle, ProjectId, QuestionId, Section, SkillCategory, Variant,
};
use services::InMemoryAssetStore;
use services::portfolio::{PortfolioEvent, Selection};

use super::test_harness::Scenario;

fn at(section: Section) -> Scenario {
    Scenario::with_events(vec![PortfolioEvent::Navigate(section)])
}

#[tokio::test(flavor = "current_thread")]
async fn home_shows_generic_greeting_and_picture_placeholder() {
    let html = Scenario::default().render();
    assert!(html.contains("Welcome to my Biotech Portfolio!"), "{html}");
    assert!(html.contains("Youssef Mohamed Ali"), "{html}");
    assert!(html.contains("Add your profile.jpg to the assets folder"), "{html}");
    assert!(html.contains("© 2025 Youssef Mohamed Ali"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn visitor_name_personalizes_sidebar_home_and_footer() {
    let html = Scenario::with_events(vec![PortfolioEvent::SetVisitorName("Ada".into())]).render();
    assert!(html.contains("Welcome, Ada! 🎉"), "{html}");
    assert!(html.contains("greeting\">Welcome, Ada!<"), "{html}");
    assert!(html.contains("Thanks for visiting, Ada!"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn present_profile_picture_replaces_the_placeholder() {
    let html = Scenario {
        assets: InMemoryAssetStore::new().with_asset(AssetKey::ProfilePicture, "/tmp/profile.jpg"),
        ..Scenario::default()
    }
    .render();
    assert!(html.contains("/tmp/profile.jpg"), "{html}");
    assert!(!html.contains("Add your profile.jpg"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_nav_renders_one_button_per_section() {
    let html = Scenario::default().render();
    assert_eq!(html.matches("class=\"nav-btn").count(), Section::ALL.len(), "{html}");
    assert!(html.contains("nav-btn--active"), "{html}");
    assert!(!html.contains("nav-select"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dropdown_nav_renders_a_selector() {
    let html = Scenario {
        variant: Variant {
            nav: NavStyle::Dropdown,
            charts: ChartBackend::Native,
        },
        ..Scenario::default()
    }
    .render();
    assert!(html.contains("nav-select"), "{html}");
    assert!(html.contains("skills-lab"), "{html}");
    assert!(!html.contains("nav-btn"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn skills_page_uses_tags_or_bars_per_category() {
    let html = at(Section::Skills).render();
    assert!(html.contains("CRISPR-Cas9"), "{html}");
    assert!(html.contains("Explore"), "{html}");

    let mut selection = Selection::default();
    selection.skill_category = SkillCategory::Bioinformatics;
    let html = Scenario {
        selection,
        ..at(Section::Skills)
    }
    .render();
    assert!(html.contains("width: 92%;"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn svg_backend_draws_the_competency_chart() {
    let html = Scenario {
        variant: Variant {
            nav: NavStyle::Sidebar,
            charts: ChartBackend::Svg,
        },
        ..at(Section::SkillsLab)
    }
    .render();
    assert!(html.contains("<svg"), "{html}");
    assert!(html.contains("Molecular Diagnostics"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn project_details_show_technologies_when_expanded() {
    let mut selection = Selection::default();
    selection.select_project(ProjectId::new(1));
    selection.show_project_details = true;
    let html = Scenario {
        selection,
        ..at(Section::Projects)
    }
    .render();
    assert!(html.contains("Algal Bioprocessing"), "{html}");
    assert!(html.contains("Research Duration"), "{html}");
    assert!(html.contains("Data Analysis"), "{html}");
    assert!(html.contains("Add your project_2.jpg to the assets folder"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_quiz_shows_score_and_tier() {
    let html = Scenario::with_events(vec![
        PortfolioEvent::Navigate(Section::Quiz),
        PortfolioEvent::SubmitAnswer {
            question: QuestionId::new(0),
            option: 1,
        },
        PortfolioEvent::SubmitAnswer {
            question: QuestionId::new(1),
            option: 1,
        },
        PortfolioEvent::SubmitAnswer {
            question: QuestionId::new(2),
            option: 2,
        },
        PortfolioEvent::FinishQuiz,
    ])
    .render();
    assert!(html.contains("Your Score: 2/3"), "{html}");
    assert!(html.contains("Great job!"), "{html}");
    assert!(html.contains("Retake Quiz"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_marks_the_pending_choice() {
    let mut selection = Selection::default();
    selection.choose_answer(QuestionId::new(0), 1);
    let html = Scenario {
        selection,
        ..at(Section::Quiz)
    }
    .render();
    assert!(html.contains("quiz-option--chosen"), "{html}");
    assert!(html.contains("Answered 0 of 3"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn verified_certificate_notice_is_rendered() {
    let html = Scenario::with_events(vec![
        PortfolioEvent::Navigate(Section::Certifications),
        PortfolioEvent::VerifyCertification(CertificationId::new(0)),
    ])
    .render();
    assert!(html.contains("Certificate verified!"), "{html}");
    assert!(html.contains("notice--success"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn algorithms_page_renders_tables() {
    let mut selection = Selection::default();
    selection.set_pascal_rows(5);
    selection.set_table_size(3);
    let html = Scenario {
        selection,
        ..at(Section::Algorithms)
    }
    .render();
    assert_eq!(html.matches("pascal-cell").count(), 15, "{html}");
    assert_eq!(html.matches("<td>").count(), 9, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn contact_page_lists_channels_and_subjects() {
    let html = at(Section::Contact).render();
    assert!(html.contains("📚 ResearchGate"), "{html}");
    assert!(html.contains("Research Collaboration"), "{html}");
    assert!(html.contains("Send Message"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn footer_panels_follow_selection() {
    let mut selection = Selection::default();
    selection.show_analytics = true;
    selection.feedback_open = true;
    let html = Scenario {
        selection,
        ..Scenario::default()
    }
    .render();
    assert!(html.contains("Unique Visitors"), "{html}");
    assert!(html.contains("Submit Rating"), "{html}");
}
