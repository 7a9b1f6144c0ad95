use dioxus::prelude::*;
use portfolio_core::model::SessionState;
use services::portfolio::{Notice, Page, PortfolioEvent, Selection, Transition};

use crate::context::AppContext;
use crate::views::chrome::{FooterBar, Sidebar};
use crate::views::notice::NoticeBanner;
use crate::views::pages::{
    AboutView, AlgorithmsView, CertificationsView, ContactView, HomeView, ProjectsView, QuizView,
    SkillsLabView, SkillsView,
};

/// Entry component: one fresh session per mounted window.
#[component]
pub fn PortfolioRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_signal(|| ctx.portfolio().new_session());
    let selection = use_signal(Selection::default);
    let notice = use_signal(|| None::<Notice>);

    rsx! {
        PortfolioScreen { state, selection, notice }
    }
}

/// Draws the current view and routes every UI event through the service.
#[component]
pub fn PortfolioScreen(
    state: Signal<SessionState>,
    selection: Signal<Selection>,
    notice: Signal<Option<Notice>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.portfolio();

    let dispatch = {
        let service = service.clone();
        use_callback(move |event: PortfolioEvent| {
            let mut state = state;
            let mut notice = notice;
            let current = state.peek().clone();
            match service.dispatch(&current, event) {
                Ok(Transition {
                    state: next,
                    notice: next_notice,
                }) => {
                    state.set(next);
                    notice.set(next_notice);
                }
                Err(err) => notice.set(Some(Notice::from_error(&err))),
            }
        })
    };

    let view = service.render(&state.read(), &selection.read());
    let theme_class = view.chrome.theme.css_class();
    let charts = view.chrome.charts;
    let footer = view.chrome.footer.clone();
    let chrome = view.chrome;
    let page = view.page;
    let current_notice = notice();

    rsx! {
        div { class: "portfolio {theme_class}",
            Sidebar { chrome, dispatch }
            main { class: "portfolio-main",
                if let Some(current) = current_notice {
                    NoticeBanner { notice: current }
                }
                match page {
                    Page::Home(page) => rsx! { HomeView { page, dispatch } },
                    Page::About(page) => rsx! { AboutView { page, selection } },
                    Page::Skills(page) => rsx! { SkillsView { page, charts, selection, dispatch } },
                    Page::Certifications(cards) => rsx! { CertificationsView { cards, dispatch } },
                    Page::Projects(page) => rsx! { ProjectsView { page, selection } },
                    Page::Quiz(page) => rsx! { QuizView { page, selection, dispatch } },
                    Page::SkillsLab(page) => rsx! { SkillsLabView { page, dispatch } },
                    Page::Algorithms(page) => rsx! { AlgorithmsView { page, selection } },
                    Page::Contact(page) => rsx! { ContactView { page, dispatch } },
                }
                FooterBar { footer, selection, dispatch }
            }
        }
    }
}
