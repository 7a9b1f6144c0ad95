use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use portfolio_core::model::{SessionState, Variant};
use portfolio_core::time::fixed_clock;
use services::portfolio::{Notice, PortfolioEvent, Selection};
use services::{InMemoryAssetStore, PortfolioService, RandomSource, builtin_catalog};

use crate::context::{UiApp, build_app_context};
use crate::views::PortfolioScreen;

struct TestApp {
    portfolio: Arc<PortfolioService>,
}

impl UiApp for TestApp {
    fn portfolio(&self) -> Arc<PortfolioService> {
        Arc::clone(&self.portfolio)
    }

    fn animation_step(&self) -> Duration {
        Duration::from_millis(1)
    }
}

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    app: Arc<TestApp>,
    state: SessionState,
    selection: Selection,
    notice: Option<Notice>,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    let state = use_signal(|| props.state.clone());
    let selection = use_signal(|| props.selection.clone());
    let notice = use_signal(|| props.notice.clone());
    rsx! { PortfolioScreen { state, selection, notice } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Session prepared by replaying events against the service before mounting.
pub struct Scenario {
    pub variant: Variant,
    pub assets: InMemoryAssetStore,
    pub events: Vec<PortfolioEvent>,
    pub selection: Selection,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            assets: InMemoryAssetStore::new(),
            events: Vec::new(),
            selection: Selection::default(),
        }
    }
}

impl Scenario {
    pub fn with_events(events: Vec<PortfolioEvent>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn mount(self) -> ViewHarness {
        let portfolio = PortfolioService::new(
            Arc::new(builtin_catalog().expect("builtin catalog")),
            Arc::new(self.assets),
            self.variant,
            RandomSource::Seeded(7),
        )
        .with_clock(fixed_clock());

        let mut state = portfolio.new_session();
        let mut notice = None;
        for event in self.events {
            let transition = portfolio.dispatch(&state, event).expect("scenario event");
            state = transition.state;
            notice = transition.notice;
        }

        let app = Arc::new(TestApp {
            portfolio: Arc::new(portfolio),
        });
        let dom = VirtualDom::new_with_props(
            ScreenHarness,
            ScreenHarnessProps {
                app,
                state,
                selection: self.selection,
                notice,
            },
        );
        ViewHarness { dom }
    }

    pub fn render(self) -> String {
        let mut harness = self.mount();
        harness.rebuild();
        harness.render()
    }
}
