use dioxus::prelude::*;
use portfolio_core::algo::SortFrame;
use services::portfolio::{PortfolioEvent, SkillsLabPage};

use crate::context::AppContext;
use crate::views::chart::BarChart;
use crate::vm::{frame_bars, progress_style, proficiency_bars};

#[component]
pub fn SkillsLabView(page: SkillsLabPage, dispatch: Callback<PortfolioEvent>) -> Element {
    let ctx = use_context::<AppContext>();
    let frame = use_signal(|| None::<SortFrame>);
    let running = use_signal(|| false);

    let start = {
        let ctx = ctx.clone();
        move |_: MouseEvent| {
            let mut frame = frame;
            let mut running = running;
            if *running.peek() {
                return;
            }
            running.set(true);
            let animation = ctx.portfolio().sort_animation();
            let step = ctx.animation_step();
            tracing::debug!(steps = animation.total_steps(), "sort animation started");
            spawn(async move {
                for next in animation {
                    frame.set(Some(next));
                    tokio::time::sleep(step).await;
                }
                running.set(false);
                dispatch.call(PortfolioEvent::AnimationFinished);
            });
        }
    };

    let current = frame();
    let step_label = current
        .as_ref()
        .map(|f| format!("Step {} of {}", f.step, f.total_steps));

    rsx! {
        div { class: "page skills-lab-page",
            h2 { class: "view-title", "📊 Skills Lab" }
            h3 { "Core Competencies" }
            BarChart { bars: proficiency_bars(&page.competencies), backend: page.charts }
            h3 { "🧬 Sequence Alignment Animation" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: running(),
                onclick: start,
                "Run Alignment"
            }
            div { class: "progress",
                div { class: "progress-fill", style: "{progress_style(current.as_ref())}" }
            }
            if let Some(label) = step_label {
                p { class: "progress-label", "{label}" }
            }
            if let Some(current) = current.as_ref() {
                BarChart { bars: frame_bars(current), backend: page.charts }
            }
        }
    }
}
