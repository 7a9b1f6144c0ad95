use dioxus::prelude::*;
use portfolio_core::model::{ChartBackend, SkillCategory, SkillLayout};
use services::portfolio::{PortfolioEvent, Selection, SkillsPage};

use crate::views::chart::BarChart;
use crate::vm::proficiency_bars;

#[component]
pub fn SkillsView(
    page: SkillsPage,
    charts: ChartBackend,
    selection: Signal<Selection>,
    dispatch: Callback<PortfolioEvent>,
) -> Element {
    let selected_slug = page.selected.slug();
    rsx! {
        div { class: "page skills-page",
            h2 { class: "view-title", "🔬 Skills" }
            label { class: "field",
                span { class: "field-label", "Choose a skill category" }
                select {
                    class: "input",
                    value: "{selected_slug}",
                    onchange: move |evt: FormEvent| {
                        if let Some(category) = SkillCategory::from_slug(&evt.value()) {
                            let mut selection = selection;
                            selection.write().skill_category = category;
                        }
                    },
                    for category in page.categories.iter().copied() {
                        option {
                            value: "{category.slug()}",
                            selected: category == page.selected,
                            "{category.label()}"
                        }
                    }
                }
            }
            h3 { "{page.selected.label()}" }
            match page.layout {
                SkillLayout::Tags => rsx! {
                    div { class: "skill-tags",
                        for skill in page.skills.iter().cloned() {
                            div { class: "skill-tag",
                                span { class: "skill-name", "{skill.name}" }
                                button {
                                    class: "btn btn-small",
                                    r#type: "button",
                                    onclick: move |_| dispatch.call(PortfolioEvent::ExploreSkill(skill.id)),
                                    "Explore"
                                }
                            }
                        }
                    }
                },
                SkillLayout::Bars => rsx! {
                    BarChart { bars: proficiency_bars(&page.skills), backend: charts }
                },
            }
        }
    }
}
