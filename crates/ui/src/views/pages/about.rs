use dioxus::prelude::*;
use services::portfolio::{AboutPage, Selection};

use crate::vm::inline_markdown_to_html;

#[component]
pub fn AboutView(page: AboutPage, selection: Signal<Selection>) -> Element {
    rsx! {
        div { class: "page about-page",
            h2 { class: "view-title", "👨‍🔬 About Me" }
            div { class: "toggle-row",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut selection = selection;
                        let open = selection.peek().show_journey;
                        selection.write().show_journey = !open;
                    },
                    "📜 My Biotech Journey"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut selection = selection;
                        let open = selection.peek().show_interests;
                        selection.write().show_interests = !open;
                    },
                    "🔬 Research Interests"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut selection = selection;
                        let open = selection.peek().show_fun_facts;
                        selection.write().show_fun_facts = !open;
                    },
                    "🎉 Fun Facts"
                }
            }
            if let Some(journey) = page.journey.as_ref() {
                ul { class: "timeline",
                    for entry in journey.iter() {
                        li { class: "timeline-entry",
                            span { class: "timeline-year", "{entry.year}" }
                            span {
                                class: "timeline-text",
                                dangerous_inner_html: inline_markdown_to_html(&entry.text),
                            }
                        }
                    }
                }
            }
            if let Some(interests) = page.interests.as_ref() {
                p { class: "interests", "{interests}" }
            }
            if let Some(facts) = page.fun_facts.as_ref() {
                ul { class: "facts",
                    for fact in facts.iter() {
                        li { "{fact}" }
                    }
                }
            }
        }
    }
}
