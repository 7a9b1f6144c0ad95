use dioxus::prelude::*;
use services::portfolio::{ProjectsPage, Selection};

use crate::views::chrome::MetricCard;
use crate::views::image::Picture;
use crate::vm::markdown_to_html;

#[component]
pub fn ProjectsView(page: ProjectsPage, selection: Signal<Selection>) -> Element {
    rsx! {
        div { class: "page projects-page",
            h2 { class: "view-title", "💼 Research Projects" }
            div { class: "tabs", role: "tablist",
                for tab in page.tabs.iter().cloned() {
                    button {
                        class: if tab.active { "tab tab--active" } else { "tab" },
                        r#type: "button",
                        role: "tab",
                        onclick: move |_| {
                            let mut selection = selection;
                            selection.write().select_project(tab.id);
                        },
                        "{tab.title}"
                    }
                }
            }
            if let Some(detail) = page.current.as_ref() {
                article { class: "project",
                    div { class: "project-body",
                        div { class: "project-text",
                            h3 { "{detail.project.title}" }
                            p { class: "project-kind", "{detail.project.kind}" }
                            div {
                                class: "project-description",
                                dangerous_inner_html: markdown_to_html(&detail.project.description),
                            }
                            p { class: "project-impact", "Impact: {detail.project.impact}" }
                        }
                        Picture { source: detail.picture.clone() }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut selection = selection;
                            let open = selection.peek().show_project_details;
                            selection.write().show_project_details = !open;
                        },
                        if detail.show_details { "Hide Technical Details" } else { "View Technical Details" }
                    }
                    if detail.show_details {
                        div { class: "chip-row",
                            for tech in detail.project.technologies.iter() {
                                span { class: "chip", "{tech}" }
                            }
                        }
                    }
                    div { class: "metric-row",
                        for metric in detail.project.metrics.iter().cloned() {
                            MetricCard { metric }
                        }
                    }
                }
            } else {
                p { class: "empty", "No projects yet." }
            }
        }
    }
}
