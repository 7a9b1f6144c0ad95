use dioxus::prelude::*;
use portfolio_core::model::{Metric, NavStyle, Rating, Section};
use services::portfolio::{Chrome, Footer, PortfolioEvent, Selection};

#[component]
pub fn MetricCard(metric: Metric) -> Element {
    rsx! {
        div { class: "metric",
            span { class: "metric-label", "{metric.label}" }
            span { class: "metric-value", "{metric.value}" }
            if let Some(delta) = metric.delta.as_ref() {
                span { class: "metric-delta", "{delta}" }
            }
        }
    }
}

#[component]
pub fn Sidebar(chrome: Chrome, dispatch: Callback<PortfolioEvent>) -> Element {
    let current_slug = chrome.current.slug();
    rsx! {
        aside { class: "sidebar",
            h2 { class: "sidebar-title", "🧬 Biotech Portfolio" }
            label { class: "field",
                span { class: "field-label", "👋 Your name" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Enter your name",
                    value: "{chrome.visitor_name}",
                    oninput: move |evt: FormEvent| {
                        dispatch.call(PortfolioEvent::SetVisitorName(evt.value()));
                    },
                }
            }
            if let Some(welcome) = chrome.welcome.as_ref() {
                p { class: "sidebar-welcome", "{welcome}" }
            }
            nav { class: "sidebar-nav",
                match chrome.nav {
                    NavStyle::Sidebar => rsx! {
                        for item in chrome.sections.iter().cloned() {
                            button {
                                class: if item.active { "nav-btn nav-btn--active" } else { "nav-btn" },
                                r#type: "button",
                                onclick: move |_| dispatch.call(PortfolioEvent::Navigate(item.section)),
                                "{item.label}"
                            }
                        }
                    },
                    NavStyle::Dropdown => rsx! {
                        select {
                            class: "nav-select",
                            value: "{current_slug}",
                            onchange: move |evt: FormEvent| {
                                match evt.value().parse::<Section>() {
                                    Ok(section) => dispatch.call(PortfolioEvent::Navigate(section)),
                                    Err(err) => tracing::warn!(error = %err, "unknown section in selector"),
                                }
                            },
                            for item in chrome.sections.iter() {
                                option {
                                    value: "{item.section.slug()}",
                                    selected: item.active,
                                    "{item.label}"
                                }
                            }
                        }
                    },
                }
            }
            section { class: "sidebar-stats",
                h3 { "📊 Biotech Stats" }
                for metric in chrome.stats.iter().cloned() {
                    MetricCard { metric }
                }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| dispatch.call(PortfolioEvent::RandomFact),
                "🎲 Random Biotech Fact"
            }
        }
    }
}

#[component]
pub fn FooterBar(
    footer: Footer,
    selection: Signal<Selection>,
    dispatch: Callback<PortfolioEvent>,
) -> Element {
    let rating_value = footer.rating.value();
    rsx! {
        footer { class: "footer",
            div { class: "footer-actions",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| dispatch.call(PortfolioEvent::ChangeTheme),
                    "🎨 Change Theme"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        let mut selection = selection;
                        let showing = selection.peek().show_analytics;
                        selection.write().show_analytics = !showing;
                        if !showing {
                            dispatch.call(PortfolioEvent::ViewAnalytics);
                        }
                    },
                    "📈 View Analytics"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        let mut selection = selection;
                        selection.write().feedback_open = true;
                        dispatch.call(PortfolioEvent::OpenFeedback);
                    },
                    "💌 Give Feedback"
                }
            }
            if let Some(metrics) = footer.analytics.as_ref() {
                div { class: "metric-row",
                    for metric in metrics.iter().cloned() {
                        MetricCard { metric }
                    }
                }
            }
            if let Some(ratings) = footer.feedback.as_ref() {
                div { class: "feedback",
                    label { class: "field",
                        span { class: "field-label", "Rate this portfolio" }
                        select {
                            class: "input",
                            value: "{rating_value}",
                            onchange: move |evt: FormEvent| {
                                let rating = evt.value().parse::<u8>().ok().and_then(Rating::from_value);
                                if let Some(rating) = rating {
                                    let mut selection = selection;
                                    selection.write().rating = rating;
                                }
                            },
                            for rating in ratings.iter().copied() {
                                option {
                                    value: "{rating.value()}",
                                    selected: rating == footer.rating,
                                    "{rating.stars()}"
                                }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let rating = selection.peek().rating;
                            dispatch.call(PortfolioEvent::RateFeedback(rating));
                        },
                        "Submit Rating"
                    }
                }
            }
            p { class: "footer-copy", "{footer.copyright}" }
            p { class: "footer-tagline", "{footer.tagline}" }
            if let Some(thanks) = footer.thanks.as_ref() {
                p { class: "footer-thanks", "{thanks}" }
            }
        }
    }
}
