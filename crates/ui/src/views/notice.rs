use dioxus::prelude::*;
use services::portfolio::{Notice, NoticeTone};

fn tone_class(tone: NoticeTone) -> &'static str {
    match tone {
        NoticeTone::Success => "notice notice--success",
        NoticeTone::Info => "notice notice--info",
        NoticeTone::Error => "notice notice--error",
    }
}

#[component]
pub fn NoticeBanner(notice: Notice) -> Element {
    let class = tone_class(notice.tone);
    rsx! {
        div { class: "{class}", role: "status",
            p { class: "notice-text", "{notice.text}" }
            if !notice.details.is_empty() {
                dl { class: "notice-details",
                    for row in notice.details.iter() {
                        dt { "{row.label}" }
                        dd { "{row.value}" }
                    }
                }
            }
            if notice.celebrate {
                div { class: "celebrate", aria_hidden: "true", "🎈🎈🎈" }
            }
        }
    }
}
