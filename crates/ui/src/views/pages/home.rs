use dioxus::prelude::*;
use services::portfolio::{HomePage, PortfolioEvent};

use crate::views::image::Picture;

#[component]
pub fn HomeView(page: HomePage, dispatch: Callback<PortfolioEvent>) -> Element {
    rsx! {
        div { class: "page home-page",
            div { class: "hero",
                Picture { source: page.picture.clone() }
                div { class: "hero-text",
                    h1 { class: "hero-name", "{page.name}" }
                    p { class: "hero-title", "{page.title}" }
                    p { class: "hero-tagline", "{page.tagline}" }
                    p { class: "hero-contact", "{page.contact_line}" }
                }
            }
            p { class: "greeting", "{page.greeting}" }
            div { class: "link-row",
                for channel in page.links.iter().copied() {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(PortfolioEvent::OpenProfileLink(channel)),
                        "{channel.label()}"
                    }
                }
            }
        }
    }
}
