use dioxus::prelude::*;
use services::portfolio::{CertificationCard, PortfolioEvent};

#[component]
pub fn CertificationsView(
    cards: Vec<CertificationCard>,
    dispatch: Callback<PortfolioEvent>,
) -> Element {
    rsx! {
        div { class: "page certifications-page",
            h2 { class: "view-title", "🏅 Certifications" }
            div { class: "card-grid",
                for card in cards.iter().cloned() {
                    article { class: "card",
                        h3 { class: "card-title", "{card.certification.title}" }
                        p { class: "card-provider", "{card.certification.provider}" }
                        p { "{card.certification.description}" }
                        div { class: "chip-row",
                            for skill in card.certification.skills.iter() {
                                span { class: "chip", "{skill}" }
                            }
                        }
                        button {
                            class: "btn btn-small",
                            r#type: "button",
                            onclick: move |_| dispatch.call(PortfolioEvent::VerifyCertification(card.id)),
                            "Verify"
                        }
                    }
                }
            }
        }
    }
}
