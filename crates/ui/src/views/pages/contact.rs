use dioxus::prelude::*;
use portfolio_core::model::{ContactDraft, ContactSubject};
use services::portfolio::{ContactPage, PortfolioEvent};

#[component]
pub fn ContactView(page: ContactPage, dispatch: Callback<PortfolioEvent>) -> Element {
    let mut draft = use_signal(ContactDraft::default);
    let subject_label = draft.read().subject.label();

    rsx! {
        div { class: "page contact-page",
            h2 { class: "view-title", "📞 Get In Touch" }
            div { class: "link-row",
                for channel in page.channels.iter().copied() {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(PortfolioEvent::OpenChannel(channel)),
                        "{channel.label()}"
                    }
                }
            }
            form {
                class: "contact-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let submitted = draft.peek().clone();
                    dispatch.call(PortfolioEvent::SubmitContact(submitted));
                },
                label { class: "field",
                    span { class: "field-label", "Your Name *" }
                    input {
                        class: "input",
                        r#type: "text",
                        value: "{draft.read().name}",
                        oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                    }
                }
                label { class: "field",
                    span { class: "field-label", "Your Email *" }
                    input {
                        class: "input",
                        r#type: "email",
                        value: "{draft.read().email}",
                        oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                    }
                }
                label { class: "field",
                    span { class: "field-label", "Subject" }
                    select {
                        class: "input",
                        value: "{subject_label}",
                        onchange: move |evt: FormEvent| {
                            if let Some(subject) = ContactSubject::from_label(&evt.value()) {
                                draft.write().subject = subject;
                            }
                        },
                        for subject in page.subjects.iter().copied() {
                            option {
                                value: "{subject.label()}",
                                selected: subject.label() == subject_label,
                                "{subject.label()}"
                            }
                        }
                    }
                }
                label { class: "field",
                    span { class: "field-label", "Message *" }
                    textarea {
                        class: "input",
                        rows: "5",
                        value: "{draft.read().message}",
                        oninput: move |evt: FormEvent| draft.write().message = evt.value(),
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", "📨 Send Message" }
            }
        }
    }
}
