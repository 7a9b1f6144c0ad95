use dioxus::prelude::*;
use portfolio_core::model::QuestionId;
use services::portfolio::{PortfolioEvent, QuizPage, Selection};

use crate::vm::{option_mark, progress_label};

#[component]
pub fn QuizView(
    page: QuizPage,
    selection: Signal<Selection>,
    dispatch: Callback<PortfolioEvent>,
) -> Element {
    rsx! {
        div { class: "page quiz-page",
            h2 { class: "view-title", "🎯 Biotech Quiz" }
            match page {
                QuizPage::InProgress { prompts, current, score, answered, total } => {
                    let question_id = current.id;
                    let current_index = question_id.index();
                    let submit_disabled = current.pending.is_none() || current.answered.is_some();
                    rsx! {
                        p { class: "quiz-progress", "{progress_label(answered, total)} · Score {score}" }
                        label { class: "field",
                            span { class: "field-label", "Pick a question" }
                            select {
                                class: "input",
                                value: "{current_index}",
                                onchange: move |evt: FormEvent| {
                                    if let Ok(index) = evt.value().parse::<usize>() {
                                        let mut selection = selection;
                                        selection.write().question = QuestionId::new(index);
                                    }
                                },
                                for (id, prompt) in prompts.iter() {
                                    option {
                                        value: "{id.index()}",
                                        selected: *id == question_id,
                                        "{prompt}"
                                    }
                                }
                            }
                        }
                        fieldset { class: "quiz-question",
                            legend { "{current.prompt}" }
                            for (index, option) in current.options.iter().enumerate() {
                                label { class: "{option_mark(&current, index).class()}",
                                    input {
                                        r#type: "radio",
                                        name: "quiz-{current_index}",
                                        checked: current.pending == Some(index),
                                        disabled: current.answered.is_some(),
                                        onchange: move |_| {
                                            let mut selection = selection;
                                            selection.write().choose_answer(question_id, index);
                                        },
                                    }
                                    span { "{option}" }
                                }
                            }
                        }
                        div { class: "quiz-actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: submit_disabled,
                                onclick: move |_| {
                                    let pending = selection.peek().pending_answer(question_id);
                                    if let Some(option) = pending {
                                        dispatch.call(PortfolioEvent::SubmitAnswer { question: question_id, option });
                                    }
                                },
                                "Submit Answer"
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| dispatch.call(PortfolioEvent::FinishQuiz),
                                "Finish Quiz"
                            }
                        }
                    }
                }
                QuizPage::Completed { banner, tier, .. } => rsx! {
                    div { class: "quiz-complete",
                        p { class: "quiz-banner", "{banner}" }
                        p { class: "quiz-tier", "{tier.message()}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut selection = selection;
                                selection.write().clear_answers();
                                dispatch.call(PortfolioEvent::RetakeQuiz);
                            },
                            "🔄 Retake Quiz"
                        }
                    }
                },
            }
        }
    }
}
