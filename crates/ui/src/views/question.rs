use dioxus::prelude::*;

use crate::vm::{ChoiceVm, QuestionVm, QuizIntent};

#[component]
pub fn QuestionCard(vm: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let QuestionVm {
        index,
        heading,
        progress,
        text,
        choices,
        next_label,
    } = vm;

    rsx! {
        div { class: "card bg-base-100 shadow-md p-6",
            div { class: "mb-4 flex justify-between items-start",
                h2 { class: "text-xl font-semibold", "{heading}" }
                div { class: "text-sm text-muted", "{progress}" }
            }
            div { class: "mb-6",
                div { class: "text-lg mb-3", "{text}" }
                div { class: "grid gap-2",
                    for (position, choice) in choices.into_iter().enumerate() {
                        ChoiceButton { key: "{position}", index, choice, on_intent }
                    }
                }
            }
            div { class: "flex justify-between mt-6",
                button {
                    id: "resetBtn",
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Recommencer"
                }
                button {
                    id: "nextBtn",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next { index }),
                    "{next_label}"
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(index: usize, choice: ChoiceVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let variant = if choice.active {
        "btn-primary text-white"
    } else {
        "btn-ghost"
    };
    let choice_id = choice.id.clone();

    rsx! {
        button {
            class: "choice btn {variant} w-full text-left normal-case",
            r#type: "button",
            "data-choice": "{choice.id}",
            onclick: move |_| {
                on_intent.call(QuizIntent::Select {
                    index,
                    choice: choice_id.clone(),
                });
            },
            "{choice.text}"
        }
    }
}
