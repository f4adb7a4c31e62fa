use dioxus::prelude::*;

use crate::vm::{QuizIntent, SummaryVm};

#[component]
pub fn SummaryCard(vm: SummaryVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-md p-6",
            h2 { class: "text-xl font-semibold mb-4", "{vm.heading}" }
            div { class: "space-y-2",
                "Vous correspondez majoritairement au profil "
                b { "{vm.profile}" }
            }
            div { class: "mt-6 flex justify-end",
                button {
                    id: "clearBtn",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Recommencer"
                }
            }
        }
    }
}
