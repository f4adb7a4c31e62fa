use dioxus::prelude::*;

#[component]
pub fn LoadingNotice() -> Element {
    rsx! {
        p { class: "text-center text-muted", "Loading..." }
    }
}

#[component]
pub fn EmptyNotice() -> Element {
    rsx! {
        div { class: "text-center", "No questions available." }
    }
}

#[component]
pub fn ErrorNotice(detail: String) -> Element {
    rsx! {
        div { class: "text-red-600", "Error loading questions: {detail}" }
    }
}
