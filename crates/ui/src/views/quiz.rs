use dioxus::prelude::*;
use services::Screen;

use crate::context::AppContext;
use crate::views::notices::{EmptyNotice, ErrorNotice, LoadingNotice};
use crate::views::question::QuestionCard;
use crate::views::summary::SummaryCard;
use crate::vm::{QuizIntent, apply_intent, map_question, map_summary};

/// Whole-page quiz: loads once, then redraws the full card on every change.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let engine = ctx.engine();

    let screen = use_signal(|| Screen::Loading);
    let action_error = use_signal(|| None::<String>);

    let init_engine = engine.clone();
    use_future(move || {
        let engine = init_engine.clone();
        let mut screen = screen;
        async move {
            let next = engine.initialize().await;
            screen.set(next);
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let engine = engine.clone();
        let mut screen = screen;
        let mut action_error = action_error;
        spawn(async move {
            match apply_intent(&engine, intent).await {
                Ok(next) => {
                    action_error.set(None);
                    screen.set(next);
                }
                Err(err) => {
                    tracing::error!(error = %err, "quiz action failed");
                    action_error.set(Some(err.to_string()));
                }
            }
        });
    });

    let body = match screen.read().clone() {
        Screen::Loading => rsx! { LoadingNotice {} },
        Screen::Error { detail } => rsx! { ErrorNotice { detail } },
        Screen::Empty => rsx! { EmptyNotice {} },
        Screen::Question {
            index,
            total,
            question,
            answers,
        } => rsx! {
            QuestionCard {
                vm: map_question(&question, index, total, &answers),
                on_intent: dispatch_intent,
            }
        },
        Screen::Summary { profile } => rsx! {
            SummaryCard { vm: map_summary(profile), on_intent: dispatch_intent }
        },
    };

    let action_message = action_error.read().clone();

    rsx! {
        div { class: "max-w-2xl w-full",
            if let Some(err) = action_message {
                p { class: "text-red-600", "Something went wrong. Please try again. ({err})" }
            }
            {body}
        }
    }
}
