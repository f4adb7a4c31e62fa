use quiz_core::model::{AnswerMap, Choice, ChoiceId, Question, QuestionId};
use quiz_core::profile::{NO_PROFILE_MESSAGE, ProfileLetter, ProfileResult};
use serde_json::json;
use storage::repository::{InMemoryKeyValueStore, KeyValueStore};
use storage::{ANSWERS_KEY, INDEX_KEY};

use super::test_harness::{render_question, render_summary, setup_quiz_harness};
use crate::vm::{map_question, map_summary};

fn two_questions() -> serde_json::Value {
    json!([
        {
            "id": "q1",
            "question": "Plutôt mer ou montagne ?",
            "choices": [
                { "id": "q1-a", "text": "Mer" },
                { "id": "q1-b", "text": "Montagne" }
            ]
        },
        {
            "id": "q2",
            "question": "Plutôt livre ou film ?",
            "choices": [
                { "id": "q2-a", "text": "Livre" },
                { "id": "q2-b", "text": "Film" }
            ]
        }
    ])
}

#[test]
fn question_card_renders_progress_choices_and_actions() {
    let question = Question::new(
        "q1",
        "Plutôt mer ou montagne ?",
        vec![Choice::new("q1-a", "Mer"), Choice::new("q1-b", "Montagne")],
    );
    let answers: AnswerMap = [(QuestionId::new("q1"), ChoiceId::new("q1-b"))]
        .into_iter()
        .collect();

    let html = render_question(map_question(&question, 0, 2, &answers));

    assert!(html.contains("Question 1"), "missing heading in {html}");
    assert!(html.contains("1 / 2"), "missing progress in {html}");
    assert!(html.contains("Montagne"), "missing choice in {html}");
    assert!(html.contains("btn-primary text-white"), "missing active choice in {html}");
    assert!(html.contains("Recommencer"), "missing restart in {html}");
    assert!(html.contains("Prochain"), "missing next in {html}");
}

#[test]
fn last_question_card_offers_finish() {
    let question = Question::new("q2", "Fin ?", vec![Choice::new("q2-a", "Oui")]);
    let html = render_question(map_question(&question, 1, 2, &AnswerMap::new()));
    assert!(html.contains("Terminer"), "missing finish label in {html}");
    assert!(!html.contains("btn-primary text-white"), "unexpected highlight in {html}");
}

#[test]
fn injected_markup_is_rendered_as_text() {
    let question = Question::new(
        "q1",
        "<script>alert('q')</script>",
        vec![Choice::new("q1-a", "<script>alert('c')</script>")],
    );
    let html = render_question(map_question(&question, 0, 1, &AnswerMap::new()));

    assert!(!html.contains("<script>"), "unescaped markup in {html}");
    assert!(html.contains("&lt;script&gt;"), "missing escaped text in {html}");
}

#[test]
fn summary_card_renders_profile_letter() {
    let html = render_summary(map_summary(ProfileResult::Letter(ProfileLetter::B)));
    assert!(html.contains("Résultat"), "missing heading in {html}");
    assert!(html.contains("<b>B</b>"), "missing profile in {html}");
    assert!(html.contains("Recommencer"), "missing restart in {html}");
}

#[test]
fn summary_card_renders_placeholder_without_answers() {
    let html = render_summary(map_summary(ProfileResult::Unanswered));
    assert!(html.contains("supposé répondre"), "missing placeholder in {html}");
    assert!(NO_PROFILE_MESSAGE.contains("supposé répondre"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_saved_position() {
    let kv = InMemoryKeyValueStore::new();
    kv.set(INDEX_KEY, "1").await.unwrap();
    kv.set(ANSWERS_KEY, r#"{"q2":"q2-a"}"#).await.unwrap();

    let mut harness = setup_quiz_harness(two_questions(), kv);
    harness.rebuild();
    let html = harness.drive_until("Question 2").await;

    assert!(html.contains("Question 2"), "missing question in {html}");
    assert!(html.contains("2 / 2"), "missing progress in {html}");
    assert!(html.contains("Terminer"), "missing finish label in {html}");
    assert!(html.contains("btn-primary text-white"), "missing highlight in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let mut harness = setup_quiz_harness(json!([]), InMemoryKeyValueStore::new());
    harness.rebuild();
    let html = harness.drive_until("No questions available.").await;

    assert!(html.contains("No questions available."), "missing empty notice in {html}");
    assert!(!html.contains("Error loading questions"), "unexpected error in {html}");
    assert_eq!(harness.kv.get(INDEX_KEY).await.unwrap(), None);
}
