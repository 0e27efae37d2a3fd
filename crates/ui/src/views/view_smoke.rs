use learnflow_core::model::{Days, StudyPlan, StudyRequest};
use learnflow_core::planner::{CardFocus, Phase};
use learnflow_core::presentation::Variant;
use dioxus::prelude::Key;
use serde_json::json;

use super::PlannerIntent;
use super::planner::{activates_button, overlay_key_intent};
use super::test_harness::{
    BackendMode, PlannerHarness, setup_planner_harness, setup_planner_harness_with_plan,
};

async fn generate(harness: &mut PlannerHarness, topic: &str) {
    harness.dispatch(PlannerIntent::SetTopic(topic.to_string()));
    harness.dispatch(PlannerIntent::Generate);
    harness.settle().await;
}

#[tokio::test(flavor = "current_thread")]
async fn initial_render_shows_input_and_chrome() {
    let mut harness = setup_planner_harness(Variant::Modal, BackendMode::Healthy);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("LearnFlow"), "missing brand in {html}");
    assert!(html.contains("AI-Powered Study Planner"), "missing tagline in {html}");
    assert!(html.contains("7 days"), "missing default duration in {html}");
    assert!(html.contains("Generate Study Plan"), "missing submit label in {html}");
    assert!(html.contains("© 2023 LearnFlow"), "missing footer year in {html}");
    assert!(
        html.contains(Variant::Modal.footer_credit()),
        "missing footer credit in {html}"
    );
    assert!(!html.contains("Your Study Plan"), "unexpected results in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn calculus_plan_renders_every_section() {
    let mut harness = setup_planner_harness(Variant::Modal, BackendMode::Healthy);
    harness.rebuild();

    generate(&mut harness, "Calculus").await;

    let calls = harness.api.generate_calls();
    assert_eq!(calls, vec![StudyRequest::new("Calculus", Days::clamped(7))]);
    assert_eq!(
        serde_json::to_value(&calls[0]).expect("serialize"),
        json!({"topic": "Calculus", "days": 7})
    );

    let html = harness.render();
    assert!(html.contains("Your Study Plan"), "missing plan in {html}");
    assert!(html.contains("Day 1: limits"), "missing plan body in {html}");
    assert!(html.contains("Flashcards (1)"), "missing flashcard count in {html}");
    assert!(html.contains("Practice Questions"), "missing practice in {html}");
    assert!(html.contains("Differentiate x^2"), "missing practice body in {html}");
    assert!(html.contains("Stay Consistent"), "missing motivation in {html}");
    assert!(
        html.contains("\u{201c}Keep going\u{201d}"),
        "missing quoted motivation in {html}"
    );
    assert_eq!(harness.state().phase(), Phase::ResultReady);
}

#[tokio::test(flavor = "current_thread")]
async fn chosen_duration_is_sent_with_request() {
    let mut harness = setup_planner_harness(Variant::Modal, BackendMode::Healthy);
    harness.rebuild();

    harness.dispatch(PlannerIntent::SetDays(Days::clamped(1)));
    assert!(harness.render().contains("1 day"));

    generate(&mut harness, "Rust ownership").await;
    assert_eq!(
        harness.api.generate_calls(),
        vec![StudyRequest::new("Rust ownership", Days::clamped(1))]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn blank_topic_never_reaches_backend() {
    let mut harness = setup_planner_harness(Variant::Modal, BackendMode::Healthy);
    harness.rebuild();

    generate(&mut harness, "   ").await;

    assert!(harness.api.generate_calls().is_empty());
    assert_eq!(harness.state().phase(), Phase::Idle);
    let html = harness.render();
    assert!(!html.contains("Backend not running"), "unexpected alert in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unreachable_backend_alerts_once() {
    let mut harness = setup_planner_harness(Variant::Modal, BackendMode::Down);
    harness.rebuild();

    generate(&mut harness, "Calculus").await;

    let html = harness.render();
    assert_eq!(
        html.matches("Backend not running at localhost:8001.").count(),
        1,
        "expected one alert in {html}"
    );
    assert!(html.contains("Please start the LearnFlow server."));
    assert!(!html.contains("Your Study Plan"), "unexpected results in {html}");
    assert!(!harness.state().is_loading());

    harness.dispatch(PlannerIntent::DismissAlert);
    let html = harness.render();
    assert!(!html.contains("Backend not running"), "alert not dismissed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn modal_variant_flips_and_closes_cards() {
    let mut harness = setup_planner_harness(Variant::Modal, BackendMode::Healthy);
    harness.rebuild();
    generate(&mut harness, "Calculus").await;

    let html = harness.render();
    assert!(html.contains("flashcard-tile"), "missing card grid in {html}");
    assert!(!html.contains("flashcard-overlay"), "modal open too early in {html}");

    harness.dispatch(PlannerIntent::SelectCard(0));
    assert_eq!(harness.state().card_focus(), CardFocus::FrontShown(0));
    let html = harness.render();
    assert!(html.contains("Show Answer"), "missing flip control in {html}");
    assert!(!html.contains("is-flipped"), "card flipped too early in {html}");

    harness.dispatch(PlannerIntent::ToggleFlip);
    assert_eq!(harness.state().card_focus(), CardFocus::BackShown(0));
    assert!(harness.render().contains("is-flipped"));

    harness.dispatch(PlannerIntent::DismissCard);
    assert_eq!(harness.state().card_focus(), CardFocus::Closed);
    assert!(!harness.render().contains("flashcard-overlay"));

    harness.dispatch(PlannerIntent::SelectCard(9));
    assert_eq!(harness.state().card_focus(), CardFocus::Closed);
}

/// Mirrors the browser: a keydown bubbles to the overlay unless a button keeps it,
/// and a button that keeps it then fires its own click.
fn press_key(harness: &mut PlannerHarness, key: &Key, on_button: Option<PlannerIntent>) {
    match on_button {
        Some(click) if activates_button(key) => harness.dispatch(click),
        _ => {
            if let Some(intent) = overlay_key_intent(key) {
                harness.dispatch(intent);
            }
        }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn keyboard_flips_card_once_and_escape_closes() {
    let mut harness = setup_planner_harness(Variant::Modal, BackendMode::Healthy);
    harness.rebuild();
    generate(&mut harness, "Calculus").await;
    harness.dispatch(PlannerIntent::SelectCard(0));
    assert!(harness.render().contains(r#"id="flashcard-overlay""#));

    press_key(&mut harness, &Key::Enter, Some(PlannerIntent::ToggleFlip));
    assert_eq!(harness.state().card_focus(), CardFocus::BackShown(0));

    let space = Key::Character(" ".to_string());
    press_key(&mut harness, &space, Some(PlannerIntent::ToggleFlip));
    assert_eq!(harness.state().card_focus(), CardFocus::FrontShown(0));

    press_key(&mut harness, &Key::Enter, None);
    assert_eq!(harness.state().card_focus(), CardFocus::BackShown(0));

    press_key(&mut harness, &Key::Escape, Some(PlannerIntent::ToggleFlip));
    assert_eq!(harness.state().card_focus(), CardFocus::Closed);
    assert!(!harness.render().contains("flashcard-overlay"));
}

#[tokio::test(flavor = "current_thread")]
async fn inline_variant_lists_cards_and_celebrates() {
    let mut harness = setup_planner_harness(Variant::Inline, BackendMode::Healthy);
    harness.rebuild();
    generate(&mut harness, "Calculus").await;

    let html = harness.render();
    assert!(html.contains("Q: "), "missing question prefix in {html}");
    assert!(html.contains("A: "), "missing answer prefix in {html}");
    assert!(
        html.contains("The value a function approaches"),
        "missing inline answer in {html}"
    );
    assert!(!html.contains("flashcard-tile"), "unexpected card grid in {html}");
    assert!(html.contains("confetti-piece"), "missing confetti in {html}");
    assert!(
        html.contains(Variant::Inline.footer_credit()),
        "missing footer credit in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn export_saves_deck_to_download_dir() {
    let mut harness = setup_planner_harness(Variant::Modal, BackendMode::Healthy);
    harness.rebuild();
    generate(&mut harness, "Calculus").await;

    harness.dispatch(PlannerIntent::ExportDeck);
    harness.settle().await;

    let exports = harness.api.export_calls();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].len(), 1);
    let saved = harness.downloads.path().join("learnflow-deck.apkg");
    assert!(saved.exists(), "deck not written to {}", saved.display());
    let html = harness.render();
    assert!(html.contains("Deck saved to"), "missing saved notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_export_raises_alert() {
    let mut harness = setup_planner_harness(Variant::Modal, BackendMode::ExportBroken);
    harness.rebuild();
    generate(&mut harness, "Calculus").await;

    harness.dispatch(PlannerIntent::ExportDeck);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to generate Anki deck."),
        "missing export alert in {html}"
    );
    assert!(html.contains("Your Study Plan"), "results should survive in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn export_without_flashcards_sends_nothing() {
    let plan = StudyPlan {
        study_plan: "Read chapter one".to_string(),
        ..StudyPlan::default()
    };
    let mut harness =
        setup_planner_harness_with_plan(Variant::Modal, BackendMode::Healthy, plan);
    harness.rebuild();
    generate(&mut harness, "History").await;

    let html = harness.render();
    assert!(!html.contains("Export Anki Deck"), "unexpected export button in {html}");
    assert!(!html.contains("Practice Questions"), "unexpected practice in {html}");

    harness.dispatch(PlannerIntent::ExportDeck);
    harness.settle().await;
    assert!(harness.api.export_calls().is_empty());
    assert!(harness.state().alert().is_none());
}
