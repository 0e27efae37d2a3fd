use dioxus::prelude::*;

use learnflow_core::presentation::Variant;

use super::scripts::STUDY_PLAN_ID;
use super::view::PlannerIntent;
use crate::vm::{FlashcardVm, ResultsVm, RichText};

#[component]
pub(super) fn ResultsPanel(
    results: ResultsVm,
    variant: Variant,
    exporting: bool,
    on_intent: Callback<PlannerIntent>,
) -> Element {
    rsx! {
        div { class: "results",
            section { class: "card result-section", id: STUDY_PLAN_ID,
                h2 { class: "section-title", "Your Study Plan" }
                div { class: "study-plan-body",
                    RichBlock { text: results.study_plan.clone() }
                }
            }

            if !results.flashcards.is_empty() {
                section { class: "card result-section", id: "flashcards",
                    div { class: "section-head",
                        h2 { class: "section-title", "{results.flashcards_heading}" }
                        button {
                            class: "btn btn-secondary export-button",
                            r#type: "button",
                            onclick: move |_| on_intent.call(PlannerIntent::ExportDeck),
                            if exporting { "Exporting..." } else { "Export Anki Deck" }
                        }
                    }
                    {
                        match variant {
                            Variant::Modal => rsx! {
                                FlashcardGrid { cards: results.flashcards.clone(), on_intent }
                            },
                            Variant::Inline => rsx! {
                                InlineFlashcards { cards: results.flashcards.clone() }
                            },
                        }
                    }
                }
            }

            if let Some(practice) = results.practice.clone() {
                section { class: "card result-section", id: "practice",
                    h2 { class: "section-title", "Practice Questions" }
                    div { class: "practice-body",
                        RichBlock { text: practice }
                    }
                }
            }

            if let Some(quote) = results.motivation_quote.clone() {
                section { class: "motivation", id: "motivation",
                    h2 { class: "motivation-title", "Stay Consistent" }
                    blockquote { class: "motivation-quote", "{quote}" }
                }
            }
        }
    }
}

#[component]
fn RichBlock(text: RichText) -> Element {
    match text {
        RichText::Html(html) => rsx! {
            div { class: "rich-text", dangerous_inner_html: "{html}" }
        },
        RichText::Plain(plain) => rsx! {
            div { class: "plain-text", "{plain}" }
        },
    }
}

#[component]
fn FlashcardGrid(cards: Vec<FlashcardVm>, on_intent: Callback<PlannerIntent>) -> Element {
    rsx! {
        div { class: "flashcard-grid",
            for card in cards {
                button {
                    key: "{card.index}",
                    class: "flashcard-tile",
                    r#type: "button",
                    onclick: move |_| on_intent.call(PlannerIntent::SelectCard(card.index)),
                    span { class: "flashcard-number", "{card.number_label}" }
                    p { class: "flashcard-preview", "{card.question_preview}" }
                    span { class: "flashcard-hint", "Click to study" }
                }
            }
        }
    }
}

#[component]
fn InlineFlashcards(cards: Vec<FlashcardVm>) -> Element {
    rsx! {
        div { class: "flashcard-list",
            for card in cards {
                article { key: "{card.index}", class: "flashcard-inline",
                    p { class: "flashcard-question",
                        strong { "Q: " }
                        "{card.question}"
                    }
                    p { class: "flashcard-answer",
                        strong { "A: " }
                        "{card.answer}"
                    }
                }
            }
        }
    }
}
