use dioxus::document::eval;
use dioxus::prelude::*;

use learnflow_core::model::Flashcard;
use learnflow_core::planner::CardSide;

use super::scripts::{FLASHCARD_OVERLAY_ID, focus_script};
use super::view::PlannerIntent;

fn is_space(key: &Key) -> bool {
    matches!(key, Key::Character(c) if c == " ")
}

/// Keys a focused button turns into its own click.
pub(crate) fn activates_button(key: &Key) -> bool {
    *key == Key::Enter || is_space(key)
}

pub(crate) fn overlay_key_intent(key: &Key) -> Option<PlannerIntent> {
    match key {
        Key::Escape => Some(PlannerIntent::DismissCard),
        Key::Enter => Some(PlannerIntent::ToggleFlip),
        _ if is_space(key) => Some(PlannerIntent::ToggleFlip),
        _ => None,
    }
}

#[component]
pub(super) fn FlashcardModal(
    card: Flashcard,
    number: usize,
    side: CardSide,
    on_intent: Callback<PlannerIntent>,
) -> Element {
    let flipped = side == CardSide::Back;
    let card_class = if flipped {
        "flashcard-3d is-flipped"
    } else {
        "flashcard-3d"
    };

    rsx! {
        div {
            class: "modal-overlay flashcard-overlay",
            id: FLASHCARD_OVERLAY_ID,
            tabindex: "0",
            onmounted: move |_| {
                let _ = eval(&focus_script(FLASHCARD_OVERLAY_ID));
            },
            onclick: move |_| on_intent.call(PlannerIntent::DismissCard),
            onkeydown: move |evt| {
                let key = evt.data.key();
                if let Some(intent) = overlay_key_intent(&key) {
                    if is_space(&key) {
                        evt.prevent_default();
                    }
                    on_intent.call(intent);
                }
            },
            div {
                class: "flashcard-stage",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    r#type: "button",
                    aria_label: "Close flashcard",
                    onkeydown: move |evt| {
                        if activates_button(&evt.data.key()) {
                            evt.stop_propagation();
                        }
                    },
                    onclick: move |_| on_intent.call(PlannerIntent::DismissCard),
                    "✕"
                }
                div { class: "{card_class}",
                    div { class: "flashcard-face flashcard-front", aria_hidden: "{flipped}",
                        span { class: "flashcard-number", "Card {number}" }
                        h3 { class: "flashcard-face-title", "Question" }
                        p { class: "flashcard-face-text", "{card.question}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onkeydown: move |evt| {
                                if activates_button(&evt.data.key()) {
                                    evt.stop_propagation();
                                }
                            },
                            onclick: move |_| on_intent.call(PlannerIntent::ToggleFlip),
                            "Show Answer"
                        }
                    }
                    div { class: "flashcard-face flashcard-back", aria_hidden: "{!flipped}",
                        span { class: "flashcard-number", "Card {number}" }
                        h3 { class: "flashcard-face-title", "Answer" }
                        p { class: "flashcard-face-text", "{card.answer}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onkeydown: move |evt| {
                                if activates_button(&evt.data.key()) {
                                    evt.stop_propagation();
                                }
                            },
                            onclick: move |_| on_intent.call(PlannerIntent::ToggleFlip),
                            "Show Question"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn AlertModal(message: String, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div { class: "modal-overlay alert-overlay",
            div { class: "alert-dialog", role: "alertdialog", aria_modal: "true",
                for (index, line) in message.lines().enumerate() {
                    p { key: "{index}", class: "alert-message", "{line}" }
                }
                div { class: "alert-actions",
                    button {
                        id: "alert-ok",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
