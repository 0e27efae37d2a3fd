use dioxus::prelude::*;

use learnflow_core::model::Days;

use super::view::PlannerIntent;
use crate::vm::InputVm;

#[component]
pub(super) fn InputCard(input: InputVm, on_intent: Callback<PlannerIntent>) -> Element {
    rsx! {
        section { class: "card input-card", id: "planner-input",
            h2 { class: "card-title", "What do you want to learn?" }
            label { class: "field-label", r#for: "topic-input", "Topic" }
            input {
                id: "topic-input",
                class: "topic-input",
                r#type: "text",
                placeholder: "e.g. Calculus, Spanish verbs, Rust ownership",
                value: "{input.topic}",
                oninput: move |evt| on_intent.call(PlannerIntent::SetTopic(evt.value())),
                onkeydown: move |evt| {
                    if evt.data.key() == Key::Enter {
                        evt.prevent_default();
                        on_intent.call(PlannerIntent::Generate);
                    }
                },
            }
            div { class: "days-row",
                label { class: "field-label", r#for: "days-input", "Study duration" }
                span { class: "days-readout", "{input.days_label}" }
            }
            input {
                id: "days-input",
                class: "days-slider",
                r#type: "range",
                min: "{input.days_min}",
                max: "{input.days_max}",
                step: "1",
                value: "{input.days}",
                oninput: move |evt| {
                    if let Ok(days) = Days::parse(&evt.value()) {
                        on_intent.call(PlannerIntent::SetDays(days));
                    }
                },
            }
            div { class: "days-scale",
                span { "{input.days_min} day" }
                span { "{input.days_max} days" }
            }
            button {
                class: "btn btn-primary generate-button",
                r#type: "button",
                disabled: input.submit_disabled,
                onclick: move |_| on_intent.call(PlannerIntent::Generate),
                "{input.submit_label}"
            }
        }
    }
}
