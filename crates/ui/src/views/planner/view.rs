use std::sync::Arc;
use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::debug;

use learnflow_core::model::Days;
use learnflow_core::planner::{GenerationOutcome, PlannerState};
use learnflow_core::presentation::{ConfettiBurst, CursorFollower, NavVisibility, Variant};

use super::chrome::{Footer, Header, Hero};
use super::confetti::{ConfettiLayer, launch_confetti};
use super::cursor::CursorOverlay;
use super::input::InputCard;
use super::modals::{AlertModal, FlashcardModal};
use super::results::ResultsPanel;
use super::scripts::{PLANNER_ROOT_ID, STUDY_PLAN_ID, scroll_into_view_script};
use crate::context::AppContext;
use crate::vm::{map_input, map_results};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlannerIntent {
    SetTopic(String),
    SetDays(Days),
    Generate,
    ExportDeck,
    SelectCard(usize),
    ToggleFlip,
    DismissCard,
    DismissAlert,
    DismissNotice,
}

#[component]
pub fn PlannerView() -> Element {
    let ctx = use_context::<AppContext>();
    let variant = ctx.variant();
    let cursor_effect = ctx.cursor_effect();
    let year = ctx.clock().current_year();

    let planner = use_signal(PlannerState::new);
    let confetti = use_signal(|| None::<ConfettiBurst>);
    let exports_in_flight = use_signal(|| 0_u32);
    let notice = use_signal(|| None::<String>);
    let mut nav = use_signal(NavVisibility::default);
    let mut cursor = use_signal(CursorFollower::default);

    let dispatch_intent = {
        let generation = ctx.generation();
        let deck_export = ctx.deck_export();
        use_callback(move |intent: PlannerIntent| {
            let mut planner = planner;
            let mut exports_in_flight = exports_in_flight;
            let mut notice = notice;

            match intent {
                PlannerIntent::SetTopic(topic) => planner.write().set_topic(topic),
                PlannerIntent::SetDays(days) => planner.write().set_days(days),
                PlannerIntent::Generate => {
                    let Some(ticket) = planner.write().begin_generation() else {
                        debug!("generation skipped: topic is blank");
                        return;
                    };
                    let generation = Arc::clone(&generation);
                    spawn(async move {
                        let completion = generation.run(ticket).await;
                        let token = completion.token;
                        let ready = matches!(completion.outcome, GenerationOutcome::Ready(_));
                        if !planner.write().complete_generation(completion) {
                            debug!(%token, "dropped superseded generation result");
                            return;
                        }
                        if ready {
                            let _ = eval(&scroll_into_view_script(STUDY_PLAN_ID));
                            if variant.celebrates() {
                                launch_confetti(confetti, token.value());
                            }
                        }
                    });
                }
                PlannerIntent::ExportDeck => {
                    let Some(cards) = planner.peek().export_payload() else {
                        debug!("export skipped: no flashcards");
                        return;
                    };
                    let deck_export = Arc::clone(&deck_export);
                    exports_in_flight += 1;
                    spawn(async move {
                        match deck_export.export(&cards).await {
                            Ok(path) => {
                                show_notice(notice, format!("Deck saved to {}", path.display()));
                            }
                            Err(_) => planner.write().fail_export(),
                        }
                        exports_in_flight -= 1;
                    });
                }
                PlannerIntent::SelectCard(index) => planner.write().select_card(index),
                PlannerIntent::ToggleFlip => planner.write().toggle_flip(),
                PlannerIntent::DismissCard => planner.write().dismiss_card(),
                PlannerIntent::DismissAlert => planner.write().dismiss_alert(),
                PlannerIntent::DismissNotice => notice.set(None),
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PlannerTestHandles>() {
                handles.register(dispatch_intent, planner);
            }
        }
    }

    let (input, results, focused, alert_message) = {
        let state = planner.read();
        let focused = state
            .focused_card()
            .cloned()
            .zip(state.card_focus().index().zip(state.card_focus().side()));
        (
            map_input(&state),
            map_results(&state),
            focused,
            state.alert().map(|alert| alert.message(ctx.backend_label())),
        )
    };
    let exporting = exports_in_flight() > 0;
    let root_class = if cursor_effect {
        "planner-root planner-root--custom-cursor"
    } else {
        "planner-root"
    };

    rsx! {
        div {
            class: "{root_class}",
            id: PLANNER_ROOT_ID,
            onscroll: move |evt| {
                let offset = f64::from(evt.data().scroll_top());
                nav.write().on_scroll(offset);
            },
            onmousemove: move |evt| {
                if cursor_effect {
                    let at = evt.client_coordinates();
                    cursor.write().track(at.x, at.y);
                }
            },

            Header { nav }

            main { class: "planner-main",
                Hero {}
                InputCard { input, on_intent: dispatch_intent }
                if let Some(results) = results {
                    ResultsPanel { results, variant, exporting, on_intent: dispatch_intent }
                }
                if let Some(text) = notice() {
                    div { class: "toast", role: "status",
                        span { "{text}" }
                        button {
                            class: "toast-close",
                            r#type: "button",
                            aria_label: "Dismiss",
                            onclick: move |_| dispatch_intent.call(PlannerIntent::DismissNotice),
                            "✕"
                        }
                    }
                }
            }

            Footer { year, credit: variant.footer_credit().to_string() }

            if variant == Variant::Modal {
                if let Some((card, (index, side))) = focused {
                    FlashcardModal { card, number: index + 1, side, on_intent: dispatch_intent }
                }
            }
            if let Some(burst) = confetti() {
                ConfettiLayer { burst }
            }
            if let Some(message) = alert_message {
                AlertModal {
                    message,
                    on_dismiss: move |()| dispatch_intent.call(PlannerIntent::DismissAlert),
                }
            }
            if cursor_effect {
                CursorOverlay { follower: cursor }
            }
        }
    }
}

fn show_notice(mut notice: Signal<Option<String>>, text: String) {
    notice.set(Some(text.clone()));
    spawn(async move {
        tokio::time::sleep(NOTICE_LIFETIME).await;
        if notice.peek().as_deref() == Some(text.as_str()) {
            notice.set(None);
        }
    });
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PlannerTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PlannerIntent>>>>,
    planner: Rc<RefCell<Option<Signal<PlannerState>>>>,
}

#[cfg(test)]
impl PlannerTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<PlannerIntent>,
        planner: Signal<PlannerState>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.planner.borrow_mut() = Some(planner);
    }

    pub(crate) fn dispatch(&self) -> Callback<PlannerIntent> {
        (*self.dispatch.borrow()).expect("planner dispatch registered")
    }

    pub(crate) fn planner(&self) -> Signal<PlannerState> {
        (*self.planner.borrow()).expect("planner state registered")
    }
}
