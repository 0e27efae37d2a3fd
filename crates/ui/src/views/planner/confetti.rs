use dioxus::prelude::*;

use learnflow_core::presentation::ConfettiBurst;

#[component]
pub(super) fn ConfettiLayer(burst: ConfettiBurst) -> Element {
    rsx! {
        div { class: "confetti-layer", aria_hidden: "true",
            for (index, piece) in burst.pieces().iter().enumerate() {
                span {
                    key: "{burst.id()}-{index}",
                    class: "confetti-piece",
                    style: "{piece.style()}",
                }
            }
        }
    }
}

/// Show a fresh burst and clear it once it has fallen, unless a newer burst
/// replaced it meanwhile.
pub(super) fn launch_confetti(mut slot: Signal<Option<ConfettiBurst>>, id: u64) {
    slot.set(Some(ConfettiBurst::scatter(id, &mut rand::rng())));
    spawn(async move {
        tokio::time::sleep(ConfettiBurst::LIFETIME).await;
        let current = slot.peek().as_ref().map(ConfettiBurst::id);
        if current == Some(id) {
            slot.set(None);
        }
    });
}
