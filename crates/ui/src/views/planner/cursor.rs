use std::time::Duration;

use dioxus::prelude::*;

use learnflow_core::presentation::CursorFollower;

const FRAME: Duration = Duration::from_millis(16);

/// Dot and trailing ring drawn over the page in place of the native cursor.
///
/// The easing loop lives as long as the overlay is mounted.
#[component]
pub(super) fn CursorOverlay(follower: Signal<CursorFollower>) -> Element {
    let task = use_hook(move || {
        spawn(async move {
            let mut follower = follower;
            loop {
                tokio::time::sleep(FRAME).await;
                if !follower.peek().is_settled() {
                    follower.write().step();
                }
            }
        })
    });
    use_drop(move || task.cancel());

    let (dot, ring) = {
        let follower = follower.read();
        (follower.dot_transform(), follower.ring_transform())
    };

    rsx! {
        div { class: "cursor-layer", aria_hidden: "true",
            div { class: "cursor-ring", style: "transform: {ring};" }
            div { class: "cursor-dot", style: "transform: {dot};" }
        }
    }
}
