use dioxus::prelude::*;

use learnflow_core::presentation::NavVisibility;

#[component]
pub(super) fn Header(nav: Signal<NavVisibility>) -> Element {
    let mut menu_open = use_signal(|| false);
    let visible = nav.read().visible();
    let header_class = if visible {
        "site-header"
    } else {
        "site-header site-header--hidden"
    };

    rsx! {
        header { class: "{header_class}",
            div { class: "site-header-inner",
                div { class: "brand",
                    span { class: "brand-mark", "LF" }
                    div { class: "brand-text",
                        span { class: "brand-name", "LearnFlow" }
                        span { class: "brand-tagline", "AI-Powered Study Planner" }
                    }
                }
                nav { class: "site-nav",
                    a { href: "#planner-input", "Planner" }
                    a { href: "#study-plan", "Study Plan" }
                    a { href: "#flashcards", "Flashcards" }
                }
                button {
                    class: "menu-toggle",
                    r#type: "button",
                    aria_label: "Toggle menu",
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "✕" } else { "☰" }
                }
            }
            if menu_open() {
                div { class: "mobile-menu",
                    onclick: move |_| menu_open.set(false),
                    span { class: "mobile-menu-tagline", "AI-Powered Study Planner" }
                    a { href: "#planner-input", "Planner" }
                    a { href: "#study-plan", "Study Plan" }
                    a { href: "#flashcards", "Flashcards" }
                }
            }
        }
    }
}

#[component]
pub(super) fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            span { class: "hero-badge", "Personalised plans in seconds" }
            h1 { class: "hero-title",
                "Master any topic with "
                span { class: "hero-accent", "AI-powered" }
                " study plans"
            }
            p { class: "hero-subtitle",
                "Tell LearnFlow what you want to learn and how many days you have. "
                "Get a day-by-day plan, flashcards, practice questions and a push to keep going."
            }
        }
    }
}

#[component]
pub(super) fn Footer(year: i32, credit: String) -> Element {
    rsx! {
        footer { class: "site-footer",
            p { class: "footer-copy", "© {year} LearnFlow. All rights reserved." }
            p { class: "footer-credit", "{credit}" }
        }
    }
}
