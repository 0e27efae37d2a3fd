pub(super) const PLANNER_ROOT_ID: &str = "planner-root";
pub(super) const STUDY_PLAN_ID: &str = "study-plan";
pub(super) const FLASHCARD_OVERLAY_ID: &str = "flashcard-overlay";

pub(super) fn scroll_into_view_script(target: &str) -> String {
    format!(
        r#"document.getElementById({target:?})?.scrollIntoView({{ behavior: "smooth", block: "start" }});"#,
    )
}

pub(super) fn focus_script(target: &str) -> String {
    format!(r#"document.getElementById({target:?})?.focus();"#)
}
