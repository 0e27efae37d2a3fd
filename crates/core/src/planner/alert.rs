/// A blocking, one-shot notification. Cleared when the user acknowledges it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alert {
    BackendUnreachable,
    DeckExportFailed,
}

impl Alert {
    /// User-facing text. `backend` names the service the view talks to.
    #[must_use]
    pub fn message(self, backend: &str) -> String {
        match self {
            Alert::BackendUnreachable => {
                format!("Backend not running at {backend}.\nPlease start the LearnFlow server.")
            }
            Alert::DeckExportFailed => {
                "Failed to generate Anki deck. Please ensure the backend is running.".to_string()
            }
        }
    }
}
