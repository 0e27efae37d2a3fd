use learnflow_core::model::Flashcard;

const PREVIEW_MAX_CHARS: usize = 90;

/// One flashcard as the grid and the focus modal display it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub index: usize,
    pub number_label: String,
    pub question: String,
    pub answer: String,
    pub question_preview: String,
}

#[must_use]
pub fn map_flashcards(cards: &[Flashcard]) -> Vec<FlashcardVm> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| FlashcardVm {
            index,
            number_label: format!("Card {}", index + 1),
            question: card.question.clone(),
            answer: card.answer.clone(),
            question_preview: truncate_preview(&card.question, PREVIEW_MAX_CHARS),
        })
        .collect()
}

fn truncate_preview(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut lines = trimmed.lines();
    let first_line = lines.next().unwrap_or("");
    let has_more_lines = lines.next().is_some();

    let mut out = String::with_capacity(max_chars + 3);
    let mut count = 0usize;
    let mut cut = false;
    for ch in first_line.chars() {
        if count >= max_chars {
            cut = true;
            break;
        }
        out.push(ch);
        count = count.saturating_add(1);
    }

    if has_more_lines || cut {
        out.push_str("...");
    }

    out
}
