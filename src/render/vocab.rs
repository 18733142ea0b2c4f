use crate::record::TranslationRecord;
use crate::render::heading_text;

/// Render a vocabulary log entry
///
/// Only the original text and the translation are kept; the language line
/// and alternatives belong to the flashcard deck. Both fields are heading
/// titles, so multi-line text is flattened onto one line.
pub fn render_vocab_entry(record: &TranslationRecord) -> String {
    format!(
        "* {}\n** {}\n\n",
        heading_text(&record.original_text),
        heading_text(&record.translation)
    )
}
