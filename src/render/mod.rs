/*!
 * Text renderers for the two stores.
 *
 * Both renderers emit org-outline text: level-1 headings (`* `) start an
 * entry, level-2 headings (`** `) name sections, and every entry ends with a
 * blank line so the next append starts a fresh entry.
 *
 * Field text never changes the outline: heading fields are flattened to a
 * single line, and body lines that look like headings are comma-quoted the
 * way org quotes them (`,* item`).
 */

use crate::org_store::is_heading_line;

pub mod flashcard;
pub mod vocab;

pub use flashcard::{FlashcardType, render_flashcard};
pub use vocab::render_vocab_entry;

/// Single-line heading text: line breaks become spaces, blank lines are dropped
pub fn heading_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Body text with heading-like lines comma-quoted
///
/// A line that is already quoted (`,* item`) gets one more comma, so
/// unquoting once always restores the original text.
pub fn quote_body(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if is_heading_line(line.trim_start_matches(',')) {
                format!(",{}", line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}
