use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::record::TranslationRecord;
use crate::render::{heading_text, quote_body};

/// Tag that marks a heading as a drill card
pub const DRILL_TAG: &str = ":drill:";

/// Property drawer key read by the drill reader
pub const DRILL_CARD_TYPE_KEY: &str = "DRILL_CARD_TYPE";

/// Card type value for cards that can be drilled from either side
pub const TWO_SIDED_CARD_TYPE: &str = "twosided";

/// Flashcard layout written to the deck
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlashcardType {
    /// Two-sided drill card with original text, translation and alternatives sections
    #[default]
    TwoSided,
    /// Simple card prompting with the translation, answering with the original text
    SimpleTranslationFirst,
    /// Simple card prompting with the original text, answering with the translation
    SimpleOriginalFirst,
}

impl FlashcardType {
    // @returns: Identifier used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoSided => "two_sided",
            Self::SimpleTranslationFirst => "simple_translation_first",
            Self::SimpleOriginalFirst => "simple_original_first",
        }
    }
}

impl std::fmt::Display for FlashcardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FlashcardType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "two_sided" | "twosided" => Ok(Self::TwoSided),
            "simple_translation_first" => Ok(Self::SimpleTranslationFirst),
            "simple_original_first" => Ok(Self::SimpleOriginalFirst),
            _ => Err(anyhow!("Invalid flashcard type: {}", s)),
        }
    }
}

/// Render a deck entry for `record` in the layout selected by `kind`
///
/// The output is consumed by an external drill reader, so heading text,
/// drawer keys and blank-line placement must not drift.
pub fn render_flashcard(record: &TranslationRecord, kind: FlashcardType) -> String {
    match kind {
        FlashcardType::TwoSided => render_two_sided(record),
        FlashcardType::SimpleTranslationFirst => {
            render_simple(record, &record.translation, &record.original_text)
        }
        FlashcardType::SimpleOriginalFirst => {
            render_simple(record, &record.original_text, &record.translation)
        }
    }
}

fn render_two_sided(record: &TranslationRecord) -> String {
    format!(
        "* {languages}  {tag}\n\
         :PROPERTIES:\n\
         :{key}: {card_type}\n\
         :END:\n\
         \n\
         ** Original Text\n\
         {original}\n\
         \n\
         ** Translation\n\
         {translation}\n\
         \n\
         ** Alternatives\n\
         {alternatives}\n\
         \n",
        languages = heading_text(&record.languages_involved),
        tag = DRILL_TAG,
        key = DRILL_CARD_TYPE_KEY,
        card_type = TWO_SIDED_CARD_TYPE,
        original = quote_body(&record.original_text),
        translation = quote_body(&record.translation),
        alternatives = quote_body(&record.alternatives),
    )
}

fn render_simple(record: &TranslationRecord, prompt: &str, answer: &str) -> String {
    format!(
        "* {languages} {tag}\n\
         {prompt}\n\
         \n\
         ** Answer\n\
         {answer}\n\
         \n\
         ** Alternatives\n\
         {alternatives}\n\
         \n",
        languages = heading_text(&record.languages_involved),
        tag = DRILL_TAG,
        prompt = quote_body(prompt),
        answer = quote_body(answer),
        alternatives = quote_body(&record.alternatives),
    )
}
