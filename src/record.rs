/*!
 * Translation records and the segment normalization that produces them.
 *
 * A lookup yields a loosely structured block of text. The block is split on
 * blank lines into raw segments, and the segments are folded into a record
 * with exactly four fields:
 *
 * 1. languages involved
 * 2. original text
 * 3. translation
 * 4. alternatives (everything else)
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ProviderError;
use crate::providers::{LookupDirection, LookupRequest, TranslationProvider};

/// Number of fields in a normalized record
pub const RECORD_FIELD_COUNT: usize = 4;

/// Separator placed between merged overflow segments
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// One or more blank lines (whitespace-only lines count as blank)
static BLANK_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n(?:[ \t]*\n)+").unwrap()
});

/// Normalized result of a single lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationRecord {
    /// Free-text description of the source and target languages
    pub languages_involved: String,

    /// The text that was looked up
    pub original_text: String,

    /// Primary translation
    pub translation: String,

    /// Spelling suggestions, alternate translations and any overflow segments
    pub alternatives: String,
}

impl TranslationRecord {
    /// Create a record from its four fields
    pub fn new(
        languages_involved: impl Into<String>,
        original_text: impl Into<String>,
        translation: impl Into<String>,
        alternatives: impl Into<String>,
    ) -> Self {
        Self {
            languages_involved: languages_involved.into(),
            original_text: original_text.into(),
            translation: translation.into(),
            alternatives: alternatives.into(),
        }
    }

    /// Fields in their canonical order
    pub fn fields(&self) -> [&str; RECORD_FIELD_COUNT] {
        [
            &self.languages_involved,
            &self.original_text,
            &self.translation,
            &self.alternatives,
        ]
    }
}

impl From<[String; RECORD_FIELD_COUNT]> for TranslationRecord {
    fn from(fields: [String; RECORD_FIELD_COUNT]) -> Self {
        let [languages_involved, original_text, translation, alternatives] = fields;
        Self {
            languages_involved,
            original_text,
            translation,
            alternatives,
        }
    }
}

/// Split raw lookup output into segments on blank lines
///
/// Line endings are normalized to `\n`. Leading blank lines and trailing
/// whitespace are dropped from each segment; indentation of its first line
/// is kept. Empty segments are dropped.
pub fn split_segments(raw: &str) -> Vec<String> {
    let unified = raw.replace("\r\n", "\n");

    BLANK_LINE_REGEX
        .split(&unified)
        .map(strip_blank_lines)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_blank_lines(segment: &str) -> &str {
    let segment = segment.trim_end();
    let Some(first_text) = segment.find(|c: char| !c.is_whitespace()) else {
        return "";
    };
    let line_start = segment[..first_text].rfind('\n').map_or(0, |newline| newline + 1);
    &segment[line_start..]
}

/// Fold an arbitrary number of segments into exactly four fields
///
/// Short input is padded with empty strings. Segments past the third are
/// joined pairwise with a blank line into the last field. Segment content is
/// never inspected, so a segment in an unexpected position lands in the
/// wrong field silently.
pub fn normalize<S: AsRef<str>>(segments: &[S]) -> TranslationRecord {
    let mut fields: [String; RECORD_FIELD_COUNT] = Default::default();
    let head = RECORD_FIELD_COUNT - 1;

    for (field, segment) in fields.iter_mut().zip(segments.iter().take(head)) {
        *field = segment.as_ref().to_string();
    }

    if segments.len() > head {
        fields[head] = segments[head..]
            .iter()
            .map(|segment| segment.as_ref())
            .collect::<Vec<&str>>()
            .join(SEGMENT_SEPARATOR);
    }

    TranslationRecord::from(fields)
}

/// Runs a lookup and turns its raw output into a record
pub struct RecordBuilder<'a> {
    provider: &'a dyn TranslationProvider,
}

impl<'a> RecordBuilder<'a> {
    /// Create a builder backed by the given provider
    pub fn new(provider: &'a dyn TranslationProvider) -> Self {
        Self { provider }
    }

    /// Look up `request` and normalize the result
    ///
    /// Provider failures are returned unchanged; no partial record is built.
    pub async fn build(
        &self,
        request: &LookupRequest,
        direction: LookupDirection,
    ) -> Result<TranslationRecord, ProviderError> {
        debug!(
            "Looking up '{}' via {} ({:?})",
            request.text,
            self.provider.name(),
            direction
        );

        let raw = match direction {
            LookupDirection::Forward => self.provider.fetch(request).await?,
            LookupDirection::Reverse => self.provider.fetch_reverse(request).await?,
        };

        let segments = split_segments(&raw);
        debug!("Lookup produced {} segment(s)", segments.len());

        Ok(normalize(&segments))
    }
}
