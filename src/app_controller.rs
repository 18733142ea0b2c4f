use log::{debug, info, warn};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::org_store::{OrgStore, StoreKind, UndoOutcome};
use crate::providers::{LookupDirection, LookupRequest, TranslationProvider};
use crate::record::{RecordBuilder, TranslationRecord};
use crate::render::{FlashcardType, render_flashcard, render_vocab_entry};

// @module: Application controller for saving lookups to the stores

/// Per-invocation save settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Lookup direction
    pub direction: LookupDirection,
    /// Card layout override; the configured default applies when `None`
    pub flashcard_type: Option<FlashcardType>,
    /// Render only, leave both stores untouched
    pub dry_run: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            direction: LookupDirection::Forward,
            flashcard_type: None,
            dry_run: false,
        }
    }
}

/// A record and its two rendered projections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntries {
    /// Normalized lookup
    pub record: TranslationRecord,
    /// Layout the flashcard was rendered with
    pub flashcard_type: FlashcardType,
    /// Vocabulary log entry
    pub vocab_entry: String,
    /// Flashcard deck entry
    pub flashcard: String,
}

/// Result of a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Both stores were written
    Saved(RenderedEntries),
    /// Dry run, nothing was written
    Previewed(RenderedEntries),
}

impl SaveOutcome {
    pub fn entries(&self) -> &RenderedEntries {
        match self {
            Self::Saved(entries) | Self::Previewed(entries) => entries,
        }
    }
}

/// Per-store result of an undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoReport {
    pub vocabulary: UndoOutcome,
    pub flashcards: UndoOutcome,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Vocabulary log
    vocabulary: OrgStore,
    // @field: Flashcard deck
    flashcards: OrgStore,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate().map_err(|e| AppError::Config(e.to_string()))?;

        let vocabulary = OrgStore::new(StoreKind::Vocabulary, config.vocab_path());
        let flashcards = OrgStore::new(StoreKind::Flashcards, config.flashcard_path());

        Ok(Self {
            config,
            vocabulary,
            flashcards,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn vocabulary_store(&self) -> &OrgStore {
        &self.vocabulary
    }

    pub fn flashcard_store(&self) -> &OrgStore {
        &self.flashcards
    }

    /// Lookup request for `text` between the configured languages
    pub fn lookup_request(&self, text: &str) -> LookupRequest {
        LookupRequest::new(text, &self.config.source_language, &self.config.target_language)
    }

    /// Render both store entries for `record`
    pub fn render(&self, record: TranslationRecord, flashcard_type: FlashcardType) -> RenderedEntries {
        RenderedEntries {
            vocab_entry: render_vocab_entry(&record),
            flashcard: render_flashcard(&record, flashcard_type),
            flashcard_type,
            record,
        }
    }

    /// Look up `text` and append the result to both stores
    ///
    /// A provider failure returns before either store is opened.
    pub async fn save_translation(
        &self,
        provider: &dyn TranslationProvider,
        text: &str,
        options: &SaveOptions,
    ) -> Result<SaveOutcome, AppError> {
        let request = self.lookup_request(text);
        let record = RecordBuilder::new(provider)
            .build(&request, options.direction)
            .await?;

        let flashcard_type = options
            .flashcard_type
            .unwrap_or(self.config.default_flashcard_type);
        let entries = self.render(record, flashcard_type);

        if options.dry_run {
            debug!("Dry run, stores left untouched");
            return Ok(SaveOutcome::Previewed(entries));
        }

        self.write_entries(&entries)?;
        info!(
            "Saved '{}' -> '{}' ({} card)",
            entries.record.original_text, entries.record.translation, flashcard_type
        );

        Ok(SaveOutcome::Saved(entries))
    }

    /// Append both entries, or neither
    ///
    /// The vocabulary append is rolled back if the flashcard append fails.
    pub fn write_entries(&self, entries: &RenderedEntries) -> Result<(), AppError> {
        let receipt = self.vocabulary.append(&entries.vocab_entry)?;

        if let Err(e) = self.flashcards.append(&entries.flashcard) {
            if let Err(rollback_error) = self.vocabulary.rollback(receipt) {
                warn!("Could not roll back vocabulary store: {}", rollback_error);
            }
            return Err(e.into());
        }

        Ok(())
    }

    /// Remove the last top-level entry from each store independently
    pub fn undo_save_translation(&self) -> UndoReport {
        UndoReport {
            vocabulary: self.vocabulary.remove_last_entry(),
            flashcards: self.flashcards.remove_last_entry(),
        }
    }
}
