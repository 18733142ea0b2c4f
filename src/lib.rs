/*!
 * # vocab-drill - save word lookups as vocabulary notes and drill cards
 *
 * A Rust library that turns a translation lookup into two org-outline
 * artifacts: an append-only vocabulary log and an append-only flashcard deck
 * for spaced-repetition review.
 *
 * ## Features
 *
 * - Look up words or phrases using:
 *   - Google web translation
 *   - Ollama (local LLM)
 *   - A raw lookup block from a file or stdin
 * - Normalize any lookup into a fixed four-field record
 * - Three flashcard layouts (two-sided, translation first, original first)
 * - Undo the last save in both stores
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `record`: Segment splitting, normalization and record building
 * - `render`: Flashcard and vocabulary renderers
 * - `org_store`: Store append, rollback and last-entry undo
 * - `providers`: Lookup provider trait and clients
 * - `app_controller`: Save and undo orchestration
 * - `app_config`: Configuration management
 * - `language_utils`: ISO language code utilities
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod org_store;
pub mod providers;
pub mod record;
pub mod render;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, SaveOptions, SaveOutcome, UndoReport};
pub use errors::{AppError, ProviderError, StoreError};
pub use org_store::{OrgStore, StoreKind, UndoOutcome};
pub use providers::{LookupDirection, LookupRequest, TranslationProvider};
pub use record::{TranslationRecord, normalize, split_segments};
pub use render::{FlashcardType, render_flashcard, render_vocab_entry};
