// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use vocab_drill::app_config::{self, Config, ProviderKind};
use vocab_drill::providers::{self, LookupDirection, text::TextSource};
use vocab_drill::{Controller, FlashcardType, SaveOptions, SaveOutcome, UndoOutcome};

/// CLI Wrapper for ProviderKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProvider {
    Google,
    Ollama,
    Text,
}

impl From<CliProvider> for ProviderKind {
    fn from(cli_provider: CliProvider) -> Self {
        match cli_provider {
            CliProvider::Google => ProviderKind::Google,
            CliProvider::Ollama => ProviderKind::Ollama,
            CliProvider::Text => ProviderKind::Text,
        }
    }
}

/// CLI Wrapper for FlashcardType to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliFlashcardType {
    TwoSided,
    SimpleTranslationFirst,
    SimpleOriginalFirst,
}

impl From<CliFlashcardType> for FlashcardType {
    fn from(cli_type: CliFlashcardType) -> Self {
        match cli_type {
            CliFlashcardType::TwoSided => FlashcardType::TwoSided,
            CliFlashcardType::SimpleTranslationFirst => FlashcardType::SimpleTranslationFirst,
            CliFlashcardType::SimpleOriginalFirst => FlashcardType::SimpleOriginalFirst,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up TEXT and append it to the vocabulary log and the flashcard deck
    #[command(alias = "save")]
    SaveTranslation(SaveArgs),

    /// Same as save-translation with source and target languages swapped
    #[command(alias = "save-reverse")]
    SaveTranslationReverse(SaveArgs),

    /// Remove the last entry from the vocabulary log and the flashcard deck
    #[command(alias = "undo")]
    UndoSaveTranslation,

    /// Generate shell completions for vocab-drill
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SaveArgs {
    /// Word or phrase to look up
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Read a raw lookup block from a file ('-' for stdin) instead of calling a service
    #[arg(short, long, value_name = "PATH")]
    input: Option<String>,

    /// Lookup provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliProvider>,

    /// Flashcard layout for this save
    #[arg(short = 'k', long, value_enum)]
    flashcard_type: Option<CliFlashcardType>,

    /// Source language code (e.g., 'ru', 'de', or 'auto')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Print the rendered entries without writing the stores
    #[arg(short = 'n', long)]
    dry_run: bool,
}

/// vocab-drill - save word lookups as vocabulary notes and drill cards
#[derive(Parser, Debug)]
#[command(name = "vocab-drill")]
#[command(version)]
#[command(about = "Save translation lookups to an org vocabulary log and drill deck")]
#[command(long_about = "vocab-drill looks up a word or phrase and appends the result to two org files:
a vocabulary log and a flashcard deck for spaced-repetition drills.

EXAMPLES:
    vocab-drill save-translation привет                 # Look up and save
    vocab-drill save-translation-reverse hello          # Look up with languages swapped
    vocab-drill save-translation -k simple-original-first Haus
    vocab-drill save-translation --input lookup.txt     # Save a raw lookup block
    vocab-drill save-translation -n привет              # Preview without saving
    vocab-drill undo-save-translation                   # Remove the last saved entries
    vocab-drill completions bash > vocab-drill.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in <config dir>/vocab-drill/config.json by default.
    If the config file doesn't exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Vocabulary log file
    #[arg(long, global = true)]
    vocab_file: Option<String>,

    /// Flashcard deck file
    #[arg(long, global = true)]
    flashcard_file: Option<String>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Accept everything here; the effective level is set once the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell.clone(), &mut cmd, "vocab-drill", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = load_config(&cli)?;

    match cli.command {
        Commands::SaveTranslation(args) => run_save(&mut config, args, LookupDirection::Forward).await,
        Commands::SaveTranslationReverse(args) => run_save(&mut config, args, LookupDirection::Reverse).await,
        Commands::UndoSaveTranslation => run_undo(config),
        Commands::Completions { .. } => Ok(()),
    }
}

// Load or create configuration and apply global overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level((&level).into());
    }

    let config_path = cli.config_path.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load_or_create(&config_path)
        .context(format!("Failed to load config: {:?}", config_path))?;

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone().into();
    }
    log::set_max_level((&config.log_level).into());

    if let Some(path) = &cli.vocab_file {
        config.vocab_file_path = path.clone();
    }
    if let Some(path) = &cli.flashcard_file {
        config.flashcard_file_path = path.clone();
    }

    Ok(config)
}

async fn run_save(config: &mut Config, args: SaveArgs, direction: LookupDirection) -> Result<()> {
    if let Some(provider) = args.provider {
        config.translation.provider = provider.into();
    }
    if let Some(source_lang) = &args.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &args.target_language {
        config.target_language = target_lang.clone();
    }

    let input = args.input.as_deref().map(TextSource::parse);
    let text = args.text.join(" ");
    if text.trim().is_empty() && input.is_none() && config.translation.provider != ProviderKind::Text {
        return Err(anyhow!("TEXT is required unless --input or the text provider is used"));
    }

    let controller = Controller::with_config(config.clone())?;
    let provider = providers::from_config(&config.translation, input);

    let options = SaveOptions {
        direction,
        flashcard_type: args.flashcard_type.map(Into::into),
        dry_run: args.dry_run,
    };

    match controller.save_translation(provider.as_ref(), &text, &options).await? {
        SaveOutcome::Saved(entries) => {
            info!(
                "Success: {} and {}",
                controller.vocabulary_store().path().display(),
                controller.flashcard_store().path().display()
            );
            println!("{} -> {}", entries.record.original_text, entries.record.translation);
        }
        SaveOutcome::Previewed(entries) => {
            print!("{}{}", entries.vocab_entry, entries.flashcard);
        }
    }

    Ok(())
}

fn run_undo(config: Config) -> Result<()> {
    let controller = Controller::with_config(config)?;
    let report = controller.undo_save_translation();

    for (store, outcome) in [
        (controller.vocabulary_store(), &report.vocabulary),
        (controller.flashcard_store(), &report.flashcards),
    ] {
        match outcome {
            UndoOutcome::Removed { heading } => {
                info!("Removed '{}' from {} ({})", heading, store.kind(), store.path().display());
            }
            UndoOutcome::NothingToRemove => {
                info!("Nothing to remove from {} ({})", store.kind(), store.path().display());
            }
            UndoOutcome::Failed(reason) => {
                warn!("Undo skipped for {} ({}): {}", store.kind(), store.path().display(), reason);
            }
        }
    }

    Ok(())
}
