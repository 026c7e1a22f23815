//! Command implementations for regiontoc.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared context every command needs: the
//! loaded config, the compiled scanner, and language detection.

mod check;
mod languages;
mod locate;
mod outline;

use crate::cli::{Cli, Command};
use regiontoc::Scanner;
use regiontoc::config::Config;
use regiontoc::document::{Document, LanguageDetector};
use regiontoc::error::Result;
use regiontoc::telemetry;
use std::path::Path;
use tracing::{debug, warn};

/// Loaded configuration and everything compiled from it.
pub(crate) struct CommandContext {
    pub config: Config,
    pub scanner: Scanner,
    pub detector: LanguageDetector,
}

impl CommandContext {
    /// Compile the scanner and language detector from config.
    pub fn new(config: Config) -> Result<Self> {
        let scanner = Scanner::from_config(&config)?;
        let detector = LanguageDetector::from_config(&config)?;

        for (glob, language) in &config.language_globs {
            if !scanner.table().supports(language) {
                warn!(
                    glob = %glob,
                    language = %language,
                    "language_globs maps to a language with no markers"
                );
            }
        }

        Ok(Self {
            config,
            scanner,
            detector,
        })
    }

    /// Read a file and settle its language id.
    pub fn load_document(&self, file: &Path, language: Option<&str>) -> Result<Document> {
        let doc = Document::read(file, &self.detector, language)?;
        if !self.scanner.table().supports(&doc.language_id) {
            warn!(
                file = %file.display(),
                language = %doc.language_id,
                "no region markers for this language; treating file as having none"
            );
        }
        Ok(doc)
    }
}

/// Load config from `--config`, or discover it from the current directory.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_default();
            Config::discover(cwd)
        }
    }
}

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution: it loads config,
/// installs logging, then routes to the handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let filter = telemetry::select_filter(
        std::env::var(telemetry::LOG_ENV).ok(),
        cli.verbose,
        &config.log_filter,
    );
    telemetry::init(&filter)?;
    debug!(filter = %filter, "logging initialised");

    let ctx = CommandContext::new(config)?;

    match cli.command {
        Command::Outline(args) => outline::cmd_outline(&ctx, args),
        Command::Check(args) => check::cmd_check(&ctx, args),
        Command::Locate(args) => locate::cmd_locate(&ctx, args),
        Command::Languages => languages::cmd_languages(&ctx),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::CommandContext;
    use regiontoc::config::Config;
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub(crate) fn context() -> CommandContext {
        CommandContext::new(Config::default()).unwrap()
    }

    /// Write `content` to `name` inside a fresh temp dir.
    pub(crate) fn write_file(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}
