//! Entry point for hosts: text + language id in, outline or mismatches out.
//!
//! A [`Scanner`] owns the compiled marker table and the label/policy
//! settings. It holds no per-document state, so one instance can serve any
//! number of calls, including back-to-back rebuilds while the user types.

use crate::config::{Config, Labels, MismatchPolicy};
use crate::document::split_lines;
use crate::error::Result;
use crate::markers::{MarkerSpec, MarkerTable};
use crate::mismatch::{self, Advisory, MismatchReport};
use crate::outline::{self, Outline};
use tracing::debug;

/// Compiled markers plus scan settings.
#[derive(Debug, Clone)]
pub struct Scanner {
    table: MarkerTable,
    labels: Labels,
    policy: MismatchPolicy,
    reveal_on_mismatch: bool,
}

impl Scanner {
    /// Build a scanner from config: built-in markers merged with
    /// `config.markers`, plus the label, mismatch, and reveal settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Scanner)` - Every marker pattern compiled
    /// * `Err(RegionError::Config)` - A configured pattern is not a valid regex
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(MarkerTable::from_config(config)?, config))
    }

    /// Build a scanner around an already compiled table.
    pub fn new(table: MarkerTable, config: &Config) -> Self {
        Self {
            table,
            labels: config.labels.clone(),
            policy: config.mismatch_policy,
            reveal_on_mismatch: config.reveal_on_mismatch,
        }
    }

    /// The marker table in use.
    pub fn table(&self) -> &MarkerTable {
        &self.table
    }

    fn resolve(&self, language: &str) -> Option<&MarkerSpec> {
        let spec = self.table.resolve(language);
        if spec.is_none() {
            debug!(language = %language, "no region markers for language");
        }
        spec
    }

    /// Build the numbered region outline for a document.
    ///
    /// # Example
    ///
    /// ```
    /// use regiontoc::config::Config;
    /// use regiontoc::scanner::Scanner;
    ///
    /// let scanner = Scanner::from_config(&Config::default()).unwrap();
    /// let outline = scanner.build("// #region Alpha\ncode\n// #endregion", "javascript");
    ///
    /// assert_eq!(outline.roots()[0].label, "1. Alpha");
    /// assert_eq!(outline.roots()[0].start_line, Some(0));
    /// ```
    pub fn build(&self, text: &str, language: &str) -> Outline {
        self.build_lines(&split_lines(text), language)
    }

    /// [`Scanner::build`] over pre-split lines.
    pub fn build_lines(&self, lines: &[&str], language: &str) -> Outline {
        outline::build(lines, self.resolve(language), &self.labels)
    }

    /// Check marker balance with the configured mismatch policy.
    pub fn detect(&self, text: &str, language: &str) -> MismatchReport {
        self.detect_lines(&split_lines(text), language)
    }

    /// [`Scanner::detect`] over pre-split lines.
    pub fn detect_lines(&self, lines: &[&str], language: &str) -> MismatchReport {
        mismatch::detect(lines, self.resolve(language), self.policy)
    }

    /// Zero-based lines of unpaired markers. Empty means balanced, which
    /// includes unsupported languages.
    pub fn find_mismatches(&self, text: &str, language: &str) -> Vec<usize> {
        self.detect(text, language).lines()
    }

    /// Pre-save check: the notification to show, if any.
    pub fn advise(&self, text: &str, language: &str) -> Option<Advisory> {
        Advisory::from_report(&self.detect(text, language), self.reveal_on_mismatch)
    }
}
