//! Compiled marker table keyed by language id.

use crate::config::{Config, MarkerPatterns};
use crate::error::{RegionError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

use super::builtin::builtin_patterns;

/// Compiled start/end patterns for one language.
#[derive(Clone)]
pub struct MarkerSpec {
    start: Regex,
    end: Regex,
}

impl std::fmt::Debug for MarkerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerSpec")
            .field("start", &self.start.as_str())
            .field("end", &self.end.as_str())
            .finish()
    }
}

impl MarkerSpec {
    /// Compile a pattern pair.
    ///
    /// # Returns
    ///
    /// * `Ok(MarkerSpec)` - Both patterns compiled
    /// * `Err(RegionError::Config)` - Either pattern is not a valid regex
    pub fn compile(language: &str, patterns: &MarkerPatterns) -> Result<Self> {
        Ok(Self {
            start: compile_pattern(language, "start", &patterns.start)?,
            end: compile_pattern(language, "end", &patterns.end)?,
        })
    }

    /// The opener regex.
    pub fn start(&self) -> &Regex {
        &self.start
    }

    /// The closer regex.
    pub fn end(&self) -> &Regex {
        &self.end
    }

    /// Whether the opener declares any named capture group.
    ///
    /// Openers without named groups use the legacy labelling style: the
    /// matched text itself becomes the region name.
    pub fn has_named_groups(&self) -> bool {
        self.start.capture_names().any(|name| name.is_some())
    }
}

fn compile_pattern(language: &str, which: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        RegionError::Config(format!(
            "invalid {} pattern for language '{}': '{}' - {}\n\
             Fix: edit .regiontoc.yaml and correct or remove this pattern.",
            which, language, pattern, e
        ))
    })
}

/// Language id to compiled marker patterns.
///
/// Built once per process (or per config reload) and shared read-only by
/// every scan.
#[derive(Debug, Clone, Default)]
pub struct MarkerTable {
    specs: BTreeMap<String, MarkerSpec>,
}

impl MarkerTable {
    /// The built-in table with no config applied.
    pub fn builtin() -> Result<Self> {
        let mut table = Self::default();
        for (language, patterns) in builtin_patterns() {
            table.insert(language, &patterns)?;
        }
        Ok(table)
    }

    /// The built-in table with the config's `markers` merged over it.
    ///
    /// A config entry for a language that already exists replaces it.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut table = Self::builtin()?;
        for (language, patterns) in &config.markers {
            if table.specs.contains_key(language) {
                debug!(language = %language, "config overrides built-in markers");
            }
            table.insert(language, patterns)?;
        }
        Ok(table)
    }

    /// Compile and add (or replace) one language.
    pub fn insert(&mut self, language: &str, patterns: &MarkerPatterns) -> Result<()> {
        let spec = MarkerSpec::compile(language, patterns)?;
        self.specs.insert(language.to_string(), spec);
        Ok(())
    }

    /// Look up the patterns for a language. `None` means no regions are
    /// recognised for it.
    pub fn resolve(&self, language: &str) -> Option<&MarkerSpec> {
        self.specs.get(language)
    }

    /// Whether the language has marker patterns.
    pub fn supports(&self, language: &str) -> bool {
        self.specs.contains_key(language)
    }

    /// Supported language ids in sorted order, with their patterns.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MarkerSpec)> {
        self.specs.iter().map(|(k, v)| (k.as_str(), v))
    }
}
