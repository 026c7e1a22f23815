//! Path to language id detection.

use crate::config::Config;
use crate::error::{RegionError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Maps file paths to language ids.
///
/// Config globs are consulted first, in sorted pattern order; then the
/// built-in extension table.
#[derive(Debug, Clone, Default)]
pub struct LanguageDetector {
    globs: GlobSet,
    glob_languages: Vec<String>,
}

impl LanguageDetector {
    /// Build a detector from the config's `language_globs`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut glob_languages = Vec::with_capacity(config.language_globs.len());

        for (pattern, language) in &config.language_globs {
            let glob = Glob::new(pattern).map_err(|e| {
                RegionError::Config(format!(
                    "invalid glob pattern in language_globs: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
            glob_languages.push(language.clone());
        }

        let globs = builder.build().map_err(|e| {
            RegionError::Config(format!("failed to compile language_globs: {}", e))
        })?;

        Ok(Self {
            globs,
            glob_languages,
        })
    }

    /// Detect the language id for a path.
    ///
    /// Returns `None` if nothing matches.
    pub fn detect(&self, path: &Path) -> Option<String> {
        let file_name = path.file_name().and_then(|name| name.to_str());

        // Globs may be written against the bare file name or the whole path
        let matched = self
            .globs
            .matches(path)
            .into_iter()
            .chain(file_name.into_iter().flat_map(|name| self.globs.matches(name)))
            .min();
        if let Some(index) = matched {
            return self.glob_languages.get(index).cloned();
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::language_for_extension)
            .map(str::to_string)
    }

    /// Built-in extension table.
    pub fn language_for_extension(ext: &str) -> Option<&'static str> {
        let normalised = ext.to_ascii_lowercase();
        match normalised.as_str() {
            "js" | "mjs" | "cjs" | "jsx" => Some("javascript"),
            "ts" | "mts" | "cts" | "tsx" => Some("typescript"),
            "html" | "htm" => Some("html"),
            "scss" => Some("scss"),
            "css" => Some("css"),
            "md" | "markdown" => Some("markdown"),
            "php" => Some("php"),
            _ => None,
        }
    }
}
