//! Message catalogues for dashboard text.
//!
//! Views never hard-code display strings. Each string is a
//! [`MessageDescriptor`] with a stable ID and a default message; a locale's
//! catalogue may translate it, and anything it leaves out falls back to the
//! default.
//!
//! Catalogues are JSON files under `locales/`, embedded at build time, keyed
//! by message ID: `{ "<id>": { "string": "...", "context": "..." } }`.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Built-in catalogues: `(locale, JSON source)`.
const BUILTIN: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("pl", include_str!("../locales/pl.json")),
];

/// Errors loading a catalogue.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A catalogue is not valid JSON of the expected shape.
    #[error("Invalid catalogue for locale {locale}: {source}")]
    Catalogue {
        /// Locale of the offending catalogue.
        locale: String,
        /// Parse failure.
        source: serde_json::Error,
    },
}

/// A translatable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDescriptor {
    /// Stable ID, shared by every catalogue.
    pub id: &'static str,
    /// Text used when the locale has no translation.
    pub default_message: &'static str,
    /// Note for translators.
    pub description: Option<&'static str>,
}

/// One catalogue entry; `context` is for translators and not read here.
#[derive(Debug, Clone, Deserialize)]
struct CatalogueEntry {
    string: String,
}

/// Loaded catalogues.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    catalogues: BTreeMap<String, BTreeMap<String, String>>,
    default_locale: Option<String>,
}

impl Messages {
    /// Load the catalogues shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `I18nError::Catalogue` if an embedded file is malformed.
    pub fn builtin() -> Result<Self, I18nError> {
        let mut messages = Self::default();
        for (locale, source) in BUILTIN {
            messages.add_catalogue(locale, source)?;
        }
        Ok(messages)
    }

    /// Add or replace a locale's catalogue from JSON.
    ///
    /// # Errors
    ///
    /// Returns `I18nError::Catalogue` if `source` is malformed.
    pub fn add_catalogue(&mut self, locale: &str, source: &str) -> Result<(), I18nError> {
        let entries: BTreeMap<String, CatalogueEntry> =
            serde_json::from_str(source).map_err(|source| I18nError::Catalogue {
                locale: locale.to_string(),
                source,
            })?;

        let strings = entries
            .into_iter()
            .map(|(id, entry)| (id, entry.string))
            .collect();
        self.catalogues.insert(normalize(locale), strings);
        Ok(())
    }

    /// Locale to use when a caller names none.
    #[must_use]
    pub fn with_default_locale(mut self, locale: Option<&str>) -> Self {
        self.default_locale = locale.map(normalize);
        self
    }

    /// Known locales, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.catalogues.keys().map(String::as_str)
    }

    /// Text of `descriptor` in `locale`.
    ///
    /// `pl-PL` falls back to `pl`; a missing catalogue or a missing ID falls
    /// back to the descriptor's default message.
    #[must_use]
    pub fn format(&self, locale: Option<&str>, descriptor: &MessageDescriptor) -> &str {
        let Some(locale) = locale
            .map(normalize)
            .or_else(|| self.default_locale.clone())
        else {
            return descriptor.default_message;
        };

        let language = locale.split('-').next().unwrap_or(&locale);
        [locale.as_str(), language]
            .into_iter()
            .find_map(|candidate| self.catalogues.get(candidate)?.get(descriptor.id))
            .map_or(descriptor.default_message, String::as_str)
    }
}

/// Lowercase and use `-` as the region separator (`pl_PL` → `pl-pl`).
fn normalize(locale: &str) -> String {
    locale.trim().replace('_', "-").to_lowercase()
}
