//! Per-language engine pairs and the shared, swappable snapshot readers query.
//!
//! The engines are plain data with no internal locking. They are built once,
//! wrapped in an [`Assistant`], and published through a [`SharedAssistant`].
//! A corpus refresh builds a complete new `Assistant` off to the side and
//! swaps it in; readers holding the previous snapshot keep using it until
//! they drop it.

use std::sync::Arc;

use ahash::AHashMap;
use log::info;
use parking_lot::RwLock;

use crate::autocomplete::{normalize_title, AutoCompleter};
use crate::error::{Error, Result};
use crate::language::Language;
use crate::spellcheck::SpellChecker;

/// A spell checker and an autocompleter trained for the same language.
#[derive(Debug, Clone)]
pub struct LanguageModels {
    spell: SpellChecker,
    completer: AutoCompleter,
}

impl LanguageModels {
    pub fn new(spell: SpellChecker, completer: AutoCompleter) -> Self {
        Self { spell, completer }
    }

    pub fn spell(&self) -> &SpellChecker {
        &self.spell
    }

    pub fn completer(&self) -> &AutoCompleter {
        &self.completer
    }
}

/// Trained models for every loaded language.
#[derive(Debug, Clone, Default)]
pub struct Assistant {
    models: AHashMap<Language, LanguageModels>,
}

impl Assistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lang: Language, models: LanguageModels) {
        self.models.insert(lang, models);
    }

    pub fn languages(&self) -> Vec<Language> {
        let mut langs: Vec<Language> = self.models.keys().copied().collect();
        langs.sort_by_key(|lang| lang.code());
        langs
    }

    pub fn models(&self, lang: Language) -> Result<&LanguageModels> {
        self.models.get(&lang).ok_or(Error::LanguageNotLoaded(lang))
    }

    pub fn correct_phrase(&self, lang: Language, text: &str) -> Result<Vec<String>> {
        Ok(self.models(lang)?.spell.correct_phrase(text))
    }

    /// Complete a raw query, tokenized the same way titles are.
    pub fn complete(&self, lang: Language, query: &str) -> Result<Vec<String>> {
        let normalized = normalize_title(query);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        Ok(self.models(lang)?.completer.guess_titles(&tokens))
    }
}

/// An [`Assistant`] behind a lock that is only held long enough to clone or
/// replace the `Arc`.
#[derive(Debug, Default)]
pub struct SharedAssistant {
    current: RwLock<Arc<Assistant>>,
}

impl SharedAssistant {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            current: RwLock::new(Arc::new(assistant)),
        }
    }

    /// The assistant visible right now.
    pub fn snapshot(&self) -> Arc<Assistant> {
        Arc::clone(&self.current.read())
    }

    /// Publish a freshly built assistant, returning the one it replaces.
    pub fn replace(&self, assistant: Assistant) -> Arc<Assistant> {
        let languages = assistant.languages();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(assistant));
        info!("Published new models for {:?}", languages);
        previous
    }
}
