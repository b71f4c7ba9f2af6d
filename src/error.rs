//! Error types for the spell corrector and title autocompleter.
//!
//! Only construction of an engine can fail inside the core: the language tag
//! must be one of the two supported values. The remaining variants belong to
//! the surrounding plumbing (corpus files, configuration, the shared facade).

use std::io;

use thiserror::Error;

use crate::language::Language;

#[derive(Debug, Error)]
pub enum Error {
    /// The language tag is neither `en` nor `he`.
    #[error("invalid language '{0}': expected 'en' or 'he'")]
    InvalidLanguage(String),

    #[error("no models loaded for language '{0}'")]
    LanguageNotLoaded(Language),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confy::ConfyError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_language<S: Into<String>>(tag: S) -> Self {
        Error::InvalidLanguage(tag.into())
    }
}
