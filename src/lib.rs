//! Autospell - typo-tolerant lookup helpers for a titled corpus.
//!
//! # Overview
//!
//! Two independent engines, each trained per language (`en` or `he`):
//! - [`SpellChecker`]: maps a possibly misspelled word to the most frequent
//!   known word within edit distance 2
//! - [`AutoCompleter`]: maps partially typed tokens to ranked full titles
//!   through an n-gram prefix index
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Corpus files   │ ← phrases / words / titles per language (corpus.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │  SpellChecker   │     │  AutoCompleter  │ ← spellcheck.rs / autocomplete.rs
//! └────────┬────────┘     └────────┬────────┘
//!          └──────────┬────────────┘
//!                     ▼
//! ┌──────────────────────────────────┐
//! │  Assistant / SharedAssistant     │ ← per-language facade, swappable snapshot (service.rs)
//! └──────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `language.rs`: the two language tags and their alphabets
//! - `hebrew.rs`: final letter-form folding
//! - `tokenizer.rs`: regex word segmentation
//! - `spellcheck.rs`: vocabulary model and bounded-edit candidate generation
//! - `autocomplete.rs`: n-gram index and title scoring
//! - `config.rs`: persisted settings
//! - `error.rs`: the crate error type

pub mod autocomplete;
pub mod config;
pub mod corpus;
pub mod error;
pub mod hebrew;
pub mod language;
pub mod service;
pub mod spellcheck;
pub mod tokenizer;

pub use autocomplete::{normalize_title, AutoCompleter, CompletionLimits, ScoredTitle};
pub use config::Config;
pub use corpus::CorpusPaths;
pub use error::{Error, Result};
pub use language::Language;
pub use service::{Assistant, LanguageModels, SharedAssistant};
pub use spellcheck::{SpellChecker, SuggestItem};
