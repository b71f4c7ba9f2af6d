//! Regex-backed word segmentation.

use std::sync::OnceLock;

use regex::Regex;

use crate::language::Language;

static WORD_RUNS: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn word_runs() -> &'static Regex {
    WORD_RUNS.get_or_init(|| Regex::new(r"\w+").expect("word-run pattern is valid"))
}

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tokenizer {
    /// Lowercase, then keep every maximal run of word characters.
    WordRuns,
    /// Split on whitespace runs, without case folding.
    Whitespace,
}

impl Tokenizer {
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::English => Tokenizer::WordRuns,
            Language::Hebrew => Tokenizer::Whitespace,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            Tokenizer::WordRuns => {
                let lowered = text.to_lowercase();
                word_runs()
                    .find_iter(&lowered)
                    .map(|m| m.as_str().to_string())
                    .collect()
            }
            // Leading or trailing whitespace yields empty pieces; they are not words.
            Tokenizer::Whitespace => whitespace()
                .split(text)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}
