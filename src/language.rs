//! The two supported languages and what each one implies for tokenizing,
//! letter-form folding and candidate generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::hebrew;
use crate::tokenizer::Tokenizer;

const LATIN_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "he")]
    Hebrew,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hebrew => "he",
        }
    }

    /// Letters used for substitution and insertion candidates.
    pub fn alphabet(&self) -> Vec<char> {
        match self {
            Language::English => LATIN_ALPHABET.chars().collect(),
            Language::Hebrew => hebrew::ALPHABET_22.chars().collect(),
        }
    }

    /// Whether text must have its final letter-forms folded before use.
    pub fn normalizes_letter_forms(&self) -> bool {
        matches!(self, Language::Hebrew)
    }

    /// Fold final letter-forms when the language calls for it.
    pub fn normalize(&self, text: &str) -> String {
        if self.normalizes_letter_forms() {
            hebrew::normalize_final_letters(text)
        } else {
            text.to_string()
        }
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::for_language(*self)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "en" => Ok(Language::English),
            "he" => Ok(Language::Hebrew),
            other => Err(Error::invalid_language(other)),
        }
    }
}

impl TryFrom<&str> for Language {
    type Error = Error;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
