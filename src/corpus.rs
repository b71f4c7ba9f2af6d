//! Training corpus loading.
//!
//! Corpus files use a simple line format:
//! ```text
//! # Comments start with #
//! In the beginning God created the heaven and the earth
//! Genesis Rabbah
//! ```
//!
//! Each non-empty, non-comment line is one phrase, word or title depending on
//! which slot of [`CorpusPaths`] the file was given for.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::info;

use crate::autocomplete::{AutoCompleter, CompletionLimits};
use crate::error::Result;
use crate::language::Language;
use crate::service::LanguageModels;
use crate::spellcheck::SpellChecker;

/// Files to train one language from. Every slot is optional.
#[derive(Debug, Clone, Default)]
pub struct CorpusPaths {
    /// Free text; tokenized before counting.
    pub phrases: Option<PathBuf>,
    /// One already-segmented word per line.
    pub words: Option<PathBuf>,
    /// One title per line, for autocompletion.
    pub titles: Option<PathBuf>,
}

/// Collect corpus lines from a reader.
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
///
/// # Errors
/// Returns an error if the reader fails or yields invalid UTF-8.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}

/// Read corpus lines from a file.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    parse_lines(BufReader::new(file))
}

/// Train a spell checker and an autocompleter for `lang` from the given files.
///
/// # Errors
/// Returns an error if any of the given files cannot be read.
pub fn load_language(
    lang: Language,
    paths: &CorpusPaths,
    limits: CompletionLimits,
) -> Result<LanguageModels> {
    let mut spell = SpellChecker::for_language(lang);
    let mut completer = AutoCompleter::for_language(lang).with_limits(limits);

    if let Some(path) = &paths.phrases {
        let phrases = read_lines(path)?;
        spell.train_phrases(&phrases);
        info!("Loaded {} phrases for '{}' from {}", phrases.len(), lang, path.display());
    }

    if let Some(path) = &paths.words {
        let words = read_lines(path)?;
        spell.train_words(&words);
        info!("Loaded {} words for '{}' from {}", words.len(), lang, path.display());
    }

    if let Some(path) = &paths.titles {
        let titles = read_lines(path)?;
        completer.learn_titles(&titles);
        info!("Loaded {} titles for '{}' from {}", titles.len(), lang, path.display());
    }

    info!(
        "Models for '{}': {} distinct words, {} titles",
        lang,
        spell.word_count(),
        completer.title_count()
    );
    Ok(LanguageModels::new(spell, completer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::{Cursor, Write};

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_lines_skips_comments_and_blanks() {
        let input = "# header\n\n  first line  \n#second\nthird\n   \n";
        let lines = parse_lines(Cursor::new(input)).unwrap();
        assert_eq!(lines, vec!["first line", "third"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_lines(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_language() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CorpusPaths {
            phrases: Some(write_file(dir.path(), "phrases.txt", "the cat sat on the mat\n")),
            words: Some(write_file(dir.path(), "words.txt", "# extra\nhat\n")),
            titles: Some(write_file(dir.path(), "titles.txt", "Genesis\nExodus\n")),
        };

        let models = load_language(Language::English, &paths, CompletionLimits::default()).unwrap();
        assert_eq!(models.spell().frequency("the"), 2);
        assert!(models.spell().contains("hat"));
        assert_eq!(models.completer().title_count(), 2);
        assert_eq!(models.completer().guess_titles(&["exo"]), vec!["Exodus"]);
    }

    #[test]
    fn test_load_language_without_files() {
        let models =
            load_language(Language::Hebrew, &CorpusPaths::default(), CompletionLimits::default())
                .unwrap();
        assert_eq!(models.spell().word_count(), 0);
        assert_eq!(models.completer().language(), Language::Hebrew);
    }
}
