//! Title autocompletion over an n-gram prefix index.
//!
//! Every title token of length `L >= 3` is reachable through each of its
//! `L - 2` prefixes of length 3 and up. A query is a list of partially typed
//! tokens; each one is looked up as an exact prefix key, the whole tokens it
//! expands to are mapped back to their titles, and titles are ranked by how
//! much of their text the matches cover, scaled by the share of query tokens
//! that reached them.
//!
//! # Scoring
//!
//! For each matched token `t` and each title `T` containing it:
//!
//! ```text
//! match_score = len(t) / len(T without spaces)
//! title_score = sum(match_score) * occurrences(T) / number_of_query_tokens
//! ```
//!
//! A top title scoring exactly `1.0` is returned alone. Otherwise all titles
//! at or above the threshold are returned when there are more than
//! `min_results` of them, else the best `min_results` titles.

use std::collections::BTreeSet;

use ahash::AHashMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::Language;

/// Shortest prefix stored in the n-gram index.
pub const MIN_N_GRAM_SIZE: usize = 3;

/// Lowercase a title and turn hyphens, parentheses and apostrophes into spaces.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '-' | '(' | ')' | '\'' => ' ',
            _ => c,
        })
        .collect()
}

/// Prefixes of `token` from `MIN_N_GRAM_SIZE` characters up to the whole token.
fn ngrams(token: &str) -> impl Iterator<Item = &str> {
    let long_enough = token.chars().nth(MIN_N_GRAM_SIZE - 1).is_some();
    token
        .char_indices()
        .map(|(offset, _)| offset)
        .skip(MIN_N_GRAM_SIZE)
        .chain(std::iter::once(token.len()))
        .filter(move |_| long_enough)
        .map(move |end| &token[..end])
}

/// Result-size and cut-off settings for [`AutoCompleter::guess_titles`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionLimits {
    pub min_results: usize,
    pub max_results: usize,
    pub score_threshold: f64,
}

impl Default for CompletionLimits {
    fn default() -> Self {
        Self {
            min_results: 3,
            max_results: 10,
            score_threshold: 0.4,
        }
    }
}

/// A title with its aggregated query score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTitle {
    pub title: String,
    pub score: f64,
}

#[derive(Debug, Clone)]
struct LearnedTitle {
    /// First spelling learned for this normalized title; returned to callers.
    display: String,
    /// Characters in the normalized title, spaces excluded.
    content_len: usize,
}

#[derive(Debug, Clone)]
pub struct AutoCompleter {
    lang: Language,
    limits: CompletionLimits,
    /// Distinct normalized titles, in first-learned order.
    titles: Vec<LearnedTitle>,
    /// Normalized title -> index into `titles`.
    title_ids: AHashMap<String, usize>,
    /// Titles learned so far, duplicates included.
    learned: usize,
    /// Token -> indices into `titles`, one entry per occurrence.
    token_to_titles: AHashMap<String, Vec<usize>>,
    /// Prefix -> whole tokens starting with it.
    ngram_to_tokens: AHashMap<String, BTreeSet<String>>,
}

impl AutoCompleter {
    /// Create an empty completer for the language tag `lang` (`"en"` or `"he"`).
    pub fn new(lang: &str) -> Result<Self> {
        Ok(Self::for_language(lang.parse()?))
    }

    /// Create a completer and learn `titles` straight away.
    pub fn with_titles<I, S>(lang: &str, titles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut completer = Self::new(lang)?;
        completer.learn_titles(titles);
        Ok(completer)
    }

    pub fn for_language(lang: Language) -> Self {
        Self {
            lang,
            limits: CompletionLimits::default(),
            titles: Vec::new(),
            title_ids: AHashMap::new(),
            learned: 0,
            token_to_titles: AHashMap::new(),
            ngram_to_tokens: AHashMap::new(),
        }
    }

    pub fn with_limits(mut self, limits: CompletionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn limits(&self) -> CompletionLimits {
        self.limits
    }

    pub fn learn_titles<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.learned;
        for title in titles {
            let title = title.as_ref();
            let normalized = normalize_title(title);
            let id = match self.title_ids.get(&normalized) {
                Some(&id) => id,
                None => {
                    let id = self.titles.len();
                    self.titles.push(LearnedTitle {
                        display: title.to_string(),
                        content_len: normalized.chars().filter(|&c| c != ' ').count(),
                    });
                    self.title_ids.insert(normalized.clone(), id);
                    id
                }
            };
            self.learned += 1;

            for token in normalized.split_whitespace() {
                self.token_to_titles
                    .entry(token.to_string())
                    .or_default()
                    .push(id);
                for ngram in ngrams(token) {
                    self.ngram_to_tokens
                        .entry(ngram.to_string())
                        .or_default()
                        .insert(token.to_string());
                }
            }
        }
        debug!(
            "Learned {} titles ({} distinct, {} tokens, {} n-grams)",
            self.learned - before,
            self.titles.len(),
            self.token_to_titles.len(),
            self.ngram_to_tokens.len()
        );
    }

    /// Number of titles learned, duplicates included.
    pub fn title_count(&self) -> usize {
        self.learned
    }

    /// Number of titles that differ after normalization.
    pub fn distinct_title_count(&self) -> usize {
        self.titles.len()
    }

    pub fn token_count(&self) -> usize {
        self.token_to_titles.len()
    }

    pub fn ngram_count(&self) -> usize {
        self.ngram_to_tokens.len()
    }

    /// Whole tokens reachable from the prefix key `ngram`.
    pub fn tokens_for_ngram(&self, ngram: &str) -> Option<&BTreeSet<String>> {
        self.ngram_to_tokens.get(ngram)
    }

    /// Whole tokens matched by the query, one entry per (query token, match) pair.
    fn expand<'a, S: AsRef<str>>(&'a self, tokens: &[S]) -> Vec<&'a str> {
        tokens
            .iter()
            .filter_map(|token| self.ngram_to_tokens.get(token.as_ref()))
            .flat_map(|matched| matched.iter().map(String::as_str))
            .collect()
    }

    /// Rank every title reached by `tokens`, best first, without filtering.
    ///
    /// Equal scores keep the order in which their titles were first matched.
    pub fn score_titles<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<ScoredTitle> {
        let matches = self.expand(tokens);
        if matches.is_empty() {
            return Vec::new();
        }

        // Grouped by normalized title: id -> (summed match score, occurrences)
        let mut totals: AHashMap<usize, (f64, usize)> = AHashMap::new();
        let mut first_seen: Vec<usize> = Vec::new();

        for token in matches {
            let token_len = token.chars().count() as f64;
            let Some(ids) = self.token_to_titles.get(token) else {
                continue;
            };
            for &id in ids {
                let score = token_len / self.titles[id].content_len as f64;
                if !totals.contains_key(&id) {
                    first_seen.push(id);
                }
                let entry = totals.entry(id).or_insert((0.0, 0));
                entry.0 += score;
                entry.1 += 1;
            }
        }

        let query_len = tokens.len() as f64;
        let mut scored: Vec<ScoredTitle> = first_seen
            .into_iter()
            .map(|id| {
                let (sum, occurrences) = totals[&id];
                ScoredTitle {
                    title: self.titles[id].display.clone(),
                    score: sum * occurrences as f64 / query_len,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Best-matching titles for partially typed, already lowercased tokens.
    pub fn guess_titles<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let scored = self.score_titles(tokens);
        trace!("{} candidate titles for {} query tokens", scored.len(), tokens.len());
        self.filter_results(scored)
    }

    fn filter_results(&self, scored: Vec<ScoredTitle>) -> Vec<String> {
        let Some(top) = scored.first() else {
            return Vec::new();
        };
        if top.score == 1.0 {
            return vec![top.title.clone()];
        }

        let CompletionLimits {
            min_results,
            max_results,
            score_threshold,
        } = self.limits;

        // Sorted descending, so the titles over the threshold are a prefix
        let within_threshold = scored
            .iter()
            .take_while(|s| s.score >= score_threshold)
            .count();
        let keep = if within_threshold > min_results {
            within_threshold
        } else {
            min_results
        };

        scored
            .into_iter()
            .take(keep.min(max_results))
            .map(|s| s.title)
            .collect()
    }
}
