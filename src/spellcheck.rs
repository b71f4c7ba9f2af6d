// spellcheck.rs - frequency-based spell correction with edit distance up to 2
// Candidates come from generated edits checked against the observed vocabulary

use ahash::{AHashMap, AHashSet};
use log::{debug, trace};
use std::cmp::Ordering;

use crate::error::Result;
use crate::language::Language;
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestItem {
    pub term: String,
    pub distance: usize,
    pub frequency: u64,
}

impl SuggestItem {
    fn new(term: String, distance: usize, frequency: u64) -> Self {
        Self { term, distance, frequency }
    }
}

#[derive(Debug, Clone)]
pub struct SpellChecker {
    lang: Language,
    tokenizer: Tokenizer,
    letters: Vec<char>,
    // Vocabulary: word -> number of times it was seen in training
    words: AHashMap<String, u64>,
}

impl SpellChecker {
    /// Create an empty checker for the language tag `lang` (`"en"` or `"he"`).
    pub fn new(lang: &str) -> Result<Self> {
        Ok(Self::for_language(lang.parse()?))
    }

    /// Create a checker and train it on `phrases` straight away.
    pub fn with_phrases<I, S>(lang: &str, phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checker = Self::new(lang)?;
        checker.train_phrases(phrases);
        Ok(checker)
    }

    pub fn for_language(lang: Language) -> Self {
        Self {
            lang,
            tokenizer: lang.tokenizer(),
            letters: lang.alphabet(),
            words: AHashMap::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// Count every token of every phrase.
    pub fn train_phrases<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        for phrase in phrases {
            let phrase = self.lang.normalize(phrase.as_ref());
            for word in self.tokenizer.tokenize(&phrase) {
                self.add(word);
                seen += 1;
            }
        }
        debug!("Trained {} tokens from phrases ({} distinct words)", seen, self.words.len());
    }

    /// Count each input as one already-segmented word.
    pub fn train_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        for word in words {
            let word = self.lang.normalize(word.as_ref());
            if word.is_empty() {
                continue;
            }
            self.add(word);
            seen += 1;
        }
        debug!("Trained {} words ({} distinct words)", seen, self.words.len());
    }

    fn add(&mut self, word: String) {
        *self.words.entry(word).or_insert(0) += 1;
    }

    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of counted occurrences over all words.
    pub fn total_count(&self) -> u64 {
        self.words.values().sum()
    }

    /// All strings one deletion, transposition, substitution or insertion away from `word`.
    pub fn edits1(&self, word: &str) -> AHashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        let mut edits = AHashSet::with_capacity((2 * self.letters.len() + 2) * (n + 1));

        for i in 0..=n {
            let (left, right) = chars.split_at(i);

            if let Some((_, rest)) = right.split_first() {
                edits.insert(splice(left, &[], rest));
                for &c in &self.letters {
                    edits.insert(splice(left, &[c], rest));
                }
            }

            if right.len() > 1 {
                edits.insert(splice(left, &[right[1], right[0]], &right[2..]));
            }

            for &c in &self.letters {
                edits.insert(splice(left, &[c], right));
            }
        }

        edits
    }

    /// Known words two edits away from `word`, produced lazily.
    ///
    /// The same word may be yielded more than once when several edit paths reach it.
    pub fn known_edits2<'a>(&'a self, word: &str) -> impl Iterator<Item = String> + 'a {
        self.edits1(word)
            .into_iter()
            .flat_map(move |e1| self.edits1(&e1).into_iter())
            .filter(move |e2| self.words.contains_key(e2))
    }

    /// The closest non-empty tier of known candidates with its edit distance.
    fn known_candidates(&self, token: &str) -> Option<(usize, AHashSet<String>)> {
        if self.contains(token) {
            return Some((0, std::iter::once(token.to_string()).collect()));
        }

        let known1: AHashSet<String> = self
            .edits1(token)
            .into_iter()
            .filter(|w| self.contains(w))
            .collect();
        if !known1.is_empty() {
            return Some((1, known1));
        }

        let known2: AHashSet<String> = self.known_edits2(token).collect();
        if !known2.is_empty() {
            return Some((2, known2));
        }

        None
    }

    /// Lookup ranked suggestions for a token
    pub fn suggest(&self, token: &str, limit: usize) -> Vec<SuggestItem> {
        let Some((distance, candidates)) = self.known_candidates(token) else {
            return Vec::new();
        };

        let mut suggestions: Vec<SuggestItem> = candidates
            .into_iter()
            .map(|term| {
                let frequency = self.frequency(&term);
                SuggestItem::new(term, distance, frequency)
            })
            .collect();

        // Most frequent first; equal counts fall back to lexicographic order
        suggestions.sort_by(|a, b| match b.frequency.cmp(&a.frequency) {
            Ordering::Equal => a.term.cmp(&b.term),
            other => other,
        });
        suggestions.truncate(limit);

        suggestions
    }

    /// The most probable intended word, or `token` unchanged when nothing is close.
    pub fn correct_token(&self, token: &str) -> String {
        match self.suggest(token, 1).into_iter().next() {
            Some(best) => {
                if best.distance > 0 {
                    trace!("Corrected '{}' -> '{}' (distance {})", token, best.term, best.distance);
                }
                best.term
            }
            None => token.to_string(),
        }
    }

    /// Correct every token of `text` independently, keeping their order.
    pub fn correct_phrase(&self, text: &str) -> Vec<String> {
        let text = self.lang.normalize(text);
        self.tokenizer
            .tokenize(&text)
            .iter()
            .map(|token| self.correct_token(token))
            .collect()
    }
}

fn splice(left: &[char], middle: &[char], right: &[char]) -> String {
    left.iter().chain(middle).chain(right).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn english(phrases: &[&str]) -> SpellChecker {
        SpellChecker::with_phrases("en", phrases.iter().copied()).unwrap()
    }

    #[test]
    fn test_invalid_language() {
        match SpellChecker::new("de") {
            Err(Error::InvalidLanguage(tag)) => assert_eq!(tag, "de"),
            other => panic!("expected InvalidLanguage, got {:?}", other.map(|c| c.word_count())),
        }
    }

    #[test]
    fn test_training_counts() {
        let checker = english(&["the cat sat on the mat"]);
        assert_eq!(checker.frequency("the"), 2);
        assert_eq!(checker.frequency("cat"), 1);
        assert_eq!(checker.frequency("dog"), 0);
        assert_eq!(checker.word_count(), 5);
        assert_eq!(checker.total_count(), 6);
    }

    #[test]
    fn test_train_phrases_tokenizes_and_lowercases() {
        let checker = english(&["Hello, World! hello."]);
        assert_eq!(checker.frequency("hello"), 2);
        assert_eq!(checker.frequency("world"), 1);
        assert!(!checker.contains("Hello"));
    }

    #[test]
    fn test_train_words_does_not_retokenize() {
        let mut checker = SpellChecker::new("en").unwrap();
        checker.train_words(["New York", "", "york"]);
        assert!(checker.contains("New York"));
        assert!(!checker.contains("new"));
        assert!(!checker.contains(""));
        assert_eq!(checker.word_count(), 2);
    }

    #[test]
    fn test_edits1() {
        let checker = SpellChecker::new("en").unwrap();
        let edits = checker.edits1("somthing");
        assert_eq!(edits.len(), 442);
        assert!(edits.contains("something")); // insertion
        assert!(edits.contains("smothing")); // transposition
        assert!(edits.contains("somthin")); // deletion
        assert!(edits.contains("somthang")); // substitution
    }

    #[test]
    fn test_edits1_empty_word() {
        let checker = SpellChecker::new("en").unwrap();
        let edits = checker.edits1("");
        assert_eq!(edits.len(), 26);
        assert!(edits.contains("a"));
    }

    #[test]
    fn test_known_edits2_only_yields_known_words() {
        let checker = english(&["spelling corrected"]);
        let found: AHashSet<String> = checker.known_edits2("spelin").collect();
        assert_eq!(found.len(), 1);
        assert!(found.contains("spelling"));
        assert!(checker.known_edits2("zzzzzz").next().is_none());
    }

    #[test]
    fn test_correct_transposition() {
        let checker = english(&["the cat sat on the mat"]);
        assert_eq!(checker.correct_token("teh"), "the");
    }

    #[test]
    fn test_exact_match_is_unchanged() {
        let checker = english(&["the cat sat on the mat", "a bat and a hat"]);
        for word in ["the", "cat", "sat", "on", "mat", "a", "bat", "and", "hat"] {
            assert_eq!(checker.correct_token(word), word);
        }
    }

    #[test]
    fn test_single_typo_recovery() {
        let checker = english(&["hello world"]);
        assert_eq!(checker.correct_token("helo"), "hello");
        assert_eq!(checker.correct_token("wrld"), "world");
        assert_eq!(checker.correct_token("hellp"), "hello");
    }

    #[test]
    fn test_two_edits() {
        let checker = english(&["spelling"]);
        assert_eq!(checker.correct_token("spelin"), "spelling");
    }

    #[test]
    fn test_closer_tier_wins_over_frequency() {
        let mut checker = SpellChecker::new("en").unwrap();
        checker.train_words(["cart"]);
        checker.train_words(["bats"; 5]);
        // "cart" is one insertion away, "bats" needs two edits
        assert_eq!(checker.correct_token("cat"), "cart");
    }

    #[test]
    fn test_most_frequent_two_edit_candidate_wins() {
        let mut checker = SpellChecker::new("en").unwrap();
        checker.train_words(["xyzab"]);
        checker.train_words(["abxyz"; 3]);

        let suggestions = checker.suggest("xyz", 10);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions.iter().all(|s| s.distance == 2));
        assert_eq!(suggestions[0].term, "abxyz");
        assert_eq!(suggestions[0].frequency, 3);
        assert_eq!(checker.correct_token("xyz"), "abxyz");
    }

    #[test]
    fn test_most_frequent_candidate_wins() {
        let checker = english(&["car car car cat"]);
        assert_eq!(checker.correct_token("cax"), "car");
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        let checker = english(&["cat bat"]);
        assert_eq!(checker.correct_token("aat"), "bat");

        let suggestions = checker.suggest("aat", 10);
        let terms: Vec<&str> = suggestions.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["bat", "cat"]);
        assert!(suggestions.iter().all(|s| s.distance == 1 && s.frequency == 1));
    }

    #[test]
    fn test_unknown_token_is_unchanged() {
        let checker = english(&["alpha beta"]);
        assert_eq!(checker.correct_token("zzzzzzzz"), "zzzzzzzz");
        assert!(checker.suggest("zzzzzzzz", 5).is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let checker = SpellChecker::new("en").unwrap();
        for word in ["x", "word", "", "teh"] {
            assert_eq!(checker.correct_token(word), word);
        }
    }

    #[test]
    fn test_correct_phrase_keeps_order() {
        let checker = english(&["the quick brown fox"]);
        assert_eq!(
            checker.correct_phrase("Teh quikc, brwn FOX"),
            vec!["the", "quick", "brown", "fox"]
        );
        assert!(checker.correct_phrase("").is_empty());
    }

    #[test]
    fn test_hebrew_normalizes_final_letters() {
        let checker = SpellChecker::with_phrases("he", ["שלום עולם", "שלום"]).unwrap();
        assert_eq!(checker.frequency("שלומ"), 2);
        assert!(!checker.contains("שלום"));
        assert_eq!(checker.correct_phrase("שלום עולם"), vec!["שלומ", "עולמ"]);
    }

    #[test]
    fn test_hebrew_train_words_normalizes_final_letters() {
        let mut checker = SpellChecker::new("he").unwrap();
        checker.train_words(["שלום"]);
        assert_eq!(checker.frequency("שלומ"), 1);
        assert!(!checker.contains("שלום"));
        assert_eq!(checker.correct_token("שלומ"), "שלומ");
    }

    #[test]
    fn test_hebrew_uses_hebrew_alphabet() {
        let checker = SpellChecker::with_phrases("he", ["בראשית ברא"]).unwrap();
        // missing final letter, restored by insertion from the 22-letter alphabet
        assert_eq!(checker.correct_token("בראשי"), "בראשית");
        assert_eq!(checker.edits1("א").len(), 1 + 22 + 2 * 22 - 1);
    }

    #[test]
    fn test_hebrew_whitespace_tokens_keep_punctuation() {
        let mut checker = SpellChecker::new("he").unwrap();
        checker.train_phrases(["ברא, אלהים"]);
        assert!(checker.contains("ברא,"));
    }
}
