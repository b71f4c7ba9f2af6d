//! Hebrew letter-form helpers.
//!
//! Five Hebrew letters take a distinct shape at the end of a word. Counting
//! and matching treat both shapes as one letter, so text is folded to the
//! base forms before it reaches the vocabulary.

/// The 22 base letters, in alphabetical order.
pub const ALPHABET_22: &str = "אבגדהוזחטיכלמנסעפצקרשת";

/// Map a final letter-form to its base form. Other characters pass through.
pub fn normalize_final_letter(c: char) -> char {
    match c {
        'ך' => 'כ',
        'ם' => 'מ',
        'ן' => 'נ',
        'ף' => 'פ',
        'ץ' => 'צ',
        _ => c,
    }
}

/// Replace every final letter-form in `text` with its base form.
pub fn normalize_final_letters(text: &str) -> String {
    text.chars().map(normalize_final_letter).collect()
}
