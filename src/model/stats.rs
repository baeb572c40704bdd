//! Character-frequency statistics over the visible items.
//!
//! Statistics are a derived snapshot: they are recomputed on every request
//! from the current visible items and never stored in the view state.

use crate::model::DisplayItem;
use serde::Serialize;
use std::collections::HashMap;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Number of entries kept in [`Statistics::top_characters`].
pub const TOP_CHARACTER_LIMIT: usize = 3;

// ===== CharCount =====

/// One letter and how many times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharCount {
    /// Lowercased letter.
    pub character: char,
    /// Occurrences in the concatenated titles.
    pub count: usize,
}

impl From<(char, usize)> for CharCount {
    fn from((character, count): (char, usize)) -> Self {
        Self { character, count }
    }
}

// ===== Statistics =====

/// Summary of the visible set for the statistics panel.
///
/// # Invariants
///
/// - `top_characters.len() <= TOP_CHARACTER_LIMIT`
/// - `top_characters` is ordered by count descending, ties by first
///   occurrence in the concatenated titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Index of the page the items were taken from.
    pub page_index: usize,
    /// Number of items the statistics were computed over.
    pub item_count: usize,
    /// Most frequent letters, at most three.
    pub top_characters: Vec<CharCount>,
}

/// Compute statistics for `items` shown on page `page_index`.
///
/// Titles are concatenated in order and lowercased with Unicode,
/// locale-independent case mapping (`str::to_lowercase`). Only characters
/// in the Unicode letter categories (Lu, Ll, Lt, Lm, Lo) are counted; letter
/// numbers such as `Ⅻ` and combining marks are not. Equal counts keep the order in which each letter
/// was first seen, so the result is fully deterministic.
///
/// Total: every input, including an empty slice, yields a valid result.
pub fn compute_statistics(items: &[DisplayItem], page_index: usize) -> Statistics {
    let text: String = items.iter().map(|item| item.title.as_str()).collect();

    Statistics {
        page_index,
        item_count: items.len(),
        top_characters: rank_letters(&text.to_lowercase(), TOP_CHARACTER_LIMIT),
    }
}

/// Whether `c` is in one of the Unicode letter categories.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Rank the letters of `text` by frequency.
///
/// Counts live in first-seen order; the stable sort then leaves ties in
/// that order.
fn rank_letters(text: &str, limit: usize) -> Vec<CharCount> {
    let mut counts: Vec<CharCount> = Vec::new();
    let mut slots: HashMap<char, usize> = HashMap::new();

    for character in text.chars().filter(|&c| is_letter(c)) {
        match slots.get(&character) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(character, counts.len());
                counts.push(CharCount::from((character, 1)));
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageRef;

    fn items(titles: &[&str]) -> Vec<DisplayItem> {
        let image = ImageRef::new("image1");
        titles
            .iter()
            .map(|t| DisplayItem::new(*t, image.clone()))
            .collect()
    }

    fn pairs(stats: &Statistics) -> Vec<(char, usize)> {
        stats
            .top_characters
            .iter()
            .map(|c| (c.character, c.count))
            .collect()
    }

    #[test]
    fn empty_items_yield_empty_ranking() {
        let stats = compute_statistics(&[], 0);

        assert_eq!(stats.item_count, 0);
        assert!(stats.top_characters.is_empty());
    }

    #[test]
    fn ties_break_by_first_occurrence() {
        // "applebananacherry": a=4, then p/e/n/r at 2; p is seen first, then e.
        let stats = compute_statistics(&items(&["apple", "banana", "cherry"]), 0);

        assert_eq!(stats.item_count, 3);
        assert_eq!(pairs(&stats), vec![('a', 4), ('p', 2), ('e', 2)]);
    }

    #[test]
    fn page_index_is_carried_through() {
        let stats = compute_statistics(&items(&["fig"]), 4);

        assert_eq!(stats.page_index, 4);
    }

    #[test]
    fn non_letters_are_ignored() {
        let stats = compute_statistics(&items(&["ugli fruit", "xigua ", "7-up!"]), 0);

        assert!(stats.top_characters.iter().all(|c| is_letter(c.character)));
        assert_eq!(pairs(&stats), vec![('u', 4), ('i', 3), ('g', 2)]);
    }

    #[test]
    fn uppercase_folds_into_lowercase() {
        let stats = compute_statistics(&items(&["Kiwi", "KIWI"]), 1);

        assert_eq!(pairs(&stats), vec![('i', 4), ('k', 2), ('w', 2)]);
    }

    #[test]
    fn fewer_than_three_distinct_letters() {
        let stats = compute_statistics(&items(&["aab"]), 0);

        assert_eq!(pairs(&stats), vec![('a', 2), ('b', 1)]);
    }

    #[test]
    fn items_without_letters_count_but_rank_nothing() {
        let stats = compute_statistics(&items(&["123", "  "]), 2);

        assert_eq!(stats.item_count, 2);
        assert!(stats.top_characters.is_empty());
    }

    #[test]
    fn non_ascii_letters_are_counted() {
        let stats = compute_statistics(&items(&["Ñandú", "ñu"]), 0);

        assert_eq!(pairs(&stats), vec![('ñ', 2), ('a', 1), ('n', 1)]);
    }

    #[test]
    fn letter_numbers_and_combining_marks_are_not_letters() {
        // ROMAN NUMERAL TWELVE (Nl), COMBINING YPOGEGRAMMENI (Mn),
        // DEVANAGARI VOWEL SIGN AA (Mc)
        let stats = compute_statistics(&items(&["\u{216B}\u{0345}\u{093E}\u{093E}"]), 0);

        assert_eq!(stats.item_count, 1);
        assert!(stats.top_characters.is_empty(), "got: {:?}", stats.top_characters);
    }

    #[test]
    fn other_letters_count_without_their_vowel_signs() {
        // "काका": KA + AA sign, twice; only the consonant is a letter.
        let stats = compute_statistics(&items(&["\u{0915}\u{093E}\u{0915}\u{093E}"]), 0);

        assert_eq!(pairs(&stats), vec![('\u{0915}', 2)]);
    }

    #[test]
    fn repeated_computation_is_identical() {
        let visible = items(&["mulberry", "olive", "peach", "plum"]);

        assert_eq!(
            compute_statistics(&visible, 3),
            compute_statistics(&visible, 3)
        );
    }
}
