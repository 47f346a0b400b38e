//! Candidate word sets
//!
//! A `CandidateSet` is kept ordered so that every walk over it (ranking,
//! padding, display) sees the words in the same dictionary order.

use super::Word;
use std::collections::BTreeSet;
use std::collections::btree_set;

/// Set of words still consistent with all feedback so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: BTreeSet<Word>,
}

impl CandidateSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no candidate remains
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership by word text
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Look up the stored word with this text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words.get(text)
    }

    /// The only remaining word, if exactly one remains
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        if self.words.len() == 1 {
            self.words.first()
        } else {
            None
        }
    }

    /// Iterate in lexicographic order
    pub fn iter(&self) -> btree_set::Iter<'_, Word> {
        self.words.iter()
    }

    /// True if every word of `self` is also in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words.is_subset(&other.words)
    }

    /// New set holding the words that satisfy `keep`
    #[must_use]
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Word) -> bool,
    {
        self.words.iter().filter(|w| keep(w)).cloned().collect()
    }

    /// Word length shared by the candidates, if any are present
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.words.first().map(Word::len)
    }

    /// Words in lexicographic order
    #[must_use]
    pub fn to_vec(&self) -> Vec<Word> {
        self.words.iter().cloned().collect()
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<Word> for CandidateSet {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl IntoIterator for CandidateSet {
    type Item = Word;
    type IntoIter = btree_set::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn deduplicates_and_orders() {
        let candidates = set(&["speed", "sheep", "speed", "abbey"]);
        assert_eq!(candidates.len(), 3);
        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(texts, ["abbey", "sheep", "speed"]);
    }

    #[test]
    fn lookup_by_text() {
        let candidates = set(&["sheep", "speed"]);
        assert!(candidates.contains("sheep"));
        assert!(!candidates.contains("spree"));
        assert_eq!(candidates.get("speed").map(Word::text), Some("speed"));
    }

    #[test]
    fn solution_only_for_singleton() {
        assert!(set(&["sheep", "speed"]).solution().is_none());
        assert!(CandidateSet::new().solution().is_none());
        assert_eq!(
            set(&["sheep"]).solution().map(Word::text),
            Some("sheep")
        );
    }

    #[test]
    fn filtered_is_subset() {
        let candidates = set(&["sheep", "speed", "spree"]);
        let with_d = candidates.filtered(|w| w.has_letter(b'd'));
        assert_eq!(with_d, set(&["speed"]));
        assert!(with_d.is_subset(&candidates));
        // Source set untouched
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn word_length_of_empty_set() {
        assert_eq!(CandidateSet::new().word_length(), None);
        assert_eq!(set(&["sheep"]).word_length(), Some(5));
    }
}
