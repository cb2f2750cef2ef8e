use regex::Regex;

use crate::error::AnalysisError;

/// How a vocabulary matches against record text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Lowercased item is a substring of the lowercased record. No word
    /// boundary: a short name embedded in a longer unrelated token still
    /// matches. This mirrors the source data pipeline and is kept as-is.
    Substring,
    /// Case-insensitive word-boundary match; supports counting
    /// non-overlapping occurrences per record.
    WholeWord,
}

/// A fixed, ordered list of canonical strings with case-insensitive matching.
///
/// Order is preserved and used downstream as the deterministic tie-break for
/// ranked tables, so it is part of the contract, not an accident of input.
///
/// # Example
/// ```
/// use question_analysis::{MatchMode, Vocabulary};
/// let teams = Vocabulary::new(["India", "England"], MatchMode::Substring).unwrap();
/// assert_eq!(teams.match_set("india beat england today"), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Vocabulary {
    items: Vec<String>,
    lowered: Vec<String>,
    patterns: Vec<Option<Regex>>,
    mode: MatchMode,
}

impl Vocabulary {
    /// Build a vocabulary, validating every entry up front.
    ///
    /// Fails with a configuration error if any entry is empty or duplicates
    /// another entry case-insensitively.
    pub fn new<I, S>(items: I, mode: MatchMode) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let mut lowered = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if item.trim().is_empty() {
                return Err(AnalysisError::EmptyVocabularyEntry { index });
            }
            let low = item.to_lowercase();
            if lowered.contains(&low) {
                return Err(AnalysisError::DuplicateVocabularyEntry { item: item.clone() });
            }
            lowered.push(low);
        }

        let mut patterns = Vec::with_capacity(items.len());
        for low in &lowered {
            let pattern = match mode {
                MatchMode::Substring => None,
                MatchMode::WholeWord => {
                    let re = Regex::new(&format!(r"\b{}\b", regex::escape(low))).map_err(|e| {
                        AnalysisError::Pattern {
                            item: low.clone(),
                            source: e,
                        }
                    })?;
                    Some(re)
                }
            };
            patterns.push(pattern);
        }

        Ok(Self {
            items,
            lowered,
            patterns,
            mode,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Canonical items in their original order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Canonical item at `index`. Panics on an out-of-range index.
    pub fn item(&self, index: usize) -> &str {
        &self.items[index]
    }

    /// Indices of the distinct items present in `lowered_text`, in vocabulary
    /// order. The caller is expected to lowercase the record once and reuse it
    /// across all matching passes.
    pub fn match_set(&self, lowered_text: &str) -> Vec<usize> {
        (0..self.items.len())
            .filter(|&i| self.matches(lowered_text, i))
            .collect()
    }

    /// Whether item `index` is present in `lowered_text`.
    pub fn matches(&self, lowered_text: &str, index: usize) -> bool {
        match &self.patterns[index] {
            None => lowered_text.contains(self.lowered[index].as_str()),
            Some(re) => re.is_match(lowered_text),
        }
    }

    /// Number of non-overlapping matches of item `index` in `lowered_text`.
    /// Meaningful for whole-word vocabularies; for substring vocabularies it
    /// degrades to counting non-overlapping substring hits.
    pub fn occurrences(&self, lowered_text: &str, index: usize) -> usize {
        match &self.patterns[index] {
            None => lowered_text.matches(self.lowered[index].as_str()).count(),
            Some(re) => re.find_iter(lowered_text).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_entry() {
        let err = Vocabulary::new(["bat", ""], MatchMode::WholeWord).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::EmptyVocabularyEntry { index: 1 }
        ));
    }

    #[test]
    fn rejects_case_insensitive_duplicate() {
        let err = Vocabulary::new(["India", "india"], MatchMode::Substring).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DuplicateVocabularyEntry { .. }
        ));
    }

    #[test]
    fn substring_matching_is_case_insensitive() {
        let v = Vocabulary::new(["India", "England"], MatchMode::Substring).unwrap();
        assert_eq!(v.match_set("will ENGLAND tour india?".to_lowercase().as_str()), vec![0, 1]);
        assert_eq!(v.match_set("no teams here"), Vec::<usize>::new());
    }

    #[test]
    fn substring_matching_hits_embedded_names() {
        // Known limitation carried over from the source pipeline: no word
        // boundary, so "India" matches inside "Indiana".
        let v = Vocabulary::new(["India"], MatchMode::Substring).unwrap();
        assert_eq!(v.match_set("the indiana pacers"), vec![0]);
    }

    #[test]
    fn whole_word_requires_boundaries() {
        let v = Vocabulary::new(["test", "run"], MatchMode::WholeWord).unwrap();
        assert_eq!(v.match_set("the tests were run"), vec![1]);
        assert_eq!(v.match_set("a test run"), vec![0, 1]);
    }

    #[test]
    fn whole_word_counts_non_overlapping_occurrences() {
        let v = Vocabulary::new(["run", "run rate"], MatchMode::WholeWord).unwrap();
        assert_eq!(v.occurrences("run after run, what a run rate", 0), 3);
        assert_eq!(v.occurrences("run after run, what a run rate", 1), 1);
        assert_eq!(v.occurrences("running is not a hit", 0), 0);
    }

    #[test]
    fn multi_word_and_hyphenated_terms_match() {
        let v = Vocabulary::new(["world cup", "all-rounder", "t20"], MatchMode::WholeWord).unwrap();
        assert_eq!(v.match_set("a t20 world cup all-rounder"), vec![0, 1, 2]);
    }
}
