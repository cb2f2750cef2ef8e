use serde::Serialize;

use crate::vocab::Vocabulary;

/// How a vocabulary item is counted across the corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountMode {
    /// Number of records containing the item at least once; multiplicity
    /// within a record is ignored.
    Presence,
    /// Sum over records of non-overlapping matches; multiplicity matters.
    Occurrences,
}

/// One row of a ranked frequency table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankedItem {
    pub item: String,
    pub count: u32,
}

/// Per-item counts for one vocabulary, in vocabulary order.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    items: Vec<String>,
    counts: Vec<u32>,
}

impl FrequencyTable {
    /// Count every vocabulary item across the lowered corpus under `mode`.
    pub fn from_records(vocab: &Vocabulary, lowered: &[String], mode: CountMode) -> Self {
        let mut counts = vec![0u32; vocab.len()];
        for text in lowered {
            for i in 0..vocab.len() {
                match mode {
                    CountMode::Presence => {
                        if vocab.matches(text, i) {
                            counts[i] += 1;
                        }
                    }
                    CountMode::Occurrences => {
                        counts[i] += vocab.occurrences(text, i) as u32;
                    }
                }
            }
        }
        Self {
            items: vocab.items().to_vec(),
            counts,
        }
    }

    pub fn count(&self, index: usize) -> u32 {
        self.counts[index]
    }

    /// Ranked table: zero-count items dropped, remaining items sorted by count
    /// descending. Ties keep the original vocabulary order — the sort must be
    /// stable, this is a contract of the output, not a detail.
    pub fn ranked(&self, top_k: Option<usize>) -> Vec<RankedItem> {
        let mut rows: Vec<RankedItem> = self
            .items
            .iter()
            .zip(&self.counts)
            .filter(|&(_, &c)| c > 0)
            .map(|(item, &count)| RankedItem {
                item: item.clone(),
                count,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        if let Some(k) = top_k {
            rows.truncate(k);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::MatchMode;

    fn lower(records: &[&str]) -> Vec<String> {
        records.iter().map(|r| r.to_lowercase()).collect()
    }

    #[test]
    fn presence_ignores_multiplicity_within_a_record() {
        let v = Vocabulary::new(["wicket"], MatchMode::WholeWord).unwrap();
        let t = FrequencyTable::from_records(
            &v,
            &lower(&["wicket wicket wicket", "a wicket fell"]),
            CountMode::Presence,
        );
        assert_eq!(t.count(0), 2);
    }

    #[test]
    fn occurrences_sum_across_records() {
        let v = Vocabulary::new(["wicket"], MatchMode::WholeWord).unwrap();
        let t = FrequencyTable::from_records(
            &v,
            &lower(&["wicket wicket wicket", "a wicket fell", "no cricket here"]),
            CountMode::Occurrences,
        );
        assert_eq!(t.count(0), 4);
    }

    #[test]
    fn ranked_drops_zeros_and_sorts_descending() {
        let v = Vocabulary::new(["bat", "ball", "stump"], MatchMode::WholeWord).unwrap();
        let t = FrequencyTable::from_records(
            &v,
            &lower(&["ball ball bat", "ball"]),
            CountMode::Occurrences,
        );
        assert_eq!(
            t.ranked(None),
            vec![
                RankedItem {
                    item: "ball".into(),
                    count: 3
                },
                RankedItem {
                    item: "bat".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn ties_break_by_vocabulary_order() {
        // "zebra" sorts after "apple" lexically, but comes first in the
        // vocabulary, so with equal counts it must stay first.
        let v = Vocabulary::new(["zebra", "apple"], MatchMode::WholeWord).unwrap();
        let t = FrequencyTable::from_records(
            &v,
            &lower(&["zebra and apple"]),
            CountMode::Presence,
        );
        let ranked = t.ranked(None);
        assert_eq!(ranked[0].item, "zebra");
        assert_eq!(ranked[1].item, "apple");
        assert_eq!(ranked[0].count, ranked[1].count);
    }

    #[test]
    fn top_k_truncates_after_sorting() {
        let v = Vocabulary::new(["a1", "b2", "c3"], MatchMode::WholeWord).unwrap();
        let t = FrequencyTable::from_records(
            &v,
            &lower(&["b2 b2 a1 c3", "b2 c3"]),
            CountMode::Occurrences,
        );
        let top = t.ranked(Some(2));
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].item, "b2");
        assert_eq!(top[1].item, "c3");
    }
}
