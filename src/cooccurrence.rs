use std::collections::HashMap;

use serde::Serialize;

use crate::vocab::Vocabulary;

/// An entity with a nonzero mention count, for the network output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub count: u32,
}

/// An unordered entity pair appearing together in at least one record,
/// reported once with endpoints in vocabulary order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Node/edge view of a [`CoOccurrence`], ready for a renderer.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

/// Per-entity mention counts plus a symmetric pairwise co-occurrence matrix
/// over one vocabulary. Built fresh from local accumulators on every call;
/// holds no reference to the corpus.
#[derive(Debug, Clone)]
pub struct CoOccurrence {
    items: Vec<String>,
    counts: Vec<u32>,
    // Keyed by (i, j) with i < j; queried symmetrically via pair_count.
    pairs: HashMap<(usize, usize), u32>,
}

impl CoOccurrence {
    /// Scan `lowered` records against `vocab`. Each record contributes at most
    /// one count per entity regardless of repeated mentions, and one weight
    /// per distinct pair of matched entities.
    pub fn from_records(vocab: &Vocabulary, lowered: &[String]) -> Self {
        let mut counts = vec![0u32; vocab.len()];
        let mut pairs: HashMap<(usize, usize), u32> = HashMap::new();

        for text in lowered {
            let found = vocab.match_set(text);
            for &i in &found {
                counts[i] += 1;
            }
            for (a, &i) in found.iter().enumerate() {
                for &j in &found[a + 1..] {
                    // match_set returns ascending indices, so i < j holds.
                    *pairs.entry((i, j)).or_insert(0) += 1;
                }
            }
        }

        Self {
            items: vocab.items().to_vec(),
            counts,
            pairs,
        }
    }

    /// Number of records mentioning entity `index` at least once.
    pub fn count(&self, index: usize) -> u32 {
        self.counts[index]
    }

    /// Number of records mentioning both entities. Symmetric in its
    /// arguments; zero for a == b.
    pub fn pair_count(&self, a: usize, b: usize) -> u32 {
        if a == b {
            return 0;
        }
        let key = if a < b { (a, b) } else { (b, a) };
        self.pairs.get(&key).copied().unwrap_or(0)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Nodes with count > 0 and links with weight > 0, each link emitted once
    /// with endpoints in vocabulary order.
    pub fn network(&self) -> Network {
        let nodes = self
            .items
            .iter()
            .zip(&self.counts)
            .filter(|&(_, &c)| c > 0)
            .map(|(id, &count)| Node {
                id: id.clone(),
                count,
            })
            .collect();

        let mut links: Vec<Link> = Vec::with_capacity(self.pairs.len());
        for i in 0..self.items.len() {
            for j in i + 1..self.items.len() {
                let weight = self.pair_count(i, j);
                if weight > 0 {
                    links.push(Link {
                        source: self.items[i].clone(),
                        target: self.items[j].clone(),
                        weight,
                    });
                }
            }
        }

        Network { nodes, links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::MatchMode;

    fn teams() -> Vocabulary {
        Vocabulary::new(["India", "England", "Australia"], MatchMode::Substring).unwrap()
    }

    fn lower(records: &[&str]) -> Vec<String> {
        records.iter().map(|r| r.to_lowercase()).collect()
    }

    #[test]
    fn counts_distinct_mentions_once_per_record() {
        let co = CoOccurrence::from_records(
            &teams(),
            &lower(&["India India India", "india again", "england"]),
        );
        assert_eq!(co.count(0), 2);
        assert_eq!(co.count(1), 1);
        assert_eq!(co.count(2), 0);
    }

    #[test]
    fn matrix_is_symmetric_and_bounded_by_entity_counts() {
        let co = CoOccurrence::from_records(
            &teams(),
            &lower(&[
                "India v England",
                "England tour of India",
                "Australia beat England",
                "India only",
            ]),
        );
        for a in 0..3 {
            for b in 0..3 {
                assert_eq!(co.pair_count(a, b), co.pair_count(b, a));
                assert!(co.count(a) >= co.pair_count(a, b));
            }
        }
        assert_eq!(co.pair_count(0, 1), 2);
        assert_eq!(co.pair_count(1, 2), 1);
        assert_eq!(co.pair_count(0, 0), 0);
    }

    #[test]
    fn network_drops_zero_nodes_and_emits_each_link_once() {
        let co = CoOccurrence::from_records(&teams(), &lower(&["India v England"]));
        let net = co.network();
        assert_eq!(
            net.nodes,
            vec![
                Node {
                    id: "India".into(),
                    count: 1
                },
                Node {
                    id: "England".into(),
                    count: 1
                },
            ]
        );
        assert_eq!(
            net.links,
            vec![Link {
                source: "India".into(),
                target: "England".into(),
                weight: 1
            }]
        );
    }

    #[test]
    fn empty_corpus_yields_empty_network() {
        let co = CoOccurrence::from_records(&teams(), &[]);
        let net = co.network();
        assert!(net.nodes.is_empty());
        assert!(net.links.is_empty());
    }
}
