use serde::Serialize;

/// One classification rule: a label plus a disjunction of substring tests.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub label: &'static str,
    pub any_of: &'static [&'static str],
}

/// The ordered rule table. Evaluation is top to bottom with first-match-wins,
/// so the order itself makes the categories mutually exclusive even when a
/// record satisfies several predicates. Reordering this table changes output.
pub const RULES: &[Rule] = &[
    Rule {
        label: "Multiple Choice",
        any_of: &["select from", "choose from", "options"],
    },
    Rule {
        label: "How-to/Instructional",
        any_of: &["how to", "how do", "steps"],
    },
    Rule {
        label: "Translation",
        any_of: &["translate", "spanish", "french"],
    },
    Rule {
        label: "Summarization",
        any_of: &["summarize", "summary"],
    },
    Rule {
        label: "Factual/Who-What-When",
        any_of: &["who", "what", "when", "where"],
    },
    Rule {
        label: "Opinion/Analysis",
        any_of: &["why", "explain", "analyze"],
    },
];

/// Label assigned when no rule matches.
pub const FALLBACK_LABEL: &str = "Other";

/// One row of the category table, in rule order for legend consistency.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCount {
    pub label: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Label -> count/percentage table over the whole corpus.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub categories: Vec<CategoryCount>,
}

/// Classify one lowercased record against an explicit rule table.
pub fn classify_with(rules: &[Rule], lowered_text: &str) -> &'static str {
    for rule in rules {
        if rule.any_of.iter().any(|needle| lowered_text.contains(needle)) {
            return rule.label;
        }
    }
    FALLBACK_LABEL
}

/// Classify one lowercased record against the built-in table.
pub fn classify(lowered_text: &str) -> &'static str {
    classify_with(RULES, lowered_text)
}

impl CategoryBreakdown {
    /// Assign every record exactly one label and tally per category.
    /// Percentages are 0.0 on an empty corpus rather than NaN.
    pub fn from_records(lowered: &[String]) -> Self {
        let mut counts = vec![0usize; RULES.len() + 1];
        for text in lowered {
            let label = classify(text);
            let slot = RULES
                .iter()
                .position(|r| r.label == label)
                .unwrap_or(RULES.len());
            counts[slot] += 1;
        }

        let total = lowered.len();
        let percentage = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            }
        };

        let categories = RULES
            .iter()
            .map(|r| r.label)
            .chain(std::iter::once(FALLBACK_LABEL))
            .zip(counts)
            .map(|(label, count)| CategoryCount {
                label,
                count,
                percentage: percentage(count),
            })
            .collect();

        Self { categories }
    }

    pub fn count(&self, label: &str) -> usize {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map_or(0, |c| c.count)
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.count).sum()
    }
}
