use serde::Serialize;

/// Default number of histogram bins.
pub const DEFAULT_BINS: usize = 25;

/// Half-open interval `[lower, upper)` of word counts; the final bin is
/// closed on its upper edge so no record can fall off the histogram.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Word-count histogram plus descriptive statistics. Mean and median carry
/// full precision; rounding to one decimal is display-only.
#[derive(Debug, Clone, Serialize)]
pub struct LengthStats {
    pub bins: Vec<HistogramBin>,
    pub mean: f64,
    pub median: f64,
    pub max_words: usize,
}

/// Number of whitespace-separated tokens after trimming. An empty or
/// whitespace-only record counts exactly 0 words; the tokenizer never
/// produces the degenerate empty token a naive split would.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

impl LengthStats {
    /// Bin word counts into `bin_count` equal-width bins spanning
    /// `[0, max + 5]` and compute mean/median. An empty corpus yields all-zero
    /// bins and 0.0 for both statistics, never a division by zero.
    pub fn from_records(records: &[String], bin_count: usize) -> Self {
        let bin_count = bin_count.max(1);
        let counts: Vec<usize> = records.iter().map(|r| word_count(r)).collect();
        let max_words = counts.iter().copied().max().unwrap_or(0);

        let span = (max_words + 5) as f64;
        let width = span / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                lower: i as f64 * width,
                upper: (i + 1) as f64 * width,
                count: 0,
            })
            .collect();
        for &c in &counts {
            // The clamp also makes the last bin closed on its upper edge.
            let idx = ((c as f64 / width) as usize).min(bin_count - 1);
            bins[idx].count += 1;
        }

        let mean = if counts.is_empty() {
            0.0
        } else {
            counts.iter().sum::<usize>() as f64 / counts.len() as f64
        };
        let median = median_of(&counts);

        Self {
            bins,
            mean,
            median,
            max_words,
        }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

fn median_of(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}
