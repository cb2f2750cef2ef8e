use serde::Serialize;

/// Binary split of records by digit presence. Counts always sum to the
/// corpus size.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct NumericSplit {
    pub with_numbers: usize,
    pub without_numbers: usize,
}

/// Whether `text` contains at least one character in '0'..='9'. Runs on the
/// raw record text; case folding does not affect digits.
pub fn has_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

impl NumericSplit {
    pub fn from_records(records: &[String]) -> Self {
        let with_numbers = records.iter().filter(|r| has_digit(r)).count();
        Self {
            with_numbers,
            without_numbers: records.len() - with_numbers,
        }
    }

    pub fn total(&self) -> usize {
        self.with_numbers + self.without_numbers
    }
}
