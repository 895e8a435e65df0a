use serde::{Deserialize, Serialize};

/// Direct lookups for 0..=19. Index 0 is unused in output; a zero integer
/// part is special-cased by the converter.
pub(crate) const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

/// Multiples of ten; indices 0 and 1 are unreachable (handled by ONES)
pub(crate) const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// A scale group: a factor and its spoken word, e.g. (100_000, "Lakh")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scale {
    pub factor: u64,
    pub word: String,
}

impl Scale {
    fn new(factor: u64, word: &str) -> Self {
        Self {
            factor,
            word: word.to_string(),
        }
    }
}

/// Word set for rendering an amount in words.
///
/// The digit tables are shared; the scale table is what distinguishes the
/// Indian grouping from the western one. The original generators carried two
/// near-identical converters with duplicated tables; here the vocabulary is
/// the only varying part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Currency word prefixed to every phrase, e.g. "Rupees"
    pub unit_word: String,
    /// Subunit word for the fractional part, e.g. "Paise"
    pub subunit_word: String,
    /// Scale groups in strictly descending factor order
    pub scales: Vec<Scale>,
}

impl Vocabulary {
    /// Indian numbering: Hundred, Thousand, Lakh (10^5), Crore (10^7)
    pub fn indian() -> Self {
        Self {
            unit_word: "Rupees".to_string(),
            subunit_word: "Paise".to_string(),
            scales: vec![
                Scale::new(10_000_000, "Crore"),
                Scale::new(100_000, "Lakh"),
                Scale::new(1_000, "Thousand"),
                Scale::new(100, "Hundred"),
            ],
        }
    }

    /// Western numbering: Hundred, Thousand, Million, Billion
    pub fn western() -> Self {
        Self {
            unit_word: "Rupees".to_string(),
            subunit_word: "Paise".to_string(),
            scales: vec![
                Scale::new(1_000_000_000, "Billion"),
                Scale::new(1_000_000, "Million"),
                Scale::new(1_000, "Thousand"),
                Scale::new(100, "Hundred"),
            ],
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::indian()
    }
}
