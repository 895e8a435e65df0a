use rust_decimal::Decimal;

use crate::core::{Money, Result};
use crate::modules::words::models::vocabulary::{ONES, TENS};
use crate::modules::words::models::Vocabulary;

/// Renders a monetary amount as a natural-language phrase, e.g.
/// "Rupees One Lakh Fifty Thousand Only".
///
/// Pure and deterministic: the same amount always produces the same string.
/// The output is baked into exported documents, so it must match what the
/// on-screen preview showed.
#[derive(Debug, Clone)]
pub struct WordsConverter {
    vocabulary: Vocabulary,
}

impl WordsConverter {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Converter with the Indian lakh/crore grouping
    pub fn indian() -> Self {
        Self::new(Vocabulary::indian())
    }

    /// Convert a raw decimal amount. Negative input fails with InvalidAmount.
    pub fn to_words(&self, amount: Decimal) -> Result<String> {
        self.money_to_words(&Money::new(amount)?)
    }

    /// Convert an already validated amount
    pub fn money_to_words(&self, amount: &Money) -> Result<String> {
        let (units, subunits) = amount.split_units()?;

        let mut parts: Vec<String> = vec![self.vocabulary.unit_word.clone()];
        if units == 0 {
            parts.push("Zero".to_string());
        } else {
            parts.push(self.integer_to_words(units));
        }

        if subunits > 0 {
            parts.push("and".to_string());
            parts.push(self.integer_to_words(u64::from(subunits)));
            parts.push(self.vocabulary.subunit_word.clone());
        }

        parts.push("Only".to_string());
        Ok(parts.join(" "))
    }

    /// Convert a positive integer using the vocabulary's scale table.
    ///
    /// Walks the scale groups largest-first; each group's quotient is
    /// converted recursively, so quotients above 99 (e.g. 123 Crore) render
    /// correctly. Groups whose value is zero are omitted.
    fn integer_to_words(&self, n: u64) -> String {
        if n < 20 {
            return ONES[n as usize].to_string();
        }

        let mut parts: Vec<String> = Vec::new();
        let mut rem = n;

        for scale in &self.vocabulary.scales {
            if rem >= scale.factor {
                parts.push(self.integer_to_words(rem / scale.factor));
                parts.push(scale.word.clone());
                rem %= scale.factor;
            }
        }

        if rem >= 20 {
            parts.push(TENS[(rem / 10) as usize].to_string());
            if rem % 10 > 0 {
                parts.push(ONES[(rem % 10) as usize].to_string());
            }
        } else if rem > 0 {
            parts.push(ONES[rem as usize].to_string());
        }

        parts.join(" ")
    }
}

impl Default for WordsConverter {
    fn default() -> Self {
        Self::indian()
    }
}
