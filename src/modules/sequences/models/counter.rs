use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::AppError;

/// How a counter value is rendered as a human-readable code:
/// a literal prefix, a zero-padded number, and a literal suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceTemplate {
    prefix: String,
    width: usize,
    suffix: String,
}

impl SequenceTemplate {
    pub fn new(prefix: &str, width: usize, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            width,
            suffix: suffix.to_string(),
        }
    }

    pub fn format(&self, value: u64) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            value,
            self.suffix,
            width = self.width
        )
    }
}

impl fmt::Display for SequenceTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.prefix,
            "#".repeat(self.width),
            self.suffix
        )
    }
}

impl FromStr for SequenceTemplate {
    type Err = AppError;

    /// Parse a template like `"TI/24-25/####"`: the first contiguous run of
    /// `#` marks the zero-padded number, everything around it is literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let start = s.find('#').ok_or_else(|| {
            AppError::InvalidSequenceTemplate(format!("no '#' placeholder in '{}'", s))
        })?;
        let width = s[start..].chars().take_while(|c| *c == '#').count();
        let suffix = &s[start + width..];

        if suffix.contains('#') {
            return Err(AppError::InvalidSequenceTemplate(format!(
                "placeholder must be one contiguous run of '#' in '{}'",
                s
            )));
        }

        Ok(Self::new(&s[..start], width, suffix))
    }
}

/// Counter lifecycle: a counter stays Uninitialized until it is seeded,
/// either explicitly from persisted records or implicitly by the first issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterState {
    Uninitialized,
    /// The highest value issued so far
    Active(u64),
}

/// One namespace's counter: current value plus its format template.
///
/// Mutated only through [`SequenceIssuer`]; never decremented.
///
/// [`SequenceIssuer`]: crate::modules::sequences::SequenceIssuer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceCounter {
    pub namespace: String,
    template: SequenceTemplate,
    state: CounterState,
}

impl SequenceCounter {
    pub fn new(namespace: &str, template: SequenceTemplate) -> Self {
        Self {
            namespace: namespace.to_string(),
            template,
            state: CounterState::Uninitialized,
        }
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Swap the format template, keeping the counter state
    pub fn set_template(&mut self, template: SequenceTemplate) {
        self.template = template;
    }

    /// The value the next issue will emit
    fn next_value(&self) -> u64 {
        match self.state {
            CounterState::Uninitialized => 1,
            CounterState::Active(current) => current + 1,
        }
    }

    /// Format the next code without mutating state
    pub fn peek(&self) -> String {
        self.template.format(self.next_value())
    }

    /// Advance the counter and return the issued code.
    ///
    /// An Uninitialized counter is implicitly seeded to 0 first, so its
    /// first issued value is 1.
    pub fn issue(&mut self) -> String {
        let value = self.next_value();
        self.state = CounterState::Active(value);
        self.template.format(value)
    }

    /// Seed from the highest previously issued value.
    ///
    /// On an Active counter this only ever raises the value; a stale or
    /// replayed persistence report can never roll a counter backwards.
    pub fn seed(&mut self, highest_issued: u64) {
        let floor = match self.state {
            CounterState::Uninitialized => highest_issued,
            CounterState::Active(current) => current.max(highest_issued),
        };
        self.state = CounterState::Active(floor);
    }

    pub fn current(&self) -> Option<u64> {
        match self.state {
            CounterState::Uninitialized => None,
            CounterState::Active(current) => Some(current),
        }
    }
}
