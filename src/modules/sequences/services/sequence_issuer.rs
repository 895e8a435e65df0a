use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::core::{AppError, Result};
use crate::modules::sequences::models::{SequenceCounter, SequenceTemplate};

/// Issues strictly increasing, never-reused reference codes per namespace
/// (invoice numbers, employee codes, letter references).
///
/// The only stateful component of the engine. All counters live behind one
/// mutex, so concurrent `issue_next` calls for the same namespace can never
/// observe or emit the same value. Namespaces are fully independent.
///
/// Counters here are process-local; a deployment with multiple writer
/// processes must seed from, and persist to, a durable counter owned by the
/// backend (the persistence layer reports the highest issued code per
/// namespace on restart, which feeds [`SequenceIssuer::seed`]).
#[derive(Debug, Default)]
pub struct SequenceIssuer {
    counters: Mutex<HashMap<String, SequenceCounter>>,
}

impl SequenceIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a namespace with its format template.
    ///
    /// Re-registering an existing namespace replaces the template but keeps
    /// the counter state, so issued values stay monotonic.
    pub fn register(&self, namespace: &str, template: SequenceTemplate) {
        let mut counters = self.counters.lock();
        match counters.get_mut(namespace) {
            Some(counter) => counter.set_template(template),
            None => {
                info!(namespace, template = %template, "registered sequence namespace");
                counters.insert(
                    namespace.to_string(),
                    SequenceCounter::new(namespace, template),
                );
            }
        }
    }

    /// Seed a namespace from the highest value already issued in persisted
    /// records. Never lowers an active counter.
    pub fn seed(&self, namespace: &str, highest_issued: u64) -> Result<()> {
        let mut counters = self.counters.lock();
        let counter = counters
            .get_mut(namespace)
            .ok_or_else(|| AppError::UnknownSequenceNamespace(namespace.to_string()))?;
        counter.seed(highest_issued);
        info!(namespace, highest_issued, "seeded sequence counter");
        Ok(())
    }

    /// Atomically advance the namespace counter and return the issued code
    pub fn issue_next(&self, namespace: &str) -> Result<String> {
        let mut counters = self.counters.lock();
        let counter = counters
            .get_mut(namespace)
            .ok_or_else(|| AppError::UnknownSequenceNamespace(namespace.to_string()))?;
        let code = counter.issue();
        debug!(namespace, %code, "issued reference code");
        Ok(code)
    }

    /// Format the code the next issue would return, without mutating state.
    /// For display before commit.
    pub fn peek_next(&self, namespace: &str) -> Result<String> {
        let counters = self.counters.lock();
        let counter = counters
            .get(namespace)
            .ok_or_else(|| AppError::UnknownSequenceNamespace(namespace.to_string()))?;
        Ok(counter.peek())
    }

    /// Highest value issued so far, None while Uninitialized
    pub fn current(&self, namespace: &str) -> Result<Option<u64>> {
        let counters = self.counters.lock();
        let counter = counters
            .get(namespace)
            .ok_or_else(|| AppError::UnknownSequenceNamespace(namespace.to_string()))?;
        Ok(counter.current())
    }
}
