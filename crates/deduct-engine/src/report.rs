//! Closure run summary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What one closure run did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosureReport {
    /// Name of the rule profile
    pub profile: String,
    /// Rule cycles run, the last one adding nothing
    pub cycles: usize,
    pub initial_triples: usize,
    pub final_triples: usize,
    /// Largest `rdf:_n` index seen in the input (IMaxNum)
    pub max_member_index: usize,
    /// Distinct literals that were proxied
    pub literals: usize,
    /// Inconsistencies in the order they were found
    pub errors: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub execution_time_ms: u64,
}

impl ClosureReport {
    pub fn is_consistent(&self) -> bool {
        self.errors.is_empty()
    }

    /// Triples the run added, error descriptions included
    pub fn inferred_triples(&self) -> usize {
        self.final_triples.saturating_sub(self.initial_triples)
    }
}
