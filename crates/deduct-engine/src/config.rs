//! Closure run configuration

use crate::ClosureError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options of one closure run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureConfig {
    /// Add the profile's vocabulary axioms and the container axioms
    pub axioms: bool,
    /// Add the datatype axioms for the literals of the graph
    pub datatype_axioms: bool,
    /// Give up with [`ClosureError::DidNotConverge`] if a fixpoint is not
    /// reached within this many cycles
    pub max_cycles: Option<usize>,
}

impl Default for ClosureConfig {
    fn default() -> Self {
        Self {
            axioms: false,
            datatype_axioms: false,
            max_cycles: None,
        }
    }
}

impl ClosureConfig {
    /// Both axiom families switched on
    pub fn with_axioms() -> Self {
        Self {
            axioms: true,
            datatype_axioms: true,
            ..Self::default()
        }
    }

    pub fn max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    /// Parse a JSON document; absent fields take their default
    pub fn from_json(json: &str) -> Result<Self, ClosureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClosureError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
