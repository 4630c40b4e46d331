//! # Deduct Engine
//!
//! Drives a [`RuleProfile`](deduct_rules::RuleProfile) over a
//! [`TripleStore`](deduct_core::TripleStore) until no rule adds anything,
//! expanding the graph in place to its deductive closure.
//!
//! ```no_run
//! use deduct_core::TripleStore;
//! use deduct_engine::{ClosureConfig, DeductiveClosure, ProfileKind};
//!
//! let mut graph = TripleStore::new();
//! // ... fill the graph ...
//! let closure = DeductiveClosure::new(ProfileKind::OwlRl, ClosureConfig::default());
//! let report = closure.expand(&mut graph)?;
//! for message in &report.errors {
//!     eprintln!("{message}");
//! }
//! # Ok::<(), deduct_engine::ClosureError>(())
//! ```

pub mod axioms;
pub mod closure;
pub mod config;
pub mod errors;
pub mod profile;
pub mod proxy;
pub mod report;

pub use closure::{ClosureRun, DeductiveClosure, Phase};
pub use config::ClosureConfig;
pub use errors::error_messages;
pub use profile::{ProfileKind, UnknownProfile};
pub use report::ClosureReport;

use deduct_rules::RuleError;
use thiserror::Error;

/// Closure engine errors.
///
/// Inconsistencies in the data are not errors: they are collected in
/// [`ClosureReport::errors`] and written into the graph.
#[derive(Error, Debug)]
pub enum ClosureError {
    #[error(transparent)]
    MalformedAxiom(#[from] RuleError),

    #[error("No fixpoint reached after {cycles} cycles")]
    DidNotConverge { cycles: usize },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
