//! # Deduct - RDF deductive closure
//!
//! Deduct expands an RDF graph in place to its deductive closure under one
//! of three rule profiles: RDFS, OWL 2 RL, or OWL 2 RL combined with RDFS
//! and a few extras (self restrictions, exact cardinality shortcuts,
//! disjoint unions, faceted datatypes). Logical inconsistencies do not stop
//! the run; they are reported and written into the graph.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deduct::prelude::*;
//!
//! fn main() -> Result<(), ClosureError> {
//!     let mut graph = TripleStore::new();
//!     graph.add(Triple::new(
//!         Node::iri("http://example.org/Dog"),
//!         Node::iri(vocab::rdfs::SUB_CLASS_OF),
//!         Node::iri("http://example.org/Animal"),
//!     ));
//!     graph.add(Triple::new(
//!         Node::iri("http://example.org/rex"),
//!         Node::iri(vocab::rdf::TYPE),
//!         Node::iri("http://example.org/Dog"),
//!     ));
//!
//!     let report = DeductiveClosure::new(ProfileKind::Rdfs, ClosureConfig::default()).expand(&mut graph)?;
//!     println!("{} cycles, {} triples", report.cycles, report.final_triples);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`deduct-core`**: RDF model, indexed triple store, vocabulary and datatype tables
//! - **`deduct-rules`**: the `RuleProfile` trait, rule context and error sink
//! - **`deduct-rdfs`**: RDFS profile
//! - **`deduct-owlrl`**: OWL 2 RL profile and its extension
//! - **`deduct-engine`**: the closure engine
//!
//! ## Feature Flags
//!
//! - `full` (default): all crates included
//! - `core`: only the data model
//! - `rules`, `rdfs`, `owlrl`: the profile crates and what they need
//! - `engine`: the closure engine with every profile

// Re-export all public APIs from sub-crates (feature-gated)

#[cfg(feature = "deduct-core")]
pub use deduct_core as core;

#[cfg(feature = "deduct-rules")]
pub use deduct_rules as rules;

#[cfg(feature = "deduct-rdfs")]
pub use deduct_rdfs as rdfs;

#[cfg(feature = "deduct-owlrl")]
pub use deduct_owlrl as owlrl;

#[cfg(feature = "deduct-engine")]
pub use deduct_engine as engine;

// Convenience re-exports for common types (feature-gated)
#[cfg(feature = "deduct-core")]
pub use deduct_core::{model, vocab, TripleStore};

#[cfg(feature = "deduct-rules")]
pub use deduct_rules::{ErrorSink, RuleContext, RuleProfile};

#[cfg(feature = "deduct-engine")]
pub use deduct_engine::{ClosureConfig, ClosureError, ClosureReport, DeductiveClosure, ProfileKind};

// Commonly used external dependencies
pub use serde;
pub use serde_json;

/// Prelude module for convenient imports
///
/// ```rust
/// use deduct::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "deduct-core")]
    pub use crate::model::*;
    #[cfg(feature = "deduct-core")]
    pub use crate::vocab;
    #[cfg(feature = "deduct-core")]
    pub use crate::TripleStore;

    #[cfg(feature = "deduct-rules")]
    pub use crate::{RuleContext, RuleProfile};

    #[cfg(feature = "deduct-engine")]
    pub use crate::{ClosureConfig, ClosureError, ClosureReport, DeductiveClosure, ProfileKind};
    #[cfg(feature = "deduct-engine")]
    pub use deduct_engine::error_messages;
}

/// Expand `graph` under `profile` with the default configuration.
///
/// `profile` is one of `rdfs`, `owlrl` or `owlrl-ext`.
#[cfg(feature = "deduct-engine")]
pub fn expand(graph: &mut TripleStore, profile: &str) -> Result<ClosureReport, ExpandError> {
    let kind: ProfileKind = profile.parse()?;
    Ok(DeductiveClosure::new(kind, ClosureConfig::default()).expand(graph)?)
}

/// Errors of [`expand`]
#[cfg(feature = "deduct-engine")]
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    #[error(transparent)]
    Profile(#[from] deduct_engine::UnknownProfile),

    #[error(transparent)]
    Closure(#[from] ClosureError),
}

// Version information
/// Current version of Deduct
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
