//! # Deduct Rules
//!
//! The [`RuleProfile`] trait every reasoner implements, the [`RuleContext`]
//! rules run in, the [`ErrorSink`] collecting inconsistencies and the
//! [`LiteralProxies`] view of the literal substitution.

pub mod datatype;
pub mod traits;

pub use traits::*;
