//! Rule profile trait and the context rules run in

use deduct_core::model::{Literal, Node, Triple};
use deduct_core::store::TripleStore;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// A bundle of inference rules implementing one logical profile.
///
/// The engine drives a profile through one closure run:
/// `pre_process`, `axioms`, `datatype_axioms`, `one_time_rules`, then
/// `rules` for every triple of every cycle, and finally `post_process`.
/// Only `rules` is called repeatedly.
pub trait RuleProfile: Send {
    /// Profile name, used in logs and reports
    fn name(&self) -> &'static str;

    /// Inspect the input graph before anything is added.
    fn pre_process(&mut self, _graph: &TripleStore, _errors: &mut ErrorSink) {}

    /// Vocabulary axioms of the profile
    fn axioms(&self) -> Vec<Triple> {
        Vec::new()
    }

    /// Datatype axioms for the literals present in the graph
    fn datatype_axioms(&self, _ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        Vec::new()
    }

    /// Derivations computed once, before the first cycle
    fn one_time_rules(&mut self, _ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        Vec::new()
    }

    /// Triples entailed by `triple` in cycle `cycle` (starting at 1).
    ///
    /// The graph in `ctx` is read-only for the whole cycle; the result may
    /// contain triples already in the graph.
    fn rules(&mut self, triple: &Triple, cycle: usize, ctx: &mut RuleContext<'_>) -> Vec<Triple>;

    /// Checks on the restored graph, after the fixpoint
    fn post_process(&mut self, _graph: &TripleStore, _errors: &mut ErrorSink) -> Vec<Triple> {
        Vec::new()
    }
}

/// Ordered, deduplicated inconsistency messages of one run
#[derive(Debug, Clone, Default)]
pub struct ErrorSink {
    messages: Vec<String>,
    seen: HashSet<String>,
}

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message. Returns `false` if it was already recorded.
    pub fn add(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if self.seen.contains(&message) {
            return false;
        }
        trace!(%message, "inconsistency recorded");
        self.seen.insert(message.clone());
        self.messages.push(message);
        true
    }

    /// Messages in the order they were first recorded
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// Read view of the literal proxy substitution of one run.
///
/// During a run every literal of the graph is replaced by a blank node;
/// rules see only the blank node and use this view to get at the value.
#[derive(Debug, Clone, Default)]
pub struct LiteralProxies {
    by_literal: HashMap<Literal, Node>,
    by_proxy: HashMap<Node, Literal>,
    /// Literals in the order their proxies were minted
    order: Vec<Literal>,
}

impl LiteralProxies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `proxy` as the stand-in for `literal`.
    ///
    /// The first registration wins; the existing proxy is returned if the
    /// literal already has one.
    pub fn insert(&mut self, literal: Literal, proxy: Node) -> Node {
        if let Some(existing) = self.by_literal.get(&literal) {
            return existing.clone();
        }
        self.by_proxy.insert(proxy.clone(), literal.clone());
        self.by_literal.insert(literal.clone(), proxy.clone());
        self.order.push(literal);
        proxy
    }

    /// Original literal behind a proxy node
    pub fn literal_of(&self, node: &Node) -> Option<&Literal> {
        self.by_proxy.get(node)
    }

    /// Proxy node standing for a literal
    pub fn proxy_of(&self, literal: &Literal) -> Option<&Node> {
        self.by_literal.get(literal)
    }

    pub fn is_proxy(&self, node: &Node) -> bool {
        self.by_proxy.contains_key(node)
    }

    /// `(literal, proxy)` pairs in minting order
    pub fn iter(&self) -> impl Iterator<Item = (&Literal, &Node)> {
        self.order.iter().filter_map(|l| self.by_literal.get(l).map(|p| (l, p)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Human-readable form of a node for error messages: proxies show their
    /// lexical value in quotes, IRIs are shown bare.
    pub fn describe(&self, node: &Node) -> String {
        match (self.literal_of(node), node) {
            (Some(literal), _) => format!("'{}'", literal.lexical()),
            (None, Node::Iri(iri)) => iri.as_str().to_string(),
            (None, Node::Literal(literal)) => format!("'{}'", literal.lexical()),
            (None, other) => other.to_string(),
        }
    }
}

/// What a rule sees while it runs: the graph, the proxy view and the error sink
pub struct RuleContext<'a> {
    graph: &'a TripleStore,
    proxies: &'a LiteralProxies,
    errors: &'a mut ErrorSink,
}

impl<'a> RuleContext<'a> {
    pub fn new(graph: &'a TripleStore, proxies: &'a LiteralProxies, errors: &'a mut ErrorSink) -> Self {
        Self { graph, proxies, errors }
    }

    pub fn graph(&self) -> &'a TripleStore {
        self.graph
    }

    pub fn proxies(&self) -> &'a LiteralProxies {
        self.proxies
    }

    /// Record an inconsistency; processing continues
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.add(message);
    }

    /// See [`LiteralProxies::describe`]
    pub fn describe(&self, node: &Node) -> String {
        self.proxies.describe(node)
    }
}

/// Rule profile errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Malformed axiom in profile {profile}: {triple}")]
    MalformedAxiom { profile: String, triple: String },
}

/// Check that every profile-supplied axiom is a well-formed RDF triple
pub fn check_axioms(profile: &str, axioms: &[Triple]) -> Result<(), RuleError> {
    match axioms.iter().find(|t| !t.is_well_formed()) {
        Some(bad) => Err(RuleError::MalformedAxiom {
            profile: profile.to_string(),
            triple: bad.to_string(),
        }),
        None => Ok(()),
    }
}
