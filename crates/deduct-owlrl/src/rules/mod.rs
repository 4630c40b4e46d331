//! OWL 2 RL 規則表
//!
//! One module per table of the OWL 2 RL rule set. Every table looks at the
//! trigger triple, reads the graph and pushes its conclusions; the tables are
//! independent of each other.

pub mod class_axioms;
pub mod classes;
pub mod equality;
pub mod properties;
pub mod schema;

use crate::restricted::RestrictedDatatype;
use deduct_core::model::{Node, Triple};
use deduct_core::store::TripleStore;
use deduct_rules::{LiteralProxies, RuleContext};

/// Apply every OWL RL table to `triple`.
///
/// `restrictions` are the faceted datatypes `cls-avf` checks values against;
/// the core profile passes none.
pub fn owl_rl_rules(triple: &Triple, ctx: &mut RuleContext<'_>, restrictions: &[RestrictedDatatype]) -> Vec<Triple> {
    let mut out = Vec::new();
    equality::apply(triple, ctx, &mut out);
    properties::apply(triple, ctx, &mut out);
    classes::apply(triple, ctx, restrictions, &mut out);
    class_axioms::apply(triple, ctx, &mut out);
    schema::apply(triple, ctx, &mut out);
    out
}

pub(crate) fn emit(out: &mut Vec<Triple>, subject: &Node, predicate: &str, object: &Node) {
    out.push(Triple::new(subject.clone(), Node::iri(predicate), object.clone()));
}

pub(crate) fn holds(graph: &TripleStore, subject: &Node, predicate: &str, object: &Node) -> bool {
    graph.contains(&Triple::new(subject.clone(), Node::iri(predicate), object.clone()))
}

/// Unordered pairs of distinct positions in `items`
pub(crate) fn pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| items[i + 1..].iter().map(move |b| (a, b)))
}

/// Integer value behind a proxied cardinality literal
pub(crate) fn cardinality(node: &Node, proxies: &LiteralProxies) -> Option<u64> {
    let literal = proxies.literal_of(node).or_else(|| node.as_literal())?;
    literal.lexical().trim().parse().ok()
}

#[cfg(test)]
pub(crate) mod test_support {
    use deduct_core::model::{Iri, Literal, Node, Triple};
    use deduct_core::store::TripleStore;
    use deduct_rules::{ErrorSink, LiteralProxies, RuleContext};

    pub fn ex(name: &str) -> Node {
        Node::iri(&format!("http://example.org/{name}"))
    }

    pub fn t(s: &Node, p: &str, o: &Node) -> Triple {
        Triple::new(s.clone(), Node::iri(p), o.clone())
    }

    /// `(proxy, literal)` for an integer literal under proxy id `id`
    pub fn int_proxy(proxies: &mut LiteralProxies, id: &str, value: u64) -> Node {
        let literal = Literal::new_typed(
            value.to_string(),
            Iri::new_unchecked(deduct_core::vocab::xsd::NON_NEGATIVE_INTEGER),
        );
        proxies.insert(literal, Node::blank(id))
    }

    /// Run `rule` on `trigger` over `graph`; returns conclusions and errors
    pub fn run<F>(graph: &TripleStore, proxies: &LiteralProxies, trigger: &Triple, rule: F) -> (Vec<Triple>, Vec<String>)
    where
        F: FnOnce(&Triple, &mut RuleContext<'_>, &mut Vec<Triple>),
    {
        let mut errors = ErrorSink::new();
        let mut out = Vec::new();
        {
            let mut ctx = RuleContext::new(graph, proxies, &mut errors);
            rule(trigger, &mut ctx, &mut out);
        }
        (out, errors.into_messages())
    }
}
