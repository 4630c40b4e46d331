//! Literal proxy substitution
//!
//! Before the first cycle every literal in the graph is replaced by a blank
//! proxy node so that rules may put it in subject position; after the
//! fixpoint the proxies are mapped back.

use deduct_core::model::{Node, Triple};
use deduct_core::store::TripleStore;
use deduct_rules::LiteralProxies;
use std::collections::HashSet;
use tracing::debug;

const PROXY_PREFIX: &str = "lp";

/// Mints proxy ids that do not clash with blank nodes already in the graph
struct ProxyIds {
    taken: HashSet<String>,
    next: usize,
}

impl ProxyIds {
    fn for_graph(graph: &TripleStore) -> Self {
        let taken = graph
            .iter()
            .flat_map(|t| t.nodes())
            .filter_map(|n| n.as_blank())
            .map(|b| b.id().to_string())
            .collect();
        Self { taken, next: 0 }
    }

    fn mint(&mut self) -> Node {
        loop {
            let id = format!("{PROXY_PREFIX}{}", self.next);
            self.next += 1;
            if !self.taken.contains(&id) {
                return Node::blank(&id);
            }
        }
    }
}

/// Replace every literal of `graph` by its proxy and return the mapping.
///
/// Equal literals share one proxy. Proxies are minted in order of first
/// occurrence.
pub fn substitute(graph: &mut TripleStore) -> LiteralProxies {
    let mut ids = ProxyIds::for_graph(graph);
    let mut proxies = LiteralProxies::new();
    for triple in graph.iter() {
        for node in triple.nodes() {
            if let Node::Literal(literal) = node {
                if proxies.proxy_of(literal).is_none() {
                    proxies.insert(literal.clone(), ids.mint());
                }
            }
        }
    }

    if !proxies.is_empty() {
        let to_proxy = |node: Node| {
            let proxy = node.as_literal().and_then(|l| proxies.proxy_of(l)).cloned();
            proxy.unwrap_or(node)
        };
        graph.rewrite(|t| Some(Triple::new(to_proxy(t.subject), to_proxy(t.predicate), to_proxy(t.object))));
    }
    debug!(literals = proxies.len(), "literals replaced by proxies");
    proxies
}

/// Map every proxy back to its literal.
///
/// Triples that would end up with a literal subject or predicate are not
/// RDF and are dropped; the number dropped is returned.
pub fn restore(graph: &mut TripleStore, proxies: &LiteralProxies) -> usize {
    if proxies.is_empty() {
        return 0;
    }
    let to_literal = |node: Node| match proxies.literal_of(&node) {
        Some(literal) => Node::Literal(literal.clone()),
        None => node,
    };
    let mut dropped = 0;
    graph.rewrite(|t| {
        let restored = Triple::new(to_literal(t.subject), to_literal(t.predicate), to_literal(t.object));
        if restored.subject.is_literal() || restored.predicate.is_literal() {
            dropped += 1;
            None
        } else {
            Some(restored)
        }
    });
    debug!(dropped, "proxies restored");
    dropped
}
