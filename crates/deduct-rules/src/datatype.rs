//! Datatype axioms shared by the profiles

use crate::traits::LiteralProxies;
use deduct_core::datatypes::{supertypes, DatatypeSet};
use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{rdf, rdfs};

/// Typing triples for every proxied literal whose datatype is in `set`.
///
/// For a literal of datatype `dt` behind proxy `x` this yields
/// `(x rdf:type dt)`, `(dt rdf:type rdfs:Datatype)` and the same pair for
/// every supertype of `dt`.
pub fn literal_typing(set: DatatypeSet, proxies: &LiteralProxies) -> Vec<Triple> {
    let mut triples = Vec::new();
    for (literal, proxy) in proxies.iter() {
        let dt = literal.datatype().as_str();
        if !set.contains(dt) {
            continue;
        }
        for ty in std::iter::once(dt).chain(supertypes(dt).iter().copied()) {
            triples.push(Triple::new(proxy.clone(), Node::iri(rdf::TYPE), Node::iri(ty)));
            triples.push(Triple::new(Node::iri(ty), Node::iri(rdf::TYPE), Node::iri(rdfs::DATATYPE)));
        }
    }
    triples
}

/// Datatypes used by the proxied literals, in first-use order, restricted to `set`
pub fn used_datatypes(set: DatatypeSet, proxies: &LiteralProxies) -> Vec<&'static str> {
    let mut used: Vec<&'static str> = Vec::new();
    for (literal, _) in proxies.iter() {
        let dt = literal.datatype().as_str();
        if let Some(known) = set.iter().find(|known| *known == dt) {
            for ty in std::iter::once(known).chain(supertypes(known).iter().copied()) {
                if !used.contains(&ty) {
                    used.push(ty);
                }
            }
        }
    }
    used
}
