//! データ型の意味論 (dt-type1, dt-type2, dt-not-type, dt-diff)
//!
//! Computed once before the first cycle: the literal set does not change
//! during a run, so neither do these conclusions.

use deduct_core::datatypes::{disjoint_pairs, is_valid_lexical, supertypes, DatatypeSet};
use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{owl, rdf, rdfs};
use deduct_rules::RuleContext;
use std::collections::{BTreeMap, HashSet};

/// Datatype conclusions for the literals and datatype statements of the graph
pub fn datatype_rules(set: DatatypeSet, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
    let (graph, proxies) = (ctx.graph(), ctx.proxies());
    let ty = Node::iri(rdf::TYPE);
    let mut out = Vec::new();

    // datatype each proxy has by its literal
    let mut implicit: BTreeMap<Node, &'static str> = BTreeMap::new();
    // datatypes a node is typed with, by statement or through sameAs
    let mut explicit: BTreeMap<Node, Vec<&'static str>> = BTreeMap::new();
    let mut used: HashSet<&'static str> = HashSet::new();

    // dt-type2, dt-not-type
    for (literal, proxy) in proxies.iter() {
        let Some(dt) = known(set, literal.datatype().as_str()) else { continue };
        out.push(Triple::new(proxy.clone(), ty.clone(), Node::iri(dt)));
        implicit.insert(proxy.clone(), dt);
        used.insert(dt);
        if !is_valid_lexical(literal.lexical(), dt) {
            ctx.add_error(format!(
                "Literal's lexical value and datatype do not match: ({},{})",
                literal.lexical(),
                dt
            ));
        }
    }

    for (subject, object) in graph.subject_objects(&ty) {
        let Some(dt) = object.as_iri().and_then(|iri| known(set, iri.as_str())) else { continue };
        used.insert(dt);
        if !implicit.contains_key(subject) {
            explicit.entry(subject.clone()).or_default().push(dt);
        }
    }

    let same_as = Node::iri(owl::SAME_AS);
    for (s, o) in graph.subject_objects(&same_as) {
        let mut shared: Vec<&'static str> = Vec::new();
        if let Some(dt) = implicit.get(o) {
            shared.push(*dt);
        }
        if let Some(dts) = explicit.get(o) {
            shared.extend(dts);
        }
        if !shared.is_empty() {
            explicit.entry(s.clone()).or_default().extend(shared);
        }
        if let Some(dts) = explicit.get(s).cloned() {
            explicit.entry(o.clone()).or_default().extend(dts);
        }
    }

    // dt-type1
    for dt in set.iter() {
        out.push(Triple::new(Node::iri(dt), ty.clone(), Node::iri(rdfs::DATATYPE)));
    }

    // subsumption along the datatype hierarchy
    let typed = explicit
        .iter()
        .flat_map(|(node, dts)| dts.iter().map(move |dt| (node, *dt)))
        .chain(implicit.iter().map(|(node, dt)| (node, *dt)));
    for (node, dt) in typed {
        out.push(Triple::new(node.clone(), ty.clone(), Node::iri(dt)));
        for &sup in supertypes(dt) {
            out.push(Triple::new(node.clone(), ty.clone(), Node::iri(sup)));
            out.push(Triple::new(Node::iri(sup), ty.clone(), Node::iri(rdfs::DATATYPE)));
            used.insert(sup);
        }
    }

    // disjointness of the datatypes in use
    for (left, right) in disjoint_pairs() {
        if used.contains(left) && used.contains(right) {
            out.push(Triple::new(Node::iri(left), Node::iri(owl::DISJOINT_WITH), Node::iri(right)));
        }
    }

    out
}

fn known(set: DatatypeSet, datatype: &str) -> Option<&'static str> {
    set.iter().find(|dt| *dt == datatype)
}
