//! プロパティの意味論 (prp-*)

use super::{emit, holds, pairs};
use deduct_core::model::{Node, Triple};
use deduct_core::store::TripleStore;
use deduct_core::vocab::{owl, rdf, rdfs};
use deduct_rules::RuleContext;

pub fn apply(triple: &Triple, ctx: &mut RuleContext<'_>, out: &mut Vec<Triple>) {
    let (graph, proxies) = (ctx.graph(), ctx.proxies());
    let Triple { subject: s, predicate: p, object: o } = triple;

    if p.is(rdfs::DOMAIN) {
        // prp-dom
        for (x, _) in graph.subject_objects(s) {
            emit(out, x, rdf::TYPE, o);
        }
    } else if p.is(rdfs::RANGE) {
        // prp-rng
        for (_, y) in graph.subject_objects(s) {
            emit(out, y, rdf::TYPE, o);
        }
    } else if p.is(rdf::TYPE) {
        let Node::Iri(class) = o else { return };
        match class.as_str() {
            owl::FUNCTIONAL_PROPERTY => {
                // prp-fp
                for (x, y1) in graph.subject_objects(s) {
                    for y2 in graph.objects(x, s) {
                        if y1 != y2 {
                            emit(out, y1, owl::SAME_AS, y2);
                        }
                    }
                }
            }
            owl::INVERSE_FUNCTIONAL_PROPERTY => {
                // prp-ifp
                for (x1, y) in graph.subject_objects(s) {
                    for x2 in graph.subjects(s, y) {
                        if x1 != x2 {
                            emit(out, x1, owl::SAME_AS, x2);
                        }
                    }
                }
            }
            owl::IRREFLEXIVE_PROPERTY => {
                // prp-irp
                for (x, y) in graph.subject_objects(s) {
                    if x == y {
                        ctx.add_error(format!(
                            "Irreflexive property used on {} with {}",
                            proxies.describe(x),
                            proxies.describe(s)
                        ));
                    }
                }
            }
            owl::SYMMETRIC_PROPERTY => {
                // prp-symp
                for (x, y) in graph.subject_objects(s) {
                    out.push(Triple::new(y.clone(), s.clone(), x.clone()));
                }
            }
            owl::ASYMMETRIC_PROPERTY => {
                // prp-asyp
                for (x, y) in graph.subject_objects(s) {
                    if graph.contains(&Triple::new(y.clone(), s.clone(), x.clone())) {
                        ctx.add_error(format!(
                            "Erronous usage of asymmetric property {} on {} and {}",
                            proxies.describe(s),
                            proxies.describe(x),
                            proxies.describe(y)
                        ));
                    }
                }
            }
            owl::TRANSITIVE_PROPERTY => {
                // prp-trp
                for (x, y) in graph.subject_objects(s) {
                    for z in graph.objects(y, s) {
                        out.push(Triple::new(x.clone(), s.clone(), z.clone()));
                    }
                }
            }
            owl::ALL_DISJOINT_PROPERTIES => {
                // prp-adp
                for head in graph.objects(s, &Node::iri(owl::MEMBERS)) {
                    let properties = graph.list_items(head);
                    for (p1, p2) in pairs(&properties) {
                        for (x, y) in graph.subject_objects(p1) {
                            if graph.contains(&Triple::new(x.clone(), p2.clone(), y.clone())) {
                                let (x, y) = (proxies.describe(x), proxies.describe(y));
                                let (p1, p2) = (proxies.describe(p1), proxies.describe(p2));
                                ctx.add_error(format!(
                                    "Disjoint properties in an 'AllDisjointProperties' are not really disjoint: ({x}, {p1},{y}) and ({x},{p2},{y})"
                                ));
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    } else if p.is(rdfs::SUB_PROPERTY_OF) {
        // prp-spo1
        for (x, y) in graph.subject_objects(s) {
            out.push(Triple::new(x.clone(), o.clone(), y.clone()));
        }
    } else if p.is(owl::PROPERTY_CHAIN_AXIOM) {
        // prp-spo2
        let chain = graph.list_items(o);
        for (first, last) in chain_ends(graph, &chain) {
            out.push(Triple::new(first, s.clone(), last));
        }
    } else if p.is(owl::EQUIVALENT_PROPERTY) {
        // prp-eqp1, prp-eqp2
        if s != o {
            for (x, y) in graph.subject_objects(s) {
                out.push(Triple::new(x.clone(), o.clone(), y.clone()));
            }
            for (x, y) in graph.subject_objects(o) {
                out.push(Triple::new(x.clone(), s.clone(), y.clone()));
            }
        }
    } else if p.is(owl::PROPERTY_DISJOINT_WITH) {
        // prp-pdw
        for (x, y) in graph.subject_objects(s) {
            if graph.contains(&Triple::new(x.clone(), o.clone(), y.clone())) {
                ctx.add_error(format!(
                    "Erronous usage of disjoint properties {} and {} on {} and {}",
                    proxies.describe(s),
                    proxies.describe(o),
                    proxies.describe(x),
                    proxies.describe(y)
                ));
            }
        }
    } else if p.is(owl::INVERSE_OF) {
        // prp-inv1, prp-inv2
        for (x, y) in graph.subject_objects(s) {
            out.push(Triple::new(y.clone(), o.clone(), x.clone()));
        }
        for (x, y) in graph.subject_objects(o) {
            out.push(Triple::new(y.clone(), s.clone(), x.clone()));
        }
    } else if p.is(owl::HAS_KEY) {
        // prp-key
        let keys = graph.list_items(o);
        if keys.is_empty() {
            return;
        }
        let ty = Node::iri(rdf::TYPE);
        let instances: Vec<&Node> = graph.subjects(&ty, s).collect();
        for x in &instances {
            for values in key_values(graph, x, &keys) {
                for y in &instances {
                    if x == y || holds(graph, x, owl::SAME_AS, y) {
                        continue;
                    }
                    let same_key = keys
                        .iter()
                        .zip(&values)
                        .all(|(key, value)| graph.contains(&Triple::new((*y).clone(), key.clone(), value.clone())));
                    if same_key {
                        emit(out, x, owl::SAME_AS, y);
                    }
                }
            }
        }
    } else if p.is(owl::SOURCE_INDIVIDUAL) {
        // prp-npa1, prp-npa2
        let assertion = s;
        for property in graph.objects(assertion, &Node::iri(owl::ASSERTION_PROPERTY)) {
            for target in graph.objects(assertion, &Node::iri(owl::TARGET_INDIVIDUAL)) {
                if graph.contains(&Triple::new(o.clone(), property.clone(), target.clone())) {
                    ctx.add_error(format!(
                        "Negative (object) property assertion violated for: ({}, {}, {})",
                        proxies.describe(o),
                        proxies.describe(property),
                        proxies.describe(target)
                    ));
                }
            }
            for value in graph.objects(assertion, &Node::iri(owl::TARGET_VALUE)) {
                if graph.contains(&Triple::new(o.clone(), property.clone(), value.clone())) {
                    ctx.add_error(format!(
                        "Negative (datatype) property assertion violated for: ({}, {}, {})",
                        proxies.describe(o),
                        proxies.describe(property),
                        proxies.describe(value)
                    ));
                }
            }
        }
    }
}

/// `(u1, un+1)` for every path `u1 p1 u2 ... pn un+1` through `chain`
fn chain_ends(graph: &TripleStore, chain: &[Node]) -> Vec<(Node, Node)> {
    let Some((first, rest)) = chain.split_first() else {
        return Vec::new();
    };
    let mut paths: Vec<(Node, Node)> = graph
        .subject_objects(first)
        .map(|(start, end)| (start.clone(), end.clone()))
        .collect();
    for property in rest {
        paths = paths
            .iter()
            .flat_map(|(start, end)| graph.objects(end, property).map(move |next| (start.clone(), next.clone())))
            .collect();
        if paths.is_empty() {
            break;
        }
    }
    paths
}

/// Every combination of values `x` has for `keys`, one value per key
fn key_values(graph: &TripleStore, x: &Node, keys: &[Node]) -> Vec<Vec<Node>> {
    let mut combinations = vec![Vec::new()];
    for key in keys {
        let values: Vec<&Node> = graph.objects(x, key).collect();
        combinations = combinations
            .into_iter()
            .flat_map(|prefix| {
                values.iter().map(move |value| {
                    let mut combination: Vec<Node> = prefix.clone();
                    combination.push((*value).clone());
                    combination
                })
            })
            .collect();
    }
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{ex, run, t};
    use deduct_rules::LiteralProxies;

    fn list(graph: &mut TripleStore, id: &str, items: &[Node]) -> Node {
        for (i, item) in items.iter().enumerate() {
            let cell = Node::blank(&format!("{id}{i}"));
            let rest = if i + 1 == items.len() {
                Node::iri(rdf::NIL)
            } else {
                Node::blank(&format!("{id}{}", i + 1))
            };
            graph.add(t(&cell, rdf::FIRST, item));
            graph.add(t(&cell, rdf::REST, &rest));
        }
        Node::blank(&format!("{id}0"))
    }

    #[test]
    fn test_functional_property() {
        let mut graph = TripleStore::new();
        let decl = t(&ex("hasMother"), rdf::TYPE, &Node::iri(owl::FUNCTIONAL_PROPERTY));
        graph.add(decl.clone());
        graph.add(Triple::new(ex("tom"), ex("hasMother"), ex("ann")));
        graph.add(Triple::new(ex("tom"), ex("hasMother"), ex("anna")));

        let (out, _) = run(&graph, &LiteralProxies::new(), &decl, apply);
        assert!(out.contains(&t(&ex("ann"), owl::SAME_AS, &ex("anna"))));
        assert!(out.contains(&t(&ex("anna"), owl::SAME_AS, &ex("ann"))));
    }

    #[test]
    fn test_transitive_and_symmetric() {
        let mut graph = TripleStore::new();
        let trans = t(&ex("ancestor"), rdf::TYPE, &Node::iri(owl::TRANSITIVE_PROPERTY));
        let sym = t(&ex("ancestor"), rdf::TYPE, &Node::iri(owl::SYMMETRIC_PROPERTY));
        graph.add(Triple::new(ex("a"), ex("ancestor"), ex("b")));
        graph.add(Triple::new(ex("b"), ex("ancestor"), ex("c")));

        let (out, _) = run(&graph, &LiteralProxies::new(), &trans, apply);
        assert!(out.contains(&Triple::new(ex("a"), ex("ancestor"), ex("c"))));
        let (out, _) = run(&graph, &LiteralProxies::new(), &sym, apply);
        assert!(out.contains(&Triple::new(ex("b"), ex("ancestor"), ex("a"))));
    }

    #[test]
    fn test_property_chain() {
        let mut graph = TripleStore::new();
        let chain = list(&mut graph, "c", &[ex("hasParent"), ex("hasBrother")]);
        let axiom = t(&ex("hasUncle"), owl::PROPERTY_CHAIN_AXIOM, &chain);
        graph.add(axiom.clone());
        graph.add(Triple::new(ex("kid"), ex("hasParent"), ex("mum")));
        graph.add(Triple::new(ex("mum"), ex("hasBrother"), ex("bob")));

        let (out, _) = run(&graph, &LiteralProxies::new(), &axiom, apply);
        assert_eq!(out, vec![Triple::new(ex("kid"), ex("hasUncle"), ex("bob"))]);
    }

    #[test]
    fn test_has_key() {
        let mut graph = TripleStore::new();
        let keys = list(&mut graph, "k", &[ex("ssn")]);
        let axiom = t(&ex("Person"), owl::HAS_KEY, &keys);
        graph.add(axiom.clone());
        for who in ["p1", "p2"] {
            graph.add(t(&ex(who), rdf::TYPE, &ex("Person")));
            graph.add(Triple::new(ex(who), ex("ssn"), Node::blank("lp0")));
        }
        graph.add(t(&ex("p3"), rdf::TYPE, &ex("Person")));
        graph.add(Triple::new(ex("p3"), ex("ssn"), Node::blank("lp1")));

        let (out, _) = run(&graph, &LiteralProxies::new(), &axiom, apply);
        assert!(out.contains(&t(&ex("p1"), owl::SAME_AS, &ex("p2"))));
        assert!(out.contains(&t(&ex("p2"), owl::SAME_AS, &ex("p1"))));
        assert!(!out.iter().any(|t| t.subject == ex("p3") || t.object == ex("p3")));
    }

    #[test]
    fn test_disjoint_and_asymmetric_errors() {
        let mut graph = TripleStore::new();
        let pdw = t(&ex("likes"), owl::PROPERTY_DISJOINT_WITH, &ex("hates"));
        let asym = t(&ex("likes"), rdf::TYPE, &Node::iri(owl::ASYMMETRIC_PROPERTY));
        graph.add(Triple::new(ex("a"), ex("likes"), ex("b")));
        graph.add(Triple::new(ex("a"), ex("hates"), ex("b")));
        graph.add(Triple::new(ex("b"), ex("likes"), ex("a")));

        let (_, errors) = run(&graph, &LiteralProxies::new(), &pdw, apply);
        assert_eq!(
            errors,
            vec!["Erronous usage of disjoint properties http://example.org/likes and http://example.org/hates on http://example.org/a and http://example.org/b".to_string()]
        );
        let (_, errors) = run(&graph, &LiteralProxies::new(), &asym, apply);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_negative_property_assertion() {
        let mut graph = TripleStore::new();
        let npa = Node::blank("npa");
        let trigger = t(&npa, owl::SOURCE_INDIVIDUAL, &ex("bill"));
        graph.add(trigger.clone());
        graph.add(t(&npa, owl::ASSERTION_PROPERTY, &ex("hasWife")));
        graph.add(t(&npa, owl::TARGET_INDIVIDUAL, &ex("mary")));
        graph.add(Triple::new(ex("bill"), ex("hasWife"), ex("mary")));

        let (_, errors) = run(&graph, &LiteralProxies::new(), &trigger, apply);
        assert_eq!(
            errors,
            vec!["Negative (object) property assertion violated for: (http://example.org/bill, http://example.org/hasWife, http://example.org/mary)".to_string()]
        );
    }
}
