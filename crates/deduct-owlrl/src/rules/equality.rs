//! 等価性の意味論 (eq-*)

use super::{emit, holds, pairs};
use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{owl, rdf};
use deduct_rules::RuleContext;

pub fn apply(triple: &Triple, ctx: &mut RuleContext<'_>, out: &mut Vec<Triple>) {
    let (graph, proxies) = (ctx.graph(), ctx.proxies());
    let Triple { subject: s, predicate: p, object: o } = triple;

    // eq-ref
    for node in [s, p, o] {
        emit(out, node, owl::SAME_AS, node);
    }

    if p.is(owl::SAME_AS) {
        // eq-sym
        emit(out, o, owl::SAME_AS, s);
        // eq-trans
        for z in graph.objects(o, p) {
            emit(out, s, owl::SAME_AS, z);
        }
        // eq-rep-s
        for (pp, oo) in graph.predicate_objects(s) {
            out.push(Triple::new(o.clone(), pp.clone(), oo.clone()));
        }
        // eq-rep-p
        for (ss, oo) in graph.subject_objects(s) {
            out.push(Triple::new(ss.clone(), o.clone(), oo.clone()));
        }
        // eq-rep-o
        for (ss, pp) in graph.subject_predicates(s) {
            out.push(Triple::new(ss.clone(), pp.clone(), o.clone()));
        }
        // eq-diff1
        if holds(graph, s, owl::DIFFERENT_FROM, o) || holds(graph, o, owl::DIFFERENT_FROM, s) {
            ctx.add_error(format!(
                "'sameAs' and 'differentFrom' cannot be used on the same subject-object pair: ({}, {})",
                proxies.describe(s),
                proxies.describe(o)
            ));
        }
    } else if p.is(rdf::TYPE) && o.is(owl::ALL_DIFFERENT) {
        // eq-diff2, eq-diff3
        for list_property in [owl::MEMBERS, owl::DISTINCT_MEMBERS] {
            for head in graph.objects(s, &Node::iri(list_property)) {
                let members = graph.list_items(head);
                for (x, y) in pairs(&members) {
                    if x != y && holds(graph, x, owl::SAME_AS, y) {
                        ctx.add_error(format!(
                            "'sameAs' and 'AllDifferent' cannot be used on the same subject-object pair: ({}, {})",
                            proxies.describe(x),
                            proxies.describe(y)
                        ));
                    }
                }
            }
        }
    }
}
