//! クラス公理 (cax-*)

use super::{emit, holds, pairs};
use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{owl, rdf, rdfs};
use deduct_rules::RuleContext;

pub fn apply(triple: &Triple, ctx: &mut RuleContext<'_>, out: &mut Vec<Triple>) {
    let (graph, proxies) = (ctx.graph(), ctx.proxies());
    let Triple { subject: s, predicate: p, object: o } = triple;
    let ty = Node::iri(rdf::TYPE);

    if p.is(rdfs::SUB_CLASS_OF) {
        // cax-sco
        if s != o {
            for x in graph.subjects(&ty, s) {
                emit(out, x, rdf::TYPE, o);
            }
        }
    } else if p.is(owl::EQUIVALENT_CLASS) {
        // cax-eqc1, cax-eqc2
        if s != o {
            for x in graph.subjects(&ty, s) {
                emit(out, x, rdf::TYPE, o);
            }
            for x in graph.subjects(&ty, o) {
                emit(out, x, rdf::TYPE, s);
            }
        }
    } else if p.is(owl::DISJOINT_WITH) {
        // cax-dw
        for x in graph.subjects(&ty, s) {
            if holds(graph, x, rdf::TYPE, o) {
                ctx.add_error(disjoint_message(&proxies.describe(s), &proxies.describe(o), &proxies.describe(x)));
            }
        }
    } else if p.is(rdf::TYPE) && o.is(owl::ALL_DISJOINT_CLASSES) {
        // cax-adc
        for head in graph.objects(s, &Node::iri(owl::MEMBERS)) {
            let classes = graph.list_items(head);
            for (c1, c2) in pairs(&classes) {
                for x in graph.subjects(&ty, c1) {
                    if holds(graph, x, rdf::TYPE, c2) {
                        ctx.add_error(disjoint_message(
                            &proxies.describe(c1),
                            &proxies.describe(c2),
                            &proxies.describe(x),
                        ));
                    }
                }
            }
        }
    }
}

pub(crate) fn disjoint_message(c1: &str, c2: &str, x: &str) -> String {
    format!("Disjoint classes {c1} and {c2} have a common individual {x}")
}
