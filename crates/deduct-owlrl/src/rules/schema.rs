//! スキーマ語彙の意味論 (scm-*)

use super::{emit, holds};
use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{owl, rdf, rdfs};
use deduct_rules::RuleContext;

pub fn apply(triple: &Triple, ctx: &mut RuleContext<'_>, out: &mut Vec<Triple>) {
    let graph = ctx.graph();
    let Triple { subject: s, predicate: p, object: o } = triple;
    let on_property = Node::iri(owl::ON_PROPERTY);

    let Node::Iri(predicate) = p else { return };
    match predicate.as_str() {
        rdf::TYPE => {
            if o.is(owl::CLASS) {
                // scm-cls
                emit(out, s, rdfs::SUB_CLASS_OF, s);
                emit(out, s, owl::EQUIVALENT_CLASS, s);
                emit(out, s, rdfs::SUB_CLASS_OF, &Node::iri(owl::THING));
                emit(out, &Node::iri(owl::NOTHING), rdfs::SUB_CLASS_OF, s);
            } else if o.is(owl::OBJECT_PROPERTY) || o.is(owl::DATATYPE_PROPERTY) || o.is(rdf::PROPERTY) {
                // scm-op, scm-dp
                emit(out, s, rdfs::SUB_PROPERTY_OF, s);
                emit(out, s, owl::EQUIVALENT_PROPERTY, s);
            }
        }
        rdfs::SUB_CLASS_OF => {
            // scm-sco
            for c3 in graph.objects(o, p) {
                emit(out, s, rdfs::SUB_CLASS_OF, c3);
            }
            // scm-eqc2
            if holds(graph, o, rdfs::SUB_CLASS_OF, s) {
                emit(out, s, owl::EQUIVALENT_CLASS, o);
            }
        }
        owl::EQUIVALENT_CLASS => {
            // scm-eqc1
            emit(out, s, rdfs::SUB_CLASS_OF, o);
            emit(out, o, rdfs::SUB_CLASS_OF, s);
        }
        rdfs::SUB_PROPERTY_OF => {
            // scm-spo
            for p3 in graph.objects(o, p) {
                emit(out, s, rdfs::SUB_PROPERTY_OF, p3);
            }
            // scm-eqp2
            if holds(graph, o, rdfs::SUB_PROPERTY_OF, s) {
                emit(out, s, owl::EQUIVALENT_PROPERTY, o);
            }
        }
        owl::EQUIVALENT_PROPERTY => {
            // scm-eqp1
            emit(out, s, rdfs::SUB_PROPERTY_OF, o);
            emit(out, o, rdfs::SUB_PROPERTY_OF, s);
        }
        rdfs::DOMAIN | rdfs::RANGE => {
            // scm-dom1, scm-rng1
            for c2 in graph.objects(o, &Node::iri(rdfs::SUB_CLASS_OF)) {
                out.push(Triple::new(s.clone(), p.clone(), c2.clone()));
            }
            // scm-dom2, scm-rng2
            for p1 in graph.subjects(&Node::iri(rdfs::SUB_PROPERTY_OF), s) {
                out.push(Triple::new(p1.clone(), p.clone(), o.clone()));
            }
        }
        owl::HAS_VALUE => {
            // scm-hv
            for p1 in graph.objects(s, &on_property) {
                for c2 in graph.subjects(p, o) {
                    for p2 in graph.objects(c2, &on_property) {
                        if holds(graph, p1, rdfs::SUB_PROPERTY_OF, p2) {
                            emit(out, s, rdfs::SUB_CLASS_OF, c2);
                        }
                    }
                }
            }
        }
        owl::SOME_VALUES_FROM | owl::ALL_VALUES_FROM => {
            let universal = p.is(owl::ALL_VALUES_FROM);
            for p1 in graph.objects(s, &on_property) {
                // scm-svf1, scm-avf1: same property, related fillers
                for c2 in graph.subjects(&on_property, p1) {
                    for y2 in graph.objects(c2, p) {
                        if holds(graph, o, rdfs::SUB_CLASS_OF, y2) {
                            emit(out, s, rdfs::SUB_CLASS_OF, c2);
                        }
                    }
                }
                // scm-svf2, scm-avf2: same filler, related properties
                for c2 in graph.subjects(p, o) {
                    for p2 in graph.objects(c2, &on_property) {
                        if holds(graph, p1, rdfs::SUB_PROPERTY_OF, p2) {
                            if universal {
                                emit(out, c2, rdfs::SUB_CLASS_OF, s);
                            } else {
                                emit(out, s, rdfs::SUB_CLASS_OF, c2);
                            }
                        }
                    }
                }
            }
        }
        owl::INTERSECTION_OF => {
            // scm-int
            for c in graph.list_items(o) {
                emit(out, s, rdfs::SUB_CLASS_OF, &c);
            }
        }
        owl::UNION_OF => {
            // scm-uni
            for c in graph.list_items(o) {
                emit(out, &c, rdfs::SUB_CLASS_OF, s);
            }
        }
        _ => {}
    }
}
