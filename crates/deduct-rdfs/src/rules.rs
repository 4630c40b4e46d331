//! RDFS 推論規則 (rdf1, rdfs2 - rdfs13)

use deduct_core::model::{Node, Triple};
use deduct_core::store::TripleStore;
use deduct_core::vocab::{rdf, rdfs};

/// RDFS の推論規則を一つのトリプルに適用する
///
/// `graph` is only read. Results may repeat triples already in the graph.
pub fn rdfs_rules(triple: &Triple, graph: &TripleStore) -> Vec<Triple> {
    let Triple { subject: s, predicate: p, object: o } = triple;
    let ty = Node::iri(rdf::TYPE);
    let mut out = Vec::new();

    // rdf1
    out.push(Triple::new(p.clone(), ty.clone(), Node::iri(rdf::PROPERTY)));
    // rdfs4a, rdfs4b
    out.push(Triple::new(s.clone(), ty.clone(), Node::iri(rdfs::RESOURCE)));
    out.push(Triple::new(o.clone(), ty.clone(), Node::iri(rdfs::RESOURCE)));

    if p.is(rdfs::DOMAIN) {
        // rdfs2
        for (x, _) in graph.subject_objects(s) {
            out.push(Triple::new(x.clone(), ty.clone(), o.clone()));
        }
    } else if p.is(rdfs::RANGE) {
        // rdfs3
        for (_, y) in graph.subject_objects(s) {
            out.push(Triple::new(y.clone(), ty.clone(), o.clone()));
        }
    } else if p.is(rdfs::SUB_PROPERTY_OF) {
        // rdfs5
        for sup in graph.objects(o, &Node::iri(rdfs::SUB_PROPERTY_OF)) {
            out.push(Triple::new(s.clone(), p.clone(), sup.clone()));
        }
        // rdfs7
        for (x, y) in graph.subject_objects(s) {
            out.push(Triple::new(x.clone(), o.clone(), y.clone()));
        }
    } else if p.is(rdfs::SUB_CLASS_OF) {
        // rdfs9
        for x in graph.subjects(&ty, s) {
            out.push(Triple::new(x.clone(), ty.clone(), o.clone()));
        }
        // rdfs11
        for sup in graph.objects(o, p) {
            out.push(Triple::new(s.clone(), p.clone(), sup.clone()));
        }
    } else if p.is(rdf::TYPE) {
        if o.is(rdf::PROPERTY) {
            // rdfs6
            out.push(Triple::new(s.clone(), Node::iri(rdfs::SUB_PROPERTY_OF), s.clone()));
        } else if o.is(rdfs::CLASS) {
            // rdfs8, rdfs10
            out.push(Triple::new(s.clone(), Node::iri(rdfs::SUB_CLASS_OF), Node::iri(rdfs::RESOURCE)));
            out.push(Triple::new(s.clone(), Node::iri(rdfs::SUB_CLASS_OF), s.clone()));
        } else if o.is(rdfs::CONTAINER_MEMBERSHIP_PROPERTY) {
            // rdfs12
            out.push(Triple::new(s.clone(), Node::iri(rdfs::SUB_PROPERTY_OF), Node::iri(rdfs::MEMBER)));
        } else if o.is(rdfs::DATATYPE) {
            // rdfs13
            out.push(Triple::new(s.clone(), Node::iri(rdfs::SUB_CLASS_OF), Node::iri(rdfs::LITERAL)));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(name: &str) -> Node {
        Node::iri(&format!("http://example.org/{name}"))
    }

    fn fires(graph: &TripleStore, trigger: &Triple, expected: Triple) {
        let derived = rdfs_rules(trigger, graph);
        assert!(derived.contains(&expected), "{trigger} should derive {expected}");
    }

    #[test]
    fn test_domain_and_range() {
        let mut graph = TripleStore::new();
        let domain = Triple::new(ex("p"), Node::iri(rdfs::DOMAIN), ex("D"));
        let range = Triple::new(ex("p"), Node::iri(rdfs::RANGE), ex("R"));
        graph.add(domain.clone());
        graph.add(range.clone());
        graph.add(Triple::new(ex("a"), ex("p"), ex("b")));

        fires(&graph, &domain, Triple::new(ex("a"), Node::iri(rdf::TYPE), ex("D")));
        fires(&graph, &range, Triple::new(ex("b"), Node::iri(rdf::TYPE), ex("R")));
    }

    #[test]
    fn test_subproperty_propagation() {
        let mut graph = TripleStore::new();
        let sub = Triple::new(ex("p"), Node::iri(rdfs::SUB_PROPERTY_OF), ex("q"));
        graph.add(sub.clone());
        graph.add(Triple::new(ex("q"), Node::iri(rdfs::SUB_PROPERTY_OF), ex("r")));
        graph.add(Triple::new(ex("a"), ex("p"), ex("b")));

        fires(&graph, &sub, Triple::new(ex("a"), ex("q"), ex("b")));
        fires(&graph, &sub, Triple::new(ex("p"), Node::iri(rdfs::SUB_PROPERTY_OF), ex("r")));
    }

    #[test]
    fn test_subclass_propagation() {
        let mut graph = TripleStore::new();
        let sub = Triple::new(ex("A"), Node::iri(rdfs::SUB_CLASS_OF), ex("B"));
        graph.add(sub.clone());
        graph.add(Triple::new(ex("B"), Node::iri(rdfs::SUB_CLASS_OF), ex("C")));
        graph.add(Triple::new(ex("x"), Node::iri(rdf::TYPE), ex("A")));

        fires(&graph, &sub, Triple::new(ex("x"), Node::iri(rdf::TYPE), ex("B")));
        fires(&graph, &sub, Triple::new(ex("A"), Node::iri(rdfs::SUB_CLASS_OF), ex("C")));
    }

    #[test]
    fn test_type_driven_rules() {
        let graph = TripleStore::new();
        let ty = Node::iri(rdf::TYPE);

        fires(
            &graph,
            &Triple::new(ex("p"), ty.clone(), Node::iri(rdf::PROPERTY)),
            Triple::new(ex("p"), Node::iri(rdfs::SUB_PROPERTY_OF), ex("p")),
        );
        fires(
            &graph,
            &Triple::new(ex("C"), ty.clone(), Node::iri(rdfs::CLASS)),
            Triple::new(ex("C"), Node::iri(rdfs::SUB_CLASS_OF), Node::iri(rdfs::RESOURCE)),
        );
        fires(
            &graph,
            &Triple::new(ex("m"), ty.clone(), Node::iri(rdfs::CONTAINER_MEMBERSHIP_PROPERTY)),
            Triple::new(ex("m"), Node::iri(rdfs::SUB_PROPERTY_OF), Node::iri(rdfs::MEMBER)),
        );
        fires(
            &graph,
            &Triple::new(ex("dt"), ty.clone(), Node::iri(rdfs::DATATYPE)),
            Triple::new(ex("dt"), Node::iri(rdfs::SUB_CLASS_OF), Node::iri(rdfs::LITERAL)),
        );
    }

    #[test]
    fn test_every_triple_types_its_terms() {
        let graph = TripleStore::new();
        let t = Triple::new(ex("a"), ex("p"), ex("b"));
        let derived = rdfs_rules(&t, &graph);
        assert!(derived.contains(&Triple::new(ex("p"), Node::iri(rdf::TYPE), Node::iri(rdf::PROPERTY))));
        assert!(derived.contains(&Triple::new(ex("a"), Node::iri(rdf::TYPE), Node::iri(rdfs::RESOURCE))));
        assert!(derived.contains(&Triple::new(ex("b"), Node::iri(rdf::TYPE), Node::iri(rdfs::RESOURCE))));
    }
}
