//! Container membership axioms

use deduct_core::model::{Node, Triple};
use deduct_core::store::TripleStore;
use deduct_core::vocab::{rdf, rdfs};
use std::collections::BTreeSet;

/// Indices `n` of the `rdf:_n` predicates used in the graph, ascending
pub fn member_indices(graph: &TripleStore) -> BTreeSet<usize> {
    graph
        .predicates()
        .filter_map(|p| p.as_iri())
        .filter_map(|iri| rdf::member_index(iri.as_str()))
        .collect()
}

/// Largest container index in use, 0 if there is none
pub fn max_member_index(indices: &BTreeSet<usize>) -> usize {
    indices.last().copied().unwrap_or(0)
}

/// Axiomatic triples for the given `rdf:_n` predicates
pub fn container_axioms(indices: &BTreeSet<usize>) -> Vec<Triple> {
    let ty = Node::iri(rdf::TYPE);
    let resource = Node::iri(rdfs::RESOURCE);
    let mut triples = Vec::with_capacity(indices.len() * 4);
    for &n in indices {
        let member = Node::iri(&rdf::member(n));
        triples.push(Triple::new(member.clone(), ty.clone(), Node::iri(rdfs::CONTAINER_MEMBERSHIP_PROPERTY)));
        triples.push(Triple::new(member.clone(), ty.clone(), Node::iri(rdf::PROPERTY)));
        triples.push(Triple::new(member.clone(), Node::iri(rdfs::DOMAIN), resource.clone()));
        triples.push(Triple::new(member, Node::iri(rdfs::RANGE), resource.clone()));
    }
    triples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_observed_indices() {
        let mut graph = TripleStore::new();
        let bag = Node::iri("http://example.org/bag");
        graph.add(Triple::new(bag.clone(), Node::iri(&rdf::member(1)), Node::iri("http://example.org/a")));
        graph.add(Triple::new(bag.clone(), Node::iri(&rdf::member(3)), Node::iri("http://example.org/c")));
        graph.add(Triple::new(bag, Node::iri(&format!("{}03", rdf::MEMBERSHIP_PREFIX)), Node::iri("http://example.org/x")));

        let indices = member_indices(&graph);
        assert_eq!(indices.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(max_member_index(&indices), 3);

        let axioms = container_axioms(&indices);
        assert_eq!(axioms.len(), 8);
        assert!(axioms.iter().all(|t| !t.subject.is(&rdf::member(2))));
        assert!(axioms.contains(&Triple::new(
            Node::iri(&rdf::member(3)),
            Node::iri(rdf::TYPE),
            Node::iri(rdfs::CONTAINER_MEMBERSHIP_PROPERTY)
        )));
    }

    #[test]
    fn test_no_containers() {
        let indices = member_indices(&TripleStore::new());
        assert!(indices.is_empty());
        assert_eq!(max_member_index(&indices), 0);
        assert!(container_axioms(&indices).is_empty());
    }
}
