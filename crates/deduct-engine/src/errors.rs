//! Inconsistency messages written into the closed graph
//!
//! Each message becomes `[_:e rdf:type err:ErrorMessage; err:error "msg"]`.
//! Descriptions already in a graph are set aside while a run cycles and put
//! back before the new ones are written, so no rule ever reads them.

use deduct_core::model::{Literal, Node, Triple};
use deduct_core::store::TripleStore;
use deduct_core::vocab::{err, rdf};
use std::collections::HashSet;
use uuid::Uuid;

/// Blank node id for a message; equal messages get equal ids
fn error_node(message: &str) -> Node {
    let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, message.as_bytes());
    Node::blank(&format!("err{}", id.simple()))
}

/// Add the messages not yet present to `graph`; returns how many were added
pub fn materialize(graph: &mut TripleStore, messages: &[String]) -> usize {
    let error = Node::iri(err::ERROR);
    let mut added = 0;
    for message in messages {
        let text = Node::Literal(Literal::new_simple(message.as_str()));
        if graph.subjects(&error, &text).next().is_some() {
            continue;
        }
        let node = error_node(message);
        graph.add(Triple::new(node.clone(), Node::iri(rdf::TYPE), Node::iri(err::ERROR_MESSAGE)));
        graph.add(Triple::new(node, error.clone(), text));
        added += 1;
    }
    added
}

/// Remove the error descriptions from `graph` and return them in order
pub fn set_aside(graph: &mut TripleStore) -> Vec<Triple> {
    let typed = Node::iri(err::ERROR_MESSAGE);
    let nodes: HashSet<Node> = graph.subjects(&Node::iri(rdf::TYPE), &typed).cloned().collect();
    if nodes.is_empty() {
        return Vec::new();
    }

    let (rdf_type, error) = (Node::iri(rdf::TYPE), Node::iri(err::ERROR));
    let mut taken = Vec::new();
    graph.rewrite(|triple| {
        let describes = nodes.contains(&triple.subject)
            && ((triple.predicate == rdf_type && triple.object == typed)
                || (triple.predicate == error && triple.object.is_literal()));
        if describes {
            taken.push(triple);
            None
        } else {
            Some(triple)
        }
    });
    taken
}

/// Messages materialised in `graph`, in insertion order
pub fn error_messages(graph: &TripleStore) -> Vec<String> {
    graph
        .subject_objects(&Node::iri(err::ERROR))
        .filter_map(|(_, o)| o.as_literal())
        .map(|literal| literal.lexical().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_once() {
        let mut graph = TripleStore::new();
        let messages = vec!["first problem".to_string(), "second problem".to_string()];

        assert_eq!(materialize(&mut graph, &messages), 2);
        assert_eq!(graph.len(), 4);
        assert_eq!(materialize(&mut graph, &messages), 0);
        assert_eq!(graph.len(), 4);
        assert_eq!(error_messages(&graph), messages);
    }

    #[test]
    fn test_set_aside_and_put_back() {
        let mut graph = TripleStore::new();
        let other = Triple::new(Node::iri("http://example.org/a"), Node::iri(rdf::TYPE), Node::iri("http://example.org/C"));
        graph.add(other.clone());
        materialize(&mut graph, &["broken".to_string()]);
        let about = Triple::new(error_node("broken"), Node::iri("http://example.org/seen"), Node::iri("http://example.org/today"));
        graph.add(about.clone());

        let taken = set_aside(&mut graph);
        assert_eq!(taken.len(), 2);
        assert_eq!(graph.all(), &[other, about]);
        assert!(error_messages(&graph).is_empty());

        graph.extend(taken);
        assert_eq!(materialize(&mut graph, &["broken".to_string()]), 0);
        assert_eq!(error_messages(&graph), vec!["broken".to_string()]);
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn test_set_aside_without_errors() {
        let mut graph = TripleStore::new();
        graph.add(Triple::new(Node::iri("http://example.org/a"), Node::iri(err::ERROR), Node::iri("http://example.org/b")));
        assert!(set_aside(&mut graph).is_empty());
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_error_nodes_are_deterministic() {
        assert_eq!(error_node("x"), error_node("x"));
        assert_ne!(error_node("x"), error_node("y"));
        let typed = Node::iri(err::ERROR_MESSAGE);
        let mut graph = TripleStore::new();
        materialize(&mut graph, &["x".to_string()]);
        assert_eq!(graph.subjects(&Node::iri(rdf::TYPE), &typed).next(), Some(&error_node("x")));
    }
}
