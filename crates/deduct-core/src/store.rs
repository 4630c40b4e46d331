//! Graph storage and lookup

use crate::model::{Node, Triple};
use crate::vocab::rdf;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

type Postings = SmallVec<[usize; 8]>;

/// In-memory triple store with indexing for fast lookups.
///
/// The store is a set: adding a triple that is already present is a no-op.
/// Triples keep their insertion order, which makes iteration deterministic.
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    triples: Vec<Triple>,
    /// Position of each triple in `triples`
    positions: HashMap<Triple, usize>,
    /// Subject index: subject -> positions of its triples
    subject_index: HashMap<Node, Postings>,
    /// Predicate index: predicate -> positions
    predicate_index: HashMap<Node, Postings>,
    /// Object index: object -> positions
    object_index: HashMap<Node, Postings>,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple. Returns `true` iff it was not present before.
    pub fn add(&mut self, triple: Triple) -> bool {
        if self.positions.contains_key(&triple) {
            return false;
        }
        let index = self.triples.len();

        // Update indices
        self.subject_index.entry(triple.subject.clone()).or_default().push(index);
        self.predicate_index.entry(triple.predicate.clone()).or_default().push(index);
        self.object_index.entry(triple.object.clone()).or_default().push(index);

        self.positions.insert(triple.clone(), index);
        self.triples.push(triple);
        true
    }

    /// Add every triple of `triples`, returning how many were new
    pub fn extend<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> usize {
        let mut added = 0;
        for triple in triples {
            if self.add(triple) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.positions.contains_key(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all triples in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// All triples as a slice, in insertion order
    pub fn all(&self) -> &[Triple] {
        &self.triples
    }

    /// Objects `o` such that `(subject predicate o)` is in the store
    pub fn objects<'a>(&'a self, subject: &Node, predicate: &Node) -> impl Iterator<Item = &'a Node> + 'a {
        self.matching(Some(subject), Some(predicate), None).map(|t| &t.object)
    }

    /// Subjects `s` such that `(s predicate object)` is in the store
    pub fn subjects<'a>(&'a self, predicate: &Node, object: &Node) -> impl Iterator<Item = &'a Node> + 'a {
        self.matching(None, Some(predicate), Some(object)).map(|t| &t.subject)
    }

    /// `(s, o)` pairs for every triple with the given predicate
    pub fn subject_objects<'a>(&'a self, predicate: &Node) -> impl Iterator<Item = (&'a Node, &'a Node)> + 'a {
        self.matching(None, Some(predicate), None).map(|t| (&t.subject, &t.object))
    }

    /// `(p, o)` pairs for every triple with the given subject
    pub fn predicate_objects<'a>(&'a self, subject: &Node) -> impl Iterator<Item = (&'a Node, &'a Node)> + 'a {
        self.matching(Some(subject), None, None).map(|t| (&t.predicate, &t.object))
    }

    /// `(s, p)` pairs for every triple with the given object
    pub fn subject_predicates<'a>(&'a self, object: &Node) -> impl Iterator<Item = (&'a Node, &'a Node)> + 'a {
        self.matching(None, None, Some(object)).map(|t| (&t.subject, &t.predicate))
    }

    /// First object of `(subject predicate ?)`, if any
    pub fn object(&self, subject: &Node, predicate: &Node) -> Option<&Node> {
        self.objects(subject, predicate).next()
    }

    /// Find triples matching a pattern; `None` is a wildcard
    pub fn triples(&self, subject: Option<&Node>, predicate: Option<&Node>, object: Option<&Node>) -> Vec<&Triple> {
        self.matching(subject, predicate, object).collect()
    }

    /// Distinct predicates, in order of first use
    pub fn predicates(&self) -> impl Iterator<Item = &Node> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.predicate)
            .filter(move |p| seen.insert(*p))
    }

    /// Items of the RDF collection starting at `head`.
    ///
    /// The walk stops at `rdf:nil`, at a node without `rdf:rest`, or when a
    /// node is visited twice, so malformed or cyclic lists terminate.
    pub fn list_items(&self, head: &Node) -> Vec<Node> {
        let first = Node::iri(rdf::FIRST);
        let rest = Node::iri(rdf::REST);
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut current = head.clone();

        while !current.is(rdf::NIL) && visited.insert(current.clone()) {
            if let Some(item) = self.object(&current, &first) {
                items.push(item.clone());
            }
            match self.object(&current, &rest) {
                Some(next) => current = next.clone(),
                None => break,
            }
        }
        items
    }

    /// Rebuild the store by passing every triple through `f`.
    ///
    /// Triples mapped to `None` are dropped; duplicates produced by the
    /// mapping collapse. Insertion order is kept.
    pub fn rewrite<F>(&mut self, mut f: F)
    where
        F: FnMut(Triple) -> Option<Triple>,
    {
        let old = std::mem::take(&mut self.triples);
        self.clear();
        for triple in old {
            if let Some(mapped) = f(triple) {
                self.add(mapped);
            }
        }
    }

    pub fn clear(&mut self) {
        self.triples.clear();
        self.positions.clear();
        self.subject_index.clear();
        self.predicate_index.clear();
        self.object_index.clear();
    }

    /// Use the most selective index to minimize the search space
    fn matching<'a>(
        &'a self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        let candidates: Option<&[usize]> = [
            subject.map(|s| Self::postings(&self.subject_index, s)),
            predicate.map(|p| Self::postings(&self.predicate_index, p)),
            object.map(|o| Self::postings(&self.object_index, o)),
        ]
        .into_iter()
        .flatten()
        .min_by_key(|postings| postings.len());

        let positions: Vec<usize> = match candidates {
            Some(postings) => postings.to_vec(),
            None => (0..self.triples.len()).collect(),
        };
        let subject = subject.cloned();
        let predicate = predicate.cloned();
        let object = object.cloned();

        positions.into_iter().filter_map(move |i| {
            let t = &self.triples[i];
            let hit = subject.as_ref().map_or(true, |s| &t.subject == s)
                && predicate.as_ref().map_or(true, |p| &t.predicate == p)
                && object.as_ref().map_or(true, |o| &t.object == o);
            hit.then_some(t)
        })
    }

    fn postings<'a>(index: &'a HashMap<Node, Postings>, key: &Node) -> &'a [usize] {
        index.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

impl FromIterator<Triple> for TripleStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = TripleStore::new();
        store.extend(iter);
        store
    }
}

impl<'a> IntoIterator for &'a TripleStore {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
