//! OWL 2 RL コアプロファイル

use crate::axioms::{owl_rl_axioms, ANNOTATION_PROPERTIES};
use crate::datatypes::datatype_rules;
use crate::rules::owl_rl_rules;
use deduct_core::datatypes::DatatypeSet;
use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{owl, rdf};
use deduct_rules::datatype::literal_typing;
use deduct_rules::{RuleContext, RuleProfile};

/// OWL 2 RL 推論プロファイル
#[derive(Debug, Default, Clone)]
pub struct OwlRlProfile;

impl OwlRlProfile {
    pub fn new() -> Self {
        Self
    }
}

/// One-time rules shared by the OWL RL profiles: cls-thing, cls-nothing1,
/// prp-ap and the datatype rules over `set`
pub fn owl_rl_one_time_rules(set: DatatypeSet, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
    let ty = Node::iri(rdf::TYPE);
    let mut triples = vec![
        Triple::new(Node::iri(owl::THING), ty.clone(), Node::iri(owl::CLASS)),
        Triple::new(Node::iri(owl::NOTHING), ty.clone(), Node::iri(owl::CLASS)),
    ];
    for property in ANNOTATION_PROPERTIES {
        triples.push(Triple::new(Node::iri(property), ty.clone(), Node::iri(owl::ANNOTATION_PROPERTY)));
    }
    triples.extend(datatype_rules(set, ctx));
    triples
}

impl RuleProfile for OwlRlProfile {
    fn name(&self) -> &'static str {
        "owlrl"
    }

    fn axioms(&self) -> Vec<Triple> {
        owl_rl_axioms()
    }

    fn datatype_axioms(&self, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        literal_typing(DatatypeSet::OwlRl, ctx.proxies())
    }

    fn one_time_rules(&mut self, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        owl_rl_one_time_rules(DatatypeSet::OwlRl, ctx)
    }

    fn rules(&mut self, triple: &Triple, _cycle: usize, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        owl_rl_rules(triple, ctx, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deduct_core::store::TripleStore;
    use deduct_core::vocab::rdfs;
    use deduct_rules::{ErrorSink, LiteralProxies};

    #[test]
    fn test_one_time_rules() {
        let graph = TripleStore::new();
        let proxies = LiteralProxies::new();
        let mut errors = ErrorSink::new();
        let mut ctx = RuleContext::new(&graph, &proxies, &mut errors);

        let triples = OwlRlProfile::new().one_time_rules(&mut ctx);
        let ty = Node::iri(rdf::TYPE);
        assert!(triples.contains(&Triple::new(Node::iri(owl::THING), ty.clone(), Node::iri(owl::CLASS))));
        assert!(triples.contains(&Triple::new(
            Node::iri(rdfs::LABEL),
            ty.clone(),
            Node::iri(owl::ANNOTATION_PROPERTY)
        )));
        assert!(triples.contains(&Triple::new(Node::iri(rdf::PLAIN_LITERAL), ty, Node::iri(rdfs::DATATYPE))));
    }

    #[test]
    fn test_profile_name() {
        let profile = OwlRlProfile::new();
        assert_eq!(profile.name(), "owlrl");
        assert!(!profile.axioms().is_empty());
    }
}
