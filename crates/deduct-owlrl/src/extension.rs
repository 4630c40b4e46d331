//! OWL 2 RL 拡張プロファイル
//!
//! RDFS と OWL 2 RL を組み合わせ、さらに次の規則を追加します:
//! - `owl:hasSelf` による自己制約
//! - 基数 0 / 1 の `owl:cardinality` / `owl:qualifiedCardinality`
//! - `owl:disjointUnionOf`
//! - `owl:rational` / `owl:real`
//! - ファセット付き制約データ型

use crate::axioms::owl_rl_axioms;
use crate::profile::owl_rl_one_time_rules;
use crate::restricted::{extract_restrictions, RestrictedDatatype};
use crate::rules::class_axioms::disjoint_message;
use crate::rules::classes::{max_cardinality, max_qualified_cardinality};
use crate::rules::{cardinality, emit, holds, owl_rl_rules, pairs};
use deduct_core::datatypes::DatatypeSet;
use deduct_core::model::{Node, Triple};
use deduct_core::store::TripleStore;
use deduct_core::vocab::{owl, rdf, rdfs};
use deduct_rdfs::{literal_proxy_typing, rdfs_axioms, rdfs_rules};
use deduct_rules::datatype::{literal_typing, used_datatypes};
use deduct_rules::{ErrorSink, RuleContext, RuleProfile};
use tracing::debug;

/// RDFS + OWL 2 RL + extras
#[derive(Debug, Default, Clone)]
pub struct OwlRlExtension {
    restrictions: Vec<RestrictedDatatype>,
}

impl OwlRlExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricted datatypes found by the last `pre_process`
    pub fn restrictions(&self) -> &[RestrictedDatatype] {
        &self.restrictions
    }

    fn restriction(&self, datatype: &Node) -> Option<&RestrictedDatatype> {
        self.restrictions.iter().find(|r| r.datatype() == datatype)
    }
}

/// Rules only the extension has
pub fn extension_rules(triple: &Triple, ctx: &mut RuleContext<'_>, out: &mut Vec<Triple>) {
    let (graph, proxies) = (ctx.graph(), ctx.proxies());
    let Triple { subject: s, predicate: p, object: o } = triple;
    let ty = Node::iri(rdf::TYPE);

    let Node::Iri(predicate) = p else { return };
    match predicate.as_str() {
        owl::HAS_SELF => {
            let is_true = proxies
                .literal_of(o)
                .is_some_and(|literal| matches!(literal.lexical().trim(), "true" | "1"));
            if !is_true {
                return;
            }
            for property in graph.objects(s, &Node::iri(owl::ON_PROPERTY)) {
                for x in graph.subjects(&ty, s) {
                    out.push(Triple::new(x.clone(), property.clone(), x.clone()));
                }
                for (x, y) in graph.subject_objects(property) {
                    if x == y {
                        emit(out, x, rdf::TYPE, s);
                    }
                }
            }
        }
        owl::CARDINALITY => {
            if let Some(n @ (0 | 1)) = cardinality(o, proxies) {
                max_cardinality(s, n, ctx, out);
            }
        }
        owl::QUALIFIED_CARDINALITY => {
            if let Some(n @ (0 | 1)) = cardinality(o, proxies) {
                max_qualified_cardinality(s, n, ctx, out);
            }
        }
        owl::DISJOINT_UNION_OF => {
            emit(out, s, owl::UNION_OF, o);
            let classes = graph.list_items(o);
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
        _ => {}
    }
}

fn bare(node: &Node) -> String {
    match node {
        Node::Iri(iri) => iri.as_str().to_string(),
        Node::Literal(literal) => format!("'{}'", literal.lexical()),
        other => other.to_string(),
    }
}

impl RuleProfile for OwlRlExtension {
    fn name(&self) -> &'static str {
        "owlrl-ext"
    }

    fn pre_process(&mut self, graph: &TripleStore, errors: &mut ErrorSink) {
        self.restrictions = extract_restrictions(graph, errors);
        debug!(count = self.restrictions.len(), "datatype restrictions extracted");
    }

    fn axioms(&self) -> Vec<Triple> {
        let mut axioms = rdfs_axioms();
        axioms.extend(owl_rl_axioms());
        axioms
    }

    fn datatype_axioms(&self, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        let proxies = ctx.proxies();
        let mut triples = literal_typing(DatatypeSet::Extension, proxies);
        for dt in used_datatypes(DatatypeSet::Extension, proxies) {
            triples.push(Triple::new(Node::iri(dt), Node::iri(rdfs::SUB_CLASS_OF), Node::iri(rdfs::LITERAL)));
        }
        triples
    }

    fn one_time_rules(&mut self, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        let mut triples = literal_proxy_typing(ctx);
        triples.extend(owl_rl_one_time_rules(DatatypeSet::Extension, ctx));

        let ty = Node::iri(rdf::TYPE);
        for restricted in &self.restrictions {
            let datatype = restricted.datatype();
            triples.push(Triple::new(datatype.clone(), ty.clone(), Node::iri(rdfs::DATATYPE)));
            triples.push(Triple::new(
                datatype.clone(),
                Node::iri(rdfs::SUB_CLASS_OF),
                Node::iri(restricted.base()),
            ));
            for (literal, proxy) in ctx.proxies().iter() {
                if restricted.admits(literal) {
                    triples.push(Triple::new(proxy.clone(), ty.clone(), datatype.clone()));
                }
            }
        }
        triples
    }

    fn rules(&mut self, triple: &Triple, _cycle: usize, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        let mut out = rdfs_rules(triple, ctx.graph());
        out.extend(owl_rl_rules(triple, ctx, &self.restrictions));
        extension_rules(triple, ctx, &mut out);
        out
    }

    fn post_process(&mut self, graph: &TripleStore, errors: &mut ErrorSink) -> Vec<Triple> {
        for (property, range) in graph.subject_objects(&Node::iri(rdfs::RANGE)) {
            let Some(restricted) = self.restriction(range) else { continue };
            for (subject, value) in graph.subject_objects(property) {
                let Some(literal) = value.as_literal() else { continue };
                if !restricted.admits(literal) {
                    errors.add(format!(
                        "Literal value '{}' of property {} on {} does not conform to the restricted datatype {}",
                        literal.lexical(),
                        bare(property),
                        bare(subject),
                        bare(range)
                    ));
                }
            }
        }
        Vec::new()
    }
}
