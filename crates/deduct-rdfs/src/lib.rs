//! RDFS (RDF Schema) 推論プロファイル
//!
//! このクレートは RDFS の推論規則を [`RuleProfile`] として実装します:
//! - rdfs:subClassOf / rdfs:subPropertyOf の推移的閉包 (rdfs5, rdfs11)
//! - rdfs:domain と rdfs:range による型推論 (rdfs2, rdfs3)
//! - rdf:type の伝播 (rdfs7, rdfs9)
//! - RDF / RDFS 公理トリプルとデータ型公理

pub mod axioms;
pub mod rules;

pub use axioms::{from_templates, rdfs_axioms, Template};
pub use rules::rdfs_rules;

use deduct_core::datatypes::DatatypeSet;
use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{rdf, rdfs};
use deduct_rules::datatype::{literal_typing, used_datatypes};
use deduct_rules::{RuleContext, RuleProfile};

/// RDFS 推論プロファイル
#[derive(Debug, Default, Clone)]
pub struct RdfsProfile;

impl RdfsProfile {
    pub fn new() -> Self {
        Self
    }
}

/// Datatype axioms of the RDFS profile: literal typing through the RDFS
/// datatype table, and every used datatype a subclass of `rdfs:Literal`.
pub fn rdfs_datatype_axioms(ctx: &RuleContext<'_>) -> Vec<Triple> {
    let proxies = ctx.proxies();
    let mut triples = literal_typing(DatatypeSet::Rdfs, proxies);
    for dt in used_datatypes(DatatypeSet::Rdfs, proxies) {
        triples.push(Triple::new(Node::iri(dt), Node::iri(rdfs::SUB_CLASS_OF), Node::iri(rdfs::LITERAL)));
    }
    triples
}

/// Every literal proxy is an `rdfs:Literal`
pub fn literal_proxy_typing(ctx: &RuleContext<'_>) -> Vec<Triple> {
    ctx.proxies()
        .iter()
        .map(|(_, proxy)| Triple::new(proxy.clone(), Node::iri(rdf::TYPE), Node::iri(rdfs::LITERAL)))
        .collect()
}

impl RuleProfile for RdfsProfile {
    fn name(&self) -> &'static str {
        "rdfs"
    }

    fn axioms(&self) -> Vec<Triple> {
        rdfs_axioms()
    }

    fn datatype_axioms(&self, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        rdfs_datatype_axioms(ctx)
    }

    fn one_time_rules(&mut self, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        literal_proxy_typing(ctx)
    }

    fn rules(&mut self, triple: &Triple, _cycle: usize, ctx: &mut RuleContext<'_>) -> Vec<Triple> {
        rdfs_rules(triple, ctx.graph())
    }
}
