use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deduct_core::model::{Node, Triple};
use deduct_core::store::TripleStore;
use deduct_core::vocab::{owl, rdf, rdfs};
use deduct_owlrl::{OwlRlExtension, OwlRlProfile};
use deduct_rules::{ErrorSink, LiteralProxies, RuleContext, RuleProfile};

fn create_test_ontology(size: usize) -> TripleStore {
    let mut store = TripleStore::new();

    for i in 0..size {
        let class_i = Node::iri(&format!("http://example.org/Class{}", i));
        store.add(Triple::new(class_i.clone(), Node::iri(rdf::TYPE), Node::iri(owl::CLASS)));

        if i > 0 {
            let parent = Node::iri(&format!("http://example.org/Class{}", i - 1));
            store.add(Triple::new(class_i.clone(), Node::iri(rdfs::SUB_CLASS_OF), parent));
        }

        for j in 0..5 {
            let instance = Node::iri(&format!("http://example.org/Instance{}_{}", i, j));
            store.add(Triple::new(instance, Node::iri(rdf::TYPE), class_i.clone()));
        }

        // a transitive property chain through the instances
        if i > 0 {
            store.add(Triple::new(
                Node::iri(&format!("http://example.org/Instance{}_0", i)),
                Node::iri("http://example.org/next"),
                Node::iri(&format!("http://example.org/Instance{}_0", i - 1)),
            ));
        }
    }
    store.add(Triple::new(
        Node::iri("http://example.org/next"),
        Node::iri(rdf::TYPE),
        Node::iri(owl::TRANSITIVE_PROPERTY),
    ));

    store
}

fn rule_pass<P: RuleProfile>(profile: &mut P, store: &TripleStore) -> usize {
    let proxies = LiteralProxies::new();
    let mut errors = ErrorSink::new();
    let mut ctx = RuleContext::new(store, &proxies, &mut errors);
    store.iter().map(|t| profile.rules(t, 1, &mut ctx).len()).sum()
}

fn benchmark_owl_rl_rule_pass(c: &mut Criterion) {
    for &size in &[50, 200, 500] {
        let store = create_test_ontology(size);

        c.bench_function(&format!("owlrl_rule_pass_{}_classes", size), |b| {
            b.iter(|| {
                let mut profile = OwlRlProfile::new();
                black_box(rule_pass(&mut profile, black_box(&store)));
            });
        });

        c.bench_function(&format!("owlrl_ext_rule_pass_{}_classes", size), |b| {
            b.iter(|| {
                let mut profile = OwlRlExtension::new();
                black_box(rule_pass(&mut profile, black_box(&store)));
            });
        });
    }
}

criterion_group!(benches, benchmark_owl_rl_rule_pass);
criterion_main!(benches);
