use deduct_core::model::{Iri, Node, Triple};
use deduct_core::store::TripleStore;
use deduct_core::vocab::{rdf, rdfs};
use deduct_rdfs::RdfsProfile;
use deduct_rules::{ErrorSink, LiteralProxies, RuleContext, RuleProfile};

fn ex(name: &str) -> anyhow::Result<Node> {
    Ok(Node::Iri(Iri::new(format!("http://example.org/{}", name))?))
}

/// Run the profile's rules to a fixpoint over a literal-free graph
fn saturate(profile: &mut RdfsProfile, store: &mut TripleStore) -> usize {
    let proxies = LiteralProxies::new();
    let mut errors = ErrorSink::new();
    let mut cycle = 0;
    loop {
        cycle += 1;
        let mut candidates = Vec::new();
        {
            let mut ctx = RuleContext::new(store, &proxies, &mut errors);
            for triple in store.iter() {
                candidates.extend(profile.rules(triple, cycle, &mut ctx));
            }
        }
        if store.extend(candidates) == 0 {
            return cycle;
        }
    }
}

#[test]
fn test_subclass_hierarchy() -> anyhow::Result<()> {
    let (animal, mammal, dog) = (ex("Animal")?, ex("Mammal")?, ex("Dog")?);
    let mut store = TripleStore::new();

    // Mammal subclassOf Animal, Dog subclassOf Mammal
    store.add(Triple::new(mammal.clone(), Node::iri(rdfs::SUB_CLASS_OF), animal.clone()));
    store.add(Triple::new(dog.clone(), Node::iri(rdfs::SUB_CLASS_OF), mammal.clone()));
    store.add(Triple::new(ex("rex")?, Node::iri(rdf::TYPE), dog.clone()));

    saturate(&mut RdfsProfile::new(), &mut store);

    assert!(
        store.contains(&Triple::new(dog.clone(), Node::iri(rdfs::SUB_CLASS_OF), animal.clone())),
        "Dog should be inferred as subclass of Animal"
    );
    assert!(
        store.contains(&Triple::new(ex("rex")?, Node::iri(rdf::TYPE), animal)),
        "rex should be inferred as an Animal"
    );
    Ok(())
}

#[test]
fn test_property_hierarchy() -> anyhow::Result<()> {
    let mut store = TripleStore::new();

    // hasLeg subPropertyOf hasPart subPropertyOf relatedTo
    store.add(Triple::new(ex("hasLeg")?, Node::iri(rdfs::SUB_PROPERTY_OF), ex("hasPart")?));
    store.add(Triple::new(ex("hasPart")?, Node::iri(rdfs::SUB_PROPERTY_OF), ex("relatedTo")?));
    store.add(Triple::new(ex("dog")?, ex("hasLeg")?, ex("leg1")?));

    saturate(&mut RdfsProfile::new(), &mut store);

    assert!(store.contains(&Triple::new(ex("hasLeg")?, Node::iri(rdfs::SUB_PROPERTY_OF), ex("relatedTo")?)));
    assert!(store.contains(&Triple::new(ex("dog")?, ex("hasPart")?, ex("leg1")?)));
    assert!(store.contains(&Triple::new(ex("dog")?, ex("relatedTo")?, ex("leg1")?)));
    Ok(())
}

#[test]
fn test_domain_range_inference() -> anyhow::Result<()> {
    let mut store = TripleStore::new();

    store.add(Triple::new(ex("hasOwner")?, Node::iri(rdfs::DOMAIN), ex("Pet")?));
    store.add(Triple::new(ex("hasOwner")?, Node::iri(rdfs::RANGE), ex("Person")?));
    store.add(Triple::new(ex("Pet")?, Node::iri(rdfs::SUB_CLASS_OF), ex("Animal")?));
    store.add(Triple::new(ex("rex")?, ex("hasOwner")?, ex("alice")?));

    saturate(&mut RdfsProfile::new(), &mut store);

    assert!(store.contains(&Triple::new(ex("rex")?, Node::iri(rdf::TYPE), ex("Pet")?)));
    assert!(store.contains(&Triple::new(ex("rex")?, Node::iri(rdf::TYPE), ex("Animal")?)));
    assert!(store.contains(&Triple::new(ex("alice")?, Node::iri(rdf::TYPE), ex("Person")?)));
    Ok(())
}

#[test]
fn test_axioms_saturate() {
    let mut profile = RdfsProfile::new();
    let mut store: TripleStore = profile.axioms().into_iter().collect();
    let before = store.len();

    let cycles = saturate(&mut profile, &mut store);

    assert!(store.len() > before);
    assert!(cycles < 10, "axiom closure took {} cycles", cycles);
    // rdfs:Datatype is a class, hence its own subclass (rdfs10)
    assert!(store.contains(&Triple::new(
        Node::iri(rdfs::DATATYPE),
        Node::iri(rdfs::SUB_CLASS_OF),
        Node::iri(rdfs::DATATYPE)
    )));
}

#[test]
fn test_empty_graph() {
    let mut store = TripleStore::new();
    assert_eq!(saturate(&mut RdfsProfile::new(), &mut store), 1);
    assert!(store.is_empty());
}
