//! クラスの意味論 (cls-*)

use super::{cardinality, emit, holds, pairs};
use crate::restricted::RestrictedDatatype;
use deduct_core::model::{Node, Triple};
use deduct_core::vocab::{owl, rdf};
use deduct_rules::RuleContext;

pub fn apply(
    triple: &Triple,
    ctx: &mut RuleContext<'_>,
    restrictions: &[RestrictedDatatype],
    out: &mut Vec<Triple>,
) {
    let (graph, proxies) = (ctx.graph(), ctx.proxies());
    let Triple { subject: s, predicate: p, object: o } = triple;
    let ty = Node::iri(rdf::TYPE);

    let Node::Iri(predicate) = p else { return };
    match predicate.as_str() {
        rdf::TYPE if o.is(owl::NOTHING) => {
            // cls-nothing2
            ctx.add_error(format!("{} is defined of type 'Nothing'", proxies.describe(s)));
        }
        owl::INTERSECTION_OF => {
            let classes = graph.list_items(o);
            let Some((first, rest)) = classes.split_first() else { return };
            // cls-int1
            for y in graph.subjects(&ty, first) {
                if rest.iter().all(|c| holds(graph, y, rdf::TYPE, c)) {
                    emit(out, y, rdf::TYPE, s);
                }
            }
            // cls-int2
            for y in graph.subjects(&ty, s) {
                for c in &classes {
                    emit(out, y, rdf::TYPE, c);
                }
            }
        }
        owl::UNION_OF => {
            // cls-uni
            for c in graph.list_items(o) {
                for y in graph.subjects(&ty, &c) {
                    emit(out, y, rdf::TYPE, s);
                }
            }
        }
        owl::COMPLEMENT_OF => {
            // cls-com
            for x in graph.subjects(&ty, s) {
                if holds(graph, x, rdf::TYPE, o) {
                    ctx.add_error(format!(
                        "Violation of complementarity for classes {} and {} on element {}",
                        proxies.describe(s),
                        proxies.describe(o),
                        proxies.describe(x)
                    ));
                }
            }
        }
        owl::SOME_VALUES_FROM => {
            // cls-svf1, cls-svf2
            for property in graph.objects(s, &Node::iri(owl::ON_PROPERTY)) {
                for (u, v) in graph.subject_objects(property) {
                    if o.is(owl::THING) || holds(graph, v, rdf::TYPE, o) {
                        emit(out, u, rdf::TYPE, s);
                    }
                }
            }
        }
        owl::ALL_VALUES_FROM => {
            // cls-avf
            let restriction = restrictions.iter().find(|r| r.datatype() == o);
            for property in graph.objects(s, &Node::iri(owl::ON_PROPERTY)) {
                for u in graph.subjects(&ty, s) {
                    for v in graph.objects(u, property) {
                        let conforms = match restriction {
                            None => true,
                            Some(r) => proxies.literal_of(v).is_some_and(|literal| r.admits(literal)),
                        };
                        if conforms {
                            emit(out, v, rdf::TYPE, o);
                        } else {
                            ctx.add_error(format!(
                                "Violation of type restriction for allValuesFrom in {} for datatype {} on value {}",
                                proxies.describe(property),
                                proxies.describe(o),
                                proxies.describe(v)
                            ));
                        }
                    }
                }
            }
        }
        owl::HAS_VALUE => {
            for property in graph.objects(s, &Node::iri(owl::ON_PROPERTY)) {
                // cls-hv1
                for u in graph.subjects(&ty, s) {
                    out.push(Triple::new(u.clone(), property.clone(), o.clone()));
                }
                // cls-hv2
                for u in graph.subjects(property, o) {
                    emit(out, u, rdf::TYPE, s);
                }
            }
        }
        owl::MAX_CARDINALITY => {
            if let Some(n) = cardinality(o, proxies) {
                max_cardinality(s, n, ctx, out);
            }
        }
        owl::MAX_QUALIFIED_CARDINALITY => {
            if let Some(n) = cardinality(o, proxies) {
                max_qualified_cardinality(s, n, ctx, out);
            }
        }
        owl::ONE_OF => {
            // cls-oo
            for y in graph.list_items(o) {
                emit(out, &y, rdf::TYPE, s);
            }
        }
        _ => {}
    }
}

/// cls-maxc1 (`n` = 0) and cls-maxc2 (`n` = 1) for `restriction`; other
/// values entail nothing
pub fn max_cardinality(restriction: &Node, n: u64, ctx: &mut RuleContext<'_>, out: &mut Vec<Triple>) {
    let (graph, proxies) = (ctx.graph(), ctx.proxies());
    let ty = Node::iri(rdf::TYPE);
    for property in graph.objects(restriction, &Node::iri(owl::ON_PROPERTY)) {
        for u in graph.subjects(&ty, restriction) {
            match n {
                0 => {
                    for y in graph.objects(u, property) {
                        ctx.add_error(format!(
                            "Erronous usage of maximum cardinality with {}, {}",
                            proxies.describe(u),
                            proxies.describe(y)
                        ));
                    }
                }
                1 => {
                    let values: Vec<&Node> = graph.objects(u, property).collect();
                    for (y1, y2) in pairs(&values) {
                        if y1 != y2 {
                            emit(out, y1, owl::SAME_AS, y2);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// cls-maxqc1, cls-maxqc2 (`n` = 0) and cls-maxqc3, cls-maxqc4 (`n` = 1)
pub fn max_qualified_cardinality(restriction: &Node, n: u64, ctx: &mut RuleContext<'_>, out: &mut Vec<Triple>) {
    let (graph, proxies) = (ctx.graph(), ctx.proxies());
    let ty = Node::iri(rdf::TYPE);
    let classes: Vec<&Node> = graph.objects(restriction, &Node::iri(owl::ON_CLASS)).collect();
    for property in graph.objects(restriction, &Node::iri(owl::ON_PROPERTY)) {
        for class in &classes {
            let qualifies = |y: &Node| class.is(owl::THING) || holds(graph, y, rdf::TYPE, class);
            for u in graph.subjects(&ty, restriction) {
                let values: Vec<&Node> = graph.objects(u, property).filter(|y| qualifies(*y)).collect();
                match n {
                    0 => {
                        for y in &values {
                            ctx.add_error(format!(
                                "Erronous usage of maximum qualified cardinality with {}, {}, and {}",
                                proxies.describe(u),
                                proxies.describe(class),
                                proxies.describe(y)
                            ));
                        }
                    }
                    1 => {
                        for (y1, y2) in pairs(&values) {
                            if y1 != y2 {
                                emit(out, y1, owl::SAME_AS, y2);
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{ex, int_proxy, run, t};
    use deduct_core::model::{Iri, Literal};
    use deduct_core::store::TripleStore;
    use deduct_core::vocab::xsd;
    use deduct_rules::LiteralProxies;

    fn core(triple: &Triple, ctx: &mut RuleContext<'_>, out: &mut Vec<Triple>) {
        apply(triple, ctx, &[], out)
    }

    #[test]
    fn test_intersection() {
        let mut graph = TripleStore::new();
        graph.add(t(&Node::blank("l0"), rdf::FIRST, &ex("Woman")));
        graph.add(t(&Node::blank("l0"), rdf::REST, &Node::blank("l1")));
        graph.add(t(&Node::blank("l1"), rdf::FIRST, &ex("Parent")));
        graph.add(t(&Node::blank("l1"), rdf::REST, &Node::iri(rdf::NIL)));
        let def = t(&ex("Mother"), owl::INTERSECTION_OF, &Node::blank("l0"));
        graph.add(def.clone());
        graph.add(t(&ex("ann"), rdf::TYPE, &ex("Woman")));
        graph.add(t(&ex("ann"), rdf::TYPE, &ex("Parent")));
        graph.add(t(&ex("eve"), rdf::TYPE, &ex("Mother")));

        let (out, _) = run(&graph, &LiteralProxies::new(), &def, core);
        assert!(out.contains(&t(&ex("ann"), rdf::TYPE, &ex("Mother"))));
        assert!(out.contains(&t(&ex("eve"), rdf::TYPE, &ex("Woman"))));
        assert!(out.contains(&t(&ex("eve"), rdf::TYPE, &ex("Parent"))));
    }

    #[test]
    fn test_some_values_from_and_has_value() {
        let mut graph = TripleStore::new();
        let svf = t(&ex("R"), owl::SOME_VALUES_FROM, &ex("Dog"));
        let hv = t(&ex("H"), owl::HAS_VALUE, &ex("red"));
        graph.add(svf.clone());
        graph.add(hv.clone());
        graph.add(t(&ex("R"), owl::ON_PROPERTY, &ex("owns")));
        graph.add(t(&ex("H"), owl::ON_PROPERTY, &ex("colour")));
        graph.add(Triple::new(ex("bob"), ex("owns"), ex("rex")));
        graph.add(t(&ex("rex"), rdf::TYPE, &ex("Dog")));
        graph.add(t(&ex("car"), rdf::TYPE, &ex("H")));

        let (out, _) = run(&graph, &LiteralProxies::new(), &svf, core);
        assert_eq!(out, vec![t(&ex("bob"), rdf::TYPE, &ex("R"))]);
        let (out, _) = run(&graph, &LiteralProxies::new(), &hv, core);
        assert!(out.contains(&Triple::new(ex("car"), ex("colour"), ex("red"))));
    }

    #[test]
    fn test_max_cardinality_one() {
        let mut graph = TripleStore::new();
        let mut proxies = LiteralProxies::new();
        let one = int_proxy(&mut proxies, "lp0", 1);
        let axiom = t(&ex("R"), owl::MAX_CARDINALITY, &one);
        graph.add(axiom.clone());
        graph.add(t(&ex("R"), owl::ON_PROPERTY, &ex("hasSpouse")));
        graph.add(t(&ex("tom"), rdf::TYPE, &ex("R")));
        graph.add(Triple::new(ex("tom"), ex("hasSpouse"), ex("ann")));
        graph.add(Triple::new(ex("tom"), ex("hasSpouse"), ex("anna")));

        let (out, errors) = run(&graph, &proxies, &axiom, core);
        assert!(errors.is_empty());
        assert_eq!(out, vec![t(&ex("ann"), owl::SAME_AS, &ex("anna"))]);
    }

    #[test]
    fn test_max_cardinality_zero() {
        let mut graph = TripleStore::new();
        let mut proxies = LiteralProxies::new();
        let zero = int_proxy(&mut proxies, "lp0", 0);
        let axiom = t(&ex("R"), owl::MAX_CARDINALITY, &zero);
        graph.add(axiom.clone());
        graph.add(t(&ex("R"), owl::ON_PROPERTY, &ex("hasChild")));
        graph.add(t(&ex("tom"), rdf::TYPE, &ex("R")));
        graph.add(Triple::new(ex("tom"), ex("hasChild"), ex("kim")));

        let (_, errors) = run(&graph, &proxies, &axiom, core);
        assert_eq!(
            errors,
            vec!["Erronous usage of maximum cardinality with http://example.org/tom, http://example.org/kim".to_string()]
        );
    }

    #[test]
    fn test_max_qualified_cardinality_filters_on_class() {
        let mut graph = TripleStore::new();
        let mut proxies = LiteralProxies::new();
        let one = int_proxy(&mut proxies, "lp0", 1);
        let axiom = t(&ex("R"), owl::MAX_QUALIFIED_CARDINALITY, &one);
        graph.add(axiom.clone());
        graph.add(t(&ex("R"), owl::ON_PROPERTY, &ex("hasPet")));
        graph.add(t(&ex("R"), owl::ON_CLASS, &ex("Cat")));
        graph.add(t(&ex("tom"), rdf::TYPE, &ex("R")));
        for pet in ["felix", "tibbles", "rex"] {
            graph.add(Triple::new(ex("tom"), ex("hasPet"), ex(pet)));
        }
        graph.add(t(&ex("felix"), rdf::TYPE, &ex("Cat")));
        graph.add(t(&ex("tibbles"), rdf::TYPE, &ex("Cat")));

        let (out, _) = run(&graph, &proxies, &axiom, core);
        assert_eq!(out.len(), 1);
        assert!(!out[0].nodes().any(|n| *n == ex("rex")));
    }

    #[test]
    fn test_all_values_from_with_restricted_datatype() {
        let mut graph = TripleStore::new();
        let mut proxies = LiteralProxies::new();
        let young = proxies.insert(
            Literal::new_typed("12", Iri::new_unchecked(xsd::INTEGER)),
            Node::blank("lp0"),
        );
        let avf = t(&ex("R"), owl::ALL_VALUES_FROM, &ex("Adult"));
        graph.add(avf.clone());
        graph.add(t(&ex("R"), owl::ON_PROPERTY, &ex("age")));
        graph.add(t(&ex("tom"), rdf::TYPE, &ex("R")));
        graph.add(Triple::new(ex("tom"), ex("age"), young));

        let mut adult = RestrictedDatatype::new(ex("Adult"), xsd::INTEGER).unwrap();
        adult
            .add_facet(xsd::MIN_INCLUSIVE, &Literal::new_typed("18", Iri::new_unchecked(xsd::INTEGER)))
            .unwrap();
        let restrictions = vec![adult];

        let (out, errors) = run(&graph, &proxies, &avf, |tr, ctx, out| apply(tr, ctx, &restrictions, out));
        assert!(out.is_empty());
        assert_eq!(
            errors,
            vec!["Violation of type restriction for allValuesFrom in http://example.org/age for datatype http://example.org/Adult on value '12'".to_string()]
        );

        // without the restriction the value is simply typed
        let (out, errors) = run(&graph, &proxies, &avf, core);
        assert!(errors.is_empty());
        assert_eq!(out, vec![t(&Node::blank("lp0"), rdf::TYPE, &ex("Adult"))]);
    }

    #[test]
    fn test_nothing_and_complement() {
        let mut graph = TripleStore::new();
        let com = t(&ex("Alive"), owl::COMPLEMENT_OF, &ex("Dead"));
        graph.add(t(&ex("cat"), rdf::TYPE, &ex("Alive")));
        graph.add(t(&ex("cat"), rdf::TYPE, &ex("Dead")));

        let (_, errors) = run(&graph, &LiteralProxies::new(), &com, core);
        assert_eq!(errors.len(), 1);

        let nothing = t(&ex("x"), rdf::TYPE, &Node::iri(owl::NOTHING));
        let (_, errors) = run(&graph, &LiteralProxies::new(), &nothing, core);
        assert_eq!(errors, vec!["http://example.org/x is defined of type 'Nothing'".to_string()]);
    }
}
