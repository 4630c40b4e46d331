//! 制約付きデータ型 (`owl:onDatatype` + `owl:withRestrictions`)
//!
//! A restricted datatype narrows a base datatype with facets. Facets are read
//! from the input graph before the closure starts; afterwards every literal
//! can be tested against the restriction with [`RestrictedDatatype::admits`].

use deduct_core::datatypes::{
    facet_category, is_valid_lexical, ordered_value, supertypes, FacetCategory, OrderedValue,
};
use deduct_core::model::{Literal, Node};
use deduct_core::store::TripleStore;
use deduct_core::vocab::{owl, rdf, rdfs, xsd};
use deduct_rules::ErrorSink;
use regex::Regex;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::debug;

/// Problems found while reading a datatype restriction
#[derive(Debug, Error)]
pub enum FacetError {
    #[error("Several base datatypes for the same restriction {0}")]
    SeveralBases(String),

    #[error("More than one facet list for the same restriction {0}")]
    SeveralFacetLists(String),

    #[error("Base datatype {base} of restriction {datatype} cannot be restricted")]
    UnrestrictableBase { datatype: String, base: String },

    #[error("Facet {facet} does not apply to base datatype {base}")]
    NotApplicable { facet: String, base: String },

    #[error("Invalid value '{value}' for facet {facet}")]
    InvalidValue { facet: String, value: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A datatype defined by restricting a base datatype with facets
#[derive(Debug, Clone)]
pub struct RestrictedDatatype {
    datatype: Node,
    base: String,
    category: FacetCategory,
    min_inclusive: Option<OrderedValue>,
    min_exclusive: Option<OrderedValue>,
    max_inclusive: Option<OrderedValue>,
    max_exclusive: Option<OrderedValue>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    patterns: Vec<Regex>,
    lang_ranges: Vec<String>,
}

impl RestrictedDatatype {
    /// An unrestricted datatype `datatype` over `base`.
    ///
    /// Fails if `base` is not a datatype facets can apply to.
    pub fn new(datatype: Node, base: &str) -> Result<Self, FacetError> {
        let category = facet_category(base).ok_or_else(|| FacetError::UnrestrictableBase {
            datatype: datatype.to_string(),
            base: base.to_string(),
        })?;
        Ok(Self {
            datatype,
            base: base.to_string(),
            category,
            min_inclusive: None,
            min_exclusive: None,
            max_inclusive: None,
            max_exclusive: None,
            min_length: None,
            max_length: None,
            patterns: Vec::new(),
            lang_ranges: Vec::new(),
        })
    }

    /// Read the restriction declared for `datatype` in `graph`.
    ///
    /// `Ok(None)` means `datatype` is not a restriction: it has no
    /// `owl:onDatatype` or no `owl:withRestrictions`.
    pub fn from_graph(graph: &TripleStore, datatype: &Node) -> Result<Option<Self>, FacetError> {
        let bases: Vec<&Node> = graph.objects(datatype, &Node::iri(owl::ON_DATATYPE)).collect();
        let base = match bases.as_slice() {
            [] => return Ok(None),
            [base] => *base,
            _ => return Err(FacetError::SeveralBases(datatype.to_string())),
        };
        let lists: Vec<&Node> = graph.objects(datatype, &Node::iri(owl::WITH_RESTRICTIONS)).collect();
        let list = match lists.as_slice() {
            [] => return Ok(None),
            [list] => *list,
            _ => return Err(FacetError::SeveralFacetLists(datatype.to_string())),
        };
        let base = match base.as_iri() {
            Some(iri) => iri.as_str(),
            None => {
                return Err(FacetError::UnrestrictableBase {
                    datatype: datatype.to_string(),
                    base: base.to_string(),
                })
            }
        };

        let mut restricted = Self::new(datatype.clone(), base)?;
        for item in graph.list_items(list) {
            for (facet, value) in graph.predicate_objects(&item) {
                if let (Some(facet), Some(value)) = (facet.as_iri(), value.as_literal()) {
                    restricted.add_facet(facet.as_str(), value)?;
                }
            }
        }
        Ok(Some(restricted))
    }

    /// Add one facet. Repeated bounds keep the tightest one.
    ///
    /// Predicates that are not facets are ignored.
    pub fn add_facet(&mut self, facet: &str, value: &Literal) -> Result<(), FacetError> {
        match facet {
            xsd::MIN_INCLUSIVE | xsd::MIN_EXCLUSIVE | xsd::MAX_INCLUSIVE | xsd::MAX_EXCLUSIVE => {
                self.require(facet, self.category == FacetCategory::MinMax)?;
                let bound = ordered_value(value.lexical(), value.datatype().as_str())
                    .or_else(|| ordered_value(value.lexical(), &self.base))
                    .ok_or_else(|| invalid(facet, value))?;
                match facet {
                    xsd::MIN_INCLUSIVE => self.min_inclusive = tighter(self.min_inclusive, bound, Ordering::Greater),
                    xsd::MIN_EXCLUSIVE => self.min_exclusive = tighter(self.min_exclusive, bound, Ordering::Greater),
                    xsd::MAX_INCLUSIVE => self.max_inclusive = tighter(self.max_inclusive, bound, Ordering::Less),
                    _ => self.max_exclusive = tighter(self.max_exclusive, bound, Ordering::Less),
                }
            }
            xsd::LENGTH | xsd::MIN_LENGTH | xsd::MAX_LENGTH => {
                self.require(facet, self.category != FacetCategory::MinMax)?;
                let n: usize = value.lexical().trim().parse().map_err(|_| invalid(facet, value))?;
                // length n is minLength n together with maxLength n
                if facet != xsd::MAX_LENGTH {
                    self.min_length = Some(self.min_length.map_or(n, |m| m.max(n)));
                }
                if facet != xsd::MIN_LENGTH {
                    self.max_length = Some(self.max_length.map_or(n, |m| m.min(n)));
                }
            }
            xsd::PATTERN => {
                self.require(facet, self.category == FacetCategory::LengthAndPattern)?;
                let pattern = value.lexical();
                let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| FacetError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
                self.patterns.push(regex);
            }
            rdf::LANG_RANGE => {
                self.require(facet, self.category == FacetCategory::LengthAndLangRange)?;
                self.lang_ranges.push(value.lexical().to_lowercase());
            }
            _ => {}
        }
        Ok(())
    }

    fn require(&self, facet: &str, applicable: bool) -> Result<(), FacetError> {
        if applicable {
            Ok(())
        } else {
            Err(FacetError::NotApplicable {
                facet: facet.to_string(),
                base: self.base.clone(),
            })
        }
    }

    /// The restricted datatype itself
    pub fn datatype(&self) -> &Node {
        &self.datatype
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether `literal` is a value of this restricted datatype
    pub fn admits(&self, literal: &Literal) -> bool {
        let dt = literal.datatype().as_str();
        if !self.accepts_datatype(dt) || !is_valid_lexical(literal.lexical(), dt) {
            return false;
        }
        match self.category {
            FacetCategory::MinMax => match ordered_value(literal.lexical(), dt) {
                Some(value) => self.within_bounds(value),
                None => false,
            },
            FacetCategory::Length => self.length_fits(literal),
            FacetCategory::LengthAndPattern => {
                self.length_fits(literal) && self.patterns.iter().all(|re| re.is_match(literal.lexical()))
            }
            FacetCategory::LengthAndLangRange => {
                self.length_fits(literal)
                    && (self.lang_ranges.is_empty()
                        || literal
                            .language()
                            .is_some_and(|tag| self.lang_ranges.iter().all(|range| lang_range_matches(range, tag))))
            }
        }
    }

    fn accepts_datatype(&self, datatype: &str) -> bool {
        if datatype == self.base || supertypes(datatype).contains(&self.base.as_str()) {
            return true;
        }
        // plain literals come as xsd:string or rdf:langString
        self.base == rdf::PLAIN_LITERAL && matches!(datatype, xsd::STRING | rdf::LANG_STRING)
    }

    fn within_bounds(&self, value: OrderedValue) -> bool {
        let above = |bound: Option<OrderedValue>, strict: bool| match bound {
            None => true,
            Some(b) => match value.partial_cmp(&b) {
                Some(Ordering::Greater) => true,
                Some(Ordering::Equal) => !strict,
                _ => false,
            },
        };
        let below = |bound: Option<OrderedValue>, strict: bool| match bound {
            None => true,
            Some(b) => match value.partial_cmp(&b) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => !strict,
                _ => false,
            },
        };
        above(self.min_inclusive, false)
            && above(self.min_exclusive, true)
            && below(self.max_inclusive, false)
            && below(self.max_exclusive, true)
    }

    fn length_fits(&self, literal: &Literal) -> bool {
        let length = value_length(literal);
        self.min_length.map_or(true, |min| length >= min) && self.max_length.map_or(true, |max| length <= max)
    }
}

fn invalid(facet: &str, value: &Literal) -> FacetError {
    FacetError::InvalidValue {
        facet: facet.to_string(),
        value: value.lexical().to_string(),
    }
}

/// Keep `new` if it is tighter than `current` in the direction `towards`
fn tighter(current: Option<OrderedValue>, new: OrderedValue, towards: Ordering) -> Option<OrderedValue> {
    match current {
        Some(current) if new.partial_cmp(&current) != Some(towards) => Some(current),
        _ => Some(new),
    }
}

/// Length of a value: octets for the binary types, characters otherwise
fn value_length(literal: &Literal) -> usize {
    let lexical = literal.lexical().trim();
    match literal.datatype().as_str() {
        xsd::HEX_BINARY => lexical.len() / 2,
        xsd::BASE64_BINARY => {
            let compact: Vec<u8> = lexical.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
            let padding = compact.iter().rev().take_while(|b| **b == b'=').count();
            (compact.len() / 4 * 3).saturating_sub(padding)
        }
        _ => literal.lexical().chars().count(),
    }
}

/// RFC 4647 extended filtering of language tag `tag` by `range`
pub fn lang_range_matches(range: &str, tag: &str) -> bool {
    let range: Vec<String> = range.split('-').map(str::to_lowercase).collect();
    let tag: Vec<String> = tag.split('-').map(str::to_lowercase).collect();

    match (range.first(), tag.first()) {
        (Some(r), Some(t)) if r == "*" || r == t => {}
        _ => return false,
    }
    let (mut r, mut t) = (1, 1);
    while r < range.len() {
        if range[r] == "*" {
            r += 1;
        } else if t >= tag.len() {
            return false;
        } else if range[r] == tag[t] {
            r += 1;
            t += 1;
        } else if tag[t].len() == 1 {
            // singletons cannot be skipped
            return false;
        } else {
            t += 1;
        }
    }
    true
}

/// Every restricted datatype declared in `graph`. Malformed declarations are
/// reported to `errors` and skipped.
pub fn extract_restrictions(graph: &TripleStore, errors: &mut ErrorSink) -> Vec<RestrictedDatatype> {
    let mut restrictions = Vec::new();
    for datatype in graph.subjects(&Node::iri(rdf::TYPE), &Node::iri(rdfs::DATATYPE)) {
        match RestrictedDatatype::from_graph(graph, datatype) {
            Ok(Some(restricted)) => {
                debug!(datatype = %restricted.datatype(), base = restricted.base(), "restricted datatype");
                restrictions.push(restricted);
            }
            Ok(None) => {}
            Err(e) => {
                errors.add(e.to_string());
            }
        }
    }
    restrictions
}

#[cfg(test)]
mod tests {
    use super::*;
    use deduct_core::model::{Iri, Triple};

    fn typed(lexical: &str, dt: &str) -> Literal {
        Literal::new_typed(lexical, Iri::new_unchecked(dt))
    }

    fn ex(name: &str) -> Node {
        Node::iri(&format!("http://example.org/{name}"))
    }

    /// `ex:dt` restricting `base` with one facet list item per facet
    fn declare(graph: &mut TripleStore, base: &str, facets: &[(&str, Literal)]) {
        let ty = Node::iri(rdf::TYPE);
        graph.add(Triple::new(ex("dt"), ty, Node::iri(rdfs::DATATYPE)));
        graph.add(Triple::new(ex("dt"), Node::iri(owl::ON_DATATYPE), Node::iri(base)));
        graph.add(Triple::new(ex("dt"), Node::iri(owl::WITH_RESTRICTIONS), Node::blank("l0")));
        for (i, (facet, value)) in facets.iter().enumerate() {
            let cell = Node::blank(&format!("l{i}"));
            let item = Node::blank(&format!("f{i}"));
            graph.add(Triple::new(cell.clone(), Node::iri(rdf::FIRST), item.clone()));
            graph.add(Triple::new(item, Node::iri(facet), value.clone()));
            let rest = if i + 1 == facets.len() {
                Node::iri(rdf::NIL)
            } else {
                Node::blank(&format!("l{}", i + 1))
            };
            graph.add(Triple::new(cell, Node::iri(rdf::REST), rest));
        }
    }

    mod facet_tests {
        use super::*;

        #[test]
        fn test_numeric_bounds() {
            let mut graph = TripleStore::new();
            declare(
                &mut graph,
                xsd::INTEGER,
                &[
                    (xsd::MIN_INCLUSIVE, typed("18", xsd::INTEGER)),
                    (xsd::MAX_EXCLUSIVE, typed("65", xsd::INTEGER)),
                ],
            );
            let adult = RestrictedDatatype::from_graph(&graph, &ex("dt")).unwrap().unwrap();

            assert!(adult.admits(&typed("18", xsd::INTEGER)));
            assert!(adult.admits(&typed("64", xsd::INT)));
            assert!(!adult.admits(&typed("65", xsd::INTEGER)));
            assert!(!adult.admits(&typed("17", xsd::INTEGER)));
            // a string is not a value of the base type
            assert!(!adult.admits(&typed("30", xsd::STRING)));
        }

        #[test]
        fn test_tightest_bound_wins() {
            let mut dt = RestrictedDatatype::new(ex("dt"), xsd::DECIMAL).unwrap();
            dt.add_facet(xsd::MAX_INCLUSIVE, &typed("10", xsd::DECIMAL)).unwrap();
            dt.add_facet(xsd::MAX_INCLUSIVE, &typed("5", xsd::DECIMAL)).unwrap();
            dt.add_facet(xsd::MAX_INCLUSIVE, &typed("7", xsd::DECIMAL)).unwrap();

            assert!(dt.admits(&typed("5", xsd::DECIMAL)));
            assert!(!dt.admits(&typed("6", xsd::DECIMAL)));
        }

        #[test]
        fn test_length_and_pattern() {
            let mut dt = RestrictedDatatype::new(ex("code"), xsd::STRING).unwrap();
            dt.add_facet(xsd::LENGTH, &typed("3", xsd::NON_NEGATIVE_INTEGER)).unwrap();
            dt.add_facet(xsd::PATTERN, &typed("[A-Z]+", xsd::STRING)).unwrap();

            assert!(dt.admits(&Literal::new_simple("ABC")));
            assert!(!dt.admits(&Literal::new_simple("ABCD")));
            assert!(!dt.admits(&Literal::new_simple("abc")));
            // patterns are anchored
            assert!(!dt.admits(&Literal::new_simple("1AB")));
        }

        #[test]
        fn test_binary_length_counts_octets() {
            let mut dt = RestrictedDatatype::new(ex("bytes"), xsd::HEX_BINARY).unwrap();
            dt.add_facet(xsd::MAX_LENGTH, &typed("2", xsd::INTEGER)).unwrap();

            assert!(dt.admits(&typed("0FB7", xsd::HEX_BINARY)));
            assert!(!dt.admits(&typed("0FB7AA", xsd::HEX_BINARY)));

            let mut b64 = RestrictedDatatype::new(ex("b64"), xsd::BASE64_BINARY).unwrap();
            b64.add_facet(xsd::LENGTH, &typed("4", xsd::INTEGER)).unwrap();
            // "AAECAw==" decodes to 4 octets
            assert!(b64.admits(&typed("AAECAw==", xsd::BASE64_BINARY)));
        }

        #[test]
        fn test_language_ranges() {
            let mut dt = RestrictedDatatype::new(ex("english"), rdf::PLAIN_LITERAL).unwrap();
            dt.add_facet(rdf::LANG_RANGE, &Literal::new_simple("en")).unwrap();

            let hello = Literal::new_language_tagged("hello", "en-GB").unwrap();
            let hallo = Literal::new_language_tagged("hallo", "de").unwrap();
            assert!(dt.admits(&hello));
            assert!(!dt.admits(&hallo));
            assert!(!dt.admits(&Literal::new_simple("untagged")));
        }

        #[test]
        fn test_inapplicable_facet_is_rejected() {
            let mut dt = RestrictedDatatype::new(ex("dt"), xsd::INTEGER).unwrap();
            let err = dt.add_facet(xsd::PATTERN, &Literal::new_simple("[0-9]")).unwrap_err();
            assert!(matches!(err, FacetError::NotApplicable { .. }));

            let bad = RestrictedDatatype::new(ex("dt"), xsd::G_YEAR).unwrap_err();
            assert!(matches!(bad, FacetError::UnrestrictableBase { .. }));
        }
    }

    mod lang_range_tests {
        use super::*;

        #[test]
        fn test_extended_filtering() {
            assert!(lang_range_matches("de-*-DE", "de-Latn-DE"));
            assert!(lang_range_matches("de-DE", "de-Latf-DE"));
            assert!(lang_range_matches("de-de", "DE-DE"));
            assert!(lang_range_matches("*", "fr"));
            assert!(!lang_range_matches("de-DE", "de"));
            assert!(!lang_range_matches("de-DE", "de-x-DE"));
            assert!(!lang_range_matches("en", "de"));
        }
    }

    mod extraction_tests {
        use super::*;

        #[test]
        fn test_several_bases_reported() {
            let mut graph = TripleStore::new();
            declare(&mut graph, xsd::INTEGER, &[(xsd::MIN_INCLUSIVE, typed("0", xsd::INTEGER))]);
            graph.add(Triple::new(ex("dt"), Node::iri(owl::ON_DATATYPE), Node::iri(xsd::DECIMAL)));

            let mut errors = ErrorSink::new();
            let found = extract_restrictions(&graph, &mut errors);
            assert!(found.is_empty());
            assert_eq!(errors.len(), 1);
            assert!(errors.messages()[0].starts_with("Several base datatypes"));
        }

        #[test]
        fn test_plain_datatype_is_not_a_restriction() {
            let mut graph = TripleStore::new();
            graph.add(Triple::new(ex("dt"), Node::iri(rdf::TYPE), Node::iri(rdfs::DATATYPE)));
            let mut errors = ErrorSink::new();
            assert!(extract_restrictions(&graph, &mut errors).is_empty());
            assert!(errors.is_empty());
        }
    }
}
