//! RDF node and triple model

use crate::vocab::{rdf, xsd};
use crate::ModelError;
use iri_string::types::IriStr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute IRI
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Iri(String);

impl Iri {
    /// Create an IRI, validating it against RFC 3987
    pub fn new(s: impl Into<String>) -> Result<Self, ModelError> {
        let s = s.into();
        IriStr::new(&s).map_err(|_| ModelError::InvalidIri(s.clone()))?;
        Ok(Self(s))
    }

    /// Create an IRI without validation. Meant for the static vocabulary tables.
    pub fn new_unchecked(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Blank node, identified by an opaque local id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct BlankNode(String);

impl BlankNode {
    /// Create a blank node. Ids are restricted to ASCII alphanumerics, `-` and `_`.
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if valid {
            Ok(Self(id))
        } else {
            Err(ModelError::InvalidBlankNode(id))
        }
    }

    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// RDF literal: lexical form, datatype and optional language tag.
///
/// The datatype is always present: simple literals carry `xsd:string`,
/// language-tagged ones `rdf:langString`. Nothing is normalized, the lexical
/// form and the language tag are kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Literal {
    lexical: String,
    datatype: Iri,
    language: Option<String>,
}

impl Literal {
    /// `"lexical"` typed `xsd:string`
    pub fn new_simple(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Iri::new_unchecked(xsd::STRING),
            language: None,
        }
    }

    /// `"lexical"^^datatype`
    pub fn new_typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            datatype,
            language: None,
        }
    }

    /// `"lexical"@language`
    pub fn new_language_tagged(
        lexical: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let language = language.into();
        let valid = !language.is_empty()
            && language.split('-').all(|part| {
                !part.is_empty() && part.len() <= 8 && part.bytes().all(|b| b.is_ascii_alphanumeric())
            });
        if !valid {
            return Err(ModelError::InvalidLanguageTag(language));
        }
        Ok(Self {
            lexical: lexical.into(),
            datatype: Iri::new_unchecked(rdf::LANG_STRING),
            language: Some(language),
        })
    }

    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        match &self.language {
            Some(language) => write!(f, "@{language}"),
            None if self.datatype.as_str() == xsd::STRING => Ok(()),
            None => write!(f, "^^{}", self.datatype),
        }
    }
}

/// Graph node: IRI, blank node or literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Node {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

impl Node {
    /// IRI node from a vocabulary term (unchecked)
    pub fn iri(iri: &str) -> Self {
        Node::Iri(Iri::new_unchecked(iri))
    }

    /// Blank node from a local id (unchecked)
    pub fn blank(id: &str) -> Self {
        Node::Blank(BlankNode::new_unchecked(id))
    }

    /// True iff this node is the IRI `iri`
    pub fn is(&self, iri: &str) -> bool {
        matches!(self, Node::Iri(i) if i.as_str() == iri)
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank(&self) -> Option<&BlankNode> {
        match self {
            Node::Blank(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(l) => Some(l),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(i) => i.fmt(f),
            Node::Blank(b) => b.fmt(f),
            Node::Literal(l) => l.fmt(f),
        }
    }
}

impl From<Iri> for Node {
    fn from(iri: Iri) -> Self {
        Node::Iri(iri)
    }
}

impl From<BlankNode> for Node {
    fn from(b: BlankNode) -> Self {
        Node::Blank(b)
    }
}

impl From<Literal> for Node {
    fn from(l: Literal) -> Self {
        Node::Literal(l)
    }
}

/// RDF Triple representation.
///
/// The fields accept any node so that rule evaluation can work on
/// generalized triples; [`Triple::is_well_formed`] tells whether the triple
/// is a plain RDF triple (IRI or blank subject, IRI predicate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
}

impl Triple {
    pub fn new(subject: impl Into<Node>, predicate: impl Into<Node>, object: impl Into<Node>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Create a triple, rejecting anything that is not well-formed RDF
    pub fn try_new(
        subject: impl Into<Node>,
        predicate: impl Into<Node>,
        object: impl Into<Node>,
    ) -> Result<Self, ModelError> {
        let triple = Self::new(subject, predicate, object);
        if triple.is_well_formed() {
            Ok(triple)
        } else {
            Err(ModelError::IllFormedTriple(triple.to_string()))
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.subject.is_literal() && self.predicate.is_iri()
    }

    /// Iterate over subject, predicate and object
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        [&self.subject, &self.predicate, &self.object].into_iter()
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
