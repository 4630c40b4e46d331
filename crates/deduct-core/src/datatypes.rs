//! XSD datatype tables: recognised datatypes per profile, subsumption,
//! disjointness, facet categories and lexical-space checks.

use crate::vocab::{owl, rdf, rdfs, xsd};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Datatypes every profile recognises
pub const COMMON_DATATYPES: &[&str] = &[
    xsd::INTEGER,
    xsd::DECIMAL,
    xsd::NON_NEGATIVE_INTEGER,
    xsd::NON_POSITIVE_INTEGER,
    xsd::NEGATIVE_INTEGER,
    xsd::POSITIVE_INTEGER,
    xsd::LONG,
    xsd::INT,
    xsd::SHORT,
    xsd::BYTE,
    xsd::UNSIGNED_LONG,
    xsd::UNSIGNED_INT,
    xsd::UNSIGNED_SHORT,
    xsd::UNSIGNED_BYTE,
    xsd::FLOAT,
    xsd::DOUBLE,
    xsd::STRING,
    xsd::NORMALIZED_STRING,
    xsd::TOKEN,
    xsd::LANGUAGE,
    xsd::NAME,
    xsd::NCNAME,
    xsd::NMTOKEN,
    xsd::BOOLEAN,
    xsd::HEX_BINARY,
    xsd::BASE64_BINARY,
    xsd::ANY_URI,
    xsd::DATE_TIME_STAMP,
    xsd::DATE_TIME,
    xsd::TIME,
    xsd::DATE,
    rdfs::LITERAL,
    rdf::XML_LITERAL,
];

const RDFS_ONLY: &[&str] = &[xsd::G_YEAR_MONTH, xsd::G_MONTH_DAY, xsd::G_YEAR, xsd::G_DAY, xsd::G_MONTH];
const OWL_RL_ONLY: &[&str] = &[rdf::PLAIN_LITERAL];
const EXTENSION_ONLY: &[&str] = &[owl::RATIONAL, owl::REAL];

/// The datatype vocabulary a profile recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatatypeSet {
    /// Common XSD types plus the gregorian `g*` family
    Rdfs,
    /// Common XSD types plus `rdf:PlainLiteral`
    OwlRl,
    /// OWL RL types plus `owl:rational` and `owl:real`
    Extension,
}

impl DatatypeSet {
    /// Every datatype in the set
    pub fn iter(self) -> impl Iterator<Item = &'static str> {
        let extra: &[&[&'static str]] = match self {
            DatatypeSet::Rdfs => &[RDFS_ONLY],
            DatatypeSet::OwlRl => &[OWL_RL_ONLY],
            DatatypeSet::Extension => &[OWL_RL_ONLY, EXTENSION_ONLY],
        };
        COMMON_DATATYPES
            .iter()
            .chain(extra.iter().flat_map(|set| set.iter()))
            .copied()
    }

    pub fn contains(self, datatype: &str) -> bool {
        self.iter().any(|dt| dt == datatype)
    }
}

/// All proper supertypes of `datatype`, nearest first. Empty for unknown types.
pub fn supertypes(datatype: &str) -> &'static [&'static str] {
    match datatype {
        xsd::DATE_TIME_STAMP => &[xsd::DATE_TIME],
        xsd::INTEGER => &[xsd::DECIMAL],
        xsd::LONG => &[xsd::INTEGER, xsd::DECIMAL],
        xsd::INT => &[xsd::LONG, xsd::INTEGER, xsd::DECIMAL],
        xsd::SHORT => &[xsd::INT, xsd::LONG, xsd::INTEGER, xsd::DECIMAL],
        xsd::BYTE => &[xsd::SHORT, xsd::INT, xsd::LONG, xsd::INTEGER, xsd::DECIMAL],

        xsd::NON_NEGATIVE_INTEGER => &[xsd::INTEGER, xsd::DECIMAL],
        xsd::POSITIVE_INTEGER => &[xsd::NON_NEGATIVE_INTEGER, xsd::INTEGER, xsd::DECIMAL],
        xsd::UNSIGNED_LONG => &[xsd::NON_NEGATIVE_INTEGER, xsd::INTEGER, xsd::DECIMAL],
        xsd::UNSIGNED_INT => &[xsd::UNSIGNED_LONG, xsd::NON_NEGATIVE_INTEGER, xsd::INTEGER, xsd::DECIMAL],
        xsd::UNSIGNED_SHORT => &[
            xsd::UNSIGNED_INT,
            xsd::UNSIGNED_LONG,
            xsd::NON_NEGATIVE_INTEGER,
            xsd::INTEGER,
            xsd::DECIMAL,
        ],
        xsd::UNSIGNED_BYTE => &[
            xsd::UNSIGNED_SHORT,
            xsd::UNSIGNED_INT,
            xsd::UNSIGNED_LONG,
            xsd::NON_NEGATIVE_INTEGER,
            xsd::INTEGER,
            xsd::DECIMAL,
        ],

        xsd::NON_POSITIVE_INTEGER => &[xsd::INTEGER, xsd::DECIMAL],
        xsd::NEGATIVE_INTEGER => &[xsd::NON_POSITIVE_INTEGER, xsd::INTEGER, xsd::DECIMAL],

        xsd::NORMALIZED_STRING => &[xsd::STRING],
        xsd::TOKEN => &[xsd::NORMALIZED_STRING, xsd::STRING],
        xsd::LANGUAGE => &[xsd::TOKEN, xsd::NORMALIZED_STRING, xsd::STRING],
        xsd::NAME => &[xsd::TOKEN, xsd::NORMALIZED_STRING, xsd::STRING],
        xsd::NCNAME => &[xsd::NAME, xsd::TOKEN, xsd::NORMALIZED_STRING, xsd::STRING],
        xsd::NMTOKEN => &[xsd::NAME, xsd::TOKEN, xsd::NORMALIZED_STRING, xsd::STRING],

        _ => &[],
    }
}

/// Top-level datatypes whose value spaces are pairwise disjoint
const TOP_LEVEL_DATATYPES: &[&str] = &[
    xsd::ANY_URI,
    xsd::BASE64_BINARY,
    xsd::BOOLEAN,
    xsd::DATE,
    xsd::DATE_TIME,
    xsd::DECIMAL,
    xsd::DOUBLE,
    xsd::FLOAT,
    xsd::HEX_BINARY,
    xsd::STRING,
    xsd::TIME,
    rdf::XML_LITERAL,
];

/// Pairs of datatypes with disjoint value spaces.
///
/// Every unordered pair of top-level types appears once, plus the two
/// sign-restricted integer pairs.
pub fn disjoint_pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    TOP_LEVEL_DATATYPES
        .iter()
        .enumerate()
        .flat_map(|(i, left)| TOP_LEVEL_DATATYPES[i + 1..].iter().map(move |right| (*left, *right)))
        .chain([
            (xsd::NON_NEGATIVE_INTEGER, xsd::NEGATIVE_INTEGER),
            (xsd::POSITIVE_INTEGER, xsd::NON_POSITIVE_INTEGER),
        ])
}

/// Which facets apply to a restricted base datatype
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetCategory {
    /// `xsd:min*` / `xsd:max*` bounds
    MinMax,
    /// `xsd:length`, `xsd:minLength`, `xsd:maxLength`
    Length,
    /// Length facets plus `xsd:pattern`
    LengthAndPattern,
    /// Length facets plus `rdf:langRange`
    LengthAndLangRange,
}

/// Facet category of a base datatype, `None` if it cannot be restricted
pub fn facet_category(datatype: &str) -> Option<FacetCategory> {
    match datatype {
        owl::RATIONAL
        | xsd::DECIMAL
        | xsd::INTEGER
        | xsd::NON_NEGATIVE_INTEGER
        | xsd::NON_POSITIVE_INTEGER
        | xsd::POSITIVE_INTEGER
        | xsd::NEGATIVE_INTEGER
        | xsd::LONG
        | xsd::INT
        | xsd::SHORT
        | xsd::BYTE
        | xsd::UNSIGNED_LONG
        | xsd::UNSIGNED_INT
        | xsd::UNSIGNED_SHORT
        | xsd::UNSIGNED_BYTE
        | xsd::DOUBLE
        | xsd::FLOAT
        | xsd::DATE_TIME
        | xsd::DATE_TIME_STAMP
        | xsd::TIME
        | xsd::DATE => Some(FacetCategory::MinMax),
        xsd::HEX_BINARY | xsd::BASE64_BINARY => Some(FacetCategory::Length),
        xsd::ANY_URI
        | xsd::STRING
        | xsd::NMTOKEN
        | xsd::NAME
        | xsd::NCNAME
        | xsd::LANGUAGE
        | xsd::NORMALIZED_STRING
        | xsd::TOKEN => Some(FacetCategory::LengthAndPattern),
        rdf::PLAIN_LITERAL => Some(FacetCategory::LengthAndLangRange),
        _ => None,
    }
}

/// Whether `lexical` is in the lexical space of `datatype`.
///
/// Datatypes without a check here (strings, URIs, XML literals, the `g*`
/// family, unknown types) accept every lexical form.
pub fn is_valid_lexical(lexical: &str, datatype: &str) -> bool {
    let collapsed = lexical.trim();
    match datatype {
        xsd::DECIMAL => is_decimal(collapsed),
        xsd::FLOAT | xsd::DOUBLE => is_floating(collapsed),
        xsd::BOOLEAN => matches!(collapsed, "true" | "false" | "1" | "0"),
        xsd::HEX_BINARY => collapsed.len() % 2 == 0 && collapsed.bytes().all(|b| b.is_ascii_hexdigit()),
        xsd::BASE64_BINARY => is_base64(collapsed),
        xsd::DATE_TIME => parse_date_time(collapsed).is_some(),
        xsd::DATE_TIME_STAMP => DateTime::parse_from_rfc3339(collapsed).is_ok(),
        xsd::DATE => NaiveDate::parse_from_str(strip_timezone(collapsed), "%Y-%m-%d").is_ok(),
        xsd::TIME => NaiveTime::parse_from_str(strip_timezone(collapsed), "%H:%M:%S%.f").is_ok(),
        xsd::NORMALIZED_STRING => !lexical.contains(['\n', '\r', '\t']),
        xsd::TOKEN => is_token(lexical),
        xsd::LANGUAGE => is_language(lexical),
        xsd::NMTOKEN => !lexical.is_empty() && lexical.chars().all(is_name_char),
        xsd::NAME => is_name(lexical, true),
        xsd::NCNAME => is_name(lexical, false),
        owl::RATIONAL => is_rational(collapsed),
        // owl:real has no lexical forms of its own
        owl::REAL => false,
        dt => match integer_range(dt) {
            Some(range) => integer_in_range(collapsed, range),
            None => true,
        },
    }
}

/// Numeric value of a literal of a numeric datatype, for facet comparisons
pub fn numeric_value(lexical: &str, datatype: &str) -> Option<f64> {
    let collapsed = lexical.trim();
    if !is_valid_lexical(collapsed, datatype) {
        return None;
    }
    match datatype {
        xsd::FLOAT | xsd::DOUBLE => match collapsed {
            "INF" | "+INF" => Some(f64::INFINITY),
            "-INF" => Some(f64::NEG_INFINITY),
            _ => collapsed.parse().ok(),
        },
        owl::RATIONAL => {
            let (num, den) = collapsed.split_once('/')?;
            Some(num.parse::<f64>().ok()? / den.parse::<f64>().ok()?)
        }
        xsd::DECIMAL => collapsed.parse().ok(),
        dt if integer_range(dt).is_some() => collapsed.parse().ok(),
        _ => None,
    }
}

/// A value of an ordered datatype, compared by the min/max facets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderedValue {
    Number(f64),
    Instant(NaiveDateTime),
    TimeOfDay(NaiveTime),
}

impl PartialOrd for OrderedValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (OrderedValue::Number(a), OrderedValue::Number(b)) => a.partial_cmp(b),
            (OrderedValue::Instant(a), OrderedValue::Instant(b)) => a.partial_cmp(b),
            (OrderedValue::TimeOfDay(a), OrderedValue::TimeOfDay(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Value of a literal of a numeric or temporal datatype.
///
/// Dates compare as midnight UTC; values of different kinds are unordered.
pub fn ordered_value(lexical: &str, datatype: &str) -> Option<OrderedValue> {
    let collapsed = lexical.trim();
    match datatype {
        xsd::DATE_TIME | xsd::DATE_TIME_STAMP => {
            if !is_valid_lexical(collapsed, datatype) {
                return None;
            }
            parse_date_time(collapsed).map(OrderedValue::Instant)
        }
        xsd::DATE => NaiveDate::parse_from_str(strip_timezone(collapsed), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(OrderedValue::Instant),
        xsd::TIME => NaiveTime::parse_from_str(strip_timezone(collapsed), "%H:%M:%S%.f")
            .ok()
            .map(OrderedValue::TimeOfDay),
        _ => numeric_value(collapsed, datatype).map(OrderedValue::Number),
    }
}

/// Inclusive bounds of an integer datatype; `None` on a side means unbounded
type IntegerRange = (Option<i128>, Option<i128>);

fn integer_range(datatype: &str) -> Option<IntegerRange> {
    let range = match datatype {
        xsd::INTEGER => (None, None),
        xsd::NON_NEGATIVE_INTEGER => (Some(0), None),
        xsd::POSITIVE_INTEGER => (Some(1), None),
        xsd::NON_POSITIVE_INTEGER => (None, Some(0)),
        xsd::NEGATIVE_INTEGER => (None, Some(-1)),
        xsd::LONG => (Some(i64::MIN as i128), Some(i64::MAX as i128)),
        xsd::INT => (Some(i32::MIN as i128), Some(i32::MAX as i128)),
        xsd::SHORT => (Some(i16::MIN as i128), Some(i16::MAX as i128)),
        xsd::BYTE => (Some(i8::MIN as i128), Some(i8::MAX as i128)),
        xsd::UNSIGNED_LONG => (Some(0), Some(u64::MAX as i128)),
        xsd::UNSIGNED_INT => (Some(0), Some(u32::MAX as i128)),
        xsd::UNSIGNED_SHORT => (Some(0), Some(u16::MAX as i128)),
        xsd::UNSIGNED_BYTE => (Some(0), Some(u8::MAX as i128)),
        _ => return None,
    };
    Some(range)
}

fn integer_in_range(lexical: &str, (min, max): IntegerRange) -> bool {
    let digits = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let negative = lexical.starts_with('-') && digits.bytes().any(|b| b != b'0');
    match lexical.parse::<i128>() {
        Ok(value) => min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m),
        // Too large for i128: only the sign can still be checked
        Err(_) => {
            if negative {
                min.is_none()
            } else {
                max.is_none()
            }
        }
    }
}

fn is_decimal(lexical: &str) -> bool {
    let body = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    (!int_part.is_empty() || !frac_part.is_empty())
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

fn is_floating(lexical: &str) -> bool {
    if matches!(lexical, "INF" | "+INF" | "-INF" | "NaN") {
        return true;
    }
    let (mantissa, exponent) = match lexical.find(['e', 'E']) {
        Some(pos) => (&lexical[..pos], Some(&lexical[pos + 1..])),
        None => (lexical, None),
    };
    let exponent_ok = exponent.map_or(true, |e| {
        let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    });
    is_decimal(mantissa) && exponent_ok
}

fn is_rational(lexical: &str) -> bool {
    match lexical.split_once('/') {
        Some((num, den)) => {
            integer_in_range(num, (None, None))
                && integer_in_range(den, (Some(1), None))
                && !den.starts_with('+')
        }
        None => integer_in_range(lexical, (None, None)),
    }
}

fn is_base64(lexical: &str) -> bool {
    let compact: Vec<u8> = lexical.bytes().filter(|b| *b != b' ').collect();
    if compact.len() % 4 != 0 {
        return false;
    }
    let padding = compact.iter().rev().take_while(|b| **b == b'=').count();
    padding <= 2
        && compact[..compact.len() - padding]
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/')
}

fn is_token(lexical: &str) -> bool {
    !lexical.contains(['\n', '\r', '\t'])
        && !lexical.starts_with(' ')
        && !lexical.ends_with(' ')
        && !lexical.contains("  ")
}

fn is_language(lexical: &str) -> bool {
    let mut parts = lexical.split('-');
    let primary_ok = parts
        .next()
        .is_some_and(|p| (1..=8).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_alphabetic()));
    primary_ok && parts.all(|p| (1..=8).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_alphanumeric()))
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.' | '\u{B7}')
}

fn is_name(lexical: &str, allow_colon: bool) -> bool {
    let mut chars = lexical.chars();
    let start_ok = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || (allow_colon && c == ':'));
    start_ok && chars.all(|c| is_name_char(c) && (allow_colon || c != ':'))
}

/// Strip a trailing `Z` or `+hh:mm` / `-hh:mm` timezone
fn strip_timezone(lexical: &str) -> &str {
    if let Some(stripped) = lexical.strip_suffix('Z') {
        return stripped;
    }
    if lexical.len() <= 6 {
        return lexical;
    }
    let split = lexical.len() - 6;
    match (lexical.get(..split), lexical.get(split..)) {
        (Some(head), Some(tz)) => {
            let tz = tz.as_bytes();
            if matches!(tz[0], b'+' | b'-')
                && tz[3] == b':'
                && tz[1..3].iter().chain(&tz[4..]).all(u8::is_ascii_digit)
            {
                head
            } else {
                lexical
            }
        }
        _ => lexical,
    }
}

fn parse_date_time(lexical: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(lexical) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(strip_timezone(lexical), "%Y-%m-%dT%H:%M:%S%.f").ok()
}
