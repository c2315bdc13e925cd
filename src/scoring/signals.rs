//! Derived page signals used by several rules.
//!
//! Everything here is a pure read of `PageData`; the rule modules decide
//! what the signals cost.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::page::PageData;

lazy_static! {
    static ref QUESTION_START: Regex = Regex::new(
        r"(?i)^\s*(how|what|why|when|where|which|who|can|does|is|should|will)\b"
    ).unwrap();

    static ref SUMMARY_HEADING: Regex = Regex::new(
        r"(?i)\b(summary|tl;?dr|conclusion|overview|highlights|key takeaways)\b"
    ).unwrap();

    /// First-person, experience or data markers.
    static ref EEAT_MARKER: Regex = Regex::new(
        r"(?i)(\b(i|i'm|i've|we|we've|our|my|tested|tried|reviewed|hands-on|experience|case study|data|research|study|survey|results|analysis|expert)\b|\d)"
    ).unwrap();

    /// Stock transitions typical of unedited assistant output.
    static ref AI_SPEAK: Regex = Regex::new(
        r"(?i)\b(delve|in today's (fast-paced|digital) (world|landscape)|it'?s (important|worth) (to note|noting)|it is (important|worth) (to note|noting)|in the realm of|navigat(e|ing) the complexities|a testament to|rich tapestry|unlock(ing)? the (power|potential)|game[- ]changer|ever-evolving|seamlessly|furthermore|moreover|in conclusion)\b"
    ).unwrap();

    static ref SENTENCE_SPLIT: Regex = Regex::new(r"[.!?]+").unwrap();

    static ref MARKDOWN_LINK: Regex = Regex::new(r"\[[^\]]+\]\([^)\s]+\)").unwrap();
}

/// Schema.org types that count as FAQ markup.
const FAQ_TYPES: &[&str] = &["FAQPage", "QAPage"];

/// Types that name a concrete entity.
const ENTITY_TYPES: &[&str] = &["Person", "Organization", "Product", "Place", "Event"];

/// Required properties for the schema types we validate.
const REQUIRED_SCHEMA_PROPERTIES: &[(&str, &[&str])] = &[
    ("Article", &["headline", "author", "datePublished"]),
    ("WebPage", &["name", "description"]),
    ("Organization", &["name", "url"]),
    ("Product", &["name", "offers"]),
    ("FAQPage", &["mainEntity"]),
    ("LocalBusiness", &["name", "address"]),
];

pub fn is_question_heading(heading: &str) -> bool {
    heading.contains('?') || QUESTION_START.is_match(heading)
}

pub fn has_question_heading(page: &PageData) -> bool {
    page.extracted.all_headings().any(is_question_heading)
}

pub fn has_summary_heading(page: &PageData) -> bool {
    page.extracted
        .all_headings()
        .any(|h| SUMMARY_HEADING.is_match(h))
}

/// Whether the H1 or any H2 carries an experience or data marker.
pub fn has_eeat_marker(page: &PageData) -> bool {
    page.extracted
        .h1
        .iter()
        .chain(page.extracted.h2.iter())
        .any(|h| EEAT_MARKER.is_match(h))
}

/// `@type` values of one JSON-LD object; arrays yield every entry.
pub fn object_types(object: &Value) -> Vec<&str> {
    match object.get("@type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Top-level JSON-LD objects, with `@graph` containers expanded.
pub fn schema_objects(page: &PageData) -> Vec<&Value> {
    let mut objects = Vec::new();
    for object in &page.extracted.structured_data {
        match object.get("@graph").and_then(Value::as_array) {
            Some(graph) => objects.extend(graph.iter()),
            None => objects.push(object),
        }
    }
    objects
}

/// Every schema type the page declares, from the extractor list and JSON-LD.
pub fn declared_types(page: &PageData) -> Vec<&str> {
    let mut types: Vec<&str> = page
        .extracted
        .schema_types
        .iter()
        .map(String::as_str)
        .collect();
    for object in schema_objects(page) {
        types.extend(object_types(object));
    }
    types
}

pub fn has_faq_schema(page: &PageData) -> bool {
    declared_types(page).iter().any(|t| FAQ_TYPES.contains(t))
}

pub fn has_entity_type(page: &PageData) -> bool {
    declared_types(page).iter().any(|t| ENTITY_TYPES.contains(t))
}

/// A structured-data object without `@type`, if any.
pub fn has_untyped_schema(page: &PageData) -> bool {
    schema_objects(page)
        .iter()
        .any(|object| object_types(object).is_empty())
}

/// First recognized schema object missing required properties.
pub fn first_incomplete_schema(page: &PageData) -> Option<(&'static str, Vec<&'static str>)> {
    for object in schema_objects(page) {
        for declared in object_types(object) {
            let Some(&(schema_type, required)) = REQUIRED_SCHEMA_PROPERTIES
                .iter()
                .find(|(name, _)| *name == declared)
            else {
                continue;
            };
            let missing: Vec<&'static str> = required
                .iter()
                .copied()
                .filter(|prop| !has_property(object, prop))
                .collect();
            if !missing.is_empty() {
                return Some((schema_type, missing));
            }
        }
    }
    None
}

fn has_property(object: &Value, prop: &str) -> bool {
    match object.get(prop) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

/// Number of stock assistant phrases in the text.
pub fn ai_speak_hits(text: &str) -> usize {
    AI_SPEAK.find_iter(text).count()
}

/// Population variance of sentence lengths in words.
///
/// Returns `None` for texts with too few sentences to judge.
pub fn sentence_length_variance(text: &str, min_sentences: usize) -> Option<f64> {
    let lengths: Vec<f64> = SENTENCE_SPLIT
        .split(text)
        .map(|s| s.split_whitespace().count())
        .filter(|&words| words > 0)
        .map(|words| words as f64)
        .collect();

    if lengths.len() < min_sentences {
        return None;
    }

    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / n;
    Some(lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n)
}

/// Structural llms.txt elements absent from `content`.
pub fn llms_txt_missing_elements(content: &str) -> Vec<&'static str> {
    let lines: Vec<&str> = content.lines().map(str::trim_start).collect();
    let mut missing = Vec::new();

    if !lines.iter().any(|l| l.starts_with("# ")) {
        missing.push("title");
    }
    if !lines.iter().any(|l| l.starts_with('>')) {
        missing.push("description");
    }
    if !lines.iter().any(|l| l.starts_with("## ")) {
        missing.push("section");
    }
    if !MARKDOWN_LINK.is_match(content) {
        missing.push("link");
    }

    missing
}
