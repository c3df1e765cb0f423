use serde_json::Value;

/// Situational attributes the recommendation rules run on.
///
/// Parsing is deliberately lenient: anything outside the enumeration,
/// including non-string JSON values, counts as absent and triggers a
/// clarifying question instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Light,
    Dark,
}

impl Background {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "light" => Some(Background::Light),
            "dark" => Some(Background::Dark),
            _ => None,
        }
    }

    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        value.and_then(Value::as_str).and_then(Self::parse)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Background::Light => "light",
            Background::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Main,
    Supporting,
}

impl ElementRole {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "main" => Some(ElementRole::Main),
            "supporting" => Some(ElementRole::Supporting),
            _ => None,
        }
    }

    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        value.and_then(Value::as_str).and_then(Self::parse)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementRole::Main => "main",
            ElementRole::Supporting => "supporting",
        }
    }
}

/// Which brand a request is asking about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandQuery {
    Company,
    Product(String),
    Unclear,
}

// Product keywords are checked before the company keywords so that e.g.
// "ciq support logo" resolves to the support product, not the company brand.
const PRODUCT_KEYWORDS: &[(&str, &[&str])] = &[
    ("fuzzball", &["fuzzball", "fuzz ball"]),
    ("apptainer", &["apptainer"]),
    ("warewulf-pro", &["warewulf pro", "warewulf-pro", "warewulf"]),
    ("ascender-pro", &["ascender pro", "ascender-pro", "ascender"]),
    ("bridge", &["bridge", "centos bridge"]),
    (
        "rlcx",
        &["rlc-ai", "rlc ai", "rlc hardened", "rlc-hardened", "rocky linux", "rocky", "rlc"],
    ),
    ("ciq-support", &["ciq support", "ciq-support"]),
];

const COMPANY_KEYWORDS: &[&str] = &["ciq", "company logo", "main logo", "brand logo"];

pub fn detect_brand(request: &str) -> BrandQuery {
    for (product_id, keywords) in PRODUCT_KEYWORDS {
        if contains_any(request, keywords) {
            return BrandQuery::Product((*product_id).to_string());
        }
    }
    if contains_any(request, COMPANY_KEYWORDS) {
        return BrandQuery::Company;
    }
    BrandQuery::Unclear
}

/// Design-context keyword sets for the company color-scheme rules.
pub const COLORFUL_TERMS: &[&str] = &["colorful", "busy", "marketing", "promotional", "vibrant"];
pub const MINIMAL_TERMS: &[&str] = &["clean", "simple", "minimal", "black and white", "neutral"];
pub const ADVERTISING_TERMS: &[&str] = &["ad", "advertising"];

/// Background cues are scanned in the request only, never in the design
/// context, so a "black and white" minimal context cannot flip the background.
pub fn background_cue(request: &str) -> Option<Background> {
    if contains_any(request, &["light", "white"]) {
        Some(Background::Light)
    } else if contains_any(request, &["dark", "black"]) {
        Some(Background::Dark)
    } else {
        None
    }
}

pub fn role_cue(request: &str) -> Option<ElementRole> {
    if contains_any(request, &["hero", "main"]) {
        Some(ElementRole::Main)
    } else if contains_any(request, &["supporting", "secondary"]) {
        Some(ElementRole::Supporting)
    } else {
        None
    }
}

/// Word-level term matching. Single-word terms match whole words only
/// ("shadow" does not contain the advertising term "ad"); multi-word terms
/// match as a contiguous word sequence ("black and white").
pub fn contains_term(text: &str, term: &str) -> bool {
    let text_words = tokenize(text);
    let term_words = tokenize(term);
    if term_words.is_empty() || text_words.len() < term_words.len() {
        return false;
    }
    text_words
        .windows(term_words.len())
        .any(|window| window == term_words.as_slice())
}

pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| contains_term(text, term))
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
