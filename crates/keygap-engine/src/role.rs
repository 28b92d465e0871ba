//! Job title detection.
//!
//! Sources are tried in priority order and the first one that cleans to a non-empty title
//! wins:
//! 1. the resume's role field, then its headline
//! 2. a labeled line in the job text (`Title: ...`, `Role - ...`, `Position: ...`)
//! 3. the first non-blank line of the job text, minus a leading "as a" / "for an" / "a"
//! 4. one of the first ten non-blank lines that looks like a title
//!
//! Inputs are loosely typed: missing fields and fields of the wrong JSON type read as absent.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

use crate::normalize_light;

/// `title: ...`, `role - ...`, `position: ...` up to a comma or line end.
static LABELED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(title|role|position)\s*[:\-]\s*([^,\n]+)").expect("valid regex")
});

/// "As a ...", "For an ..." up to clause punctuation; sentence-ending dots are found later.
static AS_FOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:as|for)\s+(?:an?\s+)?([^,;:!?\n]+)").expect("valid regex")
});

/// "A ...", "An ...".
static ARTICLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^an?\s+(.+)$").expect("valid regex"));

/// Separator punctuation replaced by spaces.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;:|]+").expect("valid regex"));

/// A trailing clause introduced by a connector word, through to the end.
static TRAILING_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s+(?:to|for|that|who|and|with|supporting|helping|growing|at|in|on|across|by)\b.*$",
    )
    .expect("valid regex")
});

/// The standalone words "role" and "position".
static ROLE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:role|position)\b").expect("valid regex"));

/// Abbreviations whose trailing dot does not end a sentence ("Sr. Data Scientist").
const TITLE_ABBREVIATIONS: &[&str] = &[
    "asst", "assoc", "dept", "dir", "eng", "exec", "gen", "jnr", "jr", "mgr", "mr", "ms",
    "mrs", "no", "snr", "sr", "st", "sup", "vp",
];

/// Maximum words kept in a cleaned title.
const MAX_TITLE_WORDS: usize = 10;
/// Non-blank lines examined by the fallback scan.
const SCAN_LINES: usize = 10;
/// Shortest line the fallback scan accepts, in characters.
const SCAN_MIN_CHARS: usize = 4;
/// Longest line the fallback scan accepts, in characters.
const SCAN_MAX_CHARS: usize = 100;

/// Input to role extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleInput {
    /// Free job-description text.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub job_text: Option<String>,
    /// Structured resume fields.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeFields>,
}

/// Resume fields consulted before the job text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeFields {
    /// Form fields.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub form_data: Option<FormData>,
    /// Resume headline.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
}

/// Resume form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    /// Explicit role.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RoleInput {
    /// Creates input from job text alone.
    pub fn from_job_text(job_text: impl Into<String>) -> Self {
        Self {
            job_text: Some(job_text.into()),
            resume: None,
        }
    }

    /// Sets the resume role field.
    pub fn with_resume_role(mut self, role: impl Into<String>) -> Self {
        self.resume
            .get_or_insert_with(ResumeFields::default)
            .form_data
            .get_or_insert_with(FormData::default)
            .role = Some(role.into());
        self
    }

    /// Sets the resume headline.
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.resume
            .get_or_insert_with(ResumeFields::default)
            .headline = Some(headline.into());
        self
    }
}

/// Deserializes a value, reading anything of the wrong shape as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    /// Either the expected value or anything else.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        /// The expected shape.
        Value(T),
        /// Anything else, discarded.
        Other(IgnoredAny),
    }

    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => Some(value),
        Lenient::Other(_) => None,
    })
}

/// Where a role guess came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSource {
    /// The resume role field or headline.
    Resume,
    /// A `Title:`/`Role:`/`Position:` label in the job text.
    Labeled,
    /// The first non-blank line of the job text.
    FirstLine,
    /// A title-like line found by scanning.
    Scan,
    /// Nothing matched.
    None,
}

/// A cleaned role title and its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleGuess {
    /// Cleaned title; empty when nothing matched.
    pub role: String,
    /// Which rule produced it.
    pub source: RoleSource,
}

impl RoleGuess {
    /// The empty guess.
    pub fn none() -> Self {
        Self {
            role: String::new(),
            source: RoleSource::None,
        }
    }
}

/// Guesses a role title, returning it with the rule that produced it.
pub fn extract_role_with_source(input: &RoleInput) -> RoleGuess {
    let resume = input.resume.as_ref();
    let resume_fields = [
        resume
            .and_then(|r| r.form_data.as_ref())
            .and_then(|f| f.role.as_deref()),
        resume.and_then(|r| r.headline.as_deref()),
    ];
    if let Some(role) = resume_fields.into_iter().flatten().find_map(cleaned) {
        return guess(role, RoleSource::Resume);
    }

    let text = input.job_text.as_deref().unwrap_or_default();

    if let Some(role) = LABELED_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(2))
        .find_map(|m| cleaned(m.as_str()))
    {
        return guess(role, RoleSource::Labeled);
    }

    let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    if let Some(role) = lines.clone().next().and_then(|line| cleaned(strip_article(line))) {
        return guess(role, RoleSource::FirstLine);
    }

    if let Some(role) = lines
        .take(SCAN_LINES)
        .filter(|line| looks_like_title(line))
        .find_map(cleaned)
    {
        return guess(role, RoleSource::Scan);
    }

    RoleGuess::none()
}

/// Builds a guess.
fn guess(role: String, source: RoleSource) -> RoleGuess {
    RoleGuess { role, source }
}

/// Cleans a candidate, returning `None` when nothing is left.
fn cleaned(raw: &str) -> Option<String> {
    Some(clean_title(raw)).filter(|t| !t.is_empty())
}

/// Drops a leading "as a" / "for an" clause opener or a bare article.
fn strip_article(line: &str) -> &str {
    if let Some(caps) = AS_FOR_RE.captures(line)
        && let Some(m) = caps.get(1)
    {
        return first_sentence(m.as_str());
    }
    if let Some(caps) = ARTICLE_RE.captures(line)
        && let Some(m) = caps.get(1)
    {
        return m.as_str();
    }
    line
}

/// Cuts `text` at the first dot that ends a sentence.
///
/// A dot ends a sentence when it closes the text or is followed by whitespace, unless the
/// word before it is a known title abbreviation. Dots inside a word (`node.js`) never do.
fn first_sentence(text: &str) -> &str {
    for (i, _) in text.match_indices('.') {
        let rest = &text[i + 1..];
        if !(rest.is_empty() || rest.starts_with(char::is_whitespace)) {
            continue;
        }
        let word = text[..i]
            .rsplit(|c: char| !c.is_alphabetic())
            .next()
            .unwrap_or_default();
        let abbreviation = TITLE_ABBREVIATIONS
            .iter()
            .any(|abbr| abbr.eq_ignore_ascii_case(word));
        if !abbreviation || rest.is_empty() {
            return &text[..i];
        }
    }
    text
}

/// A short capitalized line that is not a sentence.
fn looks_like_title(line: &str) -> bool {
    let chars = line.chars().count();
    (SCAN_MIN_CHARS..=SCAN_MAX_CHARS).contains(&chars)
        && line.chars().next().is_some_and(char::is_uppercase)
        && !line.ends_with(['.', '!', '?'])
}

/// Characters trimmed from both ends of a cleaned title.
fn is_edge_junk(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '"' | '\'' | '-' | '\u{2013}' | '\u{2014}' | '/' | '|' | '*' | '\u{2022}' | '\u{00B7}'
        )
}

/// Cleans a raw title.
///
/// Normalizes quotes and spaces, turns `, ; : |` into spaces, cuts a trailing clause that
/// starts with a connector word ("for a growing fintech"), removes the words "role" and
/// "position", trims quotes and dashes from the ends, and keeps at most ten words.
pub fn clean_title(raw: &str) -> String {
    let text = normalize_light(raw);
    let text = SEPARATOR_RE.replace_all(&text, " ");
    let text = TRAILING_CLAUSE_RE.replace(&text, "");
    let text = ROLE_WORD_RE.replace_all(&text, " ");
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(is_edge_junk)
        .split_whitespace()
        .take(MAX_TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}
