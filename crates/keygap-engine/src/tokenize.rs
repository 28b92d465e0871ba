//! Tokenization of folded, lower-cased text.

use std::sync::LazyLock;

use regex::Regex;

/// A token starts with a letter or digit and may continue with letters, digits and the
/// punctuation that appears inside terms: `a/b`, `node.js`, `c++`, `50%`, `go-to-market`.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9][a-z0-9\-/.+%]*").expect("valid regex"));

/// Trailing characters that belong to the sentence rather than the term.
const TRAILING_PUNCTUATION: &[char] = &['.', '-', '/'];

/// Splits lower-cased text into tokens, in document order.
///
/// Characters outside the token alphabet (commas, parentheses, non-ASCII letters) separate
/// tokens, so `"ga4,"` yields `"ga4"`. Sentence punctuation trailing a token is trimmed:
/// `"seo."` yields `"seo"`.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
