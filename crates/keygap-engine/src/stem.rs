//! Light suffix-stripping stemmer.
//!
//! Deliberately crude: no dictionary, first matching rule wins, false stems are expected.
//! Stems are usually prefixes of the surface word, so a stemmed term such as "email market"
//! is still found inside text containing "email marketing".

use std::borrow::Cow;

use crate::Lexicon;

/// Stems a lower-cased token.
///
/// Rules, in order:
/// 1. short-keep acronyms (`aws`, `ios`, `saas`) and tokens carrying `.`, `/`, `+` or `%`
///    (`node.js`, `ci/cd`) are returned unchanged
/// 2. `-ies` (length > 4) becomes `-y`
/// 3. `-sses` drops the final `s`
/// 4. `-s` (length > 3, not `-ss`) is dropped
/// 5. `-ing` (length > 5) is dropped
/// 6. `-ed` (length > 4) is dropped
pub fn stem<'a>(token: &'a str, lexicon: &Lexicon) -> Cow<'a, str> {
    if lexicon.is_short_keep(token) || token.contains(['.', '/', '+', '%']) {
        return Cow::Borrowed(token);
    }
    stem_word(token)
}

/// Applies the suffix rules without the short-keep exemption.
pub(crate) fn stem_word(token: &str) -> Cow<'_, str> {
    let len = token.len();

    if len > 4
        && let Some(base) = token.strip_suffix("ies")
    {
        return Cow::Owned(format!("{base}y"));
    }
    if token.ends_with("sses") {
        return Cow::Borrowed(&token[..len - 1]);
    }
    if len > 3 && token.ends_with('s') && !token.ends_with("ss") {
        return Cow::Borrowed(&token[..len - 1]);
    }
    if len > 5
        && let Some(base) = token.strip_suffix("ing")
    {
        return Cow::Borrowed(base);
    }
    if len > 4
        && let Some(base) = token.strip_suffix("ed")
    {
        return Cow::Borrowed(base);
    }

    Cow::Borrowed(token)
}

#[cfg(test)]
mod test {
    use super::*;

    fn stemmed(token: &str) -> String {
        stem(token, &Lexicon::new()).into_owned()
    }

    #[test]
    fn plural_ies() {
        assert_eq!(stemmed("strategies"), "strategy");
        assert_eq!(stemmed("companies"), "company");
        // Too short for the -ies rule, falls through to the plain -s rule.
        assert_eq!(stemmed("ties"), "tie");
    }

    #[test]
    fn plural_sses() {
        assert_eq!(stemmed("processes"), "processe");
        assert_eq!(stemmed("classes"), "classe");
        assert_eq!(stemmed("bosses"), "bosse");
    }

    #[test]
    fn plural_s() {
        assert_eq!(stemmed("campaigns"), "campaign");
        assert_eq!(stemmed("kpis"), "kpi");
        assert_eq!(stemmed("business"), "business");
        assert_eq!(stemmed("gas"), "gas");
    }

    #[test]
    fn suffix_ing() {
        assert_eq!(stemmed("marketing"), "market");
        assert_eq!(stemmed("reporting"), "report");
        assert_eq!(stemmed("bring"), "bring");
        assert_eq!(stemmed("string"), "str");
    }

    #[test]
    fn suffix_ed() {
        assert_eq!(stemmed("managed"), "manag");
        assert_eq!(stemmed("shipped"), "shipp");
        assert_eq!(stemmed("used"), "used");
    }

    #[test]
    fn short_keep_is_never_stemmed() {
        assert_eq!(stemmed("aws"), "aws");
        assert_eq!(stemmed("ios"), "ios");
        assert_eq!(stemmed("saas"), "saas");
    }

    #[test]
    fn punctuated_tokens_are_never_stemmed() {
        assert_eq!(stemmed("node.js"), "node.js");
        assert_eq!(stemmed("ci/cd"), "ci/cd");
        assert_eq!(stemmed("sales/ops"), "sales/ops");
    }

    #[test]
    fn stem_word_ignores_short_keep() {
        assert_eq!(stem_word("saas"), "saa");
    }

    #[test]
    fn unchanged_when_no_rule_applies() {
        assert_eq!(stemmed("coordinator"), "coordinator");
        assert_eq!(stemmed("seo"), "seo");
    }
}
