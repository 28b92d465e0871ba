//! Filtering ranked terms against resume text.

/// Keeps terms, in order, that do not occur as a literal substring of the resume.
///
/// Matching is case-insensitive and unstemmed. Input order is preserved and at most `limit`
/// terms are returned.
pub fn filter_missing<'a>(
    terms: impl IntoIterator<Item = &'a str>,
    resume_text: &str,
    limit: usize,
) -> Vec<String> {
    let resume = resume_text.to_lowercase();
    terms
        .into_iter()
        .filter(|term| !resume.contains(&term.to_lowercase()))
        .take(limit)
        .map(str::to_string)
        .collect()
}
