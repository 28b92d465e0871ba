//! Static term sets used to filter and boost candidate terms.
//!
//! A [`Lexicon`] combines:
//! - English function-word stopwords
//! - job-posting boilerplate ("responsibilities", "candidate", "years")
//! - junk fragments that must never be suggested (URL pieces, legal boilerplate)
//! - a domain allowlist of skills and phrases worth surfacing even when rare
//! - short acronyms (`seo`, `aws`, `ui`) that bypass length filtering and stemming
//!
//! Lexicons are immutable once built. [`Lexicon::shared`] returns a lazily-built default
//! that can be read from any thread.

use std::{
    collections::HashSet,
    sync::{Arc, LazyLock},
};

use keygap_config::LexiconSettings;
use stop_words::LANGUAGE;

use crate::stem::stem_word;

/// Minimum length for a term that is not a short-keep acronym.
pub const MIN_TERM_LENGTH: usize = 3;

/// Process-wide default lexicon.
static SHARED: LazyLock<Arc<Lexicon>> = LazyLock::new(|| Arc::new(Lexicon::new()));

/// Immutable term sets consulted by the tokenizer filter, the stemmer and the scorer.
///
/// All entries are stored lower-cased.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// English function words.
    stopwords: HashSet<String>,
    /// Job-posting boilerplate and user-configured stopwords.
    extra_stopwords: HashSet<String>,
    /// Fragments and phrases that are never terms.
    junk: HashSet<String>,
    /// Domain terms, stored as written (hyphens as spaces) and in stemmed form.
    allow: HashSet<String>,
    /// Acronyms exempt from the minimum length and from stemming.
    short_keep: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Creates a lexicon with the built-in term sets.
    pub fn new() -> Self {
        LexiconBuilder::new().build()
    }

    /// Returns the shared default lexicon.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Starts a builder seeded with the built-in term sets.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Creates a lexicon with the built-in sets plus configured additions.
    pub fn from_settings(settings: &LexiconSettings) -> Self {
        Self::builder()
            .iso_stopwords(settings.iso_stopwords)
            .stopwords(&settings.stopwords)
            .junk(&settings.junk)
            .allow(&settings.allow)
            .short_keep(&settings.short_keep)
            .build()
    }

    /// Checks the stopword and extra-stopword sets.
    pub fn is_stopword(&self, term: &str) -> bool {
        self.stopwords.contains(term) || self.extra_stopwords.contains(term)
    }

    /// Checks the junk set.
    pub fn is_junk(&self, term: &str) -> bool {
        self.junk.contains(term)
    }

    /// True for stopwords and junk.
    pub fn is_blocked(&self, term: &str) -> bool {
        self.is_stopword(term) || self.is_junk(term)
    }

    /// Checks the allowlist, treating hyphens as spaces ("go-to-market" matches
    /// "go to market").
    pub fn is_allowlisted(&self, term: &str) -> bool {
        if term.contains('-') {
            self.allow.contains(&term.replace('-', " "))
        } else {
            self.allow.contains(term)
        }
    }

    /// Checks the short-keep acronym set.
    pub fn is_short_keep(&self, term: &str) -> bool {
        self.short_keep.contains(term)
    }

    /// Decides whether a stemmed token may become a unigram term.
    ///
    /// A token is rejected when its raw form or its stem is a stopword or junk, when it
    /// is purely numeric, when it is shorter than [`MIN_TERM_LENGTH`], or when it has no
    /// letter. Short-keep acronyms skip the last two checks. Tokens joined by `.` or `/`
    /// are also rejected when they contain a URL part (`www.acme.com`) or when every part
    /// is blocked (`and/or`).
    pub fn accepts(&self, raw: &str, stem: &str) -> bool {
        if stem.is_empty() || self.is_blocked(raw) || self.is_blocked(stem) {
            return false;
        }
        if self.is_blocked_compound(raw) {
            return false;
        }
        if stem.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let keep = self.is_short_keep(stem);
        (stem.len() >= MIN_TERM_LENGTH || keep) && (stem.chars().any(char::is_alphabetic) || keep)
    }

    /// Checks the `.`/`/`-separated parts of a compound token.
    fn is_blocked_compound(&self, raw: &str) -> bool {
        if !raw.contains(COMPOUND_SEPARATORS) {
            return false;
        }
        let parts = raw.split(COMPOUND_SEPARATORS).filter(|p| !p.is_empty());
        let mut all_blocked = true;
        for part in parts {
            if URL_PARTS.contains(&part) {
                return true;
            }
            all_blocked &= self.is_blocked(part);
        }
        all_blocked
    }

    /// Total number of stopwords (built-in, boilerplate and configured).
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len() + self.extra_stopwords.len()
    }

    /// Number of allowlist keys, including stemmed variants.
    pub fn allow_count(&self) -> usize {
        self.allow.len()
    }
}

/// Builder for a [`Lexicon`] with additions on top of the built-in sets.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    /// Whether to include the Stopwords-ISO English list.
    iso_stopwords: bool,
    /// Function-word stopwords.
    stopwords: Vec<String>,
    /// Boilerplate and configured stopwords.
    extra_stopwords: Vec<String>,
    /// Junk fragments.
    junk: Vec<String>,
    /// Allowlist entries as written.
    allow: Vec<String>,
    /// Short-keep acronyms.
    short_keep: Vec<String>,
}

impl LexiconBuilder {
    /// Creates a builder seeded with the built-in term sets.
    pub fn new() -> Self {
        Self::empty()
            .base_stopwords(STOPWORDS)
            .stopwords(EXTRA_STOPWORDS)
            .junk(JUNK_FRAGMENTS)
            .allow(DOMAIN_ALLOWLIST)
            .short_keep(SHORT_KEEP_ACRONYMS)
    }

    /// Creates a builder with no terms at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Enables the Stopwords-ISO English list.
    pub fn iso_stopwords(mut self, enabled: bool) -> Self {
        self.iso_stopwords = enabled;
        self
    }

    /// Adds function-word stopwords.
    fn base_stopwords<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        extend_lower(&mut self.stopwords, words);
        self
    }

    /// Adds stopwords.
    pub fn stopwords<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        extend_lower(&mut self.extra_stopwords, words);
        self
    }

    /// Adds junk fragments.
    pub fn junk<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        extend_lower(&mut self.junk, words);
        self
    }

    /// Adds allowlist terms.
    pub fn allow<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        extend_lower(&mut self.allow, words);
        self
    }

    /// Adds short-keep acronyms.
    pub fn short_keep<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        extend_lower(&mut self.short_keep, words);
        self
    }

    /// Builds the immutable lexicon.
    pub fn build(self) -> Lexicon {
        let mut stopwords: HashSet<String> = self.stopwords.into_iter().collect();
        if self.iso_stopwords {
            add_words(&mut stopwords, stop_words::get(LANGUAGE::English));
        }

        let short_keep: HashSet<String> = self.short_keep.into_iter().collect();

        let mut allow = HashSet::new();
        for entry in &self.allow {
            let key = entry.replace('-', " ");
            let key = key.split_whitespace().collect::<Vec<_>>().join(" ");
            let stemmed = key
                .split(' ')
                .map(|word| {
                    if short_keep.contains(word) {
                        word.to_string()
                    } else {
                        stem_word(word).into_owned()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            allow.insert(stemmed);
            allow.insert(key);
        }

        Lexicon {
            stopwords,
            extra_stopwords: self.extra_stopwords.into_iter().collect(),
            junk: self.junk.into_iter().collect(),
            allow,
            short_keep,
        }
    }
}

/// Appends trimmed, lower-cased, non-empty words.
fn extend_lower<S: AsRef<str>>(target: &mut Vec<String>, words: impl IntoIterator<Item = S>) {
    for word in words {
        let word = word.as_ref().trim().to_lowercase();
        if !word.is_empty() {
            target.push(word);
        }
    }
}

/// Adds a static word list to a set, lower-cased.
fn add_words(set: &mut HashSet<String>, words: &[&str]) {
    for word in words {
        set.insert(word.to_lowercase());
    }
}

/// English function words.
///
/// Contractions appear split because the tokenizer treats apostrophes as separators.
static STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "cannot", "could", "couldn", "did", "didn", "do", "does",
    "doesn", "doing", "don", "down", "during", "each", "either", "else", "ever", "few", "for",
    "from", "further", "had", "hasn", "has", "have", "haven", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is",
    "isn", "it", "its", "itself", "just", "let", "may", "me", "might", "more", "most", "much",
    "must", "my", "myself", "neither", "no", "nor", "not", "now", "of", "off", "often", "on",
    "once", "only", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
    "over", "own", "per", "rather", "same", "shall", "she", "should", "shouldn", "since", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "though", "through", "thus", "to", "too",
    "under", "until", "up", "upon", "us", "very", "via", "was", "wasn", "we", "were", "weren",
    "what", "whatever", "when", "where", "whether", "which", "while", "who", "whom", "whose",
    "why", "will", "with", "within", "without", "won", "would", "wouldn", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Job-posting boilerplate that carries no skill signal.
static EXTRA_STOPWORDS: &[&str] = &[
    "ability", "able", "across", "applicant", "applicants", "apply", "based", "best", "candidate",
    "candidates", "company", "day", "days", "description", "duties", "duty", "eager", "ensure",
    "environment", "every", "excellent", "exceptional", "experience", "experienced", "familiar",
    "familiarity", "get", "good", "great", "help", "helps", "highly", "ideal", "ideally",
    "include", "includes", "including", "individual", "join", "joining", "key", "knowledge",
    "least", "like", "looking", "make", "making", "minimum", "need", "needs", "new", "one",
    "opportunity", "passion", "passionate", "please", "plus", "position", "preferred",
    "proficiency", "proficient", "proven", "qualification", "qualifications", "related",
    "required", "requirement", "requirements", "responsibilities", "responsibility",
    "responsible", "role", "seeking", "skill", "skills", "solid", "strong", "take", "team",
    "teams", "three", "two", "understanding", "use", "using", "various", "want", "well",
    "work", "working", "year", "years",
];

/// Characters that join the parts of a compound token.
const COMPOUND_SEPARATORS: &[char] = &['.', '/'];

/// Parts that mark a token as a web address.
const URL_PARTS: &[&str] = &["www", "http", "https", "com", "org", "net", "html"];

/// Fragments that are never useful terms, as unigrams or joined bigrams.
static JUNK_FRAGMENTS: &[&str] = &[
    "401k", "benefit package", "click", "com", "e.g", "eeo", "eg", "eoe", "equal", "etc",
    "full time", "full-time", "http", "https", "i.e", "ie", "inc", "llc", "ltd", "n/a",
    "paid time", "part time", "part-time", "pto", "tbd", "u.s", "www",
];

/// Domain skills and phrases that are surfaced even when they appear once.
static DOMAIN_ALLOWLIST: &[&str] = &[
    // Marketing
    "social media", "email marketing", "content marketing", "content strategy",
    "digital marketing", "product marketing", "growth marketing", "performance marketing",
    "influencer marketing", "paid social", "paid search", "marketing automation",
    "lead generation", "demand generation", "brand strategy", "brand awareness",
    "copywriting", "campaign management", "market research", "go-to-market",
    "conversion rate optimization", "google analytics", "google ads", "hubspot", "marketo",
    "mailchimp", "a/b testing", "analytics", "marketing",
    // Engineering and data
    "python", "java", "javascript", "typescript", "react", "node.js", "sql", "postgresql",
    "docker", "kubernetes", "terraform", "ci/cd", "devops", "microservices", "rest api",
    "machine learning", "data analysis", "data visualization", "data pipeline", "tableau",
    "power bi", "excel", "unit testing", "test automation", "cybersecurity", "linux",
    "cloud infrastructure", "distributed systems",
    // Product, design and operations
    "agile", "scrum", "kanban", "jira", "figma", "user research", "wireframing",
    "prototyping", "roadmap", "project management", "product management",
    "stakeholder management", "cross-functional", "customer success", "customer service",
    "account management", "business development", "budgeting", "forecasting",
    "financial modeling", "supply chain", "logistics", "recruiting", "onboarding",
    "compliance", "risk management", "salesforce", "quickbooks",
];

/// Acronyms kept regardless of length and never stemmed.
static SHORT_KEEP_ACRONYMS: &[&str] = &[
    "3d", "ai", "api", "ar", "aws", "b2b", "b2c", "bi", "cms", "cpa", "crm", "css", "cx", "erp",
    "etl", "ga4", "gaap", "gcp", "git", "hr", "ios", "kpi", "llm", "ml", "nlp", "okr", "php",
    "ppc", "pr", "qa", "roi", "saas", "sap", "sem", "seo", "sms", "sql", "ui", "ux", "vr",
];
