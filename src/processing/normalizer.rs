//! Text normalization applied before language identification.
//!
//! Strips tokens that carry no linguistic signal (emails, URLs, symbols,
//! digit-mixed tokens, repeated-character runs) so the engine sees only
//! material that can contribute to an n-gram profile. The cleanup is an
//! ordered chain of independent rewrite rules; order matters because
//! later rules assume earlier ones already collapsed certain noise.

use regex::Regex;

/// A single named text-rewrite step.
///
/// Pattern rules replace every regex match with one space. Scan rules
/// cover run-collapsing, which needs backreference-style matching the
/// `regex` crate does not provide.
struct RewriteRule {
    name: &'static str,
    kind: RuleKind,
}

enum RuleKind {
    Pattern(Regex),
    Scan(fn(&str) -> String),
}

impl RewriteRule {
    fn pattern(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            kind: RuleKind::Pattern(Regex::new(pattern).unwrap()),
        }
    }

    fn scan(name: &'static str, apply: fn(&str) -> String) -> Self {
        Self {
            name,
            kind: RuleKind::Scan(apply),
        }
    }

    fn apply(&self, text: &str) -> String {
        match &self.kind {
            RuleKind::Pattern(regex) => regex.replace_all(text, " ").into_owned(),
            RuleKind::Scan(apply) => apply(text),
        }
    }
}

/// Punctuation whose immediate repetition is treated as noise.
const REPEATED_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', '\'', '"', '%', '[', ']', '{', '}', '(', ')', ';', ':', '|', '\\', '+', '=',
];

/// Text normalizer with the default rewrite rule chain.
pub struct TextNormalizer {
    rules: Vec<RewriteRule>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Create a normalizer with the default ordered rule chain.
    pub fn new() -> Self {
        let rules = vec![
            // Emails first; the URL rule would otherwise eat partial addresses.
            RewriteRule::pattern("emails", r"\S+@\S+\.\S+"),
            // URLs end at whitespace, closing punctuation, a period followed
            // by whitespace, or end of string.
            RewriteRule::pattern(
                "urls",
                r#"(?i)(https?|ftp)://\S*?\.\S*?([\s)\[\]{},;"':<]|\.\s|$)"#,
            ),
            // Anything that is neither ASCII, a Unicode word character,
            // nor a control character: emoji, symbols, exotic
            // punctuation. Letters in non-Latin scripts are word
            // characters and survive.
            RewriteRule::pattern("non_word_glyphs", r"[^\w[:ascii:]\p{Cc}]"),
            // Pure numbers and letter tokens mixed with digits.
            RewriteRule::pattern("digit_tokens", r"\b[a-zA-Z]*?[0-9]+[a-zA-Z]*?\b"),
            RewriteRule::scan("repeated_characters", collapse_character_runs),
            RewriteRule::scan("repeated_punctuation", collapse_punctuation_runs),
        ];

        Self { rules }
    }

    /// Normalize a text for detection.
    ///
    /// Total function: never fails, and empty input yields empty output.
    /// Idempotent on its own output.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = text.to_string();

        for rule in &self.rules {
            current = rule.apply(&current);
            tracing::trace!(rule = rule.name, len = current.len(), "applied rewrite rule");
        }

        current.trim().to_string()
    }
}

/// Normalize text using a shared default rule chain.
pub fn normalize(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref NORMALIZER: TextNormalizer = TextNormalizer::new();
    }
    NORMALIZER.normalize(text)
}

/// Collapse runs of 4+ identical non-alphanumeric characters to one space.
fn collapse_character_runs(text: &str) -> String {
    collapse_runs(text, 4, |c| !c.is_alphanumeric())
}

/// Collapse runs of 2+ identical punctuation characters to one space.
fn collapse_punctuation_runs(text: &str) -> String {
    collapse_runs(text, 2, |c| REPEATED_PUNCTUATION.contains(&c))
}

fn collapse_runs(text: &str, min_run: usize, eligible: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }

        if run >= min_run && eligible(c) {
            out.push(' ');
        } else {
            for _ in 0..run {
                out.push(c);
            }
        }
    }

    out
}
