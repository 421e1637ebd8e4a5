use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Convert a string to a URL-friendly slug.
///
/// Lowercases, strips everything that is not a word character, whitespace
/// or hyphen, collapses separator runs into a single hyphen and trims
/// leading/trailing hyphens. Applying it twice gives the same result.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let hyphenated = SEPARATOR_RUN.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}
