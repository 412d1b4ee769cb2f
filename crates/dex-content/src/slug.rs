//! Heading text to anchor id conversion.

use std::sync::LazyLock;

use regex::Regex;

/// Anything that is not a letter, digit, whitespace or hyphen.
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s-]").expect("invalid slug filter regex"));

/// Runs of whitespace and hyphens.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("invalid slug separator regex"));

/// Convert heading text to a URL-safe, stable identifier.
///
/// Lower-cases the text, keeps only Unicode letters (`\p{L}`), digits
/// (`\p{N}`), whitespace and hyphens, turns whitespace and hyphen runs into
/// single hyphens and trims hyphens from both ends. Combining marks are
/// stripped. Applying it twice gives the same result as applying it once.
///
/// Returns an empty string when the text has no letters or digits.
///
/// # Examples
///
/// ```
/// use dex_content::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("What's new?"), "whats-new");
/// assert_eq!(slugify("Über  Größe"), "über-größe");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    // Lower-case first: some mappings expand into combining marks.
    let lowered = text.to_lowercase();
    let kept = DISALLOWED_RE.replace_all(&lowered, "");
    SEPARATOR_RE
        .replace_all(&kept, "-")
        .trim_matches('-')
        .to_owned()
}
