//! Article text cleaning, identical to the cleaning applied to the training corpus.
//!
//! Canonical variant: everything outside `a-z` and whitespace is dropped in a
//! single pass, so digits glued to letters (`covid19`) collapse to the letters.
use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+").expect("compile url pattern"));

static NON_LETTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]+").expect("compile non-letter pattern"));

/// Lowercase, strip URLs, keep only `a-z` and whitespace, trim.
///
/// The result is a fixed point: `normalize(&normalize(s)) == normalize(s)`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_PATTERN.replace_all(&lowered, "");
    let letters_only = NON_LETTER_PATTERN.replace_all(&without_urls, "");
    // Dropping punctuation can glue a fresh `http...` token together ("ht-tps").
    let cleaned = URL_PATTERN.replace_all(&letters_only, "");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Senate LEADERS  "), "senate leaders");
    }

    #[test]
    fn strips_urls_with_their_path() {
        let cleaned = normalize("See http://example.com/x?a=1 for details");
        assert_eq!(cleaned, "see  for details");
        assert!(!cleaned.contains("http"));
    }

    #[test]
    fn strips_https_urls() {
        assert_eq!(normalize("Source: https://t.co/AbC"), "source");
    }

    #[test]
    fn strips_digits_and_punctuation() {
        assert_eq!(normalize("On Jan. 6, 2021: \"chaos\"!"), "on jan   chaos");
    }

    #[test]
    fn digits_adjacent_to_letters_collapse() {
        assert_eq!(normalize("covid19 h1n1"), "covid hn");
    }

    #[test]
    fn strips_non_ascii_letters_and_symbols() {
        assert_eq!(normalize("Washington — café 📰"), "washington  caf");
    }

    #[test]
    fn url_assembled_by_punctuation_removal_is_dropped() {
        let cleaned = normalize("read ht-tps.news now");
        assert_eq!(cleaned, "read  now");
        assert_eq!(normalize(&cleaned), cleaned);
    }

    #[test]
    fn bare_http_word_is_kept() {
        assert_eq!(normalize("the http protocol"), "the http protocol");
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 !!! ..."), "");
    }

    #[test]
    fn url_is_removed_from_article() {
        let article = "See http://example.com/x for details, this is a long enough article \
                       padded with filler text to exceed one hundred characters total length here.";
        let cleaned = normalize(article);
        assert!(!cleaned.contains("http"));
        assert!(cleaned.starts_with("see  for details this is"));
    }

    mod props {
        use super::super::normalize;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_is_idempotent(s in any::<String>()) {
                let once = normalize(&s);
                prop_assert_eq!(normalize(&once), once);
            }

            #[test]
            fn normalize_is_idempotent_on_url_heavy_text(
                s in "([hH][tT]{1,2}[pP][sS]?[:/.\\-]{0,3}[a-z0-9]{0,4}[ \t\n]?){0,8}"
            ) {
                let once = normalize(&s);
                prop_assert_eq!(normalize(&once), once);
            }

            #[test]
            fn normalize_keeps_only_letters_and_whitespace(s in any::<String>()) {
                let cleaned = normalize(&s);
                prop_assert!(cleaned.chars().all(|c| c.is_ascii_lowercase() || c.is_whitespace()));
            }

            #[test]
            fn normalize_output_is_trimmed(s in any::<String>()) {
                let cleaned = normalize(&s);
                prop_assert_eq!(cleaned.trim(), cleaned.as_str());
            }
        }
    }
}
