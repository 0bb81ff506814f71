//! Finding URLs in free text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::parser::Parser;
use crate::suffix::SuffixLookup;
use crate::url::Url;

/// Candidate URLs: an `http` or `https` scheme followed by a run of
/// non-space characters.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bhttps?://[^\s<>"'`]+"#).expect("url pattern is valid")
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

/// Closing brackets, trimmed only when the candidate has no opener for them.
const BRACKETS: &[(char, char)] = &[('(', ')'), ('[', ']')];

/// Drops trailing sentence punctuation from a candidate.
///
/// `http://en.wikipedia.org/wiki/Foo_(bar)` keeps its closing parenthesis,
/// while `(see http://jwage.com/about)` loses it.
fn trim_candidate(mut candidate: &str) -> &str {
    loop {
        let Some(last) = candidate.chars().next_back() else {
            return candidate;
        };
        let trim = TRAILING_PUNCTUATION.contains(&last)
            || BRACKETS.iter().any(|&(open, close)| {
                last == close && candidate.matches(open).count() < candidate.matches(close).count()
            });
        if !trim {
            return candidate;
        }
        candidate = &candidate[..candidate.len() - last.len_utf8()];
    }
}

impl Url {
    /// Returns every `http`/`https` URL in `text`, in order of appearance.
    ///
    /// Matches that fail to parse or have no host are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_parts::Url;
    ///
    /// let urls = Url::extract("see https://google.com, htp://bad and http://jwage.com.");
    /// let urls: Vec<String> = urls.iter().map(ToString::to_string).collect();
    /// assert_eq!(urls, ["https://google.com/", "http://jwage.com/"]);
    /// ```
    #[must_use]
    pub fn extract(text: &str) -> Vec<Self> {
        Self::extract_with(text, &Parser::new())
    }

    /// Like [`extract`](Self::extract), canonicalizing with `parser`.
    #[must_use]
    pub fn extract_with<L: SuffixLookup>(text: &str, parser: &Parser<L>) -> Vec<Self> {
        URL_PATTERN
            .find_iter(text)
            .filter_map(|candidate| {
                let candidate = trim_candidate(candidate.as_str());
                match Self::parse_with(candidate, parser) {
                    Ok(url) if url.host().is_some() => Some(url),
                    Ok(_) => {
                        debug!(candidate, "skipping url without host");
                        None
                    }
                    Err(err) => {
                        debug!(candidate, error = %err.kind, "skipping malformed url");
                        None
                    }
                }
            })
            .collect()
    }
}
