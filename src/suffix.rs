//! Public suffix lookup.
//!
//! The parser asks a [`SuffixLookup`] for the public suffix of every host it
//! sees. [`PublicSuffixList`] answers from the list compiled into the `psl`
//! crate; [`SuffixRules`] answers from rules loaded at runtime.

use std::collections::HashSet;

use psl::{List, Psl};

/// Finds the public suffix of a host name.
///
/// Implementations are read-only tables and may be shared between threads.
pub trait SuffixLookup {
    /// Returns the public suffix of `host` as a sub-slice of it, or `None`
    /// if no rule matches.
    ///
    /// `host` is lowercase and has no trailing dot.
    fn lookup<'h>(&self, host: &'h str) -> Option<&'h str>;
}

impl<T: SuffixLookup + ?Sized> SuffixLookup for &T {
    fn lookup<'h>(&self, host: &'h str) -> Option<&'h str> {
        (**self).lookup(host)
    }
}

/// The Public Suffix List snapshot bundled with the `psl` crate.
///
/// Hosts whose last label is not on the list (for example `localhost`) get
/// no suffix.
///
/// # Examples
///
/// ```
/// use url_parts::{PublicSuffixList, SuffixLookup};
///
/// assert_eq!(PublicSuffixList.lookup("sub.domain.jwage.co.uk"), Some("co.uk"));
/// assert_eq!(PublicSuffixList.lookup("localhost"), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublicSuffixList;

impl SuffixLookup for PublicSuffixList {
    fn lookup<'h>(&self, host: &'h str) -> Option<&'h str> {
        let suffix = List.suffix(host.as_bytes())?;
        if !suffix.is_known() {
            return None;
        }
        let start = host.len().checked_sub(suffix.as_bytes().len())?;
        host.get(start..)
    }
}

/// An in-memory suffix table.
///
/// Understands the rule syntax of the Public Suffix List: plain rules
/// (`co.uk`), wildcards (`*.ck`) and exceptions (`!www.ck`). The longest
/// matching rule wins and exceptions beat wildcards.
///
/// # Examples
///
/// ```
/// use url_parts::{SuffixLookup, SuffixRules};
///
/// let rules = SuffixRules::parse("// comment\ncom\nco.uk\n*.ck\n!www.ck\n");
/// assert_eq!(rules.lookup("jwage.co.uk"), Some("co.uk"));
/// assert_eq!(rules.lookup("a.b.ck"), Some("b.ck"));
/// assert_eq!(rules.lookup("www.ck"), Some("ck"));
/// assert_eq!(rules.lookup("example.org"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixRules {
    plain: HashSet<String>,
    wildcard: HashSet<String>,
    exception: HashSet<String>,
}

impl SuffixRules {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads rules from Public Suffix List text.
    ///
    /// Blank lines and `//` comments are skipped; only the first word of a
    /// line is read.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let mut rules = Self::new();
        for line in list.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            if let Some(rule) = line.split_whitespace().next() {
                rules.insert(rule);
            }
        }
        rules
    }

    /// Adds one rule.
    pub fn insert(&mut self, rule: &str) -> &mut Self {
        let rule = rule.trim().trim_end_matches('.').to_ascii_lowercase();
        if let Some(rest) = rule.strip_prefix('!') {
            self.exception.insert(rest.to_string());
        } else if let Some(rest) = rule.strip_prefix("*.") {
            self.wildcard.insert(rest.to_string());
        } else if !rule.is_empty() {
            self.plain.insert(rule);
        }
        self
    }

    /// Returns the number of rules loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plain.len() + self.wildcard.len() + self.exception.len()
    }

    /// Returns true if no rules are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SuffixLookup for SuffixRules {
    fn lookup<'h>(&self, host: &'h str) -> Option<&'h str> {
        // Candidates run from the whole host down to its last label.
        let candidates = std::iter::once(host).chain(
            host.match_indices('.')
                .map(|(i, _)| &host[i + 1..]),
        );
        for candidate in candidates {
            if candidate.is_empty() {
                continue;
            }
            if self.exception.contains(candidate) {
                return candidate.split_once('.').map(|(_, parent)| parent);
            }
            if self.plain.contains(candidate) {
                return Some(candidate);
            }
            if candidate
                .split_once('.')
                .is_some_and(|(_, parent)| self.wildcard.contains(parent))
            {
                return Some(candidate);
            }
        }
        None
    }
}

impl<'a> FromIterator<&'a str> for SuffixRules {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut rules = Self::new();
        for rule in iter {
            rules.insert(rule);
        }
        rules
    }
}
