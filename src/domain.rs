//! Host canonicalization against a public suffix table.

use std::net::Ipv4Addr;

use tracing::trace;

use crate::suffix::SuffixLookup;

/// The public-suffix view of a host.
///
/// # Examples
///
/// ```
/// use url_parts::{Domain, PublicSuffixList};
///
/// let domain = Domain::resolve("sub.domain.jwage.co.uk", &PublicSuffixList).unwrap();
/// assert_eq!(domain.public_suffix(), "co.uk");
/// assert_eq!(domain.registrable_domain(), Some("jwage.co.uk"));
/// assert_eq!(domain.subdomain(), Some("sub.domain"));
/// assert_eq!(domain.reversed().as_deref(), Some("uk.co.jwage.domain.sub"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    public_suffix: String,
    registrable_domain: Option<String>,
    subdomain: Option<String>,
}

impl Domain {
    /// Splits `host` into suffix, registrable domain and subdomain.
    ///
    /// Returns `None` for IP literals and for hosts no suffix rule matches.
    /// A host that is itself a public suffix yields a `Domain` with no
    /// registrable domain.
    #[must_use]
    pub fn resolve<L: SuffixLookup + ?Sized>(host: &str, lookup: &L) -> Option<Self> {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        if host.is_empty() || is_ip_literal(&host) {
            return None;
        }
        let Some(suffix) = lookup.lookup(&host).filter(|s| !s.is_empty()) else {
            trace!(host = %host, "no public suffix rule matched");
            return None;
        };
        let prefix = host.strip_suffix(suffix)?;

        let (registrable_domain, subdomain) = match prefix.strip_suffix('.') {
            Some(prefix) if !prefix.is_empty() => {
                let (subdomain, label) = prefix.rsplit_once('.').unwrap_or(("", prefix));
                if label.is_empty() {
                    (None, None)
                } else {
                    (
                        Some(format!("{label}.{suffix}")),
                        Some(subdomain.to_string()),
                    )
                }
            }
            _ => (None, None),
        };

        Some(Self {
            public_suffix: suffix.to_string(),
            registrable_domain,
            subdomain,
        })
    }

    pub(crate) fn from_parts(
        public_suffix: String,
        registrable_domain: Option<String>,
        subdomain: Option<String>,
    ) -> Self {
        Self {
            public_suffix,
            registrable_domain,
            subdomain,
        }
    }

    /// Returns the public suffix, e.g. `co.uk`.
    #[must_use]
    pub fn public_suffix(&self) -> &str {
        &self.public_suffix
    }

    /// Returns the suffix plus the label in front of it, e.g. `jwage.co.uk`.
    #[must_use]
    pub fn registrable_domain(&self) -> Option<&str> {
        self.registrable_domain.as_deref()
    }

    /// Returns the labels left of the registrable domain.
    ///
    /// Empty when the host is the registrable domain itself.
    #[must_use]
    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }

    /// Returns the host with its labels in reverse order, suffix first.
    #[must_use]
    pub fn reversed(&self) -> Option<String> {
        let registrable = self.registrable_domain.as_deref()?;
        let host = match self.subdomain.as_deref() {
            Some(sub) if !sub.is_empty() => format!("{sub}.{registrable}"),
            _ => registrable.to_string(),
        };
        Some(host.rsplit('.').collect::<Vec<_>>().join("."))
    }

    /// Returns the grouping key for a resource on this host.
    ///
    /// URLs on the same site sort next to each other by this key.
    #[must_use]
    pub fn canonical(&self, resource: &str) -> Option<String> {
        self.reversed().map(|host| format!("{host}{resource}"))
    }
}

fn is_ip_literal(host: &str) -> bool {
    host.starts_with('[') || host.parse::<Ipv4Addr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix::SuffixRules;

    fn rules() -> SuffixRules {
        ["com", "uk", "co.uk"].into_iter().collect()
    }

    #[test]
    fn registrable_without_subdomain() {
        let domain = Domain::resolve("jwage.com", &rules()).unwrap();
        assert_eq!(domain.public_suffix(), "com");
        assert_eq!(domain.registrable_domain(), Some("jwage.com"));
        assert_eq!(domain.subdomain(), Some(""));
        assert_eq!(domain.reversed().as_deref(), Some("com.jwage"));
    }

    #[test]
    fn nested_subdomain() {
        let domain = Domain::resolve("sub.domain.jwage.com", &rules()).unwrap();
        assert_eq!(domain.registrable_domain(), Some("jwage.com"));
        assert_eq!(domain.subdomain(), Some("sub.domain"));
        assert_eq!(
            domain.canonical("/index.php?param1=value1").as_deref(),
            Some("com.jwage.domain.sub/index.php?param1=value1")
        );
    }

    #[test]
    fn multi_label_suffix() {
        let domain = Domain::resolve("sub.domain.jwage.co.uk", &rules()).unwrap();
        assert_eq!(domain.public_suffix(), "co.uk");
        assert_eq!(domain.registrable_domain(), Some("jwage.co.uk"));
        assert_eq!(domain.reversed().as_deref(), Some("uk.co.jwage.domain.sub"));
    }

    #[test]
    fn host_is_suffix() {
        let domain = Domain::resolve("co.uk", &rules()).unwrap();
        assert_eq!(domain.public_suffix(), "co.uk");
        assert_eq!(domain.registrable_domain(), None);
        assert_eq!(domain.subdomain(), None);
        assert_eq!(domain.canonical("/"), None);
    }

    #[test]
    fn unknown_suffix_is_absent() {
        assert_eq!(Domain::resolve("jwage.org", &rules()), None);
        assert_eq!(Domain::resolve("localhost", &rules()), None);
    }

    #[test]
    fn ip_hosts_are_absent() {
        assert_eq!(Domain::resolve("127.0.0.1", &rules()), None);
        assert_eq!(Domain::resolve("[::1]", &rules()), None);
    }

    #[test]
    fn case_and_trailing_dot_are_normalized() {
        let domain = Domain::resolve("WWW.JWage.COM.", &rules()).unwrap();
        assert_eq!(domain.registrable_domain(), Some("jwage.com"));
        assert_eq!(domain.subdomain(), Some("www"));
    }
}
