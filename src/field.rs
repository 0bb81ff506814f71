//! Named fields for dynamic access to a [`Url`](crate::Url).

use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

/// A field of a [`Url`](crate::Url) addressable by name.
///
/// Used with [`Url::get`](crate::Url::get) and [`Url::set`](crate::Url::set)
/// when the field is only known at runtime.
///
/// # Examples
///
/// ```
/// use url_parts::Field;
///
/// let field: Field = "registerableDomain".parse().unwrap();
/// assert_eq!(field, Field::RegistrableDomain);
/// assert!(field.is_read_only());
/// assert_eq!("port".parse::<Field>().unwrap(), Field::Port);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `scheme`
    Scheme,
    /// `user`
    User,
    /// `pass`
    Pass,
    /// `host`
    Host,
    /// `port`
    Port,
    /// `path`
    Path,
    /// `query`
    Query,
    /// `fragment`
    Fragment,
    /// `publicSuffix` (read-only)
    PublicSuffix,
    /// `registrableDomain`, also spelled `registerableDomain` (read-only)
    RegistrableDomain,
    /// `subdomain` (read-only)
    Subdomain,
    /// `canonical` (read-only)
    Canonical,
    /// `resource` (read-only)
    Resource,
}

impl Field {
    /// Every field, in rendering order followed by the derived fields.
    pub const ALL: [Self; 13] = [
        Self::Scheme,
        Self::User,
        Self::Pass,
        Self::Host,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
        Self::PublicSuffix,
        Self::RegistrableDomain,
        Self::Subdomain,
        Self::Canonical,
        Self::Resource,
    ];

    /// Returns the field's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::User => "user",
            Self::Pass => "pass",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
            Self::PublicSuffix => "publicSuffix",
            Self::RegistrableDomain => "registrableDomain",
            Self::Subdomain => "subdomain",
            Self::Canonical => "canonical",
            Self::Resource => "resource",
        }
    }

    /// Returns true for fields derived from the host, path and query.
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(
            self,
            Self::PublicSuffix
                | Self::RegistrableDomain
                | Self::Subdomain
                | Self::Canonical
                | Self::Resource
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "scheme" => Self::Scheme,
            "user" => Self::User,
            "pass" => Self::Pass,
            "host" => Self::Host,
            "port" => Self::Port,
            "path" => Self::Path,
            "query" => Self::Query,
            "fragment" => Self::Fragment,
            "publicSuffix" | "public_suffix" => Self::PublicSuffix,
            "registrableDomain"
            | "registerableDomain"
            | "registrable_domain"
            | "registerable_domain" => Self::RegistrableDomain,
            "subdomain" => Self::Subdomain,
            "canonical" => Self::Canonical,
            "resource" => Self::Resource,
            _ => {
                return Err(FieldError::Unknown {
                    name: s.to_string(),
                });
            }
        };
        Ok(field)
    }
}
