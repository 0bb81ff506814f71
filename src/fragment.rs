//! Fragment part of a URL.

use std::fmt;

use crate::part::{Derive, Lazy};
use crate::path::Path;
use crate::query::Query;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Parts {
    path: Path,
    query: Query,
}

impl Derive for Parts {
    fn derive(seed: &str) -> Self {
        let seed = seed.strip_prefix('#').unwrap_or(seed);
        match seed.split_once('?') {
            Some((path, query)) => Self {
                path: Path::new(path),
                query: Query::new(query),
            },
            None => Self {
                path: Path::new(seed),
                query: Query::default(),
            },
        }
    }
}

/// The fragment of a URL.
///
/// Fragments are often used by client-side routers as a path with its own
/// query, so a fragment is split at its first `?` into a [`Path`] and a
/// [`Query`].
///
/// # Examples
///
/// ```
/// use url_parts::Fragment;
///
/// let fragment = Fragment::new("test?param=value");
/// assert_eq!(fragment.path().to_string(), "test");
/// assert_eq!(fragment.query().to_string(), "param=value");
/// assert_eq!(fragment.to_string(), "test?param=value");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    parts: Lazy<Parts>,
}

impl Fragment {
    /// Creates a fragment from its raw string form, with or without a leading `#`.
    #[must_use]
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            parts: Lazy::new(fragment),
        }
    }

    /// Creates a fragment from an existing path and query.
    #[must_use]
    pub fn from_parts(path: impl Into<Path>, query: impl Into<Query>) -> Self {
        Self {
            parts: Lazy::from_entries(Parts {
                path: path.into(),
                query: query.into(),
            }),
        }
    }

    /// Returns true once the raw fragment has been split.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.parts.is_initialized()
    }

    /// Returns the rendered fragment, without a leading `#`.
    #[must_use]
    pub fn fragment(&self) -> String {
        self.to_string()
    }

    /// Replaces the whole fragment with a new raw string.
    pub fn set_fragment(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.parts = Lazy::new(fragment);
        self
    }

    /// Returns the path portion.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.parts.entries().path
    }

    /// Returns the path portion for editing.
    pub fn path_mut(&mut self) -> &mut Path {
        &mut self.parts.entries_mut().path
    }

    /// Replaces the path portion.
    pub fn set_path(&mut self, path: impl Into<Path>) -> &mut Self {
        self.parts.entries_mut().path = path.into();
        self
    }

    /// Returns the query portion.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.parts.entries().query
    }

    /// Returns the query portion for editing.
    pub fn query_mut(&mut self) -> &mut Query {
        &mut self.parts.entries_mut().query
    }

    /// Replaces the query portion.
    pub fn set_query(&mut self, query: impl Into<Query>) -> &mut Self {
        self.parts.entries_mut().query = query.into();
        self
    }

    /// Returns true if the fragment renders as an empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_string().is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self.parts.entries();
        write!(f, "{}", parts.path)?;
        let query = parts.query.to_string();
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

impl From<&str> for Fragment {
    fn from(fragment: &str) -> Self {
        Self::new(fragment)
    }
}

impl From<String> for Fragment {
    fn from(fragment: String) -> Self {
        Self::new(fragment)
    }
}
