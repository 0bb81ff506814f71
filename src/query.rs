//! Query string part of a URL.

use std::borrow::Cow;
use std::fmt;

use percent_encoding::percent_decode_str;

use crate::part::{Derive, Lazy, PartContainer, is_purgeable};

/// One parameter.
///
/// `escaped` marks a pair whose percent escapes are not UTF-8. Its name and
/// value keep the text as it appeared and are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Param {
    name: String,
    value: String,
    escaped: bool,
}

/// Parameters in the order they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Params(Vec<Param>);

impl Params {
    fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|param| param.name == name)
    }

    /// Overwrites an existing parameter in place, or appends a new one.
    fn insert(&mut self, param: Param) {
        match self.position(&param.name) {
            Some(i) => self.0[i] = param,
            None => self.0.push(param),
        }
    }

    /// Stores a parameter read from a query string. An empty value removes
    /// any earlier parameter of the same name.
    fn absorb(&mut self, name: &str, value: &str, escaped: bool) {
        let name = normalize_name(name);
        if name.is_empty() {
            return;
        }
        if is_purgeable(Some(value)) {
            if let Some(i) = self.position(&name) {
                self.0.remove(i);
            }
            return;
        }
        self.insert(Param {
            name: name.into_owned(),
            value: value.to_string(),
            escaped,
        });
    }
}

impl Derive for Params {
    fn derive(seed: &str) -> Self {
        let seed = seed.strip_prefix('?').unwrap_or(seed);
        let mut params = Self::default();
        for pair in seed.split('&').filter(|pair| !pair.is_empty()) {
            if percent_decode_str(pair).decode_utf8().is_ok() {
                for (name, value) in form_urlencoded::parse(pair.as_bytes()) {
                    params.absorb(&name, &value, false);
                }
            } else {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                params.absorb(name, value, true);
            }
        }
        params
    }
}

/// Parameter names never contain spaces; they are stored with underscores.
fn normalize_name(name: &str) -> Cow<'_, str> {
    if name.contains(' ') {
        Cow::Owned(name.replace(' ', "_"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Query parameters of a URL.
///
/// Parameters keep their insertion order. Names and values are stored
/// decoded and form-encoded again when rendered (spaces become `+`).
/// Spaces in parameter names are rewritten to underscores, so
/// `param name=value` renders as `param_name=value`. A parameter without a
/// value (`flag` or `flag=`) is dropped, and a pair whose escapes are not
/// UTF-8 is rendered exactly as it was written.
///
/// # Examples
///
/// ```
/// use url_parts::{PartContainer, Query};
///
/// let mut query = Query::new("param1=value1&param2=value2");
/// query.set("param3", "value3").set("param1", "");
/// assert_eq!(query.to_string(), "param2=value2&param3=value3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Lazy<Params>,
}

impl Query {
    /// Creates a query from its raw string form, with or without a leading `?`.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            params: Lazy::new(query),
        }
    }

    /// Creates a query from decoded name/value pairs.
    ///
    /// Pairs with an empty value are dropped.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self {
            params: Lazy::from_entries(Params::default()),
        };
        query.set_params(pairs);
        query
    }

    /// Returns the rendered query string, without a leading `?`.
    #[must_use]
    pub fn query(&self) -> String {
        self.to_string()
    }

    /// Replaces the whole query with a new raw string.
    pub fn set_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.params = Lazy::new(query);
        self
    }

    /// Returns the decoded parameters in order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .entries()
            .0
            .iter()
            .map(|param| (param.name.as_str(), param.value.as_str()))
    }

    /// Replaces every parameter, dropping pairs with an empty value.
    pub fn set_params<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params = self.params.entries_mut();
        params.0.clear();
        for (name, value) in pairs {
            let name = normalize_name(name.as_ref());
            let value = value.as_ref();
            if name.is_empty() || is_purgeable(Some(value)) {
                continue;
            }
            params.insert(Param {
                name: name.into_owned(),
                value: value.to_string(),
                escaped: false,
            });
        }
        self
    }
}

impl PartContainer for Query {
    type Key = str;
    type Item = (String, String);

    fn is_initialized(&self) -> bool {
        self.params.is_initialized()
    }

    fn get(&self, key: &str) -> Option<&str> {
        let params = self.params.entries();
        params
            .position(&normalize_name(key))
            .map(|i| params.0[i].value.as_str())
    }

    fn set(&mut self, key: &str, value: &str) -> &mut Self {
        if is_purgeable(Some(value)) {
            self.remove(key);
            return self;
        }
        let name = normalize_name(key);
        if !name.is_empty() {
            self.params.entries_mut().insert(Param {
                name: name.into_owned(),
                value: value.to_string(),
                escaped: false,
            });
        }
        self
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        let params = self.params.entries_mut();
        let i = params.position(&normalize_name(key))?;
        Some(params.0.remove(i).value)
    }

    fn len(&self) -> usize {
        self.params.entries().0.len()
    }

    fn all(&self) -> Vec<(String, String)> {
        self.params()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn set_all<I: IntoIterator<Item = (String, String)>>(&mut self, items: I) -> &mut Self {
        self.set_params(items)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.params.entries().0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            if param.escaped {
                write!(f, "{}={}", param.name, param.value)?;
            } else {
                for chunk in form_urlencoded::byte_serialize(param.name.as_bytes()) {
                    f.write_str(chunk)?;
                }
                f.write_str("=")?;
                for chunk in form_urlencoded::byte_serialize(param.value.as_bytes()) {
                    f.write_str(chunk)?;
                }
            }
        }
        Ok(())
    }
}

impl From<&str> for Query {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl From<String> for Query {
    fn from(query: String) -> Self {
        Self::new(query)
    }
}
