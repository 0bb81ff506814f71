//! Shared machinery for the lazily parsed URL parts.
//!
//! [`Path`](crate::Path), [`Query`](crate::Query) and
//! [`Fragment`](crate::Fragment) are all created from a raw seed string and
//! only split it into entries on first access. The two-state lifecycle lives
//! in [`Lazy`]; keyed access is described by [`PartContainer`].

use std::fmt;
use std::sync::OnceLock;

/// Keyed access to the entries of a URL part.
///
/// Every method initializes the part on first use. Initialization happens
/// once per instance; later calls read and write the entries directly.
///
/// Assigning a purgeable value (see [`is_purgeable`]) removes the key instead
/// of storing it. Lookups and removals of missing keys are no-ops.
pub trait PartContainer: fmt::Display {
    /// The key type used to address entries.
    type Key: ?Sized;

    /// One entry as returned by [`all`](Self::all).
    type Item;

    /// Returns true once the seed string has been split into entries.
    fn is_initialized(&self) -> bool;

    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &Self::Key) -> Option<&str>;

    /// Returns true if a value is stored under `key`.
    fn has(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Stores `value` under `key`, or removes `key` if `value` is purgeable.
    fn set(&mut self, key: &Self::Key, value: &str) -> &mut Self;

    /// Removes `key`, returning its previous value.
    fn remove(&mut self, key: &Self::Key) -> Option<String>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns true if the part has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of every entry in order.
    fn all(&self) -> Vec<Self::Item>;

    /// Replaces every entry. Purgeable values are dropped.
    fn set_all<I: IntoIterator<Item = Self::Item>>(&mut self, items: I) -> &mut Self;
}

/// Returns true if `value` should be dropped rather than stored.
///
/// Absent and empty values are purgeable. The string `"0"` is an ordinary
/// value and is always kept.
///
/// # Examples
///
/// ```
/// use url_parts::is_purgeable;
///
/// assert!(is_purgeable(None));
/// assert!(is_purgeable(Some("")));
/// assert!(!is_purgeable(Some("0")));
/// ```
#[must_use]
pub const fn is_purgeable(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v.is_empty(),
    }
}

/// Conversion from a seed string to the entries of a part.
pub(crate) trait Derive: Sized {
    fn derive(seed: &str) -> Self;
}

/// Seed string plus the entries derived from it on first access.
pub(crate) struct Lazy<E> {
    seed: String,
    entries: OnceLock<E>,
}

impl<E> Lazy<E> {
    pub(crate) fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            entries: OnceLock::new(),
        }
    }

    /// Wraps entries that were built directly, skipping the seed.
    pub(crate) fn from_entries(entries: E) -> Self {
        Self {
            seed: String::new(),
            entries: OnceLock::from(entries),
        }
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.entries.get().is_some()
    }
}

impl<E: Derive> Lazy<E> {
    pub(crate) fn entries(&self) -> &E {
        self.entries.get_or_init(|| E::derive(&self.seed))
    }

    pub(crate) fn entries_mut(&mut self) -> &mut E {
        if self.entries.get().is_none() {
            self.entries = OnceLock::from(E::derive(&self.seed));
        }
        match self.entries.get_mut() {
            Some(entries) => entries,
            None => unreachable!("entries are initialized above"),
        }
    }
}

impl<E> Default for Lazy<E> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<E: Clone> Clone for Lazy<E> {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Lazy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entries.get() {
            Some(entries) => f.debug_tuple("Initialized").field(entries).finish(),
            None => f.debug_tuple("Uninitialized").field(&self.seed).finish(),
        }
    }
}

// Compares derived entries, so a seeded part equals a built one with the
// same content.
impl<E: Derive + PartialEq> PartialEq for Lazy<E> {
    fn eq(&self, other: &Self) -> bool {
        self.entries() == other.entries()
    }
}

impl<E: Derive + Eq> Eq for Lazy<E> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    thread_local! {
        static DERIVE_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Words(Vec<String>);

    impl Derive for Words {
        fn derive(seed: &str) -> Self {
            DERIVE_CALLS.with(|c| c.set(c.get() + 1));
            Self(seed.split(' ').map(str::to_string).collect())
        }
    }

    #[test]
    fn purge_predicate_keeps_zero() {
        assert!(is_purgeable(Some("")));
        assert!(is_purgeable(None));
        assert!(!is_purgeable(Some("0")));
        assert!(!is_purgeable(Some("value")));
    }

    #[test]
    fn derives_on_first_access_only() {
        DERIVE_CALLS.with(|c| c.set(0));
        let mut lazy: Lazy<Words> = Lazy::new("a b");
        assert!(!lazy.is_initialized());

        assert_eq!(lazy.entries().0, vec!["a", "b"]);
        assert!(lazy.is_initialized());

        lazy.entries_mut().0.push("c".to_string());
        let _ = lazy.entries();
        assert_eq!(lazy.entries().0, vec!["a", "b", "c"]);
        assert_eq!(DERIVE_CALLS.with(Cell::get), 1);
    }

    #[test]
    fn mutable_access_initializes() {
        let mut lazy: Lazy<Words> = Lazy::new("x");
        lazy.entries_mut().0.clear();
        assert!(lazy.is_initialized());
        assert!(lazy.entries().0.is_empty());
    }

    #[test]
    fn seeded_equals_built() {
        let seeded: Lazy<Words> = Lazy::new("a b");
        let built = Lazy::from_entries(Words(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(seeded, built);
    }

    #[test]
    fn debug_shows_state() {
        let lazy: Lazy<Words> = Lazy::new("a");
        assert_eq!(format!("{lazy:?}"), "Uninitialized(\"a\")");
        let _ = lazy.entries();
        assert!(format!("{lazy:?}").starts_with("Initialized"));
    }
}
