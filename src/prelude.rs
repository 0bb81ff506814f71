//! Convenient re-exports for glob imports.
//!
//! Brings the URL type, its parts and the [`PartContainer`] trait into scope
//! in one line:
//!
//! ```rust
//! use url_parts::prelude::*;
//!
//! let mut url = Url::parse("http://jwage.com/events").unwrap();
//! url.query_mut().set("param1", "value1");
//! assert_eq!(url.to_string(), "http://jwage.com/events?param1=value1");
//! ```

pub use crate::{
    // Core types
    Domain, Field, Fragment, Path, Query, Url,
    // Parsing
    Parser, PublicSuffixList, RequestContext, SuffixLookup, SuffixRules, UrlComponents,
    // Part access
    PartContainer, is_purgeable,
    // Errors
    FieldError, ParseError, ParseErrorKind,
};
