//! Property-based tests for parsing, rendering and part mutation.
//!
//! Generated URLs avoid redundant defaults and characters that have more
//! than one encoding, so rendering a parsed URL must reproduce its input.

use proptest::prelude::*;

use url_parts::{Parser, PartContainer, Path, Query, SuffixRules, Url};

/// Strategies for generating well-formed URL pieces.
mod strategies {
    use super::*;

    /// Characters that render unchanged in every part
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    /// Generate a lowercase alphanumeric word (1-12 chars)
    pub fn word() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(ALPHANUMERIC.to_vec()), 1..=12)
            .prop_map(|chars| chars.into_iter().map(char::from).collect())
    }

    /// Generate a host under `.com` with 0-3 subdomain labels
    pub fn host() -> impl Strategy<Value = String> {
        prop::collection::vec(word(), 1..=4).prop_map(|labels| format!("{}.com", labels.join(".")))
    }

    /// Generate a rooted path with 0-5 segments
    pub fn path() -> impl Strategy<Value = String> {
        prop::collection::vec(word(), 0..=5).prop_map(|segments| format!("/{}", segments.join("/")))
    }

    /// Generate a query with distinct names, possibly empty
    pub fn query() -> impl Strategy<Value = String> {
        prop::collection::btree_map(word(), word(), 0..=4).prop_map(|params| {
            params
                .into_iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("&")
        })
    }

    /// Generate an absolute URL without default ports
    pub fn url() -> impl Strategy<Value = String> {
        (
            prop::sample::select(vec!["http", "https"]),
            host(),
            prop::option::of(1024u16..=65535),
            path(),
            query(),
            prop::option::of(word()),
        )
            .prop_map(|(scheme, host, port, path, query, fragment)| {
                let mut url = format!("{scheme}://{host}");
                if let Some(port) = port {
                    url.push_str(&format!(":{port}"));
                }
                url.push_str(&path);
                if !query.is_empty() {
                    url.push('?');
                    url.push_str(&query);
                }
                if let Some(fragment) = fragment {
                    url.push('#');
                    url.push_str(&fragment);
                }
                url
            })
    }

    /// Generate free text for query names and values, spaces included
    pub fn text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 @&=+%]{1,16}"
    }
}

fn com_parser() -> Parser<SuffixRules> {
    Parser::with_lookup(["com"].into_iter().collect())
}

mod url_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn roundtrip_parse_render(url in url()) {
            let parsed = Url::parse_with(&url, &com_parser()).unwrap();
            prop_assert_eq!(parsed.to_string(), url);
        }

        #[test]
        fn reparse_is_stable(url in url()) {
            let parsed = Url::parse_with(&url, &com_parser()).unwrap();
            let reparsed = Url::parse_with(&parsed.to_string(), &com_parser()).unwrap();
            prop_assert_eq!(parsed, reparsed);
        }

        #[test]
        fn canonical_starts_with_reversed_host(host in host(), path in path()) {
            let url = Url::parse_with(&format!("http://{host}{path}"), &com_parser()).unwrap();
            let reversed = host.rsplit('.').collect::<Vec<_>>().join(".");
            prop_assert_eq!(url.canonical(), Some(format!("{reversed}{path}")));
        }

        #[test]
        fn parser_and_url_agree_on_canonical(
            host in host(),
            path in path(),
            query in query(),
            extra in text(),
        ) {
            let url = format!("http://{host}{path} x?{query}&x={extra}");
            let parts = com_parser().parse_url(&url).unwrap();
            let parsed = Url::parse_with(&url, &com_parser()).unwrap();
            prop_assert_eq!(parts.canonical, parsed.canonical());
        }

        #[test]
        fn join_keeps_query_and_fragment(base in url(), other_host in host(), other_path in path()) {
            let mut url = Url::parse_with(&base, &com_parser()).unwrap();
            let before = url.clone();
            let other = format!("https://{other_host}{other_path}");
            let other = Url::parse_with(&other, &com_parser()).unwrap();
            url.join(&other);
            prop_assert_eq!(url.host(), Some(other_host.as_str()));
            prop_assert_eq!(url.scheme(), Some("https"));
            prop_assert_eq!(url.port(), None);
            prop_assert_eq!(url.query(), before.query());
            prop_assert_eq!(url.fragment(), before.fragment());
        }
    }
}

mod query_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn set_is_idempotent(seed in query(), name in text(), value in text()) {
            let mut once = Query::new(seed.as_str());
            once.set(&name, &value);
            let mut twice = Query::new(seed.as_str());
            twice.set(&name, &value).set(&name, &value);
            prop_assert_eq!(once.to_string(), twice.to_string());
        }

        #[test]
        fn empty_value_purges(seed in query(), name in word()) {
            let mut query = Query::new(seed.as_str());
            query.set(&name, "value").set(&name, "");
            prop_assert!(!query.has(&name));
        }

        #[test]
        fn zero_value_is_kept(seed in query(), name in word()) {
            let mut query = Query::new(seed.as_str());
            query.set(&name, "0");
            prop_assert_eq!(query.get(&name), Some("0"));
        }

        #[test]
        fn rendered_query_reparses(name in text(), value in text()) {
            let mut query = Query::default();
            query.set(&name, &value);
            let reparsed = Query::new(query.to_string());
            prop_assert_eq!(reparsed.get(&name), Some(value.as_str()));
        }
    }
}

mod path_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn add_appends_segments(seed in path(), segments in prop::collection::vec(word(), 0..=5)) {
            let mut path = Path::new(seed.as_str());
            let before = path.len();
            for segment in &segments {
                path.add(segment);
            }
            prop_assert_eq!(path.len(), before + segments.len());
            prop_assert!(path.is_rooted());
        }

        #[test]
        fn spaces_render_encoded(words in prop::collection::vec(word(), 1..=4)) {
            let segment = words.join(" ");
            let path = Path::new(format!("/{segment}"));
            prop_assert_eq!(path.to_string(), format!("/{}", words.join("%20")));
            prop_assert_eq!(path.segments(), vec![segment.as_str()]);
        }
    }
}
