//! Path part of a URL.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::part::{Derive, Lazy, PartContainer, is_purgeable};

/// Characters escaped when a segment is rendered.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Text between two slashes.
///
/// `escaped` marks a piece whose percent escapes are not UTF-8. Such a piece
/// keeps the text as it appeared and is written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Piece {
    text: String,
    escaped: bool,
}

impl Piece {
    fn decoded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            escaped: false,
        }
    }

    fn parse(raw: &str) -> Self {
        match percent_decode_str(raw).decode_utf8() {
            Ok(text) => Self::decoded(text),
            Err(_) => Self {
                text: raw.to_string(),
                escaped: true,
            },
        }
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Pieces between slashes, empty pieces included.
///
/// Keeping the empty pieces lets `/about/` render back with both slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pieces(Vec<Piece>);

impl Pieces {
    /// Index into the pieces of the `index`-th non-empty segment.
    fn position(&self, index: usize) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_empty())
            .nth(index)
            .map(|(position, _)| position)
    }

    fn is_rooted(&self) -> bool {
        self.0.first().is_some_and(Piece::is_empty)
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|piece| !piece.is_empty())
            .map(|piece| piece.text.as_str())
    }
}

impl Derive for Pieces {
    fn derive(seed: &str) -> Self {
        Self(seed.split('/').map(Piece::parse).collect())
    }
}

/// The path of a URL, viewed as a list of segments.
///
/// The raw path is only split into segments on first access. Segments are
/// percent-decoded on parse and re-encoded when the path is rendered. A
/// segment whose escapes do not decode to UTF-8, such as `%FF`, is kept and
/// rendered exactly as it was written.
///
/// # Examples
///
/// ```
/// use url_parts::Path;
///
/// let mut path = Path::new("/about");
/// path.add("me");
/// assert_eq!(path.segments(), vec!["about", "me"]);
/// assert_eq!(path.to_string(), "/about/me");
///
/// let path = Path::new("/path with spaces");
/// assert_eq!(path.to_string(), "/path%20with%20spaces");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    pieces: Lazy<Pieces>,
}

impl Path {
    /// Creates a path from its raw string form.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            pieces: Lazy::new(path),
        }
    }

    /// Creates a relative path from decoded segments.
    ///
    /// Empty segments are skipped.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pieces = segments
            .into_iter()
            .filter(|s| !is_purgeable(Some(s.as_ref())))
            .map(|s| Piece::decoded(s.as_ref()))
            .collect();
        Self {
            pieces: Lazy::from_entries(Pieces(pieces)),
        }
    }

    /// Returns the rendered path.
    #[must_use]
    pub fn path(&self) -> String {
        self.to_string()
    }

    /// Replaces the whole path with a new raw string.
    pub fn set_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.pieces = Lazy::new(path);
        self
    }

    /// Returns the non-empty, decoded segments in order.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        self.pieces.entries().segments().collect()
    }

    /// Replaces every segment, keeping whether the path starts with `/`.
    pub fn set_segments<I, S>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pieces = self.pieces.entries_mut();
        let rooted = pieces.is_rooted();
        pieces.0.clear();
        if rooted {
            pieces.0.push(Piece::decoded(String::new()));
        }
        pieces.0.extend(
            segments
                .into_iter()
                .filter(|s| !is_purgeable(Some(s.as_ref())))
                .map(|s| Piece::decoded(s.as_ref())),
        );
        self
    }

    /// Appends a segment.
    ///
    /// A trailing slash is absorbed, and an empty path becomes rooted:
    /// `""` plus `"a"` renders as `"/a"`. Empty segments are ignored.
    pub fn add(&mut self, segment: &str) -> &mut Self {
        if is_purgeable(Some(segment)) {
            return self;
        }
        let pieces = &mut self.pieces.entries_mut().0;
        let count = pieces.len();
        match pieces.last_mut() {
            Some(last) if last.is_empty() && count > 1 => {
                *last = Piece::decoded(segment);
            }
            _ => pieces.push(Piece::decoded(segment)),
        }
        self
    }

    /// Returns true if the path starts with `/`.
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        let pieces = self.pieces.entries();
        pieces.0.len() > 1 && pieces.is_rooted()
    }
}

impl PartContainer for Path {
    type Key = usize;
    type Item = String;

    fn is_initialized(&self) -> bool {
        self.pieces.is_initialized()
    }

    fn get(&self, key: &usize) -> Option<&str> {
        let pieces = self.pieces.entries();
        pieces
            .position(*key)
            .map(|position| pieces.0[position].text.as_str())
    }

    fn set(&mut self, key: &usize, value: &str) -> &mut Self {
        if is_purgeable(Some(value)) {
            self.remove(key);
            return self;
        }
        let pieces = self.pieces.entries_mut();
        if let Some(position) = pieces.position(*key) {
            pieces.0[position] = Piece::decoded(value);
        }
        self
    }

    fn remove(&mut self, key: &usize) -> Option<String> {
        let pieces = self.pieces.entries_mut();
        let position = pieces.position(*key)?;
        Some(pieces.0.remove(position).text)
    }

    fn len(&self) -> usize {
        self.pieces.entries().segments().count()
    }

    fn all(&self) -> Vec<String> {
        self.pieces
            .entries()
            .segments()
            .map(str::to_string)
            .collect()
    }

    fn set_all<I: IntoIterator<Item = String>>(&mut self, items: I) -> &mut Self {
        self.set_segments(items)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, piece) in self.pieces.entries().0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            if piece.escaped {
                f.write_str(&piece.text)?;
            } else {
                write!(f, "{}", utf8_percent_encode(&piece.text, SEGMENT))?;
            }
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
