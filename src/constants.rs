//! Constants shared by the parser and the URL model.

/// Default port for the `http` scheme.
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Default port for the `https` scheme.
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Separator between a scheme and an authority.
pub const AUTHORITY_PREFIX: &str = "//";

/// Returns the well-known default port for `scheme`, if it has one.
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    if scheme.eq_ignore_ascii_case("http") {
        Some(DEFAULT_HTTP_PORT)
    } else if scheme.eq_ignore_ascii_case("https") {
        Some(DEFAULT_HTTPS_PORT)
    } else {
        None
    }
}
