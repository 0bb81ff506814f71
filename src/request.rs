//! Building a [`Url`] from the request being served.

use crate::constants::default_port;
use crate::error::ParseError;
use crate::parser::split_host_port;
use crate::url::Url;

/// The fields of an incoming HTTP request needed to rebuild its URL.
///
/// The host application fills this from its server framework; nothing is
/// read from process state.
///
/// # Examples
///
/// ```
/// use url_parts::{RequestContext, Url};
///
/// let ctx = RequestContext::new("jwage.com")
///     .with_port(8080)
///     .with_request_uri("/about?param=value");
/// let url = Url::from_current(&ctx).unwrap();
/// assert_eq!(url.to_string(), "http://jwage.com:8080/about?param=value");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    host: String,
    port: Option<u16>,
    is_tls: bool,
    request_uri: Option<String>,
    auth_user: Option<String>,
    auth_password: Option<String>,
}

impl RequestContext {
    /// Creates a plain-HTTP context for `host`.
    ///
    /// `host` is the value of the `Host` header and may carry a port.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Sets the port the request arrived on.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Marks the request as served over TLS.
    #[must_use]
    pub const fn with_tls(mut self, is_tls: bool) -> Self {
        self.is_tls = is_tls;
        self
    }

    /// Sets the request target, path plus query.
    #[must_use]
    pub fn with_request_uri(mut self, request_uri: impl Into<String>) -> Self {
        self.request_uri = Some(request_uri.into());
        self
    }

    /// Sets basic-auth credentials.
    #[must_use]
    pub fn with_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth_user = Some(user.into());
        self.auth_password = Some(password.into());
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns true for TLS requests.
    #[must_use]
    pub const fn is_tls(&self) -> bool {
        self.is_tls
    }

    /// Returns the request target.
    #[must_use]
    pub fn request_uri(&self) -> Option<&str> {
        self.request_uri.as_deref()
    }

    /// Returns the basic-auth user.
    #[must_use]
    pub fn auth_user(&self) -> Option<&str> {
        self.auth_user.as_deref()
    }

    /// Returns the basic-auth password.
    #[must_use]
    pub fn auth_password(&self) -> Option<&str> {
        self.auth_password.as_deref()
    }

    /// Returns `http` or `https`.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        if self.is_tls { "https" } else { "http" }
    }

    /// Renders the URL string the request was made to.
    ///
    /// The port is left out when it is the scheme's default or when the
    /// host already names one.
    #[must_use]
    pub fn to_url_string(&self) -> String {
        let scheme = self.scheme();
        let mut url = format!("{scheme}://");

        if let Some(user) = self.auth_user.as_deref().filter(|u| !u.is_empty()) {
            url.push_str(user);
            if let Some(password) = self.auth_password.as_deref().filter(|p| !p.is_empty()) {
                url.push(':');
                url.push_str(password);
            }
            url.push('@');
        }

        url.push_str(&self.host);
        let host_has_port = split_host_port(&self.host).is_ok_and(|(_, port)| port.is_some());
        let explicit_port = self
            .port
            .filter(|&port| !host_has_port && default_port(scheme) != Some(port));
        if let Some(port) = explicit_port {
            url.push(':');
            url.push_str(&port.to_string());
        }

        match self.request_uri.as_deref() {
            Some(uri) if uri.starts_with('/') => url.push_str(uri),
            Some(uri) if !uri.is_empty() => {
                url.push('/');
                url.push_str(uri);
            }
            _ => {}
        }
        url
    }
}

impl Url {
    /// Builds the URL of the request described by `ctx`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the context has no usable host.
    pub fn from_current(ctx: &RequestContext) -> Result<Self, ParseError> {
        Self::parse(&ctx.to_url_string())
    }
}
