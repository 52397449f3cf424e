//! Absolute URL construction.

/// The parts of an incoming request needed to build links back to the app.
pub trait RequestInfo {
    /// The `Host` header, possibly with a `:port` suffix.
    fn host(&self) -> &str;
    /// The request scheme, `http` or `https`.
    fn scheme(&self) -> &str;
}

/// A plain [`RequestInfo`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts {
    /// Host header value.
    pub host: String,
    /// Request scheme.
    pub scheme: String,
}

impl RequestParts {
    /// Create request parts from a host header and scheme.
    pub fn new(host: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            scheme: scheme.into(),
        }
    }
}

impl RequestInfo for RequestParts {
    fn host(&self) -> &str {
        &self.host
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }
}

/// Build an absolute URL for `path` on `host`.
///
/// The scheme comes from the current request, and so does the port unless
/// it is the scheme's default (`80` for http, `443` for https).
pub fn build_url<R: RequestInfo + ?Sized>(request: &R, host: &str, path: &str) -> String {
    let scheme = request.scheme();
    let host = match request.host().split(':').nth(1) {
        Some(port) if !is_default_port(port, scheme) => format!("{host}:{port}"),
        _ => host.to_string(),
    };
    format!("{scheme}://{host}{path}")
}

fn is_default_port(port: &str, scheme: &str) -> bool {
    matches!((port, scheme), ("80", "http") | ("443", "https"))
}
