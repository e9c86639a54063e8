//! Short-code routing decision
//!
//! 纯函数：给定路径和配置，决定放行还是重定向到后端解析服务。
//! 不做任何 I/O，不记录点击，对任意字符串输入都不会 panic。

use tracing::warn;

use super::prefixes::ReservedPrefixes;
use crate::config::GatewayConfig;
use crate::errors::{GatewayError, Result};
use crate::utils::url_validator::validate_url;

/// Path segment of the backend resolver endpoint.
pub const RESOLVER_PATH: &str = "/r/";

/// Why a request was forwarded untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassReason {
    /// Path is exactly `/`.
    Root,
    /// Path starts with a reserved prefix.
    ReservedPrefix,
    /// Path contains a `.`, treated as a static file request.
    StaticFile,
    /// Nothing left after stripping the leading `/`.
    EmptyCode,
    /// No backend base URL configured.
    RedirectDisabled,
    /// Input does not start with `/`.
    NotAPath,
}

impl PassReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::ReservedPrefix => "reserved_prefix",
            Self::StaticFile => "static_file",
            Self::EmptyCode => "empty_code",
            Self::RedirectDisabled => "redirect_disabled",
            Self::NotAPath => "not_a_path",
        }
    }
}

impl std::fmt::Display for PassReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    PassThrough(PassReason),
    Redirect { code: String, location: String },
}

impl RouteDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

/// Immutable per-process gateway state.
#[derive(Debug, Clone)]
pub struct RedirectGateway {
    backend_base_url: Option<String>,
    reserved: ReservedPrefixes,
}

impl RedirectGateway {
    /// Create a gateway; an empty base URL disables redirection.
    pub fn new(backend_base_url: &str, reserved: ReservedPrefixes) -> Self {
        let base = backend_base_url.trim().trim_end_matches('/');
        Self {
            backend_base_url: (!base.is_empty()).then(|| base.to_string()),
            reserved,
        }
    }

    /// Build from configuration, reserving `extra` on top of the configured prefixes.
    ///
    /// An unusable base URL is logged and treated as unset.
    pub fn from_config<'a, I>(config: &GatewayConfig, extra: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut reserved = ReservedPrefixes::new(&config.reserved_prefixes);
        for prefix in extra {
            reserved = reserved.with(prefix);
        }

        if let Err(e) = validate_backend(&config.backend_base_url) {
            warn!("{}. Short-link redirects disabled.", e.message());
            return Self::new("", reserved);
        }

        Self::new(&config.backend_base_url, reserved)
    }

    pub fn backend_base_url(&self) -> Option<&str> {
        self.backend_base_url.as_deref()
    }

    pub fn redirect_enabled(&self) -> bool {
        self.backend_base_url.is_some()
    }

    pub fn reserved(&self) -> &ReservedPrefixes {
        &self.reserved
    }

    /// Decide what to do with `path`. First matching rule wins.
    pub fn decide(&self, path: &str) -> RouteDecision {
        if path == "/" {
            return RouteDecision::PassThrough(PassReason::Root);
        }
        if self.reserved.matches(path).is_some() {
            return RouteDecision::PassThrough(PassReason::ReservedPrefix);
        }
        if path.contains('.') {
            return RouteDecision::PassThrough(PassReason::StaticFile);
        }

        let Some(code) = path.strip_prefix('/') else {
            return RouteDecision::PassThrough(PassReason::NotAPath);
        };
        if code.is_empty() {
            return RouteDecision::PassThrough(PassReason::EmptyCode);
        }

        let Some(base) = self.backend_base_url.as_deref() else {
            return RouteDecision::PassThrough(PassReason::RedirectDisabled);
        };

        RouteDecision::Redirect {
            code: code.to_string(),
            location: resolver_url(base, code),
        }
    }
}

/// Check a configured backend base URL. Empty (redirects disabled) is accepted.
pub fn validate_backend(base: &str) -> Result<()> {
    let base = base.trim();
    if base.is_empty() {
        return Ok(());
    }
    validate_url(base).map_err(|e| {
        GatewayError::validation(format!(
            "Ignoring gateway.backend_base_url '{}': {}",
            base.escape_debug(),
            e
        ))
    })
}

/// Build `{base}/r/{code}` with trailing slashes of `base` removed
/// and `code` encoded as a single path segment.
pub fn resolver_url(base: &str, code: &str) -> String {
    format!(
        "{}{}{}",
        base.trim_end_matches('/'),
        RESOLVER_PATH,
        urlencoding::encode(code)
    )
}
