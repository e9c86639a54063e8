//! Backend base URL validation
//!
//! 校验解析服务地址：只允许 http/https，且不能带 query 或 fragment，
//! 否则拼接 `/r/{code}` 后得到的地址是坏的。

use url::Url;

#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    DangerousProtocol(String),
    InvalidFormat(String),
    UnexpectedComponent(&'static str),
    IllegalCharacter(char),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::UnexpectedComponent(part) => {
                write!(f, "Base URL must not contain a {}", part)
            }
            Self::IllegalCharacter(c) => {
                write!(f, "Base URL contains illegal character {:?}", c)
            }
        }
    }
}

impl std::error::Error for UrlValidationError {}

const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// Validate a resolver base URL.
///
/// Checks, in order: non-empty, no whitespace or control characters,
/// not a dangerous scheme, http(s) only, parsable, no query string or fragment.
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    // Url::parse 会静默丢弃 tab/换行，必须在解析前拒绝
    if let Some(c) = url.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::IllegalCharacter(c));
    }

    let url_lower = url.to_lowercase();

    for proto in DANGEROUS_PROTOCOLS {
        if url_lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        let proto = url_lower
            .split(':')
            .next()
            .map(|s| format!("{}:", s))
            .unwrap_or_default();
        return Err(UrlValidationError::InvalidProtocol(proto));
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if parsed.query().is_some() {
        return Err(UrlValidationError::UnexpectedComponent("query string"));
    }
    if parsed.fragment().is_some() {
        return Err(UrlValidationError::UnexpectedComponent("fragment"));
    }

    Ok(())
}
