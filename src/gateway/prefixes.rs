//! Reserved path prefixes
//!
//! 保留前缀集合：命中任意前缀的路径永远不会被当作短码处理。
//! 前缀使用纯字符串前缀匹配（`/admin` 同样覆盖 `/administrator`）。

/// Default prefixes of the application sections fronted by the gateway.
pub const DEFAULT_RESERVED_PREFIXES: &[&str] = &[
    "/_next",
    "/api",
    "/dashboard",
    "/admin",
    "/stores",
    "/products",
    "/login",
];

/// Normalized, ordered set of reserved path prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedPrefixes {
    prefixes: Vec<String>,
}

impl ReservedPrefixes {
    /// Build a prefix set, dropping blank entries and duplicates.
    ///
    /// Every entry gets exactly one leading `/`.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self {
            prefixes: Vec::new(),
        };
        for prefix in prefixes {
            set.push(prefix.as_ref());
        }
        set
    }

    pub fn empty() -> Self {
        Self {
            prefixes: Vec::new(),
        }
    }

    /// Add a prefix, returning the extended set.
    pub fn with(mut self, prefix: &str) -> Self {
        self.push(prefix);
        self
    }

    fn push(&mut self, raw: &str) {
        let Some(prefix) = normalize_prefix(raw) else {
            return;
        };
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    /// Return the first prefix `path` starts with.
    #[inline]
    pub fn matches(&self, path: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|p| path.starts_with(p.as_str()))
            .map(String::as_str)
    }

    /// Application routes that no reserved prefix covers.
    ///
    /// Such a route would be shadowed by short-code interpretation.
    /// `/` and routes containing a `.` are never shadowed and are skipped.
    pub fn uncovered<'a, I>(&self, routes: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        routes
            .into_iter()
            .filter(|route| {
                let route = route.trim();
                !route.is_empty()
                    && route != "/"
                    && !route.contains('.')
                    && self.matches(route).is_none()
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for ReservedPrefixes {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_PREFIXES)
    }
}

fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        // 空前缀或单独的 "/" 会吞掉所有路径
        return None;
    }
    Some(format!("/{}", trimmed))
}
