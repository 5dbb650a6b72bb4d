//! Tenant routing
//!
//! Maps the request `Host` header to a store collection name through an
//! explicit routing table instead of reusing the raw header string. Lookup
//! strips any port, lowercases, consults configured overrides first, and
//! otherwise sanitizes the hostname so collection names stay in `[a-z0-9_]`.

use std::collections::HashMap;

/// Collection used when the request carries no usable host
const DEFAULT_COLLECTION: &str = "default";

/// Hostname -> collection routing table
#[derive(Debug, Clone, Default)]
pub struct TenantRouter {
    overrides: HashMap<String, String>,
}

impl TenantRouter {
    /// Build a router with explicit hostname overrides
    pub fn new(overrides: HashMap<String, String>) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(host, name)| (host.to_ascii_lowercase(), name))
            .collect();
        Self { overrides }
    }

    /// Resolve the collection name for a request host
    pub fn collection_for(&self, host: &str) -> String {
        let host = host
            .split(':')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        if host.is_empty() {
            return DEFAULT_COLLECTION.to_string();
        }
        if let Some(name) = self.overrides.get(&host) {
            return name.clone();
        }

        host.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> TenantRouter {
        TenantRouter::default()
    }

    #[test]
    fn test_sanitizes_hostname_punctuation() {
        assert_eq!(
            router().collection_for("blog.example.com"),
            "blog_example_com"
        );
    }

    #[test]
    fn test_strips_port_and_lowercases() {
        assert_eq!(router().collection_for("Blog.Example.COM:8080"), "blog_example_com");
    }

    #[test]
    fn test_empty_host_falls_back_to_default() {
        assert_eq!(router().collection_for(""), "default");
        assert_eq!(router().collection_for(":80"), "default");
    }

    #[test]
    fn test_override_wins_over_sanitization() {
        let mut overrides = HashMap::new();
        overrides.insert("Blog.Example.com".to_string(), "blog_main".to_string());
        let router = TenantRouter::new(overrides);

        assert_eq!(router.collection_for("blog.example.com:443"), "blog_main");
        assert_eq!(router.collection_for("other.example.com"), "other_example_com");
    }
}
