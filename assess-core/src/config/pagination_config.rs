//! Pagination configuration.

use serde::{Deserialize, Serialize};

/// Page size limits for keyset pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when the caller does not request one.
    pub default_page_size: usize,
    /// Hard upper bound on requested page sizes.
    pub max_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            max_page_size: 100,
        }
    }
}

impl PaginationConfig {
    /// Resolve a requested page size: default when absent, clamped to
    /// `1..=max_page_size` otherwise.
    pub fn resolve_page_size(&self, requested: Option<usize>) -> usize {
        match requested {
            None => self.default_page_size,
            Some(n) => n.clamp(1, self.max_page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_clamps_to_bounds() {
        let config = PaginationConfig::default();
        assert_eq!(config.resolve_page_size(None), 25);
        assert_eq!(config.resolve_page_size(Some(0)), 1);
        assert_eq!(config.resolve_page_size(Some(50)), 50);
        assert_eq!(config.resolve_page_size(Some(10_000)), 100);
    }
}
