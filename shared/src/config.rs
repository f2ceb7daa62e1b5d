//! ==============================================================================
//! config.rs - dashboard configuration
//! ==============================================================================
//!
//! defaults target the same origin that served the page. the dashboard may
//! override the api base and the page size from attributes on <body>:
//!
//! ```text
//! <body data-api-base="https://links.example.com" data-page-size="50">
//! ```
//!
//! ==============================================================================

use crate::error::ConfigError;

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAPPINGS_PATH: &str = "/mappings-api";
pub const DEFAULT_SHORTEN_PATH: &str = "/shorten";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// scheme + host prefix, empty for same-origin requests
    pub api_base: String,
    pub mappings_path: String,
    pub shorten_path: String,
    /// records requested per mappings page
    pub page_size: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            mappings_path: DEFAULT_MAPPINGS_PATH.to_string(),
            shorten_path: DEFAULT_SHORTEN_PATH.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DashboardConfig {
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// GET url for one page of mappings
    pub fn mappings_url(&self, page: u32, page_size: u32) -> String {
        format!(
            "{}{}?page={}&pageSize={}",
            self.api_base, self.mappings_path, page, page_size
        )
    }

    /// POST target of the shorten form
    pub fn shorten_url(&self) -> String {
        format!("{}{}", self.api_base, self.shorten_path)
    }
}

/// parse a `data-page-size` override
pub fn parse_page_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::PageSize(raw.to_string())),
    }
}
