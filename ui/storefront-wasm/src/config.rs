//! Runtime configuration.
//!
//! The API base URL is resolved once at startup: a `data-api-base` attribute
//! on `<body>` wins, then the `STOREFRONT_API_URL` build-time variable, then
//! the local development server. `data-log` on `<body>` overrides the log
//! filter directives.

use crate::dom;
use crate::logs::DEFAULT_LOG_FILTER;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub page_size: u32,
    /// Placeholder page count for the pagination bar; the API reports no total.
    pub total_pages: u32,
    pub carousel_interval_ms: u32,
    pub banner_interval_ms: u32,
    pub toast_lifetime_ms: u32,
    pub mobile_breakpoint_px: f64,
    pub home_page: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: 8,
            total_pages: 5,
            carousel_interval_ms: 5_000,
            banner_interval_ms: 4_000,
            toast_lifetime_ms: 5_000,
            mobile_breakpoint_px: 768.0,
            home_page: "index.html".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration for the current page.
    pub fn resolve() -> Self {
        let body = dom::body();
        let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
        let from_page = attr("data-api-base");
        Self::with_base_url(from_page.as_deref().or(option_env!("STOREFRONT_API_URL")))
            .with_log_filter(attr("data-log").as_deref())
    }

    pub fn with_base_url(base_url: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        Self {
            api_base_url,
            ..Self::default()
        }
    }

    pub fn with_log_filter(mut self, directives: Option<&str>) -> Self {
        if let Some(directives) = directives.map(str::trim).filter(|d| !d.is_empty()) {
            self.log_filter = directives.to_string();
        }
        self
    }
}
