use crate::error::ConfigError;
use url::Url;

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";
pub const DEFAULT_REGION: &str = "US";

/// Where the gateway lives and how much to ask it for.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub base_url: Url,
    pub search_max_results: u32,
    pub search_order: String,
    pub trending_max_results: u32,
    /// Region used for the category list while "all regions" is selected.
    pub fallback_region: String,
    pub key_moment_count: u32,
    pub segment_count: u32,
    pub comment_page_size: u32,
    pub channel_video_count: u32,
}

impl GatewayConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut base_url = Url::parse(base_url.trim())?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base_url.scheme().to_string()));
        }
        // Url::join replaces the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            search_max_results: 50,
            search_order: "viewCount".to_string(),
            trending_max_results: 10,
            fallback_region: DEFAULT_REGION.to_string(),
            key_moment_count: 5,
            segment_count: 4,
            comment_page_size: 20,
            channel_video_count: 10,
        })
    }

    /// Reads `GATEWAY_URL` from the process environment.
    #[cfg(feature = "native")]
    pub fn from_process_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        Self::new(&base_url)
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        match self.base_url.join(path.trim_start_matches('/')) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.base_url, path.trim_start_matches('/')),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GATEWAY_URL).expect("default gateway URL is valid")
    }
}
