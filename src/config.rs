//! Backend Configuration
//!
//! Where the generator API lives and how requests are credentialed.

use serde::{Deserialize, Serialize};

/// Backend address used when no build-time override is set
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the generator API, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Send cookies with every request
    #[serde(default = "default_true")]
    pub include_credentials: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            include_credentials: true,
        }
    }
}

impl ApiConfig {
    /// Read `GENERATOR_API_URL` as baked in at build time
    pub fn from_env() -> Self {
        Self::from_override(option_env!("GENERATOR_API_URL"))
    }

    fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::default().with_base_url(url),
            None => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join `path` onto the base address with exactly one slash between them
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
