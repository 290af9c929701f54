//! Generator API Bindings
//!
//! HTTP client for the generator backend, organized by endpoint.

mod tables;

use reqwest::{Client, RequestBuilder};

use crate::config::ApiConfig;
use crate::error::{FetchError, SubmissionError};
use crate::models::{GeneratorItem, NewGenerator};

/// Source of the generator listing
pub trait ListingService {
    async fn list_generators(&self) -> Result<Vec<GeneratorItem>, FetchError>;
}

/// Sink for new generators submitted by the form
pub trait CreationService {
    async fn create_generator(&self, new: &NewGenerator) -> Result<GeneratorItem, SubmissionError>;
}

/// Backend client shared through context
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.credentialed(self.client.get(self.config.endpoint(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.credentialed(self.client.post(self.config.endpoint(path)))
    }

    #[cfg(target_arch = "wasm32")]
    fn credentialed(&self, request: RequestBuilder) -> RequestBuilder {
        if self.config.include_credentials {
            request.fetch_credentials_include()
        } else {
            request
        }
    }

    // Cookies are only a browser concern.
    #[cfg(not(target_arch = "wasm32"))]
    fn credentialed(&self, request: RequestBuilder) -> RequestBuilder {
        request
    }
}

#[cfg(test)]
impl HttpApi {
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}
