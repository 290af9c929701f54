//! Application Context
//!
//! Backend client shared with components via the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::ApiConfig;

pub fn provide_api(config: ApiConfig) {
    provide_context(HttpApi::new(config));
}

/// Get the backend client from context
pub fn use_api() -> HttpApi {
    expect_context::<HttpApi>()
}
