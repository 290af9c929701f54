//! Generator Frontend App

use leptos::prelude::*;

use crate::components::CreationManager;
use crate::config::ApiConfig;
use crate::context::provide_api;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("using generator backend at {}", config.base_url);
    provide_api(config);

    view! {
        <main class="app-layout">
            <h1>"Random Generators"</h1>
            <CreationManager />
        </main>
    }
}
