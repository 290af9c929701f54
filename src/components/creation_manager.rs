//! Creation Manager Component
//!
//! Generator form above the list of generators loaded from the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{GeneratorCard, GeneratorForm};
use crate::context::use_api;
use crate::controller::{item_key, ListController, LogSink};
use crate::error::SubmissionError;
use crate::models::GeneratorItem;

#[component]
pub fn CreationManager() -> impl IntoView {
    let controller = ListController::new(use_api(), LogSink);
    let state = controller.state();

    // Load the list on mount
    {
        let controller = controller.clone();
        Effect::new(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.on_activate().await;
            });
        });
    }

    {
        let controller = controller.clone();
        on_cleanup(move || controller.deactivate());
    }

    let on_success = {
        let controller = controller.clone();
        move |item: GeneratorItem| controller.on_item_created(item)
    };
    let on_error = move |err: SubmissionError| controller.on_creation_failed(&err);

    view! {
        <div class="creation-manager-wrapper">
            <div class="upper-part-wrapper">
                <GeneratorForm on_success=on_success on_error=on_error />
            </div>
            <div class="lower-part-wrapper">
                <For
                    each=move || state.with(|list| list.items().to_vec())
                    key=item_key
                    children=move |item| view! { <GeneratorCard item=item /> }
                />
            </div>
        </div>
    }
}
