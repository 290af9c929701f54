//! Generator Form Component
//!
//! Submits a new generator and reports the outcome to its parent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::CreationService;
use crate::context::use_api;
use crate::error::SubmissionError;
use crate::models::{GeneratorItem, NewGenerator};

/// Creation form.
///
/// * `on_success` - receives the item the backend created
/// * `on_error` - receives any failed submission
#[component]
pub fn GeneratorForm(
    #[prop(into)] on_success: Callback<GeneratorItem>,
    #[prop(into)] on_error: Callback<SubmissionError>,
) -> impl IntoView {
    let api = use_api();

    let (name, set_name) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let new = NewGenerator::new(name.get_untracked());
        if new.is_blank() {
            on_error.run(SubmissionError::EmptyName);
            return;
        }

        let api = api.clone();
        set_submitting.set(true);
        spawn_local(async move {
            let outcome = api.create_generator(&new).await;
            // The form may have been torn down while the request was out.
            match outcome {
                Ok(item) => {
                    set_name.try_set(String::new());
                    on_success.try_run(item);
                }
                Err(err) => {
                    on_error.try_run(err);
                }
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <form class="generator-form" on:submit=submit>
            <input
                type="text"
                placeholder="New generator name..."
                prop:value=move || name.get()
                on:input=move |ev| {
                    if let Some(input) = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        set_name.set(input.value());
                    }
                }
            />
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Saving..." } else { "Create" }}
            </button>
        </form>
    }
}
