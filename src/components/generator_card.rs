//! Generator Card Component
//!
//! Read-only display of one generator item.

use leptos::prelude::*;

use crate::models::GeneratorItem;

#[component]
pub fn GeneratorCard(item: GeneratorItem) -> impl IntoView {
    let heading = item
        .title()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Generator #{}", item.item_id));
    let details = item.details();

    view! {
        <div class="generator-item" data-item-id=item.item_id.to_string()>
            <h3 class="generator-title">{heading}</h3>
            {(!details.is_empty()).then(|| view! {
                <ul class="generator-fields">
                    {details.into_iter().map(|(key, value)| view! {
                        <li>
                            <span class="field-name">{key}</span>
                            ": "
                            <span class="field-value">{value}</span>
                        </li>
                    }).collect_view()}
                </ul>
            })}
        </div>
    }
}
