//! Loading indicators.

use leptos::prelude::*;

/// Centered indicator shown while a page's initial fetches are in flight.
#[component]
pub fn PageSpinner() -> impl IntoView {
    view! {
        <div class="page-spinner">
            <div class="bar-loader"></div>
        </div>
    }
}

/// Small indicator for per-element loading (buttons, tree nodes).
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! { <span class="inline-loader"></span> }
}
