//! Protected-page layout: sidebar plus content area with a mobile header.

use leptos::prelude::*;

use crate::components::Sidebar;

#[component]
pub fn Shell(title: &'static str, children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <div class="shell">
            <Sidebar open=sidebar_open/>
            <div class="shell-content">
                <header class="mobile-header">
                    <button class="menu-button" on:click=move |_| sidebar_open.set(true)>
                        "\u{2630}"
                    </button>
                    <h1 class="mobile-title">{title}</h1>
                    <span class="mobile-spacer"></span>
                </header>
                {children()}
            </div>
        </div>
    }
}
