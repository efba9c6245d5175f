//! Shared navigation shell for protected pages.
//!
//! Collapsible side menu driven by the static route table in
//! `utils::constants`, with the logged-in user's identity and the logout
//! action at the bottom.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::use_toast;
use crate::state::session::use_session;
use crate::utils::constants::MENU_ITEMS;

#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let location = use_location();
    let navigate = use_navigate();

    let nav = navigate.clone();
    let on_logout = move |_| {
        session.log_out();
        toast.success("Logged out successfully!");
        nav("/login", Default::default());
    };

    view! {
        <aside class=move || if open.get() { "sidebar" } else { "sidebar sidebar-closed" }>
            <div class="sidebar-header">
                <span class="sidebar-brand">"refnet"</span>
                <button class="sidebar-close" on:click=move |_| open.set(false)>
                    "\u{2715}"
                </button>
            </div>

            <nav class="sidebar-nav">
                {MENU_ITEMS
                    .iter()
                    .map(|(label, route)| {
                        let route = *route;
                        let navigate = navigate.clone();
                        let location = location.clone();
                        let is_active =
                            move || location.pathname.get() == route;
                        view! {
                            <div
                                class=move || {
                                    if is_active() { "nav-item nav-item-active" } else { "nav-item" }
                                }
                                on:click=move |_| navigate(route, Default::default())
                            >
                                {*label}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar-footer">
                {move || {
                    session.user().map(|user| {
                        view! {
                            <div class="sidebar-user">
                                <p class="sidebar-user-name">{user.name}</p>
                                <p class="sidebar-user-email">{user.email}</p>
                            </div>
                        }
                    })
                }}
                <button class="btn btn-logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
