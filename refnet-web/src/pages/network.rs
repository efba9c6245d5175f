//! Referral network page: lazily expanding tree of downline members.
//!
//! The tree model lives in `shared::tree`; this page only wires it to the
//! API. Expanding a node that has never been fetched triggers exactly one
//! level fetch for that node; collapsing keeps children so re-expansion is
//! instant. A failed level fetch collapses the node back so the next click
//! retries it.

use leptos::prelude::*;

use shared::dto::network::ReferralUser;
use shared::tree::{ReferralTree, ToggleOutcome};

use crate::components::{use_toast, InlineSpinner, PageSpinner, Shell};
use crate::services::api::ApiClient;
use crate::state::session::use_session;
use crate::utils::lifecycle::use_mounted;

#[component]
pub fn NetworkPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let mounted = use_mounted();

    let tree = RwSignal::new(ReferralTree::new());
    let (loading, set_loading) = signal(true);
    let (loading_node, set_loading_node) = signal(None::<String>);

    if let (Some(code), Some(token)) = (session.referral_code(), session.token()) {
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<Vec<ReferralUser>>(&format!("/update/user/{}/users", code))
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(users) => tree.update(|t| t.set_roots(users)),
                Err(e) => toast.error(format!("Failed to fetch referral network: {}", e)),
            }
            set_loading.set(false);
        });
    } else {
        set_loading.set(false);
    }

    let handle_toggle = move |code: String| {
        // One in-flight level fetch at a time keeps the spinner unambiguous.
        if loading_node.get_untracked().is_some() {
            return;
        }
        let Some(outcome) = tree.try_update(|t| t.toggle(&code)) else {
            return;
        };
        if outcome != ToggleOutcome::NeedsFetch {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        set_loading_node.set(Some(code.clone()));
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<Vec<ReferralUser>>(&format!("/update/user/{}/users", code))
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(children) => tree.update(|t| t.insert_children(&code, children)),
                Err(e) => {
                    tree.update(|t| {
                        t.toggle(&code);
                    });
                    toast.error(format!("Failed to fetch referrals: {}", e));
                }
            }
            set_loading_node.set(None);
        });
    };

    view! {
        <Shell title="Referral Network">
            <div class="page-body">
                <div class="card">
                    <h1 class="card-title">"Referral Network"</h1>
                    {move || {
                        if loading.get() {
                            return view! { <PageSpinner/> }.into_any();
                        }
                        let snapshot = tree.get();
                        if snapshot.is_empty() {
                            return view! {
                                <p class="muted">"No referrals found in your network."</p>
                            }
                            .into_any();
                        }
                        let busy = loading_node.get();
                        view! {
                            <ul class="tree">
                                {snapshot
                                    .roots()
                                    .iter()
                                    .map(|code| render_node(&snapshot, code, &busy, handle_toggle))
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </Shell>
    }
}

/// Renders one node and, when it is expanded and loaded, its subtree. Works
/// over an immutable snapshot; interaction goes back through `on_toggle`.
fn render_node(
    snapshot: &ReferralTree,
    code: &str,
    busy: &Option<String>,
    on_toggle: impl Fn(String) + Copy + Send + 'static,
) -> AnyView {
    let Some(user) = snapshot.node(code) else {
        return ().into_any();
    };
    let name = user.name.clone();
    let code_label = user.referral_code.clone();
    let code_owned = code.to_string();
    let expanded = snapshot.is_expanded(code);
    let is_busy = busy.as_deref() == Some(code);

    let children = if expanded && snapshot.is_loaded(code) {
        match snapshot.children_of(code) {
            Some([]) => Some(
                view! { <p class="muted tree-empty">"No referrals"</p> }.into_any(),
            ),
            Some(codes) => Some(
                view! {
                    <ul class="tree">
                        {codes
                            .iter()
                            .map(|child| render_node(snapshot, child, busy, on_toggle))
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            ),
            None => None,
        }
    } else {
        None
    };

    view! {
        <li class="tree-node">
            <div class="tree-row">
                <button
                    class="tree-toggle"
                    disabled=is_busy
                    on:click=move |_| on_toggle(code_owned.clone())
                >
                    {if is_busy {
                        view! { <InlineSpinner/> }.into_any()
                    } else if expanded {
                        "\u{25be}".into_any()
                    } else {
                        "\u{25b8}".into_any()
                    }}
                </button>
                <span class="tree-name">{name}</span>
                <span class="tree-code mono">{code_label}</span>
            </div>
            {children}
        </li>
    }
    .into_any()
}
