//! Dashboard: referral-network statistics for the logged-in member.

use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use shared::dto::profile::ProfileAggregate;

use crate::components::{use_toast, PageSpinner, Shell};
use crate::services::api::ApiClient;
use crate::state::session::use_session;
use crate::utils::lifecycle::use_mounted;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let mounted = use_mounted();

    let (profile, set_profile) = signal(None::<ProfileAggregate>);
    let (loading, set_loading) = signal(true);

    if let (Some(user_id), Some(token)) = (session.user_id(), session.token()) {
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<ProfileAggregate>(&format!("/update/user/{}", user_id))
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(aggregate) => set_profile.set(Some(aggregate)),
                Err(e) => toast.error(format!("Failed to fetch profile details: {}", e)),
            }
            set_loading.set(false);
        });
    }

    let copy_referral_code = move |code: String| {
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&code);
            if JsFuture::from(promise).await.is_ok() {
                toast.success("Referral code copied!");
            }
        });
    };

    view! {
        <Shell title="Dashboard">
            {move || {
                if loading.get() {
                    return view! { <PageSpinner/> }.into_any();
                }
                let details = profile.get().map(|p| p.user_details).unwrap_or_default();
                let referral_code = details.referral_code.clone().unwrap_or_default();
                let code_for_copy = referral_code.clone();
                view! {
                    <div class="page-body">
                        <div class="stat-grid">
                            <div class="stat-card">
                                <h2 class="stat-title">"Rank"</h2>
                                <p class="stat-value">
                                    {details.rank.clone().unwrap_or_else(|| "-".to_string())}
                                </p>
                            </div>
                            <div class="stat-card">
                                <h2 class="stat-title">"Network Level"</h2>
                                <p class="stat-value">
                                    {details
                                        .level
                                        .map(|l| l.to_string())
                                        .unwrap_or_else(|| "-".to_string())}
                                </p>
                            </div>
                            <div class="stat-card">
                                <h2 class="stat-title">"Your Referral Code"</h2>
                                <div class="stat-inline">
                                    <p class="stat-value">{referral_code.clone()}</p>
                                    <button
                                        class="btn-icon"
                                        title="Copy referral code"
                                        on:click=move |_| copy_referral_code(code_for_copy.clone())
                                    >
                                        "\u{29c9}"
                                    </button>
                                </div>
                            </div>
                        </div>

                        <div class="card">
                            <h2 class="card-title">"Referral Guidelines"</h2>
                            <div class="guideline">
                                <h3>"Referral Structure"</h3>
                                <p>
                                    "You can refer as many people as you want. Your first 5 "
                                    "referrals are placed in your first level; further referrals "
                                    "spill into your second level, and you earn commissions from "
                                    "them as well."
                                </p>
                            </div>
                            <div class="guideline">
                                <h3>"Earning Potential"</h3>
                                <p>"Earn commission from your network up to 10 levels deep."</p>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </Shell>
    }
}
