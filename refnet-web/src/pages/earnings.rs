//! Earnings overview: direct/indirect commission breakdown.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use shared::dto::profile::EarningsSummary;
use shared::utils::format_currency;

use crate::components::{use_toast, PageSpinner, Shell};
use crate::services::api::ApiClient;
use crate::state::session::use_session;
use crate::utils::lifecycle::use_mounted;

#[component]
pub fn EarningsPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let mounted = use_mounted();
    let navigate = use_navigate();

    let (earnings, set_earnings) = signal(None::<EarningsSummary>);
    let (loading, set_loading) = signal(true);

    if let (Some(user_id), Some(token)) = (session.user_id(), session.token()) {
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<EarningsSummary>(&format!("/update/user/wallet/{}", user_id))
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(summary) => set_earnings.set(Some(summary)),
                Err(e) => toast.error(format!(
                    "Failed to fetch earnings, please try again after some time! ({})",
                    e
                )),
            }
            set_loading.set(false);
        });
    }

    let nav_withdraw = navigate.clone();
    let nav_requests = navigate;

    view! {
        <Shell title="My Earnings">
            {move || {
                if loading.get() {
                    return view! { <PageSpinner/> }.into_any();
                }
                let summary = earnings.get().unwrap_or_default();
                let nav_withdraw = nav_withdraw.clone();
                let nav_requests = nav_requests.clone();
                view! {
                    <div class="page-body">
                        <div class="page-header">
                            <h1>"My Earnings"</h1>
                            <p class="muted">"Track your earnings and financial performance"</p>
                        </div>

                        <div class="stat-grid">
                            <div class="stat-card">
                                <h2 class="stat-title">"Direct Referral Income"</h2>
                                <p class="stat-value">
                                    {format_currency(summary.direct_referral_income)}
                                </p>
                            </div>
                            <div class="stat-card">
                                <h2 class="stat-title">"Indirect Referral Income"</h2>
                                <p class="stat-value">
                                    {format_currency(summary.indirect_referral_income)}
                                </p>
                            </div>
                            <div class="stat-card">
                                <h2 class="stat-title">"Total Referral Income"</h2>
                                <p class="stat-value">{format_currency(summary.total())}</p>
                            </div>
                        </div>

                        <div class="action-grid">
                            <button
                                class="btn"
                                on:click=move |_| nav_withdraw("/withdraw", Default::default())
                            >
                                "Withdraw Earnings"
                            </button>
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| {
                                    nav_requests("/withdraw-requests", Default::default())
                                }
                            >
                                "View Withdrawal Requests"
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </Shell>
    }
}
