//! Withdrawal submission against currently displayed total earnings.
//!
//! The amount guard runs client-side before any network call; the server
//! remains the authority on the actual balance.

use leptos::prelude::*;

use shared::dto::profile::EarningsSummary;
use shared::dto::withdraw::NewWithdrawalRequest;
use shared::utils::format_currency;
use shared::validate;

use crate::components::{use_toast, PageSpinner, Shell};
use crate::services::api::ApiClient;
use crate::state::session::use_session;
use crate::utils::lifecycle::use_mounted;

#[component]
pub fn WithdrawPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let mounted = use_mounted();

    let (earnings, set_earnings) = signal(None::<EarningsSummary>);
    let (loading, set_loading) = signal(true);
    let (amount, set_amount) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

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

    let on_withdraw = move |_| {
        if submitting.get() {
            return;
        }
        let total = earnings.get().map(|e| e.total()).unwrap_or(0.0);
        let amount_value = match validate::withdraw_amount(&amount.get(), total) {
            Ok(v) => v,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };
        let (Some(user_id), Some(token)) = (session.user_id(), session.token()) else {
            return;
        };

        set_submitting.set(true);
        leptos::task::spawn_local(async move {
            let request = NewWithdrawalRequest {
                user_id,
                amount_requested: amount_value,
            };
            let result = ApiClient::with_token(token)
                .post::<_, serde_json::Value>("/withdraw/withdrawal", &request)
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    toast.success("Withdrawal request submitted successfully!");
                    set_amount.set(String::new());
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Shell title="Withdraw Earnings">
            {move || {
                if loading.get() {
                    return view! { <PageSpinner/> }.into_any();
                }
                let total = earnings.get().map(|e| e.total()).unwrap_or(0.0);
                view! {
                    <div class="centered-page">
                        <div class="card card-narrow">
                            <h2 class="card-title">"Withdraw Earnings"</h2>
                            <p class="withdraw-available">
                                "Available Earnings: "
                                <span class="amount-positive">{format_currency(total)}</span>
                            </p>

                            <label class="form-label" for="withdraw-amount">
                                "Enter Withdrawal Amount"
                            </label>
                            <input
                                id="withdraw-amount"
                                class="form-input"
                                type="text"
                                placeholder="Enter amount"
                                prop:value=move || amount.get()
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                            />

                            <button
                                class="btn btn-block"
                                disabled=move || submitting.get()
                                on:click=on_withdraw
                            >
                                {move || if submitting.get() { "Processing..." } else { "Withdraw" }}
                            </button>

                            <p class="muted form-footnote">
                                "Please ensure the entered amount does not exceed your "
                                "available earnings."
                            </p>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </Shell>
    }
}
