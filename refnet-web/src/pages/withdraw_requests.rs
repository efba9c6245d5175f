//! Admin review of withdrawal requests.

use leptos::prelude::*;

use shared::dto::profile::ProfileAggregate;
use shared::dto::withdraw::{
    ReviewWithdrawalRequest, WithdrawalRequestPage, WithdrawalStatus,
};
use shared::utils::{format_currency, format_datetime};

use crate::components::{use_toast, PageSpinner, Shell};
use crate::services::api::ApiClient;
use crate::state::session::use_session;
use crate::utils::lifecycle::use_mounted;

#[component]
pub fn WithdrawRequestsPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let mounted = use_mounted();

    let (page, set_page) = signal(WithdrawalRequestPage::default());
    let (loading, set_loading) = signal(true);
    let (reviewing, set_reviewing) = signal(None::<String>);
    let (is_admin, set_is_admin) = signal(false);

    // Approve/deny buttons are shown to admins only; the server enforces the
    // real authorization on the review endpoint.
    if let (Some(user_id), Some(token)) = (session.user_id(), session.token()) {
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<ProfileAggregate>(&format!("/update/user/{}", user_id))
                .await;
            if !mounted.is_alive() {
                return;
            }
            if let Ok(aggregate) = result {
                set_is_admin.set(aggregate.is_admin());
            }
        });
    }

    let fetch_requests = move || {
        let Some(token) = session.token() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<WithdrawalRequestPage>("/withdraw/withdrawal/requests")
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(data) => set_page.set(data),
                Err(e) => toast.error(format!("Failed to fetch withdrawal requests: {}", e)),
            }
            set_loading.set(false);
        });
    };
    fetch_requests();

    let review = move |request_id: String, status: WithdrawalStatus| {
        let Some(token) = session.token() else {
            return;
        };
        set_reviewing.set(Some(request_id.clone()));
        leptos::task::spawn_local(async move {
            let body = ReviewWithdrawalRequest {
                withdrawal_request_id: request_id,
                status,
            };
            let result = ApiClient::with_token(token)
                .post::<_, serde_json::Value>("/withdraw/withdrawal/approve-or-deny", &body)
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    toast.success(format!(
                        "Withdrawal request {} successfully",
                        status.label()
                    ));
                    fetch_requests();
                }
                Err(e) => toast.error(format!("Failed to update withdrawal status: {}", e)),
            }
            set_reviewing.set(None);
        });
    };

    view! {
        <Shell title="Withdrawal Requests">
            {move || {
                if loading.get() {
                    return view! { <PageSpinner/> }.into_any();
                }
                let data = page.get();
                let shown = data.withdrawal_requests.len();
                view! {
                    <div class="page-body">
                        <div class="card">
                            <div class="card-header-row">
                                <h2 class="card-title">"Withdrawal Requests"</h2>
                                {data.pagination.map(|p| {
                                    view! {
                                        <span class="muted">
                                            {format!("Showing {} of {} requests", shown, p.total)}
                                        </span>
                                    }
                                })}
                            </div>

                            {if data.withdrawal_requests.is_empty() {
                                view! {
                                    <p class="empty-note">"No withdrawal requests found"</p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"User"</th>
                                                <th>"Email"</th>
                                                <th>"Amount"</th>
                                                <th>"Deduction"</th>
                                                <th>"Net Amount"</th>
                                                <th>"Date"</th>
                                                <th>"Status"</th>
                                                <th>"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {data
                                                .withdrawal_requests
                                                .into_iter()
                                                .map(|request| {
                                                    let id_approve = request.id.clone();
                                                    let id_deny = request.id.clone();
                                                    let in_review = {
                                                        let id = request.id.clone();
                                                        move || reviewing.get().as_deref() == Some(id.as_str())
                                                    };
                                                    let status_class = match request.status {
                                                        WithdrawalStatus::Pending => "badge badge-pending",
                                                        WithdrawalStatus::Approved => "badge badge-approved",
                                                        WithdrawalStatus::Denied => "badge badge-denied",
                                                    };
                                                    view! {
                                                        <tr>
                                                            <td>{request.user.name.clone()}</td>
                                                            <td>{request.user.email.clone()}</td>
                                                            <td>{format_currency(request.amount_requested)}</td>
                                                            <td>{format_currency(request.deduction_amount)}</td>
                                                            <td>{format_currency(request.net_amount)}</td>
                                                            <td>{format_datetime(&request.created_at)}</td>
                                                            <td>
                                                                <span class=status_class>
                                                                    {request.status.label()}
                                                                </span>
                                                            </td>
                                                            <td>
                                                                {(is_admin.get()
                                                                    && request.status == WithdrawalStatus::Pending)
                                                                    .then(|| {
                                                                        let in_review_a = in_review.clone();
                                                                        let in_review_d = in_review.clone();
                                                                        view! {
                                                                            <div class="action-row">
                                                                                <button
                                                                                    class="btn btn-small btn-approve"
                                                                                    disabled=in_review_a
                                                                                    on:click=move |_| review(
                                                                                        id_approve.clone(),
                                                                                        WithdrawalStatus::Approved,
                                                                                    )
                                                                                >
                                                                                    "Approve"
                                                                                </button>
                                                                                <button
                                                                                    class="btn btn-small btn-deny"
                                                                                    disabled=in_review_d
                                                                                    on:click=move |_| review(
                                                                                        id_deny.clone(),
                                                                                        WithdrawalStatus::Denied,
                                                                                    )
                                                                                >
                                                                                    "Deny"
                                                                                </button>
                                                                            </div>
                                                                        }
                                                                    })}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }}
                        </div>
                    </div>
                }
                .into_any()
            }}
        </Shell>
    }
}
