//! Pin management: the voucher table plus the create and transfer dialogs.
//!
//! Pin creation is only offered to admin accounts; the gate is a UI
//! convenience and the server enforces the real authorization.

use leptos::prelude::*;

use shared::dto::pin::{CreatePinRequest, Package, Pin, PinList, PinStatus, TransferPinRequest};
use shared::dto::profile::ProfileAggregate;
use shared::utils::{format_currency, format_date};
use shared::validate;

use crate::components::{use_toast, InlineSpinner, PageSpinner, Shell};
use crate::services::api::ApiClient;
use crate::state::session::use_session;
use crate::utils::lifecycle::use_mounted;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Dialog {
    None,
    Create,
    Transfer,
}

#[component]
pub fn PinsPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let mounted = use_mounted();

    let (pins, set_pins) = signal(Vec::<Pin>::new());
    let (loading, set_loading) = signal(true);
    let (is_admin, set_is_admin) = signal(false);
    let (dialog, set_dialog) = signal(Dialog::None);

    // Create dialog
    let (packages, set_packages) = signal(Vec::<Package>::new());
    let (selected_package, set_selected_package) = signal(String::new());
    let (creating, set_creating) = signal(false);

    // Transfer dialog
    let (transfer_pin, set_transfer_pin) = signal(String::new());
    let (lookup_mobile, set_lookup_mobile) = signal(String::new());
    let (recipient, set_recipient) = signal(None::<shared::dto::pin::LookupUser>);
    let (looking_up, set_looking_up) = signal(false);
    let (transferring, set_transferring) = signal(false);

    let fetch_pins = move || {
        let (Some(user_id), Some(token)) = (session.user_id(), session.token()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<PinList>(&format!("/pin/pins/{}", user_id))
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(list) => set_pins.set(list.pins),
                Err(e) => toast.error(format!("Failed to fetch pins: {}", e)),
            }
            set_loading.set(false);
        });
    };
    fetch_pins();

    // Admin status drives the Create Pin button only.
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

    let open_create = move |_| {
        set_selected_package.set(String::new());
        set_dialog.set(Dialog::Create);
        let Some(token) = session.token() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<Vec<Package>>("/packages/get/all")
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(list) => set_packages.set(list),
                Err(e) => toast.error(format!("Failed to fetch packages: {}", e)),
            }
        });
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if creating.get() {
            return;
        }
        let package_id = selected_package.get();
        if package_id.is_empty() {
            toast.warning("Please select a package.");
            return;
        }
        let (Some(user_id), Some(token)) = (session.user_id(), session.token()) else {
            return;
        };
        set_creating.set(true);
        leptos::task::spawn_local(async move {
            let request = CreatePinRequest {
                user_id,
                package_id,
            };
            let result = ApiClient::with_token(token)
                .post::<_, serde_json::Value>("/pin/create", &request)
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    toast.success("Pin created successfully!");
                    set_dialog.set(Dialog::None);
                    fetch_pins();
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_creating.set(false);
        });
    };

    let open_transfer = move |pin_code: String| {
        set_transfer_pin.set(pin_code);
        set_lookup_mobile.set(String::new());
        set_recipient.set(None);
        set_dialog.set(Dialog::Transfer);
    };

    let on_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if looking_up.get() {
            return;
        }
        let mobile = lookup_mobile.get();
        if let Err(e) = validate::mobile_number(&mobile) {
            toast.error(e.to_string());
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        set_looking_up.set(true);
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<shared::dto::pin::LookupUser>(&format!(
                    "/users/user/details?mobileNumber={}",
                    mobile
                ))
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(user) => set_recipient.set(Some(user)),
                Err(_) => toast.error("No user found with that mobile number."),
            }
            set_looking_up.set(false);
        });
    };

    let on_transfer = move |_| {
        if transferring.get() {
            return;
        }
        let Some(user) = recipient.get() else {
            return;
        };
        let Some(token) = session.token() else {
            return;
        };
        set_transferring.set(true);
        leptos::task::spawn_local(async move {
            let request = TransferPinRequest {
                pin: transfer_pin.get_untracked(),
                user_id: user.id,
            };
            let result = ApiClient::with_token(token)
                .post::<_, serde_json::Value>("/pin/transfer-pin", &request)
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    toast.success("Pin transferred successfully!");
                    set_dialog.set(Dialog::None);
                    fetch_pins();
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_transferring.set(false);
        });
    };

    view! {
        <Shell title="Pin Management">
            <div class="page-body">
                <div class="card">
                    <div class="card-header">
                        <h1 class="card-title">"Pin Management"</h1>
                        <Show when=move || is_admin.get()>
                            <button class="btn" on:click=open_create>"Create Pin"</button>
                        </Show>
                    </div>

                    {move || {
                        if loading.get() {
                            return view! { <PageSpinner/> }.into_any();
                        }
                        let rows = pins.get();
                        if rows.is_empty() {
                            return view! {
                                <p class="muted">"No pins found."</p>
                            }
                            .into_any();
                        }
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Pin Code"</th>
                                        <th>"Status"</th>
                                        <th>"Validity"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|pin| {
                                            let transferable = pin.status == PinStatus::Available;
                                            let pin_code = pin.pin_code.clone();
                                            view! {
                                                <tr>
                                                    <td class="mono">{pin.pin_code.clone()}</td>
                                                    <td>
                                                        <span class=format!(
                                                            "badge badge-{}",
                                                            pin.status.label(),
                                                        )>{pin.status.label()}</span>
                                                    </td>
                                                    <td>
                                                        {pin
                                                            .validity_date
                                                            .as_deref()
                                                            .map(format_date)
                                                            .unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn btn-small"
                                                            disabled=!transferable
                                                            on:click=move |_| open_transfer(
                                                                pin_code.clone(),
                                                            )
                                                        >
                                                            "Transfer"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    }}
                </div>

                {move || match dialog.get() {
                    Dialog::None => ().into_any(),
                    Dialog::Create => view! {
                        <div class="dialog-backdrop">
                            <div class="dialog card">
                                <h2 class="card-title">"Create Pin"</h2>
                                <form class="form" on:submit=on_create>
                                    <label class="form-label">"Package"</label>
                                    <select
                                        class="form-input"
                                        prop:value=move || selected_package.get()
                                        on:change=move |ev| {
                                            set_selected_package.set(event_target_value(&ev))
                                        }
                                    >
                                        <option value="">"Select a package"</option>
                                        {move || {
                                            packages
                                                .get()
                                                .into_iter()
                                                .map(|p| {
                                                    view! {
                                                        <option value=p.id.clone()>
                                                            {format!(
                                                                "{} ({})",
                                                                p.product_name,
                                                                format_currency(p.product_price),
                                                            )}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </select>
                                    <div class="action-row">
                                        <button
                                            class="btn"
                                            type="submit"
                                            disabled=move || creating.get()
                                        >
                                            {move || {
                                                if creating.get() { "Creating..." } else { "Create" }
                                            }}
                                        </button>
                                        <button
                                            class="btn btn-secondary"
                                            type="button"
                                            on:click=move |_| set_dialog.set(Dialog::None)
                                        >
                                            "Cancel"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                    .into_any(),
                    Dialog::Transfer => view! {
                        <div class="dialog-backdrop">
                            <div class="dialog card">
                                <h2 class="card-title">"Transfer Pin"</h2>
                                <p class="mono">{move || transfer_pin.get()}</p>
                                <form class="form" on:submit=on_lookup>
                                    <label class="form-label">"Recipient Mobile Number"</label>
                                    <input
                                        class="form-input"
                                        type="text"
                                        prop:value=move || lookup_mobile.get()
                                        on:input=move |ev| {
                                            set_lookup_mobile.set(event_target_value(&ev))
                                        }
                                    />
                                    <button
                                        class="btn btn-secondary"
                                        type="submit"
                                        disabled=move || looking_up.get()
                                    >
                                        {move || if looking_up.get() { "Searching..." } else { "Find User" }}
                                    </button>
                                </form>

                                {move || {
                                    recipient
                                        .get()
                                        .map(|user| {
                                            view! {
                                                <div class="referrer-box">
                                                    <p><strong>{user.name.clone()}</strong></p>
                                                    <p class="muted">{user.email.clone()}</p>
                                                    <p class="muted">{user.mobile_number.clone()}</p>
                                                </div>
                                            }
                                        })
                                }}

                                <div class="action-row">
                                    <button
                                        class="btn"
                                        disabled=move || recipient.get().is_none() || transferring.get()
                                        on:click=on_transfer
                                    >
                                        {move || {
                                            if transferring.get() {
                                                view! { <InlineSpinner/> }.into_any()
                                            } else {
                                                "Transfer Pin".into_any()
                                            }
                                        }}
                                    </button>
                                    <button
                                        class="btn btn-secondary"
                                        on:click=move |_| set_dialog.set(Dialog::None)
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </Shell>
    }
}
