//! Member registration: referral-code lookup, referrer confirmation, then the
//! registration form with a PIN voucher from the current session's stock.

use leptos::prelude::*;

use shared::dto::auth::{ReferrerInfo, RegisterRequest};
use shared::dto::pin::{Pin, PinList};
use shared::validate;

use crate::components::{use_toast, InlineSpinner, Shell};
use crate::services::api::ApiClient;
use crate::state::session::use_session;
use crate::utils::lifecycle::use_mounted;
use crate::utils::url::get_query_param;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let mounted = use_mounted();

    let (step, set_step) = signal(1u8);
    let (referral_id, set_referral_id) =
        signal(get_query_param("referral").unwrap_or_default());
    let (referrer, set_referrer) = signal(None::<ReferrerInfo>);

    let (name, set_name) = signal(String::new());
    let (mobile_number, set_mobile_number) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (pin, set_pin) = signal(String::new());

    let (pins, set_pins) = signal(Vec::<Pin>::new());
    let (submitting, set_submitting) = signal(false);

    // Usable PINs from the logged-in member, offered in the dropdown.
    if let (Some(user_id), Some(token)) = (session.user_id(), session.token()) {
        leptos::task::spawn_local(async move {
            let client = ApiClient::with_token(token);
            match client.get::<PinList>(&format!("/pin/pins/{}", user_id)).await {
                Ok(list) if mounted.is_alive() => {
                    set_pins.set(
                        list.pins
                            .into_iter()
                            .filter(|p| p.status.is_usable())
                            .collect(),
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("failed to fetch pins: {}", e);
                    if mounted.is_alive() {
                        toast.error(e.to_string());
                    }
                }
            }
        });
    }

    let on_referral_submit = move |_| {
        let code = referral_id.get();
        if validate::referral_code(&code).is_err() {
            toast.warning("Referral ID is required.");
            return;
        }
        set_submitting.set(true);
        leptos::task::spawn_local(async move {
            let result = ApiClient::new()
                .get::<ReferrerInfo>(&format!("/auth/user/name/{}", code.trim()))
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(info) => {
                    set_referrer.set(Some(info));
                    set_step.set(2);
                }
                Err(_) => toast.error("Invalid Referral ID. Please try again."),
            }
            set_submitting.set(false);
        });
    };

    let (name_error, set_name_error) = signal(None::<String>);
    let (mobile_error, set_mobile_error) = signal(None::<String>);
    let (email_error, set_email_error) = signal(None::<String>);
    let (password_error, set_password_error) = signal(None::<String>);
    let (confirm_error, set_confirm_error) = signal(None::<String>);

    let on_register_submit = move |_| {
        let name_v = name.get();
        let mobile_v = mobile_number.get();
        let email_v = email.get();
        let password_v = password.get();
        let confirm_v = confirm_password.get();
        let pin_v = pin.get();

        set_name_error.set(validate::name(&name_v).err().map(|e| e.to_string()));
        set_mobile_error.set(validate::mobile_number(&mobile_v).err().map(|e| e.to_string()));
        set_email_error.set(validate::email(&email_v).err().map(|e| e.to_string()));
        set_password_error.set(validate::password(&password_v).err().map(|e| e.to_string()));
        set_confirm_error.set(
            validate::password_confirmation(&password_v, &confirm_v)
                .err()
                .map(|e| e.to_string()),
        );

        let any_field_error = name_error.get_untracked().is_some()
            || mobile_error.get_untracked().is_some()
            || email_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
            || confirm_error.get_untracked().is_some();
        if any_field_error {
            return;
        }
        if validate::pin_selection(&pin_v).is_err() {
            toast.warning("Select a PIN to complete registration.");
            return;
        }

        set_submitting.set(true);
        leptos::task::spawn_local(async move {
            let request = RegisterRequest {
                name: name_v,
                mobile_number: mobile_v,
                email: email_v,
                password: password_v,
                referral_code: referral_id.get_untracked().trim().to_string(),
                pin: pin_v,
            };
            let result = ApiClient::new()
                .post::<_, serde_json::Value>("/auth/register", &request)
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    toast.success("Registration Successful!");
                    set_step.set(1);
                    set_referrer.set(None);
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    let field_error = |error: ReadSignal<Option<String>>| {
        move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    view! {
        <Shell title="Register">
            <div class="centered-page">
                <div class="card card-narrow">
                    <StepIndicator step=step/>

                    {move || match step.get() {
                        1 => view! {
                            <div class="form">
                                <h2 class="card-title">"Enter Referral ID"</h2>
                                <p class="muted">"Please enter your referral code to continue"</p>
                                <input
                                    class="form-input"
                                    type="text"
                                    placeholder="Enter Referral ID"
                                    prop:value=move || referral_id.get()
                                    on:input=move |ev| set_referral_id.set(event_target_value(&ev))
                                />
                                <button
                                    class="btn btn-block"
                                    disabled=move || submitting.get()
                                    on:click=on_referral_submit
                                >
                                    {move || {
                                        if submitting.get() {
                                            view! { <InlineSpinner/> }.into_any()
                                        } else {
                                            view! { "Continue" }.into_any()
                                        }
                                    }}
                                </button>
                            </div>
                        }
                        .into_any(),
                        2 => view! {
                            <div class="form">
                                <h2 class="card-title">"Referrer Details"</h2>
                                <div class="referrer-box">
                                    <p class="referrer-name">
                                        {move || referrer.get().map(|r| r.name).unwrap_or_default()}
                                    </p>
                                </div>
                                <button class="btn btn-block" on:click=move |_| set_step.set(3)>
                                    "Continue to Registration"
                                </button>
                            </div>
                        }
                        .into_any(),
                        _ => view! {
                            <div class="form">
                                <h2 class="card-title">"Complete Registration"</h2>

                                <input
                                    class="form-input"
                                    type="text"
                                    placeholder="Full Name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                                {field_error(name_error)}

                                <input
                                    class="form-input"
                                    type="tel"
                                    placeholder="Mobile Number"
                                    prop:value=move || mobile_number.get()
                                    on:input=move |ev| set_mobile_number.set(event_target_value(&ev))
                                />
                                {field_error(mobile_error)}

                                <input
                                    class="form-input"
                                    type="email"
                                    placeholder="Email Address"
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                                {field_error(email_error)}

                                <input
                                    class="form-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                                {field_error(password_error)}

                                <input
                                    class="form-input"
                                    type="password"
                                    placeholder="Confirm Password"
                                    prop:value=move || confirm_password.get()
                                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                />
                                {field_error(confirm_error)}

                                <select
                                    class="form-input"
                                    on:change=move |ev| set_pin.set(event_target_value(&ev))
                                >
                                    <option value="" selected=true disabled=true>"Select PIN"</option>
                                    {move || {
                                        pins.get()
                                            .into_iter()
                                            .map(|p| {
                                                view! {
                                                    <option value=p.pin_code.clone()>{p.pin_code.clone()}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </select>

                                <button
                                    class="btn btn-block"
                                    disabled=move || submitting.get()
                                    on:click=on_register_submit
                                >
                                    {move || {
                                        if submitting.get() {
                                            view! { <InlineSpinner/> }.into_any()
                                        } else {
                                            view! { "Complete Registration" }.into_any()
                                        }
                                    }}
                                </button>
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </Shell>
    }
}

#[component]
fn StepIndicator(step: ReadSignal<u8>) -> impl IntoView {
    const STEPS: &[&str] = &["Referral", "Verify", "Register"];

    view! {
        <div class="step-indicator">
            {STEPS
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let number = (index + 1) as u8;
                    view! {
                        <div
                            class=move || {
                                if step.get() >= number {
                                    "step step-active"
                                } else {
                                    "step"
                                }
                            }
                            title=*label
                        >
                            {move || {
                                if step.get() > number {
                                    "\u{2713}".to_string()
                                } else {
                                    number.to_string()
                                }
                            }}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
