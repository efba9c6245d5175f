//! Profile page: personal details, address, and bank details.
//!
//! The aggregate is fetched fresh on every visit; there is no client-side
//! cache. Bank details are guarded by the account-number confirmation match
//! before anything is sent.

use leptos::prelude::*;

use shared::dto::profile::{
    AddressDetails, ProfileAggregate, UpdateBankDetailsRequest, UpdateProfileRequest,
};
use shared::validate;

use crate::components::{use_toast, PageSpinner, Shell};
use crate::services::api::ApiClient;
use crate::state::session::use_session;
use crate::utils::lifecycle::use_mounted;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    View,
    EditProfile,
    EditBank,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let mounted = use_mounted();

    let (profile, set_profile) = signal(ProfileAggregate::default());
    let (loading, set_loading) = signal(true);
    let (section, set_section) = signal(Section::View);
    let (saving, set_saving) = signal(false);

    // Profile form fields
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (gender, set_gender) = signal("M".to_string());
    let (father_name, set_father_name) = signal(String::new());
    let (husband_name, set_husband_name) = signal(String::new());
    let (address_line1, set_address_line1) = signal(String::new());
    let (address_line2, set_address_line2) = signal(String::new());
    let (city, set_city) = signal(String::new());
    let (state, set_state) = signal(String::new());
    let (pincode, set_pincode) = signal(String::new());
    let (country, set_country) = signal(String::new());

    // Bank form fields
    let (account_number, set_account_number) = signal(String::new());
    let (confirm_account_number, set_confirm_account_number) = signal(String::new());
    let (ifsc_code, set_ifsc_code) = signal(String::new());
    let (branch_name, set_branch_name) = signal(String::new());
    let (account_holder_name, set_account_holder_name) = signal(String::new());

    let populate_forms = move |aggregate: &ProfileAggregate| {
        let details = &aggregate.user_details;
        set_name.set(details.name.clone());
        set_email.set(details.email.clone());
        set_gender.set(details.gender.clone().unwrap_or_else(|| "M".to_string()));
        set_father_name.set(details.father_name.clone().unwrap_or_default());
        set_husband_name.set(details.husband_name.clone().unwrap_or_default());

        let address = aggregate.address_details.clone().unwrap_or_default();
        set_address_line1.set(address.address_line1);
        set_address_line2.set(address.address_line2);
        set_city.set(address.city);
        set_state.set(address.state);
        set_pincode.set(address.pincode);
        set_country.set(address.country);

        if let Some(bank) = &aggregate.bank_details {
            set_account_number.set(bank.account_number.clone());
            set_confirm_account_number.set(bank.account_number.clone());
            set_ifsc_code.set(bank.ifsc_code.clone());
            set_branch_name.set(bank.branch_name.clone());
            set_account_holder_name.set(bank.account_holder_name.clone());
        }
    };

    let fetch_profile = move || {
        let (Some(user_id), Some(token)) = (session.user_id(), session.token()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = ApiClient::with_token(token)
                .get::<ProfileAggregate>(&format!("/update/user/{}", user_id))
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(aggregate) => {
                    populate_forms(&aggregate);
                    set_profile.set(aggregate);
                }
                Err(e) => toast.error(format!("Failed to fetch profile details: {}", e)),
            }
            set_loading.set(false);
        });
    };
    fetch_profile();

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let (Some(user_id), Some(token)) = (session.user_id(), session.token()) else {
            return;
        };

        set_saving.set(true);
        leptos::task::spawn_local(async move {
            let request = UpdateProfileRequest {
                name: name.get_untracked(),
                email: email.get_untracked(),
                gender: gender.get_untracked(),
                father_name: father_name.get_untracked(),
                husband_name: husband_name.get_untracked(),
                address: AddressDetails {
                    address_line1: address_line1.get_untracked(),
                    address_line2: address_line2.get_untracked(),
                    city: city.get_untracked(),
                    state: state.get_untracked(),
                    pincode: pincode.get_untracked(),
                    country: country.get_untracked(),
                },
            };
            let result = ApiClient::with_token(token)
                .put::<_, serde_json::Value>(&format!("/update/user/{}", user_id), &request)
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    toast.success("Profile Updated Successfully!");
                    set_section.set(Section::View);
                    fetch_profile();
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    let on_bank_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        if let Err(e) = validate::bank_details(
            &account_number.get(),
            &confirm_account_number.get(),
            &ifsc_code.get(),
        ) {
            toast.error(e.to_string());
            return;
        }
        let (Some(user_id), Some(token)) = (session.user_id(), session.token()) else {
            return;
        };

        set_saving.set(true);
        leptos::task::spawn_local(async move {
            let request = UpdateBankDetailsRequest {
                account_number: account_number.get_untracked(),
                account_holder_name: account_holder_name.get_untracked(),
                branch_name: branch_name.get_untracked(),
                ifsc_code: ifsc_code.get_untracked(),
            };
            let result = ApiClient::with_token(token)
                .put::<_, serde_json::Value>(
                    &format!("/update/user/{}/bank-details", user_id),
                    &request,
                )
                .await;
            if !mounted.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    toast.success("Bank Details Updated Successfully!");
                    set_section.set(Section::View);
                    fetch_profile();
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    let text_input = move |label: &'static str,
                           value: ReadSignal<String>,
                           setter: WriteSignal<String>| {
        view! {
            <label class="form-label">{label}</label>
            <input
                class="form-input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| setter.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <Shell title="Profile">
            {move || {
                if loading.get() {
                    return view! { <PageSpinner/> }.into_any();
                }
                match section.get() {
                    Section::View => {
                        let aggregate = profile.get();
                        let details = aggregate.user_details.clone();
                        let bank = aggregate.bank_details.clone();
                        view! {
                            <div class="page-body">
                                <div class="card">
                                    <h1 class="card-title">"Profile"</h1>
                                    <div class="profile-summary">
                                        <div class="avatar">
                                            {details.gender.clone().unwrap_or_else(|| "M".to_string())}
                                        </div>
                                        <div class="profile-fields">
                                            <p><strong>"Name: "</strong>{details.name.clone()}</p>
                                            <p><strong>"Email: "</strong>{details.email.clone()}</p>
                                            {details
                                                .mobile_number
                                                .clone()
                                                .map(|m| view! {
                                                    <p><strong>"Mobile Number: "</strong>{m}</p>
                                                })}
                                            {details
                                                .referral_code
                                                .clone()
                                                .map(|c| view! {
                                                    <p><strong>"Referral Code: "</strong>{c}</p>
                                                })}
                                        </div>
                                    </div>

                                    {bank
                                        .map(|bank| {
                                            view! {
                                                <div class="profile-bank">
                                                    <h2>"Bank Details"</h2>
                                                    <p>
                                                        <strong>"Account Holder: "</strong>
                                                        {bank.account_holder_name}
                                                    </p>
                                                    <p>
                                                        <strong>"Account Number: "</strong>
                                                        {bank.account_number}
                                                    </p>
                                                    <p><strong>"IFSC: "</strong>{bank.ifsc_code}</p>
                                                    <p><strong>"Branch: "</strong>{bank.branch_name}</p>
                                                </div>
                                            }
                                        })}

                                    <div class="action-row">
                                        <button
                                            class="btn"
                                            on:click=move |_| set_section.set(Section::EditProfile)
                                        >
                                            "Edit Profile"
                                        </button>
                                        <button
                                            class="btn btn-secondary"
                                            on:click=move |_| set_section.set(Section::EditBank)
                                        >
                                            "Edit Bank Details"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                    Section::EditProfile => view! {
                        <div class="page-body">
                            <div class="card">
                                <h1 class="card-title">"Edit Profile"</h1>
                                <form class="form" on:submit=on_profile_submit>
                                    {text_input("Name", name, set_name)}
                                    {text_input("Email", email, set_email)}

                                    <label class="form-label">"Gender"</label>
                                    <select
                                        class="form-input"
                                        prop:value=move || gender.get()
                                        on:change=move |ev| set_gender.set(event_target_value(&ev))
                                    >
                                        <option value="M">"Male"</option>
                                        <option value="F">"Female"</option>
                                    </select>

                                    {text_input("Father's Name", father_name, set_father_name)}
                                    {text_input("Husband's Name", husband_name, set_husband_name)}
                                    {text_input("Address Line 1", address_line1, set_address_line1)}
                                    {text_input("Address Line 2", address_line2, set_address_line2)}
                                    {text_input("City", city, set_city)}
                                    {text_input("State", state, set_state)}
                                    {text_input("Pincode", pincode, set_pincode)}
                                    {text_input("Country", country, set_country)}

                                    <div class="action-row">
                                        <button
                                            class="btn"
                                            type="submit"
                                            disabled=move || saving.get()
                                        >
                                            {move || if saving.get() { "Saving..." } else { "Save" }}
                                        </button>
                                        <button
                                            class="btn btn-secondary"
                                            type="button"
                                            on:click=move |_| set_section.set(Section::View)
                                        >
                                            "Cancel"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                    .into_any(),
                    Section::EditBank => view! {
                        <div class="page-body">
                            <div class="card">
                                <h1 class="card-title">"Edit Bank Details"</h1>
                                <form class="form" on:submit=on_bank_submit>
                                    {text_input(
                                        "Account Holder Name",
                                        account_holder_name,
                                        set_account_holder_name,
                                    )}
                                    {text_input("Account Number", account_number, set_account_number)}
                                    {text_input(
                                        "Confirm Account Number",
                                        confirm_account_number,
                                        set_confirm_account_number,
                                    )}
                                    {text_input("IFSC Code", ifsc_code, set_ifsc_code)}
                                    {text_input("Branch Name", branch_name, set_branch_name)}

                                    <div class="action-row">
                                        <button
                                            class="btn"
                                            type="submit"
                                            disabled=move || saving.get()
                                        >
                                            {move || if saving.get() { "Saving..." } else { "Save" }}
                                        </button>
                                        <button
                                            class="btn btn-secondary"
                                            type="button"
                                            on:click=move |_| set_section.set(Section::View)
                                        >
                                            "Cancel"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </Shell>
    }
}
