//! Login page: credential exchange and session creation.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use shared::dto::auth::{AuthSession, LoginRequest, LoginResponse};

use crate::components::{use_toast, InlineSpinner};
use crate::services::api::ApiClient;
use crate::state::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let (username_or_email, set_username_or_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let identifier = username_or_email.get();
        let pass = password.get();
        if identifier.trim().is_empty() || pass.is_empty() {
            toast.warning("Enter your username/email and password.");
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = LoginRequest {
                username_or_email: identifier,
                password: pass,
            };
            match ApiClient::new()
                .post_raw::<_, LoginResponse>("/auth/login", &request)
                .await
            {
                Ok(response) => {
                    session.log_in(AuthSession {
                        user: response.data.user,
                        token: response.token,
                    });
                    toast.success("Logged in successfully!");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => toast.error(e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="centered-page">
            <div class="card card-narrow">
                <h1 class="card-title">"Login"</h1>
                <form class="form" on:submit=on_submit>
                    <label class="form-label" for="username-or-email">
                        "Username or Email"
                    </label>
                    <input
                        id="username-or-email"
                        class="form-input"
                        type="text"
                        placeholder="Enter your username or email"
                        prop:value=move || username_or_email.get()
                        on:input=move |ev| set_username_or_email.set(event_target_value(&ev))
                    />

                    <label class="form-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="form-input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button class="btn btn-block" type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                view! { <InlineSpinner/> }.into_any()
                            } else {
                                view! { "Login" }.into_any()
                            }
                        }}
                    </button>
                </form>

                <p class="muted form-footnote">
                    "Don't have an account? Registration requires a referral "
                    "code and a PIN from an existing member."
                </p>
                <p class="muted form-footnote">
                    <A href="/home">"Back to home"</A>
                </p>
            </div>
        </div>
    }
}
