//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <div class="landing-hero">
                <h1 class="landing-title">"refnet"</h1>
                <p class="landing-subtitle">
                    "Grow your network, earn on every level."
                </p>
                <p class="muted">
                    "Membership is by referral. Ask your referrer for their code "
                    "and a registration PIN to join."
                </p>
                <div class="landing-actions">
                    <A href="/login">
                        <span class="btn">"Login"</span>
                    </A>
                </div>
            </div>
        </div>
    }
}
