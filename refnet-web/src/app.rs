//! Application root: router, session provider, toast provider, route guard.

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes, A},
    path,
};

use crate::components::ToastProvider;
use crate::pages::{
    DashboardPage, EarningsPage, LandingPage, LoginPage, NetworkPage, PinsPage, ProfilePage,
    RegisterPage, WithdrawPage, WithdrawRequestsPage,
};
use crate::state::session::{provide_session_context, use_session};

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();

    view! {
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=AuthRedirect/>
                    <Route path=path!("/home") view=LandingPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route
                        path=path!("/register")
                        view=|| view! { <RequireAuth><RegisterPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/profile")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/network")
                        view=|| view! { <RequireAuth><NetworkPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/earnings")
                        view=|| view! { <RequireAuth><EarningsPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/withdraw")
                        view=|| view! { <RequireAuth><WithdrawPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/withdraw-requests")
                        view=|| view! { <RequireAuth><WithdrawRequestsPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/pins")
                        view=|| view! { <RequireAuth><PinsPage/></RequireAuth> }
                    />
                </Routes>
            </Router>
        </ToastProvider>
    }
}

/// Route guard: unauthenticated visitors land on the login page.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}

/// `/` sends logged-in members to the dashboard, everyone else to the
/// public landing page.
#[component]
fn AuthRedirect() -> impl IntoView {
    let session = use_session();
    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LandingPage/> }
        >
            <Redirect path="/dashboard"/>
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="centered-page">
            <div class="card card-narrow">
                <h1>"404 - Page Not Found"</h1>
                <p class="muted">"The page you are looking for does not exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
