//! Transient notifications.
//!
//! Single reporting channel for asynchronous outcomes: pages push a
//! success/error/warning message and the provider renders and auto-dismisses
//! it. Every failure path in the app goes through here.

use leptos::prelude::*;

use crate::utils::constants::TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Warning => "toast toast-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    id: u32,
    level: ToastLevel,
    message: String,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastLevel::Warning, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.toasts.update(|list| list.push(Toast { id, level, message }));

        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            // The provider lives for the whole app, but don't panic if a
            // toast outlives a test harness teardown.
            let _ = toasts.try_update(|list| list.retain(|t| t.id != id));
        });
    }
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let context = ToastContext {
        toasts: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(context);

    view! {
        {children()}
        <div class="toast-container">
            {move || {
                context
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        view! { <div class=toast.level.class()>{toast.message}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
