//! Session state management.
//!
//! One context owns the `{user, token}` pair and is the only reader/writer of
//! its durable copy in localStorage. Pages go through [`use_session`]; the
//! route guard reads the same signal the login page writes, so an expired or
//! cleared session redirects on the next navigation.

use leptos::prelude::*;
use shared::dto::auth::{AuthSession, UserInfo};
use web_sys::Storage;

use crate::utils::constants::SESSION_STORAGE_KEY;

/// Global session context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<AuthSession>>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            session: RwSignal::new(load_persisted()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.user.id.clone()))
    }

    pub fn referral_code(&self) -> Option<String> {
        self.session
            .with(|s| s.as_ref().map(|s| s.user.referral_code.clone()))
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.token.clone()))
    }

    /// Overwrites the session wholesale and persists it.
    pub fn log_in(&self, session: AuthSession) {
        persist(Some(&session));
        self.session.set(Some(session));
    }

    pub fn log_out(&self) {
        persist(None);
        self.session.set(None);
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<AuthSession> {
    let storage = local_storage()?;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            // A stale or hand-edited entry must not wedge the app on a
            // half-valid session.
            log::error!("discarding unreadable stored session: {}", e);
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
            None
        }
    }
}

fn persist(session: Option<&AuthSession>) {
    let Some(storage) = local_storage() else {
        return;
    };
    match session {
        Some(session) => {
            if let Ok(raw) = serde_json::to_string(session) {
                let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
            }
        }
        None => {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}
