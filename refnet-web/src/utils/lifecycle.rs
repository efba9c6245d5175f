//! Mounted-flag guard for in-flight requests.
//!
//! Navigating away while a fetch is pending leaves the request running; when
//! it eventually resolves, its result must not be written into a disposed
//! view. Pages take a [`Mounted`] handle before spawning and check it before
//! applying the response.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Mounted(StoredValue<bool>);

impl Mounted {
    pub fn is_alive(&self) -> bool {
        self.0.try_get_value().unwrap_or(false)
    }
}

/// Registers a cleanup hook for the current reactive owner and returns a
/// handle that flips to dead on unmount.
pub fn use_mounted() -> Mounted {
    let alive = StoredValue::new(true);
    on_cleanup(move || {
        let _ = alive.try_set_value(false);
    });
    Mounted(alive)
}
