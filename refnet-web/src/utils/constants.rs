//! Application constants

/// Backend API base. All endpoint paths in `services::api` are relative to it.
pub const API_BASE: &str = "http://localhost:5000/api";

/// localStorage key the session provider persists the `{user, token}` pair
/// under. The route guard reads it synchronously on every navigation.
pub const SESSION_STORAGE_KEY: &str = "refnet.session";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4000;

/// Protected-page menu: label, route.
pub const MENU_ITEMS: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Profile", "/profile"),
    ("Referral Network", "/network"),
    ("Earnings", "/earnings"),
    ("Withdraw Earnings", "/withdraw"),
    ("Withdrawal Requests", "/withdraw-requests"),
    ("Pin Management", "/pins"),
    ("Register", "/register"),
];
