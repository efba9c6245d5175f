//! UI Components

pub mod shell;
pub mod sidebar;
pub mod spinner;
pub mod toast;

pub use shell::Shell;
pub use sidebar::Sidebar;
pub use spinner::{InlineSpinner, PageSpinner};
pub use toast::{use_toast, ToastProvider};
