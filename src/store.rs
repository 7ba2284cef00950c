//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! toast queue; page data stays local to each page.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// How long the toast stays up
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::Info | Self::Success => 4_000,
            Self::Error => 6_000,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Last toast ID handed out
    pub last_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Toast Queue
// ========================

/// Append a toast under a fresh ID and return the ID
fn push_toast(toasts: &mut Vec<Toast>, last_id: u32, kind: ToastKind, message: String) -> u32 {
    let id = last_id.wrapping_add(1);
    toasts.push(Toast { id, kind, message });
    id
}

fn remove_toast(toasts: &mut Vec<Toast>, id: u32) {
    toasts.retain(|toast| toast.id != id);
}

/// Show a toast and schedule its dismissal
pub fn store_notify(store: &AppStore, kind: ToastKind, message: impl Into<String>) {
    let last_id = store.last_toast_id().get_untracked();
    let id = push_toast(&mut store.toasts().write(), last_id, kind, message.into());
    store.last_toast_id().set(id);
    let store = *store;
    Timeout::new(kind.duration_ms(), move || store_dismiss(&store, id)).forget();
}

pub fn store_dismiss(store: &AppStore, id: u32) {
    // The store may be gone if the app unmounted before the timer fired
    if let Some(mut toasts) = store.toasts().try_write() {
        remove_toast(&mut toasts, id);
    }
}

/// Copyable handle for raising toasts from event handlers and tasks,
/// where the context is no longer reachable.
#[derive(Clone, Copy)]
pub struct Toasts(AppStore);

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        store_notify(&self.0, ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        store_notify(&self.0, ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        store_notify(&self.0, ToastKind::Info, message);
    }
}

pub fn use_toasts() -> Toasts {
    Toasts(use_app_store())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove_toasts() {
        let mut toasts = Vec::new();
        let first = push_toast(&mut toasts, 0, ToastKind::Success, "Saved".into());
        let second = push_toast(&mut toasts, first, ToastKind::Error, "Failed".into());
        assert_ne!(first, second);

        remove_toast(&mut toasts, first);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Failed");

        remove_toast(&mut toasts, 99);
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn test_error_toasts_linger() {
        assert_eq!(ToastKind::Success.duration_ms(), 4_000);
        assert!(ToastKind::Error.duration_ms() > ToastKind::Info.duration_ms());
    }
}
