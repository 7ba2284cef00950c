//! UI Components
//!
//! Reusable Leptos components.

mod confirm_modal;
mod countdown_banner;
mod form_field;
mod link;
mod list_controls;
mod nav;
mod pagination;
mod status;
mod toaster;

pub use confirm_modal::ConfirmModal;
pub use countdown_banner::CountdownBanner;
pub use form_field::{FilePicker, TextArea, TextField};
pub use link::Link;
pub use list_controls::{FilterSelect, SearchInput, SortHeader};
pub use nav::{DashboardShell, PublicNav};
pub use pagination::Pagination;
pub use status::{EmptyState, Loading, NotFoundCard};
pub use toaster::Toaster;
