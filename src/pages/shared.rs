//! Shared Page Helpers
//!
//! Filter option tables, status badges and the progress bar used by
//! several list pages.

use leptos::prelude::*;

use crate::download::save_bytes;
use crate::listing::ProgressFilter;
use crate::models::{AccountStatus, CourseLevel};
use crate::store::Toasts;

pub const ACCOUNT_STATUS_OPTIONS: [(&str, &str); 3] =
    [("active", "Active"), ("inactive", "Inactive"), ("pending", "Pending")];

pub const PROGRESS_OPTIONS: [(&str, &str); 2] = [("above", "Progress above 50%"), ("below", "Progress 50% or less")];

pub fn parse_account_status(key: &str) -> Option<AccountStatus> {
    match key {
        "" => None,
        key => Some(AccountStatus::from(key.to_string())),
    }
}

pub fn account_status_key(status: Option<&AccountStatus>) -> &'static str {
    match status {
        Some(AccountStatus::Active) => "active",
        Some(AccountStatus::Inactive) => "inactive",
        Some(AccountStatus::Pending) => "pending",
        _ => "",
    }
}

pub fn account_status_badge(status: &AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "badge badge-green",
        AccountStatus::Inactive => "badge badge-red",
        AccountStatus::Pending => "badge badge-blue",
        AccountStatus::Other(_) => "badge badge-gray",
    }
}

/// Select keys double as the lowercase level the backend stores
pub const LEVEL_OPTIONS: [(&str, &str); 3] =
    [("beginner", "Beginner"), ("intermediate", "Intermediate"), ("advanced", "Advanced")];

pub fn parse_level(key: &str) -> Option<CourseLevel> {
    match key {
        "" => None,
        key => Some(CourseLevel::from(key.to_string())),
    }
}

pub fn level_key(level: Option<&CourseLevel>) -> &'static str {
    match level {
        Some(CourseLevel::Beginner) => "beginner",
        Some(CourseLevel::Intermediate) => "intermediate",
        Some(CourseLevel::Advanced) => "advanced",
        _ => "",
    }
}

pub fn parse_progress_filter(key: &str) -> Option<ProgressFilter> {
    match key {
        "above" => Some(ProgressFilter::AboveHalf),
        "below" => Some(ProgressFilter::BelowHalf),
        _ => None,
    }
}

pub fn progress_filter_key(filter: Option<ProgressFilter>) -> &'static str {
    match filter {
        Some(ProgressFilter::AboveHalf) => "above",
        Some(ProgressFilter::BelowHalf) => "below",
        None => "",
    }
}

/// Percent for display, clamped to 0..=100
pub fn percent(progress: f64) -> u32 {
    progress.clamp(0.0, 100.0).round() as u32
}

#[component]
pub fn ProgressBar(progress: f64) -> impl IntoView {
    let value = percent(progress);
    view! {
        <div class="progress">
            <div class="progress-fill" style=format!("width: {}%", value)></div>
            <span class="progress-label">{format!("{}%", value)}</span>
        </div>
    }
}

/// Save downloaded PDF bytes, toasting on failure.
pub fn save_pdf(toasts: Toasts, bytes: &[u8], file_name: &str) {
    if let Err(err) = save_bytes(bytes, file_name, crate::download::PDF_MIME) {
        leptos::logging::error!("[DOWNLOAD] Could not save {}: {:?}", file_name, err);
        toasts.error("Could not save the downloaded file.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_status_keys_round_trip_through_select() {
        for (key, _) in ACCOUNT_STATUS_OPTIONS {
            let status = parse_account_status(key);
            assert_eq!(account_status_key(status.as_ref()), key);
        }
        assert_eq!(parse_account_status(""), None);
    }

    #[test]
    fn test_progress_filter_keys() {
        assert_eq!(parse_progress_filter("above"), Some(ProgressFilter::AboveHalf));
        assert_eq!(progress_filter_key(None), "");
        assert_eq!(parse_progress_filter("bogus"), None);
    }

    #[test]
    fn test_level_filter_keys() {
        for (key, label) in LEVEL_OPTIONS {
            let level = parse_level(key);
            assert_eq!(level.as_ref().map(CourseLevel::label), Some(label));
            assert_eq!(level_key(level.as_ref()), key);
        }
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_percent_clamps() {
        assert_eq!(percent(62.5), 63);
        assert_eq!(percent(140.0), 100);
        assert_eq!(percent(-3.0), 0);
    }
}
