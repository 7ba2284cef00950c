//! Loading / Empty / Not Found placeholders

use leptos::prelude::*;

use crate::routes::Route;
use crate::components::Link;

#[component]
pub fn Loading(#[prop(into, default = "Loading...".to_string())] label: String) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
            <span>{label}</span>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="empty-state">{message}</div> }
}

/// Shown when a detail fetch returns 404 or the record is missing
#[component]
pub fn NotFoundCard(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    back_to: Route,
) -> impl IntoView {
    view! {
        <div class="not-found-card">
            <h2>{title}</h2>
            <p>{message}</p>
            <Link to=back_to class="btn btn-primary">"Go back"</Link>
        </div>
    }
}
