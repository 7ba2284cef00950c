//! Link Component
//!
//! In-app anchor that navigates through the router instead of reloading.

use leptos::prelude::*;

use crate::context::use_router;
use crate::routes::Route;

/// Anchor for an in-app route. Modifier clicks fall through to the browser.
#[component]
pub fn Link(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.path();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
                    return;
                }
                ev.prevent_default();
                router.navigate(to.clone());
            }
        >
            {children()}
        </a>
    }
}
