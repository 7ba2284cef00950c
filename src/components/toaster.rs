//! Toaster Component
//!
//! Renders the toast queue from the app store.

use leptos::prelude::*;

use crate::store::{store_dismiss, use_app_store, AppStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span>{toast.message}</span>
                            <button class="toast-close" on:click=move |_| store_dismiss(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
