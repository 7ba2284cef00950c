//! Form Fields
//!
//! Labelled inputs bound to a signal, disabled while a form submits.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into, default = "text".to_string())] input_type: String,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                class="form-input"
                type=input_type
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                class="form-input"
                rows=rows
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// File input. The picked `File` is browser-local, so it lives in a
/// local `StoredValue`; its name goes to a regular signal for display.
#[component]
pub fn FilePicker(
    #[prop(into)] label: String,
    #[prop(into, default = "*/*".to_string())] accept: String,
    file: StoredValue<Option<web_sys::File>, LocalStorage>,
    file_name: RwSignal<Option<String>>,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let picked = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        file_name.set(picked.as_ref().map(|file| file.name()));
        file.set_value(picked);
    };

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                class="form-input"
                type="file"
                accept=accept
                disabled=move || disabled.get()
                on:change=on_change
            />
            <span class="file-name">{move || file_name.get()}</span>
        </label>
    }
}
