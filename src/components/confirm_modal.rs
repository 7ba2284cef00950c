//! Confirm Modal Component
//!
//! Blocking yes/no prompt in front of destructive actions.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// # Arguments
/// * `message` - Prompt to show; the modal is open while this is `Some`
/// * `confirm_label` - Text of the confirming button
/// * `on_confirm` - Runs the pending action
/// * `on_cancel` - Drops the pending action
#[component]
pub fn ConfirmModal(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into, default = Signal::from("Delete"))] confirm_label: Signal<&'static str>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <p class="modal-message">{move || message.get().unwrap_or_default()}</p>
                    <div class="modal-actions">
                        <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                            {move || confirm_label.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
