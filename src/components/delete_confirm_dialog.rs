//! Delete Confirm Dialog Component
//!
//! Modal asking the user to accept a pending delete.

use leptos::prelude::*;

/// Confirmation dialog for a pending delete
///
/// # Arguments
/// * `open` - Whether a delete is waiting for confirmation
/// * `on_confirm` - Callback when the user accepts
/// * `on_cancel` - Callback when the user backs out
#[component]
pub fn DeleteConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal confirm-dialog">
                    <p class="confirm-text">"Are you sure you want to delete this task?"</p>
                    <div class="modal-actions">
                        <button
                            class="btn btn-secondary"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_cancel.run(());
                            }
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn btn-danger"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
