use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::{contact::ContactFormBody, use_theme};
use crate::contact::{ContactDialog, ContactFormState};

/// Contact form in a dialog. Dismissed by the close button, a click on the
/// backdrop or Escape.
#[component]
pub fn ContactModal(dialog: RwSignal<ContactDialog>) -> impl IntoView {
    let theme = use_theme();
    let state = RwSignal::new(ContactFormState::new());

    let _ = use_event_listener(use_window(), ev::keydown, move |e| {
        if dialog.with_untracked(|d| d.is_open()) {
            let key = e.key();
            dialog.update(|d| {
                d.on_key(&key);
            });
        }
    });

    view! {
        <Show when=move || dialog.with(|d| d.is_open())>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 backdrop-blur-sm"
                on:click=move |_| dialog.update(|d| d.close())
            >
                <div
                    class=move || {
                        format!(
                            "relative w-full max-w-md mx-4 rounded-lg p-8 shadow-2xl {}",
                            theme.theme().pick("bg-gray-900", "bg-white"),
                        )
                    }
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="contact-dialog-title"
                    on:click=|e| e.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute top-4 right-4 text-gray-400 hover:text-blue-400"
                        aria-label="Close"
                        on:click=move |_| dialog.update(|d| d.close())
                    >
                        "✕"
                    </button>
                    <h2 id="contact-dialog-title" class="text-2xl font-bold mb-6">
                        "Get in Touch"
                    </h2>
                    <ContactFormBody state=state id_prefix="dialog-" />
                </div>
            </div>
        </Show>
    }
}
