use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::scroll::Reveal;

/// Fades its children in once they scroll into view.
#[component]
pub fn ScrollReveal(
    #[prop(default = true)] once: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let reveal = RwSignal::new(Reveal::new(once));
    let is_visible = use_element_visibility(node_ref);

    Effect::new(move |_| {
        let intersecting = is_visible.get();
        reveal.update(|r| r.observe(intersecting));
    });

    view! {
        <div
            node_ref=node_ref
            class=move || {
                let state = if reveal.with(|r| r.is_visible()) {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-8"
                };
                format!("transition-all duration-700 ease-out {state} {class}")
            }
        >
            {children()}
        </div>
    }
}
