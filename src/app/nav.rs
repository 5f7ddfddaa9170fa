use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::content::NAV_ITEMS;
use crate::scroll::{nav_visible, progress_visible, scroll_progress};
#[cfg(feature = "hydrate")]
use crate::scroll::{active_section, SectionBounds};

/// Which nav section is under the marker line, measured from the DOM.
fn current_section(viewport_height: f64) -> Option<&'static str> {
    #[cfg(feature = "hydrate")]
    {
        let document = document();
        let bounds = NAV_ITEMS.iter().filter_map(|item| {
            let rect = document
                .get_element_by_id(item.section)?
                .get_bounding_client_rect();
            Some(SectionBounds {
                id: item.section,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        });
        active_section(bounds, viewport_height)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = viewport_height;
        None
    }
}

fn document_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

#[component]
pub fn FloatingNav() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let active = Memo::new(move |_| {
        // re-measure whenever the page scrolls
        scroll_y.track();
        current_section(height.get())
    });

    view! {
        <Show when=move || nav_visible(scroll_y.get())>
            <div class="fixed top-4 left-0 right-0 z-50 flex justify-center px-4">
                <nav
                    class="glass-effect rounded-full px-3 py-2"
                    role="navigation"
                    aria-label="Main navigation"
                >
                    <ul class="flex items-center justify-center space-x-1 sm:space-x-2">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let section = item.section;
                                let is_active = move || active.get() == Some(section);
                                view! {
                                    <li>
                                        <a
                                            href=item.href()
                                            class=move || {
                                                if is_active() {
                                                    "inline-flex items-center px-2 sm:px-3 py-1.5 rounded-full text-sm font-medium transition-all duration-300 bg-gradient-to-r from-blue-600 to-purple-600 text-white"
                                                } else {
                                                    "inline-flex items-center px-2 sm:px-3 py-1.5 rounded-full text-sm font-medium transition-all duration-300 text-blue-200 hover:text-white hover:bg-gray-800/50"
                                                }
                                            }
                                            aria-current=move || is_active().then_some("page")
                                        >
                                            <span>{item.label}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <a
                    href="#home"
                    class="fixed bottom-4 right-4 p-2 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg transition-transform duration-200 hover:scale-110"
                    aria-label="Scroll to top"
                >
                    "↑"
                </a>
            </div>
        </Show>
    }
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let progress = move || scroll_progress(scroll_y.get(), document_height(), height.get());

    view! {
        <Show when=move || progress_visible(scroll_y.get())>
            <div
                class="fixed top-0 left-0 right-0 h-1 bg-indigo-700 origin-left z-50"
                style=move || format!("transform: scaleX({:.4})", progress())
            ></div>
        </Show>
    }
}
