use leptos::prelude::*;

use crate::theme::Theme;

/// Handle to the page-wide display mode. Provided once by [`super::App`] and
/// read explicitly by the sections that style themselves.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext(RwSignal<Theme>);

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.0.get()
    }

    pub fn toggle(&self) {
        self.0.update(|t| *t = t.toggle());
    }
}

pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext(RwSignal::new(Theme::default()));
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="fixed bottom-4 left-4 z-[100] pointer-events-auto">
            <button
                on:click=move |_| theme.toggle()
                class="p-2 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 backdrop-blur-sm shadow-lg transition-transform duration-200 hover:scale-110"
                aria-label=move || theme.theme().toggle_label()
            >
                <span class=move || {
                    theme.theme().pick("text-yellow-400", "text-gray-300")
                }>{move || theme.theme().pick("☀", "☾")}</span>
            </button>
        </div>
    }
}
