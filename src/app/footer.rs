use leptos::prelude::*;

use super::use_theme;
use crate::content::{BUILD_YEAR, NAV_ITEMS, PROFILE};

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();

    view! {
        <footer class=move || {
            format!("py-10 px-4 border-t border-gray-700/50 {}", theme.theme().muted_class())
        }>
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <p class="text-sm">
                    {format!("© {BUILD_YEAR} {}. All rights reserved.", PROFILE.name)}
                </p>
                <nav aria-label="Footer navigation">
                    <ul class="flex flex-wrap gap-4 text-sm">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <a href=item.href() class="hover:text-blue-400 transition-colors">
                                            {item.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="flex gap-4 text-sm font-medium">
                    {[PROFILE.github, PROFILE.linkedin]
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="hover:text-blue-400 transition-colors"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
