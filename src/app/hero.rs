use leptos::prelude::*;

use super::{contact_modal::ContactModal, use_theme};
use crate::contact::ContactDialog;
use crate::content::PROFILE;

#[component]
pub fn HeroSection() -> impl IntoView {
    let theme = use_theme();
    let dialog = RwSignal::new(ContactDialog::default());

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center px-4 py-20"
        >
            <div class="max-w-6xl mx-auto flex flex-col-reverse lg:flex-row items-center gap-12">
                <div class="flex-1 text-center lg:text-left">
                    <p class=move || format!("text-lg mb-2 {}", theme.theme().muted_class())>
                        "Hi, I'm"
                    </p>
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-blue-400 to-purple-500">
                        {PROFILE.name}
                    </h1>
                    <p class="text-xl sm:text-2xl mb-8 text-blue-300">
                        {PROFILE.roles.join(" | ")}
                    </p>
                    <div class="flex flex-wrap gap-4 justify-center lg:justify-start mb-8">
                        <button
                            type="button"
                            class="px-6 py-3 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white font-medium hover:scale-105 transition-transform"
                            aria-haspopup="dialog"
                            on:click=move |_| dialog.update(|d| d.open())
                        >
                            "Get in touch"
                        </button>
                        <a
                            href=PROFILE.cv
                            download
                            class="px-6 py-3 rounded-full border border-blue-500 font-medium hover:bg-blue-500/20 transition-colors"
                        >
                            "Download CV"
                        </a>
                    </div>
                    <div class="flex gap-6 justify-center lg:justify-start text-3xl">
                        <a
                            href=PROFILE.github.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=PROFILE.github.label
                            class="hover:text-blue-400 transition-colors"
                        >
                            <i class="devicon-github-original"></i>
                        </a>
                        <a
                            href=PROFILE.linkedin.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=PROFILE.linkedin.label
                            class="hover:text-blue-400 transition-colors"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                    </div>
                </div>
                <div class="flex-shrink-0">
                    <img
                        src=PROFILE.photo
                        alt=PROFILE.name
                        width="320"
                        height="320"
                        class="w-64 h-64 lg:w-80 lg:h-80 rounded-full object-cover border-4 border-blue-500/50 shadow-2xl"
                    />
                </div>
            </div>
            <ContactModal dialog=dialog />
        </section>
    }
}
