mod contact;
mod contact_modal;
mod footer;
mod hero;
mod homepage;
mod journey;
mod nav;
mod projects;
mod reveal;
mod skills;
mod theme;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use nav::{FloatingNav, ScrollProgress};
pub use theme::{provide_theme, use_theme, ThemeContext, ThemeToggle};

use crate::content::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Title text=format!("{} - {}", PROFILE.name, PROFILE.headline) />
        <Meta
            name="description"
            content="Portfolio of a web developer specializing in Next.js, Python, and Generative AI"
        />
        <Router>
            <div class=move || {
                let t = theme.theme();
                format!(
                    "relative min-h-screen transition-colors duration-500 {} {}",
                    t.text_class(),
                    t.background_class(),
                )
            }>
                <ScrollProgress />
                <main class="relative z-10">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <FloatingNav />
                <ThemeToggle />
            </div>
        </Router>
    }
}
