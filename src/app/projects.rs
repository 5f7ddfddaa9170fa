use leptos::prelude::*;

use super::{reveal::ScrollReveal, use_theme};
use crate::content::{all_technologies, Project, PROJECTS};
use crate::filter::ProjectFilter;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let theme = use_theme();
    let filter = RwSignal::new(ProjectFilter::default());
    let visible = Memo::new(move |_| filter.with(|f| f.apply(PROJECTS)));

    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <ScrollReveal>
                    <h2 class="text-3xl sm:text-4xl font-bold text-center mb-12">"Projects"</h2>
                </ScrollReveal>
                <div class="flex flex-col gap-4 mb-10">
                    <input
                        type="search"
                        placeholder="Search projects..."
                        aria-label="Search projects"
                        class=move || {
                            format!(
                                "w-full md:w-1/2 mx-auto px-4 py-2 rounded-full border border-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500 {}",
                                theme.theme().card_class(),
                            )
                        }
                        prop:value=move || filter.with(|f| f.query.clone())
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            filter.update(|f| f.query = query);
                        }
                    />
                    <div class="flex flex-wrap justify-center gap-2">
                        {all_technologies(PROJECTS)
                            .into_iter()
                            .map(|tech| {
                                let selected = move || {
                                    filter.with(|f| f.technology.as_deref() == Some(tech))
                                };
                                view! {
                                    <button
                                        type="button"
                                        aria-pressed=move || selected().to_string()
                                        class=move || {
                                            if selected() {
                                                "px-3 py-1 rounded-full text-sm bg-blue-600 text-white"
                                            } else {
                                                "px-3 py-1 rounded-full text-sm border border-blue-500/50 hover:bg-blue-500/20"
                                            }
                                        }
                                        on:click=move |_| filter.update(|f| f.toggle_technology(tech))
                                    >
                                        {tech}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || {
                        view! {
                            <p class=move || {
                                format!("text-center {}", theme.theme().muted_class())
                            }>"No projects match your filters."</p>
                        }
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let theme = use_theme();

    view! {
        <article class=move || {
            format!(
                "group relative overflow-hidden rounded-xl shadow-lg transition-transform duration-300 hover:-translate-y-1 {}",
                theme.theme().card_class(),
            )
        }>
            <div class="relative h-56 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 flex items-center justify-center bg-black/70 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-5 py-2 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white font-medium"
                    >
                        {project.link_label()}
                    </a>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                <p class=move || format!("mb-4 {}", theme.theme().muted_class())>
                    {project.description}
                </p>
                <ul class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <li class="px-2 py-0.5 rounded text-xs bg-blue-500/20 text-blue-300">
                                    {*tech}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}
