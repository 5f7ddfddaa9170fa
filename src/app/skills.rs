use leptos::prelude::*;

use super::{reveal::ScrollReveal, use_theme};
use crate::content::{Proficiency, Skill, BUILD_YEAR, SKILLS};
use crate::filter::{category_counts, share, CategoryFilter, SkillFilter, ViewMode};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let theme = use_theme();
    let filter = RwSignal::new(SkillFilter::default());
    let mode = RwSignal::new(ViewMode::default());
    let visible = Memo::new(move |_| filter.with(|f| f.apply(SKILLS)));

    view! {
        <section id="skills" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <ScrollReveal>
                    <h2 class="text-3xl sm:text-4xl font-bold text-center mb-12">
                        "Skills & Technologies"
                    </h2>
                </ScrollReveal>
                <div class="flex flex-col md:flex-row gap-4 items-center justify-between mb-10">
                    <div class="flex flex-wrap gap-2" role="group" aria-label="Filter by category">
                        {CategoryFilter::options()
                            .map(|option| {
                                let selected = move || filter.with(|f| f.category == option);
                                view! {
                                    <button
                                        type="button"
                                        aria-pressed=move || selected().to_string()
                                        class=move || {
                                            if selected() {
                                                "px-4 py-1.5 rounded-full text-sm bg-gradient-to-r from-blue-600 to-purple-600 text-white"
                                            } else {
                                                "px-4 py-1.5 rounded-full text-sm border border-blue-500/50 hover:bg-blue-500/20"
                                            }
                                        }
                                        on:click=move |_| filter.update(|f| f.category = option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-2 items-center">
                        <input
                            type="search"
                            placeholder="Search skills..."
                            aria-label="Search skills"
                            class=move || {
                                format!(
                                    "px-4 py-1.5 rounded-full border border-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500 {}",
                                    theme.theme().card_class(),
                                )
                            }
                            prop:value=move || filter.with(|f| f.query.clone())
                            on:input=move |ev| {
                                let query = event_target_value(&ev);
                                filter.update(|f| f.query = query);
                            }
                        />
                        <button
                            type="button"
                            class="px-4 py-1.5 rounded-full text-sm border border-purple-500/50 hover:bg-purple-500/20"
                            on:click=move |_| mode.update(|m| *m = m.toggle())
                        >
                            {move || match mode.get() {
                                ViewMode::Grid => "Show stats",
                                ViewMode::Stats => "Show grid",
                            }}
                        </button>
                    </div>
                </div>
                {move || match mode.get() {
                    ViewMode::Grid => {
                        view! {
                            <Show
                                when=move || visible.with(|v| !v.is_empty())
                                fallback=move || {
                                    view! {
                                        <p class=move || {
                                            format!("text-center {}", theme.theme().muted_class())
                                        }>"No skills match your filters."</p>
                                    }
                                }
                            >
                                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-6">
                                    {move || {
                                        visible
                                            .get()
                                            .into_iter()
                                            .map(|skill| view! { <SkillCard skill=skill /> })
                                            .collect_view()
                                    }}
                                </div>
                            </Show>
                        }
                            .into_any()
                    }
                    ViewMode::Stats => view! { <SkillStats visible=visible /> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    let theme = use_theme();
    let hovered = RwSignal::new(false);
    let accent = skill.color.unwrap_or("#3b82f6");
    let level_class = match skill.level {
        Proficiency::Expert => "bg-purple-600/30 text-purple-200",
        Proficiency::Intermediate => "bg-blue-600/30 text-blue-200",
    };

    view! {
        <div
            class=move || {
                format!(
                    "relative rounded-xl p-5 flex flex-col items-center text-center shadow-lg transition-all duration-300 {} {}",
                    theme.theme().card_class(),
                    if hovered.get() { "-translate-y-1 scale-105" } else { "" },
                )
            }
            style=move || {
                if hovered.get() {
                    format!("box-shadow: 0 0 20px {accent}66")
                } else {
                    String::new()
                }
            }
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <img src=skill.icon alt="" class="w-12 h-12 mb-3 object-contain" />
            <h3 class="font-semibold">{skill.name}</h3>
            <span class=format!("mt-2 px-2 py-0.5 rounded-full text-xs {level_class}")>
                {skill.level.to_string()}
            </span>
            <span class=move || format!("mt-1 text-xs {}", theme.theme().muted_class())>
                {skill.category.label()}
            </span>
            {skill.description.map(|d| view! { <p class="mt-3 text-sm">{d}</p> })}
            {skill
                .experience_label(BUILD_YEAR)
                .map(|label| view! { <p class="mt-1 text-xs text-blue-300">{label}</p> })}
        </div>
    }
}

#[component]
fn SkillStats(visible: Memo<Vec<&'static Skill>>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || format!("rounded-xl p-6 space-y-4 {}", theme.theme().card_class())>
            {move || {
                visible
                    .with(|skills| {
                        let total = skills.len();
                        category_counts(skills)
                            .into_iter()
                            .map(|(category, count)| {
                                let width = share(count, total);
                                view! {
                                    <div>
                                        <div class="flex justify-between text-sm mb-1">
                                            <span>
                                                <i class=category.icon()></i>
                                                " "
                                                {category.label()}
                                            </span>
                                            <span>{format!("{count} ({width:.0}%)")}</span>
                                        </div>
                                        <div class="h-2 rounded-full bg-gray-700/50 overflow-hidden">
                                            <div
                                                class="h-full rounded-full bg-gradient-to-r from-blue-500 to-purple-600 transition-all duration-500"
                                                style=format!("width: {width:.1}%")
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}
