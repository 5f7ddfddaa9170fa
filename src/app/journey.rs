use leptos::prelude::*;

use super::{reveal::ScrollReveal, use_theme};
use crate::content::{timeline_side, Side, TimelineEvent, TIMELINE};

#[component]
pub fn JourneySection() -> impl IntoView {
    // events are keyed by date, which is unique
    let hovered = RwSignal::new(None::<&'static str>);

    view! {
        <section id="journey" class="py-20 px-4">
            <ScrollReveal>
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-16">"My Journey"</h2>
            </ScrollReveal>
            <div class="relative max-w-5xl mx-auto">
                <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-500 to-purple-600"></div>
                <ol class="space-y-12">
                    {TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(index, event)| {
                            view! {
                                <TimelineEntry event=event side=timeline_side(index) hovered=hovered />
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(
    event: &'static TimelineEvent,
    side: Side,
    hovered: RwSignal<Option<&'static str>>,
) -> impl IntoView {
    let theme = use_theme();
    let is_active = move || hovered.get() == Some(event.date);
    let row = match side {
        Side::Left => "md:flex-row",
        Side::Right => "md:flex-row-reverse",
    };

    view! {
        <li class=format!("relative flex flex-col {row} items-start md:items-center")>
            <div class="hidden md:block md:w-1/2"></div>
            <div class=move || {
                format!(
                    "absolute left-4 md:left-1/2 -translate-x-1/2 w-4 h-4 rounded-full border-2 border-blue-400 transition-transform duration-300 {}",
                    if is_active() { "scale-150 bg-purple-500" } else { "bg-blue-600" },
                )
            }></div>
            <div class="w-full md:w-1/2 pl-12 md:px-8">
                <ScrollReveal>
                    <div
                        class=move || {
                            format!(
                                "rounded-xl p-6 shadow-lg transition-all duration-300 {} {}",
                                theme.theme().card_class(),
                                if is_active() { "ring-2 ring-blue-500 -translate-y-1" } else { "" },
                            )
                        }
                        on:mouseenter=move |_| hovered.set(Some(event.date))
                        on:mouseleave=move |_| hovered.set(None)
                    >
                        <div class="flex items-center gap-4 mb-3">
                            <img src=event.icon alt="" class="w-10 h-10 object-contain" />
                            <time class="text-sm font-mono text-blue-400" datetime=event.date>
                                {event.date}
                            </time>
                        </div>
                        <h3 class="text-xl font-semibold mb-2">{event.title}</h3>
                        <p class=move || theme.theme().muted_class()>{event.description}</p>
                    </div>
                </ScrollReveal>
            </div>
        </li>
    }
}
