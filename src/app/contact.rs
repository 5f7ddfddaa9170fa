use leptos::prelude::*;

use super::{reveal::ScrollReveal, use_theme};
use crate::contact::{BannerKind, ContactFormState, Field, MESSAGE_MAX_LENGTH};
use crate::content::{SocialLink, PROFILE};

/// Validate and, when clean, POST the form. The state signal tracks the
/// in-flight request so a second submit is ignored.
fn submit_contact(state: RwSignal<ContactFormState>) {
    let Some(payload) = state.try_update(|s| s.begin_submit()).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::contact::post_contact(&payload).await;
        if let Err(e) = &result {
            log::error!("Error sending message: {e}");
        }
        state.update(|s| s.finish_submit(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = payload;
}

/// The fields, submit button and outcome banner. Shared by the contact
/// section and the dialog opened from the hero.
#[component]
pub fn ContactFormBody(
    state: RwSignal<ContactFormState>,
    /// Prepended to element ids so two forms can share a page.
    #[prop(optional)]
    id_prefix: &'static str,
) -> impl IntoView {
    view! {
        <form
            class="space-y-6"
            novalidate
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit_contact(state);
            }
        >
            {Field::ALL
                .into_iter()
                .map(|field| view! { <FormField field=field state=state id_prefix=id_prefix /> })
                .collect_view()}
            <button
                type="submit"
                class="w-full py-3 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white font-medium transition-opacity disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || state.with(|s| s.is_submitting())
            >
                {move || {
                    if state.with(|s| s.is_submitting()) { "Sending..." } else { "Send Message" }
                }}
            </button>
            {move || {
                state
                    .with(|s| s.banner())
                    .map(|banner| {
                        let class = match banner.kind {
                            BannerKind::Success => {
                                "p-4 rounded-lg bg-green-500/20 text-green-300 border border-green-500/50"
                            }
                            BannerKind::Failure => {
                                "p-4 rounded-lg bg-red-500/20 text-red-300 border border-red-500/50"
                            }
                        };
                        view! {
                            <div class=class role="status">
                                {banner.text}
                            </div>
                        }
                    })
            }}
        </form>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let theme = use_theme();
    let state = RwSignal::new(ContactFormState::new());

    view! {
        <section id="contact" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <ScrollReveal>
                    <h2 class="text-3xl sm:text-4xl font-bold text-center mb-4">"Get In Touch"</h2>
                    <p class=move || {
                        format!("text-center mb-12 {}", theme.theme().muted_class())
                    }>
                        "Have a question or want to work together? Drop me a message."
                    </p>
                </ScrollReveal>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class=move || {
                        format!(
                            "lg:col-span-2 rounded-xl p-8 shadow-lg {}",
                            theme.theme().card_class(),
                        )
                    }>
                        <ContactFormBody state=state />
                    </div>
                    <div class="space-y-6">
                        <ConnectCard link=PROFILE.github icon="devicon-github-original" />
                        <ConnectCard link=PROFILE.linkedin icon="devicon-linkedin-plain" />
                        <div class=move || {
                            format!("rounded-xl p-6 shadow-lg {}", theme.theme().card_class())
                        }>
                            <h3 class="font-semibold mb-2">"Quick Response"</h3>
                            <p class=move || format!("text-sm {}", theme.theme().muted_class())>
                                "I typically respond within 24 hours. For urgent matters, email me at "
                                <a href=format!("mailto:{}", PROFILE.email) class="text-blue-400 hover:underline">
                                    {PROFILE.email}
                                </a>
                                "."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    field: Field,
    state: RwSignal<ContactFormState>,
    id_prefix: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    let input_id = format!("{id_prefix}{}", field.id());
    let error_id = format!("{input_id}-error");
    let error = move || state.with(|s| s.error(field));
    let value = move || state.with(|s| s.value(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.set_field(field, value));
    };
    let input_class = move || {
        format!(
            "w-full px-4 py-3 rounded-lg border bg-transparent focus:outline-none focus:ring-2 focus:ring-blue-500 {}",
            if error().is_some() { "border-red-500" } else { "border-gray-600" },
        )
    };
    let described_by = error_id.clone();
    let input_type = if field == Field::Email { "email" } else { "text" };

    let control = match field {
        Field::Message => view! {
            <textarea
                id=input_id.clone()
                name=field.id()
                rows="5"
                placeholder=field.placeholder()
                class=input_class
                prop:value=value
                on:input=on_input
                aria-invalid=move || error().is_some().to_string()
                aria-describedby=described_by
            ></textarea>
        }
        .into_any(),
        Field::Name | Field::Email => view! {
            <input
                id=input_id.clone()
                name=field.id()
                type=input_type
                placeholder=field.placeholder()
                class=input_class
                prop:value=value
                on:input=on_input
                aria-invalid=move || error().is_some().to_string()
                aria-describedby=described_by
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <div class="flex justify-between mb-2">
                <label for=input_id class="font-medium">
                    {field.label()}
                </label>
                {(field == Field::Message)
                    .then(|| {
                        view! {
                            <span class=move || {
                                format!("text-xs {}", theme.theme().muted_class())
                            }>
                                {move || {
                                    format!(
                                        "{}/{MESSAGE_MAX_LENGTH}",
                                        state.with(|s| s.message_len()),
                                    )
                                }}
                            </span>
                        }
                    })}
            </div>
            {control}
            {move || {
                error()
                    .map(|message| {
                        view! {
                            <p id=error_id.clone() class="mt-1 text-sm text-red-400" role="alert">
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ConnectCard(link: SocialLink, icon: &'static str) -> impl IntoView {
    let theme = use_theme();

    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class=move || {
                format!(
                    "flex items-center gap-4 rounded-xl p-6 shadow-lg transition-transform hover:-translate-y-1 {}",
                    theme.theme().card_class(),
                )
            }
        >
            <i class=format!("{icon} text-3xl")></i>
            <div>
                <h3 class="font-semibold">{link.label}</h3>
                <p class=move || format!("text-sm {}", theme.theme().muted_class())>
                    {link.caption}
                </p>
            </div>
        </a>
    }
}
