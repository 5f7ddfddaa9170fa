use leptos::prelude::*;

use super::{
    contact::ContactSection, footer::Footer, hero::HeroSection, journey::JourneySection,
    projects::ProjectsSection, skills::SkillsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <JourneySection />
        <ProjectsSection />
        <SkillsSection />
        <ContactSection />
        <Footer />
    }
}
