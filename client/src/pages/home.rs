//! Landing page: project showcase followed by the contact section.

use leptos::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::project_showcase::ProjectShowcase;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <section id="projects" class="projects-section">
                <div class="projects-section__header">
                    <span class="section-eyebrow">"PROJECTS"</span>
                    <h2 class="section-title">"Client Work Showcase"</h2>
                </div>

                <ProjectShowcase/>

                <div class="projects-section__footer">
                    <a class="btn btn--outline" href="/projects">
                        "View all projects"
                    </a>
                </div>
            </section>

            <ContactSection/>
        </main>
    }
}
