//! Full project listing.

use leptos::prelude::*;

use crate::components::project_showcase::ProjectShowcase;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <main class="projects-page">
            <section class="projects-section">
                <div class="projects-section__header">
                    <span class="section-eyebrow">"CLIENT PROJECTS"</span>
                    <h1 class="section-title">"Featured Work"</h1>
                </div>
                <ProjectShowcase/>
            </section>
        </main>
    }
}
