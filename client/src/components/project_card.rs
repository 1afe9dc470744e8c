//! Gallery card for a single project.

use leptos::prelude::*;

use crate::catalog::Project;
use crate::config::{asset_base, image_url};

/// Clickable card. The external link opens the site without opening the modal.
#[component]
pub fn ProjectCard(project: Project, on_select: Callback<()>) -> impl IntoView {
    let image = image_url(asset_base(), &project.image);
    let alt = project.title.clone();

    view! {
        <article class="project-card" on:click=move |_| on_select.run(())>
            <div class="project-card__media">
                <img src=image alt=alt loading="lazy"/>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__footer">
                    <a
                        class="project-card__link"
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                    >
                        "View Project ↗"
                    </a>
                    {project.featured.then(|| view! { <span class="project-card__badge">"Featured"</span> })}
                </div>
            </div>
        </article>
    }
}
