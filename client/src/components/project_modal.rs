//! Detail modal for the selected project.
//!
//! Closes on backdrop click, the close button, or Escape. Scroll locking is
//! handled by the showcase, which sees every open/close transition.

use leptos::prelude::*;

use crate::catalog::Project;
use crate::config::{asset_base, image_url};
use crate::state::gallery::ImageCursor;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ProjectModal(project: Project, on_close: Callback<()>) -> impl IntoView {
    let images: Vec<String> = project
        .modal_images()
        .into_iter()
        .map(|path| image_url(asset_base(), path))
        .collect();
    let cursor = RwSignal::new(ImageCursor::new(images.len()));
    let can_navigate = cursor.get_untracked().can_navigate();
    let current_image = move || images.get(cursor.get().index()).cloned().unwrap_or_default();
    let details_html = project.details.as_deref().map(render_markdown_html);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_close.run(());
    };

    let title = project.title.clone();
    let features = project.features;
    let tags = project.tags;

    view! {
        <div class="project-modal__backdrop" on:click=on_backdrop>
            <button class="project-modal__close" on:click=on_close_click aria-label="Close modal">
                "✕"
            </button>
            <div class="project-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="project-modal__scroll">
                    <div class="project-modal__media">
                        <img src=current_image alt=title/>
                        {can_navigate
                            .then(|| {
                                view! {
                                    <button
                                        class="project-modal__nav project-modal__nav--prev"
                                        aria-label="Previous image"
                                        on:click=move |_| cursor.update(ImageCursor::prev)
                                    >
                                        "‹"
                                    </button>
                                    <button
                                        class="project-modal__nav project-modal__nav--next"
                                        aria-label="Next image"
                                        on:click=move |_| cursor.update(ImageCursor::next)
                                    >
                                        "›"
                                    </button>
                                }
                            })}
                    </div>

                    <div class="project-modal__details">
                        <h2 class="project-modal__title">{project.title}</h2>
                        <p class="project-modal__description">{project.description}</p>

                        {details_html
                            .map(|html| view! { <div class="project-modal__markdown" inner_html=html></div> })}

                        {(!features.is_empty())
                            .then(|| {
                                view! {
                                    <h3 class="project-modal__subtitle">"Key Features"</h3>
                                    <ul class="project-modal__features">
                                        {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                                    </ul>
                                }
                            })}

                        <div class="project-modal__tags">
                            {tags
                                .into_iter()
                                .map(|tag| view! { <span class="project-modal__tag">{tag}</span> })
                                .collect_view()}
                        </div>

                        <a class="btn btn--primary" href=project.link target="_blank" rel="noopener noreferrer">
                            "Visit Project ↗"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
