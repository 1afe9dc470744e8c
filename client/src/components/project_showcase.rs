//! Filterable project gallery with "load more", detail modal, and a
//! scroll-to-top button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds a `GalleryState` signal for its lifetime. An effect mirrors the
//! modal's open/closed state into a `ScrollLock`, so the lock is taken once
//! on open, kept while the selection is replaced, and released once on close.
//! The lock lives in a `StoredValue`; disposing it on unmount releases it.

use leptos::prelude::*;

use super::project_card::ProjectCard;
use super::project_modal::ProjectModal;
use crate::catalog::{Project, builtin_projects};
use crate::state::gallery::GalleryState;
use crate::util::scroll::{DocumentScroll, ScrollLock};

/// Project gallery. Uses the built-in catalog unless `projects` is given.
#[component]
pub fn ProjectShowcase(#[prop(optional)] projects: Option<Vec<Project>>) -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::new(projects.unwrap_or_else(builtin_projects)));
    let selected = Memo::new(move |_| gallery.with(|g| g.selected_project().cloned()));
    let scroll_button_visible = RwSignal::new(false);
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let scroll_lock = StoredValue::new(ScrollLock::new(DocumentScroll));

    Effect::new(move || {
        let open = gallery.with(|g| g.modal.is_open());
        scroll_lock.update_value(|lock| lock.sync(open));
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::{show_scroll_button, window_scroll_y};

        scroll_button_visible.set(show_scroll_button(window_scroll_y()));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scroll_button_visible.set(show_scroll_button(window_scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    let on_scroll_top = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::scroll::{scroll_top_target, smooth_scroll_to};

            if let Some(el) = container_ref.get() {
                smooth_scroll_to(scroll_top_target(f64::from(el.offset_top())));
            }
        }
    };

    let on_close = Callback::new(move |()| {
        gallery.update(|g| {
            g.clear_selection();
        });
    });

    let filter_buttons = move || {
        let (categories, active) = gallery.with(|g| (g.categories(), g.active_category.clone()));
        categories
            .into_iter()
            .map(|category| {
                let class = if category == active { "filter-chip filter-chip--active" } else { "filter-chip" };
                let value = category.clone();
                view! {
                    <button class=class on:click=move |_| gallery.update(|g| g.set_category(&value))>
                        {category}
                    </button>
                }
            })
            .collect_view()
    };

    let cards = move || {
        let visible: Vec<(usize, Project)> =
            gallery.with(|g| g.visible_entries().map(|(index, p)| (index, p.clone())).collect());
        visible
            .into_iter()
            .map(|(index, project)| {
                let on_select = Callback::new(move |()| {
                    gallery.update(|g| {
                        g.select_project(index);
                    });
                });
                view! { <ProjectCard project=project on_select=on_select/> }
            })
            .collect_view()
    };

    view! {
        <div class="project-showcase" node_ref=container_ref>
            <div class="project-showcase__filters" role="tablist">
                {filter_buttons}
            </div>

            <div class="project-grid">{cards}</div>

            <Show when=move || gallery.with(GalleryState::has_more)>
                <div class="project-showcase__more">
                    <button class="btn" on:click=move |_| gallery.update(GalleryState::load_more)>
                        "Load more projects"
                    </button>
                </div>
            </Show>

            <Show when=move || scroll_button_visible.get()>
                <button class="scroll-top" on:click=on_scroll_top aria-label="Scroll to top">
                    "↑"
                </button>
            </Show>

            {move || selected.get().map(|project| view! { <ProjectModal project=project on_close=on_close/> })}
        </div>
    }
}
