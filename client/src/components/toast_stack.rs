//! Fixed stack of transient notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections push notices through [`show_toast`]; the stack only renders
//! `ToastState` from context. Expiry timers run in the browser only.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastKind, ToastState};

/// Push `notice` and schedule its automatic dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, notice: Notice) {
    let id = toasts.try_update(|t| t.push(notice));
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TTL_MS).await;
                toasts.update(|t| t.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toasts
                    .with(|state| state.items.clone())
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
