//! Window scroll helpers: modal scroll lock and scroll-to-top math.
//!
//! SYSTEM CONTEXT
//! ==============
//! The lock pins `<body>` at its current offset with `position: fixed` while
//! the project modal is open, then restores the offset when it closes. The
//! DOM side lives behind [`ScrollSurface`] so the lock's bookkeeping can be
//! tested without a browser.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset past which the scroll-to-top button appears.
pub const SCROLL_BUTTON_THRESHOLD: f64 = 500.0;

/// Height of the fixed site header, kept clear when scrolling to the gallery.
pub const HEADER_OFFSET: f64 = 100.0;

/// Whether the scroll-to-top button should be visible at offset `scroll_y`.
pub fn show_scroll_button(scroll_y: f64) -> bool {
    scroll_y > SCROLL_BUTTON_THRESHOLD
}

/// Target offset for scrolling back to a container at `container_top`.
pub fn scroll_top_target(container_top: f64) -> f64 {
    (container_top - HEADER_OFFSET).max(0.0)
}

/// The document whose scrolling gets suppressed.
pub trait ScrollSurface {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;
    /// Stop background scrolling, keeping the page visually at `offset`.
    fn freeze(&mut self, offset: f64);
    /// Undo [`ScrollSurface::freeze`] and jump back to `offset`.
    fn thaw(&mut self, offset: f64);
}

/// Scroll lock that follows the modal's open/closed state.
///
/// Held from the first open until the next close. Replacing the selected
/// project keeps the lock (and the saved offset) untouched.
#[derive(Debug)]
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
    saved: Option<f64>,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, saved: None }
    }

    pub fn is_held(&self) -> bool {
        self.saved.is_some()
    }

    /// Acquire on closed -> open, release on open -> closed, otherwise no-op.
    pub fn sync(&mut self, open: bool) {
        match (open, self.saved) {
            (true, None) => {
                let offset = self.surface.scroll_y();
                self.surface.freeze(offset);
                self.saved = Some(offset);
            }
            (false, Some(offset)) => {
                self.saved = None;
                self.surface.thaw(offset);
            }
            _ => {}
        }
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.sync(false);
    }
}

/// The browser document. Every method is a no-op outside `hydrate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScroll;

impl ScrollSurface for DocumentScroll {
    fn scroll_y(&self) -> f64 {
        window_scroll_y()
    }

    fn freeze(&mut self, offset: f64) {
        #[cfg(feature = "hydrate")]
        {
            let top = format!("-{offset}px");
            set_body_styles(&[("position", "fixed"), ("top", top.as_str()), ("overflow", "hidden")], "hidden");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = offset;
        }
    }

    fn thaw(&mut self, offset: f64) {
        #[cfg(feature = "hydrate")]
        {
            set_body_styles(&[("position", ""), ("top", ""), ("overflow", "")], "");
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, offset);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = offset;
        }
    }
}

#[cfg(feature = "hydrate")]
fn set_body_styles(body_props: &[(&str, &str)], html_overflow: &str) {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(body) = doc.body() {
        let style = body.style();
        for (name, value) in body_props {
            let _ = style.set_property(name, value);
        }
    }
    if let Some(html) = doc.document_element().and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        let _ = html.style().set_property("overflow", html_overflow);
    }
}

/// Current window scroll offset; `0.0` on the server.
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}
