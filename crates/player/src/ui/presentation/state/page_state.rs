//! Page-wide state shared by the layout and effect components
//!
//! The landing page scrolls inside a single container; its scroll events,
//! size and pointer position are mirrored here so every section can react
//! without owning a listener of its own.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use landing_domain::effects::{anchor_scroll_margin, scroll_progress, HeaderStyle, NavMenu};

use crate::infrastructure::spawn_task;

/// Page state for the landing view
#[derive(Clone, Copy)]
pub struct PageState {
    /// Scroll offset of the page container
    pub scroll_top: Signal<f64>,
    /// Total scrollable height of the page container
    pub scroll_height: Signal<f64>,
    /// Visible size of the page container as `(width, height)`
    pub viewport: Signal<(f64, f64)>,
    /// Measured height of the fixed header
    pub header_height: Signal<f64>,
    /// Mobile navigation menu
    pub nav: Signal<NavMenu>,
    /// Set shortly after mount; enables the entrance transitions
    pub loaded: Signal<bool>,
    /// Last pointer position in client coordinates
    pub pointer: Signal<(f64, f64)>,
    /// Whether the pointer is over a link, button or form control
    pub pointer_over_interactive: Signal<bool>,
    /// Mounted section elements addressable by anchor id
    anchors: Signal<HashMap<&'static str, Rc<MountedData>>>,
}

impl PageState {
    /// Create a new PageState; must be called inside the Dioxus runtime
    pub fn new(viewport: (f64, f64)) -> Self {
        Self {
            scroll_top: Signal::new(0.0),
            scroll_height: Signal::new(viewport.1),
            viewport: Signal::new(viewport),
            header_height: Signal::new(0.0),
            nav: Signal::new(NavMenu::default()),
            loaded: Signal::new(false),
            pointer: Signal::new((0.0, 0.0)),
            pointer_over_interactive: Signal::new(false),
            anchors: Signal::new(HashMap::new()),
        }
    }

    pub fn apply_scroll(&mut self, top: f64, height: f64, client_height: f64) {
        self.scroll_top.set(top);
        self.scroll_height.set(height);
        let width = self.viewport.peek().0;
        if self.viewport.peek().1 != client_height {
            self.viewport.set((width, client_height));
        }
    }

    /// Scroll progress in percent
    pub fn progress(&self) -> f64 {
        scroll_progress(
            (self.scroll_top)(),
            (self.scroll_height)(),
            (self.viewport)().1,
        )
    }

    pub fn header_style(&self, threshold: f64) -> HeaderStyle {
        HeaderStyle::for_scroll((self.scroll_top)(), threshold)
    }

    /// Inline `scroll-margin-top` for anchor targets
    pub fn anchor_margin_style(&self) -> String {
        format!(
            "scroll-margin-top: {}px;",
            anchor_scroll_margin((self.header_height)())
        )
    }

    pub fn register_anchor(&mut self, id: &'static str, node: Rc<MountedData>) {
        self.anchors.write().insert(id, node);
    }

    /// Smooth-scroll to a registered section. Unknown ids are ignored.
    pub fn scroll_to_anchor(&self, id: &str) {
        let Some(node) = self.anchors.peek().get(id).cloned() else {
            tracing::debug!(anchor = id, "No section mounted for anchor");
            return;
        };
        spawn_task(async move {
            if let Err(e) = node.scroll_to(ScrollBehavior::Smooth).await {
                tracing::debug!(error = ?e, "Smooth scroll unavailable");
            }
        });
    }

    pub fn set_pointer_over_interactive(&mut self, over: bool) {
        self.pointer_over_interactive.set(over);
    }
}
