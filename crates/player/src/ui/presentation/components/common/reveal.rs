//! Scroll-triggered reveal
//!
//! An element is revealed the first time its top edge rises above the
//! viewport bottom minus the configured margin. Reveal never reverts.

use std::rc::Rc;

use dioxus::prelude::*;
use landing_domain::effects::is_revealed;

use crate::infrastructure::spawn_task;
use crate::ui::presentation::services::use_landing_config;
use crate::ui::presentation::state::PageState;

/// Handle returned by [`use_reveal`]; attach it to the element to watch
#[derive(Clone, Copy)]
pub struct RevealHandle {
    revealed: Signal<bool>,
    node: Signal<Option<Rc<MountedData>>>,
}

impl RevealHandle {
    pub fn is_revealed(&self) -> bool {
        (self.revealed)()
    }

    /// `onmounted` handler for the watched element
    pub fn attach(&mut self, event: MountedEvent) {
        self.node.set(Some(event.data()));
    }
}

pub fn use_reveal() -> RevealHandle {
    let page = use_context::<PageState>();
    let bottom_margin = use_landing_config().reveal_bottom_margin;
    let revealed = use_signal(|| false);
    let node = use_signal(|| None::<Rc<MountedData>>);

    use_effect(move || {
        // Subscribes to scroll and resize
        let _scroll_top = (page.scroll_top)();
        let viewport_height = (page.viewport)().1;
        let Some(node) = node() else {
            return;
        };
        if *revealed.peek() {
            return;
        }

        let mut revealed = revealed;
        spawn_task(async move {
            if let Ok(rect) = node.get_client_rect().await {
                if is_revealed(rect.origin.y, viewport_height, bottom_margin) {
                    revealed.set(true);
                }
            }
        });
    });

    RevealHandle { revealed, node }
}

/// Wrapper that slides its children up into place once revealed
#[component]
pub fn SlideUp(#[props(default, into)] class: String, children: Element) -> Element {
    let mut reveal = use_reveal();
    let animate = if reveal.is_revealed() { "animate" } else { "" };

    rsx! {
        div {
            class: "slide-up {class} {animate}",
            onmounted: move |e| reveal.attach(e),
            {children}
        }
    }
}
