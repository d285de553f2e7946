use dioxus::prelude::*;

use crate::ui::presentation::state::PageState;

/// A page section reachable from the navigation links
#[component]
pub fn AnchorSection(
    id: &'static str,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let mut page = use_context::<PageState>();
    let margin = page.anchor_margin_style();

    rsx! {
        section {
            id: id,
            class: "{class}",
            style: "{margin}",
            onmounted: move |e| page.register_anchor(id, e.data()),
            {children}
        }
    }
}
