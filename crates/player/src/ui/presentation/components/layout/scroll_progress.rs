use dioxus::prelude::*;

use crate::ui::presentation::state::PageState;

/// Thin bar across the top showing how far the page has been scrolled
#[component]
pub fn ScrollProgress() -> Element {
    let page = use_context::<PageState>();
    let width = format!("width: {:.2}%;", page.progress());

    rsx! {
        div { class: "scroll-progress", style: "{width}" }
    }
}
