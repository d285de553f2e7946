use dioxus::prelude::*;

use super::use_reveal;

/// Image whose source is only set once it scrolls into view
#[component]
pub fn LazyImage(
    #[props(into)] src: String,
    #[props(into)] alt: String,
    #[props(default, into)] class: String,
) -> Element {
    let mut reveal = use_reveal();
    let loaded = reveal.is_revealed();
    let current_src = loaded.then(|| src.clone());
    let pending_src = (!loaded).then(|| src.clone());

    rsx! {
        img {
            class: "{class}",
            alt: "{alt}",
            src: current_src,
            "data-src": pending_src,
            onmounted: move |e| reveal.attach(e),
        }
    }
}
