//! Feature and course cards with hover lift and staggered entrance

use dioxus::prelude::*;
use landing_domain::effects::{stagger_delay_ms, CardKind};

use crate::ui::presentation::services::use_landing_config;

use super::use_reveal;

#[component]
pub fn HoverCard(kind: CardKind, index: usize, children: Element) -> Element {
    let config = use_landing_config();
    let mut reveal = use_reveal();
    let mut hovered = use_signal(|| false);

    let card_class = kind.class();
    let delay = stagger_delay_ms(index, config.timings.card_stagger_ms);
    let entered = if reveal.is_revealed() { "entered" } else { "" };
    // Entrance transitions wait for the stagger delay, the hover lift does not
    let style = format!(
        "transform: {}; transition-delay: {delay}ms, {delay}ms, 0ms;",
        kind.transform(hovered())
    );

    rsx! {
        div {
            class: "{card_class} card-enter {entered}",
            style: "{style}",
            onmounted: move |e| reveal.attach(e),
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            {children}
        }
    }
}
