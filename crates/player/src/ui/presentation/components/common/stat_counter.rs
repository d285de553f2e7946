//! Counting statistic, e.g. "£1200" or "95%"

use dioxus::prelude::*;
use landing_domain::effects::CounterAnimation;

use crate::infrastructure::spawn_task;
use crate::ui::presentation::services::use_landing_config;
use crate::use_platform;

use super::use_reveal;

#[component]
pub fn StatCounter(#[props(into)] value: String, #[props(into)] label: String) -> Element {
    let config = use_landing_config();
    let platform = use_platform();
    let mut reveal = use_reveal();
    let mut text = use_signal(|| value.clone());
    let mut started = use_signal(|| false);

    let speed = config.counter_speed;
    let frame_ms = config.timings.frame_ms;

    // Counts once, the first time the stat scrolls into view
    use_effect(move || {
        if !reveal.is_revealed() || *started.peek() {
            return;
        }
        started.set(true);

        let platform = platform.clone();
        let mut animation = CounterAnimation::new(&value, speed);
        text.set(animation.initial_text());
        spawn_task(async move {
            loop {
                let frame = animation.tick();
                text.set(frame);
                if animation.is_finished() {
                    break;
                }
                platform.sleep_ms(frame_ms).await;
            }
        });
    });

    rsx! {
        div {
            class: "stat-item",
            onmounted: move |e| reveal.attach(e),
            span { class: "stat-number", "{text}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
