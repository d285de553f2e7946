//! Dot that eases toward the pointer on wide viewports

use dioxus::prelude::*;
use landing_domain::effects::MouseFollower;

use crate::infrastructure::spawn_task;
use crate::ui::presentation::services::use_landing_config;
use crate::ui::presentation::state::PageState;
use crate::use_platform;

#[component]
pub fn MouseFollowerDot() -> Element {
    let page = use_context::<PageState>();
    let config = use_landing_config();
    let platform = use_platform();
    let mut follower = use_signal(|| MouseFollower::new(config.follower_easing));
    let frame_ms = config.timings.frame_ms;

    use_effect(move || {
        let platform = platform.clone();
        spawn_task(async move {
            loop {
                platform.sleep_ms(frame_ms).await;
                let (x, y) = *page.pointer.peek();
                let hovering = *page.pointer_over_interactive.peek();
                follower.with_mut(|f| {
                    f.set_target(x, y);
                    f.set_hovering(hovering);
                    f.step();
                });
            }
        });
    });

    let style = follower.read().style();
    rsx! {
        div { class: "mouse-follower", style: "{style}" }
    }
}
