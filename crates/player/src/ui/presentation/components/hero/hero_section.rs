use dioxus::prelude::*;
use landing_domain::effects::{parallax_transform, TypingEffect};

use crate::infrastructure::spawn_task;
use crate::ui::presentation::components::common::StatCounter;
use crate::ui::presentation::components::layout::{AnchorSection, NavLink};
use crate::ui::presentation::services::use_landing_config;
use crate::ui::presentation::state::PageState;
use crate::use_platform;

use super::ParticleLayer;

pub const HERO_TITLE: &str = "Build Your Future in Tech";

/// `(value, label)` of the hero statistics
const HERO_STATS: &[(&str, &str)] = &[
    ("500+", "Graduates"),
    ("95%", "Job Placement"),
    ("£1200", "Average Monthly Salary Increase"),
];

#[component]
pub fn HeroSection() -> Element {
    let page = use_context::<PageState>();
    let config = use_landing_config();
    let platform = use_platform();

    let mut typing = use_signal(|| TypingEffect::new(HERO_TITLE));
    let mut cursor = use_signal(|| true);

    let start_ms = config.timings.typing_start_ms;
    let char_ms = config.timings.typing_char_ms;
    let cursor_hide_ms = config.timings.typing_cursor_hide_ms;
    use_effect(move || {
        let platform = platform.clone();
        spawn_task(async move {
            platform.sleep_ms(start_ms).await;
            loop {
                let typed = typing.write().tick();
                if !typed {
                    break;
                }
                platform.sleep_ms(char_ms).await;
            }
            platform.sleep_ms(cursor_hide_ms).await;
            cursor.set(false);
        });
    });

    let title = typing.read().visible_text();
    let cursor_class = if cursor() { "typing" } else { "" };
    let backdrop = format!(
        "transform: {};",
        parallax_transform((page.scroll_top)(), config.parallax_rate)
    );

    rsx! {
        AnchorSection { id: "home", class: "hero",
            div { class: "hero-background", style: "{backdrop}" }
            ParticleLayer {}
            div { class: "hero-content container",
                h1 { class: "hero-title {cursor_class}", "aria-label": HERO_TITLE, "{title}" }
                p { class: "hero-subtitle",
                    "Industry-led courses with mentors who hire. Learn online, graduate job-ready."
                }
                div { class: "hero-buttons",
                    NavLink { target: "enroll", label: "Enroll Now", class: "btn btn-primary" }
                    NavLink { target: "courses", label: "View Courses", class: "btn btn-secondary" }
                }
                div { class: "hero-stats",
                    for (value, label) in HERO_STATS.iter().copied() {
                        StatCounter { key: "{label}", value, label }
                    }
                }
            }
        }
    }
}
