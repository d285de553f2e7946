use dioxus::prelude::*;

use crate::infrastructure::spawn_task;

pub mod presentation;

pub use crate::state::Platform;

use presentation::components::common::MouseFollowerDot;
use presentation::services::use_landing_config;
use presentation::state::{EnrollmentState, PageState};
use presentation::views::LandingView;

pub const PAGE_TITLE: &str = "SkillBridge Academy - Enroll Today";

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    /// Layout for a viewport width; narrow screens get the mobile shell
    pub fn for_width(width: f64) -> Self {
        if width < 768.0 {
            ShellKind::Mobile
        } else {
            ShellKind::Desktop
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(ShellKind::Desktop),
            "mobile" => Some(ShellKind::Mobile),
            _ => None,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ShellKind::Desktop => "shell-desktop",
            ShellKind::Mobile => "shell-mobile",
        }
    }
}

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let platform = use_platform();
    let config = use_landing_config();

    // These must be created inside an active Dioxus runtime.
    let viewport = platform.viewport_size();
    let mut page = use_context_provider(|| PageState::new(viewport));
    use_context_provider(EnrollmentState::new);

    let platform_for_title = platform.clone();
    use_hook(move || platform_for_title.set_page_title(PAGE_TITLE));

    // Entrance transitions are keyed off the `loaded` class
    let loaded_ms = config.timings.loaded_class_ms;
    use_effect(move || {
        let platform = platform.clone();
        spawn_task(async move {
            platform.sleep_ms(loaded_ms).await;
            page.loaded.set(true);
        });
    });

    let loaded_class = if (page.loaded)() { "loaded" } else { "" };
    let overflow = match (page.nav)().body_overflow() {
        "" => "auto",
        locked => locked,
    };
    let follower_enabled = shell == ShellKind::Desktop
        && landing_domain::effects::MouseFollower::enabled_for(
            (page.viewport)().0,
            config.follower_min_viewport_width,
        );
    let shell_class = shell.class();

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/landing.css"),
        }
        for href in config.preload_resources.iter() {
            link { key: "{href}", rel: "preload", href: "{href}", "as": "style" }
        }

        div {
            class: "page {shell_class} {loaded_class}",
            style: "height: 100vh; overflow-x: hidden; overflow-y: {overflow};",
            onscroll: move |e| {
                page.apply_scroll(
                    e.scroll_top() as f64,
                    e.scroll_height() as f64,
                    e.client_height() as f64,
                );
            },
            onresize: move |e| {
                if let Ok(size) = e.get_content_box_size() {
                    page.viewport.set((size.width, size.height));
                }
            },
            onmousemove: move |e| {
                let point = e.client_coordinates();
                page.pointer.set((point.x, point.y));
            },
            LandingView {}
            if follower_enabled {
                MouseFollowerDot {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_follows_width_breakpoint() {
        assert_eq!(ShellKind::for_width(375.0), ShellKind::Mobile);
        assert_eq!(ShellKind::for_width(768.0), ShellKind::Desktop);
    }

    #[test]
    fn shell_override_is_case_insensitive() {
        assert_eq!(ShellKind::parse(" Mobile "), Some(ShellKind::Mobile));
        assert_eq!(ShellKind::parse("tablet"), None);
    }
}
