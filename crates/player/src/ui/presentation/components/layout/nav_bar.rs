//! Fixed header with the navigation menu
//!
//! On narrow screens the menu collapses behind a toggle; while it is open
//! the page behind it does not scroll. Following a link closes the menu.

use dioxus::prelude::*;

use crate::ui::presentation::services::use_landing_config;
use crate::ui::presentation::state::PageState;

/// `(anchor id, label)` of every menu entry
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("features", "Why Us"),
    ("courses", "Courses"),
    ("enroll", "Enroll"),
];

#[component]
pub fn NavBar() -> Element {
    let mut page = use_context::<PageState>();
    let config = use_landing_config();

    let header_style = page.header_style(config.header_scroll_threshold).style();
    let active = (page.nav)().active_class();

    rsx! {
        header {
            class: "header",
            style: "{header_style}",
            onmounted: move |e| async move {
                if let Ok(rect) = e.get_client_rect().await {
                    page.header_height.set(rect.size.height);
                }
            },
            nav { class: "nav container",
                NavLink { target: "home", label: "SkillBridge", class: "logo" }
                ul { id: "navMenu", class: "nav-menu {active}",
                    for (target, label) in NAV_ITEMS.iter().copied() {
                        li { key: "{target}",
                            NavLink { target, label }
                        }
                    }
                }
                button {
                    id: "navToggle",
                    class: "nav-toggle {active}",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| page.nav.write().toggle(),
                    onmouseenter: move |_| page.set_pointer_over_interactive(true),
                    onmouseleave: move |_| page.set_pointer_over_interactive(false),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}

/// In-page link that smooth-scrolls to its section
#[component]
pub fn NavLink(
    target: &'static str,
    label: &'static str,
    #[props(default = "nav-link")] class: &'static str,
) -> Element {
    let mut page = use_context::<PageState>();

    rsx! {
        a {
            class: "{class}",
            href: "#{target}",
            onclick: move |e: MouseEvent| {
                e.prevent_default();
                page.nav.write().close();
                page.scroll_to_anchor(target);
            },
            onmouseenter: move |_| page.set_pointer_over_interactive(true),
            onmouseleave: move |_| page.set_pointer_over_interactive(false),
            "{label}"
        }
    }
}
