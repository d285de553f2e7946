//! Page chrome: header navigation, progress bar and anchor sections

mod anchor_section;
mod nav_bar;
mod scroll_progress;

pub use anchor_section::AnchorSection;
pub use nav_bar::{NavBar, NavLink, NAV_ITEMS};
pub use scroll_progress::ScrollProgress;
