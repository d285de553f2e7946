//! Common components shared across sections

mod hover_card;
mod lazy_image;
mod mouse_follower;
mod reveal;
mod stat_counter;

pub use hover_card::HoverCard;
pub use lazy_image::LazyImage;
pub use mouse_follower::MouseFollowerDot;
pub use reveal::{use_reveal, RevealHandle, SlideUp};
pub use stat_counter::StatCounter;
