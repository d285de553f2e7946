//! Presentation-free state for the decorative page effects
//!
//! Components drive these with timers and DOM events; the math lives here.

mod cards;
mod counter;
mod follower;
mod nav;
mod particles;
mod scroll;
mod timer;
mod typing;

pub use cards::{stagger_delay_ms, CardKind};
pub use counter::{CounterAnimation, CounterStyle};
pub use follower::MouseFollower;
pub use nav::NavMenu;
pub use particles::{Particle, ParticleField};
pub use scroll::{
    anchor_scroll_margin, is_revealed, parallax_offset, parallax_transform, scroll_progress,
    HeaderStyle, ANCHOR_GAP_PX,
};
pub use timer::{TimerGate, TimerTicket};
pub use typing::TypingEffect;
