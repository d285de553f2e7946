//! Hero section: typed headline, parallax backdrop and particles

mod hero_section;
mod particles;

pub use hero_section::{HeroSection, HERO_TITLE};
pub use particles::ParticleLayer;
