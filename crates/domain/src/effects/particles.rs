//! Floating particle field drawn over the hero section
//!
//! Randomness is injected as a closure returning values in `[0, 1)` so the
//! field stays deterministic under test.

/// A single particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    fn random(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rng() * width,
            y: rng() * height,
            vx: (rng() - 0.5) * 0.5,
            vy: (rng() - 0.5) * 0.5,
            size: rng() * 2.0 + 1.0,
            opacity: rng() * 0.5 + 0.2,
        }
    }

    /// Fill colour used when drawing
    pub fn fill(&self) -> String {
        format!("rgba(255, 240, 42, {:.2})", self.opacity)
    }
}

/// Particles bouncing inside a rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    count: usize,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, count: usize, rng: &mut impl FnMut() -> f64) -> Self {
        let mut field = Self {
            width,
            height,
            count,
            particles: Vec::with_capacity(count),
        };
        field.reseed(rng);
        field
    }

    /// Adopt new bounds and scatter fresh particles over them
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        self.reseed(rng);
    }

    fn reseed(&mut self, rng: &mut impl FnMut() -> f64) {
        self.particles.clear();
        for _ in 0..self.count {
            self.particles
                .push(Particle::random(self.width, self.height, rng));
        }
    }

    /// Advance one frame, reversing velocity at the edges
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
