//! Mouse follower dot easing toward the pointer

/// Half of the follower's 20px diameter, used to centre it on the pointer
const FOLLOWER_RADIUS_PX: f64 = 10.0;

/// Follower position state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseFollower {
    easing: f64,
    target: (f64, f64),
    position: (f64, f64),
    hovering: bool,
}

impl MouseFollower {
    pub fn new(easing: f64) -> Self {
        Self {
            easing,
            target: (0.0, 0.0),
            position: (0.0, 0.0),
            hovering: false,
        }
    }

    /// The follower only runs on viewports wider than `min_width`
    pub fn enabled_for(viewport_width: f64, min_width: f64) -> bool {
        viewport_width > min_width
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    /// Pointer entered or left an interactive element
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Move a fraction of the remaining distance toward the pointer
    pub fn step(&mut self) {
        self.position.0 += (self.target.0 - self.position.0) * self.easing;
        self.position.1 += (self.target.1 - self.position.1) * self.easing;
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    /// Inline style placing and tinting the follower
    pub fn style(&self) -> String {
        let (scale, background) = if self.hovering {
            (2, "rgba(63, 159, 255, 0.3)")
        } else {
            (1, "rgba(255, 240, 42, 0.3)")
        };
        format!(
            "left: {:.1}px; top: {:.1}px; transform: scale({}); background: {};",
            self.position.0 - FOLLOWER_RADIUS_PX,
            self.position.1 - FOLLOWER_RADIUS_PX,
            scale,
            background
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_enabled_on_wide_viewports() {
        assert!(MouseFollower::enabled_for(1024.0, 768.0));
        assert!(!MouseFollower::enabled_for(768.0, 768.0));
        assert!(!MouseFollower::enabled_for(375.0, 768.0));
    }

    #[test]
    fn step_covers_easing_fraction() {
        let mut follower = MouseFollower::new(0.1);
        follower.set_target(100.0, 50.0);
        follower.step();
        let (x, y) = follower.position();
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn converges_on_target() {
        let mut follower = MouseFollower::new(0.1);
        follower.set_target(300.0, 200.0);
        for _ in 0..200 {
            follower.step();
        }
        let (x, y) = follower.position();
        assert!((x - 300.0).abs() < 0.01);
        assert!((y - 200.0).abs() < 0.01);
    }

    #[test]
    fn hovering_grows_and_tints() {
        let mut follower = MouseFollower::new(1.0);
        follower.set_target(50.0, 50.0);
        follower.step();
        assert!(follower.style().starts_with("left: 40.0px; top: 40.0px;"));
        assert!(follower.style().contains("scale(1)"));
        follower.set_hovering(true);
        assert!(follower.style().contains("scale(2)"));
        assert!(follower.style().contains("63, 159, 255"));
    }
}
