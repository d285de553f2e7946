//! Scroll-driven page computations: header style, progress bar, parallax,
//! anchor offsets and reveal checks.

/// Extra gap kept between the header and a section scrolled into view
pub const ANCHOR_GAP_PX: f64 = 20.0;

/// Header appearance for a scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Resting,
    Scrolled,
}

impl HeaderStyle {
    /// Scrolled once the offset is strictly past the threshold
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Resting
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            HeaderStyle::Resting => "rgba(255, 255, 255, 0.95)",
            HeaderStyle::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            HeaderStyle::Resting => "0 2px 20px rgba(4, 79, 132, 0.1)",
            HeaderStyle::Scrolled => "0 4px 30px rgba(4, 79, 132, 0.15)",
        }
    }

    /// Inline style for the header element
    pub fn style(&self) -> String {
        format!(
            "background: {}; box-shadow: {};",
            self.background(),
            self.box_shadow()
        )
    }
}

/// Scroll progress in percent, clamped to `[0, 100]`.
///
/// Pages that fit the viewport report 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Hero background translation for the current scroll offset
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

pub fn parallax_transform(scroll_y: f64, rate: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, rate))
}

/// `scroll-margin-top` for anchor targets, so a smooth scroll stops with the
/// section just below the fixed header
pub fn anchor_scroll_margin(header_height: f64) -> f64 {
    header_height.max(0.0) + ANCHOR_GAP_PX
}

/// Whether an element whose top edge sits at `element_top` (relative to the
/// viewport) has entered the viewport shrunk by `bottom_margin`.
pub fn is_revealed(element_top: f64, viewport_height: f64, bottom_margin: f64) -> bool {
    element_top < viewport_height - bottom_margin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_switches_strictly_after_threshold() {
        assert_eq!(HeaderStyle::for_scroll(0.0, 100.0), HeaderStyle::Resting);
        assert_eq!(HeaderStyle::for_scroll(100.0, 100.0), HeaderStyle::Resting);
        assert_eq!(HeaderStyle::for_scroll(100.5, 100.0), HeaderStyle::Scrolled);
        assert!(HeaderStyle::Scrolled.style().contains("0.98"));
    }

    #[test]
    fn progress_is_percentage_of_scrollable_height() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_handles_unscrollable_and_overscroll() {
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-50.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_offset(200.0, -0.5), -100.0);
        assert_eq!(parallax_transform(200.0, -0.5), "translateY(-100px)");
    }

    #[test]
    fn anchor_leaves_room_for_header() {
        assert_eq!(anchor_scroll_margin(80.0), 100.0);
        assert_eq!(anchor_scroll_margin(-5.0), ANCHOR_GAP_PX);
    }

    #[test]
    fn reveal_respects_bottom_margin() {
        assert!(is_revealed(900.0, 1000.0, 50.0));
        assert!(!is_revealed(960.0, 1000.0, 50.0));
        assert!(is_revealed(-300.0, 1000.0, 50.0));
    }
}
