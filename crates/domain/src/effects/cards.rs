//! Hover lift and staggered entrance of feature and course cards

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Feature,
    Course,
}

impl CardKind {
    pub fn transform(&self, hovered: bool) -> &'static str {
        match (self, hovered) {
            (CardKind::Feature, true) => "translateY(-10px) scale(1.02)",
            (CardKind::Course, true) => "translateY(-5px) scale(1.02)",
            (_, false) => "translateY(0) scale(1)",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CardKind::Feature => "feature-card",
            CardKind::Course => "course-card",
        }
    }
}

/// Entrance delay for the card at `index`
pub fn stagger_delay_ms(index: usize, per_card_ms: u64) -> u64 {
    index as u64 * per_card_ms
}
