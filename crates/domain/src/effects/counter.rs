//! Stat counters counting up from zero to the number they display

/// Decoration around the counted number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStyle {
    /// `£1200`
    Currency,
    /// `95%`
    Percent,
    /// `500+`
    Plus,
    /// `42`
    Plain,
}

impl CounterStyle {
    /// Detect the style from the text a counter displays
    pub fn detect(text: &str) -> Self {
        if text.contains('£') {
            CounterStyle::Currency
        } else if text.contains('%') {
            CounterStyle::Percent
        } else if text.contains('+') {
            CounterStyle::Plus
        } else {
            CounterStyle::Plain
        }
    }

    pub fn render(&self, value: u64) -> String {
        match self {
            CounterStyle::Currency => format!("£{}", value),
            CounterStyle::Percent => format!("{}%", value),
            CounterStyle::Plus => format!("{}+", value),
            CounterStyle::Plain => value.to_string(),
        }
    }
}

/// Count-up animation for one stat.
///
/// Each tick adds `target / speed`; intermediate frames show the rounded-up
/// count, and the final frame restores the original text.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    original: String,
    style: CounterStyle,
    target: u64,
    increment: f64,
    count: f64,
    finished: bool,
}

impl CounterAnimation {
    /// Build from display text. The target is every digit of the text read
    /// as one number; text without digits counts to zero.
    pub fn new(text: &str, speed: u32) -> Self {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().unwrap_or(0);
        let speed = speed.max(1);
        Self {
            original: text.to_string(),
            style: CounterStyle::detect(text),
            target,
            increment: target as f64 / f64::from(speed),
            count: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn style(&self) -> CounterStyle {
        self.style
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text shown before the first tick
    pub fn initial_text(&self) -> String {
        self.style.render(0)
    }

    /// Advance one tick, returning the text to display.
    ///
    /// Once finished, keeps returning the original text.
    pub fn tick(&mut self) -> String {
        if self.finished {
            return self.original.clone();
        }
        self.count += self.increment;
        if self.count < self.target as f64 {
            self.style.render(self.count.ceil() as u64)
        } else {
            self.finished = true;
            self.original.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_is_detected_from_text() {
        assert_eq!(CounterStyle::detect("£1200"), CounterStyle::Currency);
        assert_eq!(CounterStyle::detect("95%"), CounterStyle::Percent);
        assert_eq!(CounterStyle::detect("500+"), CounterStyle::Plus);
        assert_eq!(CounterStyle::detect("42"), CounterStyle::Plain);
    }

    #[test]
    fn target_uses_all_digits() {
        assert_eq!(CounterAnimation::new("£1,200", 200).target(), 1200);
        assert_eq!(CounterAnimation::new("N/A", 200).target(), 0);
    }

    #[test]
    fn counts_up_with_decoration_and_ends_on_original() {
        let mut counter = CounterAnimation::new("500+", 200);
        assert_eq!(counter.initial_text(), "0+");
        assert_eq!(counter.tick(), "3+");

        let mut last = String::new();
        let mut ticks = 1;
        while !counter.is_finished() {
            last = counter.tick();
            ticks += 1;
            assert!(ticks <= 201, "counter did not finish");
        }
        assert_eq!(last, "500+");
        assert_eq!(counter.tick(), "500+");
    }

    #[test]
    fn intermediate_values_never_exceed_target() {
        let mut counter = CounterAnimation::new("95%", 200);
        while !counter.is_finished() {
            let text = counter.tick();
            let value: u64 = text.trim_end_matches('%').parse().unwrap();
            assert!(value <= 95);
        }
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new("0", 200);
        assert_eq!(counter.tick(), "0");
        assert!(counter.is_finished());
    }
}
