//! Generation tokens for one-shot timers
//!
//! A timer captures a [`TimerTicket`] when it is scheduled and only acts if
//! its ticket is still current when it fires. Re-arming invalidates every
//! earlier ticket, which gives both debouncing and "only dismiss the overlay
//! this timer was started for".

/// Ticket handed to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerGate {
    generation: u64,
    armed: bool,
}

impl TimerGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a new timer, invalidating all earlier tickets
    pub fn arm(&mut self) -> TimerTicket {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        TimerTicket(self.generation)
    }

    /// Cancel whatever is pending
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_current(&self, ticket: TimerTicket) -> bool {
        self.armed && ticket.0 == self.generation
    }

    /// Consume the ticket if it is current; returns whether the timer should act
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        if self.is_current(ticket) {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut gate = TimerGate::new();
        let first = gate.arm();
        let second = gate.arm();
        assert!(!gate.fire(first));
        assert!(gate.fire(second));
        assert!(!gate.fire(second));
    }

    #[test]
    fn disarm_cancels_pending_ticket() {
        let mut gate = TimerGate::new();
        let ticket = gate.arm();
        gate.disarm();
        assert!(!gate.is_current(ticket));
        assert!(!gate.fire(ticket));
    }
}
