use std::time::{Duration, Instant};

/// Drives the delayed computer move. The delay is a presentation pause
/// only; implementations decide when "later" has arrived, which lets
/// tests execute the move synchronously.
pub trait TurnClock {
    fn schedule(&mut self, delay: Duration);
    fn cancel(&mut self);
    fn is_due(&self) -> bool;
}

/// Real deadline against the wall clock; the presentation layer polls it.
#[derive(Debug, Default)]
pub struct WallClock {
    deadline: Option<Instant>,
}

impl WallClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TurnClock for WallClock {
    fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn is_due(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Due as soon as anything is scheduled. Used by tests and headless
/// drivers that want the computer move without a wall-clock pause.
#[derive(Debug, Default)]
pub struct ImmediateClock {
    armed: bool,
}

impl ImmediateClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TurnClock for ImmediateClock {
    fn schedule(&mut self, _delay: Duration) {
        self.armed = true;
    }

    fn cancel(&mut self) {
        self.armed = false;
    }

    fn is_due(&self) -> bool {
        self.armed
    }
}
