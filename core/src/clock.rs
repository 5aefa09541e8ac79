use serde::{Deserialize, Serialize};

/// Elapsed-seconds counter advanced by an external one-second tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stopwatch {
    elapsed_secs: u32,
    running: bool,
}

impl Stopwatch {
    pub const fn new() -> Self {
        Self {
            elapsed_secs: 0,
            running: false,
        }
    }

    pub const fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stops and zeroes the counter.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns whether the tick was counted.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_count_while_running() {
        let mut clock = Stopwatch::new();

        assert!(!clock.tick());
        clock.start();
        assert!(clock.tick());
        assert!(clock.tick());
        clock.stop();
        assert!(!clock.tick());

        assert_eq!(clock.elapsed_secs(), 2);
    }

    #[test]
    fn reset_stops_and_zeroes() {
        let mut clock = Stopwatch::new();
        clock.start();
        clock.tick();

        clock.reset();

        assert_eq!(clock, Stopwatch::default());
        assert!(!clock.tick());
    }
}
