/// Ticks between spawn attempts at the start of a session
pub const SPAWN_INTERVAL_MAX: u32 = 90;
/// The interval never drops below this many ticks
pub const SPAWN_INTERVAL_MIN: u32 = 20;
/// How much the interval shrinks after every spawn attempt
pub const SPAWN_INTERVAL_DECAY: u32 = 2;

/// Countdown deciding on which ticks a new word is proposed. The gap between
/// attempts shrinks with every attempt until it reaches the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnCadence {
    countdown: u32,
    interval: u32,
    min: u32,
    decay: u32,
}

impl SpawnCadence {
    pub fn new(max: u32, min: u32, decay: u32) -> Self {
        Self {
            countdown: 0,
            interval: max.max(min),
            min,
            decay,
        }
    }

    /// Advance one tick. Returns true when a spawn attempt is due, in which
    /// case the countdown restarts from the current interval and the interval
    /// decays.
    pub fn tick(&mut self) -> bool {
        if self.countdown > 0 {
            self.countdown -= 1;
            return false;
        }
        self.countdown = self.interval;
        self.interval = self.interval.saturating_sub(self.decay).max(self.min);
        true
    }

    /// Interval that will be used after the next spawn attempt
    pub fn interval(&self) -> u32 {
        self.interval
    }
}

impl Default for SpawnCadence {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL_MAX, SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_DECAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_ticks(cadence: &mut SpawnCadence, ticks: usize) -> Vec<usize> {
        let mut due = Vec::new();
        for t in 0..ticks {
            if cadence.tick() {
                due.push(t);
            }
        }
        due
    }

    #[test]
    fn first_tick_spawns() {
        let mut cadence = SpawnCadence::default();
        assert!(cadence.tick());
        assert!(!cadence.tick());
    }

    #[test]
    fn gaps_shrink_by_decay() {
        let mut cadence = SpawnCadence::new(5, 1, 2);
        // countdown 5 then 3 then 1 then 1...
        assert_eq!(spawn_ticks(&mut cadence, 16), vec![0, 6, 10, 12, 14]);
    }

    #[test]
    fn interval_never_drops_below_floor() {
        let mut cadence = SpawnCadence::default();
        for _ in 0..10_000 {
            cadence.tick();
            assert!(cadence.interval() >= SPAWN_INTERVAL_MIN);
        }
        assert_eq!(cadence.interval(), SPAWN_INTERVAL_MIN);
    }

    #[test]
    fn max_below_min_is_clamped() {
        let cadence = SpawnCadence::new(3, 10, 1);
        assert_eq!(cadence.interval(), 10);
    }
}
