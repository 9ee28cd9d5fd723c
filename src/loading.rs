pub const TICK_MS: u32 = 50;
pub const STEP: u8 = 2;
pub const SETTLE_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    Running,
    /// Progress hit 100; completion is pending the settle delay.
    Settling,
    Complete,
}

/// What the owner should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Progressed(u8),
    /// Stop ticking and schedule completion after [`SETTLE_MS`].
    Reached100,
    Ignored,
}

/// Synthetic progress bar. Advances on a fixed timer, unrelated to real
/// asset loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingSequencer {
    progress: u8,
    phase: LoadingPhase,
}

impl Default for LoadingSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingSequencer {
    pub fn new() -> Self {
        Self { progress: 0, phase: LoadingPhase::Running }
    }

    #[cfg(test)]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    /// Delay of the one timer the owner should keep pending: the next tick
    /// while running, the settle delay once progress hit 100.
    pub fn pending_delay_ms(&self) -> Option<u32> {
        match self.phase {
            LoadingPhase::Running => Some(TICK_MS),
            LoadingPhase::Settling => Some(SETTLE_MS),
            LoadingPhase::Complete => None,
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != LoadingPhase::Running {
            return TickOutcome::Ignored;
        }
        self.progress = self.progress.saturating_add(STEP).min(100);
        if self.progress == 100 {
            self.phase = LoadingPhase::Settling;
            TickOutcome::Reached100
        } else {
            TickOutcome::Progressed(self.progress)
        }
    }

    /// The settle timer fired. Returns true the first time only.
    pub fn settle(&mut self) -> bool {
        if self.phase == LoadingPhase::Settling {
            self.phase = LoadingPhase::Complete;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fires the sequencer's pending timers against a synthetic clock the
    /// way the loading screen does, returning every progress value seen and
    /// the time the last timer fired.
    fn run() -> (Vec<u8>, u32) {
        let mut seq = LoadingSequencer::new();
        let mut seen = vec![seq.progress()];
        let mut now = 0;
        while let Some(delay) = seq.pending_delay_ms() {
            now += delay;
            match seq.phase() {
                LoadingPhase::Running => {
                    seq.tick();
                    seen.push(seq.progress());
                }
                LoadingPhase::Settling => assert!(seq.settle()),
                LoadingPhase::Complete => unreachable!(),
            }
        }
        (seen, now)
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_100() {
        let (seen, _) = run();
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*seen.last().unwrap(), 100);
        assert_eq!(seen.len(), 51);
    }

    #[test]
    fn completion_fires_at_three_seconds() {
        let (_, at) = run();
        assert_eq!(at, 3000);
    }

    #[test]
    fn ticks_after_100_are_ignored() {
        let mut seq = LoadingSequencer::new();
        while seq.tick() != TickOutcome::Reached100 {}
        assert_eq!(seq.phase(), LoadingPhase::Settling);
        assert_eq!(seq.tick(), TickOutcome::Ignored);
        assert_eq!(seq.progress(), 100);
    }

    #[test]
    fn settle_completes_once() {
        let mut seq = LoadingSequencer::new();
        assert!(!seq.settle());
        while seq.tick() != TickOutcome::Reached100 {}
        assert!(seq.settle());
        assert!(!seq.settle());
        assert_eq!(seq.phase(), LoadingPhase::Complete);
    }

    #[test]
    fn one_timer_per_phase_until_complete() {
        let mut seq = LoadingSequencer::new();
        assert_eq!(seq.pending_delay_ms(), Some(TICK_MS));
        while seq.tick() != TickOutcome::Reached100 {}
        assert_eq!(seq.pending_delay_ms(), Some(SETTLE_MS));
        seq.settle();
        assert_eq!(seq.pending_delay_ms(), None);
    }
}
