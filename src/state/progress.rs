/// Percentage added per tick
pub const PROGRESS_STEP: u8 = 10;
/// Delay between ticks in milliseconds
pub const PROGRESS_TICK_MS: u32 = 60;

/// Cosmetic progress indicator.
///
/// The bar is not tied to the request: it fills in a fixed time and may reach
/// 100 before or after the response arrives. Each start opens a new run; ticks
/// from older runs are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub value: u8,
    pub run: u64,
    pub active: bool,
}

impl Progress {
    /// Reset to 0 and open a new run
    pub fn start(self) -> Self {
        Self {
            value: 0,
            run: self.run + 1,
            active: true,
        }
    }

    pub fn tick(self, run: u64) -> Self {
        if !self.active || run != self.run {
            return self;
        }
        let value = self.value.saturating_add(PROGRESS_STEP).min(100);
        Self {
            value,
            active: value < 100,
            ..self
        }
    }

    /// Stop the run where it is
    pub fn clear(self, run: u64) -> Self {
        if run != self.run {
            return self;
        }
        Self {
            active: false,
            ..self
        }
    }

    /// Whether a ticker for `run` should keep going
    pub fn is_running(&self, run: u64) -> bool {
        self.active && self.run == run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_100_in_ten_ticks() {
        let mut progress = Progress::default().start();
        let run = progress.run;
        let mut seen = Vec::new();
        while progress.is_running(run) {
            progress = progress.tick(run);
            seen.push(progress.value);
        }
        assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(!progress.active);
    }

    #[test]
    fn test_tick_after_completion_is_noop() {
        let mut progress = Progress::default().start();
        let run = progress.run;
        for _ in 0..10 {
            progress = progress.tick(run);
        }
        assert_eq!(progress.tick(run), progress);
    }

    #[test]
    fn test_stale_run_ignored() {
        let first = Progress::default().start();
        let old_run = first.run;
        let second = first.tick(old_run).start();

        assert_eq!(second.value, 0);
        assert_eq!(second.tick(old_run), second);
        assert_eq!(second.clear(old_run), second);
        assert_eq!(second.tick(second.run).value, 10);
    }

    #[test]
    fn test_clear_stops_run() {
        let progress = Progress::default().start();
        let run = progress.run;
        let cleared = progress.clear(run);
        assert!(!cleared.is_running(run));
        assert_eq!(cleared.tick(run).value, 0);
    }
}
