pub const MAX: u16 = 100;
const STEP: u16 = 10;
const TICK_STEP: u16 = 2;

/// A determinate progress bar that advances on ticks while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub value: u16,
    pub running: bool,
}

impl Progress {
    pub fn tick(&mut self) {
        if self.running {
            self.value = (self.value + TICK_STEP).min(MAX);
            if self.value == MAX {
                self.running = false;
            }
        }
    }

    /// Start, pause, or (when already complete) restart from zero.
    pub fn toggle_running(&mut self) {
        if self.is_complete() {
            self.value = 0;
            self.running = true;
        } else {
            self.running = !self.running;
        }
    }

    pub fn increase(&mut self) {
        self.value = (self.value + STEP).min(MAX);
    }

    pub fn decrease(&mut self) {
        self.value = self.value.saturating_sub(STEP);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.value >= MAX
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.value.min(MAX)) / f64::from(MAX)
    }
}
