/// An 8-bit countdown timer, decremented by the host-driven 60 Hz tick and
/// never by instruction execution.
#[derive(Debug, Default)]
pub struct Timer {
    count: u8,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: u8) {
        self.count = value;
    }

    pub fn get(&self) -> u8 {
        self.count
    }

    /// Counts down by one, floored at 0.
    pub fn tick(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub fn active(&self) -> bool {
        self.count > 0
    }
}
