/// Counts steps between nudges.
///
/// `tick` accumulates delivered steps, `flush` closes the current interval
/// into the registry. A run of 1-step intervals at the end of the registry
/// means the caller failed on every single attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ticker {
    ticker: u64,
    registry: Vec<u64>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, n: u64) {
        self.ticker += n;
    }

    pub fn flush(&mut self) {
        self.registry.push(self.ticker);
        self.ticker = 0;
    }

    /// Steps accumulated since the last flush.
    pub fn pending(&self) -> u64 {
        self.ticker
    }

    /// Flushed interval lengths, oldest first.
    pub fn registry(&self) -> &[u64] {
        &self.registry
    }

    /// Number of trailing registry entries equal to 1.
    pub fn last_ones(&self) -> usize {
        self.registry
            .iter()
            .rev()
            .take_while(|&&interval| interval == 1)
            .count()
    }
}
