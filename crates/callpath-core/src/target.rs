//! Call target with a bounded append-only log of observed arguments
//!
//! The log exists to make every benchmarked call observably side-effecting,
//! so the optimizer cannot discard the work under measurement. The harness
//! reads the log length after each repetition for the same reason.

/// Default capacity of the call log
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Accumulator of call arguments
///
/// The log is cleared when its size already exceeds `capacity` at the moment
/// of the next call, then the argument is appended. The check runs before the
/// append, so the log can momentarily hold `capacity + 1` entries. This
/// matches the measured original behavior exactly and is intentional.
#[derive(Debug, Clone)]
pub struct Target {
    calls: Vec<String>,
    capacity: usize,
}

impl Target {
    /// Create a target with the given log capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            calls: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record one call argument, clearing the log first if it has overflowed
    pub fn call(&mut self, arg: impl Into<String>) {
        if self.calls.len() > self.capacity {
            self.calls.clear();
        }
        self.calls.push(arg.into());
    }

    /// Arguments recorded so far, in call order
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Current log length
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// True if no calls have been recorded since the last clear
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Configured log capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
