//! Stagger policy for lists of revealed elements
//!
//! Element `i` in an ordered row starts its entrance `i * step` milliseconds
//! after the first, giving a cascade instead of a simultaneous pop-in.

/// Per-screen stagger step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerPolicy {
    step_ms: u32,
}

impl StaggerPolicy {
    /// Long, dense lists (the seven feature guides)
    pub const DENSE: StaggerPolicy = StaggerPolicy::new(100);

    /// Sparse three-card rows (highlights, testimonials, pricing)
    pub const SPARSE: StaggerPolicy = StaggerPolicy::new(200);

    pub const fn new(step_ms: u32) -> Self {
        Self { step_ms }
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    /// Start delay for the element at `index`
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        index.saturating_mul(self.step_ms)
    }

    /// Start delays for a row of `count` elements, in order
    pub fn delays(&self, count: usize) -> Vec<u32> {
        (0..count).map(|i| self.delay_for(i)).collect()
    }

    /// Time from the first element starting to the last element settling
    pub fn span_ms(&self, count: usize, duration_ms: u32) -> u32 {
        match count {
            0 => 0,
            n => self.delay_for(n - 1).saturating_add(duration_ms),
        }
    }
}
