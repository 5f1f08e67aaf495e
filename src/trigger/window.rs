//! Fixed-capacity rolling window backed by a ring buffer

/// Most recent `capacity` values, oldest evicted first.
///
/// Slots start zero-filled and a push overwrites the oldest slot in O(1);
/// nothing is shifted. The window does not know how many of its slots hold
/// real observations, callers that care track that themselves.
#[derive(Clone, Debug)]
pub(crate) struct RollingWindow {
    values: Box<[f64]>,
    /// Slot holding the oldest value, and the next one to overwrite
    cursor: usize,
}

impl RollingWindow {
    /// Create a zero-filled window.
    ///
    /// Only built by the slope trigger, which rejects windows below two.
    pub(crate) fn new(capacity: usize) -> Self {
        Self { values: vec![0.0; capacity].into_boxed_slice(), cursor: 0 }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Append the newest value, evicting the oldest
    #[inline]
    pub(crate) fn push(&mut self, value: f64) {
        self.values[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.values.len();
    }

    /// Values in time order, oldest first
    pub(crate) fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let (newer, older) = self.values.split_at(self.cursor);
        older.iter().chain(newer).copied()
    }

    /// Zero every slot
    pub(crate) fn clear(&mut self) {
        self.values.fill(0.0);
        self.cursor = 0;
    }
}
