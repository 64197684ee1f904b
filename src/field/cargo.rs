//! Drone cargo hold.

/// Snapshot of a drone's cargo hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cargo {
    /// Resource currently carried.
    pub payload: u32,
    /// Maximum resource the hold accepts.
    pub capacity: u32,
}

impl Cargo {
    /// Creates a new cargo snapshot. `payload` is clamped to `capacity`.
    pub fn new(payload: u32, capacity: u32) -> Self {
        Self {
            payload: payload.min(capacity),
            capacity,
        }
    }

    /// An empty hold of the given capacity.
    pub fn empty(capacity: u32) -> Self {
        Self::new(0, capacity)
    }

    /// Room left in the hold.
    pub fn free_space(&self) -> u32 {
        self.capacity - self.payload
    }

    pub fn is_full(&self) -> bool {
        self.free_space() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.payload == 0
    }

    /// Adds up to `amount` and returns how much actually fit.
    pub fn load(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.free_space());
        self.payload += taken;
        taken
    }

    /// Empties the hold and returns what was carried.
    pub fn unload(&mut self) -> u32 {
        std::mem::take(&mut self.payload)
    }
}
