/// Fixed-capacity set of indices in `0..64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitSet64(u64);

impl BitSet64 {
    pub const CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self(0)
    }

    pub fn set(&mut self, i: usize) {
        assert!(i < Self::CAPACITY, "bit index {} out of range", i);
        self.0 |= 1u64 << i;
    }

    pub fn get(&self, i: usize) -> bool {
        i < Self::CAPACITY && self.0 & (1u64 << i) != 0
    }

    pub fn count(&self) -> usize {
        self.0.count_ones() as _
    }
}
