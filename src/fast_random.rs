/// Park-Miller "minimal standard" PRNG. Cheap and reproducible, which is all
/// the Zobrist table and the playout driver need.
#[derive(Clone, Debug)]
pub struct FastRandom {
    seed: u32,
}

impl FastRandom {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of the recurrence.
        FastRandom { seed: seed.max(1) }
    }

    pub fn get_next_uint(&mut self) -> u32 {
        let lo = 16807u32.wrapping_mul(self.seed & 0xffff);
        let hi = 16807u32.wrapping_mul(self.seed >> 16);
        let lo = lo.wrapping_add((hi & 0x7fff) << 16);
        let lo = lo.wrapping_add(hi >> 15);
        self.seed = (lo & 0x7FFFFFFF).wrapping_add(lo >> 31);
        self.seed
    }

    pub fn get_next_u64(&mut self) -> u64 {
        (self.get_next_uint() as u64)
            ^ (self.get_next_uint() as u64) << 16
            ^ (self.get_next_uint() as u64) << 32
            ^ (self.get_next_uint() as u64) << 48
    }

    /// Uniform-ish index in `0..n`; `n` must be non-zero.
    pub fn next_below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        self.get_next_uint() as usize % n
    }
}
