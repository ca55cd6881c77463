use rand::{Rng, SeedableRng};

/// Source of node priorities.
///
/// Every node draws one priority at construction and keeps it for life.
/// Sources must be splittable so that each handle produced by a split can
/// keep inserting without sharing state with its sibling.
pub trait PrioritySource {
    fn next_priority(&mut self) -> u32;

    /// Derive an independent source from this one.
    fn fork(&mut self) -> Self
    where
        Self: Sized;
}

#[derive(Clone, Copy, Debug)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Seed used by [`Treap::new`](crate::Treap::new).
    pub const DEFAULT_SEED: u64 = 0x5EED_7EA9;

    pub fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        let state = if seed == 0 { Self::DEFAULT_SEED } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// splitmix64 finalizer.
fn mix_seed(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Default for XorShift64 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl PrioritySource for XorShift64 {
    fn next_priority(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn fork(&mut self) -> Self {
        // The raw draw is the parent's new state; scramble it so the child
        // does not replay the parent's stream.
        Self::new(mix_seed(self.next_u64()))
    }
}

/// Adapter drawing priorities from any seedable `rand` generator.
#[derive(Clone, Debug)]
pub struct RngPriority<R> {
    rng: R,
}

impl<R: Rng + SeedableRng> RngPriority<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }
}

impl<R: Rng + SeedableRng> PrioritySource for RngPriority<R> {
    fn next_priority(&mut self) -> u32 {
        self.rng.random()
    }

    fn fork(&mut self) -> Self {
        Self::new(R::from_rng(&mut self.rng))
    }
}
