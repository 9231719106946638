use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Folds a seed string into a 32-bit state with `state = state * 31 + unit`
/// over its UTF-16 code units, wrapping on overflow.
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16().fold(0u32, |state, unit| {
        state.wrapping_mul(31).wrapping_add(u32::from(unit))
    })
}

/// Mulberry32: a 32-bit state generator with two xorshift-multiply rounds.
///
/// The output stream is bit-exact across platforms, which keeps seeded board
/// layouts reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;

    pub const fn new(state: u32) -> Self {
        Self { state }
    }

    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    pub const fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform sample in `[0, 1)` with 32 bits of precision.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }

    /// Uniform index in `[0, bound)`, computed as `floor(next_unit() * bound)`.
    pub fn next_index(&mut self, bound: u8) -> u8 {
        // next_unit is non-negative, so truncation is floor
        (self.next_unit() * f64::from(bound)) as u8
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
