//! Deterministic seeding support.
//!
//! The stepping and seeding paths must be a pure function of the stored
//! 32-bit seed, so the generator here does all arithmetic with wrapping
//! 32-bit operations and matches the mulberry32 reference sequence bit for
//! bit across implementations.

/// Deterministic 32-bit PRNG (mulberry32 mixing function).
/// Restartable only by reseeding; carries no state beyond the seed counter.
#[derive(Clone, Copy, Debug)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator positioned at the start of the seed's sequence
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let t = self.state;
        let mut x = (t ^ (t >> 15)).wrapping_mul(1 | t);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(61 | x));
        x ^ (x >> 14)
    }

    /// Uniform float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Canonicalize an arbitrary integer into the unsigned 32-bit range.
/// Seeds arriving from external serialization pass through here so they
/// store and display stably.
pub const fn clamp_u32(n: i64) -> u32 {
    n.rem_euclid(1i64 << 32) as u32
}

/// Fresh non-deterministic seed for "new seed" actions only.
/// Never called from stepping or seeding paths; those stay pure functions
/// of the stored seed.
pub fn random_seed_u32() -> u32 {
    use rand::Rng;
    let mut rng = rand::rng();
    rng.random::<u32>()
}
