//! Seeded randomness for dice rolls and phrase selection.
//!
//! Every random choice the narrator makes draws from a generator passed in
//! by the caller. These helpers build PCG32 generators from explicit seeds
//! so that a seed fully determines the narrated audio.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Creates a PCG32 RNG seeded from the operating system.
pub fn entropy_rng() -> Pcg32 {
    Pcg32::from_entropy()
}

/// Derives an independent seed for a named stream from a base seed.
///
/// Hashes the little-endian base seed followed by the UTF-8 key with BLAKE3
/// and keeps the first four bytes.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[0..4]);
    u32::from_le_bytes(bytes)
}

/// Creates the RNG for the `index`-th roll of a batch.
pub fn create_roll_rng(base_seed: u32, index: u32) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, &format!("roll-{}", index)))
}
