//! Shared fixtures for the milagro integration tests and benchmarks

use milagro_algorithms::{Big, CurveConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod vectors;

/// Seeded RNG so every randomized test is reproducible
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Scalar below the group order of `C`
pub fn random_scalar<C: CurveConfig>(rng: &mut ChaCha8Rng) -> Big {
    Big::randomnum(&C::ORDER, rng)
}

/// Parse a hex fixture; panics on a malformed one
pub fn big(hex: &str) -> Big {
    match Big::from_hex(hex) {
        Ok(b) => b,
        Err(e) => panic!("bad fixture {hex}: {e}"),
    }
}

/// Scalar from 32 big-endian bytes, reduced below the group order of `C`
pub fn scalar_from_bytes<C: CurveConfig>(bytes: &[u8; 32]) -> Big {
    let mut b = Big::from_bytes(bytes);
    b.rmod(&C::ORDER);
    b
}
