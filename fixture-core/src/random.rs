//! Seeding and byte drawing for the fixture body.
//!
//! Generation never touches a process-global generator: callers hand an
//! [`RngCore`] to [`crate::ImageBuffer::generate`], so tests can pass a seeded
//! or mock generator.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::BODY_MODULUS;

/// Where the generator seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// Derived from the wall clock at the moment of resolution.
    #[default]
    Clock,
    /// Caller-supplied value; identical seeds give identical fixtures.
    Fixed(u64),
}

impl Seed {
    /// Returns the concrete seed value.
    pub fn resolve(self) -> u64 {
        match self {
            Seed::Clock => clock_seed(),
            Seed::Fixed(value) => value,
        }
    }

    /// Builds a generator from this seed.
    pub fn into_rng(self) -> StdRng {
        seeded_rng(self.resolve())
    }
}

impl From<Option<u64>> for Seed {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Seed::Clock, Seed::Fixed)
    }
}

/// Seed derived from the current wall-clock time.
///
/// Uses nanosecond resolution folded into 64 bits so that two invocations in
/// the same second still diverge. A clock set before the Unix epoch yields 0.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| {
            let nanos = elapsed.as_nanos();
            (nanos as u64) ^ ((nanos >> 64) as u64)
        })
        .unwrap_or(0)
}

/// Creates the standard generator from a 64-bit seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws one body byte: raw 32-bit output reduced modulo 255.
///
/// The reduction is slightly biased and never produces 255; consumers of the
/// fixture may rely on both.
#[inline]
pub fn modulo_byte<R: RngCore + ?Sized>(rng: &mut R) -> u8 {
    // Always < 255, so the narrowing is lossless.
    (rng.next_u32() % BODY_MODULUS) as u8
}
