//! Seed-exact pseudo-random generation.
//!
//! [`Xoshiro256`] reproduces the reference engine bit for bit;
//! [`PseudoRandom`] layers independent per-purpose streams on top of it.

mod engine;
mod hash;
mod keyed;

pub use engine::Xoshiro256;
pub use hash::{advance, predict_seed, pseudohash};
pub use keyed::{generate_seed, random_string, shuffle_with, PseudoRandom};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RngError {
    #[error("interval is empty: [{min}, {max}]")]
    EmptyInterval { min: i64, max: i64 },
}
