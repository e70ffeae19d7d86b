use super::RngError;
use rand::RngCore;

const DISCARD: usize = 16;
const TWO_POW_MINUS_53: f64 = 1.0 / (1u64 << 53) as f64;

/// xoshiro256** engine with the Lua 5.4 seeding convention.
///
/// Seeding sets the state to `[lo, 0xff, hi, 0]` and throws away the first
/// sixteen outputs, so the same `(lo, hi)` pair reproduces the reference
/// generator bit for bit.
///
/// ```
/// use joker_score::rng::Xoshiro256;
///
/// let mut rng = Xoshiro256::new(15, 0);
/// let draws: Vec<i64> = (0..5).map(|_| rng.next_in(1, 100).unwrap()).collect();
/// assert_eq!(draws, [84, 89, 12, 46, 76]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256 {
    state: [u64; 4],
}

impl Xoshiro256 {
    pub fn new(lo: u64, hi: u64) -> Self {
        let mut rng = Xoshiro256 { state: [lo, 0xff, hi, 0] };
        for _ in 0..DISCARD {
            rng.next_raw();
        }
        rng
    }

    /// Seed from a fractional seed value: its IEEE-754 bit pattern is the low word.
    pub fn from_fraction(seed: f64) -> Self {
        Self::new(seed.to_bits(), 0)
    }

    pub fn state(&self) -> [u64; 4] {
        self.state
    }

    pub fn next_raw(&mut self) -> u64 {
        let s = &mut self.state;
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 17;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);
        result
    }

    /// Uniform float in `[0, 1)` from the top 53 bits of one draw.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_raw() >> 11) as f64 * TWO_POW_MINUS_53
    }

    /// Uniform integer in `[min, max]` without modulo bias.
    pub fn next_in(&mut self, min: i64, max: i64) -> Result<i64, RngError> {
        if min > max {
            return Err(RngError::EmptyInterval { min, max });
        }
        let raw = self.next_raw();
        let span = (max as u64).wrapping_sub(min as u64);
        Ok(self.project(raw, span).wrapping_add(min as u64) as i64)
    }

    fn project(&mut self, mut raw: u64, span: u64) -> u64 {
        if span & span.wrapping_add(1) == 0 {
            // span + 1 is a power of two
            return raw & span;
        }
        // smallest 2^b - 1 not below span
        let mut lim = span;
        lim |= lim >> 1;
        lim |= lim >> 2;
        lim |= lim >> 4;
        lim |= lim >> 8;
        lim |= lim >> 16;
        lim |= lim >> 32;
        loop {
            raw &= lim;
            if raw <= span {
                return raw;
            }
            raw = self.next_raw();
        }
    }
}

impl RngCore for Xoshiro256 {
    fn next_u32(&mut self) -> u32 {
        (self.next_raw() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
