use crate::evaluator::HandRank;
use std::fmt;

/// Multiplier kept as an unreduced fraction.
///
/// Flat bonuses scale by the current denominator and multiplicative bonuses
/// multiply both parts, so the value is exact and the composition order is
/// preserved.
///
/// When a step would overflow `u128`, both parts drop their low bit until it
/// fits. The value then carries a relative error below `1 / denominator` and
/// never moves against the applied factor. With a denominator of 1 there is
/// nothing left to drop and the numerator saturates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mult {
    numerator: u128,
    denominator: u128,
}

impl Mult {
    pub const fn whole(value: u64) -> Self {
        Mult { numerator: value as u128, denominator: 1 }
    }

    pub const fn numerator(&self) -> u128 {
        self.numerator
    }

    pub const fn denominator(&self) -> u128 {
        self.denominator
    }

    /// `numerator += x * denominator`
    pub fn add(&mut self, x: u64) {
        loop {
            let sum = (x as u128)
                .checked_mul(self.denominator)
                .and_then(|scaled| self.numerator.checked_add(scaled));
            match sum {
                Some(numerator) => {
                    self.numerator = numerator;
                    return;
                }
                None if self.denominator > 1 => self.halve(),
                None => {
                    self.numerator = u128::MAX;
                    return;
                }
            }
        }
    }

    /// `numerator *= a; denominator *= b`
    ///
    /// # Panics
    /// If `b` is zero.
    pub fn times(&mut self, a: u64, b: u64) {
        assert!(b != 0, "multiplier denominator must be non-zero");
        loop {
            let numerator = self.numerator.checked_mul(a as u128);
            let denominator = self.denominator.checked_mul(b as u128);
            match (numerator, denominator) {
                (Some(n), Some(d)) => {
                    self.numerator = n;
                    self.denominator = d;
                    return;
                }
                _ if self.denominator > 1 => self.halve(),
                _ => {
                    self.numerator = scale_floor(self.numerator, a, b);
                    return;
                }
            }
        }
    }

    fn halve(&mut self) {
        self.numerator >>= 1;
        self.denominator >>= 1;
    }

    /// Integer part of the multiplier.
    pub fn floor(&self) -> u128 {
        self.numerator / self.denominator
    }
}

impl fmt::Display for Mult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Chips, multiplier and hand rank accumulated while scoring one hand.
///
/// ```
/// use joker_score::evaluator::HandRank;
/// use joker_score::scoring::ScoreContext;
///
/// let mut ctx = ScoreContext::new(HandRank::Pair, 10, 2);
/// ctx.add_mult(4);
/// ctx.times_mult(3, 2);
/// assert_eq!((ctx.mult().numerator(), ctx.mult().denominator()), (18, 2));
/// assert_eq!(ctx.total(), 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreContext {
    pub hand: HandRank,
    chips: u64,
    mult: Mult,
    dollars: i64,
}

impl ScoreContext {
    pub fn new(hand: HandRank, chips: u64, mult: u64) -> Self {
        Self { hand, chips, mult: Mult::whole(mult), dollars: 0 }
    }

    pub fn chips(&self) -> u64 {
        self.chips
    }

    pub fn mult(&self) -> Mult {
        self.mult
    }

    /// Money earned while scoring, settled by the caller.
    pub fn dollars(&self) -> i64 {
        self.dollars
    }

    pub fn add_chips(&mut self, chips: u64) {
        self.chips = self.chips.saturating_add(chips);
    }

    pub fn add_mult(&mut self, x: u64) {
        self.mult.add(x);
    }

    pub fn times_mult(&mut self, a: u64, b: u64) {
        self.mult.times(a, b);
    }

    pub fn earn(&mut self, dollars: i64) {
        self.dollars = self.dollars.saturating_add(dollars);
    }

    /// `floor(chips * numerator / denominator)`, exact below `u128::MAX`.
    pub fn total(&self) -> u128 {
        let Mult { numerator, denominator } = self.mult;
        let whole = (self.chips as u128).saturating_mul(numerator / denominator);
        whole.saturating_add(fraction_floor(numerator % denominator, self.chips, denominator))
    }
}

/// `floor(x * a / b)`, saturating.
fn scale_floor(x: u128, a: u64, b: u64) -> u128 {
    let (a, b) = (a as u128, b as u128);
    // x = q*b + r with r < b < 2^64, so r * a cannot overflow
    let (q, r) = (x / b, x % b);
    q.checked_mul(a).and_then(|qa| qa.checked_add(r * a / b)).unwrap_or(u128::MAX)
}

/// `floor(r * c / d)` for `r < d`, by shift-and-subtract over the bits of `c`.
///
/// The product can need 192 bits; only the remainder modulo `d` is kept, so
/// nothing overflows and the quotient stays below `c`.
fn fraction_floor(r: u128, c: u64, d: u128) -> u128 {
    // x + y mod d for x, y < d, with the carry out
    let add_mod = |x: u128, y: u128| if x >= d - y { (x - (d - y), 1) } else { (x + y, 0) };
    let (mut quotient, mut rem) = (0u128, 0u128);
    for bit in (0..64).rev() {
        let (doubled, carry) = add_mod(rem, rem);
        quotient = quotient * 2 + carry;
        rem = doubled;
        if c >> bit & 1 == 1 {
            let (next, carry) = add_mod(rem, r);
            quotient += carry;
            rem = next;
        }
    }
    quotient
}
