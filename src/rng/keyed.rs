use super::engine::Xoshiro256;
use super::hash::{advance, pseudohash};
use super::RngError;
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use tracing::trace;

/// Keyed pseudo-random streams derived from one seed string.
///
/// Every purpose key (`"lucky_mult"`, `"shuffle"`, ...) owns a rolling value;
/// each draw advances only that key's value and builds a fresh engine from
/// it, so draws under one key never shift the results of another.
///
/// ```
/// use joker_score::rng::PseudoRandom;
///
/// let mut a = PseudoRandom::new("TUTORIAL");
/// let mut b = PseudoRandom::new("TUTORIAL");
/// b.random("unrelated");
/// let first = a.random_int(1, 100, "lucky_mult").unwrap();
/// assert_eq!(first, b.random_int(1, 100, "lucky_mult").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PseudoRandom {
    seed: String,
    hashed_seed: f64,
    streams: HashMap<String, f64>,
}

impl PseudoRandom {
    pub fn new(seed: impl Into<String>) -> Self {
        let seed = seed.into();
        let hashed_seed = pseudohash(&seed);
        Self { seed, hashed_seed, streams: HashMap::new() }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn hashed_seed(&self) -> f64 {
        self.hashed_seed
    }

    /// Current rolling value for `key`, if it has been drawn from.
    pub fn rolling_value(&self, key: &str) -> Option<f64> {
        self.streams.get(key).copied()
    }

    /// Advance `key`'s stream and return the seed fraction for this draw.
    pub fn seed_value(&mut self, key: &str) -> f64 {
        let rolled = match self.streams.get_mut(key) {
            Some(rolling) => {
                *rolling = advance(*rolling);
                *rolling
            }
            None => {
                let initial = pseudohash(&format!("{key}{}", self.seed));
                trace!(key, initial, "opening keyed stream");
                let rolled = advance(initial);
                self.streams.insert(key.to_string(), rolled);
                rolled
            }
        };
        (rolled + self.hashed_seed) / 2.0
    }

    /// Fresh engine for one draw under `key`.
    pub fn engine(&mut self, key: &str) -> Xoshiro256 {
        Xoshiro256::from_fraction(self.seed_value(key))
    }

    pub fn random(&mut self, key: &str) -> f64 {
        self.engine(key).next_f64()
    }

    /// True with probability `p`.
    pub fn probability_check(&mut self, p: f64, key: &str) -> bool {
        self.random(key) < p
    }

    pub fn random_int(&mut self, min: i64, max: i64, key: &str) -> Result<i64, RngError> {
        if min > max {
            return Err(RngError::EmptyInterval { min, max });
        }
        self.engine(key).next_in(min, max)
    }

    /// Integer draw under `key` followed by `suffix` (e.g. an ante number).
    pub fn random_int_suffixed(
        &mut self,
        min: i64,
        max: i64,
        key: &str,
        suffix: impl Display,
    ) -> Result<i64, RngError> {
        self.random_int(min, max, &format!("{key}{suffix}"))
    }

    /// Fisher-Yates shuffle driven by a single engine seeded from `key`.
    pub fn shuffle<T>(&mut self, items: &mut [T], key: &str) {
        let mut engine = self.engine(key);
        shuffle_with(&mut engine, items);
    }

    /// Stable-sort by `sort_key` first, then shuffle, so the outcome does
    /// not depend on the incoming order.
    pub fn shuffle_sorted_by_key<T, K, F>(&mut self, items: &mut [T], key: &str, sort_key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        items.sort_by_key(sort_key);
        self.shuffle(items, key);
    }

    /// Uniform pick from an ordered collection. Empty input draws nothing.
    pub fn random_element<'a, T>(&mut self, items: &'a [T], key: &str) -> Option<&'a T> {
        let index = self.random_index(items.len(), key)?;
        items.get(index)
    }

    /// Uniform pick over a map's entries in key order.
    pub fn random_entry<'a, K, V>(
        &mut self,
        map: &'a BTreeMap<K, V>,
        key: &str,
    ) -> Option<(&'a K, &'a V)> {
        let index = self.random_index(map.len(), key)?;
        map.iter().nth(index)
    }

    fn random_index(&mut self, len: usize, key: &str) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let drawn = self.engine(key).next_in(1, len as i64).ok()?;
        Some(drawn as usize - 1)
    }

    /// Weighted pick: scale one draw by the total weight and return the first
    /// index whose running total reaches it.
    pub fn weighted_index(&mut self, weights: &[f64], key: &str) -> Option<usize> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return None;
        }
        let poll = self.random(key) * total;
        let mut running = 0.0;
        let mut last = None;
        for (i, weight) in weights.iter().enumerate() {
            if *weight <= 0.0 {
                continue;
            }
            running += weight;
            last = Some(i);
            if running >= poll {
                return Some(i);
            }
        }
        last
    }

    /// Biased random string drawn under `key`.
    pub fn random_string(&mut self, len: usize, key: &str) -> String {
        let mut engine = self.engine(key);
        biased_string(&mut engine, len)
    }
}

/// 1-based Fisher-Yates: for `i = n..=2`, swap item `i` with item `j` in `1..=i`.
pub fn shuffle_with<T>(engine: &mut Xoshiro256, items: &mut [T]) {
    for i in (2..=items.len()).rev() {
        // i >= 2 so the interval is never empty
        let j = engine.next_in(1, i as i64).unwrap_or(i as i64) as usize;
        items.swap(i - 1, j - 1);
    }
}

fn biased_string(engine: &mut Xoshiro256, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let (lo, hi) = if engine.next_f64() > 0.7 {
            (b'1', b'9')
        } else if engine.next_f64() > 0.45 {
            (b'A', b'N')
        } else {
            (b'P', b'Z')
        };
        let code = engine.next_in(lo as i64, hi as i64).unwrap_or(lo as i64);
        out.push(char::from(code as u8));
    }
    out
}

/// Biased fixed-length string from a numeric seed: digits 1-9 about 30% of
/// the time, otherwise letters with `O` excluded.
pub fn random_string(len: usize, seed: f64) -> String {
    let mut engine = Xoshiro256::from_fraction(seed);
    biased_string(&mut engine, len)
}

/// Fresh eight-character seed string from any entropy source.
pub fn generate_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_string(8, rng.random::<f64>())
}
