use crate::evaluator::HandRank;

/// Base value and per-level increase for one hand rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCurve {
    pub chips: u64,
    pub mult: u64,
    pub chips_per_level: u64,
    pub mult_per_level: u64,
}

const fn curve(chips: u64, mult: u64, chips_per_level: u64, mult_per_level: u64) -> LevelCurve {
    LevelCurve { chips, mult, chips_per_level, mult_per_level }
}

/// Indexed by [`HandRank::ordinal`].
const CURVES: [LevelCurve; HandRank::COUNT] = [
    curve(5, 1, 10, 1),    // HighCard
    curve(10, 2, 15, 1),   // Pair
    curve(20, 2, 20, 1),   // TwoPair
    curve(30, 3, 20, 2),   // ThreeOfAKind
    curve(30, 4, 30, 3),   // Straight
    curve(35, 4, 15, 2),   // Flush
    curve(40, 4, 25, 2),   // FullHouse
    curve(60, 7, 30, 3),   // FourOfAKind
    curve(100, 8, 40, 4),  // StraightFlush
    curve(120, 12, 35, 3), // FiveOfAKind
    curve(140, 14, 40, 4), // FlushHouse
    curve(160, 16, 50, 3), // FlushFive
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandLevel {
    pub level: u32,
    pub played: u32,
}

impl Default for HandLevel {
    fn default() -> Self {
        HandLevel { level: 1, played: 0 }
    }
}

/// Persistent per-rank level table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandLevels {
    entries: [HandLevel; HandRank::COUNT],
}

impl HandLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curve(rank: HandRank) -> LevelCurve {
        CURVES[rank.ordinal() as usize]
    }

    pub fn get(&self, rank: HandRank) -> HandLevel {
        self.entries[rank.ordinal() as usize]
    }

    pub fn level(&self, rank: HandRank) -> u32 {
        self.get(rank).level
    }

    pub fn times_played(&self, rank: HandRank) -> u32 {
        self.get(rank).played
    }

    /// Base chips at the current level.
    pub fn chips(&self, rank: HandRank) -> u64 {
        let c = Self::curve(rank);
        let steps = u64::from(self.level(rank).saturating_sub(1));
        c.chips.saturating_add(c.chips_per_level.saturating_mul(steps))
    }

    /// Base multiplier at the current level.
    pub fn mult(&self, rank: HandRank) -> u64 {
        let c = Self::curve(rank);
        let steps = u64::from(self.level(rank).saturating_sub(1));
        c.mult.saturating_add(c.mult_per_level.saturating_mul(steps))
    }

    pub fn level_up(&mut self, rank: HandRank, by: u32) {
        let entry = &mut self.entries[rank.ordinal() as usize];
        entry.level = entry.level.saturating_add(by);
    }

    /// Lower a level, never below 1.
    pub fn level_down(&mut self, rank: HandRank) {
        let entry = &mut self.entries[rank.ordinal() as usize];
        entry.level = entry.level.saturating_sub(1).max(1);
    }

    pub fn record_play(&mut self, rank: HandRank) {
        let entry = &mut self.entries[rank.ordinal() as usize];
        entry.played = entry.played.saturating_add(1);
    }

    /// The rank played most often; ties go to the stronger rank.
    pub fn most_played(&self) -> Option<HandRank> {
        HandRank::ALL
            .iter()
            .copied()
            .filter(|rank| self.times_played(*rank) > 0)
            .max_by_key(|rank| (self.times_played(*rank), rank.ordinal()))
    }
}
