use crate::cards::Rank;
use crate::view::CardView;

/// Per-rank card counts, indexed by rank value (2..=14).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    counts: [usize; 15],
}

impl RankGroups {
    pub fn from_views(views: &[CardView]) -> Self {
        let mut counts = [0usize; 15];
        for view in views {
            counts[view.rank.value() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> usize {
        self.counts[rank.value() as usize]
    }

    /// Highest rank held at least `min` times, skipping `except`.
    pub fn highest_with(&self, min: usize, except: Option<Rank>) -> Option<Rank> {
        Rank::ALL.iter().rev().copied().find(|&r| Some(r) != except && self.count(r) >= min)
    }

    pub fn five(&self) -> Option<Rank> {
        self.highest_with(5, None)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.highest_with(4, None)
    }

    pub fn trips(&self) -> Option<Rank> {
        self.highest_with(3, None)
    }

    /// Trips rank and a different pair rank, if both exist.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let trips = self.trips()?;
        let pair = self.highest_with(2, Some(trips))?;
        Some((trips, pair))
    }

    /// The two highest distinct ranks held at least twice.
    pub fn two_pair(&self) -> Option<(Rank, Rank)> {
        let high = self.highest_with(2, None)?;
        let low = self.highest_with(2, Some(high))?;
        Some((high, low))
    }

    pub fn pair(&self) -> Option<Rank> {
        self.highest_with(2, None)
    }

    #[cfg(test)]
    pub fn counts(&self) -> &[usize; 15] {
        &self.counts
    }
}

/// Mark the first `k` cards of `rank` in positional order.
pub fn mark_first(views: &[CardView], rank: Rank, k: usize, marks: &mut [bool]) {
    let mut remaining = k;
    for (mark, view) in marks.iter_mut().zip(views) {
        if remaining == 0 {
            break;
        }
        if view.rank == rank {
            *mark = true;
            remaining -= 1;
        }
    }
}
