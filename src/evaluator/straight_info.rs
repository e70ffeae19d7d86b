use crate::cards::Rank;
use crate::view::CardView;

const ACE_LOW: u8 = 1;
const MAX_RUN: u8 = 5;

/// The best straight-like run found in a hand, as a window of rank positions.
///
/// Positions are rank values (2..=14) with the Ace also present at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub low: u8,
    pub high: u8,
    pub len: u8,
}

impl StraightInfo {
    /// Find the longest run, scanning start positions from high to low and
    /// keeping the first run on ties. Returns `None` when the run is shorter
    /// than `required`.
    pub fn detect(views: &[CardView], required: usize, max_gap: u8) -> Option<Self> {
        let mut present: u16 = 0;
        for view in views {
            present |= 1 << view.rank.value();
            if view.rank == Rank::Ace {
                present |= 1 << ACE_LOW;
            }
        }

        let mut best: Option<StraightInfo> = None;
        for start in (ACE_LOW..=Rank::Ace.value()).rev() {
            if present & (1 << start) == 0 {
                continue;
            }
            let mut low = start;
            let mut len = 1u8;
            while len < MAX_RUN {
                let next = (1..=max_gap)
                    .filter(|gap| low > *gap)
                    .map(|gap| low - gap)
                    .find(|pos| present & (1 << pos) != 0);
                match next {
                    Some(pos) => {
                        low = pos;
                        len += 1;
                    }
                    None => break,
                }
            }
            if best.map_or(true, |b| len > b.len) {
                best = Some(StraightInfo { low, high: start, len });
            }
        }

        best.filter(|run| run.len as usize >= required)
    }

    /// True when a card of `rank` sits inside the run window.
    pub fn covers(&self, rank: Rank) -> bool {
        let v = rank.value();
        (self.low..=self.high).contains(&v) || (rank == Rank::Ace && self.low == ACE_LOW)
    }

    pub fn mark(&self, views: &[CardView], marks: &mut [bool]) {
        for (mark, view) in marks.iter_mut().zip(views) {
            if self.covers(view.rank) {
                *mark = true;
            }
        }
    }
}
