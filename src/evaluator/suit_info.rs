use crate::cards::Suit;
use crate::view::CardView;

/// Flush detection over suit masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    /// Cards counting as each suit, indexed by [`Suit::index`].
    pub counts: [usize; 4],
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// Count every suit a card belongs to; the flush suit is the last suit
    /// in scan order whose count reaches `required`.
    pub fn detect(views: &[CardView], required: usize) -> Self {
        let mut counts = [0usize; 4];
        for view in views {
            for suit in Suit::ALL {
                if view.has_suit(suit) {
                    counts[suit.index() as usize] += 1;
                }
            }
        }

        let mut flush_suit = None;
        for suit in Suit::ALL {
            if counts[suit.index() as usize] >= required {
                flush_suit = Some(suit);
            }
        }

        SuitInfo { counts, flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    /// Mark every card counting as the flush suit.
    pub fn mark(&self, views: &[CardView], marks: &mut [bool]) {
        if let Some(suit) = self.flush_suit {
            for (mark, view) in marks.iter_mut().zip(views) {
                if view.has_suit(suit) {
                    *mark = true;
                }
            }
        }
    }
}
