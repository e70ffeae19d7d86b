//! Canonical per-evaluation card views.
//!
//! A [`CardView`] is what the evaluator and the scoring hooks actually look
//! at: the natural rank, the set of suits the card counts as, and the two
//! flags the rules care about. Views are rebuilt from [`Card`]s every time
//! they are needed and are never stored.

use crate::cards::{Card, Enhancement, Rank, Seal, Suit};

/// Set of suits a card counts as, one bit per [`Suit`] index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SuitMask(u8);

impl SuitMask {
    pub const EMPTY: SuitMask = SuitMask(0);
    pub const ALL: SuitMask = SuitMask(0b1111);

    pub const fn of(suit: Suit) -> Self {
        SuitMask(1 << suit.index())
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, suit: Suit) -> bool {
        self.0 & (1 << suit.index()) != 0
    }

    pub const fn union(self, other: SuitMask) -> Self {
        SuitMask(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Maps each natural suit to the suits it is treated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitRemap([SuitMask; 4]);

impl Default for SuitRemap {
    fn default() -> Self {
        Self::identity()
    }
}

impl SuitRemap {
    pub const fn identity() -> Self {
        SuitRemap([
            SuitMask::of(Suit::Clubs),
            SuitMask::of(Suit::Diamonds),
            SuitMask::of(Suit::Hearts),
            SuitMask::of(Suit::Spades),
        ])
    }

    /// Hearts and Diamonds count as each other; so do Spades and Clubs.
    pub const fn smeared() -> Self {
        let red = SuitMask::of(Suit::Diamonds).union(SuitMask::of(Suit::Hearts));
        let black = SuitMask::of(Suit::Clubs).union(SuitMask::of(Suit::Spades));
        SuitRemap([black, red, red, black])
    }

    /// Treat `from` as `to` instead of itself.
    pub const fn remap(mut self, from: Suit, to: Suit) -> Self {
        self.0[from.index() as usize] = SuitMask::of(to);
        self
    }

    /// Let `from` count as `also` in addition to whatever it already maps to.
    pub const fn merge(mut self, from: Suit, also: Suit) -> Self {
        let i = from.index() as usize;
        self.0[i] = self.0[i].union(SuitMask::of(also));
        self
    }

    /// Per-suit union of two remaps.
    pub const fn union(self, other: SuitRemap) -> Self {
        SuitRemap([
            self.0[0].union(other.0[0]),
            self.0[1].union(other.0[1]),
            self.0[2].union(other.0[2]),
            self.0[3].union(other.0[3]),
        ])
    }

    pub const fn apply(&self, natural: Suit) -> SuitMask {
        self.0[natural.index() as usize]
    }
}

/// Globally active modifiers that influence how cards are viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewModifiers {
    pub suit_remap: SuitRemap,
    /// Every card counts as a face card.
    pub all_face: bool,
}

/// Evaluation-time projection of a [`Card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub rank: Rank,
    pub suits: SuitMask,
    pub is_face: bool,
    pub is_red_seal: bool,
}

impl Default for CardView {
    fn default() -> Self {
        CardView { rank: Rank::Two, suits: SuitMask::EMPTY, is_face: false, is_red_seal: false }
    }
}

impl CardView {
    pub fn project(card: Card, mods: &ViewModifiers) -> Self {
        let suits = if card.enhancement() == Enhancement::Wild {
            SuitMask::ALL
        } else {
            mods.suit_remap.apply(card.suit())
        };
        CardView {
            rank: card.rank(),
            suits,
            is_face: card.rank().is_face() || mods.all_face,
            is_red_seal: card.seal() == Seal::Red,
        }
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.suits.contains(suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViewError {
    #[error("view buffer holds {got} slots for {expected} cards")]
    LengthMismatch { expected: usize, got: usize },
}

/// Project every card into `out`, which must be exactly as long as `cards`.
pub fn project_all(
    cards: &[Card],
    mods: &ViewModifiers,
    out: &mut [CardView],
) -> Result<(), ViewError> {
    if cards.len() != out.len() {
        return Err(ViewError::LengthMismatch { expected: cards.len(), got: out.len() });
    }
    for (slot, card) in out.iter_mut().zip(cards) {
        *slot = CardView::project(*card, mods);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Seal;

    #[test]
    fn wild_counts_as_every_suit_even_when_remapped() {
        let mods = ViewModifiers {
            suit_remap: SuitRemap::identity().remap(Suit::Clubs, Suit::Hearts),
            all_face: false,
        };
        let wild = Card::new(Rank::Two, Suit::Clubs).with_enhancement(Enhancement::Wild);
        assert_eq!(CardView::project(wild, &mods).suits, SuitMask::ALL);

        let plain = Card::new(Rank::Two, Suit::Clubs);
        let view = CardView::project(plain, &mods);
        assert!(view.has_suit(Suit::Hearts));
        assert!(!view.has_suit(Suit::Clubs));
    }

    #[test]
    fn smeared_merges_colours() {
        let mods = ViewModifiers { suit_remap: SuitRemap::smeared(), all_face: false };
        let view = CardView::project(Card::new(Rank::Nine, Suit::Diamonds), &mods);
        assert!(view.has_suit(Suit::Hearts));
        assert!(view.has_suit(Suit::Diamonds));
        assert!(!view.has_suit(Suit::Spades));
    }

    #[test]
    fn face_and_red_seal_flags() {
        let plain = ViewModifiers::default();
        let red_king = Card::new(Rank::King, Suit::Spades).with_seal(Seal::Red);
        let king = CardView::project(red_king, &plain);
        assert!(king.is_face);
        assert!(king.is_red_seal);

        let ten = Card::new(Rank::Ten, Suit::Spades);
        assert!(!CardView::project(ten, &plain).is_face);
        let everyone = ViewModifiers { all_face: true, ..ViewModifiers::default() };
        assert!(CardView::project(ten, &everyone).is_face);
    }

    #[test]
    fn project_all_rejects_length_mismatch() {
        let cards = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Two, Suit::Clubs)];
        let mut out = [CardView::default(); 3];
        let err = project_all(&cards, &ViewModifiers::default(), &mut out).unwrap_err();
        assert_eq!(err, ViewError::LengthMismatch { expected: 2, got: 3 });

        let mut out = [CardView::default(); 2];
        project_all(&cards, &ViewModifiers::default(), &mut out).unwrap();
        assert_eq!(out[0].rank, Rank::Ace);
        assert!(out[1].has_suit(Suit::Clubs));
    }
}
