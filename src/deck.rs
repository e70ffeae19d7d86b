use crate::cards::{Card, Identities, Rank, Suit};
use crate::rng::PseudoRandom;

/// Draw pile of identity-bearing cards. The top of the deck is the end of
/// the vector.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use joker_score::cards::Identities;
    /// use joker_score::deck::Deck;
    ///
    /// let mut ids = Identities::new();
    /// let deck = Deck::standard(&mut ids);
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(ids.issued(), 52);
    /// ```
    pub fn standard(ids: &mut Identities) -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(ids.create(r, s));
            }
        }
        Self { cards }
    }

    /// Deck from existing cards; unassigned cards get an identity.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>, ids: &mut Identities) -> Self {
        Self { cards: cards.into_iter().map(|c| ids.stamp(c)).collect() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle under `key`. Cards are put in identity order first, so the
    /// result depends only on the seed, the key and the deck's contents.
    pub fn shuffle(&mut self, rng: &mut PseudoRandom, key: &str) {
        rng.shuffle_sorted_by_key(&mut self.cards, key, |c| c.id());
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }

    /// Return cards to the bottom of the deck.
    pub fn put_back(&mut self, cards: impl IntoIterator<Item = Card>) {
        let returned: Vec<Card> = cards.into_iter().collect();
        self.cards.splice(0..0, returned);
    }
}
