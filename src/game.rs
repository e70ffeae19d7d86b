use crate::cards::{Card, Identities, Rank, Suit};
use crate::deck::Deck;
use crate::evaluator::RuleFlags;
use crate::rng::PseudoRandom;
use crate::scoring::{
    score_hand, HandInput, HandLevels, ScoreContext, ScoringError, Scratch, TriggerSlot,
};
use crate::view::ViewModifiers;
use tracing::debug;

/// Owned per-session state the scoring pipeline runs over.
///
/// ```
/// use joker_score::cards::parse_cards;
/// use joker_score::evaluator::HandRank;
/// use joker_score::game::GameContext;
/// use joker_score::scoring::{TriggerKind, TriggerSlot};
///
/// let mut game = GameContext::new("ABCD1234").with_slots([TriggerSlot::new(TriggerKind::Joker)]);
/// game.set_played(parse_cards("Ts Th 4c").unwrap());
/// let score = game.evaluate_hand().unwrap();
/// assert_eq!(score.hand, HandRank::Pair);
/// assert_eq!(score.total(), 30 * 6);
/// ```
#[derive(Debug, Clone)]
pub struct GameContext {
    rng: PseudoRandom,
    identities: Identities,
    deck: Deck,
    hand: Vec<Card>,
    played: Vec<Card>,
    levels: HandLevels,
    slots: Vec<TriggerSlot>,
    rules: RuleFlags,
    mods: ViewModifiers,
    scratch: Scratch,
}

impl GameContext {
    /// Fresh context with a standard 52-card deck (unshuffled), base level
    /// table and no slots.
    pub fn new(seed: impl Into<String>) -> Self {
        let mut identities = Identities::new();
        let deck = Deck::standard(&mut identities);
        Self {
            rng: PseudoRandom::new(seed),
            identities,
            deck,
            hand: Vec::new(),
            played: Vec::new(),
            levels: HandLevels::new(),
            slots: Vec::new(),
            rules: RuleFlags::default(),
            mods: ViewModifiers::default(),
            scratch: Scratch::default(),
        }
    }

    pub fn with_rules(mut self, rules: RuleFlags) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_view_modifiers(mut self, mods: ViewModifiers) -> Self {
        self.mods = mods;
        self
    }

    pub fn with_slots(mut self, slots: impl IntoIterator<Item = TriggerSlot>) -> Self {
        self.slots = slots.into_iter().collect();
        self
    }

    pub fn with_levels(mut self, levels: HandLevels) -> Self {
        self.levels = levels;
        self
    }

    /// Replace the deck; cards without an identity are given one.
    pub fn with_deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = Deck::from_cards(cards, &mut self.identities);
        self
    }

    pub fn rng(&self) -> &PseudoRandom {
        &self.rng
    }

    pub fn rng_mut(&mut self) -> &mut PseudoRandom {
        &mut self.rng
    }

    pub fn rules(&self) -> RuleFlags {
        self.rules
    }

    pub fn view_modifiers(&self) -> ViewModifiers {
        self.mods
    }

    pub fn levels(&self) -> &HandLevels {
        &self.levels
    }

    pub fn levels_mut(&mut self) -> &mut HandLevels {
        &mut self.levels
    }

    pub fn slots(&self) -> &[TriggerSlot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut Vec<TriggerSlot> {
        &mut self.slots
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards held in hand.
    pub fn held(&self) -> &[Card] {
        &self.hand
    }

    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// Scoring marks from the last evaluated hand.
    pub fn last_marks(&self) -> &[bool] {
        self.scratch.marks()
    }

    /// New card with a fresh identity. It is not placed anywhere.
    pub fn create_card(&mut self, rank: Rank, suit: Suit) -> Card {
        self.identities.create(rank, suit)
    }

    /// Shuffle the deck under `key`.
    pub fn shuffle_deck(&mut self, key: &str) {
        self.deck.shuffle(&mut self.rng, key);
    }

    /// Draw until the hand holds `size` cards or the deck runs out.
    /// Returns the number drawn.
    pub fn draw_to(&mut self, size: usize) -> usize {
        let wanted = size.saturating_sub(self.hand.len());
        let drawn = self.deck.draw_n(wanted);
        let n = drawn.len();
        self.hand.extend(drawn);
        n
    }

    pub fn set_held(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand = cards.into_iter().map(|c| self.identities.stamp(c)).collect();
    }

    pub fn set_played(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.played = cards.into_iter().map(|c| self.identities.stamp(c)).collect();
    }

    /// Move the hand cards at `indices` to the played area, in the order
    /// given. Indices must be in range and distinct.
    pub fn play(&mut self, indices: &[usize]) -> Result<(), ScoringError> {
        let len = self.hand.len();
        let mut seen = vec![false; len];
        for &index in indices {
            if index >= len {
                return Err(ScoringError::IndexOutOfRange { index, len });
            }
            if seen[index] {
                return Err(ScoringError::DuplicateIndex(index));
            }
            seen[index] = true;
        }
        self.played = indices.iter().map(|&i| self.hand[i]).collect();
        let mut i = 0;
        self.hand.retain(|_| {
            let keep = !seen[i];
            i += 1;
            keep
        });
        Ok(())
    }

    /// Clear the played area and return what was there.
    pub fn take_played(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.played)
    }

    /// Score the played cards against the held cards and active slots.
    pub fn evaluate_hand(&mut self) -> Result<ScoreContext, ScoringError> {
        debug!(
            seed = self.rng.seed(),
            played = self.played.len(),
            held = self.hand.len(),
            "evaluating hand"
        );
        score_hand(HandInput {
            played: &mut self.played,
            held: &self.hand,
            levels: &self.levels,
            slots: &mut self.slots,
            rng: &mut self.rng,
            rules: self.rules,
            mods: self.mods,
            scratch: &mut self.scratch,
        })
    }
}
