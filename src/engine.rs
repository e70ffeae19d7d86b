// Scoring engine API boundary. The external state machine (shop, blinds,
// packs, economy) drives hands and random pool draws through this trait
// without depending on how the context stores its state. It is implemented
// for `GameContext`.

use crate::cards::Card;
use crate::game::GameContext;
use crate::rng::RngError;
use crate::scoring::{HandLevels, ScoreContext, ScoringError, TriggerSlot};

pub trait ScoringEngine {
    // Hand lifecycle
    fn evaluate_hand(&mut self) -> Result<ScoreContext, ScoringError>;
    fn play(&mut self, indices: &[usize]) -> Result<(), ScoringError>;
    fn draw_to(&mut self, size: usize) -> usize;

    // Queries
    fn played(&self) -> &[Card];
    fn held(&self) -> &[Card];
    fn levels(&self) -> &HandLevels;
    fn levels_mut(&mut self) -> &mut HandLevels;
    fn slots(&self) -> &[TriggerSlot];

    // Random facade
    fn probability_check(&mut self, p: f64, key: &str) -> bool;
    fn random_int(&mut self, min: i64, max: i64, key: &str) -> Result<i64, RngError>;
    fn shuffle_cards(&mut self, cards: &mut [Card], key: &str);
    fn random_card(&mut self, cards: &[Card], key: &str) -> Option<Card>;
}

impl ScoringEngine for GameContext {
    fn evaluate_hand(&mut self) -> Result<ScoreContext, ScoringError> {
        self.evaluate_hand()
    }
    fn play(&mut self, indices: &[usize]) -> Result<(), ScoringError> {
        self.play(indices)
    }
    fn draw_to(&mut self, size: usize) -> usize {
        self.draw_to(size)
    }

    fn played(&self) -> &[Card] {
        self.played()
    }
    fn held(&self) -> &[Card] {
        self.held()
    }
    fn levels(&self) -> &HandLevels {
        self.levels()
    }
    fn levels_mut(&mut self) -> &mut HandLevels {
        self.levels_mut()
    }
    fn slots(&self) -> &[TriggerSlot] {
        self.slots()
    }

    fn probability_check(&mut self, p: f64, key: &str) -> bool {
        self.rng_mut().probability_check(p, key)
    }
    fn random_int(&mut self, min: i64, max: i64, key: &str) -> Result<i64, RngError> {
        self.rng_mut().random_int(min, max, key)
    }
    fn shuffle_cards(&mut self, cards: &mut [Card], key: &str) {
        self.rng_mut().shuffle(cards, key)
    }
    fn random_card(&mut self, cards: &[Card], key: &str) -> Option<Card> {
        self.rng_mut().random_element(cards, key).copied()
    }
}
