//! joker-score: deterministic hand evaluation, scoring and keyed randomness
//!
//! Goals:
//! - Exact, reproducible results: the same seed and plays always give the
//!   same hand, the same scoring cards, the same chips and multiplier
//! - Bit-for-bit compatible keyed random streams
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score a hand
//! ```
//! use joker_score::cards::parse_cards;
//! use joker_score::evaluator::HandRank;
//! use joker_score::game::GameContext;
//! use joker_score::scoring::{TriggerKind, TriggerSlot};
//!
//! let slots = [TriggerSlot::new(TriggerKind::Joker), TriggerSlot::new(TriggerKind::Cavendish)];
//! let mut game = GameContext::new("TUTORIAL").with_slots(slots);
//! game.set_played(parse_cards("Kh Kd 7s 7c 2h").unwrap());
//!
//! let score = game.evaluate_hand().unwrap();
//! assert_eq!(score.hand, HandRank::TwoPair);
//! assert_eq!(score.chips(), 20 + 10 + 10 + 7 + 7);
//! assert_eq!(score.mult().floor(), (2 + 4) * 3);
//! ```
//!
//! ## Keyed randomness
//! ```
//! use joker_score::rng::PseudoRandom;
//!
//! let mut rng = PseudoRandom::new("TUTORIAL");
//! assert_eq!(rng.random_int(1, 100, "lucky_mult").unwrap(), 35);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod rng;
pub mod scoring;
pub mod view;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
