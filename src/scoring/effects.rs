//! Fixed card-level effects: enhancements, seals and editions.

use super::ScoreContext;
use crate::cards::{Card, Edition, Enhancement, Seal};
use crate::rng::PseudoRandom;
use tracing::trace;

pub const BONUS_CHIPS: u64 = 30;
pub const MULT_MULT: u64 = 4;
pub const STONE_CHIPS: u64 = 50;
pub const LUCKY_MULT: u64 = 20;
pub const LUCKY_MONEY: i64 = 20;
pub const GOLD_SEAL_MONEY: i64 = 3;
pub const FOIL_CHIPS: u64 = 50;
pub const HOLO_MULT: u64 = 10;

/// Effect of a played card's enhancement and seal for one trigger.
///
/// `odds` is the probability numerator (1 normally, doubled by odds
/// modifiers); lucky rolls draw `lucky_mult` first, then `lucky_money`.
pub fn apply_scored(card: Card, ctx: &mut ScoreContext, rng: &mut PseudoRandom, odds: f64) {
    match card.enhancement() {
        Enhancement::Bonus => ctx.add_chips(BONUS_CHIPS),
        Enhancement::Mult => ctx.add_mult(MULT_MULT),
        Enhancement::Glass => ctx.times_mult(2, 1),
        Enhancement::Stone => ctx.add_chips(STONE_CHIPS),
        Enhancement::Lucky => {
            if rng.probability_check(odds / 5.0, "lucky_mult") {
                trace!(card = %card, "lucky mult");
                ctx.add_mult(LUCKY_MULT);
            }
            if rng.probability_check(odds / 15.0, "lucky_money") {
                trace!(card = %card, "lucky money");
                ctx.earn(LUCKY_MONEY);
            }
        }
        Enhancement::None | Enhancement::Wild | Enhancement::Steel | Enhancement::Gold => {}
    }
    if card.seal() == Seal::Gold {
        ctx.earn(GOLD_SEAL_MONEY);
    }
}

/// Effect of a card held in hand for one trigger.
pub fn apply_held(card: Card, ctx: &mut ScoreContext) {
    match card.enhancement() {
        Enhancement::Steel => ctx.times_mult(3, 2),
        Enhancement::None
        | Enhancement::Bonus
        | Enhancement::Mult
        | Enhancement::Wild
        | Enhancement::Glass
        | Enhancement::Stone
        | Enhancement::Gold
        | Enhancement::Lucky => {}
    }
}

/// Edition bonus, shared by playing cards and trigger slots.
pub fn apply_edition(edition: Edition, ctx: &mut ScoreContext) {
    match edition {
        Edition::Foil => ctx.add_chips(FOIL_CHIPS),
        Edition::Holographic => ctx.add_mult(HOLO_MULT),
        Edition::Polychrome => ctx.times_mult(3, 2),
        Edition::Base | Edition::Negative => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::evaluator::HandRank;

    fn ctx() -> ScoreContext {
        ScoreContext::new(HandRank::HighCard, 0, 1)
    }

    fn card(enhancement: Enhancement) -> Card {
        Card::new(Rank::Five, Suit::Clubs).with_enhancement(enhancement)
    }

    #[test]
    fn flat_enhancements() {
        let mut rng = PseudoRandom::new("E");
        let mut c = ctx();
        apply_scored(card(Enhancement::Bonus), &mut c, &mut rng, 1.0);
        apply_scored(card(Enhancement::Stone), &mut c, &mut rng, 1.0);
        apply_scored(card(Enhancement::Mult), &mut c, &mut rng, 1.0);
        apply_scored(card(Enhancement::Glass), &mut c, &mut rng, 1.0);
        assert_eq!(c.chips(), 80);
        assert_eq!((c.mult().numerator(), c.mult().denominator()), (10, 1));
    }

    #[test]
    fn inert_enhancements_do_nothing_when_scored() {
        let mut rng = PseudoRandom::new("E");
        for e in [Enhancement::None, Enhancement::Wild, Enhancement::Steel, Enhancement::Gold] {
            let mut c = ctx();
            apply_scored(card(e), &mut c, &mut rng, 1.0);
            assert_eq!(c, ctx());
        }
        assert_eq!(rng.rolling_value("lucky_mult"), None);
    }

    #[test]
    fn lucky_draws_both_keys_every_trigger() {
        let mut rng = PseudoRandom::new("E");
        let mut c = ctx();
        apply_scored(card(Enhancement::Lucky), &mut c, &mut rng, 1.0);
        assert!(rng.rolling_value("lucky_mult").is_some());
        assert!(rng.rolling_value("lucky_money").is_some());
    }

    #[test]
    fn certain_odds_always_pay() {
        let mut rng = PseudoRandom::new("E");
        let mut c = ctx();
        apply_scored(card(Enhancement::Lucky), &mut c, &mut rng, 15.0);
        assert_eq!(c.mult().floor(), 21);
        assert_eq!(c.dollars(), LUCKY_MONEY);
    }

    #[test]
    fn gold_seal_pays_per_trigger() {
        let mut rng = PseudoRandom::new("E");
        let mut c = ctx();
        let sealed = card(Enhancement::None).with_seal(Seal::Gold);
        apply_scored(sealed, &mut c, &mut rng, 1.0);
        apply_scored(sealed, &mut c, &mut rng, 1.0);
        assert_eq!(c.dollars(), 6);
    }

    #[test]
    fn only_steel_acts_when_held() {
        let mut c = ctx();
        apply_held(card(Enhancement::Steel), &mut c);
        apply_held(card(Enhancement::Glass), &mut c);
        assert_eq!((c.mult().numerator(), c.mult().denominator()), (3, 2));
    }

    #[test]
    fn editions() {
        let mut c = ctx();
        apply_edition(Edition::Foil, &mut c);
        apply_edition(Edition::Holographic, &mut c);
        apply_edition(Edition::Polychrome, &mut c);
        apply_edition(Edition::Negative, &mut c);
        assert_eq!(c.chips(), 50);
        assert_eq!((c.mult().numerator(), c.mult().denominator()), (33, 2));
    }
}
