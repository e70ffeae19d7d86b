//! Trigger slots: the ordered, pluggable effects that run around each hand.
//!
//! Every slot kind is a variant of [`TriggerKind`]; hooks dispatch with a
//! `match` so the slot data stays plain and copyable.

use super::{ScoreContext, ScoringError};
use crate::cards::{Card, Edition, Enhancement, Rank, Suit};
use crate::evaluator::RuleFlags;
use crate::rng::PseudoRandom;
use crate::view::{CardView, SuitRemap, ViewModifiers};
use tracing::trace;

const LOW_RANKS: [Rank; 4] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five];
const FIBONACCI_RANKS: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Five, Rank::Eight];
const EVEN_RANKS: [Rank; 5] = [Rank::Two, Rank::Four, Rank::Six, Rank::Eight, Rank::Ten];
const ODD_RANKS: [Rank; 5] = [Rank::Ace, Rank::Three, Rank::Five, Rank::Seven, Rank::Nine];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TriggerKind {
    Joker,
    /// +3 mult for each scored card of the suit.
    SuitJoker(Suit),
    ScaryFace,
    SmileyFace,
    Fibonacci,
    EvenSteven,
    OddTodd,
    Hiker,
    Hack,
    SockAndBuskin,
    HangingChad,
    Mime,
    Baron,
    ShootTheMoon,
    Bloodstone,
    Misprint,
    MidasMask,
    Vampire,
    Stuntman,
    AbstractJoker,
    Cavendish,
    FourFingers,
    Shortcut,
    Pareidolia,
    SmearedJoker,
    OopsAllSixes,
}

/// Facts about the table that hooks may read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table {
    pub slot_count: usize,
    /// Probability numerator, 1 unless doubled.
    pub odds: f64,
}

/// Rule and view changes a slot contributes just by being active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passive {
    pub rules: RuleFlags,
    pub all_face: bool,
    pub suit_remap: Option<SuitRemap>,
    pub doubles_odds: bool,
}

impl Passive {
    const NONE: Passive = Passive {
        rules: RuleFlags { four_fingers: false, shortcut: false },
        all_face: false,
        suit_remap: None,
        doubles_odds: false,
    };
}

/// Rules, view modifiers and odds after folding in every slot's passive.
pub fn combine_passives(
    slots: &[TriggerSlot],
    rules: RuleFlags,
    mods: ViewModifiers,
) -> (RuleFlags, ViewModifiers, f64) {
    let mut rules = rules;
    let mut mods = mods;
    let mut odds = 1.0;
    for slot in slots {
        let passive = slot.passive();
        rules = rules.union(passive.rules);
        mods.all_face |= passive.all_face;
        if let Some(remap) = passive.suit_remap {
            mods.suit_remap = mods.suit_remap.union(remap);
        }
        if passive.doubles_odds {
            odds *= 2.0;
        }
    }
    (rules, mods, odds)
}

/// One active slot: its kind, its own edition and a per-slot counter for
/// kinds that grow over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerSlot {
    pub kind: TriggerKind,
    pub edition: Edition,
    pub counter: u32,
}

impl From<TriggerKind> for TriggerSlot {
    fn from(kind: TriggerKind) -> Self {
        TriggerSlot::new(kind)
    }
}

impl TriggerSlot {
    pub const fn new(kind: TriggerKind) -> Self {
        TriggerSlot { kind, edition: Edition::Base, counter: 0 }
    }

    pub const fn with_edition(mut self, edition: Edition) -> Self {
        self.edition = edition;
        self
    }

    pub fn passive(&self) -> Passive {
        let mut p = Passive::NONE;
        match self.kind {
            TriggerKind::FourFingers => p.rules.four_fingers = true,
            TriggerKind::Shortcut => p.rules.shortcut = true,
            TriggerKind::Pareidolia => p.all_face = true,
            TriggerKind::SmearedJoker => p.suit_remap = Some(SuitRemap::smeared()),
            TriggerKind::OopsAllSixes => p.doubles_odds = true,
            _ => {}
        }
        p
    }

    /// Extra triggers for a scored card; `position` counts scored cards only.
    pub fn extra_played(&self, view: &CardView, position: usize) -> u32 {
        match self.kind {
            TriggerKind::Hack => u32::from(LOW_RANKS.contains(&view.rank)),
            TriggerKind::SockAndBuskin => u32::from(view.is_face),
            TriggerKind::HangingChad if position == 0 => 2,
            _ => 0,
        }
    }

    pub fn extra_held(&self, _view: &CardView) -> u32 {
        match self.kind {
            TriggerKind::Mime => 1,
            _ => 0,
        }
    }

    /// Runs once after classification, before any card triggers.
    pub fn on_hand_determined(
        &mut self,
        played: &mut [Card],
        marks: &[bool],
        views: &[CardView],
        _ctx: &mut ScoreContext,
    ) {
        match self.kind {
            TriggerKind::MidasMask => {
                for ((card, marked), view) in played.iter_mut().zip(marks).zip(views) {
                    if *marked && view.is_face {
                        *card = card.with_enhancement(Enhancement::Gold);
                    }
                }
            }
            TriggerKind::Vampire => {
                for (card, marked) in played.iter_mut().zip(marks) {
                    if *marked && card.enhancement() != Enhancement::None {
                        *card = card.with_enhancement(Enhancement::None);
                        self.counter = self.counter.saturating_add(1);
                    }
                }
                trace!(counter = self.counter, "vampire fed");
            }
            _ => {}
        }
    }

    /// Runs on every trigger of a scored card and returns the card to store.
    pub fn on_played(
        &mut self,
        card: Card,
        view: &CardView,
        ctx: &mut ScoreContext,
        rng: &mut PseudoRandom,
        table: &Table,
    ) -> Card {
        match self.kind {
            TriggerKind::SuitJoker(suit) if view.has_suit(suit) => ctx.add_mult(3),
            TriggerKind::ScaryFace if view.is_face => ctx.add_chips(30),
            TriggerKind::SmileyFace if view.is_face => ctx.add_mult(5),
            TriggerKind::Fibonacci if FIBONACCI_RANKS.contains(&view.rank) => ctx.add_mult(8),
            TriggerKind::EvenSteven if EVEN_RANKS.contains(&view.rank) => ctx.add_mult(4),
            TriggerKind::OddTodd if ODD_RANKS.contains(&view.rank) => ctx.add_chips(31),
            TriggerKind::Hiker => return card.add_chip_upgrade(5),
            TriggerKind::Bloodstone if view.has_suit(Suit::Hearts) => {
                if rng.probability_check(table.odds / 2.0, "bloodstone") {
                    ctx.times_mult(3, 2);
                }
            }
            _ => {}
        }
        card
    }

    pub fn on_held(&mut self, _card: Card, view: &CardView, ctx: &mut ScoreContext) {
        match self.kind {
            TriggerKind::Baron if view.rank == Rank::King => ctx.times_mult(3, 2),
            TriggerKind::ShootTheMoon if view.rank == Rank::Queen => ctx.add_mult(13),
            _ => {}
        }
    }

    /// Runs once after every card trigger. The slot's edition is applied
    /// by the caller afterwards.
    pub fn on_post(
        &mut self,
        ctx: &mut ScoreContext,
        rng: &mut PseudoRandom,
        table: &Table,
    ) -> Result<(), ScoringError> {
        match self.kind {
            TriggerKind::Joker => ctx.add_mult(4),
            TriggerKind::Misprint => {
                let rolled = rng.random_int(0, 23, "misprint")?;
                ctx.add_mult(rolled.unsigned_abs());
            }
            TriggerKind::Vampire => ctx.times_mult(10 + u64::from(self.counter), 10),
            TriggerKind::Stuntman => ctx.add_chips(250),
            TriggerKind::AbstractJoker => ctx.add_mult(3 * table.slot_count as u64),
            TriggerKind::Cavendish => ctx.times_mult(3, 1),
            _ => {}
        }
        Ok(())
    }
}
