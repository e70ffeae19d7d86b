//! Scoring pipeline: chips and multiplier for one played hand.

mod context;
pub mod effects;
mod levels;
pub mod registry;
mod slots;

pub use context::{Mult, ScoreContext};
pub use levels::{HandLevel, HandLevels, LevelCurve};
pub use slots::{combine_passives, Passive, Table, TriggerKind, TriggerSlot};

use crate::cards::Card;
use crate::evaluator::{evaluate, EvalError, RuleFlags};
use crate::rng::{PseudoRandom, RngError};
use crate::view::{project_all, CardView, ViewError, ViewModifiers};
use tracing::{debug, trace};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error(transparent)]
    Rng(#[from] RngError),
    #[error("unknown trigger slot id {0}")]
    UnknownSlot(u16),
    #[error("unknown trigger slot key '{0}'")]
    UnknownSlotKey(String),
    #[error("card index {index} out of range for {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("card index {0} selected twice")]
    DuplicateIndex(usize),
    #[error("no cards played")]
    NothingPlayed,
}

/// Reusable view and mark buffers, resized per hand.
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    played: Vec<CardView>,
    held: Vec<CardView>,
    marks: Vec<bool>,
}

impl Scratch {
    fn prepare(&mut self, played: usize, held: usize) {
        self.played.resize(played, CardView::default());
        self.held.resize(held, CardView::default());
        self.marks.resize(played, false);
    }

    /// Scoring marks of the last evaluated hand.
    pub fn marks(&self) -> &[bool] {
        &self.marks
    }
}

/// Everything one run of the pipeline reads or mutates.
pub struct HandInput<'a> {
    pub played: &'a mut [Card],
    pub held: &'a [Card],
    pub levels: &'a HandLevels,
    pub slots: &'a mut [TriggerSlot],
    pub rng: &'a mut PseudoRandom,
    pub rules: RuleFlags,
    pub mods: ViewModifiers,
    pub scratch: &'a mut Scratch,
}

/// Score one hand.
///
/// Order: classify, base values, hand-determined hooks, re-project views,
/// scored-card triggers, held-card triggers, post hooks with slot editions.
pub fn score_hand(input: HandInput<'_>) -> Result<ScoreContext, ScoringError> {
    let HandInput { played, held, levels, slots, rng, rules, mods, scratch } = input;
    if played.is_empty() {
        return Err(ScoringError::NothingPlayed);
    }

    let (rules, mods, odds) = combine_passives(slots, rules, mods);
    scratch.prepare(played.len(), held.len());
    let Scratch { played: views, held: held_views, marks } = scratch;

    project_all(played, &mods, views)?;
    let hand = evaluate(rules, views, marks)?;

    let mut ctx = ScoreContext::new(hand, levels.chips(hand), levels.mult(hand));
    debug!(%hand, chips = ctx.chips(), mult = %ctx.mult(), "hand classified");

    for slot in slots.iter_mut() {
        slot.on_hand_determined(played, marks, views, &mut ctx);
    }

    project_all(played, &mods, views)?;
    project_all(held, &mods, held_views)?;

    let table = Table { slot_count: slots.len(), odds };

    let mut position = 0;
    for i in 0..played.len() {
        if !marks[i] {
            continue;
        }
        let view = views[i];
        let extra: u32 = slots.iter().map(|s| s.extra_played(&view, position)).sum();
        let triggers = 1 + u32::from(view.is_red_seal) + extra;
        for _ in 0..triggers {
            let card = played[i];
            ctx.add_chips(u64::from(card.total_chips_value()));
            effects::apply_scored(card, &mut ctx, rng, odds);
            effects::apply_edition(card.edition(), &mut ctx);
            let mut current = card;
            for slot in slots.iter_mut() {
                current = slot.on_played(current, &view, &mut ctx, rng, &table);
            }
            played[i] = current;
            trace!(card = %current, chips = ctx.chips(), mult = %ctx.mult(), "scored trigger");
        }
        position += 1;
    }

    for (card, view) in held.iter().zip(held_views.iter()) {
        let extra: u32 = slots.iter().map(|s| s.extra_held(view)).sum();
        let triggers = 1 + u32::from(view.is_red_seal) + extra;
        for _ in 0..triggers {
            effects::apply_held(*card, &mut ctx);
            for slot in slots.iter_mut() {
                slot.on_held(*card, view, &mut ctx);
            }
            trace!(card = %card, mult = %ctx.mult(), "held trigger");
        }
    }

    for slot in slots.iter_mut() {
        let edition = slot.edition;
        slot.on_post(&mut ctx, rng, &table)?;
        effects::apply_edition(edition, &mut ctx);
        trace!(kind = ?slot.kind, chips = ctx.chips(), mult = %ctx.mult(), "post trigger");
    }

    debug!(%hand, chips = ctx.chips(), mult = %ctx.mult(), total = %ctx.total(), "hand scored");
    Ok(ctx)
}
