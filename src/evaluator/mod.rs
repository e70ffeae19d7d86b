pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::view::{project_all, CardView, ViewError, ViewModifiers};
use std::fmt;

/// Poker hand rank from weakest to strongest, including the three
/// hands that only exist with duplicated or wild cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandRank {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    FiveOfAKind = 9,
    FlushHouse = 10,
    FlushFive = 11,
}

impl HandRank {
    pub const COUNT: usize = 12;

    pub const ALL: [HandRank; Self::COUNT] = [
        HandRank::HighCard,
        HandRank::Pair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::FiveOfAKind,
        HandRank::FlushHouse,
        HandRank::FlushFive,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::FiveOfAKind => "Five of a Kind",
            HandRank::FlushHouse => "Flush House",
            HandRank::FlushFive => "Flush Five",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rule toggles that relax what counts as a flush or straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleFlags {
    /// Flushes and straights need only four cards.
    pub four_fingers: bool,
    /// Straights may skip one rank between cards.
    pub shortcut: bool,
}

impl RuleFlags {
    pub const fn required_len(self) -> usize {
        if self.four_fingers {
            4
        } else {
            5
        }
    }

    pub const fn max_gap(self) -> u8 {
        if self.shortcut {
            2
        } else {
            1
        }
    }

    pub const fn union(self, other: RuleFlags) -> Self {
        RuleFlags {
            four_fingers: self.four_fingers || other.four_fingers,
            shortcut: self.shortcut || other.shortcut,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("mark buffer holds {got} slots for {expected} cards")]
    MarkLength { expected: usize, got: usize },
    #[error(transparent)]
    View(#[from] ViewError),
}

/// Classify `views` and mark the scoring cards in `marks`.
///
/// `marks` must be exactly as long as `views`; every entry is overwritten.
///
/// ```
/// use joker_score::cards::parse_cards;
/// use joker_score::evaluator::{evaluate, HandRank, RuleFlags};
/// use joker_score::view::{CardView, ViewModifiers};
///
/// let cards = parse_cards("Kh Kd 7s 7c 2h").unwrap();
/// let views: Vec<CardView> =
///     cards.iter().map(|c| CardView::project(*c, &ViewModifiers::default())).collect();
/// let mut marks = [false; 5];
/// let rank = evaluate(RuleFlags::default(), &views, &mut marks).unwrap();
/// assert_eq!(rank, HandRank::TwoPair);
/// assert_eq!(marks, [true, true, true, true, false]);
/// ```
pub fn evaluate(
    rules: RuleFlags,
    views: &[CardView],
    marks: &mut [bool],
) -> Result<HandRank, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if views.len() != marks.len() {
        return Err(EvalError::MarkLength { expected: views.len(), got: marks.len() });
    }
    marks.fill(false);

    // Build analysis once (rank counts, flush suit, best straight run)
    let analysis = HandAnalysis::new(views, rules);

    // Check categories in priority order (strongest first)
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            detector.mark(&analysis, marks);
            return Ok(detector.rank());
        }
    }

    // Unreachable: HighCard detector always matches as fallback
    unreachable!("HighCard detector should always match")
}

/// Project `cards` into `views` and evaluate them.
///
/// `views` and `marks` are caller-owned scratch buffers sized to the hand.
pub fn evaluate_cards(
    rules: RuleFlags,
    mods: &ViewModifiers,
    cards: &[Card],
    views: &mut [CardView],
    marks: &mut [bool],
) -> Result<HandRank, EvalError> {
    project_all(cards, mods, views)?;
    evaluate(rules, views, marks)
}
