//! Static catalog of trigger slot kinds, keyed by stable id.

use super::slots::{TriggerKind, TriggerSlot};
use super::ScoringError;
use crate::cards::Suit;

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: u16,
    pub key: &'static str,
    pub name: &'static str,
    pub text: &'static str,
    pub kind: TriggerKind,
}

const fn entry(
    id: u16,
    key: &'static str,
    name: &'static str,
    text: &'static str,
    kind: TriggerKind,
) -> CatalogEntry {
    CatalogEntry { id, key, name, text, kind }
}

pub static CATALOG: &[CatalogEntry] = &[
    entry(1, "j_joker", "Joker", "+4 Mult", TriggerKind::Joker),
    entry(
        2,
        "j_greedy_joker",
        "Greedy Joker",
        "+3 Mult per scored Diamond",
        TriggerKind::SuitJoker(Suit::Diamonds),
    ),
    entry(
        3,
        "j_lusty_joker",
        "Lusty Joker",
        "+3 Mult per scored Heart",
        TriggerKind::SuitJoker(Suit::Hearts),
    ),
    entry(
        4,
        "j_wrathful_joker",
        "Wrathful Joker",
        "+3 Mult per scored Spade",
        TriggerKind::SuitJoker(Suit::Spades),
    ),
    entry(
        5,
        "j_gluttenous_joker",
        "Gluttonous Joker",
        "+3 Mult per scored Club",
        TriggerKind::SuitJoker(Suit::Clubs),
    ),
    entry(
        6,
        "j_scary_face",
        "Scary Face",
        "+30 Chips per scored face card",
        TriggerKind::ScaryFace,
    ),
    entry(7, "j_smiley", "Smiley Face", "+5 Mult per scored face card", TriggerKind::SmileyFace),
    entry(
        8,
        "j_fibonacci",
        "Fibonacci",
        "+8 Mult per scored Ace, 2, 3, 5 or 8",
        TriggerKind::Fibonacci,
    ),
    entry(
        9,
        "j_even_steven",
        "Even Steven",
        "+4 Mult per scored even rank",
        TriggerKind::EvenSteven,
    ),
    entry(10, "j_odd_todd", "Odd Todd", "+31 Chips per scored odd rank", TriggerKind::OddTodd),
    entry(11, "j_hiker", "Hiker", "Scored cards permanently gain +5 Chips", TriggerKind::Hiker),
    entry(12, "j_hack", "Hack", "Retrigger each scored 2, 3, 4 or 5", TriggerKind::Hack),
    entry(
        13,
        "j_sock_and_buskin",
        "Sock and Buskin",
        "Retrigger each scored face card",
        TriggerKind::SockAndBuskin,
    ),
    entry(
        14,
        "j_hanging_chad",
        "Hanging Chad",
        "Retrigger the first scored card 2 times",
        TriggerKind::HangingChad,
    ),
    entry(15, "j_mime", "Mime", "Retrigger every held-in-hand ability", TriggerKind::Mime),
    entry(16, "j_baron", "Baron", "X1.5 Mult per King held in hand", TriggerKind::Baron),
    entry(
        17,
        "j_shoot_the_moon",
        "Shoot the Moon",
        "+13 Mult per Queen held in hand",
        TriggerKind::ShootTheMoon,
    ),
    entry(
        18,
        "j_bloodstone",
        "Bloodstone",
        "1 in 2 chance for scored Hearts to give X1.5 Mult",
        TriggerKind::Bloodstone,
    ),
    entry(19, "j_misprint", "Misprint", "+0 to +23 Mult", TriggerKind::Misprint),
    entry(
        20,
        "j_midas_mask",
        "Midas Mask",
        "Scored face cards become Gold",
        TriggerKind::MidasMask,
    ),
    entry(
        21,
        "j_vampire",
        "Vampire",
        "Gains X0.1 Mult per scored enhanced card, removing the enhancement",
        TriggerKind::Vampire,
    ),
    entry(22, "j_stuntman", "Stuntman", "+250 Chips", TriggerKind::Stuntman),
    entry(
        23,
        "j_abstract",
        "Abstract Joker",
        "+3 Mult per occupied slot",
        TriggerKind::AbstractJoker,
    ),
    entry(24, "j_cavendish", "Cavendish", "X3 Mult", TriggerKind::Cavendish),
    entry(
        25,
        "j_four_fingers",
        "Four Fingers",
        "Flushes and Straights need 4 cards",
        TriggerKind::FourFingers,
    ),
    entry(26, "j_shortcut", "Shortcut", "Straights may skip one rank", TriggerKind::Shortcut),
    entry(
        27,
        "j_pareidolia",
        "Pareidolia",
        "Every card counts as a face card",
        TriggerKind::Pareidolia,
    ),
    entry(
        28,
        "j_smeared",
        "Smeared Joker",
        "Hearts and Diamonds count as the same suit, Spades and Clubs too",
        TriggerKind::SmearedJoker,
    ),
    entry(
        29,
        "j_oops",
        "Oops! All 6s",
        "Doubles all listed probabilities",
        TriggerKind::OopsAllSixes,
    ),
];

pub fn lookup(id: u16) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.id == id)
}

pub fn lookup_key(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.key == key)
}

/// The catalog entry describing `kind`.
pub fn describe(kind: TriggerKind) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.kind == kind)
}

impl TriggerSlot {
    /// Fresh slot for a catalog id.
    pub fn from_id(id: u16) -> Result<Self, ScoringError> {
        lookup(id).map(|e| TriggerSlot::new(e.kind)).ok_or(ScoringError::UnknownSlot(id))
    }

    pub fn from_key(key: &str) -> Result<Self, ScoringError> {
        lookup_key(key)
            .map(|e| TriggerSlot::new(e.kind))
            .ok_or_else(|| ScoringError::UnknownSlotKey(key.to_string()))
    }
}
