use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
///
/// The discriminant is the poker value (2..=14); [`Rank::index`] gives the
/// dense 0..=12 form stored inside a packed [`Card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Dense index, Two = 0 .. Ace = 12.
    pub const fn index(self) -> u8 {
        self as u8 - 2
    }

    pub const fn from_index(index: u8) -> Option<Rank> {
        match index {
            0 => Some(Rank::Two),
            1 => Some(Rank::Three),
            2 => Some(Rank::Four),
            3 => Some(Rank::Five),
            4 => Some(Rank::Six),
            5 => Some(Rank::Seven),
            6 => Some(Rank::Eight),
            7 => Some(Rank::Nine),
            8 => Some(Rank::Ten),
            9 => Some(Rank::Jack),
            10 => Some(Rank::Queen),
            11 => Some(Rank::King),
            12 => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Chips a card of this rank contributes before upgrades.
    pub const fn base_chips(self) -> u32 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            _ => self as u32,
        }
    }

    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string()))
            }
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits. The declaration order C < D < H < S is also the flush scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Suit {
        match index & 0b11 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// Card enhancement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Enhancement {
    #[default]
    None = 0,
    Bonus = 1,
    Mult = 2,
    Wild = 3,
    Glass = 4,
    Steel = 5,
    Stone = 6,
    Gold = 7,
    Lucky = 8,
}

impl Enhancement {
    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Enhancement::Bonus,
            2 => Enhancement::Mult,
            3 => Enhancement::Wild,
            4 => Enhancement::Glass,
            5 => Enhancement::Steel,
            6 => Enhancement::Stone,
            7 => Enhancement::Gold,
            8 => Enhancement::Lucky,
            _ => Enhancement::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Seal {
    #[default]
    None = 0,
    Gold = 1,
    Red = 2,
    Blue = 3,
    Purple = 4,
}

impl Seal {
    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Seal::Gold,
            2 => Seal::Red,
            3 => Seal::Blue,
            4 => Seal::Purple,
            _ => Seal::None,
        }
    }
}

/// Edition axis, shared by playing cards and trigger slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Edition {
    #[default]
    Base = 0,
    Foil = 1,
    Holographic = 2,
    Polychrome = 3,
    Negative = 4,
}

impl Edition {
    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Edition::Foil,
            2 => Edition::Holographic,
            3 => Edition::Polychrome,
            4 => Edition::Negative,
            _ => Edition::Base,
        }
    }
}

/// Stable card identity. Zero means "not issued by a game context".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CardId(pub u32);

impl CardId {
    pub const UNASSIGNED: CardId = CardId(0);

    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

// Packed layout, least significant first:
// [ rank (4) | suit (2) | enhancement (4) | seal (3) | edition (3)
//   | chip upgrade (10) | pad (6) | id (32) ]
const RANK_SHIFT: u32 = 0;
const SUIT_SHIFT: u32 = 4;
const ENH_SHIFT: u32 = 6;
const SEAL_SHIFT: u32 = 10;
const EDITION_SHIFT: u32 = 13;
const UPGRADE_SHIFT: u32 = 16;
const ID_SHIFT: u32 = 32;

const RANK_MASK: u64 = 0xF;
const SUIT_MASK: u64 = 0x3;
const ENH_MASK: u64 = 0xF;
const SEAL_MASK: u64 = 0x7;
const EDITION_MASK: u64 = 0x7;
const UPGRADE_MASK: u64 = 0x3FF;
const ID_MASK: u64 = 0xFFFF_FFFF;

/// A playing card packed into a single `u64`.
///
/// All mutators are functional: they return a copy with one field replaced.
///
/// ```
/// use joker_score::cards::{Card, Enhancement, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades).with_enhancement(Enhancement::Glass);
/// assert_eq!(card.to_string(), "As");
/// assert_eq!(card.enhancement(), Enhancement::Glass);
/// assert_eq!(card.total_chips_value(), 11);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(u64);

impl Card {
    /// Largest value the chip-upgrade counter can hold.
    pub const MAX_CHIP_UPGRADE: u16 = UPGRADE_MASK as u16;

    /// Unassigned-identity card with no modifiers.
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::with_id(CardId::UNASSIGNED, rank, suit)
    }

    pub const fn with_id(id: CardId, rank: Rank, suit: Suit) -> Self {
        Card(
            ((rank.index() as u64) << RANK_SHIFT)
                | ((suit.index() as u64) << SUIT_SHIFT)
                | ((id.0 as u64) << ID_SHIFT),
        )
    }

    const fn field(self, shift: u32, mask: u64) -> u8 {
        ((self.0 >> shift) & mask) as u8
    }

    const fn replace(self, shift: u32, mask: u64, value: u64) -> Self {
        Card((self.0 & !(mask << shift)) | ((value & mask) << shift))
    }

    pub const fn rank(self) -> Rank {
        match Rank::from_index(self.field(RANK_SHIFT, RANK_MASK)) {
            Some(rank) => rank,
            None => Rank::Ace,
        }
    }

    pub const fn suit(self) -> Suit {
        Suit::from_index(self.field(SUIT_SHIFT, SUIT_MASK))
    }

    pub const fn enhancement(self) -> Enhancement {
        Enhancement::from_bits(self.field(ENH_SHIFT, ENH_MASK))
    }

    pub const fn seal(self) -> Seal {
        Seal::from_bits(self.field(SEAL_SHIFT, SEAL_MASK))
    }

    pub const fn edition(self) -> Edition {
        Edition::from_bits(self.field(EDITION_SHIFT, EDITION_MASK))
    }

    pub const fn chip_upgrade(self) -> u16 {
        ((self.0 >> UPGRADE_SHIFT) & UPGRADE_MASK) as u16
    }

    pub const fn id(self) -> CardId {
        CardId(((self.0 >> ID_SHIFT) & ID_MASK) as u32)
    }

    /// The packed representation.
    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn with_rank(self, rank: Rank) -> Self {
        self.replace(RANK_SHIFT, RANK_MASK, rank.index() as u64)
    }

    pub const fn with_suit(self, suit: Suit) -> Self {
        self.replace(SUIT_SHIFT, SUIT_MASK, suit.index() as u64)
    }

    pub const fn with_enhancement(self, enhancement: Enhancement) -> Self {
        self.replace(ENH_SHIFT, ENH_MASK, enhancement as u64)
    }

    pub const fn with_seal(self, seal: Seal) -> Self {
        self.replace(SEAL_SHIFT, SEAL_MASK, seal as u64)
    }

    pub const fn with_edition(self, edition: Edition) -> Self {
        self.replace(EDITION_SHIFT, EDITION_MASK, edition as u64)
    }

    /// Set the chip-upgrade counter, clamped to [`Card::MAX_CHIP_UPGRADE`].
    pub const fn with_chip_upgrade(self, upgrade: u16) -> Self {
        let clamped =
            if upgrade > Self::MAX_CHIP_UPGRADE { Self::MAX_CHIP_UPGRADE } else { upgrade };
        self.replace(UPGRADE_SHIFT, UPGRADE_MASK, clamped as u64)
    }

    /// Add to the chip-upgrade counter, saturating at the field width.
    pub const fn add_chip_upgrade(self, extra: u16) -> Self {
        self.with_chip_upgrade(self.chip_upgrade().saturating_add(extra))
    }

    /// Natural chips plus permanent upgrades.
    pub const fn total_chips_value(self) -> u32 {
        self.rank().base_chips() + self.chip_upgrade() as u32
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id().0)
            .field("card", &format_args!("{}", self))
            .field("enhancement", &self.enhancement())
            .field("seal", &self.seal())
            .field("edition", &self.edition())
            .field("chip_upgrade", &self.chip_upgrade())
            .finish()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// Issues stable, unique card identities for one game context.
#[derive(Debug, Clone, Default)]
pub struct Identities {
    issued: u32,
}

impl Identities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identities handed out so far.
    pub fn issued(&self) -> u32 {
        self.issued
    }

    pub fn issue(&mut self) -> CardId {
        self.issued = self.issued.saturating_add(1);
        CardId(self.issued)
    }

    pub fn create(&mut self, rank: Rank, suit: Suit) -> Card {
        let id = self.issue();
        Card::with_id(id, rank, suit)
    }

    /// Give an unassigned card its identity. Already-assigned cards are
    /// returned untouched: identity is set once.
    pub fn stamp(&mut self, card: Card) -> Card {
        if card.id().is_assigned() {
            return card;
        }
        let id = self.issue();
        Card(card.0 | ((id.0 as u64) << ID_SHIFT))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // rank is everything but the last char ("10" allowed); suit is the last char
        let suit_ch = t.chars().last().ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
        let rank_str = &t[..t.len() - suit_ch.len_utf8()];
        if rank_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use joker_score::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("").is_err());
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Spades.to_string(), "s");
        assert_eq!(Suit::from_str("s").unwrap(), Suit::Spades);
        assert_eq!(Suit::from_str("Hearts").unwrap(), Suit::Hearts);
        assert!(Suit::from_str("x").is_err());
    }

    #[test]
    fn card_display_and_from_str() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "As");
        assert_eq!(Card::from_str("As").unwrap(), a);
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_str("ah").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert!(Card::from_str("s").is_err());
        assert!(Card::from_str("").is_err());
    }

    #[test]
    fn packed_fields_are_independent() {
        let card = Card::with_id(CardId(77), Rank::Queen, Suit::Hearts)
            .with_enhancement(Enhancement::Lucky)
            .with_seal(Seal::Red)
            .with_edition(Edition::Polychrome)
            .with_chip_upgrade(15);
        assert_eq!(card.rank(), Rank::Queen);
        assert_eq!(card.suit(), Suit::Hearts);
        assert_eq!(card.enhancement(), Enhancement::Lucky);
        assert_eq!(card.seal(), Seal::Red);
        assert_eq!(card.edition(), Edition::Polychrome);
        assert_eq!(card.chip_upgrade(), 15);
        assert_eq!(card.id(), CardId(77));

        let moved = card.with_suit(Suit::Clubs).with_rank(Rank::Two);
        assert_eq!(moved.seal(), Seal::Red);
        assert_eq!(moved.id(), CardId(77));
        assert_eq!(moved.to_string(), "2c");
    }

    #[test]
    fn chip_values_follow_rank_table() {
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).total_chips_value(), 2);
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).total_chips_value(), 10);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).total_chips_value(), 10);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).total_chips_value(), 11);
        let upgraded = Card::new(Rank::Five, Suit::Clubs).add_chip_upgrade(5).add_chip_upgrade(5);
        assert_eq!(upgraded.total_chips_value(), 15);
    }

    #[test]
    fn chip_upgrade_saturates_at_field_width() {
        let card = Card::new(Rank::Two, Suit::Clubs).with_chip_upgrade(5000);
        assert_eq!(card.chip_upgrade(), Card::MAX_CHIP_UPGRADE);
        let card = card.add_chip_upgrade(u16::MAX);
        assert_eq!(card.chip_upgrade(), Card::MAX_CHIP_UPGRADE);
        assert_eq!(card.rank(), Rank::Two);
        assert_eq!(card.enhancement(), Enhancement::None);
    }

    #[test]
    fn identities_are_unique_and_set_once() {
        let mut ids = Identities::new();
        let a = ids.create(Rank::Ace, Suit::Spades);
        let b = ids.create(Rank::Ace, Suit::Spades);
        assert_ne!(a, b);
        assert_eq!(a.id(), CardId(1));
        assert_eq!(b.id(), CardId(2));

        let stamped = ids.stamp(Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(stamped.id(), CardId(3));
        assert_eq!(ids.stamp(stamped).id(), CardId(3));
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("As, Kd 10c").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(xs[1], Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(xs[2], Card::new(Rank::Ten, Suit::Clubs));
    }
}
