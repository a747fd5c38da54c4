use super::card::Card;
use super::suit::Suit;
use crate::error::Error;

/// Hand represents an unordered set of Cards. Stored as a u64 using only
/// the LSB bitstring of 52 bits, each bit one unique card in the set. A
/// single word for the full Hand independent of size, no heap allocation.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    /// Union of two disjoint sets.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }

    /// The cards NOT in this set, i.e. the live deck given these dead cards.
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn intersects(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    /// The subset of this hand in a given suit.
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// single-Card injection
impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}

/// one-way conversion to u16 Rank mask
/// erases suit information, just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = h.0;
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..13).fold(0u16, |y, i| y | (((x >> (i * 4)) & 1) as u16) << i)
    }
}

/// fallible Vec<Card> conversion, rejecting repeats
impl TryFrom<&[Card]> for Hand {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        cards.iter().try_fold(Self::empty(), |hand, card| {
            if hand.contains(card) {
                Err(Error::DuplicateCard(*card))
            } else {
                Ok(Self(hand.0 | u64::from(*card)))
            }
        })
    }
}

/// str isomorphism
/// this follows from the Card parser
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
