use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }

    /// Parses whitespace-separated or concatenated two-character card
    /// notations ("As Kd", "AsKd") into a vector of cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.replace(',', " ")
            .replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << c.0
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self(n.trailing_zeros() as u8)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if s.len() == 2 && s.is_ascii() {
            let rank = Rank::try_from(&s[0..1])?;
            let suit = Suit::try_from(&s[1..2])?;
            Ok(Card::from((rank, suit)))
        } else {
            Err(Error::InvalidCard(s.to_string()))
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert!(n == u8::from(Card::from(n)));
        }
    }

    #[test]
    fn bijective_u64() {
        let card = Card::try_from("Ts").unwrap();
        assert!(card == Card::from(u64::from(card)));
    }

    #[test]
    fn parse_roundtrip() {
        let card = Card::try_from("Ah").unwrap();
        assert!(card.rank() == Rank::Ace);
        assert!(card.suit() == Suit::Heart);
        assert!(format!("{}", card) == "Ah");
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("As Kd,Tc").unwrap();
        assert!(cards.len() == 3);
        assert!(cards[2] == Card::try_from("Tc").unwrap());
    }

    #[test]
    fn rejects_malformed() {
        assert!(Card::try_from("A").is_err());
        assert!(Card::try_from("Axs").is_err());
        assert!(Card::try_from("1s").is_err());
        assert!(Card::parse("As K").is_err());
    }
}
