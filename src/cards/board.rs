use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::error::Error;

/// The community cards. Always a legal size: 0, 3, 4, or 5.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Board(Hand);

impl Board {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn street(&self) -> Street {
        Street::try_from(self.0.size()).expect("size invariant")
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Cards still to be dealt to complete the board.
    pub fn missing(&self) -> usize {
        self.street().n_missing()
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Street::try_from(cards.len())?;
        Ok(Self(Hand::try_from(cards)?))
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streets_from_sizes() {
        assert!(Board::empty().street() == Street::Pref);
        assert!(Board::try_from("Ah Kh 2c").unwrap().street() == Street::Flop);
        assert!(Board::try_from("Ah Kh 2c 2d").unwrap().street() == Street::Turn);
        assert!(Board::try_from("Ah Kh 2c 2d 9s").unwrap().street() == Street::Rive);
    }

    #[test]
    fn rejects_illegal_sizes() {
        assert!(matches!(
            Board::try_from("Ah Kh"),
            Err(Error::InvalidBoardSize(2))
        ));
        assert!(matches!(
            Board::try_from("Ah Kh 2c 2d 9s 3s"),
            Err(Error::InvalidBoardSize(6))
        ));
    }

    #[test]
    fn rejects_duplicates() {
        assert!(matches!(
            Board::try_from("Ah Ah 2c"),
            Err(Error::DuplicateCard(_))
        ));
    }
}
