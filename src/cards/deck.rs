use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// The live deck: the 52-card universe minus whatever is already dead.
/// Supports uniform random draws without replacement. The generator is
/// always caller-supplied so that simulations stay seedable and workers
/// never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// The deck with the given dead cards removed.
    pub fn live(dead: Hand) -> Self {
        Self(dead.complement())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        debug_assert!(self.0.size() > 0);
        let i = rng.random_range(0..self.0.size());
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }

    /// Draws n cards as a single unordered set.
    pub fn deal(&mut self, rng: &mut impl Rng, n: usize) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }

    /// Draws two cards as a player's hole cards.
    pub fn hole(&mut self, rng: &mut impl Rng) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::try_from((a, b)).expect("draws are distinct")
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn live_excludes_dead() {
        let dead = Hand::try_from("As Kd 7c").unwrap();
        let deck = Deck::live(dead);
        assert!(deck.size() == 49);
        assert!(!deck.contains(&Card::try_from("As").unwrap()));
        assert!(deck.contains(&Card::try_from("2c").unwrap()));
    }

    #[test]
    fn draws_without_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        let mut seen = Hand::empty();
        for _ in 0..52 {
            let card = deck.draw(rng);
            assert!(!seen.contains(&card));
            seen = Hand::add(seen, Hand::from(card));
        }
        assert!(seen.size() == 52);
        assert!(deck.size() == 0);
    }

    #[test]
    fn deals_disjoint_holes() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let mut deck = Deck::new();
        let a = deck.hole(rng);
        let b = deck.hole(rng);
        assert!(!Hand::from(a).intersects(&Hand::from(b)));
        assert!(deck.size() == 48);
    }
}
