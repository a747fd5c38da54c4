use super::card::Card;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::error::Error;
use crate::error::Result;

/// A hand's strength.
///
/// Always derived from an unordered set of 5 to 7 cards. Ordering is
/// total: category first, then the ranking's defining ranks, then
/// kickers. Two hands compare Equal exactly when they split the pot at
/// showdown.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn value(&self) -> Ranking {
        self.value
    }
    pub fn kicks(&self) -> Kickers {
        self.kicks
    }

    /// Evaluates a caller-supplied set of cards.
    ///
    /// The simulator's hot path goes through `From<Hand>` instead, where
    /// duplicates are impossible by construction; this entry defends
    /// against colliding caller input, which would otherwise silently
    /// corrupt everything downstream.
    pub fn evaluate(cards: &[Card]) -> Result<Self> {
        match cards.len() {
            5..=7 => Ok(Self::from(Hand::try_from(cards)?)),
            n => Err(Error::InvalidHandSize(n)),
        }
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}
