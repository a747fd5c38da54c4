use super::ranking::Ranking;

/// The nine hand-strength tiers, stripped of their defining ranks.
/// This is the shape of the hand-distribution output: every simulated
/// trial buckets hero's best hand into exactly one of these.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Category {
    #[serde(rename = "high-card")]
    HighCard = 0,
    #[serde(rename = "one-pair")]
    OnePair = 1,
    #[serde(rename = "two-pair")]
    TwoPair = 2,
    #[serde(rename = "three-of-a-kind")]
    ThreeOAK = 3,
    #[serde(rename = "straight")]
    Straight = 4,
    #[serde(rename = "flush")]
    Flush = 5,
    #[serde(rename = "full-house")]
    FullHouse = 6,
    #[serde(rename = "four-of-a-kind")]
    FourOAK = 7,
    #[serde(rename = "straight-flush")]
    StraightFlush = 8,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOAK,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOAK,
            Self::StraightFlush,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HighCard => "high-card",
            Self::OnePair => "one-pair",
            Self::TwoPair => "two-pair",
            Self::ThreeOAK => "three-of-a-kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full-house",
            Self::FourOAK => "four-of-a-kind",
            Self::StraightFlush => "straight-flush",
        }
    }
}

impl From<Ranking> for Category {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::HighCard(_) => Self::HighCard,
            Ranking::OnePair(_) => Self::OnePair,
            Ranking::TwoPair(..) => Self::TwoPair,
            Ranking::ThreeOAK(_) => Self::ThreeOAK,
            Ranking::Straight(_) => Self::Straight,
            Ranking::Flush(_) => Self::Flush,
            Ranking::FullHouse(..) => Self::FullHouse,
            Ranking::FourOAK(_) => Self::FourOAK,
            Ranking::StraightFlush(_) => Self::StraightFlush,
        }
    }
}

/// usize isomorphism, for indexing tally arrays
impl From<Category> for usize {
    fn from(c: Category) -> usize {
        c as usize
    }
}
impl From<usize> for Category {
    fn from(n: usize) -> Self {
        Self::all()[n]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn bijective_usize() {
        for category in Category::all().iter().copied() {
            assert!(category == Category::from(usize::from(category)));
        }
    }

    #[test]
    fn follows_ranking_order() {
        let lo = Category::from(Ranking::Straight(Rank::Ace));
        let hi = Category::from(Ranking::Flush(Rank::Seven));
        assert!(lo < hi);
    }
}
