use super::rank::Rank;

/// A hand's kicker cards, as a 13-bit rank mask.
///
/// Numeric comparison of two masks with the same number of set bits
/// matches the card-by-card comparison of standard rules, so the
/// derived Ord is exactly showdown tie-breaking.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        (0..13)
            .rev()
            .filter(|i| k.0 & (1 << i) != 0)
            .map(|i| Rank::from(i as u8))
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_ranks() {
        let kickers = Kickers::from(vec![Rank::King, Rank::Nine, Rank::Two]);
        assert!(kickers == Kickers::from(Vec::<Rank>::from(kickers)));
    }

    #[test]
    fn higher_kicker_wins() {
        let kq = Kickers::from(vec![Rank::King, Rank::Queen]);
        let kj = Kickers::from(vec![Rank::King, Rank::Jack]);
        let qj = Kickers::from(vec![Rank::Queen, Rank::Jack]);
        assert!(kq > kj);
        assert!(kj > qj);
    }
}
