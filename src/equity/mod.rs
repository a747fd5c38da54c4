pub mod report;
pub use report::*;

pub mod simulator;
pub use simulator::*;

pub mod tally;
pub use tally::*;

use crate::DEFAULT_TRIALS;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::error::Result;

/// Hero's equity against a number of opponents holding random cards.
///
/// The thin entry point over the simulator: validates the hero hand and
/// board, then samples `trials` random deals (the crate default when
/// unspecified). Inputs are already-normalized cards; parsing text and
/// speaking HTTP happen elsewhere.
pub fn equity_vs_random_opponents(
    hero: &[Card],
    board: &[Card],
    opponents: usize,
    trials: Option<usize>,
) -> Result<Report> {
    let hero = Hole::try_from(hero)?;
    let board = Board::try_from(board)?;
    let simulator = Simulator::new(hero, board, opponents)?;
    Ok(simulator.simulate(trials.unwrap_or(DEFAULT_TRIALS)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::category::Category;

    #[test]
    fn distribution_covers_all_categories() {
        let hero = Card::parse("2c 2d").unwrap();
        let board = Card::parse("9h 5s Jc").unwrap();
        let report = equity_vs_random_opponents(&hero, &board, 1, Some(2_000)).unwrap();
        assert!(report.hand_distribution.len() == Category::all().len());
        for category in Category::all() {
            assert!(report.hand_distribution.contains_key(category));
        }
    }

    #[test]
    fn rejects_colliding_input() {
        let hero = Card::parse("As Kd").unwrap();
        let board = Card::parse("As 5s Jc").unwrap();
        assert!(equity_vs_random_opponents(&hero, &board, 1, None).is_err());
    }
}
