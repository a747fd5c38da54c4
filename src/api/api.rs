use super::request::AdviseRequest;
use super::request::EquityRequest;
use crate::ADVICE_TRIALS;
use crate::MAX_TRIALS;
use crate::advice;
use crate::advice::Advice;
use crate::advice::Facing;
use crate::advice::Position;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::equity;
use crate::equity::Report;
use crate::error::Result;

/// The service facade the HTTP handlers and the console share: string
/// inputs in, domain results out. Stateless; every call builds its own
/// simulation and throws it away.
#[derive(Debug, Clone, Copy, Default)]
pub struct API;

impl API {
    pub fn new() -> Self {
        Self
    }

    pub fn equity(&self, req: &EquityRequest) -> Result<Report> {
        let hero = Card::parse(&req.hand)?;
        let board = Card::parse(req.board.as_deref().unwrap_or(""))?;
        let opponents = req.opponents.unwrap_or(1);
        let trials = req.trials.map(|t| t.min(MAX_TRIALS));
        equity::equity_vs_random_opponents(&hero, &board, opponents, trials)
    }

    pub fn advise(&self, req: &AdviseRequest) -> Result<Advice> {
        let hole = Hole::try_from(req.hand.as_str())?;
        let board = Board::try_from(req.board.as_deref().unwrap_or(""))?;
        let position = match req.position.as_deref() {
            Some(position) => Position::try_from(position)?,
            None => Position::Middle,
        };
        let facing = Facing::from(req.facing.as_deref().unwrap_or(""));
        advice::advise(
            hole,
            board,
            position,
            req.opponents.unwrap_or(1),
            req.pot.unwrap_or(1.5),
            &facing,
            ADVICE_TRIALS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::Verdict;

    #[test]
    fn equity_from_strings() {
        let report = API::new()
            .equity(&EquityRequest {
                hand: "2c2d".to_string(),
                board: Some("9h 5s Jc".to_string()),
                opponents: None,
                trials: Some(1_000),
            })
            .unwrap();
        assert!(report.trials == 1_000);
        assert!((report.hero_equity + report.villain_equity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn advice_from_strings() {
        let advice = API::new()
            .advise(&AdviseRequest {
                hand: "As Ah".to_string(),
                board: None,
                position: Some("utg".to_string()),
                opponents: None,
                pot: None,
                facing: None,
            })
            .unwrap();
        assert!(advice.verdict == Verdict::Raise);
    }

    #[test]
    fn trial_counts_are_capped() {
        let report = API::new()
            .equity(&EquityRequest {
                hand: "AsKs".to_string(),
                board: Some("AhKh2c2d9s".to_string()),
                opponents: Some(1),
                trials: Some(usize::MAX),
            })
            .unwrap();
        assert!(report.trials == MAX_TRIALS);
    }

    #[test]
    fn malformed_cards_are_rejected() {
        assert!(
            API::new()
                .equity(&EquityRequest {
                    hand: "XX".to_string(),
                    board: None,
                    opponents: None,
                    trials: None,
                })
                .is_err()
        );
    }
}
