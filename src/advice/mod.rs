pub mod action;
pub use action::*;

pub mod position;
pub use position::*;

pub mod preflop;
pub use preflop::*;

pub mod postflop;
pub use postflop::*;

use crate::Chips;
use crate::Probability;
use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::error::Result;

/// The recommended line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

/// A recommendation: what to do, how big, and why.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Advice {
    pub verdict: Verdict,
    /// Bet or raise size in big blinds, when the verdict has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Chips>,
    /// Simulated equity behind a postflop recommendation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equity: Option<Probability>,
    pub reasoning: String,
}

impl Advice {
    pub fn fold(reasoning: String) -> Self {
        Self {
            verdict: Verdict::Fold,
            size: None,
            equity: None,
            reasoning,
        }
    }
    pub fn check(reasoning: String) -> Self {
        Self {
            verdict: Verdict::Check,
            size: None,
            equity: None,
            reasoning,
        }
    }
    pub fn call(reasoning: String) -> Self {
        Self {
            verdict: Verdict::Call,
            size: None,
            equity: None,
            reasoning,
        }
    }
    pub fn bet(size: Chips, reasoning: String) -> Self {
        Self {
            verdict: Verdict::Bet,
            size: Some(size),
            equity: None,
            reasoning,
        }
    }
    pub fn raise(size: Chips, reasoning: String) -> Self {
        Self {
            verdict: Verdict::Raise,
            size: Some(size),
            equity: None,
            reasoning,
        }
    }
    pub fn with_equity(mut self, equity: Probability) -> Self {
        self.equity = Some(equity);
        self
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Check => write!(f, "check"),
            Self::Call => write!(f, "call"),
            Self::Bet => write!(f, "bet"),
            Self::Raise => write!(f, "raise"),
        }
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.size {
            Some(size) => write!(f, "{} {:.1}bb ({})", self.verdict, size, self.reasoning),
            None => write!(f, "{} ({})", self.verdict, self.reasoning),
        }
    }
}

/// Routes a request to the preflop tables or the postflop simulator
/// depending on how much board there is.
pub fn advise(
    hole: Hole,
    board: Board,
    position: Position,
    opponents: usize,
    pot: Chips,
    facing: &Facing,
    trials: usize,
) -> Result<Advice> {
    match board.street() {
        Street::Pref => Ok(decide_preflop(&hole, position, facing)),
        _ => decide_postflop(&hole, &board, opponents, pot, facing, trials),
    }
}
