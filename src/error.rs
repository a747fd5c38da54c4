use super::cards::card::Card;

/// Everything that can go wrong between raw caller input and an equity
/// report. All variants indicate deterministic input problems, so none
/// are retried internally; the HTTP layer maps them to 400 responses.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid card notation '{0}'")]
    InvalidCard(String),
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    #[error("hand evaluation takes 5, 6, or 7 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("hole takes exactly 2 cards, got {0}")]
    InvalidHoleSize(usize),
    #[error("board takes 0, 3, 4, or 5 cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("opponent count must be at least 1")]
    InvalidOpponentCount(usize),
    #[error("unknown table position '{0}'")]
    InvalidPosition(String),
    #[error("deck exhausted: {needed} cards needed, {live} live")]
    DeckExhausted { needed: usize, live: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
