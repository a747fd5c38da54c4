use super::position::Position;
use crate::Chips;

/// What kind of aggression a facing-action description reports.
/// A 3-bet reads as a raise; there is no separate variant for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggression {
    Open,
    Bet,
    Raise,
}

/// The action hero is facing, as a tagged structure instead of loose
/// text: aggression kind, optional size in big blinds, and the optional
/// seat it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facing {
    pub action: Option<Aggression>,
    pub aggressor: Option<Position>,
    pub size: Option<Chips>,
}

impl Facing {
    pub fn none() -> Self {
        Self {
            action: None,
            aggressor: None,
            size: None,
        }
    }
    pub fn is_aggressed(&self) -> bool {
        self.action.is_some()
    }
}

impl Default for Facing {
    fn default() -> Self {
        Self::none()
    }
}

/// Parses phrases like "UTG raises to 3bb", "CO bets 10", "SB opens 3x",
/// "BTN 3bet to 12bb". Never fails: text with no recognizable aggression
/// parses as no action.
impl From<&str> for Facing {
    fn from(text: &str) -> Self {
        let text = text.to_lowercase();
        let tokens = text.split_whitespace().collect::<Vec<_>>();
        let aggressor = tokens
            .first()
            .and_then(|token| Position::try_from(*token).ok());
        let action = tokens.iter().find_map(|token| Self::aggression(token));
        let size = tokens.iter().find_map(|token| Self::amount(token));
        match action {
            None => Self::none(),
            Some(action) => Self {
                action: Some(action),
                aggressor,
                size,
            },
        }
    }
}

impl Facing {
    fn aggression(token: &str) -> Option<Aggression> {
        if token.starts_with("3bet") || token.starts_with("3-bet") {
            Some(Aggression::Raise)
        } else if token.starts_with("raise") {
            Some(Aggression::Raise)
        } else if token.starts_with("bet") {
            Some(Aggression::Bet)
        } else if token.starts_with("open") {
            Some(Aggression::Open)
        } else {
            None
        }
    }
    fn amount(token: &str) -> Option<Chips> {
        token
            .strip_suffix("bb")
            .or_else(|| token.strip_suffix('x'))
            .unwrap_or(token)
            .parse::<Chips>()
            .ok()
            .filter(|size| *size > 0.0)
    }
}
