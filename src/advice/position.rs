use crate::error::Error;

/// Where hero sits relative to the button. The middle seats (MP, LJ,
/// HJ) share one opening table, so they collapse into one variant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Position {
    Utg,
    Middle,
    Cutoff,
    Button,
    SmallBlind,
    BigBlind,
}

impl Position {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Utg,
            Self::Middle,
            Self::Cutoff,
            Self::Button,
            Self::SmallBlind,
            Self::BigBlind,
        ]
    }
}

/// str parsing, accepting the loose synonyms people actually type
impl TryFrom<&str> for Position {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "utg" | "early" => Ok(Self::Utg),
            "mp" | "lj" | "hj" | "hijack" | "middle" => Ok(Self::Middle),
            "co" | "cutoff" => Ok(Self::Cutoff),
            "btn" | "button" | "late" => Ok(Self::Button),
            "sb" => Ok(Self::SmallBlind),
            "bb" => Ok(Self::BigBlind),
            _ => Err(Error::InvalidPosition(s.to_string())),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Utg => write!(f, "UTG"),
            Self::Middle => write!(f, "MP"),
            Self::Cutoff => write!(f, "CO"),
            Self::Button => write!(f, "BTN"),
            Self::SmallBlind => write!(f, "SB"),
            Self::BigBlind => write!(f, "BB"),
        }
    }
}
