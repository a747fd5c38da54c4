use super::Advice;
use super::action::Facing;
use super::position::Position;
use crate::OPEN_SIZE;
use crate::cards::hole::Hole;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Canonical 169-class notation for a hole: "AA", "AKs", "T9o".
pub fn class(hole: &Hole) -> String {
    let (hi, lo) = hole.ranks();
    if hole.paired() {
        format!("{}{}", hi, lo)
    } else if hole.suited() {
        format!("{}{}s", hi, lo)
    } else {
        format!("{}{}o", hi, lo)
    }
}

// UTG opening range: tight, pairs 77+ and strong broadways
static UTG_OPENS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut range = HashSet::new();
    range.extend(["AA", "KK", "QQ", "JJ", "TT", "99", "88", "77"]);
    range.extend(["AKs", "AQs", "AJs", "ATs", "A5s"]);
    range.extend(["AKo", "AQo"]);
    range.extend(["KQs", "KJs", "QJs", "JTs"]);
    range
});

// MP/HJ opening range: UTG plus medium pairs, suited aces, connectors
static MIDDLE_OPENS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut range = UTG_OPENS.clone();
    range.extend(["66", "55"]);
    range.extend(["A9s", "A8s", "A4s", "A3s"]);
    range.extend(["AJo", "ATo", "KQo"]);
    range.extend(["KTs", "QTs", "T9s", "98s"]);
    range
});

// CO opening range: middle plus small pairs and suited gappers
static CUTOFF_OPENS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut range = MIDDLE_OPENS.clone();
    range.extend(["44", "33", "22"]);
    range.extend(["A7s", "A6s", "A2s"]);
    range.extend(["KJo", "QJo", "JTo"]);
    range.extend(["K9s", "Q9s", "J9s", "87s", "76s", "65s"]);
    range
});

// BTN opening range: all pairs, all suited aces, most suited kings,
// suited connectors and one-gappers, offsuit broadways
static BUTTON_OPENS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut range = CUTOFF_OPENS.clone();
    range.extend(["K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s"]);
    range.extend(["Q8s", "Q7s", "Q6s", "Q5s", "J8s", "J7s"]);
    range.extend(["T8s", "97s", "86s", "75s", "54s"]);
    range.extend(["A9o", "KTo", "QTo", "T9o", "98o"]);
    range
});

// SB steal range: between CO and BTN
static SMALL_BLIND_OPENS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut range = CUTOFF_OPENS.clone();
    range.extend(["K8s", "K7s", "T8s", "54s", "KTo", "QTo"]);
    range
});

// 3-bet for value against any single raise
static PREMIUMS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["AA", "KK", "QQ", "AKs", "AKo"]));

// flat a single raise, keep the pot small
static DEFENDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut range = HashSet::new();
    range.extend(["JJ", "TT", "99", "88", "77", "66", "55"]);
    range.extend(["AQs", "AQo", "AJs", "ATs", "A5s"]);
    range.extend(["KQs", "KJs", "QJs", "JTs", "T9s", "98s", "87s"]);
    range
});

fn opens(position: Position) -> &'static HashSet<&'static str> {
    match position {
        Position::Utg => &UTG_OPENS,
        Position::Middle => &MIDDLE_OPENS,
        Position::Cutoff => &CUTOFF_OPENS,
        Position::Button => &BUTTON_OPENS,
        Position::SmallBlind => &SMALL_BLIND_OPENS,
        Position::BigBlind => &BUTTON_OPENS,
    }
}

/// Table-driven preflop decision: open when unopened and in range,
/// 3-bet premiums and flat the strong remainder against a raise.
pub fn decide_preflop(hole: &Hole, position: Position, facing: &Facing) -> Advice {
    let class = class(hole);
    match facing.action {
        Some(_) => {
            let open = facing.size.unwrap_or(OPEN_SIZE);
            if PREMIUMS.contains(class.as_str()) {
                Advice::raise(
                    open * 3.0,
                    format!("{} 3-bets for value over the {:.1}bb raise", class, open),
                )
            } else if DEFENDS.contains(class.as_str()) {
                Advice::call(format!("{} flats a single raise", class))
            } else {
                Advice::fold(format!("{} does not continue against a raise", class))
            }
        }
        None => {
            if position == Position::BigBlind {
                Advice::check("unopened pot, big blind checks its option".to_string())
            } else if opens(position).contains(class.as_str()) {
                Advice::raise(OPEN_SIZE, format!("{} opens from {}", class, position))
            } else {
                Advice::fold(format!("{} is below the {} opening range", class, position))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::Verdict;

    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }

    #[test]
    fn classes_are_canonical() {
        assert!(class(&hole("As Kd")) == "AKo");
        assert!(class(&hole("Kd As")) == "AKo");
        assert!(class(&hole("9h 8h")) == "98s");
        assert!(class(&hole("7c 7d")) == "77");
    }

    #[test]
    fn premiums_open_everywhere() {
        for position in Position::all().iter().copied() {
            let advice = decide_preflop(&hole("As Ah"), position, &Facing::none());
            assert!(matches!(advice.verdict, Verdict::Raise | Verdict::Check));
        }
    }

    #[test]
    fn junk_folds_early() {
        let advice = decide_preflop(&hole("7c 2d"), Position::Utg, &Facing::none());
        assert!(advice.verdict == Verdict::Fold);
    }

    #[test]
    fn button_opens_wider_than_utg() {
        let t8s = hole("Th 8h");
        assert!(decide_preflop(&t8s, Position::Utg, &Facing::none()).verdict == Verdict::Fold);
        assert!(decide_preflop(&t8s, Position::Button, &Facing::none()).verdict == Verdict::Raise);
    }

    #[test]
    fn aces_three_bet_a_raise() {
        let facing = Facing::from("UTG raises to 3bb");
        let advice = decide_preflop(&hole("As Ah"), Position::Button, &facing);
        assert!(advice.verdict == Verdict::Raise);
        assert!(advice.size == Some(9.0));
    }

    #[test]
    fn jacks_flat_a_raise() {
        let facing = Facing::from("CO raises to 2.5bb");
        let advice = decide_preflop(&hole("Jc Jd"), Position::Button, &facing);
        assert!(advice.verdict == Verdict::Call);
    }

    #[test]
    fn junk_folds_to_a_raise() {
        let facing = Facing::from("CO raises to 2.5bb");
        let advice = decide_preflop(&hole("7c 2d"), Position::Button, &facing);
        assert!(advice.verdict == Verdict::Fold);
    }

    #[test]
    fn big_blind_checks_unopened() {
        let advice = decide_preflop(&hole("7c 2d"), Position::BigBlind, &Facing::none());
        assert!(advice.verdict == Verdict::Check);
    }
}
