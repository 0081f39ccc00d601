use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Move::Rock => "✊",
            Move::Paper => "📄",
            Move::Scissors => "✂",
        }
    }

    /// Keyboard shortcut mapping: `1`/`r`, `2`/`p`, `3`/`s`.
    pub fn from_key(key: char) -> Option<Move> {
        match key {
            '1' | 'r' | 'R' => Some(Move::Rock),
            '2' | 'p' | 'P' => Some(Move::Paper),
            '3' | 's' | 'S' => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::InvalidMove(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Player,
    Computer,
    Tie,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Player => "🎉 You Win!",
            Verdict::Computer => "💻 Computer Wins!",
            Verdict::Tie => "😐 It's a Tie!",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub player_score: u32,
    pub computer_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player_move: Move,
    pub computer_move: Move,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_is_a_cycle() {
        for m in Move::ALL {
            assert_ne!(m.beats(), m);
            assert_ne!(m.beats().beats(), m);
            assert_eq!(m.beats().beats().beats(), m);
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("rock".parse::<Move>().unwrap(), Move::Rock);
        assert_eq!(" Paper ".parse::<Move>().unwrap(), Move::Paper);
        assert_eq!("SCISSORS".parse::<Move>().unwrap(), Move::Scissors);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "lizard".parse::<Move>().unwrap_err();
        assert_eq!(err, GameError::InvalidMove("lizard".to_string()));
        assert!("".parse::<Move>().is_err());
        assert!("r".parse::<Move>().is_err());
    }

    #[test]
    fn keyboard_shortcuts() {
        assert_eq!(Move::from_key('1'), Some(Move::Rock));
        assert_eq!(Move::from_key('R'), Some(Move::Rock));
        assert_eq!(Move::from_key('p'), Some(Move::Paper));
        assert_eq!(Move::from_key('3'), Some(Move::Scissors));
        assert_eq!(Move::from_key('s'), Some(Move::Scissors));
        assert_eq!(Move::from_key('4'), None);
        assert_eq!(Move::from_key(' '), None);
    }

    #[test]
    fn serializes_with_lowercase_names() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        assert_eq!(serde_json::to_string(&Verdict::Tie).unwrap(), "\"tie\"");

        let scores = ScoreState {
            player_score: 2,
            computer_score: 1,
        };
        assert_eq!(
            serde_json::to_value(scores).unwrap(),
            serde_json::json!({ "player_score": 2, "computer_score": 1 })
        );
    }

    #[test]
    fn deserialize_rejects_unknown_move() {
        assert_eq!(
            serde_json::from_str::<Move>("\"paper\"").unwrap(),
            Move::Paper
        );
        assert!(serde_json::from_str::<Move>("\"lizard\"").is_err());
        assert!(serde_json::from_str::<Move>("\"Rock\"").is_err());
        assert!(serde_json::from_str::<Move>("0").is_err());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Move::Paper.to_string(), "paper");
    }
}
