use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move: {0:?} (expected rock, paper or scissors)")]
    InvalidMove(String),
}
