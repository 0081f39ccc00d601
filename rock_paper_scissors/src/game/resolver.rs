use rand::{rngs::StdRng, Rng, SeedableRng};

use super::models::{Move, Verdict};

/// Draws opponent moves and decides rounds.
pub struct RoundResolver {
    rng: StdRng,
}

impl Default for RoundResolver {
    fn default() -> Self {
        RoundResolver {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RoundResolver {
    pub fn seeded(seed: u64) -> Self {
        RoundResolver {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn choose_opponent_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }

    pub fn resolve(player_move: Move, computer_move: Move) -> Verdict {
        if player_move == computer_move {
            Verdict::Tie
        } else if player_move.beats() == computer_move {
            Verdict::Player
        } else {
            Verdict::Computer
        }
    }
}
