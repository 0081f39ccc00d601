use tracing::{debug, info};

use super::models::{Move, Round, ScoreState};
use super::resolver::RoundResolver;
use super::scores::ScoreTracker;

/// One player against the computer. Owns the random source and the scores.
#[derive(Default)]
pub struct GameSession {
    resolver: RoundResolver,
    tracker: ScoreTracker,
    last_round: Option<Round>,
    rounds_played: u64,
}

impl GameSession {
    pub fn new(seed: Option<u64>) -> Self {
        let resolver = match seed {
            Some(seed) => {
                debug!("Seeding opponent with {}", seed);
                RoundResolver::seeded(seed)
            }
            None => RoundResolver::default(),
        };

        GameSession {
            resolver,
            tracker: ScoreTracker::default(),
            last_round: None,
            rounds_played: 0,
        }
    }

    pub fn play_round(&mut self, player_move: Move) -> Round {
        let computer_move = self.resolver.choose_opponent_move();
        let verdict = RoundResolver::resolve(player_move, computer_move);
        self.tracker.apply(verdict);

        let round = Round {
            player_move,
            computer_move,
            verdict,
        };
        self.last_round = Some(round);
        self.rounds_played += 1;

        debug!(
            "Round {}: {} vs {} -> {:?}",
            self.rounds_played, player_move, computer_move, verdict
        );
        round
    }

    pub fn reset(&mut self) -> ScoreState {
        self.last_round = None;
        self.rounds_played = 0;
        let scores = self.tracker.reset();
        info!("Game reset successfully");
        scores
    }

    pub fn scores(&self) -> ScoreState {
        self.tracker.state()
    }

    pub fn last_round(&self) -> Option<Round> {
        self.last_round
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }
}
