use tracing::debug;

use super::models::{ScoreState, Verdict};

#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    state: ScoreState,
}

impl ScoreTracker {
    pub fn state(&self) -> ScoreState {
        self.state
    }

    pub fn apply(&mut self, verdict: Verdict) -> ScoreState {
        match verdict {
            Verdict::Player => {
                self.state.player_score = self.state.player_score.saturating_add(1);
            }
            Verdict::Computer => {
                self.state.computer_score = self.state.computer_score.saturating_add(1);
            }
            Verdict::Tie => {}
        }
        debug!("Score after {:?}: {:?}", verdict, self.state);
        self.state
    }

    pub fn reset(&mut self) -> ScoreState {
        self.state = ScoreState::default();
        self.state
    }
}
