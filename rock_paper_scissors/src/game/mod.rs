pub mod error;
pub mod models;
pub mod resolver;
pub mod scores;
pub mod session;

pub use error::GameError;
pub use models::{Move, Round, ScoreState, Verdict};
pub use resolver::RoundResolver;
pub use scores::ScoreTracker;
pub use session::GameSession;
