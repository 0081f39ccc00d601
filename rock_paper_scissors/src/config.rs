use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "rock-paper-scissors", about = "Play Rock Paper Scissors against the computer")]
pub struct Config {
    /// Fixed seed for the computer's moves. Random when omitted.
    #[arg(long, env = "RPS_SEED")]
    pub seed: Option<u64>,

    /// Log filter directive, e.g. `info` or `rock_paper_scissors=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}
