pub mod config;
pub mod game;
pub mod game_app;
