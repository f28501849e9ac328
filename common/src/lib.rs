pub mod config;
pub mod game;
pub mod logger;

pub use game::{
    Cell, Direction, GameOverReason, GameSnapshot, GameState, GridGeometry, Phase, SessionRng,
    SnakeBody,
};
