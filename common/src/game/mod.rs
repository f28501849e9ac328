mod body;
mod grid;
mod session_rng;
mod state;
mod types;

pub use body::SnakeBody;
pub use grid::GridGeometry;
pub use session_rng::SessionRng;
pub use state::{FOOD_SCORE, GameSnapshot, GameState, INITIAL_LENGTH, TARGET_SCORE};
pub use types::{Cell, Direction, GameOverReason, Phase};
