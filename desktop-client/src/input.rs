use common::{Direction, GameSnapshot, Phase};

use crate::state::ClientCommand;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Restart,
}

// Turns raw key presses into game commands against the latest snapshot.
// The game state re-checks the reversal rule; the snapshot seen here can
// be one tick stale.
pub struct InputRouter {
    last_turn: Option<Direction>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self { last_turn: None }
    }

    pub fn route(&mut self, key: GameKey, snapshot: &GameSnapshot) -> Option<ClientCommand> {
        let direction = match key {
            GameKey::Up => Direction::Up,
            GameKey::Down => Direction::Down,
            GameKey::Left => Direction::Left,
            GameKey::Right => Direction::Right,
            GameKey::Restart => {
                if snapshot.phase != Phase::Over {
                    return None;
                }
                self.last_turn = None;
                return Some(ClientCommand::Restart);
            }
        };

        if snapshot.phase != Phase::Running {
            return None;
        }
        if direction.is_opposite(snapshot.direction) {
            return None;
        }
        if self.last_turn == Some(direction) {
            return None;
        }

        self.last_turn = Some(direction);
        Some(ClientCommand::Turn { direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Cell;

    fn snapshot(direction: Direction, phase: Phase) -> GameSnapshot {
        GameSnapshot {
            cells: vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)],
            food: Cell::new(5, 5),
            direction,
            score: 0,
            phase,
            over_reason: None,
            field_width: 20,
            field_height: 15,
            cell_size: 1,
        }
    }

    #[test]
    fn test_turn_is_forwarded() {
        let mut router = InputRouter::new();
        let snapshot = snapshot(Direction::Right, Phase::Running);

        let command = router.route(GameKey::Up, &snapshot);
        assert!(matches!(
            command,
            Some(ClientCommand::Turn {
                direction: Direction::Up
            })
        ));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut router = InputRouter::new();
        let snapshot = snapshot(Direction::Right, Phase::Running);

        assert!(router.route(GameKey::Left, &snapshot).is_none());
    }

    #[test]
    fn test_repeated_turn_is_deduplicated() {
        let mut router = InputRouter::new();
        let snapshot = snapshot(Direction::Right, Phase::Running);

        assert!(router.route(GameKey::Up, &snapshot).is_some());
        assert!(router.route(GameKey::Up, &snapshot).is_none());
        assert!(router.route(GameKey::Right, &snapshot).is_some());
        assert!(router.route(GameKey::Up, &snapshot).is_some());
    }

    #[test]
    fn test_turns_are_dropped_after_game_over() {
        let mut router = InputRouter::new();
        let snapshot = snapshot(Direction::Right, Phase::Over);

        assert!(router.route(GameKey::Up, &snapshot).is_none());
    }

    #[test]
    fn test_restart_only_when_over() {
        let mut router = InputRouter::new();

        let running = snapshot(Direction::Right, Phase::Running);
        assert!(router.route(GameKey::Restart, &running).is_none());

        let over = snapshot(Direction::Right, Phase::Over);
        assert!(matches!(
            router.route(GameKey::Restart, &over),
            Some(ClientCommand::Restart)
        ));
    }
}
