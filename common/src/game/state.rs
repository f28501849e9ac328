use crate::log;

use super::body::SnakeBody;
use super::grid::GridGeometry;
use super::session_rng::SessionRng;
use super::types::{Cell, Direction, GameOverReason, Phase};

pub const FOOD_SCORE: u32 = 2;
pub const TARGET_SCORE: u32 = 20;
pub const INITIAL_LENGTH: usize = 3;

const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Debug)]
pub struct GameState {
    grid: GridGeometry,
    body: SnakeBody,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Cell,
    score: u32,
    phase: Phase,
    over_reason: Option<GameOverReason>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub cells: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub score: u32,
    pub phase: Phase,
    pub over_reason: Option<GameOverReason>,
    pub field_width: i32,
    pub field_height: i32,
    pub cell_size: i32,
}

impl GameState {
    pub fn new(grid: GridGeometry, rng: &mut SessionRng) -> Self {
        let body = Self::initial_body(&grid);
        let food = Self::place_food(&grid, &body, rng);

        Self {
            grid,
            body,
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            food,
            score: 0,
            phase: Phase::Running,
            over_reason: None,
        }
    }

    fn initial_body(grid: &GridGeometry) -> SnakeBody {
        let head = grid.cell_at(INITIAL_LENGTH as i32 - 1, grid.rows() / 2);
        SnakeBody::new(head, INITIAL_DIRECTION, INITIAL_LENGTH, grid.cell_size())
    }

    fn place_food(grid: &GridGeometry, body: &SnakeBody, rng: &mut SessionRng) -> Cell {
        loop {
            let cell = grid.random_cell(rng);
            if !body.contains_at_or_after(cell, 0) {
                return cell;
            }
        }
    }

    pub fn tick(&mut self, rng: &mut SessionRng) {
        if self.phase != Phase::Running {
            return;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        if self.body.head() == self.food {
            self.body.grow();
            self.score += FOOD_SCORE;
            self.food = Self::place_food(&self.grid, &self.body, rng);
            log!(
                "Food eaten at ({}, {}). Score: {}",
                self.body.head().x,
                self.body.head().y,
                self.score
            );

            if self.score >= TARGET_SCORE {
                self.finish(GameOverReason::TargetScoreReached);
                return;
            }
        }

        self.body.advance(self.direction, self.grid.cell_size());

        let head = self.body.head();
        if !self.grid.contains(head) {
            self.finish(GameOverReason::WallCollision);
            return;
        }
        if self.body.contains_at_or_after(head, 1) {
            self.finish(GameOverReason::SelfCollision);
        }
    }

    pub fn set_direction(&mut self, requested: Direction) {
        if self.phase != Phase::Running {
            return;
        }
        if requested.is_opposite(self.direction) {
            return;
        }
        if let Some(pending) = self.pending_direction
            && requested.is_opposite(pending)
        {
            return;
        }
        self.pending_direction = Some(requested);
    }

    pub fn restart(&mut self, rng: &mut SessionRng) {
        if self.phase != Phase::Over {
            return;
        }

        self.body = Self::initial_body(&self.grid);
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.food = Self::place_food(&self.grid, &self.body, rng);
        self.score = 0;
        self.phase = Phase::Running;
        self.over_reason = None;
        log!("Game restarted");
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.phase = Phase::Over;
        self.over_reason = Some(reason);
        log!("Game over: {:?}. Final score: {}", reason, self.score);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    pub fn over_reason(&self) -> Option<GameOverReason> {
        self.over_reason
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: self.body.cells().to_vec(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            phase: self.phase,
            over_reason: self.over_reason,
            field_width: self.grid.width(),
            field_height: self.grid.height(),
            cell_size: self.grid.cell_size(),
        }
    }

    #[cfg(test)]
    fn set_body(&mut self, cells: Vec<Cell>) {
        self.body = SnakeBody::from_cells(cells);
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Cell) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
