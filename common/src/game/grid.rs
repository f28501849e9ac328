use super::session_rng::SessionRng;
use super::types::Cell;

#[derive(Clone, Copy, Debug)]
pub struct GridGeometry {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl GridGeometry {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn cols(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn cell_at(&self, col: i32, row: i32) -> Cell {
        Cell::new(col * self.cell_size, row * self.cell_size)
    }

    pub fn random_cell(&self, rng: &mut SessionRng) -> Cell {
        let col = rng.random_range(0..self.cols());
        let row = rng.random_range(0..self.rows());
        self.cell_at(col, row)
    }

    // The upper bound is inset by one cell size; the last column and row
    // are lethal to enter.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.width - self.cell_size
            && cell.y >= 0
            && cell.y < self.height - self.cell_size
    }
}
