use common::config::Validate;
use serde::{Deserialize, Serialize};

// Enough cells to host the starting snake and a food cell.
const MIN_CELLS_PER_AXIS: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub field_width: i32,
    pub field_height: i32,
    pub cell_size: i32,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 800,
            field_height: 600,
            cell_size: 40,
            tick_interval_ms: 140,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size < 8 || self.cell_size > 100 {
            return Err("Cell size must be between 8 and 100 pixels".to_string());
        }
        if self.field_width / self.cell_size < MIN_CELLS_PER_AXIS {
            return Err(format!(
                "Field must be at least {} cells wide",
                MIN_CELLS_PER_AXIS
            ));
        }
        if self.field_height / self.cell_size < MIN_CELLS_PER_AXIS {
            return Err(format!(
                "Field must be at least {} cells tall",
                MIN_CELLS_PER_AXIS
            ));
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }
}
