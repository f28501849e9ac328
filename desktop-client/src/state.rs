use std::sync::{Arc, Mutex};

use common::{Direction, GameSnapshot};

#[derive(Debug, Clone)]
pub enum ClientCommand {
    Turn { direction: Direction },
    Restart,
}

pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
        }
    }
}
