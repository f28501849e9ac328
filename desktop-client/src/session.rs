use std::time::Duration;

use common::{GameState, GridGeometry, Phase, SessionRng, log};
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::config::GameConfig;
use crate::reporter::ScoreReport;
use crate::state::{ClientCommand, SharedState};

pub async fn run_game_session(
    config: GameConfig,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    report_tx: mpsc::UnboundedSender<ScoreReport>,
) {
    let mut rng = SessionRng::from_random();
    log!("Starting game session with seed {}", rng.seed());

    let grid = GridGeometry::new(config.field_width, config.field_height, config.cell_size);
    let mut state = GameState::new(grid, &mut rng);
    shared_state.set_snapshot(state.snapshot());

    let mut tick_timer = interval(Duration::from_millis(config.tick_interval_ms));
    let mut reported = false;

    loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                if state.phase() != Phase::Running {
                    continue;
                }

                state.tick(&mut rng);
                shared_state.set_snapshot(state.snapshot());

                if state.phase() == Phase::Over && !reported {
                    reported = true;
                    let _ = report_tx.send(ScoreReport {
                        score: state.score(),
                    });
                }
            }
            Some(command) = command_rx.recv() => {
                match command {
                    ClientCommand::Turn { direction } => {
                        state.set_direction(direction);
                    }
                    ClientCommand::Restart => {
                        if state.phase() == Phase::Over {
                            state.restart(&mut rng);
                            reported = false;
                            tick_timer.reset();
                            shared_state.set_snapshot(state.snapshot());
                        }
                    }
                }
            }
        }
    }
}
