mod app;
mod config;
mod game_ui;
mod input;
mod name_prompt;
mod reporter;
mod session;
mod state;

use clap::Parser;
use common::config::ConfigFile;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use app::SnakeApp;
use config::Config;
use state::SharedState;

#[derive(Parser)]
#[command(name = "snake_game_client")]
struct Args {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init(prefix);

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let config: Config = ConfigFile::new(&config_path).load()?;

    let player_name = match args
        .name
        .or_else(|| config.player_name.clone())
        .or_else(name_prompt::prompt_for_player_name)
    {
        Some(name) => name,
        None => {
            log!("No player name provided, exiting");
            return Ok(());
        }
    };
    log!("Starting snake game for player {}", player_name);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (report_tx, report_rx) = mpsc::unbounded_channel();

    let game_config = config.game.clone();
    let server_config = config.server.clone();
    let session_state = shared_state.clone();
    let reporter_name = player_name.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            if server_config.enabled {
                tokio::spawn(reporter::run_score_reporter(
                    server_config.address,
                    reporter_name,
                    report_rx,
                ));
            } else {
                log!("Score reporting disabled");
                drop(report_rx);
            }

            session::run_game_session(game_config, session_state, command_rx, report_tx).await;
        });
    });

    let window_size = [
        config.game.field_width as f32 + 24.0,
        config.game.field_height as f32 + 110.0,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false)
            .with_title(format!("Snake Game - {}", player_name)),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Game",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(player_name, shared_state, command_tx)))),
    )?;

    Ok(())
}
