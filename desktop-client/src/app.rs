use common::GameSnapshot;
use eframe::egui;
use tokio::sync::mpsc;

use crate::game_ui;
use crate::input::{GameKey, InputRouter};
use crate::state::{ClientCommand, SharedState};

pub struct SnakeApp {
    player_name: String,
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    router: InputRouter,
}

impl SnakeApp {
    pub fn new(
        player_name: String,
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
    ) -> Self {
        Self {
            player_name,
            shared_state,
            command_tx,
            router: InputRouter::new(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context, snapshot: &GameSnapshot) {
        let keys = ctx.input(pressed_keys);
        for key in keys {
            if let Some(command) = self.router.route(key, snapshot) {
                let _ = self.command_tx.send(command);
            }
        }
    }
}

fn pressed_keys(input: &egui::InputState) -> Vec<GameKey> {
    let mut keys = Vec::new();
    if input.key_pressed(egui::Key::ArrowUp) {
        keys.push(GameKey::Up);
    }
    if input.key_pressed(egui::Key::ArrowDown) {
        keys.push(GameKey::Down);
    }
    if input.key_pressed(egui::Key::ArrowLeft) {
        keys.push(GameKey::Left);
    }
    if input.key_pressed(egui::Key::ArrowRight) {
        keys.push(GameKey::Right);
    }
    if input.key_pressed(egui::Key::R) {
        keys.push(GameKey::Restart);
    }
    keys
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.shared_state.snapshot();

        if let Some(snapshot) = &snapshot {
            self.handle_input(ctx, snapshot);
        }

        egui::CentralPanel::default().show(ctx, |ui| match &snapshot {
            Some(snapshot) => game_ui::render_game(ui, snapshot, &self.player_name),
            None => {
                ui.heading("Waiting for game to start...");
                ui.spinner();
            }
        });

        ctx.request_repaint();
    }
}
