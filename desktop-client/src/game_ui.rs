use common::{Cell, GameOverReason, GameSnapshot, Phase};
use eframe::egui;

const BOARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x88, 0xFF, 0x88);
const SNAKE_BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2E, 0x7D, 0x32);
const SNAKE_HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1B, 0x5E, 0x20);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xD3, 0x2F, 0x2F);

pub fn render_game(ui: &mut egui::Ui, snapshot: &GameSnapshot, player_name: &str) {
    ui.heading(format!("Snake: {}", player_name));
    ui.label(format!("Score: {}", snapshot.score));
    ui.separator();

    let board_size = egui::vec2(snapshot.field_width as f32, snapshot.field_height as f32);
    let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());
    let board = response.rect;

    painter.rect_filled(board, 0.0, BOARD_BACKGROUND);

    paint_cell(&painter, board.min, snapshot.food, snapshot.cell_size, FOOD_COLOR);

    for (i, &cell) in snapshot.cells.iter().enumerate() {
        // The growth sentinel sits outside the board for one tick.
        if cell.x < 0 || cell.y < 0 {
            continue;
        }
        let color = if i == 0 {
            SNAKE_HEAD_COLOR
        } else {
            SNAKE_BODY_COLOR
        };
        paint_cell(&painter, board.min, cell, snapshot.cell_size, color);
    }

    if snapshot.phase == Phase::Over {
        render_game_over(&painter, board, snapshot);
    }
}

fn paint_cell(
    painter: &egui::Painter,
    origin: egui::Pos2,
    cell: Cell,
    cell_size: i32,
    color: egui::Color32,
) {
    let rect = egui::Rect::from_min_size(
        egui::pos2(origin.x + cell.x as f32, origin.y + cell.y as f32),
        egui::vec2(cell_size as f32, cell_size as f32),
    );
    painter.rect_filled(rect, 2.0, color);
}

fn render_game_over(painter: &egui::Painter, board: egui::Rect, snapshot: &GameSnapshot) {
    painter.rect_filled(
        board,
        0.0,
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200),
    );

    let message = match snapshot.over_reason {
        Some(GameOverReason::TargetScoreReached) => {
            format!("Congratulations! You scored {}!", snapshot.score)
        }
        _ => "Game Over".to_string(),
    };

    let center = board.center();
    let font = egui::FontId::proportional(18.0);

    painter.text(
        center - egui::vec2(0.0, 30.0),
        egui::Align2::CENTER_CENTER,
        message,
        font.clone(),
        egui::Color32::BLACK,
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        format!("Final Score: {}", snapshot.score),
        font.clone(),
        egui::Color32::BLACK,
    );
    painter.text(
        center + egui::vec2(0.0, 30.0),
        egui::Align2::CENTER_CENTER,
        "Press R to Restart",
        font,
        egui::Color32::BLACK,
    );
}
