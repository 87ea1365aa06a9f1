//! Turning the game state into shapes to paint.

use eframe::egui::{self, epaint, Pos2, Rect, Shape, Vec2};
use game::prelude::*;

/// Board background color.
pub const BACKGROUND: Color = Color::BLACK;

/// Color of the thin frame around every snake part and apple.
pub const OUTLINE: Color = Color::WHITE;

/// Size of the whole board in pixels.
pub fn board_size(grid: Grid, cell: f32) -> Vec2 {
    egui::vec2(grid.size.0 as f32 * cell, grid.size.1 as f32 * cell)
}

/// Rectangle covered by the cell on `coords`.
pub fn cell_rect(origin: Pos2, cell: f32, coords: Coordinates) -> Rect {
    Rect::from_min_size(
        origin + egui::vec2(coords.x as f32 * cell, coords.y as f32 * cell),
        egui::vec2(cell, cell),
    )
}

/// Shapes of one frame: background, snake body, snake head, apple.
pub fn shapes(game: &GameData, origin: Pos2, cell: f32) -> Vec<Shape> {
    let snake = game.snake();
    let mut shapes = Vec::with_capacity(snake.len() * 2 + 5);

    shapes.push(Shape::Rect(epaint::RectShape::filled(
        Rect::from_min_size(origin, board_size(game.grid(), cell)),
        0.0,
        color32(BACKGROUND),
    )));

    for part in snake.parts() {
        push_cell(&mut shapes, cell_rect(origin, cell, *part), Snake::COLOR);
    }
    if let Some(head) = snake.head() {
        push_cell(&mut shapes, cell_rect(origin, cell, head), Snake::HEAD_COLOR);
    }

    let apple = game.apple();
    push_cell(&mut shapes, cell_rect(origin, cell, apple.coords()), apple.color());

    shapes
}

fn push_cell(shapes: &mut Vec<Shape>, rect: Rect, fill: Color) {
    shapes.push(Shape::Rect(epaint::RectShape::filled(rect, 0.0, color32(fill))));
    shapes.push(Shape::Rect(epaint::RectShape::stroke(
        rect,
        0.0,
        epaint::Stroke::new(1.0, color32(OUTLINE)),
    )));
}

fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_premultiplied(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(shape: &Shape) -> egui::Color32 {
        match shape {
            Shape::Rect(rect) => rect.fill,
            other => panic!("unexpected shape {:?}", other),
        }
    }

    fn rect(shape: &Shape) -> Rect {
        match shape {
            Shape::Rect(rect) => rect.rect,
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn cell_geometry() {
        let rect = cell_rect(egui::pos2(10.0, 5.0), 20.0, (2, 1).into());
        assert_eq!(rect.min, egui::pos2(50.0, 25.0));
        assert_eq!(rect.max, egui::pos2(70.0, 45.0));
        assert_eq!(board_size(Grid::default(), 20.0), egui::vec2(640.0, 480.0));
    }

    #[test]
    fn new_game_frame() -> game::Result<()> {
        let settings = Settings {
            seed: Some(1),
            ..Default::default()
        };
        let gd = GameData::new(Some((10, 10)), settings)?;
        let shapes = shapes(&gd, egui::pos2(0.0, 0.0), 10.0);

        // background, body cell, head cell, apple cell
        assert_eq!(shapes.len(), 1 + 2 + 2 + 2);
        assert_eq!(rect(&shapes[0]), Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0)));
        assert_eq!(fill(&shapes[0]), color32(BACKGROUND));
        assert_eq!(fill(&shapes[1]), color32(Snake::COLOR));
        assert_eq!(fill(&shapes[3]), color32(Snake::HEAD_COLOR));
        assert_eq!(rect(&shapes[3]), cell_rect(egui::pos2(0.0, 0.0), 10.0, gd.grid().center()));
        assert_eq!(fill(&shapes[5]), color32(Apple::COLOR));
        assert_eq!(rect(&shapes[5]), cell_rect(egui::pos2(0.0, 0.0), 10.0, gd.apple().coords()));
        Ok(())
    }
}
