use crate::render::{Color, Drawable};
use super::grid::Grid;
use super::session_rng::SessionRng;
use super::types::Point;

const ITEM_SIZE: f32 = 24.0;
const ITEM_COLOR: Color = Color::rgb(0xff, 0xd0, 0xd0);

#[derive(Clone, Debug)]
pub struct Item {
    position: Point,
}

impl Item {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Uniform draw over the playable interior, 1..=axis on both axes.
    /// Cells under the snake are not excluded; an item can land there.
    pub fn relocate(&mut self, grid: &Grid, rng: &mut SessionRng) {
        self.position = Point::new(
            rng.random_range(1..=grid.width()),
            rng.random_range(1..=grid.height()),
        );
    }

    pub fn render(&self) -> Drawable {
        Drawable {
            grid_x: self.position.x,
            grid_y: self.position.y,
            width: ITEM_SIZE,
            height: ITEM_SIZE,
            color: ITEM_COLOR,
        }
    }
}
