use std::collections::VecDeque;
use std::fmt;

use crate::render::{Color, Drawable};
use super::grid::Grid;
use super::types::{Direction, Point};

const SEGMENT_SIZE: f32 = 24.0;
const SEGMENT_COLOR: Color = Color::rgb(0xe2, 0xe2, 0xe2);

// Grown segments start here and are shifted onto the grid by the next move.
const SENTINEL: Point = Point { x: -100, y: -100 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub head: Point,
    pub consumed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionError {
    pub cell: Point,
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snake collided with itself at ({}, {})", self.cell.x, self.cell.y)
    }
}

impl std::error::Error for CollisionError {}

#[derive(Clone, Debug)]
pub struct Snake {
    blocks: VecDeque<Point>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Point, direction: Direction, length: usize, grid: &Grid) -> Self {
        let (dx, dy) = direction.delta();
        let mut blocks = VecDeque::with_capacity(length);
        let mut block = head;

        for _ in 0..length {
            blocks.push_back(block);
            block = grid.wrap(block.offset(-dx, -dy));
        }

        Self { blocks, direction }
    }

    pub fn head(&self) -> Point {
        *self.blocks.front().expect("Snake body should never be empty")
    }

    pub fn blocks(&self) -> &VecDeque<Point> {
        &self.blocks
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Applies immediately; the reverse of the current travel direction is
    /// silently ignored. Last call before a move wins.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.direction = direction;
        }
    }

    /// Advances one cell in the current direction, wrapping at the edges.
    /// The candidate head is checked against the whole pre-move body, tail
    /// included; an overlap ends the round.
    pub fn advance(&mut self, grid: &Grid, item_position: Point) -> Result<MoveOutcome, CollisionError> {
        let (dx, dy) = self.direction.delta();
        let ghost = grid.wrap(self.head().offset(dx, dy));

        if self.blocks.contains(&ghost) {
            return Err(CollisionError { cell: ghost });
        }

        let consumed = ghost == item_position;

        self.blocks.push_front(ghost);
        self.blocks.pop_back();

        Ok(MoveOutcome { head: ghost, consumed })
    }

    /// Appends an off-grid segment. It takes the tail's place on the next
    /// move, so the visible trail lengthens one tick after consumption.
    pub fn grow(&mut self) {
        self.blocks.push_back(SENTINEL);
    }

    pub fn render(&self) -> Vec<Drawable> {
        self.blocks
            .iter()
            .map(|block| Drawable {
                grid_x: block.x,
                grid_y: block.y,
                width: SEGMENT_SIZE,
                height: SEGMENT_SIZE,
                color: SEGMENT_COLOR,
            })
            .collect()
    }
}
