use std::time::Duration;

use crate::log;
use crate::render::Drawable;
use super::grid::Grid;
use super::item::Item;
use super::session_rng::SessionRng;
use super::settings::SessionSettings;
use super::snake::Snake;
use super::types::{Direction, Point};

const SNAKE_START_HEAD: Point = Point { x: 8, y: 9 };
const SNAKE_START_DIRECTION: Direction = Direction::Left;
const SNAKE_START_LENGTH: usize = 3;
const ITEM_START: Point = Point { x: 16, y: 16 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Starting,
    Running,
    Paused,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    Direction(Direction),
    TogglePause,
    Restart,
}

/// One round of the game: owns the snake and the item, applies control
/// events, and turns accumulated wall time into moves.
pub struct GameSession {
    settings: SessionSettings,
    grid: Grid,
    snake: Snake,
    item: Item,
    rng: SessionRng,
    status: GameStatus,
    score: u32,
    tick_interval: Duration,
    since_last_move: Duration,
    interaction: bool,
}

impl GameSession {
    pub fn new(settings: SessionSettings, rng: SessionRng) -> Self {
        let grid = Grid::new(settings.grid_width, settings.grid_height);
        let snake = Snake::new(SNAKE_START_HEAD, SNAKE_START_DIRECTION, SNAKE_START_LENGTH, &grid);
        let tick_interval = settings.max_speed();

        log!("New session, seed {}", rng.seed());

        let mut session = Self {
            settings,
            grid,
            snake,
            item: Item::new(ITEM_START),
            rng,
            status: GameStatus::NotStarted,
            score: 0,
            tick_interval,
            since_last_move: Duration::ZERO,
            interaction: false,
        };
        session.status = GameStatus::Starting;
        session
    }

    pub fn start(&mut self) {
        self.status = GameStatus::Running;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn has_interacted(&self) -> bool {
        self.interaction
    }

    /// Banner shown centered over the field, cleared while running.
    pub fn status_text(&self) -> Option<&'static str> {
        match self.status {
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::Stopped => Some("GAME OVER :("),
            _ => None,
        }
    }

    pub fn handle_event(&mut self, event: ControlEvent) {
        self.interaction = true;

        match event {
            ControlEvent::Direction(direction) => {
                if self.status == GameStatus::Running {
                    self.snake.set_direction(direction);
                }
            }
            ControlEvent::TogglePause => match self.status {
                GameStatus::Running => self.status = GameStatus::Paused,
                GameStatus::Paused => self.status = GameStatus::Running,
                _ => {}
            },
            ControlEvent::Restart => {
                if matches!(self.status, GameStatus::Stopped | GameStatus::NotStarted) {
                    self.reset_round();
                }
            }
        }
    }

    /// Per-frame hook. Accumulates wall time and applies at most one move
    /// once the current tick interval is reached.
    pub fn advance(&mut self, elapsed: Duration) {
        self.since_last_move += elapsed;

        if self.status != GameStatus::Running {
            return;
        }
        if self.since_last_move < self.tick_interval {
            return;
        }

        self.step();
    }

    /// Everything to paint this frame, item on top of the snake trail.
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut drawables = self.snake.render();
        drawables.push(self.item.render());
        drawables
    }

    fn step(&mut self) {
        match self.snake.advance(&self.grid, self.item.position()) {
            Ok(outcome) => {
                if outcome.consumed {
                    self.snake.grow();
                    self.item.relocate(&self.grid, &mut self.rng);
                    self.award_score();
                    log!(
                        "Item consumed at ({}, {}). Score: {}",
                        outcome.head.x,
                        outcome.head.y,
                        self.score
                    );
                }
            }
            Err(collision) => {
                log!("Round over: {}", collision);
                self.status = GameStatus::Stopped;
            }
        }

        // Accumulator resets after every attempt, fatal or not.
        self.since_last_move = Duration::ZERO;
    }

    fn award_score(&mut self) {
        self.score += self.settings.score_increment;

        let reduced = self.tick_interval.saturating_sub(self.settings.speed_step());
        if reduced >= self.settings.min_speed() {
            self.tick_interval = reduced;
        }
    }

    fn reset_round(&mut self) {
        self.snake = Snake::new(SNAKE_START_HEAD, SNAKE_START_DIRECTION, SNAKE_START_LENGTH, &self.grid);
        self.item = Item::new(ITEM_START);
        self.score = 0;
        self.tick_interval = self.settings.max_speed();
        self.since_last_move = Duration::ZERO;
        self.status = GameStatus::Running;
        log!("Round restarted");
    }

    #[cfg(test)]
    fn set_item_position(&mut self, position: Point) {
        self.item = Item::new(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_session() -> GameSession {
        GameSession::new(SessionSettings::default(), SessionRng::new(42))
    }

    fn tick(session: &mut GameSession) {
        session.advance(session.tick_interval());
    }

    #[test]
    fn test_new_session_is_starting() {
        let session = new_session();
        assert_eq!(session.status(), GameStatus::Starting);
        assert_eq!(session.score(), 0);
        assert_eq!(session.tick_interval(), Duration::from_millis(750));
    }

    #[test]
    fn test_five_left_moves_without_consumption() {
        let mut session = new_session();
        session.start();

        for _ in 0..5 {
            tick(&mut session);
        }

        assert_eq!(session.snake().head(), Point::new(3, 9));
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_advance_accumulates_partial_frames() {
        let mut session = new_session();
        session.start();

        session.advance(Duration::from_millis(300));
        session.advance(Duration::from_millis(300));
        assert_eq!(session.snake().head(), Point::new(8, 9));

        session.advance(Duration::from_millis(200));
        assert_eq!(session.snake().head(), Point::new(7, 9));

        // The accumulator was reset by the move; a short frame does nothing.
        session.advance(Duration::from_millis(100));
        assert_eq!(session.snake().head(), Point::new(7, 9));
    }

    #[test]
    fn test_consumption_scores_and_speeds_up() {
        let mut session = new_session();
        session.start();
        session.set_item_position(Point::new(7, 9));

        tick(&mut session);

        assert_eq!(session.score(), 1);
        assert_eq!(session.tick_interval(), Duration::from_millis(700));
        let item = session.item().position();
        assert!((1..=20).contains(&item.x));
        assert!((1..=20).contains(&item.y));

        // Growth becomes visible one move later, at the previous tail cell.
        // Park the item away from the path first.
        assert_eq!(session.snake().blocks().len(), 4);
        session.set_item_position(Point::new(16, 16));
        tick(&mut session);
        assert_eq!(*session.snake().blocks().back().unwrap(), Point::new(9, 9));
    }

    #[test]
    fn test_speed_never_drops_below_floor() {
        let mut session = new_session();
        session.start();

        // 16 eats: the ramp bottoms out at eat 14, the rest must hold the
        // floor. Few enough that the growing body cannot lap the row.
        for _ in 0..16 {
            let target = session.grid.wrap(session.snake().head().offset(-1, 0));
            session.set_item_position(target);
            tick(&mut session);
            assert!(session.tick_interval() >= Duration::from_millis(50));
        }

        assert_eq!(session.score(), 16);
        assert_eq!(session.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_pause_blocks_moves_and_direction_events() {
        let mut session = new_session();
        session.start();

        session.handle_event(ControlEvent::TogglePause);
        assert_eq!(session.status(), GameStatus::Paused);

        session.handle_event(ControlEvent::Direction(Direction::Up));
        session.advance(Duration::from_millis(2000));
        assert_eq!(session.snake().head(), Point::new(8, 9));
        assert_eq!(session.snake().direction(), Direction::Left);

        session.handle_event(ControlEvent::TogglePause);
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn test_collision_stops_the_session() {
        let mut session = stopped_session();
        assert_eq!(session.status(), GameStatus::Stopped);
        assert_eq!(session.status_text(), Some("GAME OVER :("));

        // Stopped sessions ignore pause and direction events.
        session.handle_event(ControlEvent::TogglePause);
        assert_eq!(session.status(), GameStatus::Stopped);
    }

    #[test]
    fn test_restart_resets_the_round() {
        let mut session = stopped_session();
        let score_before = session.score();
        assert!(score_before > 0);

        session.handle_event(ControlEvent::Restart);

        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.tick_interval(), Duration::from_millis(750));
        assert_eq!(session.snake().head(), Point::new(8, 9));
        assert_eq!(session.snake().blocks().len(), 3);
        assert_eq!(session.item().position(), Point::new(16, 16));
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut session = new_session();
        session.start();
        session.set_item_position(Point::new(7, 9));
        tick(&mut session);
        assert_eq!(session.score(), 1);

        session.handle_event(ControlEvent::Restart);
        assert_eq!(session.score(), 1);
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn test_status_text_follows_status() {
        let mut session = new_session();
        session.start();
        assert_eq!(session.status_text(), None);

        session.handle_event(ControlEvent::TogglePause);
        assert_eq!(session.status_text(), Some("PAUSED"));
    }

    #[test]
    fn test_drawables_cover_snake_and_item() {
        let session = new_session();
        let drawables = session.drawables();
        // Three segments plus the item, item painted last.
        assert_eq!(drawables.len(), 4);
        assert_eq!(drawables[3].grid_x, 16);
        assert_eq!(drawables[3].grid_y, 16);
    }

    // Eats once at (7, 9) so the body is long enough, then walks a square
    // back into the vacating tail cell.
    fn stopped_session() -> GameSession {
        let mut session = new_session();
        session.start();
        session.set_item_position(Point::new(7, 9));
        tick(&mut session);

        session.handle_event(ControlEvent::Direction(Direction::Down));
        tick(&mut session);
        session.handle_event(ControlEvent::Direction(Direction::Right));
        tick(&mut session);
        session.handle_event(ControlEvent::Direction(Direction::Up));
        tick(&mut session);

        assert_eq!(session.status(), GameStatus::Stopped);
        session
    }
}
