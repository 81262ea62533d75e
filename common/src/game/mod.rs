mod grid;
mod item;
mod session;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use grid::Grid;
pub use item::Item;
pub use session::{ControlEvent, GameSession, GameStatus};
pub use session_rng::SessionRng;
pub use settings::SessionSettings;
pub use snake::{CollisionError, MoveOutcome, Snake};
pub use types::{Direction, Point};
