//! Falling-block puzzle game: grid, pieces, collision, rotation with wall
//! kicks, line clearing and the session that ties them together.
//!
//! Everything except `render` and `input` is terminal-free and can be driven
//! headlessly.

pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod lines;
pub mod piece;
pub mod render;
pub mod rotation;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameAction, GameEvent, GameSession, GameState};
pub use grid::{CellState, Grid};
pub use piece::{ActivePiece, PieceKind, PieceProvider, Position, Shape};
