use log::{debug, info};

use crate::collision::{check_collision, merge_piece};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::grid::{CellState, Grid};
use crate::lines::{clear_lines, line_score};
use crate::piece::{spawn_piece, ActivePiece, PieceProvider, RandomPieceProvider};
use crate::rotation;

// ============================================================================
// Types
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Running,
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Restart,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GameEvent {
    PieceMoved,
    PieceRotated,
    PieceLocked,
    LinesCleared(u32),
    HardDropRequested,
    GameRestarted,
    GameOver,
}

// ============================================================================
// Game Session
// ============================================================================

pub struct GameSession {
    pub grid: Grid,
    pub current_piece: ActivePiece,
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    pub state: GameState,
    pub drop_interval_ms: u64,
    drop_counter_ms: u64,
    config: GameConfig,
    piece_provider: Box<dyn PieceProvider>,
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_provider(Box::new(RandomPieceProvider::new()))
    }

    pub fn with_provider(provider: Box<dyn PieceProvider>) -> Self {
        Self::assemble(GameConfig::default(), Grid::default(), provider)
    }

    pub fn with_config(
        config: GameConfig,
        provider: Box<dyn PieceProvider>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self::assemble(config, grid, provider))
    }

    /// Starts from a prepared grid and piece. Later spawns come from a random
    /// provider.
    pub fn with_grid(grid: Grid, current_piece: ActivePiece) -> Self {
        let config = GameConfig {
            width: grid.width(),
            height: grid.height(),
            ..GameConfig::default()
        };
        Self {
            grid,
            current_piece,
            score: 0,
            lines_cleared: 0,
            level: 1,
            state: GameState::Running,
            drop_interval_ms: config.drop_interval_ms,
            drop_counter_ms: 0,
            config,
            piece_provider: Box::new(RandomPieceProvider::new()),
            events: Vec::new(),
        }
    }

    fn assemble(config: GameConfig, grid: Grid, mut provider: Box<dyn PieceProvider>) -> Self {
        let current_piece = spawn_piece(provider.as_mut(), config.width);
        let mut session = Self {
            grid,
            current_piece,
            score: 0,
            lines_cleared: 0,
            level: 1,
            state: GameState::Running,
            drop_interval_ms: config.drop_interval_ms,
            drop_counter_ms: 0,
            config,
            piece_provider: provider,
            events: Vec::new(),
        };
        // A one- or two-row grid can be too short for the first piece.
        session.check_spawn();
        session
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn drop_counter_ms(&self) -> u64 {
        self.drop_counter_ms
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.move_piece(-1);
            }
            GameAction::MoveRight => {
                self.move_piece(1);
            }
            GameAction::SoftDrop => self.manual_drop(),
            GameAction::Rotate => {
                self.rotate();
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Shifts the piece one column; a blocked move leaves it where it was.
    pub fn move_piece(&mut self, direction: i16) -> bool {
        if !self.is_running() {
            return false;
        }
        self.current_piece.position.x += direction;
        if check_collision(&self.current_piece, &self.grid) {
            self.current_piece.position.x -= direction;
            return false;
        }
        self.events.push(GameEvent::PieceMoved);
        true
    }

    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let rotated = rotation::rotate(&mut self.current_piece, &self.grid);
        if rotated {
            self.events.push(GameEvent::PieceRotated);
        }
        rotated
    }

    /// One row down, locking the piece if it cannot fall. Used for both the
    /// soft-drop key and gravity.
    pub fn manual_drop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.current_piece.position.y += 1;
        if check_collision(&self.current_piece, &self.grid) {
            self.current_piece.position.y -= 1;
            self.lock_and_spawn();
        }
        self.drop_counter_ms = 0;
    }

    /// Not implemented yet: the request is recorded and the piece stays put.
    pub fn hard_drop(&mut self) {
        if !self.is_running() {
            return;
        }
        debug!("hard drop requested (not implemented)");
        self.events.push(GameEvent::HardDropRequested);
    }

    /// Advances the fall timer by `elapsed_ms` and applies gravity once the
    /// interval is exceeded.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if !self.is_running() {
            return;
        }
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.manual_drop();
        }
    }

    pub fn restart(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines_cleared = 0;
        self.level = 1;
        self.drop_interval_ms = self.config.drop_interval_ms;
        self.drop_counter_ms = 0;
        self.state = GameState::Running;
        self.events.clear();
        self.current_piece = spawn_piece(self.piece_provider.as_mut(), self.config.width);
        self.events.push(GameEvent::GameRestarted);
        info!("game restarted");
        self.check_spawn();
    }

    // ------------------------------------------------------------------------
    // Locking
    // ------------------------------------------------------------------------

    fn lock_and_spawn(&mut self) {
        debug!(
            "locking {:?} at ({}, {})",
            self.current_piece.kind, self.current_piece.position.x, self.current_piece.position.y
        );
        merge_piece(&self.current_piece, &mut self.grid);
        self.events.push(GameEvent::PieceLocked);

        let lines = clear_lines(&mut self.grid);
        if lines > 0 {
            self.add_score(lines);
        }

        self.current_piece = spawn_piece(self.piece_provider.as_mut(), self.config.width);
        self.check_spawn();
    }

    pub fn add_score(&mut self, lines: u32) {
        self.score += line_score(lines);
        self.lines_cleared += lines;
        self.events.push(GameEvent::LinesCleared(lines));
        info!(
            "cleared {} line(s): score {}, total lines {}",
            lines, self.score, self.lines_cleared
        );
    }

    fn check_spawn(&mut self) {
        if self.is_running() && check_collision(&self.current_piece, &self.grid) {
            self.state = GameState::GameOver;
            self.events.push(GameEvent::GameOver);
            info!("game over with score {}", self.score);
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Grid contents with the active piece drawn on top.
    pub fn visible_cells(&self) -> Vec<Vec<CellState>> {
        let mut cells = self.grid.rows().to_vec();
        let piece_cell = CellState::Filled(self.current_piece.kind);

        for block in self.current_piece.blocks() {
            if block.x < 0 || block.y < 0 {
                continue;
            }
            if let Some(slot) = cells
                .get_mut(block.y as usize)
                .and_then(|row| row.get_mut(block.x as usize))
            {
                *slot = piece_cell;
            }
        }

        cells
    }

    /// Takes and clears all pending events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

pub mod test_helpers {
    use super::*;
    use crate::piece::PieceKind;

    pub fn empty_grid() -> Grid {
        Grid::default()
    }

    pub fn fill_row(grid: &mut Grid, y: usize) {
        for x in 0..grid.width() {
            grid.set(x, y, CellState::Filled(PieceKind::T));
        }
    }

    pub fn fill_row_with_gap(grid: &mut Grid, y: usize, gap_x: usize) {
        for x in 0..grid.width() {
            if x != gap_x {
                grid.set(x, y, CellState::Filled(PieceKind::T));
            }
        }
    }
}
