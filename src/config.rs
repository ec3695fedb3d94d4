use crate::error::GameError;

// ============================================================================
// Configuration
// ============================================================================

pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 20;
/// Largest accepted width or height. Piece coordinates are `i16`, and kicks
/// and shape offsets must stay in range past the right and bottom edges.
pub const MAX_DIMENSION: usize = 4096;

/// Terminal columns used to draw one block.
pub const CELL_WIDTH: u16 = 2;

// Timing (in milliseconds)
pub const DROP_INTERVAL_MS: u64 = 1000;
pub const FRAME_MS: u64 = 16;

// Scoring, indexed by lines cleared in one lock
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Board size and gravity for one session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub drop_interval_ms: u64,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if !dimension_in_range(self.width) || !dimension_in_range(self.height) {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.drop_interval_ms == 0 {
            return Err(GameError::InvalidDropInterval);
        }
        Ok(())
    }
}

pub(crate) fn dimension_in_range(n: usize) -> bool {
    (1..=MAX_DIMENSION).contains(&n)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
        }
    }
}
