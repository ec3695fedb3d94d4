use crate::config::{dimension_in_range, GRID_HEIGHT, GRID_WIDTH};
use crate::error::GameError;
use crate::piece::PieceKind;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Empty,
    Filled(PieceKind),
}

impl CellState {
    /// Integer cell value: 0 for empty, the piece id otherwise.
    pub fn id(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Filled(kind) => kind.id(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

/// Locked blocks, stored row-major with row 0 at the top.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<CellState>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if !dimension_in_range(width) || !dimension_in_range(height) {
            return Err(GameError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            rows: vec![vec![CellState::Empty; width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Returns false if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: CellState) -> bool {
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(CellState::Empty);
        }
    }

    /// Drops row `y` and pushes an empty row in at the top.
    pub(crate) fn remove_row(&mut self, y: usize) {
        self.rows.remove(y);
        self.rows.insert(0, vec![CellState::Empty; self.width]);
    }

    pub fn filled_count_in_row(&self, y: usize) -> usize {
        self.rows
            .get(y)
            .map_or(0, |row| row.iter().filter(|cell| !cell.is_empty()).count())
    }

    pub fn total_filled_cells(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            rows: vec![vec![CellState::Empty; GRID_WIDTH]; GRID_HEIGHT],
        }
    }
}
