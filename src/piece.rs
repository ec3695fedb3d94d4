use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Types
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Cell value written into the grid when this kind locks (1..=7).
    pub fn id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }

    /// Spawn orientation as a 0/1 matrix.
    fn template(self) -> &'static [&'static [u8]] {
        match self {
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
            PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        }
    }

    pub fn shape(self) -> Shape {
        Shape::from_rows(self.template())
    }
}

// ============================================================================
// Shape
// ============================================================================

/// Rectangular 0/1 pattern of a piece's bounding box.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Shape {
    cells: Vec<Vec<bool>>,
}

impl Shape {
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        Self {
            cells: rows
                .iter()
                .map(|row| row.iter().map(|&v| v != 0).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Offsets `(dx, dy)` of every filled cell, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(x, _)| (x as i16, y as i16))
        })
    }

    /// 90° clockwise: transpose, then reverse each row.
    pub fn rotated_cw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let cells = (0..cols)
            .map(|c| (0..rows).rev().map(|r| self.cells[r][c]).collect())
            .collect();
        Self { cells }
    }
}

// ============================================================================
// Active Piece
// ============================================================================

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl ActivePiece {
    /// Spawn orientation, top row, centered over a grid of `grid_width` columns.
    pub fn spawn(kind: PieceKind, grid_width: usize) -> Self {
        let shape = kind.shape();
        let x = (grid_width / 2) as i16 - (shape.cols() / 2) as i16;
        Self {
            kind,
            shape,
            position: Position { x, y: 0 },
        }
    }

    pub fn new_at(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            position: Position { x, y },
        }
    }

    /// Absolute grid coordinates of every filled cell.
    pub fn blocks(&self) -> impl Iterator<Item = Position> + '_ {
        self.shape.filled_cells().map(move |(dx, dy)| Position {
            x: self.position.x + dx,
            y: self.position.y + dy,
        })
    }
}

// ============================================================================
// Piece Provider Trait
// ============================================================================

pub trait PieceProvider {
    fn next_piece(&mut self) -> PieceKind;
}

/// Uniform choice among the seven kinds.
pub struct RandomPieceProvider {
    rng: StdRng,
}

impl RandomPieceProvider {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPieceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceProvider for RandomPieceProvider {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

pub struct SequencePieceProvider {
    pieces: Vec<PieceKind>,
    index: usize,
}

impl SequencePieceProvider {
    pub fn new(pieces: Vec<PieceKind>) -> Self {
        Self { pieces, index: 0 }
    }
}

impl PieceProvider for SequencePieceProvider {
    fn next_piece(&mut self) -> PieceKind {
        if self.pieces.is_empty() {
            return PieceKind::O;
        }
        let piece = self.pieces[self.index % self.pieces.len()];
        self.index += 1;
        piece
    }
}

/// Draws the next kind and places it at the spawn position. The caller checks
/// the placement for collisions.
pub fn spawn_piece(provider: &mut dyn PieceProvider, grid_width: usize) -> ActivePiece {
    ActivePiece::spawn(provider.next_piece(), grid_width)
}
