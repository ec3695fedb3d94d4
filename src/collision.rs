use crate::grid::{CellState, Grid};
use crate::piece::ActivePiece;

/// True if any filled cell of `piece` lies past the left, right or bottom
/// edge, or overlaps a locked cell. Cells above row 0 only count against the
/// side walls.
pub fn check_collision(piece: &ActivePiece, grid: &Grid) -> bool {
    let width = grid.width() as i16;
    let height = grid.height() as i16;

    piece.blocks().any(|block| {
        if block.x < 0 || block.x >= width || block.y >= height {
            return true;
        }
        block.y >= 0
            && grid
                .get(block.x as usize, block.y as usize)
                .is_some_and(|cell| !cell.is_empty())
    })
}

/// Writes the piece into the grid at its current position.
///
/// Expects a collision-free position; cells outside the grid are dropped.
pub fn merge_piece(piece: &ActivePiece, grid: &mut Grid) {
    let cell = CellState::Filled(piece.kind);
    for block in piece.blocks() {
        if block.x >= 0 && block.y >= 0 {
            grid.set(block.x as usize, block.y as usize, cell);
        }
    }
}
