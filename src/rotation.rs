use log::trace;

use crate::collision::check_collision;
use crate::grid::Grid;
use crate::piece::ActivePiece;

/// Rotates the piece 90° clockwise in place, kicking it sideways if the new
/// orientation collides.
///
/// Kick offsets are applied cumulatively in the order +1, -2, +3, -4, ...,
/// which visits x+1, x-1, x+2, x-2 and so on. The search gives up once the
/// next offset would exceed the rotated shape's column count; the piece is
/// then restored exactly and `false` is returned.
pub fn rotate(piece: &mut ActivePiece, grid: &Grid) -> bool {
    let original_shape = piece.shape.clone();
    let original_x = piece.position.x;

    piece.shape = piece.shape.rotated_cw();

    let limit = piece.shape.cols() as i16;
    let mut offset: i16 = 1;
    while check_collision(piece, grid) {
        piece.position.x += offset;
        trace!("wall kick {:?} to x={}", piece.kind, piece.position.x);
        offset = -(offset + offset.signum());
        if offset > limit {
            piece.shape = original_shape;
            piece.position.x = original_x;
            return false;
        }
    }
    true
}
