use crate::config::LINE_SCORES;
use crate::grid::Grid;

/// Removes every full row, shifting the rows above down, and returns how many
/// were removed.
///
/// Scans bottom-up. After a removal the same index holds the row that fell
/// into it, so it is checked again before moving on.
pub fn clear_lines(grid: &mut Grid) -> u32 {
    let mut cleared = 0;
    let mut y = grid.height();

    while y > 0 {
        if grid.is_row_full(y - 1) {
            grid.remove_row(y - 1);
            cleared += 1;
        } else {
            y -= 1;
        }
    }

    cleared
}

/// Points for clearing `lines` rows with a single lock.
pub fn line_score(lines: u32) -> u32 {
    LINE_SCORES.get(lines as usize).copied().unwrap_or(0)
}
