/// Construction-time precondition failures.
///
/// Blocked moves, rotations and drops are ordinary gameplay and never show
/// up here; they leave the session unchanged instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum GameError {
    #[error(
        "grid dimensions must be between 1 and {} (got {width}x{height})",
        crate::config::MAX_DIMENSION
    )]
    InvalidDimensions { width: usize, height: usize },

    #[error("drop interval must be at least 1 ms")]
    InvalidDropInterval,
}
