/// Failures the simulation core can report.
///
/// Navigation past either end of the timeline is not an error, and
/// parameter values are validated before they reach the core.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Grid dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("Unable to allocate a grid of {cells} cells")]
    Allocation { cells: usize },
}
