use std::fmt::Debug;

/// Common bound for the state sets a grid can hold.
/// A simulation uses exactly one state set for its whole lifetime.
pub trait Cell: Copy + PartialEq + Debug + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Debug + Send + Sync + 'static> Cell for T {}

/// LifeCell is the state of a cell in Conway's Game of Life.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LifeCell {
    #[default]
    Dead,
    Alive,
}

impl LifeCell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, LifeCell::Alive)
    }
}

/// ForestCell is the state of a patch of ground in the forest-fire model.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ForestCell {
    #[default]
    Empty,
    Tree,
    Burning,
}

impl ForestCell {
    pub const fn is_tree(self) -> bool {
        matches!(self, ForestCell::Tree)
    }

    pub const fn is_burning(self) -> bool {
        matches!(self, ForestCell::Burning)
    }
}
