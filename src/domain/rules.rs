use rand::{Rng, RngCore};

use super::{Cell, ForestCell, LifeCell, Parameters};

/// Share of cells alive in a freshly seeded Life grid
pub const LIFE_SEED_DENSITY: f64 = 0.3;

/// Probability test: draws one `u ~ Uniform[0, 1)` and succeeds when `p >= u`.
/// `p = 0` never succeeds and `p = 1` always does. Exactly one draw is
/// consumed either way so draw order stays stable.
pub fn is_probable(probability: f64, rng: &mut dyn RngCore) -> bool {
    let u: f64 = rng.random();
    probability > 0.0 && probability >= u
}

/// Trait for cellular automaton rules.
/// A rule fixes the state set, the neighbour predicate, the seeding pass
/// and the per-cell transition.
pub trait Rule: Send + Sync {
    type Cell: Cell;

    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Neighbour predicate fed to the Moore count
    fn is_counted(&self, cell: Self::Cell) -> bool;

    /// Whether `evolve` ever consumes random draws
    fn is_stochastic(&self) -> bool;

    /// Initial state of one cell in the randomized root generation
    fn seed(&self, params: &Parameters, rng: &mut dyn RngCore) -> Self::Cell;

    /// Apply rule to compute next cell state
    fn evolve(
        &self,
        current: Self::Cell,
        neighbors: u8,
        params: &Parameters,
        rng: &mut dyn RngCore,
    ) -> Self::Cell;
}

/// Forest-fire model (Drossel-Schwabl).
/// Fire spreads deterministically to adjacent trees, lightning strikes
/// with probability `f` and empty ground regrows with probability `p`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForestFire;

impl Rule for ForestFire {
    type Cell = ForestCell;

    fn name(&self) -> &'static str {
        "Forest fire"
    }

    fn description(&self) -> &'static str {
        "Stochastic growth and ignition"
    }

    fn is_counted(&self, cell: ForestCell) -> bool {
        cell.is_burning()
    }

    fn is_stochastic(&self) -> bool {
        true
    }

    /// Trees are planted with the growth probability
    fn seed(&self, params: &Parameters, rng: &mut dyn RngCore) -> ForestCell {
        if is_probable(params.growth, rng) {
            ForestCell::Tree
        } else {
            ForestCell::Empty
        }
    }

    fn evolve(
        &self,
        current: ForestCell,
        neighbors: u8,
        params: &Parameters,
        rng: &mut dyn RngCore,
    ) -> ForestCell {
        match current {
            ForestCell::Burning => ForestCell::Empty,
            ForestCell::Tree if neighbors > 0 => ForestCell::Burning,
            ForestCell::Tree if is_probable(params.ignition, rng) => ForestCell::Burning,
            ForestCell::Tree => ForestCell::Tree,
            ForestCell::Empty if is_probable(params.growth, rng) => ForestCell::Tree,
            ForestCell::Empty => ForestCell::Empty,
        }
    }
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct Life;

impl Life {
    /// Pure B3/S23 transition:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn apply(current: LifeCell, neighbors: u8) -> LifeCell {
        match (current, neighbors) {
            (LifeCell::Alive, 2 | 3) => LifeCell::Alive,
            (LifeCell::Dead, 3) => LifeCell::Alive,
            _ => LifeCell::Dead,
        }
    }
}

impl Rule for Life {
    type Cell = LifeCell;

    fn name(&self) -> &'static str {
        "Life"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn is_counted(&self, cell: LifeCell) -> bool {
        cell.is_alive()
    }

    fn is_stochastic(&self) -> bool {
        false
    }

    fn seed(&self, _params: &Parameters, rng: &mut dyn RngCore) -> LifeCell {
        if is_probable(LIFE_SEED_DENSITY, rng) {
            LifeCell::Alive
        } else {
            LifeCell::Dead
        }
    }

    fn evolve(
        &self,
        current: LifeCell,
        neighbors: u8,
        _params: &Parameters,
        _rng: &mut dyn RngCore,
    ) -> LifeCell {
        Self::apply(current, neighbors)
    }
}
