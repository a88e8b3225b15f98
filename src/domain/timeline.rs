//! Generation history with lazy forward computation.
//!
//! The timeline owns an arena of generations laid out root-first. The
//! predecessor of the generation at position `i` is at `i - 1` and its
//! successor, when already computed, at `i + 1`. Editing a parameter
//! truncates the arena after the cursor, dropping every generation that
//! was computed under the old values.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::RngCore;

use super::{Grid, ParameterName, Parameters, Rule, SimError, engine};

/// Process-wide source of generation ids. Ids are never reused, which
/// makes stale references to discarded generations easy to spot.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// One computed snapshot of the grid
#[derive(Debug)]
pub struct Generation<C> {
    id: u64,
    index: u64,
    grid: Grid<C>,
    /// Values in effect when this generation was computed
    parameters: Parameters,
    /// Values the next computed successor will use
    live: Parameters,
}

impl<C> Generation<C> {
    fn new(index: u64, grid: Grid<C>, parameters: Parameters) -> Self {
        Self {
            id: next_id(),
            index,
            grid,
            parameters,
            live: parameters,
        }
    }

    /// Unique, process-wide identifier
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// 0 for the root, parent index + 1 otherwise
    pub const fn index(&self) -> u64 {
        self.index
    }

    pub const fn grid(&self) -> &Grid<C> {
        &self.grid
    }

    /// Parameters this generation was produced with
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Parameters that will produce this generation's successor
    pub const fn live_parameters(&self) -> &Parameters {
        &self.live
    }
}

/// Timeline is a cursor into a chain of generations.
pub struct Timeline<R: Rule, G> {
    rule: R,
    rng: G,
    generations: Vec<Generation<R::Cell>>,
    cursor: usize,
    computed: u64,
}

impl<R: Rule, G: RngCore> Timeline<R, G> {
    /// Create a timeline whose root is a randomized `rows` x `cols` grid
    pub fn create(
        rows: usize,
        cols: usize,
        rule: R,
        initial_parameters: Parameters,
        mut rng: G,
    ) -> Result<Self, SimError> {
        let grid = engine::seed(rows, cols, &rule, &initial_parameters, &mut rng)?;
        Ok(Self::from_root(grid, rule, initial_parameters, rng))
    }

    /// Create a timeline rooted at an existing grid
    pub fn from_root(grid: Grid<R::Cell>, rule: R, initial_parameters: Parameters, rng: G) -> Self {
        let (rows, cols) = grid.dimensions();
        log::info!(
            "New {} timeline {}x{} (f: {}, p: {})",
            rule.name(),
            rows,
            cols,
            initial_parameters.ignition,
            initial_parameters.growth
        );
        Self {
            rule,
            rng,
            generations: vec![Generation::new(0, grid, initial_parameters)],
            cursor: 0,
            computed: 0,
        }
    }

    /// Move to the successor, computing it if it does not exist yet
    pub fn step_forward(&mut self) -> Result<&Generation<R::Cell>, SimError> {
        if self.has_next() {
            self.cursor += 1;
            return Ok(&self.generations[self.cursor]);
        }

        let current = &self.generations[self.cursor];
        let params = current.live;
        let grid = engine::step(&current.grid, &self.rule, &params, &mut self.rng)?;
        let next = Generation::new(current.index + 1, grid, params);
        log::debug!(
            "Computed generation {} (id {}, {} active cells)",
            next.index,
            next.id,
            next.grid.census(|cell| self.rule.is_counted(cell))
        );

        self.computed += 1;
        self.generations.push(next);
        self.cursor += 1;
        Ok(&self.generations[self.cursor])
    }

    /// Move to the predecessor. Saturates at the root.
    pub fn step_backward(&mut self) -> &Generation<R::Cell> {
        if self.has_prev() {
            self.cursor -= 1;
        }
        &self.generations[self.cursor]
    }

    /// Update a live parameter at the cursor and discard every successor
    /// computed under the old value. The current generation is kept as is.
    pub fn set_parameter(&mut self, name: ParameterName, value: f64) {
        self.generations[self.cursor].live.set(name, value);

        let keep = self.cursor + 1;
        if self.generations.len() > keep {
            let discarded = self.generations.len() - keep;
            self.generations.truncate(keep);
            log::info!(
                "Set {} = {} at generation {}, discarded {} cached generation(s)",
                name,
                value,
                self.current_index(),
                discarded
            );
        } else {
            log::debug!("Set {} = {} at generation {}", name, value, self.current_index());
        }
    }

    pub fn current(&self) -> &Generation<R::Cell> {
        &self.generations[self.cursor]
    }

    pub fn current_grid(&self) -> &Grid<R::Cell> {
        &self.current().grid
    }

    pub fn current_index(&self) -> u64 {
        self.current().index
    }

    /// Live parameters at the cursor
    pub fn current_parameters(&self) -> &Parameters {
        &self.current().live
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.generations.len()
    }

    pub fn has_prev(&self) -> bool {
        self.cursor > 0
    }

    /// Number of generations held, cached successors included
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Always false: a timeline holds at least its root
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// How many generations the transition engine has produced so far
    pub fn computed(&self) -> u64 {
        self.computed
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.current_grid().dimensions()
    }
}
