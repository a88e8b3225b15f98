mod cell;
mod error;
mod grid;
mod parameters;
mod rules;
pub mod engine;
pub mod timeline;

pub use cell::{Cell, ForestCell, LifeCell};
pub use error::SimError;
pub use grid::{Grid, MOORE_OFFSETS};
pub use parameters::{ParameterName, Parameters, UnknownParameter, DEFAULT_GROWTH, DEFAULT_IGNITION};
pub use rules::{Rule, ForestFire, Life, is_probable, LIFE_SEED_DENSITY};
pub use timeline::{Generation, Timeline};
