// Domain layer - Simulation core: cells, grids, rules, timeline
pub mod domain;

// Application layer - Playback control, pacing, configuration
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, ForestCell, ForestFire, Generation, Grid, Life, LifeCell, Parameters, Rule, SimError, Timeline};
pub use application::{Command, Controller, Event, Flow, Playback, SimulationConfig, TickClock};
